//! Per-frame geometry built from a snapshot

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::snapshot::Snapshot;

const LASER_SEGMENTS: u32 = 8;
const PARTICLE_SEGMENTS: u32 = 6;
/// Exploding laser disc relative to the bolt radius
const LASER_EXPLOSION_SCALE: f32 = 3.0;
/// Lives icons in the top-left corner
const LIFE_ICON_RADIUS: f32 = 7.5;
const LIFE_ICON_SPACING: f32 = 27.0;
const HUD_FONT_SIZE: f32 = 20.0;
const STATUS_FONT_SIZE: f32 = 36.0;
/// Status line height as a fraction of the playfield
const STATUS_HEIGHT: f32 = 0.75;

/// Horizontal anchor of a text item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Centre,
    Right,
}

/// A line of text at a playfield position (baseline, y down)
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub pos: Vec2,
    pub size: f32,
    pub align: TextAlign,
    pub color: [f32; 4],
}

/// Geometry for one frame
#[derive(Debug, Clone, Default)]
pub struct Frame {
    /// Line list (vertex pairs): ship, flame outline, asteroids, life icons
    pub lines: Vec<Vertex>,
    /// Triangle list: lasers, particles, thruster flame
    pub triangles: Vec<Vertex>,
    /// Score, high score and the fading status line
    pub texts: Vec<TextItem>,
}

impl Frame {
    pub fn build(snapshot: &Snapshot) -> Self {
        let mut frame = Frame::default();

        let ship = &snapshot.ship;
        if ship.visible {
            if ship.thrusting {
                let flame = shapes::flame_points(ship.pos, ship.radius, ship.angle);
                frame.triangles.extend(shapes::triangle(flame, colors::THRUST_INNER));
                frame.lines.extend(shapes::closed_outline(&flame, colors::THRUST_OUTER));
            }
            let hull = shapes::ship_points(ship.pos, ship.radius, ship.angle);
            frame.lines.extend(shapes::closed_outline(&hull, colors::SHIP));
        }

        for particle in &snapshot.particles {
            frame.triangles.extend(shapes::circle(
                particle.pos,
                particle.radius,
                colors::PARTICLE,
                PARTICLE_SEGMENTS,
            ));
        }

        for laser in &snapshot.lasers {
            let (radius, color) = if laser.exploding {
                (laser.radius * LASER_EXPLOSION_SCALE, colors::LASER_EXPLOSION)
            } else {
                (laser.radius, colors::LASER)
            };
            frame
                .triangles
                .extend(shapes::circle(laser.pos, radius, color, LASER_SEGMENTS));
        }

        for asteroid in &snapshot.asteroids {
            let points =
                shapes::asteroid_points(asteroid.pos, asteroid.radius, asteroid.angle, &asteroid.offsets);
            frame
                .lines
                .extend(shapes::closed_outline(&points, colors::ASTEROID));
        }

        for i in 0..snapshot.lives {
            let pos = Vec2::new(
                LIFE_ICON_SPACING * (i as f32 + 1.0),
                LIFE_ICON_SPACING,
            );
            let icon = shapes::ship_points(pos, LIFE_ICON_RADIUS, std::f32::consts::FRAC_PI_2);
            frame.lines.extend(shapes::closed_outline(&icon, colors::SHIP));
        }

        frame.push_hud(snapshot);
        frame
    }

    fn push_hud(&mut self, snapshot: &Snapshot) {
        let field = snapshot.playfield;
        self.texts.push(TextItem {
            text: format!("Best {}", snapshot.high_score),
            pos: Vec2::new(field.x * 0.5, LIFE_ICON_SPACING + HUD_FONT_SIZE * 0.5),
            size: HUD_FONT_SIZE,
            align: TextAlign::Centre,
            color: colors::TEXT,
        });
        self.texts.push(TextItem {
            text: snapshot.score.to_string(),
            pos: Vec2::new(field.x - LIFE_ICON_SPACING, LIFE_ICON_SPACING + HUD_FONT_SIZE * 0.5),
            size: HUD_FONT_SIZE,
            align: TextAlign::Right,
            color: colors::TEXT,
        });

        if let Some(status) = &snapshot.status {
            if status.alpha > 0.0 {
                self.texts.push(TextItem {
                    text: status.text.clone(),
                    pos: Vec2::new(field.x * 0.5, field.y * STATUS_HEIGHT),
                    size: STATUS_FONT_SIZE,
                    align: TextAlign::Centre,
                    color: colors::faded(colors::STATUS, status.alpha),
                });
            }
        }
    }

    /// No geometry to draw (text is not counted)
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.triangles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::StatusText;
    use crate::persistence::MemoryStore;
    use crate::{Game, Tuning};

    #[test]
    fn test_frame_covers_entities() {
        let mut game = Game::new(21, Tuning::default(), MemoryStore::new());
        game.step();
        let snap = game.snapshot();
        let frame = Frame::build(&snap);

        let asteroid_lines: usize = snap.asteroids.iter().map(|a| a.vertex_count * 2).sum();
        let lives_lines = snap.lives as usize * 6;
        let ship_lines = if snap.ship.visible { 6 } else { 0 };
        assert_eq!(frame.lines.len(), asteroid_lines + lives_lines + ship_lines);
        assert!(frame.triangles.is_empty());
    }

    #[test]
    fn test_hidden_ship_not_drawn() {
        let mut game = Game::new(22, Tuning::default(), MemoryStore::new());
        game.step();
        let mut snap = game.snapshot();
        snap.asteroids.clear();
        snap.lives = 0;

        snap.ship.visible = false;
        assert!(Frame::build(&snap).is_empty());

        snap.ship.visible = true;
        snap.ship.thrusting = true;
        let frame = Frame::build(&snap);
        assert_eq!(frame.lines.len(), 12);
        assert_eq!(frame.triangles.len(), 3);
    }

    #[test]
    fn test_hud_text() {
        let mut game = Game::new(23, Tuning::default(), MemoryStore::new());
        game.step();
        let mut snap = game.snapshot();
        snap.score = 1250;
        snap.high_score = 4000;

        snap.status = Some(StatusText {
            text: "Level 3".to_string(),
            alpha: 0.25,
        });
        let frame = Frame::build(&snap);
        assert_eq!(frame.texts.len(), 3);
        assert!(frame.texts.iter().any(|t| t.text == "1250" && t.align == TextAlign::Right));
        assert!(frame.texts.iter().any(|t| t.text == "Best 4000"));
        let status = frame.texts.iter().find(|t| t.text == "Level 3").unwrap();
        assert_eq!(status.color, colors::faded(colors::STATUS, 0.25));
        assert_eq!(status.pos, Vec2::new(snap.playfield.x * 0.5, snap.playfield.y * STATUS_HEIGHT));

        // Fully faded status is dropped
        snap.status = Some(StatusText {
            text: "Level 3".to_string(),
            alpha: 0.0,
        });
        assert_eq!(Frame::build(&snap).texts.len(), 2);

        snap.status = None;
        assert_eq!(Frame::build(&snap).texts.len(), 2);
    }
}
