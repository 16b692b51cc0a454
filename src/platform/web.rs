//! Browser front end
//!
//! Wires the game to a `<canvas id="canvas">`: keyboard events go through
//! [`InputState`], `requestAnimationFrame` drives [`FixedStep`], and each
//! frame's [`Frame`] is painted with the 2D canvas API. High scores persist
//! in LocalStorage.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

use super::{FixedStep, InputState, Key, KeyEvent};
use crate::persistence::LocalStore;
use crate::renderer::{Frame, TextAlign, Vertex, colors};
use crate::{Game, Tuning};

const CANVAS_ID: &str = "canvas";
const LINE_WIDTH: f64 = 1.5;

struct WebGame {
    game: Game<LocalStore>,
    input: InputState,
    timer: FixedStep,
    ctx: CanvasRenderingContext2d,
    /// Canvas pixels per playfield unit
    scale: (f64, f64),
    last_time: f64,
}

impl WebGame {
    fn update(&mut self, time: f64) {
        let dt = if self.last_time > 0.0 {
            ((time - self.last_time) / 1000.0) as f32
        } else {
            self.timer.dt()
        };
        self.last_time = time;

        for _ in 0..self.timer.advance(dt) {
            self.game.step();
        }
    }

    fn render(&self) {
        let snapshot = self.game.snapshot();
        let frame = Frame::build(&snapshot);
        let ctx = &self.ctx;

        let _ = ctx.set_transform(self.scale.0, 0.0, 0.0, self.scale.1, 0.0, 0.0);
        ctx.set_fill_style_str(&colors::to_css(colors::BACKGROUND));
        ctx.fill_rect(
            0.0,
            0.0,
            snapshot.playfield.x as f64,
            snapshot.playfield.y as f64,
        );

        self.stroke_lines(&frame.lines);
        self.fill_triangles(&frame.triangles);

        for text in &frame.texts {
            ctx.set_fill_style_str(&colors::to_css(text.color));
            ctx.set_font(&format!("{}px monospace", text.size));
            ctx.set_text_align(match text.align {
                TextAlign::Left => "left",
                TextAlign::Centre => "center",
                TextAlign::Right => "right",
            });
            let _ = ctx.fill_text(&text.text, text.pos.x as f64, text.pos.y as f64);
        }
    }

    /// One path per run of same-colored segments
    fn stroke_lines(&self, lines: &[Vertex]) {
        let ctx = &self.ctx;
        ctx.set_line_width(LINE_WIDTH);
        let mut current = None;
        for pair in lines.chunks_exact(2) {
            let color = pair[0].color;
            if current != Some(color) {
                if current.is_some() {
                    ctx.stroke();
                }
                ctx.set_stroke_style_str(&colors::to_css(color));
                ctx.begin_path();
                current = Some(color);
            }
            ctx.move_to(pair[0].position[0] as f64, pair[0].position[1] as f64);
            ctx.line_to(pair[1].position[0] as f64, pair[1].position[1] as f64);
        }
        if current.is_some() {
            ctx.stroke();
        }
    }

    fn fill_triangles(&self, triangles: &[Vertex]) {
        let ctx = &self.ctx;
        let mut current = None;
        for tri in triangles.chunks_exact(3) {
            let color = tri[0].color;
            if current != Some(color) {
                if current.is_some() {
                    ctx.fill();
                }
                ctx.set_fill_style_str(&colors::to_css(color));
                ctx.begin_path();
                current = Some(color);
            }
            ctx.move_to(tri[0].position[0] as f64, tri[0].position[1] as f64);
            ctx.line_to(tri[1].position[0] as f64, tri[1].position[1] as f64);
            ctx.line_to(tri[2].position[0] as f64, tri[2].position[1] as f64);
            ctx.close_path();
        }
        if current.is_some() {
            ctx.fill();
        }
    }

    fn handle_key(&mut self, event: KeyEvent) {
        self.input.handle(event, &mut self.game);
    }
}

/// Start the game on the page's canvas
#[wasm_bindgen]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    log::info!("Rock Drift starting...");

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas: HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| JsValue::from_str("canvas element not found"))?
        .dyn_into()
        .map_err(|_| JsValue::from_str("#canvas is not a canvas"))?;

    let tuning = Tuning::default();

    // Backing store follows the CSS size and device pixel ratio
    let dpr = window.device_pixel_ratio();
    let css_width = match canvas.client_width() {
        0 => tuning.playfield_width as f64,
        w => w as f64,
    };
    let css_height = match canvas.client_height() {
        0 => tuning.playfield_height as f64,
        h => h as f64,
    };
    canvas.set_width((css_width * dpr) as u32);
    canvas.set_height((css_height * dpr) as u32);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into()
        .map_err(|_| JsValue::from_str("not a 2d context"))?;

    let scale = (
        canvas.width() as f64 / tuning.playfield_width as f64,
        canvas.height() as f64 / tuning.playfield_height as f64,
    );
    let seed = js_sys::Date::now() as u64;
    let timer = FixedStep::new(tuning.tick_dt());

    let game = Rc::new(RefCell::new(WebGame {
        game: Game::new(seed, tuning, LocalStore::new()),
        input: InputState::new(),
        timer,
        ctx,
        scale,
        last_time: 0.0,
    }));

    setup_keyboard(&window, &game)?;
    setup_visibility(&document, &game)?;
    request_animation_frame(game);

    Ok(())
}

fn setup_keyboard(window: &web_sys::Window, game: &Rc<RefCell<WebGame>>) -> Result<(), JsValue> {
    for (name, pressed) in [("keydown", true), ("keyup", false)] {
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let Some(key) = Key::from_code(&event.code()) else {
                return;
            };
            // Keep arrows and space from scrolling the page
            event.prevent_default();
            let event = if pressed {
                KeyEvent::Pressed(key)
            } else {
                KeyEvent::Released(key)
            };
            game.borrow_mut().handle_key(event);
        });
        window.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

/// Drop accumulated time while the tab is hidden so it does not replay
fn setup_visibility(
    document: &web_sys::Document,
    game: &Rc<RefCell<WebGame>>,
) -> Result<(), JsValue> {
    let game = game.clone();
    let document_clone = document.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
        if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
            let mut g = game.borrow_mut();
            g.timer.reset();
            g.last_time = 0.0;
        }
    });
    document.add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn request_animation_frame(game: Rc<RefCell<WebGame>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move |time: f64| {
        game_loop(game, time);
    });
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}

fn game_loop(game: Rc<RefCell<WebGame>>, time: f64) {
    {
        let mut g = game.borrow_mut();
        g.update(time);
        g.render();
    }

    request_animation_frame(game);
}
