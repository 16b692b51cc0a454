//! Presentation geometry
//!
//! Turns a [`crate::Snapshot`] into vertex lists and text items. No draw
//! calls live here; `platform::web` paints frames onto a 2D canvas.

pub mod frame;
pub mod shapes;
pub mod vertex;

pub use frame::{Frame, TextAlign, TextItem};
pub use vertex::{Vertex, colors};
