//! Core types shared across the parsing and rendering pipeline.

mod block;
mod error;
pub mod logging;
mod types;

pub use block::{display_width, TextBlock};
pub use error::DiagramError;
pub use types::{
    ArrowType, Connection, ConnectionStyle, Orientation, RenderConfig, ShapeKind, ShapeTerm,
};
