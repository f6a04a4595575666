//! Diaglang - render a line-oriented diagram language to box-drawing art
//!
//! A library for parsing the diaglang statement language (shapes,
//! connections, chains, fans, networks) and laying it out as aligned
//! monospaced text.
//!
//! # Quick Start
//!
//! ```rust
//! use diaglang::render;
//!
//! let ascii = render("Rectangle(A) connects to horizontal Triangle(B)").unwrap();
//! println!("{}", ascii);
//! ```
//!
//! # Advanced Usage
//!
//! For more control, classify statements yourself or configure a
//! default shape for bare identifiers:
//!
//! ```rust
//! use diaglang::prelude::*;
//!
//! let config = RenderConfig::new(Some(ShapeKind::Rectangle));
//! let statement = classify("start connects to horizontal finish", &config);
//! assert!(matches!(statement, Statement::Connection(_)));
//!
//! let ascii = render_with_config("start connects to horizontal finish", &config).unwrap();
//! assert!(ascii.contains("start"));
//! ```

pub mod core;
pub mod grammar;
pub mod render;

pub use crate::core::{
    ArrowType, Connection, ConnectionStyle, DiagramError, Orientation, RenderConfig, ShapeKind,
    ShapeTerm, TextBlock,
};
pub use crate::grammar::{classify, Statement, SyntaxError, SyntaxErrorKind};
pub use crate::render::Orchestrator;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        ArrowType, Connection, ConnectionStyle, DiagramError, Orientation, RenderConfig,
        ShapeKind, ShapeTerm, TextBlock,
    };
    pub use crate::grammar::{classify, Statement, SyntaxError, SyntaxErrorKind};
    pub use crate::render::Orchestrator;
    pub use crate::{render, render_with_config};
}

/// Render a diaglang source to its text output
///
/// Statements are rendered independently and joined with blank lines;
/// a leading `Title(...)` becomes a heading. Malformed connection
/// statements render as in-band `SYNTAX ERROR` text and never abort
/// the rest of the diagram.
///
/// # Example
/// ```rust
/// use diaglang::render;
///
/// let ascii = render("square").unwrap();
/// assert_eq!(ascii, "┌───┐\n│   │\n└───┘");
/// ```
pub fn render(input: &str) -> anyhow::Result<String> {
    render_with_config(input, &RenderConfig::default())
}

/// Render a diaglang source with a rendering configuration
///
/// `RenderConfig::default_shape` turns bare identifiers into labeled
/// shapes of that kind.
pub fn render_with_config(input: &str, config: &RenderConfig) -> anyhow::Result<String> {
    let orchestrator = Orchestrator::with_config(config.clone());
    Ok(orchestrator.render(input))
}
