//! Library error types
//!
//! These cover failures at the library seams (grammar, rendering, IO).
//! Syntax errors inside a diagram are not represented here: per the
//! language's error model they degrade to in-band `SYNTAX ERROR` text
//! blocks and never abort processing.

use thiserror::Error;

/// Errors surfaced by the diaglang library
#[derive(Error, Debug)]
pub enum DiagramError {
    #[error("Parse error: {message}")]
    Parse { message: String },

    #[error("Render error: {message}")]
    Render { message: String },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl DiagramError {
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let error = DiagramError::parse("unexpected token");
        let message = format!("{}", error);
        assert!(message.contains("Parse error"));
        assert!(message.contains("unexpected token"));
    }

    #[test]
    fn test_render_error_display() {
        let error = DiagramError::render("layout failed");
        let message = format!("{}", error);
        assert!(message.contains("Render error"));
        assert!(message.contains("layout failed"));
    }

    #[test]
    fn test_io_error_conversion() {
        use std::io;
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing.diag");
        let error: DiagramError = io_err.into();
        let message = format!("{}", error);
        assert!(message.contains("IO error"));
        assert!(message.contains("missing.diag"));
    }
}
