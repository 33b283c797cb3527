//! Error handling for textable
//!
//! This module provides a unified error type and result type for all
//! table operations, plus the non-fatal warnings collected while a table
//! is built and rendered.

use std::fmt;

use thiserror::Error;

use crate::core::range::{Axis, CellPos};

/// Table error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    /// A range addressed a row or column outside the table
    #[error("Index error: {axis} index {index} out of range (size {len})")]
    IndexError {
        axis: Axis,
        index: usize,
        len: usize,
    },
    /// Overlapping merge regions, or a merge over non-empty cells
    #[error("Conflict error: {message}")]
    ConflictError { message: String },
    /// Problem only detectable once the final table shape is known
    #[error("Render error: {message}")]
    RenderError { message: String },
    /// Invalid input (bad style value, ragged rows, ...)
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
    /// IO error (for file operations)
    #[error("IO error: {message}")]
    IoError { message: String },
}

/// Coarse classification of a [`TableError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Index,
    Conflict,
    Render,
    InvalidInput,
    Io,
}

impl TableError {
    /// The kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TableError::IndexError { .. } => ErrorKind::Index,
            TableError::ConflictError { .. } => ErrorKind::Conflict,
            TableError::RenderError { .. } => ErrorKind::Render,
            TableError::InvalidInput { .. } => ErrorKind::InvalidInput,
            TableError::IoError { .. } => ErrorKind::Io,
        }
    }
}

impl From<std::io::Error> for TableError {
    fn from(err: std::io::Error) -> Self {
        TableError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type for table operations
pub type TableResult<T> = Result<T, TableError>;

/// Non-fatal issue noticed while building or rendering a table
#[derive(Debug, Clone, PartialEq)]
pub struct TableWarning {
    pub message: String,
    pub position: Option<CellPos>,
    pub suggestion: Option<String>,
}

impl TableWarning {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            position: None,
            suggestion: None,
        }
    }

    pub fn at(message: impl Into<String>, position: CellPos) -> Self {
        Self {
            message: message.into(),
            position: Some(position),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for TableWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(pos) = self.position {
            write!(f, "Warning at cell {}: {}", pos, self.message)?;
        } else {
            write!(f, "Warning: {}", self.message)?;
        }
        if let Some(ref sug) = self.suggestion {
            write!(f, " ({})", sug)?;
        }
        Ok(())
    }
}

/// Rendered markup with any warnings gathered along the way
#[derive(Debug, Clone)]
pub struct RenderOutput {
    /// The LaTeX source
    pub content: String,
    /// Any warnings generated while building or rendering the table
    pub warnings: Vec<TableWarning>,
}

impl RenderOutput {
    pub fn new(content: String) -> Self {
        Self {
            content,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(content: String, warnings: Vec<TableWarning>) -> Self {
        Self { content, warnings }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

// Convenience constructors for errors
impl TableError {
    pub fn index(axis: Axis, index: usize, len: usize) -> Self {
        TableError::IndexError { axis, index, len }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        TableError::ConflictError {
            message: message.into(),
        }
    }

    pub fn render(message: impl Into<String>) -> Self {
        TableError::RenderError {
            message: message.into(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        TableError::InvalidInput {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_error_display() {
        let err = TableError::index(Axis::Row, 7, 3);
        let msg = err.to_string();
        assert!(msg.contains("Index error"));
        assert!(msg.contains("row index 7"));
        assert!(msg.contains("size 3"));
        assert_eq!(err.kind(), ErrorKind::Index);
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(TableError::conflict("x").kind(), ErrorKind::Conflict);
        assert_eq!(TableError::render("x").kind(), ErrorKind::Render);
        assert_eq!(TableError::invalid("x").kind(), ErrorKind::InvalidInput);

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert_eq!(TableError::from(io).kind(), ErrorKind::Io);
    }

    #[test]
    fn test_warning_display() {
        let warn = TableWarning::at("special character '&'", CellPos::new(1, 2))
            .with_suggestion("use escape_special()");
        let msg = warn.to_string();
        assert!(msg.contains("(1, 2)"));
        assert!(msg.contains("escape_special"));
    }

    #[test]
    fn test_render_output() {
        let output = RenderOutput::new("x".to_string());
        assert!(!output.has_warnings());

        let output_with_warn =
            RenderOutput::with_warnings("x".to_string(), vec![TableWarning::new("careful")]);
        assert!(output_with_warn.has_warnings());
    }
}
