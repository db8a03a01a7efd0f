//! Error types for tabviz operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tabviz operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for surface or plot.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// `show` was called before a graph strategy was selected.
    #[error("no graph selected: call set_graph(...) before show()")]
    GraphNotSet,

    /// A column selector did not match any column in the data frame.
    #[error("column not found: {0}")]
    MissingColumn(String),

    /// Empty data provided where non-empty is required.
    #[error("Empty data provided")]
    EmptyData,

    /// Scale domain error (e.g., degenerate min/max).
    #[error("Scale domain error: {0}")]
    ScaleDomain(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            width: 0,
            height: 100,
        };
        assert!(err.to_string().contains("Invalid dimensions"));
    }

    #[test]
    fn test_graph_not_set_mentions_setup_step() {
        let err = Error::GraphNotSet;
        assert!(err.to_string().contains("set_graph"));
    }

    #[test]
    fn test_missing_column_names_column() {
        let err = Error::MissingColumn("value".to_string());
        assert!(err.to_string().contains("value"));
    }
}
