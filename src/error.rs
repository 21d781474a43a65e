//! Error types for lobeplot.
//!
//! Loading is all-or-nothing: any of these errors leaves the previously
//! loaded dataset untouched.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for lobeplot operations.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Errors that can occur while loading or laying out a dataset.
#[derive(Debug, Error)]
pub enum PlotError {
    /// The requested data file does not exist
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// A line could not be turned into a sample
    #[error("Malformed data on line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    /// The input contained no samples
    #[error("The data file contains no samples")]
    EmptyDataset,

    /// The data extent along one axis is zero or too large to draw
    #[error("Data extent along the {axis} axis cannot be drawn")]
    DegenerateGeometry { axis: char },

    /// Any other I/O failure while reading the file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlotError {
    /// Create a MalformedLine error.
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedLine {
            line,
            reason: reason.into(),
        }
    }

    /// Create a FileNotFound error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }
}
