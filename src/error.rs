//! Error types for Datavis.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Datavis operations.
pub type Result<T> = std::result::Result<T, VisualizerError>;

/// Errors that can occur while locating and loading data files.
#[derive(Debug, Error)]
pub enum VisualizerError {
    /// The data directory does not exist.
    #[error("Data directory not found: {}", .path.display())]
    DataDirMissing {
        /// Directory that was looked for.
        path: PathBuf,
    },

    /// Failed to open a file.
    #[error("Failed to open file: {}", .path.display())]
    FileOpen {
        /// File that failed to open.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a CSV file.
    #[error("CSV error: {0}")]
    Csv(#[from] polars::error::PolarsError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl VisualizerError {
    /// Create a DataDirMissing error.
    pub fn data_dir_missing(path: impl Into<PathBuf>) -> Self {
        Self::DataDirMissing { path: path.into() }
    }

    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }
}

/// Failures raised by the chart primitives themselves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlotError {
    /// The requested column is not part of the dataset.
    #[error("KeyError: '{column}'")]
    MissingColumn {
        /// Requested name.
        column: String,
    },

    /// A numeric axis was given a column holding non-numeric data.
    #[error("could not convert column '{column}' to numeric")]
    NonNumeric {
        /// Offending column.
        column: String,
    },
}

impl PlotError {
    /// Create a MissingColumn error.
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }

    /// Create a NonNumeric error.
    pub fn non_numeric(column: impl Into<String>) -> Self {
        Self::NonNumeric {
            column: column.into(),
        }
    }
}

/// Outcome of a failed "generate" action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// Input rejected before plotting, with a message meant for the user.
    #[error("{0}")]
    Validation(String),

    /// The chart primitive failed; its error is passed through untouched.
    #[error(transparent)]
    Render(#[from] PlotError),
}
