//! Error types for loading, configuration, and report export
//!
//! The mining core itself returns plain values; empty results are normal
//! outputs. Errors arise only at the application boundary.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all I/O-facing operations
#[derive(Debug)]
pub enum MiningError {
    /// Failed to read the dataset file from the filesystem
    DatasetLoad {
        /// Path to the dataset file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Dataset file content doesn't match the expected tabular layout
    DatasetFormat {
        /// Path to the dataset file
        path: PathBuf,
        /// Description of what's wrong with the content
        reason: String,
    },

    /// Parameter validation failed before mining started
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to write the results report to disk
    ReportExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MiningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DatasetLoad { path, source } => {
                write!(f, "Failed to load dataset '{}': {source}", path.display())
            }
            Self::DatasetFormat { path, reason } => {
                write!(f, "Malformed dataset '{}': {reason}", path.display())
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ReportExport { path, source } => {
                write!(
                    f,
                    "Failed to write report to '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MiningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DatasetLoad { source, .. } | Self::ReportExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for fallible operations
pub type Result<T> = std::result::Result<T, MiningError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MiningError {
    MiningError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a dataset format error
pub fn dataset_format(path: &std::path::Path, reason: &impl ToString) -> MiningError {
    MiningError::DatasetFormat {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}
