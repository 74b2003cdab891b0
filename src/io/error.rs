//! Error types for grid generation, rendering and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum MondrianError {
    /// No cell size divides both canvas dimensions within the search tolerance
    NoCommonDivisor {
        /// Canvas width in pixels
        width: usize,
        /// Canvas height in pixels
        height: usize,
        /// Search tolerance that was exhausted
        tolerance: usize,
    },

    /// Too few regions to color the minimum number of accents
    ///
    /// Occurs when either:
    /// - Partitioning produced fewer than two regions
    /// - The split count is too small to allow two accent regions
    InsufficientRegions {
        /// Number of regions discovered
        regions: usize,
        /// Split count drawn for the run
        split_count: usize,
    },

    /// Partitioner ran out of attempts before reaching its split target
    NonTerminatingPartition {
        /// Rejected attempts made before giving up
        attempts: usize,
        /// Splits successfully placed
        placed: usize,
        /// Splits requested
        target: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Pipeline was driven into an impossible state
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl MondrianError {
    /// Whether a fresh random draw might succeed where this run failed
    ///
    /// Divisor and parameter failures depend only on the inputs, so retrying
    /// them cannot help.
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::InsufficientRegions { .. } | Self::NonTerminatingPartition { .. }
        )
    }
}

impl fmt::Display for MondrianError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCommonDivisor {
                width,
                height,
                tolerance,
            } => {
                write!(
                    f,
                    "Could not find a common divisor of width ({width}px) and height ({height}px) within the tolerance of {tolerance}px"
                )
            }
            Self::InsufficientRegions {
                regions,
                split_count,
            } => {
                write!(
                    f,
                    "Insufficient regions to color: {regions} region(s) discovered from {split_count} split(s)"
                )
            }
            Self::NonTerminatingPartition {
                attempts,
                placed,
                target,
            } => {
                write!(
                    f,
                    "Partition gave up after {attempts} rejected attempts ({placed}/{target} splits placed)"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for MondrianError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, MondrianError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MondrianError {
    MondrianError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> MondrianError {
    MondrianError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
