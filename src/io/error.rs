//! Error types for kolam generation, rule-set exchange and file output

use std::fmt;
use std::path::PathBuf;

/// Main error type for all kolam operations
#[derive(Debug)]
pub enum KolamError {
    /// Requested grid size lies outside the supported range
    InvalidSize {
        /// The rejected size
        size: usize,
        /// Smallest supported size
        min: usize,
        /// Largest supported size
        max: usize,
    },

    /// A grid cell references an id that is neither empty nor a catalog motif
    UnknownMotifReference {
        /// The offending id
        id: i64,
        /// Row of the offending cell
        row: usize,
        /// Column of the offending cell
        col: usize,
    },

    /// No motif satisfies the connectors around a cell and the neutral
    /// motif would leave a broken seam
    ///
    /// Only raised under the strict fallback policy.
    CandidateSetExhausted {
        /// Row in the working quadrant
        row: usize,
        /// Column in the working quadrant
        col: usize,
    },

    /// A rule set could not be turned into a pattern
    InvalidRuleSet {
        /// Description of what is inconsistent
        reason: String,
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

    /// JSON encoding or decoding failed
    Serialization {
        /// Underlying serde error
        source: serde_json::Error,
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
}

impl fmt::Display for KolamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { size, min, max } => {
                write!(f, "Grid size {size} is unsupported (expected {min}..={max})")
            }
            Self::UnknownMotifReference { id, row, col } => {
                write!(f, "Cell ({row}, {col}) references unknown motif {id}")
            }
            Self::CandidateSetExhausted { row, col } => {
                write!(
                    f,
                    "No compatible motif for quadrant cell ({row}, {col}) and the neutral motif breaks the seam"
                )
            }
            Self::InvalidRuleSet { reason } => {
                write!(f, "Invalid rule set: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Serialization { source } => {
                write!(f, "JSON serialization failed: {source}")
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
        }
    }
}

impl std::error::Error for KolamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialization { source } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for kolam results
pub type Result<T> = std::result::Result<T, KolamError>;

impl From<serde_json::Error> for KolamError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization { source: err }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> KolamError {
    KolamError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an unknown motif error for a cell
pub fn unknown_motif(id: impl Into<i64>, row: usize, col: usize) -> KolamError {
    KolamError::UnknownMotifReference {
        id: id.into(),
        row,
        col,
    }
}

