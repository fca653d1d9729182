//! Error types for sample decoding.

use std::fmt;

/// Result type for sample codec operations.
pub type VarintResult<T> = Result<T, VarintError>;

/// Errors that can occur while decoding variable-length samples.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum VarintError {
    /// The buffer ended before a terminating (non-continuation) byte.
    MalformedStream {
        /// Byte offset where the truncated sample started.
        position: usize,
        /// Number of bytes consumed for the sample before the buffer ran out.
        consumed: usize,
    },
}

impl fmt::Display for VarintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedStream { position, consumed } => {
                write!(
                    f,
                    "malformed stream: sample at byte {position} ended after {consumed} bytes without a terminating byte"
                )
            }
        }
    }
}

impl std::error::Error for VarintError {}
