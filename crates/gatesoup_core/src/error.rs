//! Error types for gatesoup_core.
//!
//! The core has almost no failure modes: node arithmetic is reduced into
//! range before use and allocation failure aborts. What remains are
//! malformed requests from the caller.

use thiserror::Error;

/// Main error type for core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Requested genome cannot be addressed with 31-bit targets
    #[error("Invalid genome: {0}")]
    InvalidGenome(String),

    /// Two genomes that must line up word for word do not
    #[error("Genome length mismatch: expected {expected} words, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    /// Generic error with context
    #[error("{context}: {source}")]
    Context {
        context: String,
        source: Box<CoreError>,
    },
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    /// Creates a new invalid genome error.
    #[must_use]
    pub fn invalid_genome<S: Into<String>>(msg: S) -> Self {
        Self::InvalidGenome(msg.into())
    }

    /// Wraps an error with additional context.
    #[must_use]
    pub fn with_context<S: Into<String>>(self, context: S) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }
}
