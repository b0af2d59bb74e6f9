//! Error type definitions for lwekem operations

use thiserror::Error as ThisError;

/// Primary error type surfaced across crate boundaries.
///
/// Only structural and configuration failures are represented here. A
/// decapsulation that recovers the wrong shared secret is not an error.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Invalid parameter set or engine configuration
    #[error("invalid parameter: {context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Buffer or table allocation failed
    #[error("allocation failed: {context}: {message}")]
    AllocationFailed {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid key error
    #[error("invalid key: {context}: {message}")]
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// Invalid ciphertext error
    #[error("invalid ciphertext: {context}: {message}")]
    InvalidCiphertext {
        context: &'static str,
        message: String,
    },
}

/// Result type for lwekem operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its payload.
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::AllocationFailed { message, .. } => Self::AllocationFailed { context, message },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::InvalidCiphertext { message, .. } => Self::InvalidCiphertext { context, message },
        }
    }

    /// True for failures raised while validating parameters or building an engine.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}
