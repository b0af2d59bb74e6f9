//! Error handling for ring arithmetic and sampling primitives

use std::borrow::Cow;
use std::fmt;

use lwekem_api::{Error as CoreError, Result as CoreResult};

/// The error type for lwekem primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error; fatal when raised during construction
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Table or buffer allocation failure
    Allocation {
        /// Structure being allocated
        context: &'static str,
        /// Number of elements requested
        requested: usize,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<R: Into<Cow<'static, str>>>(name: &'static str, reason: R) -> Self {
        Error::Parameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result type for lwekem primitives
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::Allocation { context, requested } => {
                write!(
                    f,
                    "Memory allocation failed for {} ({} elements)",
                    context, requested
                )
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: name,
                message: reason.into_owned(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Allocation { context, requested } => CoreError::AllocationFailed {
                context,
                message: format!("{} elements", requested),
            },
        }
    }
}

/// Convert a primitives result to a core result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.map_err(|e| CoreError::from(e).with_context(ctx))
}

pub mod validate;
