//! Error handling for KEM operations

use lwekem_algorithms::error::Error as PrimitiveError;
use lwekem_api::error::Error as CoreError;
use thiserror::Error as ThisError;

/// Error type for KEM operations
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Failure in ring arithmetic, transforms or sampling
    #[error("primitive error: {0}")]
    Primitive(#[from] PrimitiveError),

    /// Parameter set rejected at construction
    #[error("invalid configuration for {name}: {reason}")]
    Configuration {
        name: &'static str,
        reason: &'static str,
    },

    /// Invalid key format
    #[error("invalid {key_type}: {reason}")]
    InvalidKey {
        key_type: &'static str,
        reason: &'static str,
    },

    /// Invalid ciphertext format
    #[error("invalid ciphertext for {algorithm}: {reason}")]
    InvalidCiphertext {
        algorithm: &'static str,
        reason: &'static str,
    },
}

/// Result type for KEM operations
pub type Result<T> = core::result::Result<T, Error>;

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::Configuration { name, reason } => CoreError::InvalidParameter {
                context: name,
                message: reason.to_string(),
            },
            Error::InvalidKey { key_type, reason } => CoreError::InvalidKey {
                context: key_type,
                message: reason.to_string(),
            },
            Error::InvalidCiphertext { algorithm, reason } => CoreError::InvalidCiphertext {
                context: algorithm,
                message: reason.to_string(),
            },
        }
    }
}

pub mod validate;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_errors_keep_their_kind() {
        let err: Error = PrimitiveError::Length {
            context: "PublicKey",
            expected: 2080,
            actual: 12,
        }
        .into();
        match CoreError::from(err) {
            CoreError::InvalidLength {
                expected, actual, ..
            } => {
                assert_eq!(expected, 2080);
                assert_eq!(actual, 12);
            }
            other => panic!("unexpected conversion: {:?}", other),
        }
    }

    #[test]
    fn configuration_maps_to_invalid_parameter() {
        let err = Error::Configuration {
            name: "module_rank",
            reason: "rank must be 2, 3 or 4",
        };
        assert_eq!(
            err.to_string(),
            "invalid configuration for module_rank: rank must be 2, 3 or 4"
        );
        assert!(CoreError::from(err).is_configuration());
    }

    #[test]
    fn ciphertext_errors_convert() {
        let core: CoreError = Error::InvalidCiphertext {
            algorithm: "LWEKEM-128",
            reason: "parameter set mismatch",
        }
        .into();
        assert!(matches!(core, CoreError::InvalidCiphertext { .. }));
    }
}
