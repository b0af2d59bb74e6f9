//! Validation utilities for KEM operations

use super::{Error, Result};

/// Validate a configuration value
pub fn configuration(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::Configuration { name, reason });
    }
    Ok(())
}

/// Validate key format
pub fn key(condition: bool, key_type: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidKey { key_type, reason });
    }
    Ok(())
}

/// Validate ciphertext format
pub fn ciphertext(condition: bool, algorithm: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidCiphertext { algorithm, reason });
    }
    Ok(())
}

/// Exact-length check surfaced as a primitive length error
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    lwekem_algorithms::validate::length(context, actual, expected).map_err(Error::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guards_pass_and_fail() {
        assert!(configuration(true, "eta", "bad").is_ok());
        assert!(matches!(
            configuration(false, "eta", "bad"),
            Err(Error::Configuration { name: "eta", .. })
        ));
        assert!(matches!(
            key(false, "PublicKey", "rank mismatch"),
            Err(Error::InvalidKey { .. })
        ));
        assert!(matches!(
            ciphertext(false, "LWEKEM-128", "rank mismatch"),
            Err(Error::InvalidCiphertext { .. })
        ));
        assert!(matches!(length("Ciphertext", 3, 4), Err(Error::Primitive(_))));
    }
}
