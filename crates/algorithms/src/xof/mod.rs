//! Extendable Output Functions (XOF)
//!
//! SHAKE128 and SHAKE256 from the RustCrypto `sha3` crate behind a small
//! absorb-then-squeeze interface used by the samplers.

use crate::error::{validate, Result};

pub mod shake;

pub use shake::{ShakeXof, ShakeXof128, ShakeXof256};

/// Trait for extendable output functions
pub trait ExtendableOutputFunction {
    /// Creates a new instance of the XOF
    fn new() -> Self;

    /// Absorbs more input; fails once squeezing has started
    fn update(&mut self, data: &[u8]) -> Result<()>;

    /// Ends absorption. Idempotent.
    fn finalize(&mut self) -> Result<()>;

    /// Fills `output` with the next bytes of the stream, finalizing first if needed
    fn squeeze(&mut self, output: &mut [u8]) -> Result<()>;

    /// Squeezes the specified number of output bytes into a new vector
    fn squeeze_into_vec(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut out = vec![0u8; len];
        self.squeeze(&mut out)?;
        Ok(out)
    }

    /// Returns to the empty absorbing state
    fn reset(&mut self) -> Result<()>;

    /// Returns the security level in bits
    fn security_level() -> usize;

    /// Convenience method to generate output in a single call
    fn generate(data: &[u8], len: usize) -> Result<Vec<u8>>
    where
        Self: Sized,
    {
        validate::parameter(
            len > 0,
            "output_length",
            "XOF output length must be greater than 0",
        )?;

        let mut xof = Self::new();
        xof.update(data)?;
        xof.squeeze_into_vec(len)
    }
}
