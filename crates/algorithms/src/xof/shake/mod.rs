//! SHAKE extendable output functions

use sha3::digest::{ExtendableOutput, Update, XofReader};

use super::ExtendableOutputFunction;
use crate::error::{Error, Result};

/// A SHAKE instance from the `sha3` crate together with its security level.
pub trait ShakeVariant: Default + Update + ExtendableOutput {
    const SECURITY_LEVEL: usize;
}

impl ShakeVariant for sha3::Shake128 {
    const SECURITY_LEVEL: usize = 128;
}

impl ShakeVariant for sha3::Shake256 {
    const SECURITY_LEVEL: usize = 256;
}

enum State<H: ExtendableOutput> {
    Absorbing(H),
    Squeezing(H::Reader),
}

/// SHAKE with an explicit absorb/squeeze state machine.
pub struct ShakeXof<H: ShakeVariant> {
    state: State<H>,
}

/// SHAKE128 XOF
pub type ShakeXof128 = ShakeXof<sha3::Shake128>;

/// SHAKE256 XOF
pub type ShakeXof256 = ShakeXof<sha3::Shake256>;

impl<H: ShakeVariant> ExtendableOutputFunction for ShakeXof<H> {
    fn new() -> Self {
        Self {
            state: State::Absorbing(H::default()),
        }
    }

    fn update(&mut self, data: &[u8]) -> Result<()> {
        match &mut self.state {
            State::Absorbing(hasher) => {
                hasher.update(data);
                Ok(())
            }
            State::Squeezing(_) => Err(Error::Processing {
                operation: "SHAKE",
                details: "cannot absorb after squeezing has started",
            }),
        }
    }

    fn finalize(&mut self) -> Result<()> {
        if let State::Absorbing(hasher) = &mut self.state {
            let reader = core::mem::take(hasher).finalize_xof();
            self.state = State::Squeezing(reader);
        }
        Ok(())
    }

    fn squeeze(&mut self, output: &mut [u8]) -> Result<()> {
        self.finalize()?;
        if let State::Squeezing(reader) = &mut self.state {
            reader.read(output);
        }
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        self.state = State::Absorbing(H::default());
        Ok(())
    }

    fn security_level() -> usize {
        H::SECURITY_LEVEL
    }
}
