//! sampling.rs - Deterministic sampling from a seeded XOF stream
//!
//! An [`EntropySampler`] is a pure function of the bytes it was initialised
//! with: the same seed always yields the same stream, and the read position
//! only moves forward.

use super::modular::{Modulus, MAX_MODULUS};
use super::polynomial::RingElement;
use crate::error::{validate, Error, Result};
use crate::xof::{ExtendableOutputFunction, ShakeXof128, ShakeXof256};

/// Largest supported binomial width; `2 * eta` bits must fit in a `u32`.
pub const MAX_ETA: u32 = 16;

/// Seeded byte stream with uniform and centered-binomial samplers.
pub struct EntropySampler<X: ExtendableOutputFunction = ShakeXof256> {
    xof: X,
}

/// Sampler used to expand public matrices
pub type MatrixSampler = EntropySampler<ShakeXof128>;

/// Sampler used for secret and error noise
pub type NoiseSampler = EntropySampler<ShakeXof256>;

impl<X: ExtendableOutputFunction> EntropySampler<X> {
    /// Starts a stream keyed by `seed`.
    pub fn init(seed: &[u8]) -> Result<Self> {
        Self::init_parts(&[seed])
    }

    /// Starts a stream keyed by the concatenation of `parts`.
    pub fn init_parts(parts: &[&[u8]]) -> Result<Self> {
        let mut xof = X::new();
        for part in parts {
            xof.update(part)?;
        }
        xof.finalize()?;
        Ok(Self { xof })
    }

    /// Starts the stream for element `index` of a batch: `seed || index_le16`.
    ///
    /// Distinct indices under one seed give independent streams.
    pub fn derive(seed: &[u8], index: u16) -> Result<Self> {
        Self::init_parts(&[seed, &index.to_le_bytes()])
    }

    /// Next `n` bytes of the stream
    pub fn squeeze(&mut self, n: usize) -> Result<Vec<u8>> {
        self.xof.squeeze_into_vec(n)
    }

    /// Fills `out` with the next bytes of the stream
    pub fn fill(&mut self, out: &mut [u8]) -> Result<()> {
        self.xof.squeeze(out)
    }

    /// One centered binomial value in `[-eta, eta]`, mapped into `[0, q)`.
    ///
    /// Consumes `ceil(2 * eta / 8)` bytes: the first `eta` bits are added,
    /// the next `eta` subtracted.
    pub fn sample_binomial_coefficient(&mut self, eta: u32, modulus: &Modulus) -> Result<u32> {
        validate::parameter(
            (1..=MAX_ETA).contains(&eta),
            "eta",
            "binomial width must be in 1..=16",
        )?;
        let bits = self.next_bits(eta)?;
        let mask = (1u64 << eta) - 1;
        let a = (bits & mask).count_ones() as i64;
        let b = ((bits >> eta) & mask).count_ones() as i64;
        Ok(modulus.from_signed(a - b))
    }

    fn next_bits(&mut self, eta: u32) -> Result<u64> {
        let len = (2 * eta as usize).div_ceil(8);
        let mut buf = [0u8; 4];
        self.fill(&mut buf[..len])?;
        Ok(u32::from_le_bytes(buf) as u64)
    }

    /// Uniform value in `[0, q)` by masked rejection sampling.
    ///
    /// Each candidate is four big-endian bytes masked to the smallest power of
    /// two not below `q`; candidates `>= q` are discarded, so there is no
    /// modulo bias.
    pub fn sample_uniform(&mut self, q: u32) -> Result<u32> {
        validate::parameter(q >= 1, "modulus", "modulus must be positive")?;
        validate::parameter(q <= MAX_MODULUS, "modulus", "modulus must be at most 2^31")?;
        let mask = q.next_power_of_two() - 1;
        let mut buf = [0u8; 4];
        loop {
            self.fill(&mut buf)?;
            let candidate = u32::from_be_bytes(buf) & mask;
            if candidate < q {
                return Ok(candidate);
            }
        }
    }

    /// `n` independent binomial coefficients
    pub fn sample_binomial_poly(
        &mut self,
        eta: u32,
        n: usize,
        modulus: Modulus,
    ) -> Result<RingElement> {
        let coeffs = (0..n)
            .map(|_| self.sample_binomial_coefficient(eta, &modulus))
            .collect::<Result<Vec<_>>>()?;
        RingElement::from_coeffs(coeffs, modulus)
    }

    /// `n` coefficients, each rejection-sampled on its own
    pub fn sample_uniform_poly(&mut self, n: usize, modulus: Modulus) -> Result<RingElement> {
        let q = modulus.value();
        let coeffs = (0..n)
            .map(|_| self.sample_uniform(q))
            .collect::<Result<Vec<_>>>()?;
        RingElement::from_coeffs(coeffs, modulus)
    }
}

/// Samples `count` binomial elements, element `i` from `derive(seed, first_index + i)`.
pub fn sample_binomial_batch(
    seed: &[u8],
    first_index: u16,
    count: usize,
    eta: u32,
    n: usize,
    modulus: Modulus,
) -> Result<Vec<RingElement>> {
    (0..count)
        .map(|i| {
            let index = u16::try_from(first_index as usize + i)
                .map_err(|_| Error::param("index", "batch index exceeds 16 bits"))?;
            NoiseSampler::derive(seed, index)?.sample_binomial_poly(eta, n, modulus)
        })
        .collect()
}
