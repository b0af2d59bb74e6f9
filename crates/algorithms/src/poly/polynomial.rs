//! polynomial.rs - Ring elements of Z_q[x]/(x^n - 1)

use core::ops::{Add, Neg, Sub};

use zeroize::Zeroize;

use super::modular::Modulus;
use super::ntt::NttEngine;
use super::serialize::{pack_be32, pack_compact24, unpack_be32, unpack_compact24};
use crate::error::{validate, Error, Result};

/// A length-n vector of coefficients in `[0, q)`.
///
/// Binary operators require both operands to share (n, q) and panic
/// otherwise; the fallible constructors are the place to validate input.
#[derive(Clone, PartialEq, Eq, Zeroize)]
pub struct RingElement {
    coeffs: Vec<u32>,
    #[zeroize(skip)]
    modulus: Modulus,
}

impl RingElement {
    /// The zero element
    pub fn zero(n: usize, modulus: Modulus) -> Self {
        Self {
            coeffs: vec![0; n],
            modulus,
        }
    }

    /// Builds an element from coefficients already reduced mod q.
    pub fn from_coeffs(coeffs: Vec<u32>, modulus: Modulus) -> Result<Self> {
        let q = modulus.value();
        if coeffs.iter().any(|&c| c >= q) {
            return Err(Error::param("coeffs", "coefficient not reduced mod q"));
        }
        Ok(Self { coeffs, modulus })
    }

    /// Builds an element, reducing every input coefficient mod q.
    pub fn from_coeffs_reduced(coeffs: &[u32], modulus: Modulus) -> Self {
        let q = modulus.value();
        Self {
            coeffs: coeffs.iter().map(|&c| c % q).collect(),
            modulus,
        }
    }

    pub fn degree(&self) -> usize {
        self.coeffs.len()
    }

    pub fn modulus(&self) -> &Modulus {
        &self.modulus
    }

    pub fn as_coeffs_slice(&self) -> &[u32] {
        &self.coeffs
    }

    pub fn into_coeffs(self) -> Vec<u32> {
        self.coeffs
    }

    /// Mutable view for in-place kernels; callers keep every entry below q.
    pub fn as_mut_coeffs_slice(&mut self) -> &mut [u32] {
        &mut self.coeffs
    }

    /// Coefficient at `index`, or `None` past the end
    pub fn coefficient(&self, index: usize) -> Option<u32> {
        self.coeffs.get(index).copied()
    }

    /// Sets coefficient `index` to `value mod q`.
    pub fn set_coefficient(&mut self, index: usize, value: u32) -> Result<()> {
        let n = self.coeffs.len();
        let q = self.modulus.value();
        let slot = self.coeffs.get_mut(index).ok_or(Error::Length {
            context: "RingElement::set_coefficient",
            expected: n,
            actual: index,
        })?;
        *slot = value % q;
        Ok(())
    }

    fn check_compatible(&self, other: &Self) {
        assert_eq!(
            self.modulus.value(),
            other.modulus.value(),
            "ring elements over different moduli"
        );
        assert_eq!(
            self.coeffs.len(),
            other.coeffs.len(),
            "ring elements of different degree"
        );
    }

    fn zip_with(&self, other: &Self, f: impl Fn(&Modulus, u32, u32) -> u32) -> Self {
        self.check_compatible(other);
        let m = &self.modulus;
        Self {
            coeffs: self
                .coeffs
                .iter()
                .zip(&other.coeffs)
                .map(|(&a, &b)| f(m, a, b))
                .collect(),
            modulus: self.modulus,
        }
    }

    /// Coefficient-wise sum mod q
    pub fn add(&self, other: &Self) -> Self {
        self.zip_with(other, Modulus::add)
    }

    /// Coefficient-wise difference mod q
    pub fn sub(&self, other: &Self) -> Self {
        self.zip_with(other, Modulus::sub)
    }

    /// Additive inverse
    pub fn neg(&self) -> Self {
        let m = &self.modulus;
        Self {
            coeffs: self.coeffs.iter().map(|&c| m.neg(c)).collect(),
            modulus: self.modulus,
        }
    }

    /// Multiplies every coefficient by `scalar mod q`
    pub fn scalar_mul(&self, scalar: u32) -> Self {
        let m = &self.modulus;
        let s = scalar % m.value();
        Self {
            coeffs: self.coeffs.iter().map(|&c| m.mul(c, s)).collect(),
            modulus: self.modulus,
        }
    }

    /// Ring product computed through the engine's transforms.
    pub fn ntt_mul(&self, other: &Self, engine: &NttEngine) -> Result<Self> {
        self.check_engine(engine)?;
        other.check_engine(engine)?;
        let coeffs = engine.multiply(&self.coeffs, &other.coeffs)?;
        Ok(Self {
            coeffs,
            modulus: self.modulus,
        })
    }

    /// Ring product by direct O(n^2) convolution; the reference for `ntt_mul`.
    pub fn schoolbook_mul(&self, other: &Self) -> Self {
        self.check_compatible(other);
        let n = self.coeffs.len();
        let m = &self.modulus;
        let mut out = vec![0u32; n];
        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in other.coeffs.iter().enumerate() {
                let k = (i + j) % n;
                out[k] = m.add(out[k], m.mul(a, b));
            }
        }
        Self {
            coeffs: out,
            modulus: self.modulus,
        }
    }

    /// max_i min(c_i, q - c_i): magnitude of the largest centered coefficient
    pub fn infinity_norm(&self) -> u32 {
        self.coeffs
            .iter()
            .map(|&c| self.modulus.centered_abs(c))
            .max()
            .unwrap_or(0)
    }

    /// In-place forward transform; the result is only meaningful to the engine.
    pub fn ntt_inplace(&mut self, engine: &NttEngine) -> Result<()> {
        self.check_engine(engine)?;
        engine.forward(&mut self.coeffs)
    }

    /// In-place inverse transform.
    pub fn from_ntt_inplace(&mut self, engine: &NttEngine) -> Result<()> {
        self.check_engine(engine)?;
        engine.inverse(&mut self.coeffs)
    }

    fn check_engine(&self, engine: &NttEngine) -> Result<()> {
        validate::parameter(
            engine.modulus().value() == self.modulus.value(),
            "modulus",
            "engine modulus differs from ring element modulus",
        )?;
        validate::length("RingElement degree", self.coeffs.len(), engine.degree())
    }

    /// Big-endian u32 per coefficient; `4 * n` bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        pack_be32(&self.coeffs)
    }

    /// Inverse of [`to_bytes`](Self::to_bytes). Exactly `4 * n` bytes are
    /// required and every coefficient must be below `q`.
    pub fn from_bytes(bytes: &[u8], n: usize, modulus: Modulus) -> Result<Self> {
        let coeffs = unpack_be32(bytes, n)?;
        Self::from_coeffs(coeffs, modulus)
    }

    /// Three bytes per coefficient; requires `q <= 2^24`.
    pub fn to_compact_bytes(&self) -> Result<Vec<u8>> {
        pack_compact24(&self.coeffs, self.modulus.value())
    }

    /// Inverse of [`to_compact_bytes`](Self::to_compact_bytes).
    pub fn from_compact_bytes(bytes: &[u8], n: usize, modulus: Modulus) -> Result<Self> {
        let coeffs = unpack_compact24(bytes, n, modulus.value())?;
        Self::from_coeffs(coeffs, modulus)
    }
}

impl core::fmt::Debug for RingElement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RingElement")
            .field("n", &self.coeffs.len())
            .field("q", &self.modulus.value())
            .finish_non_exhaustive()
    }
}

impl Add for &RingElement {
    type Output = RingElement;

    fn add(self, other: Self) -> Self::Output {
        RingElement::add(self, other)
    }
}

impl Add for RingElement {
    type Output = RingElement;

    fn add(self, other: Self) -> Self::Output {
        RingElement::add(&self, &other)
    }
}

impl Sub for &RingElement {
    type Output = RingElement;

    fn sub(self, other: Self) -> Self::Output {
        RingElement::sub(self, other)
    }
}

impl Sub for RingElement {
    type Output = RingElement;

    fn sub(self, other: Self) -> Self::Output {
        RingElement::sub(&self, &other)
    }
}

impl Neg for &RingElement {
    type Output = RingElement;

    fn neg(self) -> Self::Output {
        RingElement::neg(self)
    }
}

impl Neg for RingElement {
    type Output = RingElement;

    fn neg(self) -> Self::Output {
        RingElement::neg(&self)
    }
}
