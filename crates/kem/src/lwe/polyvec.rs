// kem/src/lwe/polyvec.rs

//! Vectors and square matrices of ring elements.

use lwekem_algorithms::error::Result as AlgoResult;
use lwekem_algorithms::{Modulus, NttEngine, RingElement};
use zeroize::Zeroize;

use crate::error::{validate, Result};

/// A vector of ring elements, of length k in every protocol use.
#[derive(Debug, Clone, PartialEq, Eq, Zeroize)]
pub struct PolyVec {
    /// The elements of this vector.
    pub(crate) polys: Vec<RingElement>,
}

impl PolyVec {
    /// Creates a zero vector of `k` elements of degree `n`.
    pub fn zero(k: usize, n: usize, modulus: Modulus) -> Self {
        Self {
            polys: vec![RingElement::zero(n, modulus); k],
        }
    }

    /// Wraps existing elements.
    pub fn from_polys(polys: Vec<RingElement>) -> Self {
        Self { polys }
    }

    /// Number of elements.
    pub fn rank(&self) -> usize {
        self.polys.len()
    }

    pub fn polys(&self) -> &[RingElement] {
        &self.polys
    }

    pub fn get(&self, i: usize) -> Option<&RingElement> {
        self.polys.get(i)
    }

    /// True when every element has degree `n` and modulus `q`.
    pub fn is_shaped(&self, k: usize, n: usize, q: u32) -> bool {
        self.polys.len() == k
            && self
                .polys
                .iter()
                .all(|p| p.degree() == n && p.modulus().value() == q)
    }

    /// Applies the forward transform to each element.
    pub fn ntt_inplace(&mut self, engine: &NttEngine) -> AlgoResult<()> {
        for p in self.polys.iter_mut() {
            p.ntt_inplace(engine)?;
        }
        Ok(())
    }

    /// Adds another vector to this one, coefficient-wise.
    pub fn add_assign(&mut self, other: &Self) {
        for (p1, p2) in self.polys.iter_mut().zip(other.polys.iter()) {
            *p1 = p1.add(p2);
        }
    }

    /// Subtracts another vector from this one, coefficient-wise.
    pub fn sub_assign(&mut self, other: &Self) {
        for (p1, p2) in self.polys.iter_mut().zip(other.polys.iter()) {
            *p1 = p1.sub(p2);
        }
    }

    /// Largest centered coefficient over all elements
    pub fn infinity_norm(&self) -> u32 {
        self.polys
            .iter()
            .map(RingElement::infinity_norm)
            .max()
            .unwrap_or(0)
    }

    /// Concatenation of each element's big-endian coefficient stream.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(
            self.polys.iter().map(|p| p.degree() * 4).sum::<usize>(),
        );
        for poly in &self.polys {
            bytes.extend_from_slice(&poly.to_bytes());
        }
        bytes
    }

    /// Inverse of [`to_bytes`](Self::to_bytes); requires exactly `k * n * 4` bytes.
    pub fn from_bytes(bytes: &[u8], k: usize, n: usize, modulus: Modulus) -> Result<Self> {
        let element_bytes = n * 4;
        validate::length("PolyVec", bytes.len(), k * element_bytes)?;
        let polys = bytes
            .chunks_exact(element_bytes.max(1))
            .take(k)
            .map(|chunk| RingElement::from_bytes(chunk, n, modulus))
            .collect::<AlgoResult<Vec<_>>>()?;
        Ok(Self { polys })
    }
}

/// A k x k grid of ring elements, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    k: usize,
    entries: Vec<RingElement>,
}

impl Matrix {
    /// Builds a matrix from `k * k` row-major entries.
    pub(crate) fn from_entries(k: usize, entries: Vec<RingElement>) -> Self {
        debug_assert_eq!(entries.len(), k * k);
        Self { k, entries }
    }

    pub fn rank(&self) -> usize {
        self.k
    }

    /// Entry at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> Option<&RingElement> {
        if i >= self.k || j >= self.k {
            return None;
        }
        self.entries.get(i * self.k + j)
    }

    /// A copy with every entry forward-transformed.
    pub(crate) fn to_ntt(&self, engine: &NttEngine) -> AlgoResult<Self> {
        let mut out = self.clone();
        for e in out.entries.iter_mut() {
            e.ntt_inplace(engine)?;
        }
        Ok(out)
    }
}
