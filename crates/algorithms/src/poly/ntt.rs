//! ntt.rs - Number Theoretic Transform over Z_q[x]/(x^n - 1)
//!
//! The forward transform is a decimation-in-frequency (Gentleman-Sande)
//! network: pair distance starts at n/2 and halves, twiddle stride starts at
//! 1 and doubles, and the output lands in bit-reversed order. The inverse
//! runs the same stages in reverse with Cooley-Tukey butterflies, consuming
//! bit-reversed input and producing natural order, then scales by n^-1. The
//! permutation therefore cancels and no explicit reordering pass exists.
//! Pointwise products do not care about ordering, so
//! `inverse(forward(a) * forward(b))` is the cyclic convolution of `a` and `b`.
//!
//! The butterfly network is shared; [`NttBackend`] implementations only
//! differ in how many butterflies they batch per step.

use std::fmt;

use tracing::debug;

use super::modular::{is_power_of_two, primitive_root, Modulus};
use crate::error::{validate, Error, Result};

mod backend;
mod detect;


pub use backend::{backend_for, Lanes16, Lanes4, Lanes8, NttBackend, ScalarBackend, WideBackend};
pub use detect::{
    CapabilityDetector, CpuArchitecture, CpuCapabilities, FixedDetector, HostDetector, SimdSupport,
};

/// Precomputed twiddle tables for one (q, n) pair.
///
/// Immutable after construction; safe to share between threads.
#[derive(Clone, PartialEq, Eq)]
pub struct NttTables {
    modulus: Modulus,
    n: usize,
    zeta: u32,
    zetas: Vec<u32>,
    zetas_inv: Vec<u32>,
    n_inv: u32,
}

impl NttTables {
    /// Builds tables for degree `n` modulo prime `q`.
    ///
    /// Fails unless `n` is a power of two dividing `q - 1` and `q` is a prime
    /// below 2^31.
    pub fn new(q: u32, n: usize) -> Result<Self> {
        let modulus = Modulus::new(q)?;
        validate::parameter(is_power_of_two(n), "degree", "degree must be a power of two")?;
        validate::parameter(
            (n as u64) <= (q as u64 - 1) && (q as u64 - 1) % n as u64 == 0,
            "degree",
            "degree must divide q - 1 for an n-th root of unity to exist",
        )?;

        let g = primitive_root(q)?;
        let zeta = modulus.pow(g, ((q - 1) as u64) / n as u64);
        let zeta_inv = modulus
            .inverse(zeta)
            .ok_or_else(|| Error::param("modulus", "root of unity is not invertible"))?;
        let n_inv = modulus
            .inverse((n as u64 % q as u64) as u32)
            .ok_or_else(|| Error::param("degree", "degree is not invertible mod q"))?;

        let zetas = power_table(&modulus, zeta, n)?;
        let zetas_inv = power_table(&modulus, zeta_inv, n)?;

        Ok(Self {
            modulus,
            n,
            zeta,
            zetas,
            zetas_inv,
            n_inv,
        })
    }

    /// The coefficient modulus
    #[inline(always)]
    pub fn modulus(&self) -> &Modulus {
        &self.modulus
    }

    /// Ring degree n
    #[inline(always)]
    pub fn degree(&self) -> usize {
        self.n
    }

    /// The primitive n-th root of unity
    pub fn zeta(&self) -> u32 {
        self.zeta
    }

    /// `zeta^i` for `i` in `0..n`
    #[inline(always)]
    pub fn zetas(&self) -> &[u32] {
        &self.zetas
    }

    /// `zeta^-i` for `i` in `0..n`
    #[inline(always)]
    pub fn zetas_inv(&self) -> &[u32] {
        &self.zetas_inv
    }

    /// n^-1 mod q
    pub fn n_inv(&self) -> u32 {
        self.n_inv
    }
}

impl fmt::Debug for NttTables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NttTables")
            .field("q", &self.modulus.value())
            .field("n", &self.n)
            .field("zeta", &self.zeta)
            .finish()
    }
}

fn power_table(modulus: &Modulus, root: u32, n: usize) -> Result<Vec<u32>> {
    let mut table = Vec::new();
    table.try_reserve_exact(n).map_err(|_| Error::Allocation {
        context: "zeta table",
        requested: n,
    })?;
    let mut acc = 1u32 % modulus.value();
    for _ in 0..n {
        table.push(acc);
        acc = modulus.mul(acc, root);
    }
    Ok(table)
}

/// Forward/inverse NTT and NTT-based ring multiplication.
///
/// The backend is chosen once at construction. Transforms mutate the
/// caller's buffer in place and allocate any scratch per call, so a shared
/// `&NttEngine` can serve concurrent callers.
pub struct NttEngine {
    tables: NttTables,
    simd: SimdSupport,
    backend: Box<dyn NttBackend>,
}

impl NttEngine {
    /// Builds an engine using the host's detected vector width.
    pub fn new(q: u32, n: usize) -> Result<Self> {
        Self::with_detector(&HostDetector, q, n)
    }

    /// Builds an engine with the backend picked by `detector`.
    pub fn with_detector<D: CapabilityDetector + ?Sized>(
        detector: &D,
        q: u32,
        n: usize,
    ) -> Result<Self> {
        Self::with_backend(detector.detect().simd, q, n)
    }

    /// Builds an engine with the backend matching `simd`.
    pub fn with_backend(simd: SimdSupport, q: u32, n: usize) -> Result<Self> {
        let tables = NttTables::new(q, n)?;
        let backend = backend_for(simd);
        debug!(
            q,
            n,
            zeta = tables.zeta(),
            simd = simd.name(),
            backend = backend.name(),
            "ntt engine ready"
        );
        Ok(Self {
            tables,
            simd,
            backend,
        })
    }

    pub fn tables(&self) -> &NttTables {
        &self.tables
    }

    pub fn modulus(&self) -> &Modulus {
        self.tables.modulus()
    }

    pub fn degree(&self) -> usize {
        self.tables.degree()
    }

    /// The capability tag this engine was built for
    pub fn simd(&self) -> SimdSupport {
        self.simd
    }

    /// Name of the active backend
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// In-place forward transform; output is in bit-reversed order.
    pub fn forward(&self, coeffs: &mut [u32]) -> Result<()> {
        let n = self.degree();
        validate::length("NttEngine::forward", coeffs.len(), n)?;
        let mut half = n / 2;
        let mut stride = 1;
        while half > 0 {
            self.backend.forward_stage(&self.tables, coeffs, half, stride);
            half >>= 1;
            stride <<= 1;
        }
        Ok(())
    }

    /// In-place inverse transform of a [`forward`](Self::forward) output,
    /// including the final scaling by n^-1.
    pub fn inverse(&self, coeffs: &mut [u32]) -> Result<()> {
        let n = self.degree();
        validate::length("NttEngine::inverse", coeffs.len(), n)?;
        let mut half = 1;
        let mut stride = n / 2;
        while half < n {
            self.backend.inverse_stage(&self.tables, coeffs, half, stride);
            half <<= 1;
            stride >>= 1;
        }
        self.backend.scale(self.modulus(), coeffs, self.tables.n_inv());
        Ok(())
    }

    /// `out[i] = a[i] * b[i] mod q`
    pub fn pointwise(&self, a: &[u32], b: &[u32], out: &mut [u32]) -> Result<()> {
        let n = self.degree();
        validate::length("NttEngine::pointwise", a.len(), n)?;
        validate::length("NttEngine::pointwise", b.len(), n)?;
        validate::length("NttEngine::pointwise", out.len(), n)?;
        self.backend.pointwise(self.modulus(), a, b, out);
        Ok(())
    }

    /// `acc[i] += a[i] * b[i] mod q`
    pub fn pointwise_accumulate(&self, acc: &mut [u32], a: &[u32], b: &[u32]) -> Result<()> {
        let n = self.degree();
        validate::length("NttEngine::pointwise_accumulate", acc.len(), n)?;
        validate::length("NttEngine::pointwise_accumulate", a.len(), n)?;
        validate::length("NttEngine::pointwise_accumulate", b.len(), n)?;
        self.backend.pointwise_accumulate(self.modulus(), acc, a, b);
        Ok(())
    }

    /// Cyclic convolution of `a` and `b` via forward, pointwise, inverse.
    pub fn multiply(&self, a: &[u32], b: &[u32]) -> Result<Vec<u32>> {
        let n = self.degree();
        validate::length("NttEngine::multiply", a.len(), n)?;
        validate::length("NttEngine::multiply", b.len(), n)?;

        let mut fa = a.to_vec();
        let mut fb = b.to_vec();
        self.forward(&mut fa)?;
        self.forward(&mut fb)?;
        let mut out = vec![0u32; n];
        self.backend.pointwise(self.modulus(), &fa, &fb, &mut out);
        self.inverse(&mut out)?;
        Ok(out)
    }
}

impl fmt::Debug for NttEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NttEngine")
            .field("tables", &self.tables)
            .field("simd", &self.simd)
            .field("backend", &self.backend.name())
            .finish()
    }
}
