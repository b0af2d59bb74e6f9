//! Butterfly backends for the NTT engine
//!
//! All backends walk the same stage structure with the same tables. The wide
//! variants gather `W` butterflies into fixed-size lane arrays, which the
//! compiler maps onto the host's vector registers; any tail shorter than `W`
//! runs through the scalar butterflies.

use std::fmt;

use super::{NttTables, SimdSupport};
use crate::poly::modular::Modulus;

/// One butterfly-network implementation.
pub trait NttBackend: Send + Sync + fmt::Debug {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Butterflies processed per batch
    fn lanes(&self) -> usize;

    /// One decimation-in-frequency stage over every block of `coeffs`.
    ///
    /// For each pair `(a, b)` at distance `half` with twiddle `zeta^(j*stride)`:
    /// `a' = a + b`, `b' = (a - b) * zeta^(j*stride)`.
    fn forward_stage(&self, tables: &NttTables, coeffs: &mut [u32], half: usize, stride: usize);

    /// The exact inverse of [`forward_stage`](Self::forward_stage) up to a factor of 2:
    /// `t = b * zeta^-(j*stride)`, `a' = a + t`, `b' = a - t`.
    fn inverse_stage(&self, tables: &NttTables, coeffs: &mut [u32], half: usize, stride: usize);

    /// `out[i] = a[i] * b[i]`
    fn pointwise(&self, m: &Modulus, a: &[u32], b: &[u32], out: &mut [u32]) {
        for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
            *o = m.mul(x, y);
        }
    }

    /// `acc[i] += a[i] * b[i]`
    fn pointwise_accumulate(&self, m: &Modulus, acc: &mut [u32], a: &[u32], b: &[u32]) {
        for ((o, &x), &y) in acc.iter_mut().zip(a).zip(b) {
            *o = m.add(*o, m.mul(x, y));
        }
    }

    /// `coeffs[i] *= factor`
    fn scale(&self, m: &Modulus, coeffs: &mut [u32], factor: u32) {
        for c in coeffs.iter_mut() {
            *c = m.mul(*c, factor);
        }
    }
}

#[inline(always)]
fn gs_butterfly(m: &Modulus, lo: &mut u32, hi: &mut u32, w: u32) {
    let (a, b) = (*lo, *hi);
    *lo = m.add(a, b);
    *hi = m.mul(m.sub(a, b), w);
}

#[inline(always)]
fn ct_butterfly(m: &Modulus, lo: &mut u32, hi: &mut u32, w: u32) {
    let a = *lo;
    let t = m.mul(*hi, w);
    *lo = m.add(a, t);
    *hi = m.sub(a, t);
}

/// Reference backend: one butterfly at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarBackend;

impl ScalarBackend {
    fn stage_range(
        m: &Modulus,
        table: &[u32],
        lo: &mut [u32],
        hi: &mut [u32],
        range: std::ops::Range<usize>,
        stride: usize,
        butterfly: fn(&Modulus, &mut u32, &mut u32, u32),
    ) {
        for j in range {
            butterfly(m, &mut lo[j], &mut hi[j], table[j * stride]);
        }
    }
}

impl NttBackend for ScalarBackend {
    fn name(&self) -> &'static str {
        "scalar"
    }

    fn lanes(&self) -> usize {
        1
    }

    fn forward_stage(&self, tables: &NttTables, coeffs: &mut [u32], half: usize, stride: usize) {
        let m = tables.modulus();
        for block in coeffs.chunks_exact_mut(2 * half) {
            let (lo, hi) = block.split_at_mut(half);
            Self::stage_range(m, tables.zetas(), lo, hi, 0..half, stride, gs_butterfly);
        }
    }

    fn inverse_stage(&self, tables: &NttTables, coeffs: &mut [u32], half: usize, stride: usize) {
        let m = tables.modulus();
        for block in coeffs.chunks_exact_mut(2 * half) {
            let (lo, hi) = block.split_at_mut(half);
            Self::stage_range(m, tables.zetas_inv(), lo, hi, 0..half, stride, ct_butterfly);
        }
    }
}

/// Batched backend processing `W` butterflies per step.
#[derive(Debug, Clone, Copy, Default)]
pub struct WideBackend<const W: usize>;

/// 128-bit vectors (NEON, VSX)
pub type Lanes4 = WideBackend<4>;
/// 256-bit vectors (AVX2, RVV at VLEN=256)
pub type Lanes8 = WideBackend<8>;
/// 512-bit vectors (AVX-512)
pub type Lanes16 = WideBackend<16>;

impl<const W: usize> WideBackend<W> {
    #[inline(always)]
    fn load(src: &[u32]) -> [u32; W] {
        let mut out = [0u32; W];
        out.copy_from_slice(&src[..W]);
        out
    }

    #[inline(always)]
    fn twiddles(table: &[u32], j0: usize, stride: usize) -> [u32; W] {
        let mut w = [0u32; W];
        for (l, slot) in w.iter_mut().enumerate() {
            *slot = table[(j0 + l) * stride];
        }
        w
    }

    fn forward_lanes(m: &Modulus, lo: &mut [u32], hi: &mut [u32], w: &[u32; W]) {
        let a = Self::load(lo);
        let b = Self::load(hi);
        for l in 0..W {
            lo[l] = m.add(a[l], b[l]);
            hi[l] = m.mul(m.sub(a[l], b[l]), w[l]);
        }
    }

    fn inverse_lanes(m: &Modulus, lo: &mut [u32], hi: &mut [u32], w: &[u32; W]) {
        let a = Self::load(lo);
        let b = Self::load(hi);
        let mut t = [0u32; W];
        for l in 0..W {
            t[l] = m.mul(b[l], w[l]);
        }
        for l in 0..W {
            lo[l] = m.add(a[l], t[l]);
            hi[l] = m.sub(a[l], t[l]);
        }
    }
}

impl<const W: usize> NttBackend for WideBackend<W> {
    fn name(&self) -> &'static str {
        match W {
            4 => "wide-x4",
            8 => "wide-x8",
            16 => "wide-x16",
            _ => "wide",
        }
    }

    fn lanes(&self) -> usize {
        W
    }

    fn forward_stage(&self, tables: &NttTables, coeffs: &mut [u32], half: usize, stride: usize) {
        let m = tables.modulus();
        let full = half - half % W;
        for block in coeffs.chunks_exact_mut(2 * half) {
            let (lo, hi) = block.split_at_mut(half);
            for j0 in (0..full).step_by(W) {
                let w = Self::twiddles(tables.zetas(), j0, stride);
                Self::forward_lanes(m, &mut lo[j0..j0 + W], &mut hi[j0..j0 + W], &w);
            }
            ScalarBackend::stage_range(m, tables.zetas(), lo, hi, full..half, stride, gs_butterfly);
        }
    }

    fn inverse_stage(&self, tables: &NttTables, coeffs: &mut [u32], half: usize, stride: usize) {
        let m = tables.modulus();
        let full = half - half % W;
        for block in coeffs.chunks_exact_mut(2 * half) {
            let (lo, hi) = block.split_at_mut(half);
            for j0 in (0..full).step_by(W) {
                let w = Self::twiddles(tables.zetas_inv(), j0, stride);
                Self::inverse_lanes(m, &mut lo[j0..j0 + W], &mut hi[j0..j0 + W], &w);
            }
            ScalarBackend::stage_range(
                m,
                tables.zetas_inv(),
                lo,
                hi,
                full..half,
                stride,
                ct_butterfly,
            );
        }
    }

    fn pointwise(&self, m: &Modulus, a: &[u32], b: &[u32], out: &mut [u32]) {
        let mut out_chunks = out.chunks_exact_mut(W);
        let mut a_chunks = a.chunks_exact(W);
        let mut b_chunks = b.chunks_exact(W);
        for ((o, x), y) in (&mut out_chunks).zip(&mut a_chunks).zip(&mut b_chunks) {
            for l in 0..W {
                o[l] = m.mul(x[l], y[l]);
            }
        }
        ScalarBackend.pointwise(
            m,
            a_chunks.remainder(),
            b_chunks.remainder(),
            out_chunks.into_remainder(),
        );
    }
}

/// Backend factory keyed on the detected capability tag.
pub fn backend_for(simd: SimdSupport) -> Box<dyn NttBackend> {
    match simd.lanes() {
        16 => Box::new(Lanes16::default()),
        8 => Box::new(Lanes8::default()),
        4 => Box::new(Lanes4::default()),
        _ => Box::new(ScalarBackend),
    }
}
