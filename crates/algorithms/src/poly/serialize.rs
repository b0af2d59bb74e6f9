//! serialize.rs - Fixed-width coefficient packing
//!
//! Two layouts exist. The wire layout stores each coefficient as a
//! big-endian `u32`. The compact layout keeps only the low three bytes and
//! is therefore lossless only for moduli up to 2^24; wider moduli are
//! rejected instead of being silently truncated.

use crate::error::{validate, Error, Result};

/// Largest modulus the compact layout can represent
pub const COMPACT_MAX_MODULUS: u32 = 1 << 24;

/// A fixed-width coefficient layout
pub trait CoefficientCodec {
    /// Bytes occupied by one coefficient
    const BYTES_PER_COEFF: usize;

    /// Encodes `coeffs`; fails if the layout cannot represent modulus `q`.
    fn pack(coeffs: &[u32], q: u32) -> Result<Vec<u8>>;

    /// Decodes exactly `n` coefficients, each checked against `q`.
    fn unpack(bytes: &[u8], n: usize, q: u32) -> Result<Vec<u32>>;
}

/// Big-endian `u32` per coefficient
pub struct Be32Codec;

/// Big-endian low three bytes per coefficient
pub struct Compact24Codec;

/// Number of bytes `n` coefficients occupy under codec `C`
pub const fn bytes_required<C: CoefficientCodec>(n: usize) -> usize {
    n * C::BYTES_PER_COEFF
}

fn check_range(coeffs: &[u32], q: u32) -> Result<()> {
    if coeffs.iter().any(|&c| c >= q) {
        return Err(Error::Processing {
            operation: "coefficient unpacking",
            details: "coefficient out of range for modulus",
        });
    }
    Ok(())
}

impl CoefficientCodec for Be32Codec {
    const BYTES_PER_COEFF: usize = 4;

    fn pack(coeffs: &[u32], _q: u32) -> Result<Vec<u8>> {
        Ok(pack_be32(coeffs))
    }

    fn unpack(bytes: &[u8], n: usize, q: u32) -> Result<Vec<u32>> {
        let coeffs = unpack_be32(bytes, n)?;
        check_range(&coeffs, q)?;
        Ok(coeffs)
    }
}

impl CoefficientCodec for Compact24Codec {
    const BYTES_PER_COEFF: usize = 3;

    fn pack(coeffs: &[u32], q: u32) -> Result<Vec<u8>> {
        pack_compact24(coeffs, q)
    }

    fn unpack(bytes: &[u8], n: usize, q: u32) -> Result<Vec<u32>> {
        unpack_compact24(bytes, n, q)
    }
}

/// Big-endian `u32` stream, four bytes per coefficient.
pub fn pack_be32(coeffs: &[u32]) -> Vec<u8> {
    coeffs.iter().flat_map(|c| c.to_be_bytes()).collect()
}

/// Reads exactly `n` big-endian `u32` values; `bytes` must be `4 * n` long.
pub fn unpack_be32(bytes: &[u8], n: usize) -> Result<Vec<u32>> {
    validate::length("unpack_be32", bytes.len(), bytes_required::<Be32Codec>(n))?;
    Ok(bytes
        .chunks_exact(4)
        .map(|c| u32::from_be_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

/// Three big-endian bytes per coefficient. Requires `q <= 2^24`.
pub fn pack_compact24(coeffs: &[u32], q: u32) -> Result<Vec<u8>> {
    validate::parameter(
        q <= COMPACT_MAX_MODULUS,
        "modulus",
        "compact packing requires q <= 2^24",
    )?;
    check_range(coeffs, q)?;
    Ok(coeffs
        .iter()
        .flat_map(|c| {
            let [_, b1, b2, b3] = c.to_be_bytes();
            [b1, b2, b3]
        })
        .collect())
}

/// Inverse of [`pack_compact24`]; `bytes` must be `3 * n` long.
pub fn unpack_compact24(bytes: &[u8], n: usize, q: u32) -> Result<Vec<u32>> {
    validate::parameter(
        q <= COMPACT_MAX_MODULUS,
        "modulus",
        "compact packing requires q <= 2^24",
    )?;
    validate::length(
        "unpack_compact24",
        bytes.len(),
        bytes_required::<Compact24Codec>(n),
    )?;
    let coeffs: Vec<u32> = bytes
        .chunks_exact(3)
        .map(|c| u32::from_be_bytes([0, c[0], c[1], c[2]]))
        .collect();
    check_range(&coeffs, q)?;
    Ok(coeffs)
}
