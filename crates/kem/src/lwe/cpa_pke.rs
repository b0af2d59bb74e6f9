// kem/src/lwe/cpa_pke.rs

//! CPA-secure single-bit public key encryption over module-LWE.
//!
//! The message bit is carried in coefficient 0 of `c2`, scaled by
//! `floor(q/4)`; decryption keeps `v = c2 - <s, c1>` and picks the nearer of
//! the two encoding points 0 and `floor(q/4)`.

use lwekem_algorithms::{Modulus, RingElement};
use lwekem_params::pqc::lwekem::SEED_BYTES;
use subtle::{ConditionallySelectable, ConstantTimeGreater};
use zeroize::Zeroize;

use super::params::message_scale;
use super::polyvec::PolyVec;
use super::ring_ops::RingOperations;
use crate::error::Result;

/// (t, s): public vector and secret vector
pub(crate) type CpaKeyPair = (PolyVec, PolyVec);
/// (c1, c2)
pub(crate) type CpaCiphertext = (PolyVec, RingElement);

/// t = A*s + e, with s from noise streams `0..k` and e from `k..2k`.
pub(crate) fn keypair_cpa(
    ops: &RingOperations,
    matrix_seed: &[u8; SEED_BYTES],
    noise_seed: &[u8; SEED_BYTES],
) -> Result<CpaKeyPair> {
    let k = ops.params().module_rank as u16;

    let a = ops.generate_matrix(matrix_seed)?;
    let s = ops.sample_secret_vector(noise_seed, 0)?;
    let mut e = ops.sample_error_vector(noise_seed, k)?;

    let mut t = ops.matrix_vector_multiply(&a, &s)?;
    t.add_assign(&e);
    e.zeroize();
    Ok((t, s))
}

/// c1 = A^T*r + e1, c2 = <t, r> + e2 + bit*floor(q/4).
///
/// r, e1 and e2 come from noise streams `0..k`, `k..2k` and `2k` of `coins`.
pub(crate) fn encrypt_cpa(
    ops: &RingOperations,
    matrix_seed: &[u8; SEED_BYTES],
    t: &PolyVec,
    bit: u8,
    coins: &[u8; SEED_BYTES],
) -> Result<CpaCiphertext> {
    let k = ops.params().module_rank as u16;

    let a = ops.generate_matrix(matrix_seed)?;
    let mut r = ops.sample_secret_vector(coins, 0)?;
    let mut e1 = ops.sample_error_vector(coins, k)?;
    let mut e2 = ops.sample_noise_element(coins, 2 * k)?;

    let mut c1 = ops.matrix_transpose_vector_multiply(&a, &r)?;
    c1.add_assign(&e1);

    let v = ops.inner_product(t, &r)?;
    let c2 = v.add(&e2).add(&encode_bit(ops.modulus(), ops.params().degree, bit));

    r.zeroize();
    e1.zeroize();
    e2.zeroize();
    Ok((c1, c2))
}

/// Recovers the bit from `c2 - <s, c1>` at coefficient 0.
pub(crate) fn decrypt_cpa(
    ops: &RingOperations,
    s: &PolyVec,
    c1: &PolyVec,
    c2: &RingElement,
) -> Result<u8> {
    let w = ops.inner_product(s, c1)?;
    let v = c2.sub(&w);
    Ok(decode_bit(ops.modulus(), v.as_coeffs_slice()[0]))
}

/// Zero element except coefficient 0, which holds `(bit & 1) * floor(q/4)`.
pub(crate) fn encode_bit(modulus: &Modulus, n: usize, bit: u8) -> RingElement {
    let mut coeffs = vec![0u32; n];
    coeffs[0] = modulus.mul((bit & 1) as u32, message_scale(modulus.value()));
    RingElement::from_coeffs_reduced(&coeffs, *modulus)
}

/// 1 iff `v` is strictly closer to `floor(q/4)` than to 0 on the modular circle.
///
/// Runs without branches on `v`.
pub(crate) fn decode_bit(modulus: &Modulus, v: u32) -> u8 {
    let q = modulus.value();
    let to_zero = centered_distance(q, v);
    let to_one = centered_distance(q, modulus.sub(v, message_scale(q)));
    to_zero.ct_gt(&to_one).unwrap_u8()
}

// min(c, q - c) for c in [0, q)
fn centered_distance(q: u32, c: u32) -> u32 {
    let flipped = q - c;
    u32::conditional_select(&c, &flipped, c.ct_gt(&flipped))
}
