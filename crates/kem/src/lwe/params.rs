// kem/src/lwe/params.rs

//! Parameter checks and naming for LWE KEM instances.

use lwekem_algorithms::poly::modular::{is_power_of_two, is_prime};
use lwekem_algorithms::poly::sampling::MAX_ETA;
use lwekem_params::pqc::lwekem::{ParameterSet, LWEKEM_128, LWEKEM_192, LWEKEM_256};

use crate::error::{validate, Result};

/// Smallest supported module rank.
pub const MIN_RANK: usize = 2;
/// Largest supported module rank.
pub const MAX_RANK: usize = 4;
/// Smallest modulus leaving room between the two message points 0 and q/4.
pub const MIN_MODULUS: u32 = 17;
/// Largest supported ring degree; keeps every serialized size inside `usize`.
pub const MAX_DEGREE: usize = 1 << 16;

/// Checks `params` before any size is computed from it.
///
/// Every serialized length derived from a set that passes is at most
/// `(MAX_RANK + 1) * MAX_DEGREE * 4 + 36` bytes.
pub fn validate_parameters(params: &ParameterSet) -> Result<()> {
    validate::configuration(
        (MIN_RANK..=MAX_RANK).contains(&params.module_rank),
        "module_rank",
        "rank must be 2, 3 or 4",
    )?;
    validate::configuration(
        (1..=MAX_ETA).contains(&params.eta),
        "eta",
        "binomial width must be in 1..=16",
    )?;
    validate::configuration(
        is_power_of_two(params.degree),
        "degree",
        "degree must be a power of two",
    )?;
    validate::configuration(
        params.degree <= MAX_DEGREE,
        "degree",
        "degree must be at most 65536",
    )?;
    validate::configuration(
        params.modulus >= MIN_MODULUS,
        "modulus",
        "modulus must be at least 17",
    )?;
    validate::configuration(is_prime(params.modulus), "modulus", "modulus must be prime")?;
    validate::configuration(
        (params.modulus as usize - 1) % params.degree == 0,
        "degree",
        "degree must divide q - 1",
    )?;
    Ok(())
}

/// Display name for an instance built over `params`.
pub fn algorithm_name(params: &ParameterSet) -> &'static str {
    if *params == LWEKEM_128 {
        "LWEKEM-128"
    } else if *params == LWEKEM_192 {
        "LWEKEM-192"
    } else if *params == LWEKEM_256 {
        "LWEKEM-256"
    } else {
        "LWEKEM-custom"
    }
}

/// The encoding scale `floor(q / 4)` for a message bit.
#[inline]
pub const fn message_scale(q: u32) -> u32 {
    q / 4
}
