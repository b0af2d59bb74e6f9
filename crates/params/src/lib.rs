//! Constant parameter profiles for the lwekem library
//!
//! This crate holds data only. Validation of custom sets happens where the
//! sets are consumed (engine and KEM construction).

pub mod pqc;

pub use pqc::lwekem::{
    ParameterSet, COEFF_BYTES, HINT_BYTES, LWEKEM_128, LWEKEM_192, LWEKEM_256, LWEKEM_N, LWEKEM_Q,
    SEED_BYTES,
};
