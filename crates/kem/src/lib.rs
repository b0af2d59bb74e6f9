//! Key encapsulation over module-LWE
//!
//! This crate implements the lwekem key encapsulation mechanism: ring and
//! matrix operations over Z_q[x]/(x^n - 1), the single-bit CPA encryption
//! underneath, key and ciphertext encodings, and the [`LweKem`] front end
//! implementing [`lwekem_api::Kem`].

#![forbid(unsafe_code)]

pub mod error;
pub mod lwe;

pub use error::{Error, Result};
pub use lwe::{
    Ciphertext, KeyPair, LweKem, Matrix, PolyVec, PrivateKey, PublicKey, RingOperations,
    SharedSecret,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
