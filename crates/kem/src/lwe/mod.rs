// kem/src/lwe/mod.rs

//! Module-LWE key encapsulation over the cyclic ring Z_q[x]/(x^n - 1).
//!
//! Each encapsulation carries one bit: the shared secret is that bit, and
//! the ciphertext hint is its 4-byte big-endian encoding.

mod cpa_pke;
mod kem;
mod keys;
mod params;
mod polyvec;
mod ring_ops;
mod serialize;

pub use self::kem::LweKem;
pub use self::keys::{Ciphertext, KeyPair, PrivateKey, PublicKey, SharedSecret};
pub use self::params::{algorithm_name, message_scale, validate_parameters, MAX_RANK, MIN_RANK};
pub use self::polyvec::{Matrix, PolyVec};
pub use self::ring_ops::RingOperations;
