//! # lwekem
//!
//! Module-LWE key encapsulation over the cyclic ring Z_q[x]/(x^n - 1), with
//! an NTT engine whose backend is picked from the host's vector width.
//!
//! ## Usage
//!
//! ```no_run
//! use lwekem::prelude::*;
//!
//! let kem = LweKem::new(LWEKEM_128)?;
//! let mut rng = lwekem::os_rng();
//! let keypair = kem.keypair(&mut rng)?;
//! let (ciphertext, shared) = kem.encapsulate(&mut rng, keypair.public_key())?;
//! let recovered = kem.decapsulate(keypair.public_key(), keypair.private_key(), &ciphertext)?;
//! assert_eq!(shared, recovered);
//! # Ok::<(), lwekem::api::Error>(())
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from its sub-crates:
//!
//! - [`lwekem-api`]: error type, `Kem` and serialization traits
//! - [`lwekem-params`]: parameter profiles
//! - [`lwekem-algorithms`]: modular arithmetic, NTT, ring elements, sampling
//! - [`lwekem-kem`]: ring operations, keys and the KEM itself

pub use lwekem_algorithms as algorithms;
pub use lwekem_api as api;
pub use lwekem_kem as kem;
pub use lwekem_params as params;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The operating system's entropy source.
///
/// Library code takes randomness as a parameter; this is for the outermost
/// caller that has nothing better to pass.
pub fn os_rng() -> rand::rngs::OsRng {
    rand::rngs::OsRng
}

/// Common imports for lwekem users
pub mod prelude {
    pub use lwekem_algorithms::{FixedDetector, HostDetector, SimdSupport};
    pub use lwekem_api::{Kem, Serialize, SerializeSecret};
    pub use lwekem_kem::{Ciphertext, KeyPair, LweKem, PrivateKey, PublicKey, SharedSecret};
    pub use lwekem_params::{ParameterSet, LWEKEM_128, LWEKEM_192, LWEKEM_256};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn prelude_covers_a_full_exchange() {
        let kem = LweKem::new(LWEKEM_128).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let kp = kem.keypair(&mut rng).unwrap();
        let (ct, ss) = kem.encapsulate(&mut rng, kp.public_key()).unwrap();
        let back = Ciphertext::from_bytes(&LWEKEM_128, &ct.to_bytes()).unwrap();
        assert_eq!(
            kem.decapsulate(kp.public_key(), kp.private_key(), &back)
                .unwrap(),
            ss
        );
    }

    #[test]
    fn version_matches_sub_crates() {
        assert_eq!(super::VERSION, lwekem_kem::VERSION);
    }

    #[test]
    fn os_rng_feeds_key_generation() {
        let kem = LweKem::new(LWEKEM_128).unwrap();
        let mut rng = super::os_rng();
        assert!(kem.keypair(&mut rng).is_ok());
    }
}
