//! Trait definition for Key Encapsulation Mechanisms (KEM)
//!
//! Unlike fixed-parameter schemes, an lwekem instance carries its parameter
//! set and transform engine, so every operation takes `&self`.

use super::serialize::{Serialize, SerializeSecret};
use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Trait for Key Encapsulation Mechanism (KEM) instances.
pub trait Kem {
    /// Public key type.
    type PublicKey: Clone + Serialize;

    /// Secret key type. Zeroized on drop by implementors.
    type SecretKey: Zeroize + Clone + SerializeSecret;

    /// Shared secret type.
    ///
    /// # Security Note
    /// Should be converted to application keys immediately after generation.
    type SharedSecret: Zeroize + Clone + SerializeSecret;

    /// Ciphertext type for the encapsulated key.
    type Ciphertext: Clone + Serialize;

    /// Keypair type; an intermediate value with no serialization contract.
    type KeyPair: Clone;

    /// Returns the KEM algorithm name.
    fn name(&self) -> &'static str;

    /// Generate a new keypair.
    ///
    /// All randomness is drawn from `rng`; passing a seeded generator makes
    /// the output reproducible.
    fn keypair<R: CryptoRng + RngCore>(&self, rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract public key from keypair.
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract secret key from keypair.
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Encapsulate a shared secret to the recipient's public key.
    fn encapsulate<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> Result<(Self::Ciphertext, Self::SharedSecret)>;

    /// Recover the shared secret from a ciphertext.
    ///
    /// Errors are reserved for structural mismatches (keys or ciphertext built
    /// for another parameter set). A tampered ciphertext of the right shape
    /// yields some shared secret, possibly a different one.
    fn decapsulate(
        &self,
        public_key: &Self::PublicKey,
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> Result<Self::SharedSecret>;
}
