// kem/src/lwe/keys.rs

//! Key, ciphertext and shared-secret types.

use core::fmt;

use lwekem_algorithms::RingElement;
use lwekem_api::{Result as ApiResult, Serialize, SerializeSecret};
use lwekem_params::pqc::lwekem::{ParameterSet, HINT_BYTES, SEED_BYTES};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::polyvec::PolyVec;
use super::serialize;
use crate::error::{validate, Result};

/// Public key: the matrix seed and `t = A*s + e`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    pub(crate) params: ParameterSet,
    pub(crate) seed: [u8; SEED_BYTES],
    pub(crate) t: PolyVec,
}

impl PublicKey {
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// Seed the public matrix is expanded from
    pub fn seed(&self) -> &[u8; SEED_BYTES] {
        &self.seed
    }

    /// The public vector t
    pub fn public_vector(&self) -> &PolyVec {
        &self.t
    }
}

/// Private key: the secret vector s. Zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    #[zeroize(skip)]
    pub(crate) params: ParameterSet,
    pub(crate) s: PolyVec,
}

impl PrivateKey {
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// The secret vector s
    pub fn secret_vector(&self) -> &PolyVec {
        &self.s
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("params", &self.params)
            .field("s", &"[REDACTED]")
            .finish()
    }
}

/// Ciphertext `(c1, c2)` plus the 4-byte encoding hint.
///
/// The hint is `BE32(shared secret)` and is ignored by decapsulation. It is
/// part of the wire format only; it reveals the shared secret to anyone who
/// sees the ciphertext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext {
    pub(crate) params: ParameterSet,
    pub(crate) c1: PolyVec,
    pub(crate) c2: RingElement,
    pub(crate) hint: [u8; HINT_BYTES],
}

impl Ciphertext {
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// The vector part `A^T*r + e1`
    pub fn c1(&self) -> &PolyVec {
        &self.c1
    }

    /// The element carrying the message bit
    pub fn c2(&self) -> &RingElement {
        &self.c2
    }

    pub fn hint(&self) -> &[u8; HINT_BYTES] {
        &self.hint
    }
}

/// The recovered message value. Zeroized on drop; compared in constant time.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret {
    value: u32,
}

impl SharedSecret {
    /// Size of the byte encoding
    pub const BYTES: usize = 4;

    pub fn new(value: u32) -> Self {
        Self { value }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Big-endian encoding
    pub fn to_bytes(&self) -> [u8; Self::BYTES] {
        self.value.to_be_bytes()
    }

    /// Inverse of [`to_bytes`](Self::to_bytes); exactly four bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validate::length("SharedSecret", bytes.len(), Self::BYTES)?;
        let mut buf = [0u8; Self::BYTES];
        buf.copy_from_slice(bytes);
        let value = u32::from_be_bytes(buf);
        buf.zeroize();
        Ok(Self { value })
    }
}

impl ConstantTimeEq for SharedSecret {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.value.ct_eq(&other.value)
    }
}

impl PartialEq for SharedSecret {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for SharedSecret {}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedSecret([REDACTED])")
    }
}

/// A public key and its private key.
#[derive(Debug, Clone)]
pub struct KeyPair {
    pub(crate) public_key: PublicKey,
    pub(crate) private_key: PrivateKey,
}

impl KeyPair {
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }
}

impl Serialize for PublicKey {
    type Context = ParameterSet;

    fn from_bytes(params: &ParameterSet, bytes: &[u8]) -> ApiResult<Self> {
        Ok(serialize::unpack_public_key(params, bytes)?)
    }

    fn to_bytes(&self) -> Vec<u8> {
        serialize::pack_public_key(self)
    }
}

impl SerializeSecret for PrivateKey {
    type Context = ParameterSet;

    fn from_bytes(params: &ParameterSet, bytes: &[u8]) -> ApiResult<Self> {
        Ok(serialize::unpack_private_key(params, bytes)?)
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(serialize::pack_private_key(self))
    }
}

impl Serialize for Ciphertext {
    type Context = ParameterSet;

    fn from_bytes(params: &ParameterSet, bytes: &[u8]) -> ApiResult<Self> {
        Ok(serialize::unpack_ciphertext(params, bytes)?)
    }

    fn to_bytes(&self) -> Vec<u8> {
        serialize::pack_ciphertext(self)
    }
}

impl SerializeSecret for SharedSecret {
    type Context = ParameterSet;

    fn from_bytes(_params: &ParameterSet, bytes: &[u8]) -> ApiResult<Self> {
        Ok(SharedSecret::from_bytes(bytes)?)
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.to_bytes().to_vec())
    }
}
