// kem/src/lwe/kem.rs

//! The LWE key encapsulation mechanism.

use std::sync::Arc;

use lwekem_algorithms::{CapabilityDetector, HostDetector, NoiseSampler, NttEngine, SimdSupport};
use lwekem_api::error::Result as ApiResult;
use lwekem_api::{Kem as KemTrait, Seed, Serialize};
use lwekem_params::pqc::lwekem::{ParameterSet, SEED_BYTES};
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use tracing::{debug, trace};
use zeroize::Zeroize;

use super::cpa_pke::{decrypt_cpa, encrypt_cpa, keypair_cpa};
use super::keys::{Ciphertext, KeyPair, PrivateKey, PublicKey, SharedSecret};
use super::params::{algorithm_name, validate_parameters};
use super::ring_ops::RingOperations;
use crate::error::{validate, Error, Result};

/// A module-LWE KEM bound to one parameter set and one transform backend.
///
/// Construction validates the parameters and builds the NTT tables once;
/// the instance is immutable afterwards and can be shared across threads.
#[derive(Debug, Clone)]
pub struct LweKem {
    name: &'static str,
    ops: RingOperations,
}

impl LweKem {
    /// Builds an instance using the host's detected vector width.
    pub fn new(params: ParameterSet) -> Result<Self> {
        Self::with_detector(params, &HostDetector)
    }

    /// Builds an instance for a shipped security level (128, 192 or 256).
    pub fn for_security_level(bits: u32) -> Result<Self> {
        let params = ParameterSet::for_security_level(bits).ok_or(Error::Configuration {
            name: "security_level",
            reason: "no profile for this security level",
        })?;
        Self::new(params)
    }

    /// Builds an instance with the backend chosen by `detector`.
    pub fn with_detector<D: CapabilityDetector + ?Sized>(
        params: ParameterSet,
        detector: &D,
    ) -> Result<Self> {
        Self::with_backend(params, detector.detect().simd)
    }

    /// Builds an instance pinned to the backend for `simd`.
    pub fn with_backend(params: ParameterSet, simd: SimdSupport) -> Result<Self> {
        validate_parameters(&params)?;
        let engine = NttEngine::with_backend(simd, params.modulus, params.degree)?;
        Self::with_engine(params, Arc::new(engine))
    }

    /// Builds an instance over an existing engine, sharing its tables.
    pub fn with_engine(params: ParameterSet, engine: Arc<NttEngine>) -> Result<Self> {
        validate_parameters(&params)?;
        let ops = RingOperations::new(params, engine)?;
        let name = algorithm_name(&params);
        debug!(
            algorithm = name,
            k = params.module_rank,
            n = params.degree,
            q = params.modulus,
            eta = params.eta,
            backend = ops.engine().backend_name(),
            "lwe kem ready"
        );
        Ok(Self { name, ops })
    }

    pub fn params(&self) -> &ParameterSet {
        self.ops.params()
    }

    /// The shared transform engine
    pub fn engine(&self) -> &Arc<NttEngine> {
        self.ops.engine()
    }

    /// Matrix, vector and sampling operations for this parameter set
    pub fn ring_operations(&self) -> &RingOperations {
        &self.ops
    }

    /// Key generation from explicit seeds.
    ///
    /// `matrix_seed` becomes part of the public key; `noise_seed` drives s
    /// (streams `0..k`) and e (streams `k..2k`).
    pub fn keypair_from_seeds(
        &self,
        matrix_seed: &[u8; SEED_BYTES],
        noise_seed: &[u8; SEED_BYTES],
    ) -> Result<KeyPair> {
        let (t, s) = keypair_cpa(&self.ops, matrix_seed, noise_seed)?;
        let params = *self.params();
        trace!(algorithm = self.name, "keypair generated");
        Ok(KeyPair {
            public_key: PublicKey {
                params,
                seed: *matrix_seed,
                t,
            },
            private_key: PrivateKey { params, s },
        })
    }

    /// Encapsulation of an explicit message bit under explicit coins.
    ///
    /// Only the low bit of `message_bit` is used. The returned ciphertext's
    /// hint is `BE32(bit)`.
    pub fn encapsulate_with_coins(
        &self,
        public_key: &PublicKey,
        message_bit: u8,
        coins: &[u8; SEED_BYTES],
    ) -> Result<(Ciphertext, SharedSecret)> {
        self.check_public_key(public_key)?;
        let bit = message_bit & 1;
        let (c1, c2) = encrypt_cpa(&self.ops, &public_key.seed, &public_key.t, bit, coins)?;
        let shared = SharedSecret::new(bit as u32);
        trace!(algorithm = self.name, "encapsulated");
        Ok((
            Ciphertext {
                params: *self.params(),
                c1,
                c2,
                hint: shared.to_bytes(),
            },
            shared,
        ))
    }

    /// Encapsulation with the message bit and coins both expanded from `seed`.
    pub fn encapsulate_deterministic(
        &self,
        public_key: &PublicKey,
        seed: &[u8; SEED_BYTES],
    ) -> Result<(Ciphertext, SharedSecret)> {
        let mut sampler = NoiseSampler::init(seed)?;
        let mut material = [0u8; SEED_BYTES + 1];
        sampler.fill(&mut material)?;
        let mut coins = [0u8; SEED_BYTES];
        coins.copy_from_slice(&material[1..]);
        let result = self.encapsulate_with_coins(public_key, material[0], &coins);
        material.zeroize();
        coins.zeroize();
        result
    }

    /// Recovers the shared secret. The hint is not consulted.
    pub fn decapsulate_with_key(
        &self,
        private_key: &PrivateKey,
        ciphertext: &Ciphertext,
    ) -> Result<SharedSecret> {
        validate::key(
            private_key.params == *self.params(),
            "PrivateKey",
            "parameter set differs from this instance",
        )?;
        validate::ciphertext(
            ciphertext.params == *self.params(),
            self.name,
            "parameter set differs from this instance",
        )?;
        let bit = decrypt_cpa(&self.ops, &private_key.s, &ciphertext.c1, &ciphertext.c2)?;
        trace!(algorithm = self.name, "decapsulated");
        Ok(SharedSecret::new(bit as u32))
    }

    /// Structural compatibility of a key pair: shared parameters, rank k and
    /// degree n throughout. Says nothing about whether `t` was built from `s`.
    pub fn verify_keypair(&self, public_key: &PublicKey, private_key: &PrivateKey) -> bool {
        let p = self.params();
        public_key.params == *p
            && private_key.params == *p
            && public_key.t.is_shaped(p.module_rank, p.degree, p.modulus)
            && private_key.s.is_shaped(p.module_rank, p.degree, p.modulus)
    }

    /// Compares the serialized forms of two ciphertexts in constant time.
    pub fn ciphertexts_equal(a: &Ciphertext, b: &Ciphertext) -> bool {
        let a = a.to_bytes();
        let b = b.to_bytes();
        a.as_slice().ct_eq(b.as_slice()).into()
    }

    fn check_public_key(&self, public_key: &PublicKey) -> Result<()> {
        validate::key(
            public_key.params == *self.params(),
            "PublicKey",
            "parameter set differs from this instance",
        )
    }
}

impl KemTrait for LweKem {
    type PublicKey = PublicKey;
    type SecretKey = PrivateKey;
    type SharedSecret = SharedSecret;
    type Ciphertext = Ciphertext;
    type KeyPair = KeyPair;

    fn name(&self) -> &'static str {
        self.name
    }

    fn keypair<R: CryptoRng + RngCore>(&self, rng: &mut R) -> ApiResult<Self::KeyPair> {
        let matrix_seed = Seed::random(rng);
        let noise_seed = Seed::random(rng);
        Ok(self.keypair_from_seeds(&matrix_seed, &noise_seed)?)
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.public_key.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.private_key.clone()
    }

    fn encapsulate<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> ApiResult<(Self::Ciphertext, Self::SharedSecret)> {
        let message_bit = (rng.next_u32() & 1) as u8;
        let coins = Seed::random(rng);
        Ok(self.encapsulate_with_coins(public_key, message_bit, &coins)?)
    }

    fn decapsulate(
        &self,
        public_key: &Self::PublicKey,
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> ApiResult<Self::SharedSecret> {
        self.check_public_key(public_key)?;
        Ok(self.decapsulate_with_key(secret_key, ciphertext)?)
    }
}
