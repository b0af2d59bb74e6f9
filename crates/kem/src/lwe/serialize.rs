// kem/src/lwe/serialize.rs

//! Fixed-layout byte encodings of keys and ciphertexts.
//!
//! Every field is written at a fixed length derived from the parameter set,
//! with no length prefixes or tags:
//!
//! | object     | layout                    | size                  |
//! |------------|---------------------------|-----------------------|
//! | PublicKey  | seed ‖ t                  | 32 + k·n·4            |
//! | PrivateKey | s                         | k·n·4                 |
//! | Ciphertext | c1 ‖ c2 ‖ hint            | (k+1)·n·4 + 4         |
//!
//! Coefficients are big-endian `u32` and must be below q.

use lwekem_algorithms::{Modulus, RingElement};
use lwekem_params::pqc::lwekem::{ParameterSet, HINT_BYTES, SEED_BYTES};

use super::keys::{Ciphertext, PrivateKey, PublicKey};
use super::params::validate_parameters;
use super::polyvec::PolyVec;
use crate::error::{validate, Result};

fn modulus_for(params: &ParameterSet) -> Result<Modulus> {
    validate_parameters(params)?;
    Ok(Modulus::new(params.modulus)?)
}

pub(crate) fn pack_public_key(pk: &PublicKey) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(pk.params.public_key_bytes());
    bytes.extend_from_slice(&pk.seed);
    bytes.extend_from_slice(&pk.t.to_bytes());
    bytes
}

pub(crate) fn unpack_public_key(params: &ParameterSet, bytes: &[u8]) -> Result<PublicKey> {
    let modulus = modulus_for(params)?;
    validate::length("PublicKey", bytes.len(), params.public_key_bytes())?;

    let (seed_bytes, t_bytes) = bytes.split_at(SEED_BYTES);
    let mut seed = [0u8; SEED_BYTES];
    seed.copy_from_slice(seed_bytes);
    let t = PolyVec::from_bytes(t_bytes, params.module_rank, params.degree, modulus)?;

    Ok(PublicKey {
        params: *params,
        seed,
        t,
    })
}

pub(crate) fn pack_private_key(sk: &PrivateKey) -> Vec<u8> {
    sk.s.to_bytes()
}

pub(crate) fn unpack_private_key(params: &ParameterSet, bytes: &[u8]) -> Result<PrivateKey> {
    let modulus = modulus_for(params)?;
    validate::length("PrivateKey", bytes.len(), params.private_key_bytes())?;
    let s = PolyVec::from_bytes(bytes, params.module_rank, params.degree, modulus)?;
    Ok(PrivateKey {
        params: *params,
        s,
    })
}

pub(crate) fn pack_ciphertext(ct: &Ciphertext) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(ct.params.ciphertext_bytes());
    bytes.extend_from_slice(&ct.c1.to_bytes());
    bytes.extend_from_slice(&ct.c2.to_bytes());
    bytes.extend_from_slice(&ct.hint);
    bytes
}

pub(crate) fn unpack_ciphertext(params: &ParameterSet, bytes: &[u8]) -> Result<Ciphertext> {
    let modulus = modulus_for(params)?;
    validate::length("Ciphertext", bytes.len(), params.ciphertext_bytes())?;

    let (c1_bytes, rest) = bytes.split_at(params.vector_bytes());
    let (c2_bytes, hint_bytes) = rest.split_at(params.ring_element_bytes());

    let c1 = PolyVec::from_bytes(c1_bytes, params.module_rank, params.degree, modulus)?;
    let c2 = RingElement::from_bytes(c2_bytes, params.degree, modulus)?;
    let mut hint = [0u8; HINT_BYTES];
    hint.copy_from_slice(hint_bytes);

    Ok(Ciphertext {
        params: *params,
        c1,
        c2,
        hint,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lwekem_params::pqc::lwekem::LWEKEM_128;

    fn toy() -> ParameterSet {
        ParameterSet {
            security_level: 0,
            degree: 8,
            module_rank: 2,
            modulus: 17,
            eta: 1,
        }
    }

    fn sample_public_key() -> PublicKey {
        let params = toy();
        let modulus = Modulus::new(17).unwrap();
        let polys = (0..2)
            .map(|i| {
                RingElement::from_coeffs((0..8).map(|c| (c + i) % 17).collect(), modulus).unwrap()
            })
            .collect();
        PublicKey {
            params,
            seed: [0xab; SEED_BYTES],
            t: PolyVec::from_polys(polys),
        }
    }

    #[test]
    fn public_key_layout() {
        let pk = sample_public_key();
        let bytes = pack_public_key(&pk);
        assert_eq!(bytes.len(), 32 + 2 * 8 * 4);
        assert_eq!(&bytes[..32], &[0xab; 32]);
        assert_eq!(&bytes[32..40], &[0, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(unpack_public_key(&toy(), &bytes).unwrap(), pk);
    }

    #[test]
    fn ciphertext_layout() {
        let modulus = Modulus::new(17).unwrap();
        let ct = Ciphertext {
            params: toy(),
            c1: PolyVec::zero(2, 8, modulus),
            c2: RingElement::from_coeffs(vec![4, 0, 0, 0, 0, 0, 0, 16], modulus).unwrap(),
            hint: [0, 0, 0, 1],
        };
        let bytes = pack_ciphertext(&ct);
        assert_eq!(bytes.len(), toy().ciphertext_bytes());
        assert_eq!(bytes.len(), 3 * 8 * 4 + 4);
        assert_eq!(&bytes[bytes.len() - 4..], &[0, 0, 0, 1]);
        assert_eq!(&bytes[64..68], &[0, 0, 0, 4]);
        assert_eq!(unpack_ciphertext(&toy(), &bytes).unwrap(), ct);
    }

    #[test]
    fn short_and_empty_buffers_fail() {
        let bytes = pack_public_key(&sample_public_key());
        for len in [0, 1, 31, 32, bytes.len() - 1] {
            assert!(unpack_public_key(&toy(), &bytes[..len]).is_err());
        }
        let mut long = bytes.clone();
        long.push(0);
        assert!(unpack_public_key(&toy(), &long).is_err());
        assert!(unpack_private_key(&toy(), &[]).is_err());
        assert!(unpack_ciphertext(&toy(), &[0u8; 10]).is_err());
    }

    #[test]
    fn out_of_range_coefficient_fails() {
        let mut bytes = pack_public_key(&sample_public_key());
        bytes[35] = 17;
        assert!(unpack_public_key(&toy(), &bytes).is_err());

        let mut sk = vec![0u8; LWEKEM_128.private_key_bytes()];
        sk[2] = 0x0d;
        sk[3] = 0x01; // 3329
        assert!(unpack_private_key(&LWEKEM_128, &sk).is_err());
        sk[3] = 0x00; // 3328
        assert!(unpack_private_key(&LWEKEM_128, &sk).is_ok());
    }

    #[test]
    fn invalid_parameters_fail_before_parsing() {
        let mut params = toy();
        params.module_rank = 9;
        assert!(unpack_private_key(&params, &[0u8; 9 * 8 * 4]).is_err());
    }

    #[test]
    fn unusable_degrees_are_configuration_errors() {
        use crate::error::Error;

        let huge = ParameterSet {
            degree: 1 << 62,
            module_rank: 4,
            ..LWEKEM_128
        };
        let odd = ParameterSet {
            degree: 3,
            ..LWEKEM_128
        };
        for params in [huge, odd] {
            for len in [0, 4, 32, 36, 3 * 4 * 5 + 36] {
                let bytes = vec![0u8; len];
                assert!(matches!(
                    unpack_public_key(&params, &bytes),
                    Err(Error::Configuration { name: "degree", .. })
                ));
                assert!(matches!(
                    unpack_private_key(&params, &bytes),
                    Err(Error::Configuration { name: "degree", .. })
                ));
                assert!(matches!(
                    unpack_ciphertext(&params, &bytes),
                    Err(Error::Configuration { name: "degree", .. })
                ));
            }
        }
    }
}
