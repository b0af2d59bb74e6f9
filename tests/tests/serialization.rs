//! Wire format round trips and malformed-input handling

use lwekem_api::{Kem, Serialize, SerializeSecret};
use lwekem_kem::{Ciphertext, LweKem, PrivateKey, PublicKey, SharedSecret};
use lwekem_params::{ParameterSet, LWEKEM_128};
use lwekem_tests::{seeded_rng, PROFILES, TOY};
use proptest::prelude::*;

#[test]
fn round_trip_every_profile() {
    let mut rng = seeded_rng(5);
    for params in PROFILES.into_iter().chain([TOY]) {
        let kem = LweKem::new(params).unwrap();
        let kp = kem.keypair(&mut rng).unwrap();
        let (ct, ss) = kem.encapsulate(&mut rng, kp.public_key()).unwrap();

        let pk_bytes = kp.public_key().to_bytes();
        let sk_bytes = kp.private_key().to_bytes_zeroizing();
        let ct_bytes = ct.to_bytes();
        assert_eq!(pk_bytes.len(), params.public_key_bytes());
        assert_eq!(sk_bytes.len(), params.private_key_bytes());
        assert_eq!(ct_bytes.len(), params.ciphertext_bytes());

        let pk = PublicKey::from_bytes(&params, &pk_bytes).unwrap();
        let sk = PrivateKey::from_bytes(&params, &sk_bytes).unwrap();
        let ct2 = Ciphertext::from_bytes(&params, &ct_bytes).unwrap();
        assert_eq!(&pk, kp.public_key());
        assert_eq!(pk.to_bytes(), pk_bytes);
        assert_eq!(sk.to_bytes_zeroizing(), sk_bytes);
        assert_eq!(ct2, ct);
        assert!(LweKem::ciphertexts_equal(&ct2, &ct));

        let ss_bytes = ss.to_bytes_zeroizing();
        let ss2 = <SharedSecret as SerializeSecret>::from_bytes(&params, &ss_bytes).unwrap();
        assert_eq!(ss2, ss);
    }
}

#[test]
fn undersized_buffers_are_rejected() {
    let params = LWEKEM_128;
    let mut rng = seeded_rng(6);
    let kem = LweKem::new(params).unwrap();
    let kp = kem.keypair(&mut rng).unwrap();
    let (ct, _) = kem.encapsulate(&mut rng, kp.public_key()).unwrap();

    let pk = kp.public_key().to_bytes();
    let sk = kp.private_key().to_bytes_zeroizing();
    let ct = ct.to_bytes();

    for len in [0, 1, 4, 31, 32, 33, 1024, pk.len() - 1] {
        assert!(PublicKey::from_bytes(&params, &pk[..len]).is_err(), "pk len {}", len);
    }
    for len in [0, 3, 1024, sk.len() - 1] {
        assert!(PrivateKey::from_bytes(&params, &sk[..len]).is_err(), "sk len {}", len);
    }
    for len in [0, 4, 2048, ct.len() - 4, ct.len() - 1] {
        assert!(Ciphertext::from_bytes(&params, &ct[..len]).is_err(), "ct len {}", len);
    }
    assert!(SharedSecret::from_bytes(&[]).is_err());
}

#[test]
fn length_errors_report_sizes() {
    let err = PublicKey::from_bytes(&LWEKEM_128, &[0u8; 7]).unwrap_err();
    match err {
        lwekem_api::Error::InvalidLength {
            expected, actual, ..
        } => {
            assert_eq!(expected, 2080);
            assert_eq!(actual, 7);
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn unreduced_coefficients_are_rejected() {
    let params = LWEKEM_128;
    let mut bytes = vec![0u8; params.private_key_bytes()];
    bytes[..4].copy_from_slice(&3329u32.to_be_bytes());
    assert!(PrivateKey::from_bytes(&params, &bytes).is_err());
    bytes[..4].copy_from_slice(&u32::MAX.to_be_bytes());
    assert!(PrivateKey::from_bytes(&params, &bytes).is_err());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn arbitrary_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..400)) {
        let _ = PublicKey::from_bytes(&TOY, &bytes);
        let _ = PrivateKey::from_bytes(&TOY, &bytes);
        let _ = Ciphertext::from_bytes(&TOY, &bytes);
    }

    #[test]
    fn custom_degrees_never_panic(
        degree in prop_oneof![any::<usize>(), 0usize..70_000],
        module_rank in 2usize..=4,
        len in 0usize..64,
    ) {
        let params = ParameterSet { degree, module_rank, ..LWEKEM_128 };
        let bytes = vec![0u8; len];
        let pk = PublicKey::from_bytes(&params, &bytes);
        let sk = PrivateKey::from_bytes(&params, &bytes);
        let ct = Ciphertext::from_bytes(&params, &bytes);
        if !degree.is_power_of_two() || 3328 % degree != 0 {
            prop_assert!(pk.unwrap_err().is_configuration());
            prop_assert!(sk.unwrap_err().is_configuration());
            prop_assert!(ct.unwrap_err().is_configuration());
        }
    }

    #[test]
    fn well_shaped_ciphertexts_always_decapsulate(
        coeffs in prop::collection::vec(0u32..17, 24),
        hint in any::<[u8; 4]>(),
    ) {
        let kem = LweKem::new(TOY).unwrap();
        let kp = kem.keypair_from_seeds(&[1u8; 32], &[2u8; 32]).unwrap();
        let mut bytes = Vec::with_capacity(TOY.ciphertext_bytes());
        for c in &coeffs {
            bytes.extend_from_slice(&c.to_be_bytes());
        }
        bytes.extend_from_slice(&hint);
        let ct = Ciphertext::from_bytes(&TOY, &bytes).unwrap();
        let ss = kem.decapsulate(kp.public_key(), kp.private_key(), &ct).unwrap();
        prop_assert!(ss.value() <= 1);
    }
}
