//! End-to-end key agreement over the shipped profiles

use lwekem_algorithms::SimdSupport;
use lwekem_api::{Kem, Serialize};
use lwekem_kem::LweKem;
use lwekem_params::LWEKEM_128;
use lwekem_tests::{run_trials, seeded_rng, PROFILES};

#[test]
fn thousand_trials_per_profile() {
    for (i, params) in PROFILES.into_iter().enumerate() {
        let kem = LweKem::new(params).unwrap();
        let mut rng = seeded_rng(1000 + i as u64);
        let report = run_trials(&kem, 1000, &mut rng);
        assert!(
            report.success_rate() >= 0.99,
            "{}: {} of {} agreed",
            kem.name(),
            report.agreements,
            report.trials
        );
    }
}

#[test]
fn zero_matrix_seed_with_message_one() {
    let kem = LweKem::with_backend(LWEKEM_128, SimdSupport::None).unwrap();
    let kp = kem.keypair_from_seeds(&[0u8; 32], &[0x5a; 32]).unwrap();
    assert_eq!(kp.public_key().seed(), &[0u8; 32]);

    let (ct, ss) = kem
        .encapsulate_with_coins(kp.public_key(), 1, &[0xc3; 32])
        .unwrap();
    assert_eq!(ss.value(), 1);

    let bytes = ct.to_bytes();
    assert_eq!(bytes.len(), 3076);
    assert_eq!(&bytes[3072..], &[0, 0, 0, 1]);

    let recovered = kem
        .decapsulate(kp.public_key(), kp.private_key(), &ct)
        .unwrap();
    assert_eq!(recovered.value(), 1);
}

#[test]
fn message_zero_is_recovered_too() {
    let kem = LweKem::with_backend(LWEKEM_128, SimdSupport::None).unwrap();
    let kp = kem.keypair_from_seeds(&[0u8; 32], &[0x5a; 32]).unwrap();
    let (ct, ss) = kem
        .encapsulate_with_coins(kp.public_key(), 0, &[0xc3; 32])
        .unwrap();
    assert_eq!(ss.value(), 0);
    assert_eq!(ct.hint(), &[0, 0, 0, 0]);
    let recovered = kem.decapsulate_with_key(kp.private_key(), &ct).unwrap();
    assert_eq!(recovered.value(), 0);
}

#[test]
fn noise_stays_within_eta() {
    let kem = LweKem::new(LWEKEM_128).unwrap();
    let ops = kem.ring_operations();
    let kp = kem.keypair_from_seeds(&[1u8; 32], &[2u8; 32]).unwrap();

    let a = ops.generate_matrix(kp.public_key().seed()).unwrap();
    let s = kp.private_key().secret_vector();
    let mut e = kp.public_key().public_vector().clone();
    e.sub_assign(&ops.matrix_vector_multiply(&a, s).unwrap());

    assert!(s.infinity_norm() <= LWEKEM_128.eta);
    assert!(e.infinity_norm() <= LWEKEM_128.eta);
}
