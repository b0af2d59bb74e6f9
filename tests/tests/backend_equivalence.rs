//! Every wide backend must reproduce the scalar backend bit for bit

use lwekem_algorithms::{FixedDetector, NttEngine, SimdSupport};
use lwekem_api::{Kem, Serialize, SerializeSecret};
use lwekem_kem::LweKem;
use lwekem_tests::{seeded_rng, PROFILES, TOY};

#[test]
fn keypairs_and_ciphertexts_are_byte_identical() {
    for params in PROFILES.into_iter().chain([TOY]) {
        let reference = LweKem::with_backend(params, SimdSupport::None).unwrap();
        let mut rng = seeded_rng(2024);
        let kp = reference.keypair(&mut rng).unwrap();
        let (ct, ss) = reference.encapsulate(&mut rng, kp.public_key()).unwrap();

        for simd in SimdSupport::ALL {
            let kem = LweKem::with_detector(params, &FixedDetector::simd(simd)).unwrap();
            let mut rng = seeded_rng(2024);
            let kp2 = kem.keypair(&mut rng).unwrap();
            let (ct2, ss2) = kem.encapsulate(&mut rng, kp2.public_key()).unwrap();

            assert_eq!(kp.public_key().to_bytes(), kp2.public_key().to_bytes());
            assert_eq!(
                kp.private_key().to_bytes_zeroizing(),
                kp2.private_key().to_bytes_zeroizing()
            );
            assert_eq!(ct.to_bytes(), ct2.to_bytes(), "{}", simd.name());
            assert_eq!(ss, ss2);

            // keys from one backend decapsulate under another
            assert_eq!(
                kem.decapsulate(kp.public_key(), kp.private_key(), &ct)
                    .unwrap(),
                reference
                    .decapsulate(kp.public_key(), kp.private_key(), &ct)
                    .unwrap()
            );
        }
    }
}

#[test]
fn engine_names_follow_capability_tags() {
    for simd in SimdSupport::ALL {
        let engine = NttEngine::with_backend(simd, 3329, 256).unwrap();
        assert_eq!(engine.simd(), simd);
        let expected = match simd.lanes() {
            1 => "scalar",
            4 => "wide-x4",
            8 => "wide-x8",
            _ => "wide-x16",
        };
        assert_eq!(engine.backend_name(), expected);
    }
}
