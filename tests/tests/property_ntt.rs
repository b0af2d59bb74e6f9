//! Property-based tests for the NTT engine and ring elements

use lwekem_algorithms::{Modulus, NoiseSampler, NttEngine, RingElement, SimdSupport};
use proptest::prelude::*;

fn coeffs(q: u32, n: usize) -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0..q, n)
}

fn backend() -> impl Strategy<Value = SimdSupport> {
    prop::sample::select(SimdSupport::ALL.to_vec())
}

proptest! {
    #[test]
    fn round_trip_3329_256(x in coeffs(3329, 256), simd in backend()) {
        let engine = NttEngine::with_backend(simd, 3329, 256).unwrap();
        let mut y = x.clone();
        engine.forward(&mut y).unwrap();
        engine.inverse(&mut y).unwrap();
        prop_assert_eq!(y, x);
    }

    #[test]
    fn round_trip_17_8(x in coeffs(17, 8), simd in backend()) {
        let engine = NttEngine::with_backend(simd, 17, 8).unwrap();
        let mut y = x.clone();
        engine.forward(&mut y).unwrap();
        engine.inverse(&mut y).unwrap();
        prop_assert_eq!(y, x);
    }

    #[test]
    fn multiply_matches_schoolbook_17_8(a in coeffs(17, 8), b in coeffs(17, 8)) {
        let m = Modulus::new(17).unwrap();
        let engine = NttEngine::with_backend(SimdSupport::None, 17, 8).unwrap();
        let ra = RingElement::from_coeffs(a, m).unwrap();
        let rb = RingElement::from_coeffs(b, m).unwrap();
        prop_assert_eq!(ra.ntt_mul(&rb, &engine).unwrap(), ra.schoolbook_mul(&rb));
    }

    #[test]
    fn multiply_matches_schoolbook_3329_256(
        a in coeffs(3329, 256),
        b in coeffs(3329, 256),
        simd in backend(),
    ) {
        let m = Modulus::new(3329).unwrap();
        let engine = NttEngine::with_backend(simd, 3329, 256).unwrap();
        let ra = RingElement::from_coeffs(a, m).unwrap();
        let rb = RingElement::from_coeffs(b, m).unwrap();
        prop_assert_eq!(ra.ntt_mul(&rb, &engine).unwrap(), ra.schoolbook_mul(&rb));
    }

    #[test]
    fn wide_backends_match_scalar(x in coeffs(3329, 256), simd in backend()) {
        let scalar = NttEngine::with_backend(SimdSupport::None, 3329, 256).unwrap();
        let wide = NttEngine::with_backend(simd, 3329, 256).unwrap();
        let mut a = x.clone();
        let mut b = x;
        scalar.forward(&mut a).unwrap();
        wide.forward(&mut b).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn bytes_round_trip(x in coeffs(3329, 256)) {
        let m = Modulus::new(3329).unwrap();
        let e = RingElement::from_coeffs(x, m).unwrap();
        prop_assert_eq!(RingElement::from_bytes(&e.to_bytes(), 256, m).unwrap(), e.clone());
        prop_assert_eq!(
            RingElement::from_compact_bytes(&e.to_compact_bytes().unwrap(), 256, m).unwrap(),
            e
        );
    }

    #[test]
    fn sampler_is_a_function_of_seed_and_length(seed in any::<[u8; 32]>(), len in 0usize..600) {
        let a = NoiseSampler::init(&seed).unwrap().squeeze(len).unwrap();
        let b = NoiseSampler::init(&seed).unwrap().squeeze(len).unwrap();
        prop_assert_eq!(a.len(), len);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn uniform_samples_stay_below_q(seed in any::<[u8; 32]>(), q in 2u32..70_000) {
        let mut sampler = NoiseSampler::init(&seed).unwrap();
        for _ in 0..64 {
            prop_assert!(sampler.sample_uniform(q).unwrap() < q);
        }
    }

    #[test]
    fn binomial_samples_stay_within_eta(seed in any::<[u8; 32]>(), eta in 1u32..=16) {
        let m = Modulus::new(3329).unwrap();
        let mut sampler = NoiseSampler::init(&seed).unwrap();
        for _ in 0..64 {
            let c = sampler.sample_binomial_coefficient(eta, &m).unwrap();
            prop_assert!(m.centered_abs(c) <= eta);
        }
    }
}
