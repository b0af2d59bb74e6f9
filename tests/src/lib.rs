//! Shared fixtures for the lwekem integration and property tests

use lwekem_api::Kem;
use lwekem_kem::LweKem;
use lwekem_params::{ParameterSet, LWEKEM_128, LWEKEM_192, LWEKEM_256};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// The shipped profiles
pub const PROFILES: [ParameterSet; 3] = [LWEKEM_128, LWEKEM_192, LWEKEM_256];

/// q = 17, n = 8: small enough to check by hand
pub const TOY: ParameterSet = ParameterSet {
    security_level: 0,
    degree: 8,
    module_rank: 2,
    modulus: 17,
    eta: 1,
};

/// Deterministic generator for reproducible runs
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Outcome of a batch of full keygen/encapsulate/decapsulate runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialReport {
    pub trials: usize,
    pub agreements: usize,
}

impl TrialReport {
    pub fn success_rate(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.agreements as f64 / self.trials as f64
    }
}

/// Runs `trials` independent key agreements, each with a fresh key pair.
pub fn run_trials(kem: &LweKem, trials: usize, rng: &mut ChaCha20Rng) -> TrialReport {
    let mut agreements = 0;
    for _ in 0..trials {
        let kp = kem.keypair(rng).expect("keypair");
        let (ct, ss) = kem.encapsulate(rng, kp.public_key()).expect("encapsulate");
        let recovered = kem
            .decapsulate(kp.public_key(), kp.private_key(), &ct)
            .expect("decapsulate");
        if recovered == ss {
            agreements += 1;
        }
    }
    TrialReport { trials, agreements }
}
