//! Polynomial ring engine
//!
//! Modular arithmetic, the NTT engine with its backends, ring elements,
//! seeded samplers and coefficient packing over Z_q[x]/(x^n - 1).

pub mod modular;
pub mod ntt;
pub mod polynomial;
pub mod sampling;
pub mod serialize;

/// Prelude for easy importing of common polynomial types and traits.
pub mod prelude {
    pub use super::modular::Modulus;
    pub use super::ntt::{CapabilityDetector, NttEngine, SimdSupport};
    pub use super::polynomial::RingElement;
    pub use super::sampling::{EntropySampler, MatrixSampler, NoiseSampler};
    pub use super::serialize::{Be32Codec, CoefficientCodec, Compact24Codec};
}
