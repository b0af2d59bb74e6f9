//! Ring arithmetic and sampling primitives for lwekem
//!
//! This crate provides the building blocks of the key encapsulation scheme:
//! exact arithmetic in Z_q, a number-theoretic transform engine with
//! interchangeable batch-width backends, ring elements of Z_q[x]/(x^n - 1),
//! and deterministic samplers driven by SHAKE.

#![forbid(unsafe_code)]

pub mod error;
pub use error::{validate, Error, Result};

pub mod poly;
pub use poly::modular::Modulus;
pub use poly::ntt::{
    CapabilityDetector, CpuArchitecture, CpuCapabilities, FixedDetector, HostDetector, NttBackend,
    NttEngine, NttTables, SimdSupport,
};
pub use poly::polynomial::RingElement;
pub use poly::sampling::{EntropySampler, MatrixSampler, NoiseSampler};

pub mod xof;
pub use xof::{ExtendableOutputFunction, ShakeXof128, ShakeXof256};
