//! Trait definitions shared across lwekem crates

pub mod kem;
pub mod serialize;

pub use kem::Kem;
pub use serialize::{Serialize, SerializeSecret};
