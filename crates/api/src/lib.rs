//! Public API traits and types for the lwekem library
//!
//! This crate provides the public API surface shared by every lwekem crate:
//! the error type, the [`Kem`] and serialization traits, and zeroizing
//! containers for secret bytes.

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use types::*;

pub use traits::{Kem, Serialize, SerializeSecret};
pub use traits::{kem, serialize};
