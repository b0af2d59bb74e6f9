//! Error handling for the lwekem ecosystem

pub mod types;

pub use types::{Error, Result};
