//! Traits for byte serialization of protocol objects.
//!
//! Encodings carry no length prefixes or parameter tags, so decoding needs the
//! out-of-band context (for lwekem, the parameter set) the object was built with.

use crate::Result;
use zeroize::Zeroizing;

/// A trait for public types that can be serialized to and from bytes.
pub trait Serialize: Sized {
    /// Out-of-band context needed to decode the byte form.
    type Context;

    /// Creates an object from a byte slice.
    ///
    /// Must never read past the end of `bytes`; malformed input is an error.
    fn from_bytes(context: &Self::Context, bytes: &[u8]) -> Result<Self>;

    /// Converts the object to a byte vector.
    fn to_bytes(&self) -> Vec<u8>;
}

/// A trait for secret types that can be securely serialized.
pub trait SerializeSecret: Sized {
    /// Out-of-band context needed to decode the byte form.
    type Context;

    /// Creates an object from a byte slice. Input should be zeroized after use.
    fn from_bytes(context: &Self::Context, bytes: &[u8]) -> Result<Self>;

    /// Converts the object to a byte vector that is zeroized on drop.
    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>>;
}
