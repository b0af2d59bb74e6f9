//! Constants for the module-LWE key encapsulation mechanism

/// Ring degree shared by every shipped profile
pub const LWEKEM_N: usize = 256;

/// Prime modulus shared by every shipped profile (2^8 * 13 + 1)
pub const LWEKEM_Q: u32 = 3329;

/// Size in bytes of matrix and noise seeds
pub const SEED_BYTES: usize = 32;

/// Bytes per serialized coefficient in the wire format
pub const COEFF_BYTES: usize = 4;

/// Bytes in the encoding hint appended to a ciphertext
pub const HINT_BYTES: usize = 4;

/// Session configuration for one KEM instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterSet {
    /// Claimed security level in bits
    pub security_level: u32,

    /// Ring degree n (power of two)
    pub degree: usize,

    /// Module rank k
    pub module_rank: usize,

    /// Prime modulus q
    pub modulus: u32,

    /// Centered binomial width
    pub eta: u32,
}

/// 128-bit profile
pub const LWEKEM_128: ParameterSet = ParameterSet {
    security_level: 128,
    degree: LWEKEM_N,
    module_rank: 2,
    modulus: LWEKEM_Q,
    eta: 2,
};

/// 192-bit profile
pub const LWEKEM_192: ParameterSet = ParameterSet {
    security_level: 192,
    degree: LWEKEM_N,
    module_rank: 3,
    modulus: LWEKEM_Q,
    eta: 2,
};

/// 256-bit profile
pub const LWEKEM_256: ParameterSet = ParameterSet {
    security_level: 256,
    degree: LWEKEM_N,
    module_rank: 4,
    modulus: LWEKEM_Q,
    eta: 2,
};

impl ParameterSet {
    /// Looks up the shipped profile for a security level.
    pub const fn for_security_level(bits: u32) -> Option<ParameterSet> {
        match bits {
            128 => Some(LWEKEM_128),
            192 => Some(LWEKEM_192),
            256 => Some(LWEKEM_256),
            _ => None,
        }
    }

    /// Serialized size of one ring element
    pub const fn ring_element_bytes(&self) -> usize {
        self.degree * COEFF_BYTES
    }

    /// Serialized size of a rank-k vector of ring elements
    pub const fn vector_bytes(&self) -> usize {
        self.module_rank * self.ring_element_bytes()
    }

    /// seed || t
    pub const fn public_key_bytes(&self) -> usize {
        SEED_BYTES + self.vector_bytes()
    }

    /// s
    pub const fn private_key_bytes(&self) -> usize {
        self.vector_bytes()
    }

    /// c1 || c2 || hint
    pub const fn ciphertext_bytes(&self) -> usize {
        self.vector_bytes() + self.ring_element_bytes() + HINT_BYTES
    }

    /// Encoding of the single-bit shared secret
    pub const fn shared_secret_bytes(&self) -> usize {
        HINT_BYTES
    }
}

impl Default for ParameterSet {
    fn default() -> Self {
        LWEKEM_128
    }
}
