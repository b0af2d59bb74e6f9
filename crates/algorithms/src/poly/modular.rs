//! modular.rs - Arithmetic in Z_q for moduli chosen at runtime
//!
//! Reduction is Barrett-style with a 64-bit constant, so every product of two
//! reduced coefficients reduces with one multiply-high and one conditional
//! subtraction.

use crate::error::{validate, Error, Result};

/// Largest supported modulus (exclusive); keeps `a + b` inside a `u32`.
pub const MAX_MODULUS: u32 = 1 << 31;

/// Returns true if `n` is a non-zero power of two
#[inline]
pub fn is_power_of_two(n: usize) -> bool {
    n != 0 && n & (n - 1) == 0
}

/// Deterministic primality by trial division; moduli here are at most 31 bits.
pub fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let n = n as u64;
    let mut d = 3u64;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// Distinct prime factors of `n`, ascending.
pub fn prime_factors(mut n: u32) -> Vec<u32> {
    let mut factors = Vec::new();
    let mut d = 2u32;
    while (d as u64) * (d as u64) <= n as u64 {
        if n % d == 0 {
            factors.push(d);
            while n % d == 0 {
                n /= d;
            }
        }
        d += 1;
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}

/// Modular exponentiation by square-and-multiply.
#[inline]
pub fn pow_mod(base: u32, mut exp: u64, q: u32) -> u32 {
    let q64 = q as u64;
    let mut base = base as u64 % q64;
    let mut acc = 1u64 % q64;
    while exp != 0 {
        if exp & 1 == 1 {
            acc = acc * base % q64;
        }
        base = base * base % q64;
        exp >>= 1;
    }
    acc as u32
}

/// Multiplicative inverse of `a` mod `q`, if one exists.
pub fn mod_inverse(a: u32, q: u32) -> Option<u32> {
    let (mut old_r, mut r) = (a as i64 % q as i64, q as i64);
    let (mut old_s, mut s) = (1i64, 0i64);
    while r != 0 {
        let quotient = old_r / r;
        (old_r, r) = (r, old_r - quotient * r);
        (old_s, s) = (s, old_s - quotient * s);
    }
    if old_r != 1 {
        return None;
    }
    Some(old_s.rem_euclid(q as i64) as u32)
}

/// Smallest generator of the multiplicative group mod a prime `q`.
pub fn primitive_root(q: u32) -> Result<u32> {
    validate::parameter(is_prime(q), "modulus", "modulus must be prime")?;
    if q == 2 {
        return Ok(1);
    }
    let order = q - 1;
    let factors = prime_factors(order);
    (2..q)
        .find(|&g| {
            factors
                .iter()
                .all(|&p| pow_mod(g, (order / p) as u64, q) != 1)
        })
        .ok_or_else(|| Error::param("modulus", "no primitive root found"))
}

/// A validated modulus with its Barrett constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modulus {
    q: u32,
    mu: u64,
}

impl Modulus {
    /// Builds arithmetic for `q`; `q` must lie in `[2, MAX_MODULUS)`.
    pub fn new(q: u32) -> Result<Self> {
        validate::parameter(q >= 2, "modulus", "modulus must be at least 2")?;
        validate::parameter(q < MAX_MODULUS, "modulus", "modulus must be below 2^31")?;
        let mu = ((1u128 << 64) / q as u128) as u64;
        Ok(Self { q, mu })
    }

    /// The modulus value q
    #[inline(always)]
    pub fn value(&self) -> u32 {
        self.q
    }

    /// Reduces any 64-bit value into `[0, q)`.
    #[inline(always)]
    pub fn reduce(&self, x: u64) -> u32 {
        let t = ((x as u128 * self.mu as u128) >> 64) as u64;
        let r = x - t * self.q as u64;
        let mask = ((r >= self.q as u64) as u64).wrapping_neg();
        (r - (self.q as u64 & mask)) as u32
    }

    #[inline(always)]
    pub fn add(&self, a: u32, b: u32) -> u32 {
        let t = a + b;
        let mask = ((t >= self.q) as u32).wrapping_neg();
        t - (self.q & mask)
    }

    #[inline(always)]
    pub fn sub(&self, a: u32, b: u32) -> u32 {
        let t = a + self.q - b;
        let mask = ((t >= self.q) as u32).wrapping_neg();
        t - (self.q & mask)
    }

    #[inline(always)]
    pub fn neg(&self, a: u32) -> u32 {
        self.sub(0, a)
    }

    #[inline(always)]
    pub fn mul(&self, a: u32, b: u32) -> u32 {
        self.reduce(a as u64 * b as u64)
    }

    /// Maps a small signed value into `[0, q)`.
    #[inline]
    pub fn from_signed(&self, v: i64) -> u32 {
        v.rem_euclid(self.q as i64) as u32
    }

    /// Distance of `c` from zero on the modular circle: `min(c, q - c)`.
    #[inline]
    pub fn centered_abs(&self, c: u32) -> u32 {
        let c = c % self.q;
        c.min(self.q - c)
    }

    /// Modular exponentiation
    pub fn pow(&self, base: u32, exp: u64) -> u32 {
        pow_mod(base, exp, self.q)
    }

    /// Multiplicative inverse, if `a` is a unit
    pub fn inverse(&self, a: u32) -> Option<u32> {
        mod_inverse(a, self.q)
    }
}
