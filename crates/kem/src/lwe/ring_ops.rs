// kem/src/lwe/ring_ops.rs

//! Matrix and vector arithmetic over the module R_q^k.

use std::sync::Arc;

use lwekem_algorithms::poly::sampling::sample_binomial_batch;
use lwekem_algorithms::{MatrixSampler, Modulus, NoiseSampler, NttEngine, RingElement};
use lwekem_params::pqc::lwekem::{ParameterSet, SEED_BYTES};

use super::polyvec::{Matrix, PolyVec};
use crate::error::{validate, Error, Result};

/// Ring-level operations for one parameter set.
///
/// Holds the transform engine behind an `Arc` so several instances over the
/// same (q, n) can share one set of tables.
#[derive(Debug, Clone)]
pub struct RingOperations {
    params: ParameterSet,
    modulus: Modulus,
    engine: Arc<NttEngine>,
}

impl RingOperations {
    /// Binds `params` to an engine built for the same (q, n).
    pub fn new(params: ParameterSet, engine: Arc<NttEngine>) -> Result<Self> {
        validate::configuration(
            engine.modulus().value() == params.modulus,
            "modulus",
            "engine modulus differs from parameter set",
        )?;
        validate::configuration(
            engine.degree() == params.degree,
            "degree",
            "engine degree differs from parameter set",
        )?;
        Ok(Self {
            params,
            modulus: *engine.modulus(),
            engine,
        })
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    pub fn modulus(&self) -> &Modulus {
        &self.modulus
    }

    pub fn engine(&self) -> &Arc<NttEngine> {
        &self.engine
    }

    /// Expands `seed` into the public k x k matrix.
    ///
    /// Entry (i, j) comes from its own SHAKE128 stream over `seed || i || j`,
    /// each coefficient rejection-sampled on its own.
    pub fn generate_matrix(&self, seed: &[u8; SEED_BYTES]) -> Result<Matrix> {
        let k = self.params.module_rank;
        let mut entries = Vec::with_capacity(k * k);
        for i in 0..k {
            for j in 0..k {
                let mut sampler =
                    MatrixSampler::init_parts(&[seed.as_slice(), &[i as u8, j as u8]])?;
                entries.push(sampler.sample_uniform_poly(self.params.degree, self.modulus)?);
            }
        }
        Ok(Matrix::from_entries(k, entries))
    }

    /// `result[i] = sum_j A[i][j] * v[j]`
    pub fn matrix_vector_multiply(&self, a: &Matrix, v: &PolyVec) -> Result<PolyVec> {
        self.multiply_by(a, v, false)
    }

    /// `result[i] = sum_j A[j][i] * v[j]`
    pub fn matrix_transpose_vector_multiply(&self, a: &Matrix, v: &PolyVec) -> Result<PolyVec> {
        self.multiply_by(a, v, true)
    }

    fn multiply_by(&self, a: &Matrix, v: &PolyVec, transpose: bool) -> Result<PolyVec> {
        let k = self.params.module_rank;
        let n = self.params.degree;
        validate::configuration(a.rank() == k, "matrix", "matrix rank differs from k")?;
        self.check_vector(v, "vector")?;

        let a_hat = a.to_ntt(&self.engine)?;
        let mut v_hat = v.clone();
        v_hat.ntt_inplace(&self.engine)?;

        let mut out = Vec::with_capacity(k);
        for i in 0..k {
            let mut acc = vec![0u32; n];
            for j in 0..k {
                let (row, col) = if transpose { (j, i) } else { (i, j) };
                let entry = a_hat.get(row, col).ok_or(Error::Configuration {
                    name: "matrix",
                    reason: "matrix entry out of range",
                })?;
                self.engine.pointwise_accumulate(
                    &mut acc,
                    entry.as_coeffs_slice(),
                    v_hat.polys[j].as_coeffs_slice(),
                )?;
            }
            self.engine.inverse(&mut acc)?;
            out.push(RingElement::from_coeffs(acc, self.modulus)?);
        }
        Ok(PolyVec::from_polys(out))
    }

    /// `sum_i a[i] * b[i]`
    pub fn inner_product(&self, a: &PolyVec, b: &PolyVec) -> Result<RingElement> {
        self.check_vector(a, "left operand")?;
        self.check_vector(b, "right operand")?;

        let n = self.params.degree;
        let mut acc = vec![0u32; n];
        for (x, y) in a.polys.iter().zip(b.polys.iter()) {
            let mut x_hat = x.as_coeffs_slice().to_vec();
            let mut y_hat = y.as_coeffs_slice().to_vec();
            self.engine.forward(&mut x_hat)?;
            self.engine.forward(&mut y_hat)?;
            self.engine.pointwise_accumulate(&mut acc, &x_hat, &y_hat)?;
        }
        self.engine.inverse(&mut acc)?;
        Ok(RingElement::from_coeffs(acc, self.modulus)?)
    }

    /// Places byte `i` of `message` in coefficient `i` (reduced mod q).
    pub fn encode_message_to_ring(&self, message: &[u8]) -> Result<RingElement> {
        let n = self.params.degree;
        validate::configuration(
            message.len() <= n,
            "message",
            "message longer than the ring degree",
        )?;
        let mut coeffs = vec![0u32; n];
        for (c, &b) in coeffs.iter_mut().zip(message) {
            *c = b as u32;
        }
        Ok(RingElement::from_coeffs_reduced(&coeffs, self.modulus))
    }

    /// Reads `len` bytes back, byte `i` being coefficient `i` mod 256.
    pub fn decode_ring_to_message(&self, element: &RingElement, len: usize) -> Result<Vec<u8>> {
        validate::configuration(
            len <= element.degree(),
            "message",
            "requested length exceeds the ring degree",
        )?;
        Ok(element.as_coeffs_slice()[..len]
            .iter()
            .map(|&c| (c % 256) as u8)
            .collect())
    }

    /// k binomial secret elements from streams `first_index..first_index + k`.
    pub fn sample_secret_vector(&self, seed: &[u8], first_index: u16) -> Result<PolyVec> {
        self.sample_noise_vector(seed, first_index)
    }

    /// k binomial error elements from streams `first_index..first_index + k`.
    pub fn sample_error_vector(&self, seed: &[u8], first_index: u16) -> Result<PolyVec> {
        self.sample_noise_vector(seed, first_index)
    }

    /// One binomial element from stream `index`.
    pub fn sample_noise_element(&self, seed: &[u8], index: u16) -> Result<RingElement> {
        let mut sampler = NoiseSampler::derive(seed, index)?;
        Ok(sampler.sample_binomial_poly(self.params.eta, self.params.degree, self.modulus)?)
    }

    fn sample_noise_vector(&self, seed: &[u8], first_index: u16) -> Result<PolyVec> {
        let polys = sample_binomial_batch(
            seed,
            first_index,
            self.params.module_rank,
            self.params.eta,
            self.params.degree,
            self.modulus,
        )?;
        Ok(PolyVec::from_polys(polys))
    }

    /// Big-endian concatenation of the vector's elements.
    pub fn serialize_vector(&self, v: &PolyVec) -> Vec<u8> {
        v.to_bytes()
    }

    /// Inverse of [`serialize_vector`](Self::serialize_vector) for a rank-k vector.
    pub fn deserialize_vector(&self, bytes: &[u8]) -> Result<PolyVec> {
        PolyVec::from_bytes(
            bytes,
            self.params.module_rank,
            self.params.degree,
            self.modulus,
        )
    }

    fn check_vector(&self, v: &PolyVec, what: &'static str) -> Result<()> {
        validate::configuration(
            v.is_shaped(
                self.params.module_rank,
                self.params.degree,
                self.params.modulus,
            ),
            what,
            "vector shape differs from (k, n, q)",
        )
    }
}
