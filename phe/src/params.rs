//! Key generation parameters.

use crate::error::{PheError, Result};

/// Key size, in bits, used when the caller has no preference.
pub const DEFAULT_KEY_SIZE: u32 = 2048;

/// Smallest key size accepted by [KeyGenParams::validate].
///
/// Below this the prime search degenerates (Paillier factors of a handful of
/// bits, ElGamal groups without room for `1 < x < p - 1`).
pub const MIN_KEY_SIZE: u32 = 16;

/// Bounds on the rejection-sampling loops of key generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyGenParams {
    /// Attempts per sampled quantity (prime, generator, secret exponent,
    /// coprime factor pair) before key generation gives up.
    pub max_retries: usize,
    /// Miller-Rabin rounds used to confirm every generated prime.
    pub primality_reps: u32,
}

impl Default for KeyGenParams {
    fn default() -> Self {
        Self {
            max_retries: 64,
            primality_reps: 30,
        }
    }
}

impl KeyGenParams {
    pub fn validate(&self, key_size: u32) -> Result<()> {
        if key_size < MIN_KEY_SIZE {
            return Err(PheError::KeyGeneration(format!(
                "key size {} is below the minimum of {} bits",
                key_size, MIN_KEY_SIZE
            )));
        }
        if self.max_retries == 0 {
            return Err(PheError::KeyGeneration("max_retries must be at least 1".to_string()));
        }
        if self.primality_reps == 0 {
            return Err(PheError::KeyGeneration("primality_reps must be at least 1".to_string()));
        }
        Ok(())
    }
}
