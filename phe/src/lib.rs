//! # phe
//!
//! Partially homomorphic encryption over arbitrary-precision modular
//! arithmetic.
//!
//! Two engines share the [HomomorphicScheme] contract:
//!
//! - [ElGamal] -- multiplicative: `Dec(Enc(m1) * Enc(m2)) = m1 * m2 mod p`.
//! - [Paillier] -- additive: `Dec(Enc(m1) + Enc(m2)) = m1 + m2 mod n`, plus
//!   ciphertext-by-scalar multiplication.
//!
//! Each scheme declares its native homomorphism through [SchemeKind]; calling
//! an operation the scheme structurally lacks returns
//! [PheError::UnsupportedOperation] instead of an approximation.
//!
//! Randomness is never ambient: every call that samples takes a
//! `&mut sampling::source::Source`. Seed one from the OS with [os_source] and
//! [sampling::source::Source::branch] it per thread, or use a fixed seed in
//! tests.

mod arith;
pub mod elgamal;
pub mod encoding;
pub mod error;
pub mod paillier;
pub mod params;
pub mod scheme;
#[cfg(test)]
mod tests;

pub use elgamal::{ElGamal, ElGamalCiphertext, ElGamalPrivateKey, ElGamalPublicKey};
pub use error::{PheError, Result};
pub use paillier::{Paillier, PaillierCiphertext, PaillierPrivateKey, PaillierPublicKey};
pub use params::{DEFAULT_KEY_SIZE, KeyGenParams, MIN_KEY_SIZE};
pub use scheme::{HomomorphicScheme, Homomorphism, Operation, SchemeKind};

pub use rug::Integer;
pub use sampling::source::Source;

/// Seeds a [Source] from the operating system RNG.
///
/// Fails with [PheError::KeyGeneration] when secure randomness is unavailable.
pub fn os_source() -> Result<Source> {
    Source::from_os_rng().map_err(|err| PheError::KeyGeneration(format!("secure randomness unavailable: {}", err)))
}
