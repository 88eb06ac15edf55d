use std::fmt;

use crate::scheme::{Operation, SchemeKind};

/// Failure of a key generation, encryption, decryption or homomorphic
/// operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PheError {
    /// Invalid key size, unavailable randomness, or a bounded sampling loop
    /// (key generation, or the unit `r` of Paillier encryption) that ran out
    /// of retries.
    KeyGeneration(String),
    /// Plaintext outside the message space of the key.
    Encoding(String),
    /// Operands were produced under different moduli.
    KeyMismatch,
    /// Missing modular inverse or inexact L-function: the ciphertext is corrupted.
    Decryption(String),
    /// The scheme does not provide this homomorphism.
    UnsupportedOperation { scheme: SchemeKind, operation: Operation },
}

impl fmt::Display for PheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PheError::KeyGeneration(msg) => write!(f, "key generation failed: {}", msg),
            PheError::Encoding(msg) => write!(f, "invalid plaintext: {}", msg),
            PheError::KeyMismatch => write!(f, "operands were produced under different keys"),
            PheError::Decryption(msg) => write!(f, "decryption failed: {}", msg),
            PheError::UnsupportedOperation { scheme, operation } => {
                write!(f, "{} does not support homomorphic {}", scheme, operation)
            }
        }
    }
}

impl std::error::Error for PheError {}

pub type Result<T> = std::result::Result<T, PheError>;
