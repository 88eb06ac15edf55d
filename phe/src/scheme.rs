use std::fmt;

use rug::Integer;
use sampling::source::Source;

use crate::encoding;
use crate::error::Result;

/// The homomorphism a scheme evaluates natively on ciphertexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Homomorphism {
    Additive,
    Multiplicative,
}

/// Homomorphic operations of the shared contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Multiply,
    MultiplyScalar,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add => write!(f, "addition"),
            Operation::Multiply => write!(f, "multiplication"),
            Operation::MultiplyScalar => write!(f, "scalar multiplication"),
        }
    }
}

/// Closed set of schemes implemented by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeKind {
    ElGamal,
    Paillier,
}

impl SchemeKind {
    pub fn native(&self) -> Homomorphism {
        match self {
            SchemeKind::ElGamal => Homomorphism::Multiplicative,
            SchemeKind::Paillier => Homomorphism::Additive,
        }
    }

    /// Whether `operation` is evaluated by the scheme. Anything else fails
    /// with [crate::PheError::UnsupportedOperation].
    pub fn supports(&self, operation: Operation) -> bool {
        match self.native() {
            Homomorphism::Multiplicative => operation == Operation::Multiply,
            Homomorphism::Additive => matches!(operation, Operation::Add | Operation::MultiplyScalar),
        }
    }
}

impl fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemeKind::ElGamal => write!(f, "ElGamal"),
            SchemeKind::Paillier => write!(f, "Paillier"),
        }
    }
}

/// Contract shared by every homomorphic encryption scheme.
///
/// Keys and ciphertexts are immutable values: homomorphic operations return
/// fresh ciphertexts and never touch their operands. Only [Self::generate_keys]
/// and [Self::encrypt] consume randomness, drawn from the caller's [Source].
pub trait HomomorphicScheme {
    type PublicKey;
    type PrivateKey;
    type Ciphertext;

    const KIND: SchemeKind;

    fn generate_keys(&self, key_size: u32, source: &mut Source) -> Result<(Self::PublicKey, Self::PrivateKey)>;

    fn encrypt(&self, plaintext: &Integer, public_key: &Self::PublicKey, source: &mut Source) -> Result<Self::Ciphertext>;

    /// Encrypts `plaintext` truncated toward zero, see [encoding::truncate].
    fn encrypt_f64(&self, plaintext: f64, public_key: &Self::PublicKey, source: &mut Source) -> Result<Self::Ciphertext> {
        self.encrypt(&encoding::truncate(plaintext)?, public_key, source)
    }

    fn decrypt(&self, ciphertext: &Self::Ciphertext, private_key: &Self::PrivateKey) -> Result<Integer>;

    fn add(&self, a: &Self::Ciphertext, b: &Self::Ciphertext) -> Result<Self::Ciphertext>;

    fn multiply_scalar(&self, ciphertext: &Self::Ciphertext, scalar: &Integer) -> Result<Self::Ciphertext>;

    fn multiply(&self, a: &Self::Ciphertext, b: &Self::Ciphertext) -> Result<Self::Ciphertext>;

    fn kind(&self) -> SchemeKind {
        Self::KIND
    }
}
