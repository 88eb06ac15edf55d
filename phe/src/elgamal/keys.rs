use std::fmt;

use rug::Integer;

/// ElGamal public key `(p, g, h = g^x mod p)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElGamalPublicKey {
    pub(crate) p: Integer,
    pub(crate) g: Integer,
    pub(crate) h: Integer,
}

impl ElGamalPublicKey {
    /// Prime modulus; plaintexts live in `[0, p)`.
    pub fn p(&self) -> &Integer {
        &self.p
    }

    pub fn g(&self) -> &Integer {
        &self.g
    }

    pub fn h(&self) -> &Integer {
        &self.h
    }

    pub fn key_size(&self) -> u32 {
        self.p.significant_bits()
    }
}

/// ElGamal private key `(p, x)` with `1 < x < p - 1`.
#[derive(Clone, PartialEq, Eq)]
pub struct ElGamalPrivateKey {
    pub(crate) p: Integer,
    pub(crate) x: Integer,
}

impl ElGamalPrivateKey {
    pub fn p(&self) -> &Integer {
        &self.p
    }
}

impl fmt::Debug for ElGamalPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElGamalPrivateKey")
            .field("p", &self.p)
            .field("x", &"<redacted>")
            .finish()
    }
}
