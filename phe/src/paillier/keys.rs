use std::fmt;

use rug::Integer;

/// Paillier public key `(n, g)` with `n = p * q` and `g = n + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaillierPublicKey {
    pub(crate) n: Integer,
    pub(crate) nn: Integer,
    pub(crate) g: Integer,
}

impl PaillierPublicKey {
    pub(crate) fn new(n: Integer) -> Self {
        let nn: Integer = Integer::from(n.square_ref());
        let g: Integer = Integer::from(&n + 1u32);
        Self { n, nn, g }
    }

    /// Composite modulus; plaintexts live in `[0, n)`.
    pub fn n(&self) -> &Integer {
        &self.n
    }

    /// Ciphertext modulus `n^2`.
    pub fn n_squared(&self) -> &Integer {
        &self.nn
    }

    pub fn g(&self) -> &Integer {
        &self.g
    }

    pub fn key_size(&self) -> u32 {
        self.n.significant_bits()
    }
}

/// Paillier private key: `lambda = lcm(p - 1, q - 1)` and
/// `mu = L(g^lambda mod n^2)^-1 mod n`.
#[derive(Clone, PartialEq, Eq)]
pub struct PaillierPrivateKey {
    pub(crate) n: Integer,
    pub(crate) nn: Integer,
    pub(crate) lambda: Integer,
    pub(crate) mu: Integer,
}

impl PaillierPrivateKey {
    pub fn n(&self) -> &Integer {
        &self.n
    }
}

impl fmt::Debug for PaillierPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaillierPrivateKey")
            .field("n", &self.n)
            .field("lambda", &"<redacted>")
            .field("mu", &"<redacted>")
            .finish()
    }
}
