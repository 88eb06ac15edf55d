use rug::Integer;

/// ElGamal ciphertext `(c1 = g^r, c2 = m * h^r)` modulo `p`.
///
/// Carries `p` so that operations can reject operands from another key
/// without a key lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElGamalCiphertext {
    pub(crate) c1: Integer,
    pub(crate) c2: Integer,
    pub(crate) p: Integer,
}

impl ElGamalCiphertext {
    pub fn c1(&self) -> &Integer {
        &self.c1
    }

    pub fn c2(&self) -> &Integer {
        &self.c2
    }

    pub fn p(&self) -> &Integer {
        &self.p
    }
}
