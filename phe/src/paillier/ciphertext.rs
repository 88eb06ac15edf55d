use rug::Integer;

/// Paillier ciphertext, a residue modulo `n^2` tagged with its `n`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PaillierCiphertext {
    pub(crate) c: Integer,
    pub(crate) n: Integer,
}

impl PaillierCiphertext {
    pub fn c(&self) -> &Integer {
        &self.c
    }

    pub fn n(&self) -> &Integer {
        &self.n
    }

    pub(crate) fn n_squared(&self) -> Integer {
        Integer::from(self.n.square_ref())
    }
}
