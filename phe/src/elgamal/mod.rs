//! Multiplicatively homomorphic ElGamal over `Z_p^*`.
//!
//! ```text
//! Enc(m1) * Enc(m2) = (g^r1 * g^r2, m1 h^r1 * m2 h^r2)
//!                   = (g^(r1+r2), (m1 m2) h^(r1+r2))
//!                   = Enc(m1 * m2)
//! ```
//!
//! Decryption recovers any `m < p` directly (no discrete logarithm), so
//! products wrap modulo `p`. There is no additive homomorphism over this group:
//! [HomomorphicScheme::add] and [HomomorphicScheme::multiply_scalar] always fail.

mod ciphertext;
mod keys;

pub use ciphertext::ElGamalCiphertext;
pub use keys::{ElGamalPrivateKey, ElGamalPublicKey};

use rug::Integer;
use sampling::source::Source;
use tracing::{debug, trace};

use crate::arith::{invert, mul_mod, pow_mod, sample_prime};
use crate::encoding::check_message;
use crate::error::{PheError, Result};
use crate::params::KeyGenParams;
use crate::scheme::{HomomorphicScheme, Operation, SchemeKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ElGamal {
    params: KeyGenParams,
}

impl ElGamal {
    pub fn new(params: KeyGenParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &KeyGenParams {
        &self.params
    }

    /// Multiplies in a fresh encryption of `1`: same plaintext, new
    /// randomness.
    pub fn rerandomize(
        &self,
        ciphertext: &ElGamalCiphertext,
        public_key: &ElGamalPublicKey,
        source: &mut Source,
    ) -> Result<ElGamalCiphertext> {
        if ciphertext.p != public_key.p {
            return Err(PheError::KeyMismatch);
        }
        let p: &Integer = &public_key.p;
        let r: Integer = source.next_integer_below(&Integer::from(p - 1u32));
        Ok(ElGamalCiphertext {
            c1: mul_mod(&ciphertext.c1, &pow_mod(&public_key.g, &r, p), p),
            c2: mul_mod(&ciphertext.c2, &pow_mod(&public_key.h, &r, p), p),
            p: p.clone(),
        })
    }

    /// `(c1^k, c2^k)`, an encryption of `m^k mod p`.
    ///
    /// This raises the plaintext to a power; it is not the additive
    /// [HomomorphicScheme::multiply_scalar].
    pub fn exponentiate(&self, ciphertext: &ElGamalCiphertext, k: &Integer) -> Result<ElGamalCiphertext> {
        if k.is_negative() {
            return Err(PheError::Encoding(format!("exponent {} is negative", k)));
        }
        let p: &Integer = &ciphertext.p;
        Ok(ElGamalCiphertext {
            c1: pow_mod(&ciphertext.c1, k, p),
            c2: pow_mod(&ciphertext.c2, k, p),
            p: p.clone(),
        })
    }

    /// Draws from `sample` until the value exceeds one.
    pub(crate) fn sample_above_one<F>(&self, what: &str, source: &mut Source, mut sample: F) -> Result<Integer>
    where
        F: FnMut(&mut Source) -> Integer,
    {
        for attempt in 0..self.params.max_retries {
            let value: Integer = sample(source);
            if value > 1 {
                return Ok(value);
            }
            trace!(attempt, what, "rejected sample <= 1");
        }
        Err(PheError::KeyGeneration(format!(
            "could not sample {} > 1 within {} attempts",
            what, self.params.max_retries
        )))
    }
}

impl HomomorphicScheme for ElGamal {
    type PublicKey = ElGamalPublicKey;
    type PrivateKey = ElGamalPrivateKey;
    type Ciphertext = ElGamalCiphertext;

    const KIND: SchemeKind = SchemeKind::ElGamal;

    #[tracing::instrument(name = "elgamal_generate_keys", skip(self, source))]
    fn generate_keys(&self, key_size: u32, source: &mut Source) -> Result<(ElGamalPublicKey, ElGamalPrivateKey)> {
        self.params.validate(key_size)?;

        let p: Integer = sample_prime(key_size, &self.params, source)?;
        let p_minus_one: Integer = Integer::from(&p - 1u32);

        // g in [2, p - 1)
        let g: Integer = self.sample_above_one("generator", source, |s| s.next_integer_below(&p_minus_one))?;

        // x < 2^(key_size - 1) <= p - 1
        let x: Integer = self.sample_above_one("secret exponent", source, |s| {
            s.next_integer_bits(key_size - 1) % &p_minus_one
        })?;

        let h: Integer = pow_mod(&g, &x, &p);

        debug!(bits = p.significant_bits(), "generated ElGamal key pair");

        Ok((
            ElGamalPublicKey {
                p: p.clone(),
                g,
                h,
            },
            ElGamalPrivateKey { p, x },
        ))
    }

    fn encrypt(&self, plaintext: &Integer, public_key: &ElGamalPublicKey, source: &mut Source) -> Result<ElGamalCiphertext> {
        let p: &Integer = &public_key.p;
        check_message(plaintext, p)?;

        let r: Integer = source.next_integer_below(&Integer::from(p - 1u32));
        let c1: Integer = pow_mod(&public_key.g, &r, p);
        let s: Integer = pow_mod(&public_key.h, &r, p);
        let c2: Integer = mul_mod(plaintext, &s, p);

        Ok(ElGamalCiphertext { c1, c2, p: p.clone() })
    }

    fn decrypt(&self, ciphertext: &ElGamalCiphertext, private_key: &ElGamalPrivateKey) -> Result<Integer> {
        if ciphertext.p != private_key.p {
            return Err(PheError::KeyMismatch);
        }
        let p: &Integer = &private_key.p;
        let s: Integer = pow_mod(&ciphertext.c1, &private_key.x, p);
        let s_inv: Integer =
            invert(&s, p).ok_or_else(|| PheError::Decryption("shared secret is not invertible modulo p".to_string()))?;
        Ok(mul_mod(&ciphertext.c2, &s_inv, p))
    }

    fn add(&self, _a: &ElGamalCiphertext, _b: &ElGamalCiphertext) -> Result<ElGamalCiphertext> {
        Err(PheError::UnsupportedOperation {
            scheme: Self::KIND,
            operation: Operation::Add,
        })
    }

    fn multiply_scalar(&self, _ciphertext: &ElGamalCiphertext, _scalar: &Integer) -> Result<ElGamalCiphertext> {
        Err(PheError::UnsupportedOperation {
            scheme: Self::KIND,
            operation: Operation::MultiplyScalar,
        })
    }

    fn multiply(&self, a: &ElGamalCiphertext, b: &ElGamalCiphertext) -> Result<ElGamalCiphertext> {
        if a.p != b.p {
            return Err(PheError::KeyMismatch);
        }
        let p: &Integer = &a.p;
        Ok(ElGamalCiphertext {
            c1: mul_mod(&a.c1, &b.c1, p),
            c2: mul_mod(&a.c2, &b.c2, p),
            p: p.clone(),
        })
    }
}
