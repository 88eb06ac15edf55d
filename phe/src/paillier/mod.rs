//! Additively homomorphic Paillier over `Z_{n^2}^*`, simplified variant with
//! `g = n + 1`.
//!
//! - `Enc(m1) * Enc(m2) mod n^2` decrypts to `m1 + m2 mod n`.
//! - `Enc(m)^k mod n^2` decrypts to `m * k mod n`.
//!
//! Ciphertext-ciphertext multiplication is not available:
//! [HomomorphicScheme::multiply] always fails.

mod ciphertext;
mod keys;

pub use ciphertext::PaillierCiphertext;
pub use keys::{PaillierPrivateKey, PaillierPublicKey};

use rug::Integer;
use rug::ops::RemRounding;
use sampling::source::Source;
use tracing::{debug, trace};

use crate::arith::{gcd, invert, l_function, lcm, mul_mod, pow_mod, sample_prime};
use crate::encoding::check_message;
use crate::error::{PheError, Result};
use crate::params::KeyGenParams;
use crate::scheme::{HomomorphicScheme, Operation, SchemeKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Paillier {
    params: KeyGenParams,
}

impl Paillier {
    pub fn new(params: KeyGenParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &KeyGenParams {
        &self.params
    }

    /// `c * g^k mod n^2`, an encryption of `m + k mod n`.
    ///
    /// `k` may be any integer; it is reduced modulo `n`.
    pub fn add_plaintext(
        &self,
        ciphertext: &PaillierCiphertext,
        k: &Integer,
        public_key: &PaillierPublicKey,
    ) -> Result<PaillierCiphertext> {
        if ciphertext.n != public_key.n {
            return Err(PheError::KeyMismatch);
        }
        let k: Integer = k.clone().rem_euc(&public_key.n);
        let g_k: Integer = pow_mod(&public_key.g, &k, &public_key.nn);
        Ok(PaillierCiphertext {
            c: mul_mod(&ciphertext.c, &g_k, &public_key.nn),
            n: public_key.n.clone(),
        })
    }

    /// Multiplies in `r^n` for a fresh unit `r`: same plaintext, new
    /// randomness.
    pub fn rerandomize(
        &self,
        ciphertext: &PaillierCiphertext,
        public_key: &PaillierPublicKey,
        source: &mut Source,
    ) -> Result<PaillierCiphertext> {
        if ciphertext.n != public_key.n {
            return Err(PheError::KeyMismatch);
        }
        let r: Integer = self.sample_unit(&public_key.n, source)?;
        let r_n: Integer = pow_mod(&r, &public_key.n, &public_key.nn);
        Ok(PaillierCiphertext {
            c: mul_mod(&ciphertext.c, &r_n, &public_key.nn),
            n: public_key.n.clone(),
        })
    }

    /// Uniform `r` in `[1, n)` with `gcd(r, n) = 1`.
    pub(crate) fn sample_unit(&self, n: &Integer, source: &mut Source) -> Result<Integer> {
        let one: Integer = Integer::from(1);
        for attempt in 0..self.params.max_retries {
            let r: Integer = source.next_integer_range(&one, n);
            if gcd(&r, n) == 1 {
                return Ok(r);
            }
            trace!(attempt, "rejected randomness sharing a factor with n");
        }
        Err(PheError::KeyGeneration(format!(
            "no unit modulo n found within {} attempts",
            self.params.max_retries
        )))
    }
}

impl HomomorphicScheme for Paillier {
    type PublicKey = PaillierPublicKey;
    type PrivateKey = PaillierPrivateKey;
    type Ciphertext = PaillierCiphertext;

    const KIND: SchemeKind = SchemeKind::Paillier;

    #[tracing::instrument(name = "paillier_generate_keys", skip(self, source))]
    fn generate_keys(&self, key_size: u32, source: &mut Source) -> Result<(PaillierPublicKey, PaillierPrivateKey)> {
        self.params.validate(key_size)?;

        // n = p * q has key_size - 1 or key_size bits
        let p_bits: u32 = key_size.div_ceil(2);
        let q_bits: u32 = key_size / 2;

        for attempt in 0..self.params.max_retries {
            let p: Integer = sample_prime(p_bits, &self.params, source)?;
            let q: Integer = sample_prime(q_bits, &self.params, source)?;

            if p == q {
                trace!(attempt, "rejected identical factors");
                continue;
            }

            let n: Integer = Integer::from(&p * &q);
            let p_minus_one: Integer = p - 1u32;
            let q_minus_one: Integer = q - 1u32;
            let phi: Integer = Integer::from(&p_minus_one * &q_minus_one);

            if gcd(&n, &phi) != 1 {
                trace!(attempt, "rejected factors with gcd(n, phi) != 1");
                continue;
            }

            let lambda: Integer = lcm(&p_minus_one, &q_minus_one);
            let public_key: PaillierPublicKey = PaillierPublicKey::new(n);

            let u: Integer = pow_mod(&public_key.g, &lambda, &public_key.nn);
            let mu: Integer = l_function(&u, &public_key.n)
                .and_then(|l| invert(&l, &public_key.n))
                .ok_or_else(|| PheError::KeyGeneration("L(g^lambda) is not invertible modulo n".to_string()))?;

            debug!(bits = public_key.key_size(), attempt, "generated Paillier key pair");

            let private_key: PaillierPrivateKey = PaillierPrivateKey {
                n: public_key.n.clone(),
                nn: public_key.nn.clone(),
                lambda,
                mu,
            };

            return Ok((public_key, private_key));
        }

        Err(PheError::KeyGeneration(format!(
            "no factor pair with gcd(n, phi) = 1 found within {} attempts",
            self.params.max_retries
        )))
    }

    fn encrypt(
        &self,
        plaintext: &Integer,
        public_key: &PaillierPublicKey,
        source: &mut Source,
    ) -> Result<PaillierCiphertext> {
        check_message(plaintext, &public_key.n)?;

        let r: Integer = self.sample_unit(&public_key.n, source)?;
        let g_m: Integer = pow_mod(&public_key.g, plaintext, &public_key.nn);
        let r_n: Integer = pow_mod(&r, &public_key.n, &public_key.nn);

        Ok(PaillierCiphertext {
            c: mul_mod(&g_m, &r_n, &public_key.nn),
            n: public_key.n.clone(),
        })
    }

    fn decrypt(&self, ciphertext: &PaillierCiphertext, private_key: &PaillierPrivateKey) -> Result<Integer> {
        if ciphertext.n != private_key.n {
            return Err(PheError::KeyMismatch);
        }
        if ciphertext.c <= 0 || ciphertext.c >= private_key.nn {
            return Err(PheError::Decryption("ciphertext is not a residue modulo n^2".to_string()));
        }

        let u: Integer = pow_mod(&ciphertext.c, &private_key.lambda, &private_key.nn);
        let l: Integer = l_function(&u, &private_key.n)
            .ok_or_else(|| PheError::Decryption("L-function division by n is not exact".to_string()))?;

        Ok(mul_mod(&l, &private_key.mu, &private_key.n))
    }

    fn add(&self, a: &PaillierCiphertext, b: &PaillierCiphertext) -> Result<PaillierCiphertext> {
        if a.n != b.n {
            return Err(PheError::KeyMismatch);
        }
        Ok(PaillierCiphertext {
            c: mul_mod(&a.c, &b.c, &a.n_squared()),
            n: a.n.clone(),
        })
    }

    /// `c^k mod n^2`; negative scalars are reduced modulo `n` first.
    fn multiply_scalar(&self, ciphertext: &PaillierCiphertext, scalar: &Integer) -> Result<PaillierCiphertext> {
        let k: Integer = scalar.clone().rem_euc(&ciphertext.n);
        Ok(PaillierCiphertext {
            c: pow_mod(&ciphertext.c, &k, &ciphertext.n_squared()),
            n: ciphertext.n.clone(),
        })
    }

    fn multiply(&self, _a: &PaillierCiphertext, _b: &PaillierCiphertext) -> Result<PaillierCiphertext> {
        Err(PheError::UnsupportedOperation {
            scheme: Self::KIND,
            operation: Operation::Multiply,
        })
    }
}
