use rug::Integer;
use rug::integer::IsPrime;
use sampling::source::Source;
use tracing::trace;

use crate::error::{PheError, Result};
use crate::params::KeyGenParams;

/// `base^exponent mod modulus`. Callers only pass non-negative exponents, for
/// which the power is always defined.
pub(crate) fn pow_mod(base: &Integer, exponent: &Integer, modulus: &Integer) -> Integer {
    debug_assert!(!exponent.is_negative(), "negative exponent: {}", exponent);
    base.pow_mod_ref(exponent, modulus).map_or_else(Integer::new, Integer::from)
}

pub(crate) fn mul_mod(a: &Integer, b: &Integer, modulus: &Integer) -> Integer {
    Integer::from(a * b) % modulus
}

pub(crate) fn invert(a: &Integer, modulus: &Integer) -> Option<Integer> {
    a.invert_ref(modulus).map(Integer::from)
}

pub(crate) fn gcd(a: &Integer, b: &Integer) -> Integer {
    Integer::from(a.gcd_ref(b))
}

pub(crate) fn lcm(a: &Integer, b: &Integer) -> Integer {
    Integer::from(a.lcm_ref(b))
}

/// Paillier's `L(u) = (u - 1) / n`, `None` unless the division is exact.
pub(crate) fn l_function(u: &Integer, n: &Integer) -> Option<Integer> {
    let u_minus_one: Integer = Integer::from(u - 1u32);
    if u_minus_one.is_negative() || !u_minus_one.is_divisible(n) {
        return None;
    }
    Some(u_minus_one.div_exact(n))
}

/// Samples a prime of exactly `bits` bits: a uniform candidate with the top
/// bit forced, advanced to the next prime, then confirmed independently with
/// `params.primality_reps` Miller-Rabin rounds.
pub(crate) fn sample_prime(bits: u32, params: &KeyGenParams, source: &mut Source) -> Result<Integer> {
    for attempt in 0..params.max_retries {
        let mut candidate: Integer = source.next_integer_bits(bits);
        candidate.set_bit(bits - 1, true);
        let p: Integer = candidate.next_prime();

        if p.significant_bits() != bits {
            trace!(attempt, bits, "prime search overflowed the requested size");
            continue;
        }

        if p.is_probably_prime(params.primality_reps) == IsPrime::No {
            trace!(attempt, bits, "prime candidate failed confirmation");
            continue;
        }

        return Ok(p);
    }

    Err(PheError::KeyGeneration(format!(
        "no {}-bit prime found within {} attempts",
        bits, params.max_retries
    )))
}
