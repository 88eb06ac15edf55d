//! Conversion of floating-point inputs into the integer message space.
//!
//! Both schemes operate on exact integers. Fractional inputs are truncated
//! toward zero before encryption: `5.9` encrypts as `5` and `-2.5` as `-2`
//! (which the scheme then rejects as negative). This is lossy by contract and
//! is not reported as an error.

use rug::Integer;

use crate::error::{PheError, Result};

/// Truncates `value` toward zero.
///
/// Fails with [PheError::Encoding] for NaN and infinities.
pub fn truncate(value: f64) -> Result<Integer> {
    Integer::from_f64(value).ok_or_else(|| PheError::Encoding(format!("{} is not a finite number", value)))
}

/// Checks `0 <= m < modulus`.
pub(crate) fn check_message(m: &Integer, modulus: &Integer) -> Result<()> {
    if m.is_negative() {
        return Err(PheError::Encoding(format!("{} is negative", m)));
    }
    if m >= modulus {
        return Err(PheError::Encoding(format!(
            "{} does not fit in a {}-bit message space",
            m,
            modulus.significant_bits()
        )));
    }
    Ok(())
}
