//! Checked integer helpers shared by purchase and vesting math.

use crate::error::EngineError;

/// `floor(value * numerator / denominator)` with a u128 intermediate.
pub fn mul_div_floor(value: u64, numerator: u64, denominator: u64) -> Result<u64, EngineError> {
    if denominator == 0 {
        return Err(EngineError::MathOverflow);
    }
    let product = (value as u128)
        .checked_mul(numerator as u128)
        .ok_or(EngineError::MathOverflow)?;
    u64::try_from(product / denominator as u128).map_err(|_| EngineError::MathOverflow)
}

pub fn checked_add(a: u64, b: u64) -> Result<u64, EngineError> {
    a.checked_add(b).ok_or(EngineError::MathOverflow)
}

pub fn checked_sub(a: u64, b: u64) -> Result<u64, EngineError> {
    a.checked_sub(b).ok_or(EngineError::MathOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floors_fractional_results() {
        assert_eq!(mul_div_floor(100, 3, 4).unwrap(), 75);
        assert_eq!(mul_div_floor(100, 19, 20).unwrap(), 95);
        assert_eq!(mul_div_floor(7, 1, 2).unwrap(), 3);
    }

    #[test]
    fn wide_intermediate_does_not_overflow() {
        // u64::MAX * (n-1) / n fits back into u64.
        assert_eq!(mul_div_floor(u64::MAX, 2, 2).unwrap(), u64::MAX);
        assert!(mul_div_floor(u64::MAX, 3, 2).is_err());
        assert!(mul_div_floor(1, 1, 0).is_err());
    }
}
