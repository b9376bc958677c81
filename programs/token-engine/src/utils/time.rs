//! Timestamp helpers (Unix seconds, UTC).

use crate::error::EngineError;

/// A requested start of 0 means "now".
pub fn resolve_start(requested: i64, now: i64) -> Result<i64, EngineError> {
    match requested {
        0 => Ok(now),
        ts if ts < 0 => Err(EngineError::InvalidConfig),
        ts => Ok(ts),
    }
}

/// `ts + seconds`, rejecting overflow of the signed timestamp range.
pub fn offset(ts: i64, seconds: u64) -> Result<i64, EngineError> {
    let seconds = i64::try_from(seconds).map_err(|_| EngineError::MathOverflow)?;
    ts.checked_add(seconds).ok_or(EngineError::MathOverflow)
}

/// Seconds elapsed from `from` to `to`; zero when `to` precedes `from`.
pub fn elapsed(from: i64, to: i64) -> u64 {
    u64::try_from(to.saturating_sub(from)).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_start_resolves_to_now() {
        assert_eq!(resolve_start(0, 1_700_000_000).unwrap(), 1_700_000_000);
        assert_eq!(resolve_start(42, 1_700_000_000).unwrap(), 42);
        assert!(resolve_start(-1, 10).is_err());
    }

    #[test]
    fn offset_is_checked() {
        assert_eq!(offset(10, 5).unwrap(), 15);
        assert!(offset(i64::MAX, 1).is_err());
        assert!(offset(0, u64::MAX).is_err());
    }

    #[test]
    fn elapsed_saturates_at_zero() {
        assert_eq!(elapsed(10, 25), 15);
        assert_eq!(elapsed(25, 10), 0);
    }
}
