//! # Arithmetic Engine
//!
//! Stateless integer arithmetic shared by every platform shell.
//!
//! ## Why Integer Arithmetic?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ONE WIDTH, ONE BEHAVIOR, EVERY PLATFORM                                │
//! │                                                                         │
//! │  Platform shells run on JVM, Swift and WASM hosts whose native         │
//! │  integer semantics differ (trap, wrap, or promote on overflow).        │
//! │                                                                         │
//! │  OUR SOLUTION: i64 with explicit two's-complement wraparound           │
//! │    add(i64::MAX, 1) == i64::MIN   on every platform, always            │
//! │                                                                         │
//! │  Decimal-point and percentage handling live in the shells as display   │
//! │  string manipulation - they never pass through this engine.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::arith;
//!
//! assert_eq!(arith::add(2, 2), 4);
//! assert_eq!(arith::divide(7, 2).unwrap(), 3); // truncates toward zero
//! assert!(arith::divide(5, 0).is_err());
//! ```

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Operations
// =============================================================================

/// Adds two integers with wraparound on overflow.
///
/// Total: never fails for any representable inputs.
#[inline]
pub const fn add(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

/// Subtracts `b` from `a` with wraparound on overflow.
///
/// Total: never fails for any representable inputs.
#[inline]
pub const fn subtract(a: i64, b: i64) -> i64 {
    a.wrapping_sub(b)
}

/// Multiplies two integers with wraparound on overflow.
///
/// Total: never fails for any representable inputs.
#[inline]
pub const fn multiply(a: i64, b: i64) -> i64 {
    a.wrapping_mul(b)
}

/// Divides `a` by `b`, truncating toward zero.
///
/// ## Errors
/// Returns [`CoreError::DivisionByZero`] when `b == 0`. The caller is
/// expected to recover (ignore the keystroke), so this is a typed result,
/// never a panic.
///
/// ## Edge Case
/// `i64::MIN / -1` wraps to `i64::MIN` instead of trapping, keeping the
/// function total for all `b != 0`.
///
/// ## Example
/// ```rust
/// use tally_core::arith;
///
/// assert_eq!(arith::divide(7, 2).unwrap(), 3);
/// assert_eq!(arith::divide(-7, 2).unwrap(), -3); // toward zero, not floor
/// ```
#[inline]
pub fn divide(a: i64, b: i64) -> CoreResult<i64> {
    if b == 0 {
        return Err(CoreError::DivisionByZero { dividend: a });
    }
    Ok(a.wrapping_div(b))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(add(2, 2), 4);
        assert_eq!(add(-3, 3), 0);
        assert_eq!(add(0, 0), 0);
    }

    #[test]
    fn test_subtract() {
        assert_eq!(subtract(10, 4), 6);
        assert_eq!(subtract(4, 10), -6);
    }

    #[test]
    fn test_multiply() {
        assert_eq!(multiply(-3, 4), -12);
        assert_eq!(multiply(7, 0), 0);
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(10, 2).unwrap(), 5);
        assert_eq!(divide(7, 2).unwrap(), 3);
    }

    /// Pin the truncation direction: toward zero, not floor.
    #[test]
    fn test_divide_truncates_toward_zero() {
        assert_eq!(divide(-7, 2).unwrap(), -3);
        assert_eq!(divide(7, -2).unwrap(), -3);
        assert_eq!(divide(-7, -2).unwrap(), 3);
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            divide(5, 0),
            Err(CoreError::DivisionByZero { dividend: 5 })
        );
        assert_eq!(
            divide(0, 0),
            Err(CoreError::DivisionByZero { dividend: 0 })
        );
        assert_eq!(
            divide(i64::MIN, 0),
            Err(CoreError::DivisionByZero { dividend: i64::MIN })
        );
    }

    /// Pin the documented overflow behavior: two's-complement wraparound.
    #[test]
    fn test_overflow_wraps() {
        assert_eq!(add(i64::MAX, 1), i64::MIN);
        assert_eq!(subtract(i64::MIN, 1), i64::MAX);
        assert_eq!(multiply(i64::MAX, 2), -2);
        assert_eq!(divide(i64::MIN, -1).unwrap(), i64::MIN);
    }

    /// Multiply-then-divide round-trips exactly when no wraparound occurs.
    #[test]
    fn test_multiply_divide_round_trip() {
        for a in [-1000, -7, -1, 0, 1, 3, 42, 99999] {
            for b in [-13, -2, 1, 5, 360] {
                assert_eq!(divide(multiply(a, b), b).unwrap(), a);
            }
        }
    }
}
