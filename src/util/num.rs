use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Widens an `i64` to the nearest `f64`.
///
/// Integers beyond `2^53` round to the closest representable float, the same
/// way every mixed integer/float operation promotes its integer operand.
///
/// ## Example
/// ```
/// use algo::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(9_007_199_254_740_993), 9_007_199_254_740_992.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Truncates an `f64` toward zero and converts it to `i64`.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` for non-finite values and for values
/// outside the `i64` range.
///
/// ## Example
/// ```
/// use algo::{error::RuntimeError, util::num::f64_to_i64_truncated};
///
/// assert_eq!(f64_to_i64_truncated(-3.9).unwrap(), -3);
/// assert_eq!(f64_to_i64_truncated(f64::INFINITY), Err(RuntimeError::Overflow));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_truncated(value: f64) -> EvalResult<i64> {
    let value = value.trunc();
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range.
    if !value.is_finite() || value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return Err(RuntimeError::Overflow);
    }
    Ok(value as i64)
}

/// Converts a non-negative exponent to `u32` for `i64::checked_pow`.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` if the exponent does not fit; any base
/// other than `-1`, `0` and `1` would overflow long before that.
pub fn exponent_to_u32(value: i64) -> EvalResult<u32> {
    u32::try_from(value).map_err(|_| RuntimeError::Overflow)
}

/// Converts a 1-based language index into a 0-based offset into a slice of
/// length `len`.
///
/// ## Errors
/// Returns `RuntimeError::IndexOutOfBounds` unless `1 <= index <= len`.
///
/// ## Example
/// ```
/// use algo::{error::RuntimeError, util::num::index_to_offset};
///
/// assert_eq!(index_to_offset(1, 3), Ok(0));
/// assert_eq!(index_to_offset(3, 3), Ok(2));
/// assert_eq!(index_to_offset(0, 3), Err(RuntimeError::IndexOutOfBounds { index: 0 }));
/// assert_eq!(index_to_offset(4, 3), Err(RuntimeError::IndexOutOfBounds { index: 4 }));
/// ```
pub fn index_to_offset(index: i64, len: usize) -> EvalResult<usize> {
    usize::try_from(index).ok()
                          .filter(|&i| i >= 1 && i <= len)
                          .map(|i| i - 1)
                          .ok_or(RuntimeError::IndexOutOfBounds { index })
}

/// Converts a requested array length to `usize`.
///
/// ## Errors
/// Returns `RuntimeError::InvalidArraySize` unless the length is positive and
/// addressable.
pub fn array_length(value: i64) -> EvalResult<usize> {
    usize::try_from(value).ok()
                          .filter(|&n| n > 0)
                          .ok_or(RuntimeError::InvalidArraySize)
}
