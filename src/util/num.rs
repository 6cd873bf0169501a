use crate::error::EvalError;

/// Smallest `f64` that truncates to a value outside the `i64` range (`2^63`).
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Truncates an `f64` toward zero into an `i64`.
///
/// The fractional part is discarded, so `7.9` becomes `7` and `-0.5` becomes
/// `0`. Values that are not finite or that fall outside the `i64` range are
/// rejected instead of being saturated.
///
/// ## Errors
/// Returns `EvalError::ModuloOperandOutOfRange` for `NaN`, infinities and
/// values whose integer part does not fit in an `i64`.
///
/// ## Parameters
/// - `value`: The float to truncate.
/// - `line`: Source code line number for error reporting.
///
/// ## Example
/// ```
/// use infixcalc::{error::EvalError, util::num::f64_to_i64_truncated};
///
/// assert_eq!(f64_to_i64_truncated(7.9, 1).unwrap(), 7);
/// assert_eq!(f64_to_i64_truncated(-2.5, 1).unwrap(), -2);
/// assert_eq!(f64_to_i64_truncated(0.4, 1).unwrap(), 0);
///
/// let err = f64_to_i64_truncated(1e300, 4).unwrap_err();
/// assert!(matches!(err, EvalError::ModuloOperandOutOfRange { line: 4, .. }));
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i64_truncated(value: f64, line: usize) -> Result<i64, EvalError> {
    let truncated = value.trunc();
    if !truncated.is_finite() || truncated < -I64_UPPER_BOUND || truncated >= I64_UPPER_BOUND {
        return Err(EvalError::ModuloOperandOutOfRange { value: value.to_string(),
                                                        line });
    }
    Ok(truncated as i64)
}
