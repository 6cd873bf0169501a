/// Numeric conversion helpers.
///
/// Conversions between `f64` and the integer types used by the evaluator.
/// Every conversion is checked: out-of-range input produces an error rather
/// than a silently saturated value.
pub mod num;
