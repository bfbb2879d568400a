//! Numeric helpers shared by curve construction and valuation.

/// Rounds `value` to `decimals` decimal places, half away from zero.
///
/// Curve points and discount factors are stored rounded to 12 decimals, so
/// every stage that feeds a stored value goes through this function.
///
/// ```rust
/// use parswap_core::math::round_to;
///
/// assert_eq!(round_to(0.123_456_789_012_6, 12), 0.123_456_789_013);
/// assert_eq!(round_to(-2.5, 0), -3.0);
/// ```
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}
