//! Decimal rounding for report values.

/// Rounds `value` to `places` decimal digits.
///
/// Ties are resolved to even on the exact binary value, so `0.25` becomes
/// `0.2` while `2.675` (stored just below the midpoint) becomes `2.67`.
pub fn round_to(value: f64, places: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.places$}").parse().unwrap_or(value)
}

/// Average of an integer total over `count` items, rounded to `places`.
///
/// Returns 0.0 when `count` is zero.
pub fn average(total: u128, count: u64, places: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    round_to(total as f64 / count as f64, places)
}
