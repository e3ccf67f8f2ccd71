// src/core/percent.rs

/// Rounded percentage of `count` against `total`.
///
/// Returns 0 when either `count` or `total` is 0; division by zero is
/// guarded explicitly, never left to float semantics. Negative counts are
/// not validated and flow through the arithmetic as-is.
#[inline]
#[must_use]
#[allow(clippy::cast_precision_loss, reason = "Precision not critical")]
#[allow(clippy::cast_possible_truncation, reason = "Result is a percentage")]
pub fn share(count: i64, total: i64) -> i64 {
    if count == 0 || total == 0 {
        return 0;
    }
    (count as f64 / total as f64 * 100.0).round() as i64
}

/// Floored percentage of `count` against `total`.
///
/// Same zero guards as [`share`], but truncates instead of rounding. The
/// approved percentage floors while the shares round; the asymmetry is part
/// of the external contract.
#[inline]
#[must_use]
#[allow(clippy::cast_precision_loss, reason = "Precision not critical")]
#[allow(clippy::cast_possible_truncation, reason = "Result is a percentage")]
pub fn percent(count: i64, total: i64) -> i64 {
    if count == 0 || total == 0 {
        return 0;
    }
    (count as f64 / total as f64 * 100.0).floor() as i64
}
