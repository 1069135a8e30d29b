use argminmax::ArgMinMax;

/// Largest value in the slice. Empty slices yield 0.0.
#[inline]
pub(crate) fn get_max(vec: &[f64]) -> f64 {
    if vec.is_empty() {
        return 0.0;
    }
    let max_index: usize = vec.argmax();
    vec[max_index]
}

/// Rounds to `decimals` places, half away from zero (what the chart shows).
#[inline]
pub fn round_to(val: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (val * factor).round() / factor
}

/// Percentage change from `start` to `end`, e.g. 100 -> 50 is -50.0.
/// A non-positive start has no meaningful percentage, so it maps to 0.0.
#[inline]
pub fn pct_change(start: f64, end: f64) -> f64 {
    if start > 0.0 {
        (end - start) / start * 100.0
    } else {
        0.0
    }
}

/// Decline of `val` below `peak`, as a percentage of `peak`.
/// A zero peak (all-zero series) reports no drawdown.
#[inline]
pub fn drawdown_pct(peak: f64, val: f64) -> f64 {
    if peak > 0.0 {
        (peak - val) / peak * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_max() {
        assert_eq!(get_max(&[100.0, 120.0, 90.0]), 120.0);
        assert_eq!(get_max(&[7.5]), 7.5);
        assert_eq!(get_max(&[]), 0.0);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(16.666_666, 2), 16.67);
        assert_eq!(round_to(33.333_333, 1), 33.3);
        assert_eq!(round_to(-2.345_1, 2), -2.35);
    }

    #[test]
    fn test_pct_change() {
        assert_eq!(pct_change(100.0, 50.0), -50.0);
        assert_eq!(pct_change(100.0, 100.0), 0.0);
        assert_eq!(pct_change(0.0, 50.0), 0.0);
    }

    #[test]
    fn test_drawdown_pct_zero_peak() {
        assert_eq!(drawdown_pct(0.0, 0.0), 0.0);
        assert_eq!(drawdown_pct(120.0, 90.0), 25.0);
    }
}
