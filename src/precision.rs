//! Precision constants for geometric comparisons and curve approximation.
//!
//! Operations never compare against these implicitly: every tolerance-based
//! query takes its tolerance as an argument. The constants are the defaults
//! used by callers and tests, plus the hard limits on approximation work.

/// Angular tolerance for checking equality of angles (radians).
/// Value: 1.0e-12
pub const ANGULAR: f64 = 1.0e-12;

/// Confusion tolerance for checking coincidence of two points in real space.
/// Value: 1.0e-7
pub const CONFUSION: f64 = 1.0e-7;

/// Segment count used for invalid (non-positive, NaN) tolerances.
pub const MAX_APPROXIMATION_SEGMENTS: usize = 1 << 16;

/// Number of equal parameter sub-intervals integrated in one leaf of an
/// arc-length segment tree.
pub const LEAF_SUBDIVISIONS: usize = 8;

/// Maximum height of an arc-length segment tree.
/// `LEAF_SUBDIVISIONS << MAX_TREE_HEIGHT` equals `MAX_APPROXIMATION_SEGMENTS`.
pub const MAX_TREE_HEIGHT: u32 = 13;

/// Number of straight segments needed so that a curve whose second
/// derivative never exceeds `max_second_derivative_magnitude` deviates from
/// each chord's midpoint by at most `max_error`.
///
/// A parameter span of width `h` bows away from its chord by at most
/// `M * h² / 8`, so `n = ceil(sqrt(M / (8 * max_error)))` spans suffice.
/// Any finite positive tolerance gets the full count; it saturates at
/// `usize::MAX` only when the bound is not representable.
pub fn num_approximation_segments(max_error: f64, max_second_derivative_magnitude: f64) -> usize {
    if max_second_derivative_magnitude == 0.0 {
        return 1;
    }
    if max_error.is_nan() || max_error <= 0.0 {
        return MAX_APPROXIMATION_SEGMENTS;
    }
    let n = (max_second_derivative_magnitude / (8.0 * max_error)).sqrt().ceil();
    if n.is_nan() {
        return MAX_APPROXIMATION_SEGMENTS;
    }
    // Float to int `as` saturates, so an unrepresentable bound maps to usize::MAX.
    (n as usize).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precision_values() {
        assert_eq!(ANGULAR, 1.0e-12);
        assert_eq!(CONFUSION, 1.0e-7);
        assert_eq!(LEAF_SUBDIVISIONS << MAX_TREE_HEIGHT, MAX_APPROXIMATION_SEGMENTS);
    }

    #[test]
    fn test_straight_curve_needs_one_segment() {
        assert_eq!(num_approximation_segments(1e-3, 0.0), 1);
    }

    #[test]
    fn test_segment_count_bound() {
        // M = 800, tol = 1 -> sqrt(100) = 10
        assert_eq!(num_approximation_segments(1.0, 800.0), 10);
        assert_eq!(num_approximation_segments(1.0, 801.0), 11);
    }

    #[test]
    fn test_invalid_tolerance_is_capped() {
        assert_eq!(num_approximation_segments(0.0, 1.0), MAX_APPROXIMATION_SEGMENTS);
        assert_eq!(num_approximation_segments(-1.0, 1.0), MAX_APPROXIMATION_SEGMENTS);
        assert_eq!(num_approximation_segments(f64::NAN, 1.0), MAX_APPROXIMATION_SEGMENTS);
    }

    #[test]
    fn test_positive_tolerance_is_not_capped() {
        // M = 4e14, tol = 0.5 -> sqrt(1e14) = 1e7
        assert_eq!(num_approximation_segments(0.5, 4.0e14), 10_000_000);
        assert_eq!(num_approximation_segments(f64::MIN_POSITIVE, f64::MAX), usize::MAX);
    }
}
