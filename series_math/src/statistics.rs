//! Aggregate statistics over price and rate series
//!
//! All functions here are total: where a denominator would be zero they
//! return a documented value (usually `0.0`) instead of `NaN` or infinity.
//! Percentages are plain numbers, so `12.3` means 12.3%.

use statrs::statistics::Statistics;

/// Round a value to two decimal places, half away from zero.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Arithmetic mean, or `0.0` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().mean()
}

/// Pearson correlation coefficient over the aligned prefix of two series.
///
/// Only the first `min(a.len(), b.len())` elements of each input take part.
/// Returns `0.0` when that prefix is empty or either side has zero variance.
pub fn correlation(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len().min(b.len());
    if n == 0 {
        return 0.0;
    }

    let (a, b) = (&a[..n], &b[..n]);
    let mean_a = mean(a);
    let mean_b = mean(b);

    let mut numerator = 0.0;
    let mut sum_sq_a = 0.0;
    let mut sum_sq_b = 0.0;

    for (&x, &y) in a.iter().zip(b.iter()) {
        let diff_a = x - mean_a;
        let diff_b = y - mean_b;
        numerator += diff_a * diff_b;
        sum_sq_a += diff_a * diff_a;
        sum_sq_b += diff_b * diff_b;
    }

    let denominator = (sum_sq_a * sum_sq_b).sqrt();
    if denominator == 0.0 || !denominator.is_finite() {
        return 0.0;
    }

    (numerator / denominator).clamp(-1.0, 1.0)
}

/// Compound annual growth rate in percent.
///
/// `((end / start)^(1 / years) - 1) * 100`. Returns `0.0` when `start` is
/// not positive, `years` is not positive, or `end` is negative.
pub fn cagr(start: f64, end: f64, years: f64) -> f64 {
    if start <= 0.0 || years <= 0.0 || end < 0.0 {
        return 0.0;
    }
    ((end / start).powf(1.0 / years) - 1.0) * 100.0
}

/// Total return in percent, `(end - start) / start * 100`.
///
/// Returns `0.0` when `start` is zero.
pub fn total_return(start: f64, end: f64) -> f64 {
    percent_change(start, end).unwrap_or(0.0)
}

/// Percentage change from `before` to `after`.
///
/// `None` when `before` is zero or either value is not finite, so callers
/// can drop the observation rather than count it as zero.
pub fn percent_change(before: f64, after: f64) -> Option<f64> {
    if before == 0.0 || !before.is_finite() || !after.is_finite() {
        return None;
    }
    Some((after - before) / before * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rstest::rstest;

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(110.0), 110.0);
        assert_eq!(round_to_cents(283.56333), 283.56);
        assert_eq!(round_to_cents(283.565001), 283.57);
        assert_eq!(round_to_cents(-1.005001), -1.01);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), 0.0);
        assert_relative_eq!(mean(&[18.0, 16.0, 14.0]), 16.0);
    }

    #[test]
    fn test_correlation_perfect() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [2.0, 4.0, 6.0, 8.0, 10.0];
        let c = [10.0, 8.0, 6.0, 4.0, 2.0];

        assert_relative_eq!(correlation(&a, &b), 1.0, epsilon = 1e-12);
        assert_relative_eq!(correlation(&a, &c), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_correlation_uses_aligned_prefix() {
        let a = [1.0, 2.0, 3.0];
        let b = [3.0, 5.0, 7.0, -100.0, 42.0];
        assert_relative_eq!(correlation(&a, &b), 1.0, epsilon = 1e-12);
    }

    #[rstest]
    #[case(&[], &[1.0, 2.0])]
    #[case(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0])]
    #[case(&[1.0, 2.0, 3.0], &[7.0, 7.0, 7.0])]
    fn test_correlation_degenerate_is_zero(#[case] a: &[f64], #[case] b: &[f64]) {
        assert_eq!(correlation(a, b), 0.0);
    }

    #[test]
    fn test_correlation_symmetric_and_bounded() {
        let mut rng = StdRng::seed_from_u64(2000);
        for _ in 0..50 {
            let len = rng.gen_range(2..40);
            let a: Vec<f64> = (0..len).map(|_| rng.gen_range(-50.0..50.0)).collect();
            let b: Vec<f64> = (0..len).map(|_| rng.gen_range(0.0..5000.0)).collect();

            let ab = correlation(&a, &b);
            assert_eq!(ab, correlation(&b, &a));
            assert!((-1.0..=1.0).contains(&ab));
            assert_relative_eq!(correlation(&a, &a), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_cagr_gold_scenario() {
        let rate = cagr(282.85, 3974.01, 25.0);
        assert_relative_eq!(rate, 11.15, epsilon = 0.05);
    }

    #[test]
    fn test_cagr_round_trip() {
        let mut rng = StdRng::seed_from_u64(25);
        for _ in 0..100 {
            let r: f64 = rng.gen_range(-0.9..1.5);
            let years: f64 = rng.gen_range(0.5..40.0);
            let end = 100.0 * (1.0 + r).powf(years);
            assert_relative_eq!(cagr(100.0, end, years), r * 100.0, epsilon = 1e-6);
        }
    }

    #[rstest]
    #[case(0.0, 100.0, 5.0)]
    #[case(-10.0, 100.0, 5.0)]
    #[case(100.0, 200.0, 0.0)]
    #[case(100.0, -5.0, 3.0)]
    fn test_cagr_undefined_is_zero(#[case] start: f64, #[case] end: f64, #[case] years: f64) {
        assert_eq!(cagr(start, end, years), 0.0);
    }

    #[test]
    fn test_total_return() {
        assert_relative_eq!(total_return(282.85, 3974.01), 1305.0, epsilon = 0.05);
        assert_relative_eq!(total_return(200.0, 150.0), -25.0);
        assert_eq!(total_return(0.0, 150.0), 0.0);
    }

    #[test]
    fn test_percent_change() {
        assert_eq!(percent_change(80.0, 100.0), Some(25.0));
        assert_eq!(percent_change(0.0, 100.0), None);
        assert_eq!(percent_change(f64::NAN, 100.0), None);
    }
}
