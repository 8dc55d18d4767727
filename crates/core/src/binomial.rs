//! Binomial statistics for coin-flip hypothesis tests.
//!
//! Provides combinations, the binomial probability mass function, an
//! upper-tail critical value lookup, and an exact two-tailed p-value under
//! a fair-coin null hypothesis.
//!
//! Every function here is total: out-of-range inputs produce a numeric
//! sentinel instead of an error.

/// Null success probability used by [`calculate_p_value`].
pub const FAIR_COIN: f64 = 0.5;

/// Calculates `n` choose `k` in floating point.
///
/// The product is built incrementally as `res * (n - i + 1) / i`, so large
/// inputs carry floating-point rounding rather than exact integer results.
///
/// # Arguments
/// * `n` - Total number of trials
/// * `k` - Number of successes
///
/// # Returns
/// `0.0` if `k` is outside `[0, n]`, otherwise the number of combinations
///
/// # Examples
/// ```
/// use coinflip_core::binomial::combinations;
///
/// assert!((combinations(5, 2) - 10.0).abs() < 1e-9);
/// assert!((combinations(10, 3) - 120.0).abs() < 1e-9);
/// assert_eq!(combinations(4, 7), 0.0);
/// ```
#[must_use]
pub fn combinations(n: i64, k: i64) -> f64 {
    if k < 0 || k > n {
        return 0.0;
    }
    if k == 0 || k == n {
        return 1.0;
    }

    // C(n, k) == C(n, n - k); iterate over the shorter side
    let k = if k > n - k { n - k } else { k };

    let mut res = 1.0;
    for i in 1..=k {
        res = (res * (n - i + 1) as f64) / i as f64;
    }
    res
}

/// Binomial probability mass: P(X = k) for X ~ Binomial(n, p).
///
/// # Arguments
/// * `k` - Number of successes
/// * `n` - Total number of trials
/// * `p` - Success probability per trial
///
/// # Returns
/// `C(n, k) * p^k * (1 - p)^(n - k)`, or `0.0` when `k` is outside `[0, n]`
///
/// # Examples
/// ```
/// use coinflip_core::binomial::binomial_pmf;
///
/// let p = binomial_pmf(5, 10, 0.5);
/// assert!((p - 252.0 / 1024.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn binomial_pmf(k: i64, n: i64, p: f64) -> f64 {
    if k < 0 || k > n {
        return 0.0;
    }
    combinations(n, k) * p.powf(k as f64) * (1.0 - p).powf((n - k) as f64)
}

/// Finds the upper critical value of a two-tailed binomial test.
///
/// Walks `k` from `n` down to `0`, accumulating the upper-tail mass. The
/// first `k` at which the tail exceeds `alpha / 2` is outside the rejection
/// region, so the critical value is `k + 1`. The lower critical value of the
/// symmetric region is the caller's concern.
///
/// # Arguments
/// * `n` - Total number of trials
/// * `p` - Success probability under the null hypothesis
/// * `alpha` - Two-tailed significance level
///
/// # Returns
/// The smallest count in the upper rejection region, or `n + 1` if the tail
/// never exceeds `alpha / 2`. Both saturate at `i64::MAX`.
///
/// # Examples
/// ```
/// use coinflip_core::binomial::find_critical_value;
///
/// // 61 or more heads out of 100 rejects a fair coin at 5%
/// assert_eq!(find_critical_value(100, 0.5, 0.05), 61);
/// ```
#[must_use]
pub fn find_critical_value(n: i64, p: f64, alpha: f64) -> i64 {
    let upper_tail_alpha = alpha / 2.0;
    let mut prob_sum = 0.0;

    for k in (0..=n).rev() {
        prob_sum += binomial_pmf(k, n, p);
        if prob_sum > upper_tail_alpha {
            return k.saturating_add(1);
        }
    }

    n.saturating_add(1)
}

/// Calculates the exact two-tailed p-value of `k` heads in `n` fair flips.
///
/// The fair-coin distribution is symmetric around `n / 2`, so the upper
/// tail at least as far from the center as `k` is summed and doubled.
///
/// # Arguments
/// * `n` - Total number of flips
/// * `k` - Observed number of heads
///
/// # Returns
/// p-value in `[0, 1]`, or `0.0` when `k` is outside `[0, n]`
///
/// # Examples
/// ```
/// use coinflip_core::binomial::calculate_p_value;
///
/// // Exactly half heads is never surprising
/// assert!((calculate_p_value(10, 5) - 1.0).abs() < f64::EPSILON);
///
/// // 10 heads in 10 flips is
/// let p = calculate_p_value(10, 10);
/// assert!((p - 2.0 / 1024.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn calculate_p_value(n: i64, k: i64) -> f64 {
    if k < 0 || k > n {
        return 0.0;
    }

    let expected = n as f64 / 2.0;
    let distance = (k as f64 - expected).abs();
    let k_high = (expected + distance).ceil() as i64;

    let prob_high: f64 = (k_high..=n).map(|i| binomial_pmf(i, n, FAIR_COIN)).sum();

    // At the center the upper tail includes the middle mass and exceeds 0.5
    (2.0 * prob_high).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upper_tail(from: i64, n: i64, p: f64) -> f64 {
        (from..=n).map(|k| binomial_pmf(k, n, p)).sum()
    }

    // ============================================
    // combinations Tests
    // ============================================

    #[test]
    fn combinations_known_values() {
        assert!((combinations(5, 2) - 10.0).abs() < 1e-9);
        assert!((combinations(10, 3) - 120.0).abs() < 1e-9);
        assert!((combinations(52, 5) - 2_598_960.0).abs() < 1e-3);
    }

    #[test]
    fn combinations_edges_are_one() {
        for n in 0..50 {
            assert!((combinations(n, 0) - 1.0).abs() < f64::EPSILON, "C({n}, 0)");
            assert!((combinations(n, n) - 1.0).abs() < f64::EPSILON, "C({n}, {n})");
        }
    }

    #[test]
    fn combinations_symmetry() {
        for n in 0..60 {
            for k in 0..=n {
                let a = combinations(n, k);
                let b = combinations(n, n - k);
                assert!(
                    (a - b).abs() <= a.abs() * 1e-12,
                    "C({n}, {k}) = {a} but C({n}, {}) = {b}",
                    n - k
                );
            }
        }
    }

    #[test]
    fn combinations_out_of_range_is_zero() {
        assert_eq!(combinations(5, -1), 0.0);
        assert_eq!(combinations(5, 6), 0.0);
        assert_eq!(combinations(0, 1), 0.0);
        assert_eq!(combinations(-3, 0), 0.0);
    }

    #[test]
    fn combinations_pascal_rule_holds() {
        for n in 1..40 {
            for k in 1..n {
                let lhs = combinations(n, k);
                let rhs = combinations(n - 1, k - 1) + combinations(n - 1, k);
                assert!(
                    (lhs - rhs).abs() <= lhs * 1e-10,
                    "Pascal rule failed at ({n}, {k}): {lhs} vs {rhs}"
                );
            }
        }
    }

    #[test]
    fn combinations_extreme_n_does_not_overflow() {
        let c = combinations(i64::MAX, i64::MAX - 1);
        assert!((c - i64::MAX as f64).abs() <= c * 1e-12, "C(max, max - 1) was {c}");
        assert!((combinations(i64::MAX, i64::MAX) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn combinations_large_n_stays_finite() {
        let c = combinations(1000, 500);
        assert!(c.is_finite(), "C(1000, 500) was {c}");
        assert!(c > 1e298, "C(1000, 500) was {c}");
    }

    // ============================================
    // binomial_pmf Tests
    // ============================================

    #[test]
    fn pmf_sums_to_one() {
        for n in [0, 1, 2, 5, 20, 100, 500] {
            for p in [0.0, 0.1, 0.3, 0.5, 0.9, 1.0] {
                let total: f64 = (0..=n).map(|k| binomial_pmf(k, n, p)).sum();
                assert!((total - 1.0).abs() < 1e-9, "n={n} p={p} sum was {total}");
            }
        }
    }

    #[test]
    fn pmf_fair_coin_center() {
        let p = binomial_pmf(5, 10, 0.5);
        assert!((p - 252.0 / 1024.0).abs() < 1e-12, "pmf was {p}");
    }

    #[test]
    fn pmf_out_of_range_is_zero() {
        assert_eq!(binomial_pmf(-1, 10, 0.5), 0.0);
        assert_eq!(binomial_pmf(11, 10, 0.5), 0.0);
        // 0^-1 would be infinite; the range check must short-circuit it
        assert_eq!(binomial_pmf(-1, 10, 0.0), 0.0);
    }

    #[test]
    fn pmf_degenerate_probabilities() {
        assert!((binomial_pmf(0, 7, 0.0) - 1.0).abs() < f64::EPSILON);
        assert_eq!(binomial_pmf(3, 7, 0.0), 0.0);
        assert!((binomial_pmf(7, 7, 1.0) - 1.0).abs() < f64::EPSILON);
        assert_eq!(binomial_pmf(6, 7, 1.0), 0.0);
    }

    #[test]
    fn pmf_biased_coin() {
        // P(X = 2) for Binomial(3, 0.3) = 3 * 0.09 * 0.7
        let p = binomial_pmf(2, 3, 0.3);
        assert!((p - 0.189).abs() < 1e-12, "pmf was {p}");
    }

    // ============================================
    // find_critical_value Tests
    // ============================================

    #[test]
    fn critical_value_100_flips() {
        assert_eq!(find_critical_value(100, 0.5, 0.05), 61);
    }

    #[test]
    fn critical_value_boundary_crossing() {
        let n = 100;
        let alpha = 0.05;
        let k = find_critical_value(n, 0.5, alpha);

        let inside = upper_tail(k, n, 0.5);
        let crossing = upper_tail(k - 1, n, 0.5);
        assert!(inside <= alpha / 2.0, "tail from {k} was {inside}");
        assert!(crossing > alpha / 2.0, "tail from {} was {crossing}", k - 1);
    }

    #[test]
    fn critical_value_10_flips() {
        // P(X >= 9) = 11/1024, P(X >= 8) = 56/1024
        assert_eq!(find_critical_value(10, 0.5, 0.05), 9);
    }

    #[test]
    fn critical_value_stricter_alpha_moves_outward() {
        let loose = find_critical_value(200, 0.5, 0.10);
        let strict = find_critical_value(200, 0.5, 0.01);
        assert!(strict > loose, "strict {strict} loose {loose}");
    }

    #[test]
    fn critical_value_biased_null_shifts_up() {
        let fair = find_critical_value(100, 0.5, 0.05);
        let biased = find_critical_value(100, 0.7, 0.05);
        assert!(biased > fair, "biased {biased} fair {fair}");
    }

    #[test]
    fn critical_value_fallback_when_tail_never_exceeds() {
        // alpha / 2 = 2 cannot be exceeded by a probability mass
        assert_eq!(find_critical_value(20, 0.5, 4.0), 21);
        assert_eq!(find_critical_value(20, f64::NAN, 0.05), 21);
    }

    #[test]
    fn critical_value_saturates_at_max_trials() {
        // p = 1 puts all mass on k = n, crossing on the first step
        assert_eq!(find_critical_value(i64::MAX, 1.0, 0.05), i64::MAX);
    }

    #[test]
    fn critical_value_negative_trials_falls_back() {
        assert_eq!(find_critical_value(-1, 0.5, 0.05), 0);
    }

    #[test]
    fn critical_value_zero_trials() {
        // The single outcome has mass 1, crossing immediately at k = 0
        assert_eq!(find_critical_value(0, 0.5, 0.05), 1);
    }

    // ============================================
    // calculate_p_value Tests
    // ============================================

    #[test]
    fn p_value_at_expectation_is_one() {
        assert!((calculate_p_value(10, 5) - 1.0).abs() < f64::EPSILON);
        assert!((calculate_p_value(100, 50) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn p_value_all_heads() {
        let p = calculate_p_value(10, 10);
        let expected = (2.0 * binomial_pmf(10, 10, 0.5)).min(1.0);
        assert!((p - expected).abs() < 1e-15, "p-value was {p}");
        assert!((p - 0.001_953_125).abs() < 1e-9, "p-value was {p}");
    }

    #[test]
    fn p_value_is_symmetric() {
        for n in [7, 10, 25, 100] {
            for k in 0..=n {
                let a = calculate_p_value(n, k);
                let b = calculate_p_value(n, n - k);
                assert!((a - b).abs() < 1e-12, "n={n} k={k}: {a} vs {b}");
            }
        }
    }

    #[test]
    fn p_value_out_of_range_is_zero() {
        assert_eq!(calculate_p_value(10, -1), 0.0);
        assert_eq!(calculate_p_value(10, 11), 0.0);
    }

    #[test]
    fn p_value_odd_trials_near_center_is_one() {
        // n = 5: both 2 and 3 sit half a flip from the center
        assert!((calculate_p_value(5, 2) - 1.0).abs() < 1e-12);
        assert!((calculate_p_value(5, 3) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn p_value_in_unit_interval() {
        for n in 0..40 {
            for k in 0..=n {
                let p = calculate_p_value(n, k);
                assert!((0.0..=1.0).contains(&p), "n={n} k={k} p={p}");
            }
        }
    }

    #[test]
    fn p_value_decreases_away_from_center() {
        let n = 50;
        let mut previous = calculate_p_value(n, 25);
        for k in 26..=n {
            let p = calculate_p_value(n, k);
            assert!(p <= previous, "p({k}) = {p} exceeded {previous}");
            previous = p;
        }
    }

    #[test]
    fn p_value_matches_critical_region() {
        let n = 100;
        let upper = find_critical_value(n, 0.5, 0.05);
        assert!(calculate_p_value(n, upper) <= 0.05);
        assert!(calculate_p_value(n, upper - 1) > 0.05);
    }

    #[test]
    fn p_value_zero_trials() {
        assert!((calculate_p_value(0, 0) - 1.0).abs() < f64::EPSILON);
    }
}
