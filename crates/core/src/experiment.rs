//! Summary of a single coin-flip experiment.
//!
//! Turns a head count into the numbers reported for a run:
//! observed rate, exact p-value, and the two-tailed rejection region.

use serde::{Deserialize, Serialize};

use crate::binomial::{calculate_p_value, find_critical_value, FAIR_COIN};

/// Outcome of testing a run against the fair-coin hypothesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The run is surprising enough to reject a fair coin
    RejectNull,
    /// The run is consistent with a fair coin
    FailToReject,
    /// Head count outside `[0, trials]`; nothing to test
    ImpossibleCount,
}

impl Verdict {
    /// Returns a human-readable description of the verdict.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::RejectNull => "Reject H0 - the coin does not look fair",
            Self::FailToReject => "Fail to reject H0 - consistent with a fair coin",
            Self::ImpossibleCount => "No test - head count is outside 0..=trials",
        }
    }
}

/// Statistics for one run of coin flips tested against H0: p = 0.5.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinExperiment {
    /// Total number of flips
    pub trials: i64,
    /// Number of heads observed
    pub heads: i64,
    /// Number of tails observed
    pub tails: i64,
    /// Proportion of heads
    pub head_rate: f64,
    /// Exact two-tailed p-value
    pub p_value: f64,
    /// Significance level the run was judged at
    pub alpha: f64,
    /// Smallest head count in the upper rejection region
    pub critical_upper: i64,
    /// Largest head count in the lower rejection region
    pub critical_lower: i64,
    /// Whether the head count falls inside the rejection region
    pub in_rejection_region: bool,
    /// Whether p-value < alpha
    pub is_significant: bool,
}

impl CoinExperiment {
    /// Creates an experiment summary from a head count.
    ///
    /// A head count outside `[0, trials]` keeps the p-value sentinel 0 but
    /// is never in the rejection region and never significant.
    ///
    /// # Arguments
    /// * `heads` - Number of heads observed
    /// * `trials` - Total number of flips
    /// * `alpha` - Two-tailed significance level
    ///
    /// # Returns
    /// `CoinExperiment` with computed statistics
    ///
    /// # Examples
    /// ```
    /// use coinflip_core::experiment::CoinExperiment;
    ///
    /// let run = CoinExperiment::from_counts(62, 100, 0.05);
    /// assert!(run.in_rejection_region);
    /// assert!(run.is_significant);
    /// ```
    #[must_use]
    pub fn from_counts(heads: i64, trials: i64, alpha: f64) -> Self {
        let head_rate = if trials <= 0 {
            0.0
        } else {
            heads as f64 / trials as f64
        };

        let p_value = calculate_p_value(trials, heads);
        let critical_upper = find_critical_value(trials, FAIR_COIN, alpha);
        let critical_lower = trials - critical_upper;

        let possible = (0..=trials).contains(&heads);
        let in_rejection_region =
            possible && trials > 0 && (heads >= critical_upper || heads <= critical_lower);

        Self {
            trials,
            heads,
            tails: trials - heads,
            head_rate,
            p_value,
            alpha,
            critical_upper,
            critical_lower,
            in_rejection_region,
            is_significant: possible && p_value < alpha,
        }
    }

    /// Whether the head count is one a run of `trials` flips can produce.
    #[must_use]
    pub fn is_possible(&self) -> bool {
        (0..=self.trials).contains(&self.heads)
    }

    /// Expected number of heads under a fair coin.
    #[must_use]
    pub fn expected_heads(&self) -> f64 {
        self.trials as f64 / 2.0
    }

    /// Returns the verdict of the two-tailed test.
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        if !self.is_possible() {
            Verdict::ImpossibleCount
        } else if self.is_significant {
            Verdict::RejectNull
        } else {
            Verdict::FailToReject
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_counts_fair_run() {
        let run = CoinExperiment::from_counts(50, 100, 0.05);

        assert_eq!(run.tails, 50);
        assert!((run.head_rate - 0.5).abs() < f64::EPSILON);
        assert!((run.p_value - 1.0).abs() < f64::EPSILON);
        assert!(!run.in_rejection_region);
        assert!(!run.is_significant);
        assert_eq!(run.verdict(), Verdict::FailToReject);
    }

    #[test]
    fn from_counts_critical_region_is_symmetric() {
        let run = CoinExperiment::from_counts(50, 100, 0.05);
        assert_eq!(run.critical_upper, 61);
        assert_eq!(run.critical_lower, 39);
    }

    #[test]
    fn from_counts_upper_tail_rejects() {
        let run = CoinExperiment::from_counts(65, 100, 0.05);
        assert!(run.in_rejection_region);
        assert!(run.is_significant, "p-value was {}", run.p_value);
        assert_eq!(run.verdict(), Verdict::RejectNull);
    }

    #[test]
    fn from_counts_lower_tail_rejects() {
        let run = CoinExperiment::from_counts(35, 100, 0.05);
        assert!(run.in_rejection_region);
        assert!(run.is_significant, "p-value was {}", run.p_value);
    }

    #[test]
    fn from_counts_all_heads_small_run() {
        let run = CoinExperiment::from_counts(10, 10, 0.05);
        assert!(run.p_value < 0.01, "p-value was {}", run.p_value);
        assert!(run.in_rejection_region);
        assert_eq!(run.critical_upper, 9);
        assert_eq!(run.critical_lower, 1);
    }

    #[test]
    fn from_counts_zero_trials() {
        let run = CoinExperiment::from_counts(0, 0, 0.05);
        assert!((run.head_rate - 0.0).abs() < f64::EPSILON);
        assert!(!run.in_rejection_region);
        assert!(!run.is_significant);
    }

    #[test]
    fn from_counts_impossible_head_count() {
        // More heads than flips: p-value sentinel is 0
        let run = CoinExperiment::from_counts(11, 10, 0.05);
        assert!((run.p_value - 0.0).abs() < f64::EPSILON);
        assert!(!run.is_possible());
        assert!(!run.in_rejection_region);
        assert!(!run.is_significant);
        assert_eq!(run.verdict(), Verdict::ImpossibleCount);

        let negative = CoinExperiment::from_counts(-1, 10, 0.05);
        assert!(!negative.in_rejection_region);
        assert_eq!(negative.verdict(), Verdict::ImpossibleCount);
    }

    #[test]
    fn expected_heads_is_half() {
        let run = CoinExperiment::from_counts(3, 7, 0.05);
        assert!((run.expected_heads() - 3.5).abs() < f64::EPSILON);
    }

    #[test]
    fn verdict_description_returns_text() {
        assert!(!Verdict::RejectNull.description().is_empty());
        assert!(!Verdict::FailToReject.description().is_empty());
        assert!(!Verdict::ImpossibleCount.description().is_empty());
    }

    #[test]
    fn experiment_serializes_correctly() {
        let run = CoinExperiment::from_counts(7, 10, 0.05);
        let json = serde_json::to_string(&run).unwrap();
        assert!(json.contains("\"p_value\""));

        let back: CoinExperiment = serde_json::from_str(&json).unwrap();
        assert_eq!(back.heads, 7);
        assert_eq!(back.critical_upper, run.critical_upper);
    }
}
