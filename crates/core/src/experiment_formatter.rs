#![allow(clippy::format_push_string)]
#![allow(clippy::uninlined_format_args)]

use crate::experiment::CoinExperiment;

pub struct ExperimentFormatter;

impl ExperimentFormatter {
    #[must_use]
    pub fn format(experiment: &CoinExperiment) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push_str("                    COIN FLIP EXPERIMENT                       \n");
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        // Observations
        output.push_str("Observations\n");
        output.push_str("───────────────────────────────────────────────────────────────\n");
        output.push_str(&format!(
            "Flips:                 {}\n",
            experiment.trials
        ));
        output.push_str(&format!(
            "Heads:                 {}\n",
            experiment.heads
        ));
        output.push_str(&format!(
            "Tails:                 {}\n",
            experiment.tails
        ));
        output.push_str(&format!(
            "Head Rate:             {:.2}%\n",
            experiment.head_rate * 100.0
        ));
        output.push_str(&format!(
            "Expected Heads:        {:.1}\n",
            experiment.expected_heads()
        ));
        output.push('\n');

        // Hypothesis test
        output.push_str("Two-Tailed Test (H0: p = 0.5)\n");
        output.push_str("───────────────────────────────────────────────────────────────\n");
        output.push_str(&format!(
            "Significance Level:    {}\n",
            experiment.alpha
        ));
        output.push_str(&format!(
            "p-value:               {:.6}\n",
            experiment.p_value
        ));
        output.push_str(&format!(
            "Rejection Region:      heads <= {} or heads >= {}\n",
            experiment.critical_lower, experiment.critical_upper
        ));
        output.push_str(&format!(
            "In Rejection Region:   {}\n",
            if experiment.in_rejection_region { "yes" } else { "no" }
        ));
        output.push('\n');

        output.push_str(&format!("Verdict: {}\n", experiment.verdict().description()));
        output.push_str("═══════════════════════════════════════════════════════════════\n");

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_includes_counts_and_region() {
        let run = CoinExperiment::from_counts(65, 100, 0.05);
        let text = ExperimentFormatter::format(&run);

        assert!(text.contains("Heads:                 65"));
        assert!(text.contains("heads <= 39 or heads >= 61"));
        assert!(text.contains("In Rejection Region:   yes"));
        assert!(text.contains("Reject H0"));
    }

    #[test]
    fn format_fair_run_fails_to_reject() {
        let run = CoinExperiment::from_counts(5, 10, 0.05);
        let text = ExperimentFormatter::format(&run);

        assert!(text.contains("p-value:               1.000000"));
        assert!(text.contains("Fail to reject H0"));
    }
}
