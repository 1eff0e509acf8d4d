use serde::Serialize;
use storylight_domain::{CategoryScores, Metrics, ProfileOutcome, Thresholds};

/// Per-profile summary printed by the `audit` and `story` commands.
#[derive(Debug, Serialize)]
pub struct ProfileReport {
    pub passed: bool,
    pub scores: CategoryScores,
    pub metrics: Metrics,
    pub failures: Vec<String>,
    pub thresholds: Thresholds,
}

impl From<&ProfileOutcome> for ProfileReport {
    fn from(outcome: &ProfileOutcome) -> Self {
        Self {
            passed: outcome.passed,
            scores: outcome.result.scores,
            metrics: outcome.result.metrics,
            failures: outcome.failures.clone(),
            thresholds: outcome.thresholds,
        }
    }
}

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
