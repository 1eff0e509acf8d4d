use crate::audit::{AuditResult, ThresholdReport, Thresholds};
use serde::{Deserialize, Serialize};

/// One form factor's audit of a story, judged against its thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileOutcome {
    pub passed: bool,
    pub failures: Vec<String>,
    pub thresholds: Thresholds,
    pub result: AuditResult,
}

impl ProfileOutcome {
    pub fn evaluate(result: AuditResult, thresholds: Thresholds) -> Self {
        let ThresholdReport { passed, failures } = thresholds.evaluate(&result);
        Self {
            passed,
            failures,
            thresholds,
            result,
        }
    }
}

/// Desktop and mobile outcomes recorded for one story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryResult {
    pub desktop: ProfileOutcome,
    pub mobile: ProfileOutcome,
}
