pub mod audit;
pub mod report;
pub mod serve;
pub mod story;

use anyhow::Context;
use storylight_domain::Thresholds;

/// Parses a `--thresholds` JSON object, e.g. `{"performance": 80}`.
pub fn parse_thresholds(raw: Option<&str>) -> anyhow::Result<Thresholds> {
    match raw {
        None => Ok(Thresholds::default()),
        Some(raw) => serde_json::from_str(raw).context("--thresholds must be a JSON object"),
    }
}
