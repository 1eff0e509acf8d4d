use super::result::{AuditResult, CategoryScores, FailedAudit, Metrics, MAX_FAILED_AUDITS};
use crate::DomainError;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

/// The subset of the Lighthouse result object (LHR) that gets normalized.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LighthouseReport {
    #[serde(default)]
    pub lighthouse_version: String,
    #[serde(default)]
    pub fetch_time: Option<String>,
    #[serde(default)]
    pub requested_url: Option<String>,
    #[serde(default)]
    pub categories: HashMap<String, ReportCategory>,
    #[serde(default)]
    pub audits: BTreeMap<String, ReportAudit>,
    #[serde(default)]
    pub runtime_error: Option<RuntimeError>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportCategory {
    #[serde(default)]
    pub score: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportAudit {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub numeric_value: Option<f64>,
    #[serde(default)]
    pub display_value: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

impl LighthouseReport {
    pub fn from_json(raw: &[u8]) -> Result<Self, DomainError> {
        serde_json::from_slice(raw)
            .map_err(|e| DomainError::AuditFailed(format!("Unreadable Lighthouse report: {e}")))
    }

    /// Rejects reports that carry no usable data: no categories at all, or a
    /// runtime error reported by the tool (page failed to load, etc).
    pub fn ensure_complete(&self) -> Result<(), DomainError> {
        if let Some(err) = &self.runtime_error {
            return Err(DomainError::AuditFailed(format!(
                "Lighthouse runtime error {}: {}",
                err.code, err.message
            )));
        }
        if self.categories.is_empty() {
            return Err(DomainError::AuditFailed(
                "Lighthouse returned no results".to_string(),
            ));
        }
        Ok(())
    }

    fn category_score(&self, id: &str) -> u8 {
        CategoryScores::normalize(self.categories.get(id).and_then(|c| c.score))
    }

    fn numeric(&self, id: &str) -> Option<f64> {
        self.audits.get(id).and_then(|a| a.numeric_value)
    }

    pub fn scores(&self) -> CategoryScores {
        CategoryScores {
            performance: self.category_score("performance"),
            accessibility: self.category_score("accessibility"),
            best_practices: self.category_score("best-practices"),
            seo: self.category_score("seo"),
        }
    }

    pub fn metrics(&self) -> Metrics {
        Metrics {
            first_contentful_paint: self
                .numeric(Metrics::FIRST_CONTENTFUL_PAINT)
                .map(Metrics::millis),
            largest_contentful_paint: self
                .numeric(Metrics::LARGEST_CONTENTFUL_PAINT)
                .map(Metrics::millis),
            cumulative_layout_shift: self
                .numeric(Metrics::CUMULATIVE_LAYOUT_SHIFT)
                .map(Metrics::layout_shift),
            total_blocking_time: self
                .numeric(Metrics::TOTAL_BLOCKING_TIME)
                .map(Metrics::millis),
            speed_index: self.numeric(Metrics::SPEED_INDEX).map(Metrics::millis),
            interactive: self.numeric(Metrics::INTERACTIVE).map(Metrics::millis),
        }
    }

    /// Audits with a score below 1, worst first, capped at [`MAX_FAILED_AUDITS`].
    /// Unscored audits (informative / not applicable) are skipped.
    pub fn failed_audits(&self) -> Vec<FailedAudit> {
        let mut failed: Vec<FailedAudit> = self
            .audits
            .iter()
            .filter_map(|(id, audit)| {
                let score = audit.score?;
                (score < 1.0).then(|| FailedAudit {
                    id: id.clone(),
                    title: audit.title.clone(),
                    description: audit.description.clone(),
                    score,
                    passed: false,
                    display_value: audit.display_value.clone(),
                })
            })
            .collect();

        failed.sort_by(|a, b| a.score.total_cmp(&b.score));
        failed.truncate(MAX_FAILED_AUDITS);
        failed
    }

    pub fn normalize(&self, url: &str, completed_at: DateTime<Utc>) -> AuditResult {
        AuditResult {
            form_factor: None,
            scores: self.scores(),
            metrics: self.metrics(),
            failed_audits: self.failed_audits(),
            timestamp: completed_at,
            url: url.to_string(),
            tool_version: self.lighthouse_version.clone(),
            fetch_time: self.fetch_time.clone(),
        }
    }
}
