use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound on the number of failed audits kept per result.
pub const MAX_FAILED_AUDITS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormFactor {
    Desktop,
    Mobile,
}

impl FormFactor {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormFactor::Desktop => "desktop",
            FormFactor::Mobile => "mobile",
        }
    }
}

impl fmt::Display for FormFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category scores on a 0-100 integer scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub performance: u8,
    pub accessibility: u8,
    #[serde(rename = "best-practices")]
    pub best_practices: u8,
    pub seo: u8,
}

impl CategoryScores {
    /// Converts a raw `0.0..=1.0` category score, treating an absent score as 0.
    pub fn normalize(raw: Option<f64>) -> u8 {
        (raw.unwrap_or(0.0) * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

/// Core Web Vitals and timing metrics. Times are milliseconds,
/// `cumulative_layout_shift` is unitless.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Metrics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_contentful_paint: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub largest_contentful_paint: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cumulative_layout_shift: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_blocking_time: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed_index: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interactive: Option<u64>,
}

impl Metrics {
    pub const FIRST_CONTENTFUL_PAINT: &'static str = "first-contentful-paint";
    pub const LARGEST_CONTENTFUL_PAINT: &'static str = "largest-contentful-paint";
    pub const CUMULATIVE_LAYOUT_SHIFT: &'static str = "cumulative-layout-shift";
    pub const TOTAL_BLOCKING_TIME: &'static str = "total-blocking-time";
    pub const SPEED_INDEX: &'static str = "speed-index";
    pub const INTERACTIVE: &'static str = "interactive";

    pub fn millis(raw: f64) -> u64 {
        raw.round().max(0.0) as u64
    }

    pub fn layout_shift(raw: f64) -> f64 {
        (raw * 1000.0).round() / 1000.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedAudit {
    pub id: String,
    pub title: String,
    pub description: String,
    pub score: f64,
    #[serde(default)]
    pub passed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_value: Option<String>,
}

/// Normalized outcome of one Lighthouse run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_factor: Option<FormFactor>,
    pub scores: CategoryScores,
    pub metrics: Metrics,
    #[serde(rename = "audits")]
    pub failed_audits: Vec<FailedAudit>,
    pub timestamp: DateTime<Utc>,
    pub url: String,
    #[serde(rename = "lighthouseVersion")]
    pub tool_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetch_time: Option<String>,
}

impl AuditResult {
    pub fn with_form_factor(mut self, form_factor: FormFactor) -> Self {
        self.form_factor = Some(form_factor);
        self
    }
}

/// A result together with where it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditOutcome {
    #[serde(flatten)]
    pub result: AuditResult,
    pub cached: bool,
    /// Milliseconds since the result was stored; only set for cache hits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_age: Option<u64>,
}

impl AuditOutcome {
    pub fn fresh(result: AuditResult) -> Self {
        Self {
            result,
            cached: false,
            cache_age: None,
        }
    }

    pub fn from_cache(result: AuditResult, cache_age_ms: u64) -> Self {
        Self {
            result,
            cached: true,
            cache_age: Some(cache_age_ms),
        }
    }
}

/// Desktop and mobile results for the same target, always produced together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DualAuditOutcome {
    pub desktop: AuditOutcome,
    pub mobile: AuditOutcome,
}
