use super::result::{AuditResult, FormFactor, Metrics};
use serde::{Deserialize, Serialize};

/// Pass/fail limits. Category limits are minimum scores (0-100), metric
/// limits are maximum values (milliseconds, or unitless for layout shift).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Thresholds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_practices: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_contentful_paint: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub largest_contentful_paint: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cumulative_layout_shift: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_blocking_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed_index: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interactive: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdReport {
    pub passed: bool,
    pub failures: Vec<String>,
}

enum Check {
    /// Higher is better; fails below the limit.
    Category,
    /// Lower is better; fails above the limit.
    Metric,
}

impl Thresholds {
    /// Component-level limits for desktop runs.
    pub fn desktop() -> Self {
        Self {
            performance: Some(90.0),
            accessibility: Some(95.0),
            best_practices: Some(90.0),
            seo: Some(80.0),
            first_contentful_paint: Some(1000.0),
            largest_contentful_paint: Some(1500.0),
            cumulative_layout_shift: Some(0.05),
            total_blocking_time: Some(100.0),
            speed_index: Some(1500.0),
            interactive: Some(2000.0),
        }
    }

    /// Looser limits for throttled mobile runs.
    pub fn mobile() -> Self {
        Self {
            performance: Some(75.0),
            accessibility: Some(95.0),
            best_practices: Some(90.0),
            seo: Some(80.0),
            first_contentful_paint: Some(1800.0),
            largest_contentful_paint: Some(2500.0),
            cumulative_layout_shift: Some(0.1),
            total_blocking_time: Some(200.0),
            speed_index: Some(3400.0),
            interactive: Some(3800.0),
        }
    }

    pub fn for_form_factor(form_factor: FormFactor) -> Self {
        match form_factor {
            FormFactor::Desktop => Self::desktop(),
            FormFactor::Mobile => Self::mobile(),
        }
    }

    /// Limits set in `overrides` replace the ones in `self`.
    pub fn merge(self, overrides: &Thresholds) -> Self {
        Self {
            performance: overrides.performance.or(self.performance),
            accessibility: overrides.accessibility.or(self.accessibility),
            best_practices: overrides.best_practices.or(self.best_practices),
            seo: overrides.seo.or(self.seo),
            first_contentful_paint: overrides
                .first_contentful_paint
                .or(self.first_contentful_paint),
            largest_contentful_paint: overrides
                .largest_contentful_paint
                .or(self.largest_contentful_paint),
            cumulative_layout_shift: overrides
                .cumulative_layout_shift
                .or(self.cumulative_layout_shift),
            total_blocking_time: overrides.total_blocking_time.or(self.total_blocking_time),
            speed_index: overrides.speed_index.or(self.speed_index),
            interactive: overrides.interactive.or(self.interactive),
        }
    }

    pub fn evaluate(&self, result: &AuditResult) -> ThresholdReport {
        let scores = &result.scores;
        let metrics = &result.metrics;
        let ms = |v: Option<u64>| v.unwrap_or(0) as f64;

        let checks = [
            ("performance", Check::Category, self.performance, scores.performance as f64),
            ("accessibility", Check::Category, self.accessibility, scores.accessibility as f64),
            ("best-practices", Check::Category, self.best_practices, scores.best_practices as f64),
            ("seo", Check::Category, self.seo, scores.seo as f64),
            (
                Metrics::FIRST_CONTENTFUL_PAINT,
                Check::Metric,
                self.first_contentful_paint,
                ms(metrics.first_contentful_paint),
            ),
            (
                Metrics::LARGEST_CONTENTFUL_PAINT,
                Check::Metric,
                self.largest_contentful_paint,
                ms(metrics.largest_contentful_paint),
            ),
            (
                Metrics::CUMULATIVE_LAYOUT_SHIFT,
                Check::Metric,
                self.cumulative_layout_shift,
                metrics.cumulative_layout_shift.unwrap_or(0.0),
            ),
            (
                Metrics::TOTAL_BLOCKING_TIME,
                Check::Metric,
                self.total_blocking_time,
                ms(metrics.total_blocking_time),
            ),
            (Metrics::SPEED_INDEX, Check::Metric, self.speed_index, ms(metrics.speed_index)),
            (Metrics::INTERACTIVE, Check::Metric, self.interactive, ms(metrics.interactive)),
        ];

        let failures: Vec<String> = checks
            .into_iter()
            .filter_map(|(name, check, limit, value)| {
                let limit = limit?;
                let (failed, comparison) = match check {
                    Check::Category => (value < limit, '<'),
                    Check::Metric => (value > limit, '>'),
                };
                failed.then(|| format!("{name}: {} {comparison} {limit}", display_value(name, value)))
            })
            .collect();

        ThresholdReport {
            passed: failures.is_empty(),
            failures,
        }
    }
}

fn display_value(name: &str, value: f64) -> String {
    if name.contains("shift") {
        format!("{value:.3}")
    } else {
        format!("{}", value.round() as i64)
    }
}
