//! Lighthouse audit model.
//!
//! - `report`: the raw Lighthouse result (LHR) as emitted by the tool
//! - `result`: the normalized result served to callers and cached
//! - `options`: passthrough tool options and the desktop/mobile profiles
//! - `thresholds`: pass/fail limits applied by callers

pub mod options;
pub mod report;
pub mod result;
pub mod thresholds;

pub use options::{AuditOptions, CHROME_FLAGS, CATEGORY_IDS};
pub use report::{LighthouseReport, ReportAudit, ReportCategory};
pub use result::{
    AuditOutcome, AuditResult, CategoryScores, DualAuditOutcome, FailedAudit, FormFactor, Metrics,
};
pub use thresholds::{ThresholdReport, Thresholds};
