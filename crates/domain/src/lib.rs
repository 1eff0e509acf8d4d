//! Storylight Domain Layer
pub mod audit;
pub mod audit_cache;
pub mod config;
pub mod errors;
pub mod story;
pub mod validators;

pub use audit::{
    AuditOptions, AuditOutcome, AuditResult, CategoryScores, DualAuditOutcome, FailedAudit,
    FormFactor, LighthouseReport, Metrics, ThresholdReport, Thresholds,
};
pub use audit_cache::{CacheEntry, CacheKey, CacheLookup, TtlPolicy};
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use story::{ProfileOutcome, StoryResult};
pub use validators::validate_audit_url;
