use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use storylight_domain::{DomainError, ProfileOutcome, StoryResult, Thresholds};
use tracing::{info, instrument, warn};

use crate::ports::StoryResultStore;
use crate::use_cases::RunDualAuditUseCase;

#[derive(Debug, Clone)]
pub struct StoryAuditRequest {
    pub source_file: PathBuf,
    pub story_id: String,
    pub url: String,
    /// Applied on top of the per-form-factor defaults.
    pub thresholds: Thresholds,
}

#[derive(Debug, Clone)]
pub struct StoryAuditReport {
    pub result: StoryResult,
    pub from_cache: bool,
    /// Seconds spent auditing; `None` when served from the store.
    pub time_to_execute: Option<f64>,
}

impl StoryAuditReport {
    pub fn passed(&self) -> bool {
        self.result.desktop.passed
    }
}

/// Audits a story unless its source file is unchanged since the last run.
pub struct AuditStoryUseCase {
    store: Arc<dyn StoryResultStore>,
    dual_audit: Arc<RunDualAuditUseCase>,
}

impl AuditStoryUseCase {
    pub fn new(store: Arc<dyn StoryResultStore>, dual_audit: Arc<RunDualAuditUseCase>) -> Self {
        Self { store, dual_audit }
    }

    #[instrument(skip(self, request), fields(story = %request.story_id))]
    pub async fn execute(&self, request: StoryAuditRequest) -> Result<StoryAuditReport, DomainError> {
        if let Some(result) = self.store.get(&request.source_file, &request.story_id).await {
            info!("Using cached story result");
            return Ok(StoryAuditReport {
                result,
                from_cache: true,
                time_to_execute: None,
            });
        }

        let started = Instant::now();
        let pair = self.dual_audit.execute(&request.url, false).await?;

        let result = StoryResult {
            desktop: ProfileOutcome::evaluate(
                pair.desktop.result,
                Thresholds::desktop().merge(&request.thresholds),
            ),
            mobile: ProfileOutcome::evaluate(
                pair.mobile.result,
                Thresholds::mobile().merge(&request.thresholds),
            ),
        };
        let elapsed = started.elapsed().as_secs_f64();

        if let Err(e) = self
            .store
            .save(&request.source_file, &request.story_id, result.clone(), elapsed)
            .await
        {
            warn!(error = %e, "Could not save story result");
        } else {
            info!(seconds = elapsed, "Cached story result");
        }

        Ok(StoryAuditReport {
            result,
            from_cache: false,
            time_to_execute: Some(elapsed),
        })
    }
}
