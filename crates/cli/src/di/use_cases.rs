use std::sync::Arc;
use storylight_api::AppState;
use storylight_application::use_cases::{
    AuditStoryUseCase, ClearAuditCacheUseCase, GetCacheStatsUseCase, GetCachedAuditUseCase,
    RunAuditUseCase, RunDualAuditUseCase,
};

use super::Adapters;

pub struct UseCases {
    pub run_audit: Arc<RunAuditUseCase>,
    pub run_dual_audit: Arc<RunDualAuditUseCase>,
    pub get_cached_audit: Arc<GetCachedAuditUseCase>,
    pub clear_cache: Arc<ClearAuditCacheUseCase>,
    pub cache_stats: Arc<GetCacheStatsUseCase>,
    pub audit_story: Arc<AuditStoryUseCase>,
}

impl UseCases {
    pub fn new(adapters: Adapters) -> Self {
        let run_dual_audit = Arc::new(RunDualAuditUseCase::new(
            adapters.runner.clone(),
            adapters.cache.clone(),
            adapters.clock.clone(),
        ));

        Self {
            run_audit: Arc::new(RunAuditUseCase::new(
                adapters.runner.clone(),
                adapters.cache.clone(),
                adapters.clock.clone(),
            )),
            get_cached_audit: Arc::new(GetCachedAuditUseCase::new(
                adapters.cache.clone(),
                adapters.clock.clone(),
            )),
            clear_cache: Arc::new(ClearAuditCacheUseCase::new(adapters.cache.clone())),
            cache_stats: Arc::new(GetCacheStatsUseCase::new(adapters.cache.clone())),
            audit_story: Arc::new(AuditStoryUseCase::new(
                adapters.story_store.clone(),
                run_dual_audit.clone(),
            )),
            run_dual_audit,
        }
    }

    pub fn app_state(&self) -> AppState {
        AppState {
            run_audit: self.run_audit.clone(),
            run_dual_audit: self.run_dual_audit.clone(),
            get_cached_audit: self.get_cached_audit.clone(),
            clear_cache: self.clear_cache.clone(),
            cache_stats: self.cache_stats.clone(),
        }
    }
}
