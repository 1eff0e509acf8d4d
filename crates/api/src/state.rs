use std::sync::Arc;
use storylight_application::use_cases::{
    ClearAuditCacheUseCase, GetCacheStatsUseCase, GetCachedAuditUseCase, RunAuditUseCase,
    RunDualAuditUseCase,
};

#[derive(Clone)]
pub struct AppState {
    pub run_audit: Arc<RunAuditUseCase>,
    pub run_dual_audit: Arc<RunDualAuditUseCase>,
    pub get_cached_audit: Arc<GetCachedAuditUseCase>,
    pub clear_cache: Arc<ClearAuditCacheUseCase>,
    pub cache_stats: Arc<GetCacheStatsUseCase>,
}
