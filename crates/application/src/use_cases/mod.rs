pub mod audits;
pub mod cache;
pub mod stories;

pub use audits::{RunAuditUseCase, RunDualAuditUseCase};
pub use cache::{
    CacheSnapshot, ClearAuditCacheUseCase, ClearedCache, GetCacheStatsUseCase,
    GetCachedAuditUseCase,
};
pub use stories::{AuditStoryUseCase, StoryAuditReport, StoryAuditRequest};
