mod clear_cache;
mod get_cached_audit;
mod get_stats;

pub use clear_cache::{ClearAuditCacheUseCase, ClearedCache};
pub use get_cached_audit::GetCachedAuditUseCase;
pub use get_stats::{CacheSnapshot, GetCacheStatsUseCase};
