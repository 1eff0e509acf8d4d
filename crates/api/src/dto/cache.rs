use chrono::{DateTime, Utc};
use serde::Serialize;
use storylight_application::use_cases::{CacheSnapshot, ClearedCache};
use storylight_domain::CategoryScores;

/// Response DTO for clearing the audit cache
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearCacheResponse {
    pub message: &'static str,
    pub previous_size: usize,
    pub current_size: usize,
}

impl From<ClearedCache> for ClearCacheResponse {
    fn from(cleared: ClearedCache) -> Self {
        Self {
            message: "Cache cleared",
            previous_size: cleared.previous_size,
            current_size: cleared.current_size,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CachedAuditSummary {
    pub url: String,
    pub timestamp: DateTime<Utc>,
    pub scores: CategoryScores,
}

/// Response DTO listing every stored result, expired ones included
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheListingResponse {
    pub size: usize,
    pub max_size: usize,
    pub audits: Vec<CachedAuditSummary>,
}

impl From<CacheSnapshot> for CacheListingResponse {
    fn from(snapshot: CacheSnapshot) -> Self {
        Self {
            size: snapshot.size,
            max_size: snapshot.capacity,
            audits: snapshot
                .entries
                .into_iter()
                .map(|entry| CachedAuditSummary {
                    url: entry.result.url,
                    timestamp: entry.result.timestamp,
                    scores: entry.result.scores,
                })
                .collect(),
        }
    }
}
