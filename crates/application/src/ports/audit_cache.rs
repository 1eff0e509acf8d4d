use chrono::{DateTime, Utc};
use storylight_domain::{AuditResult, CacheEntry, CacheKey};

/// Bounded store of normalized audit results.
///
/// Implementations never judge freshness; expiry is applied by the caller
/// through [`storylight_domain::TtlPolicy`].
pub trait AuditCache: Send + Sync {
    /// Returns the stored entry, fresh or not. No side effects.
    fn get(&self, key: &CacheKey) -> Option<CacheEntry>;

    /// Inserts or replaces the entry for `key`. When the insert grows the
    /// store past its capacity, the oldest inserted entry is evicted.
    fn set(&self, key: CacheKey, result: AuditResult, stored_at: DateTime<Utc>);

    /// Removes everything and returns how many entries were dropped.
    fn clear(&self) -> usize;

    fn size(&self) -> usize;

    fn capacity(&self) -> usize;

    /// Snapshot of all entries in insertion order.
    fn entries(&self) -> Vec<CacheEntry>;
}
