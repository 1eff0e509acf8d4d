use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use storylight_application::ports::AuditCache;
use storylight_domain::{AuditResult, CacheEntry, CacheKey};
use tracing::debug;

struct Inner {
    entries: FxHashMap<CacheKey, CacheEntry>,
    /// Keys in first-insertion order; overwriting a key keeps its slot.
    order: VecDeque<CacheKey>,
}

/// In-process FIFO store for audit results.
pub struct MemoryAuditCache {
    inner: RwLock<Inner>,
    capacity: usize,
}

impl MemoryAuditCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: RwLock::new(Inner {
                entries: FxHashMap::default(),
                order: VecDeque::with_capacity(capacity + 1),
            }),
            capacity,
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl AuditCache for MemoryAuditCache {
    fn get(&self, key: &CacheKey) -> Option<CacheEntry> {
        self.read().entries.get(key).cloned()
    }

    fn set(&self, key: CacheKey, result: AuditResult, stored_at: DateTime<Utc>) {
        let mut inner = self.write();
        let entry = CacheEntry {
            key: key.clone(),
            result,
            stored_at,
        };

        if inner.entries.insert(key.clone(), entry).is_none() {
            inner.order.push_back(key);
        }

        while inner.entries.len() > self.capacity {
            let Some(oldest) = inner.order.pop_front() else {
                break;
            };
            inner.entries.remove(&oldest);
            debug!(key = %oldest, "Evicted oldest audit result");
        }
    }

    fn clear(&self) -> usize {
        let mut inner = self.write();
        let removed = inner.entries.len();
        inner.entries.clear();
        inner.order.clear();
        removed
    }

    fn size(&self) -> usize {
        self.read().entries.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn entries(&self) -> Vec<CacheEntry> {
        let inner = self.read();
        inner
            .order
            .iter()
            .filter_map(|key| inner.entries.get(key).cloned())
            .collect()
    }
}
