use crate::audit::{AuditOptions, AuditResult, FormFactor};
use chrono::{DateTime, TimeDelta, Utc};
use std::fmt;

/// Lifetime of a cached audit, shared by every lookup path.
pub const AUDIT_CACHE_TTL_MS: i64 = 300_000;

pub const DEFAULT_CACHE_CAPACITY: usize = 50;

/// Identifies one cached audit: the target URL plus the variant that was run.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey(String);

impl CacheKey {
    /// Key for a single audit run with caller-supplied options.
    pub fn for_audit(url: &str, options: &AuditOptions) -> Self {
        Self(format!("{url}_{}", options.canonical_json()))
    }

    /// Key for one half of a dual (desktop + mobile) run.
    pub fn for_profile(url: &str, form_factor: FormFactor) -> Self {
        Self(format!("{url}#{}", form_factor.as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    pub key: CacheKey,
    pub result: AuditResult,
    pub stored_at: DateTime<Utc>,
}

/// Lazy expiry: entries are never swept, only judged when read.
#[derive(Debug, Clone, Copy)]
pub struct TtlPolicy {
    ttl: TimeDelta,
}

impl TtlPolicy {
    pub fn new(ttl: TimeDelta) -> Self {
        Self { ttl }
    }

    pub fn ttl(&self) -> TimeDelta {
        self.ttl
    }

    pub fn age(&self, entry: &CacheEntry, now: DateTime<Utc>) -> TimeDelta {
        now - entry.stored_at
    }

    pub fn is_valid(&self, entry: &CacheEntry, now: DateTime<Utc>) -> bool {
        self.age(entry, now) < self.ttl
    }

    /// Classifies a raw store lookup.
    pub fn classify(&self, entry: Option<CacheEntry>, now: DateTime<Utc>) -> CacheLookup {
        match entry {
            None => CacheLookup::NotFound,
            Some(entry) => {
                let age_ms = self.age(&entry, now).num_milliseconds().max(0) as u64;
                if self.is_valid(&entry, now) {
                    CacheLookup::Fresh { entry, age_ms }
                } else {
                    CacheLookup::Expired { age_ms }
                }
            }
        }
    }
}

impl Default for TtlPolicy {
    fn default() -> Self {
        Self::new(TimeDelta::milliseconds(AUDIT_CACHE_TTL_MS))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CacheLookup {
    Fresh { entry: CacheEntry, age_ms: u64 },
    Expired { age_ms: u64 },
    NotFound,
}

impl CacheLookup {
    pub fn fresh(self) -> Option<(CacheEntry, u64)> {
        match self {
            CacheLookup::Fresh { entry, age_ms } => Some((entry, age_ms)),
            _ => None,
        }
    }
}
