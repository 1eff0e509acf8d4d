#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use chrono::{DateTime, TimeDelta, Utc};
use serde_json::json;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use storylight_api::{create_api_routes, AppState};
use storylight_application::ports::{
    AuditCache, AuditEngine, BrowserLauncher, BrowserSession, Clock,
};
use storylight_application::services::AuditRunner;
use storylight_application::use_cases::{
    ClearAuditCacheUseCase, GetCacheStatsUseCase, GetCachedAuditUseCase, RunAuditUseCase,
    RunDualAuditUseCase,
};
use storylight_domain::{
    AuditOptions, AuditResult, CacheEntry, CacheKey, DomainError, LighthouseReport,
};

pub struct FixedClock(Mutex<DateTime<Utc>>);

impl FixedClock {
    pub fn advance(&self, delta: TimeDelta) {
        *self.0.lock().unwrap() += delta;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}

#[derive(Default)]
pub struct VecCache(Mutex<Vec<CacheEntry>>);

impl AuditCache for VecCache {
    fn get(&self, key: &CacheKey) -> Option<CacheEntry> {
        self.0.lock().unwrap().iter().find(|e| &e.key == key).cloned()
    }

    fn set(&self, key: CacheKey, result: AuditResult, stored_at: DateTime<Utc>) {
        let mut entries = self.0.lock().unwrap();
        entries.retain(|e| e.key != key);
        entries.push(CacheEntry {
            key,
            result,
            stored_at,
        });
    }

    fn clear(&self) -> usize {
        let mut entries = self.0.lock().unwrap();
        let n = entries.len();
        entries.clear();
        n
    }

    fn size(&self) -> usize {
        self.0.lock().unwrap().len()
    }

    fn capacity(&self) -> usize {
        50
    }

    fn entries(&self) -> Vec<CacheEntry> {
        self.0.lock().unwrap().clone()
    }
}

#[derive(Clone, Default)]
pub struct CountingLauncher {
    pub launches: Arc<AtomicUsize>,
}

struct NoopSession;

#[async_trait]
impl BrowserSession for NoopSession {
    fn debugging_port(&self) -> u16 {
        9222
    }

    async fn release(self: Box<Self>) {}
}

#[async_trait]
impl BrowserLauncher for CountingLauncher {
    async fn launch(&self) -> Result<Box<dyn BrowserSession>, DomainError> {
        self.launches.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(NoopSession))
    }
}

#[derive(Default)]
pub struct StubEngine {
    pub fail: AtomicBool,
}

#[async_trait]
impl AuditEngine for StubEngine {
    async fn run(
        &self,
        _url: &str,
        _port: u16,
        _options: &AuditOptions,
    ) -> Result<LighthouseReport, DomainError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(DomainError::AuditFailed(
                "Lighthouse exited with status 1".to_string(),
            ));
        }
        Ok(serde_json::from_value(json!({
            "lighthouseVersion": "12.2.1",
            "categories": {
                "performance": { "score": 0.91 },
                "accessibility": { "score": 0.98 },
                "best-practices": { "score": 1 },
                "seo": { "score": 0.9 }
            },
            "audits": {
                "first-contentful-paint": { "score": 1, "numericValue": 812.4 }
            }
        }))
        .unwrap())
    }
}

pub struct TestApp {
    pub router: Router,
    pub launcher: CountingLauncher,
    pub engine: Arc<StubEngine>,
    pub cache: Arc<VecCache>,
    pub clock: Arc<FixedClock>,
}

pub fn test_app() -> TestApp {
    let launcher = CountingLauncher::default();
    let engine = Arc::new(StubEngine::default());
    let cache = Arc::new(VecCache::default());
    let clock = Arc::new(FixedClock(Mutex::new(Utc::now())));

    let runner = Arc::new(AuditRunner::new(
        Arc::new(launcher.clone()),
        engine.clone(),
        clock.clone(),
        Duration::from_secs(5),
    ));

    let state = AppState {
        run_audit: Arc::new(RunAuditUseCase::new(
            runner.clone(),
            cache.clone(),
            clock.clone(),
        )),
        run_dual_audit: Arc::new(RunDualAuditUseCase::new(
            runner,
            cache.clone(),
            clock.clone(),
        )),
        get_cached_audit: Arc::new(GetCachedAuditUseCase::new(cache.clone(), clock.clone())),
        clear_cache: Arc::new(ClearAuditCacheUseCase::new(cache.clone())),
        cache_stats: Arc::new(GetCacheStatsUseCase::new(cache.clone())),
    };

    TestApp {
        router: create_api_routes(state),
        launcher,
        engine,
        cache,
        clock,
    }
}
