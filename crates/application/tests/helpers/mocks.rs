use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use serde_json::json;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use storylight_application::ports::{
    AuditCache, AuditEngine, BrowserLauncher, BrowserSession, Clock, StoryResultStore,
};
use storylight_application::services::AuditRunner;
use storylight_domain::{
    AuditOptions, AuditResult, CacheEntry, CacheKey, DomainError, LighthouseReport, StoryResult,
};

// ============================================================================
// Clock
// ============================================================================

pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Mutex::new(Utc::now()),
        }
    }

    pub fn advance(&self, delta: TimeDelta) {
        let mut now = self.now.lock().unwrap();
        *now += delta;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

// ============================================================================
// Cache
// ============================================================================

/// Minimal insertion-ordered store for use-case tests.
pub struct MockAuditCache {
    entries: Mutex<Vec<CacheEntry>>,
    capacity: usize,
}

impl MockAuditCache {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            capacity: 50,
        }
    }

    pub fn stored_at(&self, key: &CacheKey) -> Option<DateTime<Utc>> {
        self.get(key).map(|e| e.stored_at)
    }

    pub fn get_result_performance(&self, key: &CacheKey) -> Option<u8> {
        self.get(key).map(|e| e.result.scores.performance)
    }
}

impl AuditCache for MockAuditCache {
    fn get(&self, key: &CacheKey) -> Option<CacheEntry> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .find(|e| &e.key == key)
            .cloned()
    }

    fn set(&self, key: CacheKey, result: AuditResult, stored_at: DateTime<Utc>) {
        let mut entries = self.entries.lock().unwrap();
        let entry = CacheEntry {
            key: key.clone(),
            result,
            stored_at,
        };
        match entries.iter_mut().find(|e| e.key == key) {
            Some(existing) => *existing = entry,
            None => entries.push(entry),
        }
        if entries.len() > self.capacity {
            entries.remove(0);
        }
    }

    fn clear(&self) -> usize {
        let mut entries = self.entries.lock().unwrap();
        let removed = entries.len();
        entries.clear();
        removed
    }

    fn size(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn entries(&self) -> Vec<CacheEntry> {
        self.entries.lock().unwrap().clone()
    }
}

// ============================================================================
// Browser
// ============================================================================

#[derive(Clone, Default)]
pub struct MockBrowserLauncher {
    pub launches: Arc<AtomicUsize>,
    pub releases: Arc<AtomicUsize>,
    fail_launch: bool,
}

impl MockBrowserLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_launch: true,
            ..Self::default()
        }
    }

    pub fn launches(&self) -> usize {
        self.launches.load(Ordering::SeqCst)
    }

    pub fn releases(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BrowserLauncher for MockBrowserLauncher {
    async fn launch(&self) -> Result<Box<dyn BrowserSession>, DomainError> {
        if self.fail_launch {
            return Err(DomainError::ResourceLaunchFailed(
                "chrome not installed".to_string(),
            ));
        }
        let n = self.launches.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MockBrowserSession {
            port: 9222 + n as u16,
            releases: self.releases.clone(),
        }))
    }
}

pub struct MockBrowserSession {
    port: u16,
    releases: Arc<AtomicUsize>,
}

#[async_trait]
impl BrowserSession for MockBrowserSession {
    fn debugging_port(&self) -> u16 {
        self.port
    }

    async fn release(self: Box<Self>) {
        self.releases.fetch_add(1, Ordering::SeqCst);
    }
}

// ============================================================================
// Audit engine
// ============================================================================

#[derive(Debug, Clone)]
pub struct EngineCall {
    pub url: String,
    pub port: u16,
    pub options: AuditOptions,
}

impl EngineCall {
    pub fn form_factor(&self) -> Option<&str> {
        self.options.get("formFactor").and_then(|v| v.as_str())
    }
}

#[derive(Clone, Copy, PartialEq)]
pub enum EngineBehavior {
    Succeed,
    Fail,
    /// Fails only for runs whose `formFactor` option matches.
    FailFormFactor(&'static str),
    EmptyReport,
    Hang,
}

pub struct ScriptedAuditEngine {
    pub calls: Mutex<Vec<EngineCall>>,
    behavior: Mutex<EngineBehavior>,
    performance: Mutex<f64>,
}

impl ScriptedAuditEngine {
    pub fn new() -> Self {
        Self::with_behavior(EngineBehavior::Succeed)
    }

    pub fn with_behavior(behavior: EngineBehavior) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            behavior: Mutex::new(behavior),
            performance: Mutex::new(0.95),
        }
    }

    pub fn set_behavior(&self, behavior: EngineBehavior) {
        *self.behavior.lock().unwrap() = behavior;
    }

    pub fn set_performance(&self, score: f64) {
        *self.performance.lock().unwrap() = score;
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<EngineCall> {
        self.calls.lock().unwrap().clone()
    }
}

pub fn sample_report(performance: f64) -> LighthouseReport {
    serde_json::from_value(json!({
        "lighthouseVersion": "12.2.1",
        "fetchTime": "2026-10-19T10:00:00.000Z",
        "categories": {
            "performance": { "score": performance },
            "accessibility": { "score": 1 },
            "best-practices": { "score": 0.96 },
            "seo": { "score": 0.9 }
        },
        "audits": {
            "first-contentful-paint": { "score": 1, "numericValue": 640.2 },
            "largest-contentful-paint": { "score": 1, "numericValue": 912.7 },
            "cumulative-layout-shift": { "score": 1, "numericValue": 0.0011 },
            "total-blocking-time": { "score": 1, "numericValue": 0 },
            "speed-index": { "score": 1, "numericValue": 701.4 },
            "interactive": { "score": 1, "numericValue": 980.9 },
            "color-contrast": {
                "title": "Background and foreground colors have a sufficient contrast ratio",
                "description": "Low-contrast text is difficult to read.",
                "score": 0
            },
            "meta-description": {
                "title": "Document has a meta description",
                "description": "Meta descriptions may be included in search results.",
                "score": 0.5
            }
        }
    }))
    .unwrap()
}

#[async_trait]
impl AuditEngine for ScriptedAuditEngine {
    async fn run(
        &self,
        url: &str,
        port: u16,
        options: &AuditOptions,
    ) -> Result<LighthouseReport, DomainError> {
        let call = EngineCall {
            url: url.to_string(),
            port,
            options: options.clone(),
        };
        let form_factor = call.form_factor().map(str::to_string);
        self.calls.lock().unwrap().push(call);
        tokio::task::yield_now().await;

        let behavior = *self.behavior.lock().unwrap();
        match behavior {
            EngineBehavior::Succeed => Ok(sample_report(*self.performance.lock().unwrap())),
            EngineBehavior::Fail => Err(DomainError::AuditFailed(
                "Lighthouse exited with status 1".to_string(),
            )),
            EngineBehavior::FailFormFactor(target) if form_factor.as_deref() == Some(target) => Err(
                DomainError::AuditFailed(format!("{target} audit failed")),
            ),
            EngineBehavior::FailFormFactor(_) => {
                Ok(sample_report(*self.performance.lock().unwrap()))
            }
            EngineBehavior::EmptyReport => Ok(LighthouseReport::default()),
            EngineBehavior::Hang => {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok(sample_report(1.0))
            }
        }
    }
}

// ============================================================================
// Story result store
// ============================================================================

#[derive(Default)]
pub struct MockStoryStore {
    pub results: Mutex<HashMap<(PathBuf, String), StoryResult>>,
    pub saves: AtomicUsize,
    fail_save: bool,
}

impl MockStoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_save() -> Self {
        Self {
            fail_save: true,
            ..Self::default()
        }
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StoryResultStore for MockStoryStore {
    async fn get(&self, source_file: &Path, story_id: &str) -> Option<StoryResult> {
        self.results
            .lock()
            .unwrap()
            .get(&(source_file.to_path_buf(), story_id.to_string()))
            .cloned()
    }

    async fn save(
        &self,
        source_file: &Path,
        story_id: &str,
        result: StoryResult,
        _time_to_execute: f64,
    ) -> Result<(), DomainError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        if self.fail_save {
            return Err(DomainError::IoError("read-only file system".to_string()));
        }
        self.results
            .lock()
            .unwrap()
            .insert((source_file.to_path_buf(), story_id.to_string()), result);
        Ok(())
    }
}

// ============================================================================
// Wiring
// ============================================================================

pub struct Harness {
    pub launcher: MockBrowserLauncher,
    pub engine: Arc<ScriptedAuditEngine>,
    pub cache: Arc<MockAuditCache>,
    pub clock: Arc<ManualClock>,
    pub runner: Arc<AuditRunner>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with(MockBrowserLauncher::new(), ScriptedAuditEngine::new(), Duration::from_secs(5))
    }

    pub fn with(
        launcher: MockBrowserLauncher,
        engine: ScriptedAuditEngine,
        timeout: Duration,
    ) -> Self {
        let engine = Arc::new(engine);
        let cache = Arc::new(MockAuditCache::new());
        let clock = Arc::new(ManualClock::new());
        let runner = Arc::new(AuditRunner::new(
            Arc::new(launcher.clone()),
            engine.clone(),
            clock.clone(),
            timeout,
        ));
        Self {
            launcher,
            engine,
            cache,
            clock,
            runner,
        }
    }
}
