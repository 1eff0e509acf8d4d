use chrono::TimeDelta;
use std::time::Duration;
use storylight_application::ports::{AuditCache, Clock};
use storylight_application::use_cases::RunDualAuditUseCase;
use storylight_domain::{CacheKey, DomainError, FormFactor};

mod helpers;
use helpers::{EngineBehavior, Harness, MockBrowserLauncher, ScriptedAuditEngine};

const URL: &str = "http://localhost:6006/iframe.html?id=card--default&viewMode=story";

fn use_case(h: &Harness) -> RunDualAuditUseCase {
    RunDualAuditUseCase::new(h.runner.clone(), h.cache.clone(), h.clock.clone())
}

fn desktop_key() -> CacheKey {
    CacheKey::for_profile(URL, FormFactor::Desktop)
}

fn mobile_key() -> CacheKey {
    CacheKey::for_profile(URL, FormFactor::Mobile)
}

#[tokio::test]
async fn test_runs_desktop_then_mobile_on_one_browser() {
    let h = Harness::new();
    let uc = use_case(&h);

    let outcome = uc.execute(URL, false).await.unwrap();

    let calls = h.engine.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].form_factor(), Some("desktop"));
    assert_eq!(calls[1].form_factor(), Some("mobile"));
    assert_eq!(calls[0].port, calls[1].port);
    assert_eq!(h.launcher.launches(), 1);
    assert_eq!(h.launcher.releases(), 1);

    assert_eq!(outcome.desktop.result.form_factor, Some(FormFactor::Desktop));
    assert_eq!(outcome.mobile.result.form_factor, Some(FormFactor::Mobile));
    assert!(!outcome.desktop.cached && !outcome.mobile.cached);
    assert!(h.cache.get(&desktop_key()).is_some());
    assert!(h.cache.get(&mobile_key()).is_some());
}

#[tokio::test]
async fn test_both_fresh_served_from_cache() {
    let h = Harness::new();
    let uc = use_case(&h);

    uc.execute(URL, false).await.unwrap();
    h.clock.advance(TimeDelta::seconds(20));
    let outcome = uc.execute(URL, false).await.unwrap();

    assert!(outcome.desktop.cached && outcome.mobile.cached);
    assert_eq!(outcome.desktop.cache_age, Some(20_000));
    assert_eq!(outcome.mobile.cache_age, Some(20_000));
    assert_eq!(h.launcher.launches(), 1);
    assert_eq!(h.engine.call_count(), 2);
}

#[tokio::test]
async fn test_one_stale_half_reruns_both() {
    let h = Harness::new();
    let uc = use_case(&h);

    uc.execute(URL, false).await.unwrap();

    // Re-store only the desktop half so it stays fresh while mobile ages out.
    h.clock.advance(TimeDelta::minutes(4));
    let desktop = h.cache.get(&desktop_key()).unwrap();
    h.cache.set(desktop_key(), desktop.result, h.clock.now());
    let desktop_stored_at = h.cache.stored_at(&desktop_key()).unwrap();

    h.clock.advance(TimeDelta::minutes(2));
    let outcome = uc.execute(URL, false).await.unwrap();

    assert!(!outcome.desktop.cached && !outcome.mobile.cached);
    assert_eq!(h.engine.call_count(), 4);
    assert_eq!(h.launcher.launches(), 2);
    assert!(h.cache.stored_at(&desktop_key()).unwrap() > desktop_stored_at);
}

#[tokio::test]
async fn test_missing_mobile_half_reruns_both() {
    let h = Harness::new();
    let uc = use_case(&h);

    uc.execute(URL, false).await.unwrap();
    let desktop = h.cache.get(&desktop_key()).unwrap();
    h.cache.clear();
    h.cache.set(desktop_key(), desktop.result, desktop.stored_at);

    let outcome = uc.execute(URL, false).await.unwrap();

    assert!(!outcome.desktop.cached && !outcome.mobile.cached);
    assert_eq!(h.engine.call_count(), 4);
    assert_eq!(h.cache.size(), 2);
}

#[tokio::test]
async fn test_skip_cache_reruns_both() {
    let h = Harness::new();
    let uc = use_case(&h);

    uc.execute(URL, false).await.unwrap();
    let outcome = uc.execute(URL, true).await.unwrap();

    assert!(!outcome.desktop.cached);
    assert_eq!(h.engine.call_count(), 4);
    assert_eq!(h.launcher.releases(), 2);
}

#[tokio::test]
async fn test_desktop_failure_skips_mobile_and_caches_nothing() {
    let h = Harness::with(
        MockBrowserLauncher::new(),
        ScriptedAuditEngine::with_behavior(EngineBehavior::FailFormFactor("desktop")),
        Duration::from_secs(5),
    );
    let uc = use_case(&h);

    let err = uc.execute(URL, false).await.unwrap_err();

    assert!(matches!(err, DomainError::AuditFailed(_)));
    assert_eq!(h.engine.call_count(), 1);
    assert_eq!(h.launcher.releases(), 1);
    assert_eq!(h.cache.size(), 0);
}

#[tokio::test]
async fn test_mobile_failure_returns_no_partial_pair() {
    let h = Harness::with(
        MockBrowserLauncher::new(),
        ScriptedAuditEngine::with_behavior(EngineBehavior::FailFormFactor("mobile")),
        Duration::from_secs(5),
    );
    let uc = use_case(&h);

    let err = uc.execute(URL, false).await.unwrap_err();

    assert_eq!(err.to_string(), "mobile audit failed");
    assert_eq!(h.engine.call_count(), 2);
    assert_eq!(h.launcher.releases(), 1);
    assert_eq!(h.cache.size(), 0);
}

#[tokio::test]
async fn test_invalid_url_rejected_before_launch() {
    let h = Harness::new();
    let uc = use_case(&h);

    let err = uc.execute("", false).await.unwrap_err();

    assert!(matches!(err, DomainError::UrlRequired));
    assert_eq!(h.launcher.launches(), 0);
}
