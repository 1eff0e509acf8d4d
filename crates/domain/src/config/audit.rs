use crate::audit::CHROME_FLAGS;
use serde::{Deserialize, Serialize};

/// Browser and Lighthouse invocation settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuditConfig {
    /// Chrome/Chromium executable (default: `$CHROME_PATH` or "google-chrome")
    #[serde(default = "default_chrome_path")]
    pub chrome_path: String,

    /// Extra flags passed to every browser launch
    #[serde(default = "default_chrome_flags")]
    pub chrome_flags: Vec<String>,

    /// Lighthouse CLI executable (default: "lighthouse")
    #[serde(default = "default_lighthouse_path")]
    pub lighthouse_path: String,

    /// Wall-clock limit for one Lighthouse run in seconds (default: 60)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// How long to wait for the browser's debugging port in seconds (default: 30)
    #[serde(default = "default_launch_timeout_secs")]
    pub launch_timeout_secs: u64,

    /// File backing the per-story result cache (default: ".lighthouse-cache.json")
    #[serde(default = "default_story_cache_path")]
    pub story_cache_path: String,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            chrome_path: default_chrome_path(),
            chrome_flags: default_chrome_flags(),
            lighthouse_path: default_lighthouse_path(),
            timeout_secs: default_timeout_secs(),
            launch_timeout_secs: default_launch_timeout_secs(),
            story_cache_path: default_story_cache_path(),
        }
    }
}

fn default_chrome_path() -> String {
    std::env::var("CHROME_PATH").unwrap_or_else(|_| "google-chrome".to_string())
}

fn default_chrome_flags() -> Vec<String> {
    CHROME_FLAGS.iter().map(|f| f.to_string()).collect()
}

fn default_lighthouse_path() -> String {
    "lighthouse".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_launch_timeout_secs() -> u64 {
    30
}

fn default_story_cache_path() -> String {
    ".lighthouse-cache.json".to_string()
}
