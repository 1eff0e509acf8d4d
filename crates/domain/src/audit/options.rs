use super::result::FormFactor;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Chrome flags shared by every audit launch.
pub const CHROME_FLAGS: &[&str] = &[
    "--headless",
    "--incognito",
    "--no-sandbox",
    "--disable-dev-shm-usage",
    "--disable-gpu",
    "--window-size=1920,1080",
];

pub const CATEGORY_IDS: [&str; 4] = ["performance", "accessibility", "best-practices", "seo"];

const MOBILE_USER_AGENT: &str = "Mozilla/5.0 (Linux; Android 11; moto g power (2022)) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/109.0.0.0 Mobile Safari/537.36";

/// Lighthouse configuration passed through to the tool untouched.
///
/// Backed by a sorted JSON object, so the serialized form is canonical and
/// can be used as part of a cache key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuditOptions(Map<String, Value>);

impl AuditOptions {
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Accepts a JSON object; `null` is treated as no options.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            Value::Null => Some(Self::new()),
            _ => None,
        }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    /// Shallow merge; keys in `overrides` replace keys in `self`.
    pub fn merged(&self, overrides: &AuditOptions) -> AuditOptions {
        let mut merged = self.0.clone();
        for (key, value) in &overrides.0 {
            merged.insert(key.clone(), value.clone());
        }
        AuditOptions(merged)
    }

    /// Compact JSON with keys sorted at every level.
    pub fn canonical_json(&self) -> String {
        canonicalize(&Value::Object(self.0.clone())).to_string()
    }

    /// Options shared by both form factors.
    pub fn base() -> Self {
        Self::expect_object(json!({
            "logLevel": "error",
            "output": "json",
            "onlyCategories": CATEGORY_IDS,
            "throttlingMethod": "simulate",
        }))
    }

    pub fn desktop() -> Self {
        Self::base().merged(&Self::expect_object(json!({
            "formFactor": "desktop",
            "throttling": {
                "rttMs": 40,
                "throughputKbps": 10240,
                "requestLatencyMs": 0,
                "downloadThroughputKbps": 0,
                "uploadThroughputKbps": 0,
                "cpuSlowdownMultiplier": 1
            },
            "screenEmulation": {
                "mobile": false,
                "width": 1350,
                "height": 940,
                "deviceScaleFactor": 1,
                "disabled": false
            },
            "emulatedUserAgent": false,
        })))
    }

    pub fn mobile() -> Self {
        Self::base().merged(&Self::expect_object(json!({
            "formFactor": "mobile",
            "throttling": {
                "rttMs": 150,
                "throughputKbps": 1638,
                "requestLatencyMs": 150,
                "downloadThroughputKbps": 1638,
                "uploadThroughputKbps": 675,
                "cpuSlowdownMultiplier": 4
            },
            "screenEmulation": {
                "mobile": true,
                "width": 360,
                "height": 640,
                "deviceScaleFactor": 2,
                "disabled": false
            },
            "emulatedUserAgent": MOBILE_USER_AGENT,
        })))
    }

    pub fn for_form_factor(form_factor: FormFactor) -> Self {
        match form_factor {
            FormFactor::Desktop => Self::desktop(),
            FormFactor::Mobile => Self::mobile(),
        }
    }

    fn expect_object(value: Value) -> Self {
        Self::from_value(value).unwrap_or_default()
    }
}

fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let sorted: Map<String, Value> = keys
                .into_iter()
                .map(|k| (k.clone(), canonicalize(&map[k])))
                .collect();
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        other => other.clone(),
    }
}
