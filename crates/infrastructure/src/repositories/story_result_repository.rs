use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use storylight_application::ports::StoryResultStore;
use storylight_domain::{DomainError, StoryResult};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};

/// Results recorded for one story source file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    pub hash: String,
    #[serde(default)]
    pub results: BTreeMap<String, StoryResult>,
    pub last_run: DateTime<Utc>,
    #[serde(default)]
    pub time_to_execute: f64,
}

type CacheFile = BTreeMap<String, FileEntry>;

/// Story results persisted in a single JSON file, keyed by the absolute path
/// of the story source. An entry is only valid while the source file's
/// content hash is unchanged.
pub struct JsonStoryResultRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonStoryResultRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> CacheFile {
        let raw = match fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return CacheFile::new(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Could not read story cache");
                return CacheFile::new();
            }
        };

        serde_json::from_slice(&raw).unwrap_or_else(|e| {
            warn!(path = %self.path.display(), error = %e, "Corrupt story cache, starting empty");
            CacheFile::new()
        })
    }

    async fn store(&self, cache: &CacheFile) -> Result<(), DomainError> {
        let raw = serde_json::to_vec_pretty(cache)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&self.path, raw).await?;
        Ok(())
    }
}

/// Hex SHA-256 of the file's content; unreadable files hash as "".
pub async fn content_hash(path: &Path) -> String {
    match fs::read(path).await {
        Ok(content) => {
            let mut hasher = Sha256::new();
            hasher.update(&content);
            format!("{:x}", hasher.finalize())
        }
        Err(e) => {
            debug!(path = %path.display(), error = %e, "Could not hash story source");
            String::new()
        }
    }
}

fn entry_key(source_file: &Path) -> String {
    std::path::absolute(source_file)
        .unwrap_or_else(|_| source_file.to_path_buf())
        .display()
        .to_string()
}

#[async_trait]
impl StoryResultStore for JsonStoryResultRepository {
    #[instrument(skip(self))]
    async fn get(&self, source_file: &Path, story_id: &str) -> Option<StoryResult> {
        let cache = self.load().await;
        let entry = cache.get(&entry_key(source_file))?;

        if entry.hash != content_hash(source_file).await {
            debug!("Story source changed since last run");
            return None;
        }

        entry.results.get(story_id).cloned()
    }

    #[instrument(skip(self, result))]
    async fn save(
        &self,
        source_file: &Path,
        story_id: &str,
        result: StoryResult,
        time_to_execute: f64,
    ) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut cache = self.load().await;
        let hash = content_hash(source_file).await;
        let now = Utc::now();

        let entry = cache
            .entry(entry_key(source_file))
            .or_insert_with(|| FileEntry {
                hash: hash.clone(),
                results: BTreeMap::new(),
                last_run: now,
                time_to_execute: 0.0,
            });

        if entry.hash != hash {
            *entry = FileEntry {
                hash,
                results: BTreeMap::new(),
                last_run: now,
                time_to_execute: 0.0,
            };
        }

        entry.results.insert(story_id.to_string(), result);
        entry.last_run = now;
        entry.time_to_execute = time_to_execute;

        self.store(&cache).await
    }
}
