use async_trait::async_trait;
use std::path::Path;
use storylight_domain::{DomainError, StoryResult};

/// Persistent per-story results, invalidated when the story source changes.
#[async_trait]
pub trait StoryResultStore: Send + Sync {
    /// Returns the stored result when the file's content hash still matches.
    async fn get(&self, source_file: &Path, story_id: &str) -> Option<StoryResult>;

    /// Records a result, starting a fresh file entry if the content changed.
    ///
    /// `time_to_execute` is the audit duration in seconds.
    async fn save(
        &self,
        source_file: &Path,
        story_id: &str,
        result: StoryResult,
        time_to_execute: f64,
    ) -> Result<(), DomainError>;
}
