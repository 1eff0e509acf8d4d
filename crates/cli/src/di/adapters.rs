use std::sync::Arc;
use std::time::Duration;
use storylight_application::ports::{AuditCache, Clock, StoryResultStore};
use storylight_application::services::AuditRunner;
use storylight_domain::Config;
use storylight_infrastructure::browser::ChromeLauncher;
use storylight_infrastructure::cache::MemoryAuditCache;
use storylight_infrastructure::lighthouse::LighthouseCli;
use storylight_infrastructure::repositories::JsonStoryResultRepository;
use storylight_infrastructure::system::SystemClock;
use tracing::info;

pub struct Adapters {
    pub runner: Arc<AuditRunner>,
    pub cache: Arc<dyn AuditCache>,
    pub clock: Arc<dyn Clock>,
    pub story_store: Arc<dyn StoryResultStore>,
}

impl Adapters {
    pub fn new(config: &Config) -> Self {
        let audit = &config.audit;
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        let launcher = Arc::new(ChromeLauncher::new(
            audit.chrome_path.clone(),
            audit.chrome_flags.clone(),
            Duration::from_secs(audit.launch_timeout_secs),
        ));
        let engine = Arc::new(LighthouseCli::new(audit.lighthouse_path.clone()));
        let runner = Arc::new(AuditRunner::new(
            launcher,
            engine,
            clock.clone(),
            Duration::from_secs(audit.timeout_secs),
        ));

        info!(
            chrome = %audit.chrome_path,
            lighthouse = %audit.lighthouse_path,
            timeout_secs = audit.timeout_secs,
            "Audit runner configured"
        );

        Self {
            runner,
            cache: Arc::new(MemoryAuditCache::new(config.cache.capacity)),
            clock,
            story_store: Arc::new(JsonStoryResultRepository::new(&audit.story_cache_path)),
        }
    }
}
