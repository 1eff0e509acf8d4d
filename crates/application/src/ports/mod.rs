mod audit_cache;
mod audit_engine;
mod browser;
mod clock;
mod story_result_store;

pub use audit_cache::AuditCache;
pub use audit_engine::AuditEngine;
pub use browser::{BrowserLauncher, BrowserSession};
pub use clock::Clock;
pub use story_result_store::StoryResultStore;
