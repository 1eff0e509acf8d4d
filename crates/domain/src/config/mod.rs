//! Configuration module for Storylight
//!
//! - `root`: Main configuration, loading and CLI overrides
//! - `server`: HTTP API port and binding
//! - `cache`: In-memory audit cache sizing
//! - `audit`: Browser and Lighthouse invocation
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod audit;
pub mod cache;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;

pub use audit::AuditConfig;
pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config, PORT_ENV_VAR};
pub use server::ServerConfig;
