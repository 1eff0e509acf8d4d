pub mod audit;
pub mod cache;
pub mod error;
pub mod health;

pub use audit::{AuditRequest, CacheLookupQuery, DualAuditRequest};
pub use cache::{CacheListingResponse, CachedAuditSummary, ClearCacheResponse};
pub use error::{ApiError, ErrorResponse};
pub use health::HealthResponse;
