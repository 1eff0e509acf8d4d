mod audit_story;

pub use audit_story::{AuditStoryUseCase, StoryAuditReport, StoryAuditRequest};
