mod audit_runner;

pub use audit_runner::AuditRunner;
