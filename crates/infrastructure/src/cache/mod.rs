pub mod memory;

pub use memory::MemoryAuditCache;
