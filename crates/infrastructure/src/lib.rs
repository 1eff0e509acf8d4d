pub mod browser;
pub mod cache;
pub mod lighthouse;
pub mod repositories;
pub mod system;
