//! Storylight Application Layer
//!
//! Ports describe what the use cases need from the outside world (cache,
//! clock, browser, Lighthouse, story result file); use cases hold the audit
//! and caching rules.
pub mod ports;
pub mod services;
pub mod use_cases;
