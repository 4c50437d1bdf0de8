//! Network health evaluation.

pub mod watchdog;

pub use watchdog::{HealthSummary, HealthWatchdog, SystemHealth};
