//! Architecture status snapshot.

use serde::{Deserialize, Serialize};

use crate::health::HealthSummary;

/// Full status of a resonance network at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchitectureStatus {
    /// Crate version
    pub version: String,
    /// Seconds since the network was created
    pub uptime_secs: f64,
    /// Reference constant and derived quantities
    pub constant: ConstantStatus,
    /// Node totals
    pub network: NetworkStatus,
    /// Bridge state
    pub bridge: BridgeStatus,
    /// Watchdog verdict
    pub watchdog: HealthSummary,
}

/// Reference constant with wavelength and period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstantStatus {
    /// Symbol of the constant
    pub symbol: String,
    /// Frequency (Hz)
    pub value_hz: f64,
    /// Unit label
    pub unit: String,
    /// Wavelength at the configured speed of sound (m)
    pub wavelength_m: f64,
    /// One oscillation (s)
    pub period_s: f64,
}

/// Node totals at snapshot time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetworkStatus {
    /// Nodes in the registry
    pub total_nodes: usize,
    /// Nodes in `synchronized` status
    pub active_nodes: usize,
    /// Reference frequency rounds run at (Hz)
    pub sync_frequency: f64,
    /// Master clock frequency (Hz)
    pub master_clock: f64,
}

/// Resonance bridge state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeStatus {
    /// Whether the bridge was activated
    pub active: bool,
    /// Configured bridge location
    pub location: String,
}
