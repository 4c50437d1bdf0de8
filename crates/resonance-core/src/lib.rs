//! Core of the resonance network simulator.
//!
//! A fixed set of synthetic nodes is synchronized against a shared reference
//! frequency and the result is folded into a network report and a health
//! verdict:
//!
//! - **Nodes**: [`NodeRegistry`] creates and owns the nodes
//! - **Sync**: [`SynchronizationCoordinator`] computes phases and a [`NetworkReport`]
//! - **Health**: [`HealthWatchdog`] combines node state with the bridge flag
//! - **Network**: [`ResonanceNetwork`] ties them together with a [`ResonanceConfig`]
//!
//! # Example
//!
//! ```rust
//! use resonance_core::{HealthWatchdog, NodeDistribution, NodeRegistry, SynchronizationCoordinator};
//!
//! let mut registry = NodeRegistry::new();
//! registry.initialize(&"europe=2".parse::<NodeDistribution>()?)?;
//!
//! let report = SynchronizationCoordinator::new().synchronize_all(&mut registry, 432.073)?;
//! assert_eq!(report.success_rate, 1.0);
//!
//! let health = HealthWatchdog::evaluate(&registry, true);
//! assert_eq!(health.system_health.as_str(), "optimal");
//! # Ok::<(), resonance_core::ResonanceError>(())
//! ```

pub mod acoustic;
pub mod config;
mod error;
pub mod health;
pub mod network;
pub mod node;
pub mod physics;
pub mod stability;
pub mod status;
pub mod sync;

pub use acoustic::{AcousticOutput, Waveform};
pub use config::ResonanceConfig;
pub use error::{ResonanceError, Result};
pub use health::{HealthSummary, HealthWatchdog, SystemHealth};
pub use network::ResonanceNetwork;
pub use node::{Coordinates, Node, NodeDistribution, NodeId, NodeRegistry, Region, SyncState, SyncStatus};
pub use physics::{period, wavelength, ReferenceConstant};
pub use stability::stability_roi;
pub use status::ArchitectureStatus;
pub use sync::{Clock, FixedClock, NetworkReport, SynchronizationCoordinator, SystemClock};
