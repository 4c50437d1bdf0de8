//! The resonance network: registry, coordinator and bridge behind one handle.

use tracing::info;

use crate::acoustic::AcousticOutput;
use crate::config::ResonanceConfig;
use crate::error::{ResonanceError, Result};
use crate::health::{HealthSummary, HealthWatchdog};
use crate::node::{NodeDistribution, NodeRegistry};
use crate::physics::ReferenceConstant;
use crate::status::{ArchitectureStatus, BridgeStatus, ConstantStatus, NetworkStatus};
use crate::sync::{Clock, NetworkReport, SynchronizationCoordinator, SystemClock};

/// One simulated network.
///
/// Unlike the bare [`NodeRegistry`], the network refuses to be initialized
/// twice.
#[derive(Debug)]
pub struct ResonanceNetwork<C = SystemClock> {
    config: ResonanceConfig,
    registry: NodeRegistry,
    coordinator: SynchronizationCoordinator<C>,
    bridge_active: bool,
    initialized: bool,
    genesis: f64,
}

impl ResonanceNetwork<SystemClock> {
    /// Network on the wall clock.
    pub fn new(config: ResonanceConfig) -> Result<Self> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> ResonanceNetwork<C> {
    /// Network with a custom time source.
    pub fn with_clock(config: ResonanceConfig, clock: C) -> Result<Self> {
        config.validate()?;
        let genesis = clock.now();
        Ok(Self {
            config,
            registry: NodeRegistry::new(),
            coordinator: SynchronizationCoordinator::with_clock(clock),
            bridge_active: false,
            initialized: false,
            genesis,
        })
    }

    /// Active configuration
    pub const fn config(&self) -> &ResonanceConfig {
        &self.config
    }

    /// Node registry
    pub const fn registry(&self) -> &NodeRegistry {
        &self.registry
    }

    /// Whether the bridge has been activated
    pub const fn bridge_active(&self) -> bool {
        self.bridge_active
    }

    /// Create the nodes. Only the first call succeeds.
    pub fn initialize(&mut self, distribution: &NodeDistribution) -> Result<usize> {
        if self.initialized {
            return Err(ResonanceError::Configuration(
                "network is already initialized".to_string(),
            ));
        }
        let count = self.registry.initialize(distribution)?;
        self.initialized = true;
        Ok(count)
    }

    /// Create the nodes from the configured distribution.
    pub fn initialize_from_config(&mut self) -> Result<usize> {
        let distribution = self.config.distribution.clone();
        self.initialize(&distribution)
    }

    /// Mark the resonance bridge reachable.
    pub fn activate_bridge(&mut self) -> bool {
        self.bridge_active = true;
        info!(location = %self.config.bridge_location, "resonance bridge active");
        self.bridge_active
    }

    /// Run a round at the configured reference frequency.
    pub fn synchronize(&mut self) -> Result<NetworkReport> {
        self.synchronize_with(self.config.reference_frequency)
    }

    /// Run a round at another frequency, reading the network's clock.
    pub fn synchronize_with(&mut self, frequency: f64) -> Result<NetworkReport> {
        self.coordinator.synchronize_all(&mut self.registry, frequency)
    }

    /// Current watchdog verdict.
    pub fn watchdog(&self) -> HealthSummary {
        HealthWatchdog::evaluate(&self.registry, self.bridge_active)
    }

    /// Tone descriptor at the reference frequency.
    pub fn acoustic_output(&self, duration_secs: f64) -> Result<AcousticOutput> {
        AcousticOutput::describe(
            self.config.reference_frequency,
            duration_secs,
            self.config.sample_rate,
        )
    }

    /// Reference constant at the configured frequency.
    pub fn constant(&self) -> ReferenceConstant {
        ReferenceConstant::at(self.config.reference_frequency)
    }

    /// Snapshot of the whole architecture.
    pub fn status(&self) -> Result<ArchitectureStatus> {
        let constant = self.constant();
        let wavelength_m = constant.wavelength(self.config.speed_of_sound)?;
        let period_s = constant.period()?;

        Ok(ArchitectureStatus {
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_secs: (self.coordinator.clock().now() - self.genesis).max(0.0),
            constant: ConstantStatus {
                symbol: constant.symbol,
                value_hz: constant.value_hz,
                unit: constant.unit,
                wavelength_m,
                period_s,
            },
            network: NetworkStatus {
                total_nodes: self.registry.len(),
                active_nodes: self.registry.synchronized_count(),
                sync_frequency: self.config.reference_frequency,
                master_clock: self.config.master_clock_frequency,
            },
            bridge: BridgeStatus {
                active: self.bridge_active,
                location: self.config.bridge_location.clone(),
            },
            watchdog: self.watchdog(),
        })
    }
}
