//! Synchronization rounds over a node registry.

use tracing::{debug, info, warn};

use super::clock::{Clock, SystemClock};
use super::phase::phase;
use super::report::NetworkReport;
use crate::error::{ensure_frequency, ResonanceError, Result};
use crate::node::NodeRegistry;

/// Runs synchronization rounds.
///
/// The registry is borrowed mutably for the whole round, so no other code
/// can observe it half-synchronized.
#[derive(Debug, Clone, Default)]
pub struct SynchronizationCoordinator<C = SystemClock> {
    clock: C,
}

impl SynchronizationCoordinator<SystemClock> {
    /// Coordinator reading the wall clock.
    #[must_use]
    pub const fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> SynchronizationCoordinator<C> {
    /// Coordinator with a custom time source.
    pub const fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// The time source used for rounds.
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Synchronize every node against `reference_frequency`.
    ///
    /// The clock is read once and that timestamp is shared by the whole
    /// round.
    pub fn synchronize_all(
        &self,
        registry: &mut NodeRegistry,
        reference_frequency: f64,
    ) -> Result<NetworkReport> {
        // Validate before touching the clock so bad input has no effects at all.
        if let Err(err) = ensure_frequency(reference_frequency) {
            warn!(frequency = reference_frequency, "rejected synchronization round");
            return Err(err);
        }
        let timestamp = self.clock.now();
        self.synchronize_all_at(registry, reference_frequency, timestamp)
    }

    /// Synchronize every node using an explicit timestamp.
    ///
    /// Rounds with the same timestamp and frequency produce identical phases.
    pub fn synchronize_all_at(
        &self,
        registry: &mut NodeRegistry,
        reference_frequency: f64,
        timestamp: f64,
    ) -> Result<NetworkReport> {
        if let Err(err) = ensure_frequency(reference_frequency) {
            warn!(frequency = reference_frequency, "rejected synchronization round");
            return Err(err);
        }
        // An overflowing cycle count is a whole number of cycles, phase 0.
        if !timestamp.is_finite() {
            warn!(timestamp, frequency = reference_frequency, "rejected synchronization round");
            return Err(ResonanceError::InvalidTimestamp(timestamp));
        }

        // Phase depends only on the round inputs, never on a node.
        let round_phase = phase(timestamp, reference_frequency);
        for node in registry.nodes_mut() {
            node.mark_synchronized(timestamp, round_phase);
        }

        let report = NetworkReport::new(
            registry.len(),
            registry.synchronized_count(),
            reference_frequency,
            timestamp,
        );

        debug!(phase = round_phase, timestamp, "computed round phase");
        info!(
            synchronized = report.synchronized_nodes,
            total = report.total_nodes,
            frequency = reference_frequency,
            "synchronization round complete"
        );

        Ok(report)
    }
}
