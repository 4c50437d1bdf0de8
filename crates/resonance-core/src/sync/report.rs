//! Per-round network report.

use serde::{Deserialize, Serialize};

/// Aggregate result of one synchronization round.
///
/// Built fresh by every round and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetworkReport {
    /// Nodes in the registry
    pub total_nodes: usize,
    /// Nodes in `synchronized` status after the round
    pub synchronized_nodes: usize,
    /// Reference frequency used (Hz)
    pub frequency: f64,
    /// `synchronized_nodes / total_nodes`, or 0 for an empty registry
    pub success_rate: f64,
    /// Timestamp shared by every node in the round
    pub timestamp: f64,
}

impl NetworkReport {
    /// Build a report, computing the success ratio.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(total_nodes: usize, synchronized_nodes: usize, frequency: f64, timestamp: f64) -> Self {
        let success_rate = if total_nodes == 0 {
            0.0
        } else {
            synchronized_nodes as f64 / total_nodes as f64
        };
        Self {
            total_nodes,
            synchronized_nodes,
            frequency,
            success_rate,
            timestamp,
        }
    }
}
