//! Watchdog combining node synchronization with bridge reachability.

use serde::{Deserialize, Serialize};

use crate::node::NodeRegistry;

/// Overall health verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemHealth {
    /// Every node synchronized and the bridge reachable
    Optimal,
    /// Anything else
    Degraded,
}

impl SystemHealth {
    /// Lowercase label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Optimal => "optimal",
            Self::Degraded => "degraded",
        }
    }

    /// Returns true for [`SystemHealth::Optimal`]
    #[must_use]
    pub const fn is_optimal(self) -> bool {
        matches!(self, Self::Optimal)
    }
}

impl std::fmt::Display for SystemHealth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one watchdog evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthSummary {
    /// Every node is in `synchronized` status (true for an empty registry)
    pub all_synchronized: bool,
    /// The external bridge flag that was passed in
    pub bridge_reachable: bool,
    /// `optimal` iff both of the above hold
    pub system_health: SystemHealth,
}

/// Stateless health evaluator.
#[derive(Debug, Clone, Copy, Default)]
pub struct HealthWatchdog;

impl HealthWatchdog {
    /// Evaluate the registry together with the bridge flag.
    ///
    /// Pure: reads the registry, touches nothing.
    #[must_use]
    pub fn evaluate(registry: &NodeRegistry, bridge_active: bool) -> HealthSummary {
        let all_synchronized = registry.all_nodes().iter().all(|n| n.is_synchronized());
        let system_health = if all_synchronized && bridge_active {
            SystemHealth::Optimal
        } else {
            SystemHealth::Degraded
        };

        HealthSummary {
            all_synchronized,
            bridge_reachable: bridge_active,
            system_health,
        }
    }
}
