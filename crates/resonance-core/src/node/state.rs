//! Node record and its synchronization state.

use serde::{Deserialize, Serialize};

use super::{Coordinates, NodeId, Region};

/// Synchronization status of a node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncStatus {
    /// Created but never synchronized
    #[default]
    Uninitialized,
    /// Synchronized at least once
    Synchronized,
}

impl std::fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "uninitialized"),
            Self::Synchronized => write!(f, "synchronized"),
        }
    }
}

/// Mutable part of a node. Only the coordinator writes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncState {
    /// Current status
    pub status: SyncStatus,
    /// Timestamp (seconds since the Unix epoch) of the last synchronization
    pub last_sync: Option<f64>,
    /// Phase in radians, `[0, 2π)`
    pub phase: f64,
}

/// One synthetic participant in the network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    id: NodeId,
    region: Region,
    location: Coordinates,
    sync: SyncState,
}

impl Node {
    pub(crate) fn new(id: NodeId, region: Region, location: Coordinates) -> Self {
        Self {
            id,
            region,
            location,
            sync: SyncState::default(),
        }
    }

    /// Node identity
    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// Region the node was created in
    #[must_use]
    pub const fn region(&self) -> Region {
        self.region
    }

    /// Synthetic coordinates
    #[must_use]
    pub const fn location(&self) -> Coordinates {
        self.location
    }

    /// Current synchronization state
    #[must_use]
    pub const fn sync_state(&self) -> SyncState {
        self.sync
    }

    /// Shorthand for `sync_state().status`
    #[must_use]
    pub const fn status(&self) -> SyncStatus {
        self.sync.status
    }

    /// Shorthand for `sync_state().phase`
    #[must_use]
    pub const fn phase(&self) -> f64 {
        self.sync.phase
    }

    /// Returns true once the node has been synchronized
    #[must_use]
    pub fn is_synchronized(&self) -> bool {
        self.sync.status == SyncStatus::Synchronized
    }

    pub(crate) fn mark_synchronized(&mut self, timestamp: f64, phase: f64) {
        self.sync = SyncState {
            status: SyncStatus::Synchronized,
            last_sync: Some(timestamp),
            phase,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_uninitialized() {
        let node = Node::new(NodeId::new(0), Region::Asia, Region::Asia.coordinates(0));
        assert_eq!(node.status(), SyncStatus::Uninitialized);
        assert!(node.sync_state().last_sync.is_none());
        assert_eq!(node.phase(), 0.0);
        assert!(!node.is_synchronized());
    }

    #[test]
    fn test_mark_synchronized() {
        let mut node = Node::new(NodeId::new(1), Region::Europe, Region::Europe.coordinates(1));
        node.mark_synchronized(100.5, 1.25);
        assert!(node.is_synchronized());
        assert_eq!(node.sync_state().last_sync, Some(100.5));
        assert_eq!(node.phase(), 1.25);
        // Identity and location are untouched.
        assert_eq!(node.id(), NodeId::new(1));
        assert_eq!(node.location().as_tuple(), (50.0, 14.0));
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&SyncStatus::Synchronized).unwrap();
        assert_eq!(json, "\"synchronized\"");
    }
}
