//! Ordered collection of synthetic nodes.

use tracing::{debug, info};

use super::{Node, NodeDistribution, NodeId};
use crate::error::Result;

/// Owns every node of one simulated network.
///
/// Identity and location of a node never change after creation. The
/// synchronization state is written by [`crate::sync::SynchronizationCoordinator`]
/// through an exclusive borrow of the registry.
#[derive(Debug, Clone, Default)]
pub struct NodeRegistry {
    nodes: Vec<Node>,
}

impl NodeRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create nodes from a region -> count distribution.
    ///
    /// Regions are laid out in enumeration order and identities continue
    /// from the current length, so a fresh registry numbers nodes from 0.
    /// The whole distribution is validated before anything is appended.
    /// Calling this twice appends a second batch. Returns the registry
    /// length afterwards.
    pub fn initialize(&mut self, distribution: &NodeDistribution) -> Result<usize> {
        let added = distribution.total()?;

        let mut next_id = self.nodes.len() as u64;
        for (region, count) in distribution.iter() {
            for index in 0..count.unsigned_abs() {
                self.nodes.push(Node::new(
                    NodeId::new(next_id),
                    region,
                    region.coordinates(index),
                ));
                next_id += 1;
            }
            debug!(region = %region, count, "created region nodes");
        }

        info!(added, total = self.nodes.len(), "initialized node registry");
        Ok(self.nodes.len())
    }

    /// Ordered, read-only view of every node.
    #[must_use]
    pub fn all_nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Look up a node by identity.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        // Identities are dense and start at 0.
        usize::try_from(id.raw())
            .ok()
            .and_then(|i| self.nodes.get(i))
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the registry holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes currently in `synchronized` status.
    #[must_use]
    pub fn synchronized_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_synchronized()).count()
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResonanceError;
    use crate::node::Region;

    #[test]
    fn test_initialize_orders_by_region() {
        let mut registry = NodeRegistry::new();
        let dist = NodeDistribution::from_labels([("asia", 2), ("europe", 3)]).unwrap();
        assert_eq!(registry.initialize(&dist).unwrap(), 5);

        let ids: Vec<u64> = registry.all_nodes().iter().map(|n| n.id().raw()).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);

        let regions: Vec<Region> = registry.all_nodes().iter().map(Node::region).collect();
        assert_eq!(
            regions,
            vec![
                Region::Europe,
                Region::Europe,
                Region::Europe,
                Region::Asia,
                Region::Asia
            ]
        );
    }

    #[test]
    fn test_coordinates_restart_per_region() {
        let mut registry = NodeRegistry::new();
        let dist = NodeDistribution::from_labels([("europe", 2), ("asia", 1)]).unwrap();
        registry.initialize(&dist).unwrap();

        let nodes = registry.all_nodes();
        assert_eq!(nodes[0].location().as_tuple(), (48.0, 11.0));
        assert_eq!(nodes[1].location().as_tuple(), (50.0, 14.0));
        assert_eq!(nodes[2].location().as_tuple(), (35.0, 139.0));
    }

    #[test]
    fn test_negative_count_leaves_registry_unchanged() {
        let mut registry = NodeRegistry::new();
        // europe is valid and comes first; nothing may be appended anyway.
        let dist = NodeDistribution::from_labels([("europe", 2), ("asia", -1)]).unwrap();
        let err = registry.initialize(&dist).unwrap_err();
        assert!(matches!(err, ResonanceError::Configuration(_)));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_repeated_initialize_appends() {
        let mut registry = NodeRegistry::new();
        let dist = NodeDistribution::from_labels([("africa", 2)]).unwrap();
        registry.initialize(&dist).unwrap();
        registry.initialize(&dist).unwrap();

        assert_eq!(registry.len(), 4);
        let last = &registry.all_nodes()[3];
        assert_eq!(last.id(), NodeId::new(3));
        // Second batch restarts the coordinate progression.
        assert_eq!(last.location().as_tuple(), (2.0, 33.0));
    }

    #[test]
    fn test_get_and_counts() {
        let mut registry = NodeRegistry::new();
        registry
            .initialize(&NodeDistribution::from_labels([("oceania", 3)]).unwrap())
            .unwrap();

        assert_eq!(registry.get(NodeId::new(2)).unwrap().region(), Region::Oceania);
        assert!(registry.get(NodeId::new(3)).is_none());
        assert_eq!(registry.synchronized_count(), 0);
    }

    #[test]
    fn test_empty_distribution() {
        let mut registry = NodeRegistry::new();
        assert_eq!(registry.initialize(&NodeDistribution::new()).unwrap(), 0);
        assert!(registry.is_empty());
    }
}
