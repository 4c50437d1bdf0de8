//! Synthetic nodes and the registry that owns them.
//!
//! | Sub-module | Contents |
//! |---|---|
//! | [`id`] | [`NodeId`] newtype |
//! | [`region`] | [`Region`], [`Coordinates`] |
//! | [`distribution`] | [`NodeDistribution`] |
//! | [`state`] | [`Node`], [`SyncState`], [`SyncStatus`] |
//! | [`registry`] | [`NodeRegistry`] |

pub mod distribution;
pub mod id;
pub mod region;
pub mod registry;
pub mod state;

pub use distribution::NodeDistribution;
pub use id::NodeId;
pub use region::{Coordinates, Region};
pub use registry::NodeRegistry;
pub use state::{Node, SyncState, SyncStatus};
