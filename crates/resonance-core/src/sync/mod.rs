//! Phase synchronization of the node network.
//!
//! A round reads one timestamp, derives the phase for every node from that
//! timestamp and the reference frequency, and returns a [`NetworkReport`].

pub mod clock;
pub mod coordinator;
pub mod phase;
pub mod report;

pub use clock::{Clock, FixedClock, SystemClock};
pub use coordinator::SynchronizationCoordinator;
pub use phase::phase;
pub use report::NetworkReport;
