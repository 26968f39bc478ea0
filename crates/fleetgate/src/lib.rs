//! Top-level facade crate for fleetgate.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use fleetgate_core::*;
}

pub mod gateway {
    pub use fleetgate_gateway::*;
}
