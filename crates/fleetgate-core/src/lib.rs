//! fleetgate core: transport-agnostic access-control primitives.
//!
//! This crate defines the error surface, bearer-credential extraction, and
//! token-claims decoding shared by the gateway and by tooling. It carries no
//! transport or runtime dependencies so it can be reused in multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `FleetGateError`/`Result` so the
//! gateway process does not crash on malformed credentials or bad traffic.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod token;

/// Shared result type.
pub use error::{FleetGateError, Result};
