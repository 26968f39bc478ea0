//! fleetgate gateway library entry.
//!
//! This crate wires the config layer, the compiled route-policy table, the
//! access gate, and the HTTP adapter into a cohesive gateway stack. It is
//! intended to be consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod http;
pub mod policy;
pub mod router;
pub mod services;
