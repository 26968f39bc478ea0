//! Stand-in application handlers behind the gate.
//!
//! The real rental application (UI, persistence, pricing) lives elsewhere;
//! these handlers exist so the protected prefixes have concrete endpoints to
//! exercise allow/deny end to end.

pub mod admin;
pub mod booking;
pub mod catalog;
