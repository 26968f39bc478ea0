//! Policy layer (route table compilation + access gate).
//!
//! Compiles the configured protected-prefix rules into an ordered lookup
//! table for the HTTP adapter to consume at runtime.

pub mod gate;
pub mod routes;

pub use gate::{AccessGate, Decision};
pub use routes::CompiledRoute;
