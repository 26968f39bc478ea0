//! HTTP adapter (axum middleware + terminal responses).

pub mod middleware;

pub use middleware::{deny_response, require_access};
