//! Shared application state for the fleetgate gateway.
//!
//! The access gate is compiled once from config at startup and injected via
//! state rather than referenced as ambient globals; it lives exactly as long
//! as the process.

use std::sync::Arc;

use fleetgate_core::error::{FleetGateError, Result};

use crate::config::GatewayConfig;
use crate::policy::AccessGate;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    gate: AccessGate,
}

impl AppState {
    /// Build application state.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        let gate = AccessGate::new(&cfg.routes).map_err(|e| {
            FleetGateError::BadRequest(format!("route table compile failed: {e}"))
        })?;

        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, gate }),
        })
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn gate(&self) -> &AccessGate {
        &self.inner.gate
    }
}
