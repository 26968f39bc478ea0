//! Access gate: per-request allow/deny decision.
//!
//! The gate is a pure function of the request path and the `Authorization`
//! header value. Construct once at startup, then share via `Arc` (no shared
//! mutable state, safe under concurrent requests).
//!
//! Evaluation order is fixed: prefix match, then token presence, then claims
//! decode, then role policy. A deny is terminal; the adapter must not invoke
//! the downstream handler for a denied request.

use fleetgate_core::error::{ClientCode, Result};
use fleetgate_core::token::{decode_claims, extract_bearer};

use crate::config::schema::RouteRule;

use super::routes::{compile_routes, match_route, CompiledRoute};

/// Decision from gate evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny { code: ClientCode, msg: &'static str },
}

impl Decision {
    fn deny(code: ClientCode, msg: &'static str) -> Self {
        Decision::Deny { code, msg }
    }
}

/// Compiled gate runtime.
#[derive(Debug)]
pub struct AccessGate {
    routes: Vec<CompiledRoute>,
}

impl AccessGate {
    pub fn new(rules: &[RouteRule]) -> Result<Self> {
        Ok(Self {
            routes: compile_routes(rules)?,
        })
    }

    /// Compiled route table, in evaluation order.
    pub fn routes(&self) -> &[CompiledRoute] {
        &self.routes
    }

    /// Evaluate one request. `authorization` is the raw header value, if any.
    pub fn evaluate(&self, path: &str, authorization: Option<&str>) -> Decision {
        // Fast path: unprotected prefixes skip token inspection entirely.
        let Some(rule) = match_route(&self.routes, path) else {
            return Decision::Allow;
        };

        let token = match extract_bearer(authorization) {
            Ok(t) => t,
            Err(_) => return Decision::deny(ClientCode::Unauthorized, "Unauthorized"),
        };

        let claims = match decode_claims(token) {
            Ok(c) => c,
            Err(_) => return Decision::deny(ClientCode::InvalidToken, "Invalid token"),
        };

        if let Some(required) = &rule.require_role {
            if claims.role.as_deref() != Some(required.as_str()) {
                return Decision::deny(ClientCode::Forbidden, "Forbidden");
            }
        }

        Decision::Allow
    }
}
