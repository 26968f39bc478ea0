//! Route-rule compilation.
//!
//! Rules keep their configuration order; matching is first-prefix-wins, so an
//! operator lists the more specific prefix (e.g. `/api/admin`) ahead of a
//! broader sibling.

use fleetgate_core::error::{FleetGateError, Result};

use crate::config::schema::RouteRule;

/// Compiled protected-prefix rule.
#[derive(Debug, Clone)]
pub struct CompiledRoute {
    pub prefix: String,
    pub require_role: Option<String>, // None => any decodable token passes
}

/// Compile the configured rules, preserving order.
///
/// Single owner of rule-shape validation; config `validate()` delegates here
/// so a bad rule is rejected at load time and cannot reach the gate.
pub fn compile_routes(raw: &[RouteRule]) -> Result<Vec<CompiledRoute>> {
    let mut out = Vec::with_capacity(raw.len());
    for r in raw {
        if !r.prefix.starts_with('/') {
            return Err(FleetGateError::BadRequest(format!(
                "invalid route prefix: {:?} (expected leading '/')",
                r.prefix
            )));
        }
        if let Some(role) = &r.require_role {
            if role.is_empty() {
                return Err(FleetGateError::BadRequest(format!(
                    "route {} require_role must not be empty",
                    r.prefix
                )));
            }
        }
        out.push(CompiledRoute {
            prefix: r.prefix.clone(),
            require_role: r.require_role.clone(),
        });
    }
    Ok(out)
}

pub fn match_route<'a>(routes: &'a [CompiledRoute], path: &str) -> Option<&'a CompiledRoute> {
    routes.iter().find(|r| path.starts_with(r.prefix.as_str()))
}
