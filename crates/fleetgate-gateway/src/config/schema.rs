use fleetgate_core::error::{FleetGateError, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default = "default_routes")]
    pub routes: Vec<RouteRule>,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(FleetGateError::UnsupportedVersion);
        }
        if self.routes.is_empty() {
            return Err(FleetGateError::BadRequest("routes must not be empty".into()));
        }
        // Rule shape (prefix form, role names) is owned by route compilation.
        crate::policy::routes::compile_routes(&self.routes).map(|_| ())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}

/// One protected-prefix rule: requests whose path starts with `prefix` must
/// carry a decodable bearer token, and additionally the named role when
/// `require_role` is set. Rules are evaluated in order; first match wins.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteRule {
    pub prefix: String,

    #[serde(default)]
    pub require_role: Option<String>,
}

/// Default route table: admin area first (role-gated), then the booking API.
fn default_routes() -> Vec<RouteRule> {
    vec![
        RouteRule {
            prefix: "/api/admin".into(),
            require_role: Some("admin".into()),
        },
        RouteRule {
            prefix: "/api/booking".into(),
            require_role: None,
        },
    ]
}
