//! fleetgate gateway binary.
//!
//! - Strict YAML config (parse + validate) from `fleetgate.yaml`
//! - Route-policy table compiled once into the access gate
//! - Gate layered over the API router as axum middleware

use std::net::SocketAddr;

use tracing_subscriber::{fmt, EnvFilter};

use fleetgate_gateway::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_from_file("fleetgate.yaml").expect("config load failed");
    let listen: SocketAddr = cfg
        .gateway
        .listen
        .parse()
        .expect("gateway.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg).expect("app state init failed");
    for rule in state.gate().routes() {
        tracing::info!(prefix = %rule.prefix, require_role = ?rule.require_role, "route rule compiled");
    }
    let app = router::build_router(state);

    tracing::info!(%listen, "fleetgate-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
