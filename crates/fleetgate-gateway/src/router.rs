//! Axum router wiring.
//!
//! Public catalog routes plus the protected booking/admin API surface. The
//! access gate is layered over the whole router; unprotected paths fall
//! through it on the fast path without token inspection.

use axum::routing::{get, post};
use axum::{middleware, Router};

use crate::app_state::AppState;
use crate::http;
use crate::services::{admin, booking, catalog};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/vehicles", get(catalog::list_vehicles))
        .route("/vehicles/:id", get(catalog::vehicle_detail))
        .route("/api/booking", post(booking::create_booking))
        .route("/api/booking/:id", get(booking::booking_detail))
        .route("/api/admin/users", get(admin::list_users))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            http::require_access,
        ))
        .with_state(state)
}
