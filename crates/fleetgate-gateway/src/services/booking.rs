//! Booking API (token-protected, any role).

use axum::extract::Path;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
pub struct BookingRequest {
    pub vehicle_id: u64,
    pub from: String,
    pub until: String,
}

pub async fn create_booking(Json(req): Json<BookingRequest>) -> Json<Value> {
    tracing::info!(vehicle_id = req.vehicle_id, "booking requested");
    Json(json!({
        "status": "pending",
        "vehicle_id": req.vehicle_id,
        "from": req.from,
        "until": req.until
    }))
}

pub async fn booking_detail(Path(id): Path<u64>) -> Json<Value> {
    Json(json!({
        "id": id,
        "status": "confirmed"
    }))
}
