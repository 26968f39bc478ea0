//! Public vehicle catalog (no gate involvement).

use axum::extract::Path;
use axum::Json;
use serde_json::{json, Value};

pub async fn list_vehicles() -> Json<Value> {
    Json(json!({
        "vehicles": [
            { "id": 42, "model": "Kona EV", "day_rate": 58.0 },
            { "id": 77, "model": "Transit L2", "day_rate": 91.5 }
        ]
    }))
}

pub async fn vehicle_detail(Path(id): Path<u64>) -> Json<Value> {
    Json(json!({
        "id": id,
        "model": "Kona EV",
        "day_rate": 58.0,
        "available": true
    }))
}
