//! Admin area (token-protected, `admin` role only).

use axum::Json;
use serde_json::{json, Value};

pub async fn list_users() -> Json<Value> {
    Json(json!({
        "users": [
            { "id": "u-1", "role": "admin" },
            { "id": "u-42", "role": "user" }
        ]
    }))
}
