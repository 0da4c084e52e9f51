use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

/// Liveness endpoint
///
/// Reports that the API process is up. Makes no data-access call, so it
/// stays green through database outages.
pub async fn get_status() -> Json<Value> {
    Json(json!({
        "status": "online",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// Reachability probe the overlay calls during setup
pub async fn test_api() -> Json<Value> {
    Json(json!({
        "message": "API is working",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
