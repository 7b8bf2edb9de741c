use axum::Json;
use serde_json::{Value, json};

pub async fn welcome() -> Json<Value> {
    Json(json!({ "message": "Welcome to SerenityBot API" }))
}

pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
