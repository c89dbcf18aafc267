use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

pub mod analyses;
pub mod favorites;
pub mod recommendations;
pub mod signatures;
pub mod videos;

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
