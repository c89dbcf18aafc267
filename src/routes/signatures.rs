use axum::Json;
use serde::{Deserialize, Serialize};

use crate::services::signature::{make_signature, Signature};

#[derive(Debug, Deserialize)]
pub struct SignatureRequest {
    #[serde(default, deserialize_with = "crate::models::nullable::empty_if_null")]
    pub items: Vec<String>,
    #[serde(default, deserialize_with = "crate::models::nullable::empty_if_null")]
    pub tags: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SignatureResponse {
    pub signature: Signature,
    /// SHA-256 of `signature`, for consumers that need fixed-length keys
    pub digest: String,
}

/// Computes the signature of an ingredient + tag set
pub async fn create(Json(request): Json<SignatureRequest>) -> Json<SignatureResponse> {
    let signature = make_signature(&request.items, &request.tags);
    let digest = signature.digest();
    Json(SignatureResponse { signature, digest })
}
