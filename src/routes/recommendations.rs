use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};

use crate::{
    api::AppState,
    middleware::request_id::RequestId,
    models::VideoRecipe,
    services::recommendations::get_recommendations,
};

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    #[serde(default, deserialize_with = "crate::models::nullable::empty_if_null")]
    pub favorite_ids: Vec<String>,
    #[serde(default, deserialize_with = "crate::models::nullable::empty_if_null")]
    pub items: Vec<VideoRecipe>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub unlocked: bool,
    /// Favorites still needed before recommendations unlock
    pub remaining: usize,
    pub items: Vec<VideoRecipe>,
}

/// Ranks a caller-supplied catalog against caller-supplied favorites
pub async fn score(
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<ScoreRequest>,
) -> Json<Vec<VideoRecipe>> {
    let recommendations = get_recommendations(&request.favorite_ids, &request.items);

    tracing::info!(
        request_id = %request_id,
        favorites = request.favorite_ids.len(),
        catalog_size = request.items.len(),
        recommended = recommendations.len(),
        "Scored recommendations"
    );

    Json(recommendations)
}

/// Recommendations for the session's favorites over the session's feed
pub async fn for_session(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Json<RecommendationsResponse> {
    let inner = state.inner.read().await;
    let remaining = inner.favorites.remaining_to_unlock();

    let response = match inner.recommendations() {
        Some(items) => RecommendationsResponse {
            unlocked: true,
            remaining,
            items,
        },
        None => {
            tracing::debug!(request_id = %request_id, remaining, "Recommendations still locked");
            RecommendationsResponse {
                unlocked: false,
                remaining,
                items: Vec::new(),
            }
        }
    };

    Json(response)
}
