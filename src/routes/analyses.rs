use axum::{extract::State, http::StatusCode, Extension, Json};

use crate::{
    api::AppState,
    error::AppResult,
    middleware::request_id::RequestId,
    models::{Analysis, VideoRecipe},
};

/// Turns an ingredient analysis into reels and puts them at the top of the feed
pub async fn create(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(analysis): Json<Analysis>,
) -> AppResult<(StatusCode, Json<Vec<VideoRecipe>>)> {
    tracing::info!(
        request_id = %request_id,
        item_count = analysis.vision_data.items.len(),
        idea_count = analysis.recipe_ideas.len(),
        "Processing analysis"
    );

    let videos = state.pipeline.generate_reels(&analysis).await?;
    state.inner.write().await.add_videos(videos.clone());

    tracing::info!(
        request_id = %request_id,
        count = videos.len(),
        "Analysis reels added to feed"
    );

    Ok((StatusCode::CREATED, Json(videos)))
}
