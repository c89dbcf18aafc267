use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    api::AppState,
    error::{AppError, AppResult},
    models::VideoRecipe,
};

#[derive(Debug, Serialize)]
pub struct FeedResponse {
    /// Newest first
    pub videos: Vec<VideoRecipe>,
    /// True while the starter feed is still being generated
    pub initializing: bool,
}

/// One reel or a batch of reels
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum NewVideos {
    Many(Vec<VideoRecipe>),
    One(Box<VideoRecipe>),
}

impl NewVideos {
    fn into_vec(self) -> Vec<VideoRecipe> {
        match self {
            NewVideos::Many(videos) => videos,
            NewVideos::One(video) => vec![*video],
        }
    }
}

/// Get the feed
pub async fn list(State(state): State<AppState>) -> Json<FeedResponse> {
    let inner = state.inner.read().await;
    Json(FeedResponse {
        videos: inner.videos.clone(),
        initializing: inner.is_initializing,
    })
}

/// Get one reel by id
pub async fn get_one(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> AppResult<Json<VideoRecipe>> {
    let video = state.inner.read().await.find_video(&video_id).cloned();
    video
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Video {}", video_id)))
}

/// Add one or more reels to the top of the feed
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<NewVideos>,
) -> AppResult<(StatusCode, Json<Vec<VideoRecipe>>)> {
    let mut videos = request.into_vec();
    if videos.is_empty() {
        return Err(AppError::InvalidInput("No videos provided".to_string()));
    }

    for video in &mut videos {
        video.ensure_signature();
    }

    state.inner.write().await.add_videos(videos.clone());
    tracing::info!(count = videos.len(), "Videos added to feed");

    Ok((StatusCode::CREATED, Json(videos)))
}
