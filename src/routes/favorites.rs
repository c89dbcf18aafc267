use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::{
    api::AppState,
    error::{AppError, AppResult},
    models::FavoriteSet,
};

#[derive(Debug, Serialize)]
pub struct FavoritesResponse {
    pub favorites: FavoriteSet,
    pub unlocked: bool,
    pub remaining: usize,
}

impl From<&FavoriteSet> for FavoritesResponse {
    fn from(favorites: &FavoriteSet) -> Self {
        Self {
            favorites: favorites.clone(),
            unlocked: favorites.unlocks_recommendations(),
            remaining: favorites.remaining_to_unlock(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub video_id: String,
    pub favorited: bool,
    #[serde(flatten)]
    pub state: FavoritesResponse,
}

/// Get the favorite set and unlock status
pub async fn list(State(state): State<AppState>) -> Json<FavoritesResponse> {
    let inner = state.inner.read().await;
    Json(FavoritesResponse::from(&inner.favorites))
}

/// Favorite or unfavorite a reel in the feed
pub async fn toggle(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> AppResult<Json<ToggleResponse>> {
    let mut inner = state.inner.write().await;

    if !inner.favorites.contains(&video_id) && inner.find_video(&video_id).is_none() {
        return Err(AppError::NotFound(format!("Video {}", video_id)));
    }

    let favorited = inner.favorites.toggle(&video_id);
    tracing::info!(video_id = %video_id, favorited, total = inner.favorites.len(), "Favorite toggled");

    let summary = FavoritesResponse::from(&inner.favorites);
    Ok(Json(ToggleResponse {
        video_id,
        favorited,
        state: summary,
    }))
}
