use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::models::{FavoriteSet, VideoRecipe};
use crate::services::pipeline::GenerationPipeline;
use crate::services::recommendations::get_recommendations;

/// Default draft cache TTL for in-memory state, in seconds
const IN_MEMORY_CACHE_TTL: u64 = 3600;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub inner: Arc<RwLock<AppStateInner>>,
    pub pipeline: Arc<GenerationPipeline>,
}

/// The user's session: feed, favorites and seeding status
#[derive(Debug, Default)]
pub struct AppStateInner {
    /// Feed catalog, newest first
    pub videos: Vec<VideoRecipe>,
    pub favorites: FavoriteSet,
    pub is_initializing: bool,
}

impl AppStateInner {
    /// Prepends reels to the feed, keeping their relative order.
    /// A reel whose id is already in the feed replaces the old entry.
    pub fn add_videos(&mut self, videos: Vec<VideoRecipe>) {
        let mut incoming: Vec<VideoRecipe> = Vec::with_capacity(videos.len());
        for mut video in videos {
            video.ensure_signature();
            incoming.retain(|v| v.id != video.id);
            incoming.push(video);
        }

        self.videos.retain(|existing| !incoming.iter().any(|v| v.id == existing.id));
        incoming.append(&mut self.videos);
        self.videos = incoming;
    }

    pub fn find_video(&self, video_id: &str) -> Option<&VideoRecipe> {
        self.videos.iter().find(|v| v.id == video_id)
    }

    /// Recommendations for the current favorites, or `None` while locked
    pub fn recommendations(&self) -> Option<Vec<VideoRecipe>> {
        if !self.favorites.unlocks_recommendations() {
            return None;
        }
        Some(get_recommendations(self.favorites.as_slice(), &self.videos))
    }
}

impl AppState {
    /// Creates an empty state around a generation pipeline
    pub fn new(pipeline: Arc<GenerationPipeline>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(AppStateInner::default())),
            pipeline,
        }
    }

    /// Empty state with an instant, memory-cached pipeline
    pub fn in_memory() -> Self {
        Self::new(Arc::new(GenerationPipeline::in_memory(
            Duration::ZERO,
            IN_MEMORY_CACHE_TTL,
        )))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::in_memory()
    }
}
