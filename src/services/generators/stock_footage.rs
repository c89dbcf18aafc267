use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::Utc;
use uuid::Uuid;

use super::{GenerationError, VideoRenderer};
use crate::models::{Metrics, RecipeDraft, VideoRecipe};

pub const SAMPLE_VIDEO_URLS: [&str; 4] = [
    "https://storage.googleapis.com/gtv-videos-bucket/sample/ForBiggerJoyrides.mp4",
    "https://storage.googleapis.com/gtv-videos-bucket/sample/ForBiggerEscapes.mp4",
    "https://storage.googleapis.com/gtv-videos-bucket/sample/ForBiggerBlazes.mp4",
    "https://storage.googleapis.com/gtv-videos-bucket/sample/ForBiggerFun.mp4",
];

/// Reel length when a draft has no storyboard
const DEFAULT_DURATION_SEC: u32 = 15;

/// "Renders" a draft by attaching the next clip from a fixed rotation
pub struct StockFootageRenderer {
    urls: Vec<String>,
    next: AtomicUsize,
}

impl StockFootageRenderer {
    pub fn new(urls: Vec<String>) -> Self {
        Self {
            urls,
            next: AtomicUsize::new(0),
        }
    }

    fn next_url(&self) -> Option<&str> {
        if self.urls.is_empty() {
            return None;
        }
        let idx = self.next.fetch_add(1, Ordering::Relaxed) % self.urls.len();
        Some(self.urls[idx].as_str())
    }
}

impl Default for StockFootageRenderer {
    fn default() -> Self {
        Self::new(SAMPLE_VIDEO_URLS.iter().map(|u| u.to_string()).collect())
    }
}

#[async_trait::async_trait]
impl VideoRenderer for StockFootageRenderer {
    async fn render(&self, draft: &RecipeDraft) -> Result<VideoRecipe, GenerationError> {
        let video_url = self
            .next_url()
            .ok_or_else(|| GenerationError::Video("no stock footage configured".to_string()))?
            .to_string();

        let duration_sec = match draft.planned_duration_sec() {
            0 => DEFAULT_DURATION_SEC,
            planned => planned,
        };

        let video = VideoRecipe {
            id: format!("vid_{}", Uuid::new_v4()),
            signature: Some(draft.signature.clone()),
            draft_id: Some(draft.id.clone()),
            title: draft.title.clone(),
            description: draft.description.clone(),
            ingredients: draft.ingredients.clone(),
            steps: draft.steps.clone(),
            tags: draft.tags.clone(),
            video_url,
            duration_sec,
            metrics: Metrics::default(),
            created_at: Utc::now(),
        };

        tracing::info!(video_id = %video.id, draft_id = %draft.id, "Reel rendered");
        Ok(video)
    }

    fn name(&self) -> &'static str {
        "stock-footage"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DraftStatus, Ingredient, ShotPlanStep};
    use crate::services::signature::make_signature;

    fn draft(shot_plan: Vec<ShotPlanStep>) -> RecipeDraft {
        RecipeDraft {
            id: "draft_1".to_string(),
            signature: make_signature(["egg", "bread"], ["breakfast"]),
            title: "Classic French Toast".to_string(),
            description: "Pantry staples.".to_string(),
            ingredients: vec![Ingredient::new("egg"), Ingredient::new("bread")],
            steps: vec!["Whisk.".to_string(), "Fry.".to_string()],
            tags: vec!["breakfast".to_string()],
            shot_plan,
            status: DraftStatus::Ready,
        }
    }

    #[tokio::test]
    async fn test_reel_copies_draft() {
        let renderer = StockFootageRenderer::default();
        let draft = draft(vec![ShotPlanStep {
            step: 1,
            action: "Whisk".to_string(),
            duration_sec: 7,
        }]);

        let video = renderer.render(&draft).await.unwrap();
        assert!(video.id.starts_with("vid_"));
        assert_eq!(video.draft_id.as_deref(), Some("draft_1"));
        assert_eq!(video.signature, Some(draft.signature.clone()));
        assert_eq!(video.ingredients, draft.ingredients);
        assert_eq!(video.tags, draft.tags);
        assert_eq!(video.duration_sec, 7);
        assert_eq!(video.video_url, SAMPLE_VIDEO_URLS[0]);
    }

    #[tokio::test]
    async fn test_urls_rotate() {
        let renderer = StockFootageRenderer::new(vec!["a.mp4".to_string(), "b.mp4".to_string()]);
        let draft = draft(vec![]);
        let mut urls = Vec::new();
        for _ in 0..3 {
            urls.push(renderer.render(&draft).await.unwrap().video_url);
        }
        assert_eq!(urls, vec!["a.mp4", "b.mp4", "a.mp4"]);
    }

    #[tokio::test]
    async fn test_default_duration_without_storyboard() {
        let renderer = StockFootageRenderer::default();
        let video = renderer.render(&draft(vec![])).await.unwrap();
        assert_eq!(video.duration_sec, DEFAULT_DURATION_SEC);
    }

    #[tokio::test]
    async fn test_no_urls_is_an_error() {
        let renderer = StockFootageRenderer::new(vec![]);
        let result = renderer.render(&draft(vec![])).await;
        assert!(matches!(result, Err(GenerationError::Video(_))));
    }
}
