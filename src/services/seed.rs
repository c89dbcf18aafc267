use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::{
    api::AppState,
    error::{AppError, AppResult},
    models::{Analysis, DetectedItem, Metrics, RecipeIdea, VideoRecipe, VisionData},
    services::{generators::SAMPLE_VIDEO_URLS, pipeline::GenerationPipeline},
};

struct StarterFridge {
    items: &'static [(&'static str, f32)],
    tags: &'static [&'static str],
    idea: (&'static str, &'static str),
    metrics: Metrics,
}

const STARTER_FRIDGES: [StarterFridge; 4] = [
    StarterFridge {
        items: &[("pasta", 0.95), ("tomato", 0.9), ("basil", 0.88), ("garlic", 0.91)],
        tags: &["dinner", "italian", "quick-meal"],
        idea: (
            "Speedy Tomato Basil Pasta",
            "A classic Italian dish ready in under 20 minutes. So simple, so good.",
        ),
        metrics: Metrics { plays: 3120, likes: 845 },
    },
    StarterFridge {
        items: &[("avocado", 0.98), ("sourdough bread", 0.92), ("egg", 0.99)],
        tags: &["breakfast", "healthy", "brunch"],
        idea: (
            "Perfect Avocado Toast",
            "Creamy avocado, crunchy toast, and a perfectly runny egg. Name a better trio.",
        ),
        metrics: Metrics { plays: 4210, likes: 1020 },
    },
    StarterFridge {
        items: &[("chicken breast", 0.96), ("broccoli", 0.93), ("soy sauce", 0.85)],
        tags: &["dinner", "healthy", "meal-prep", "asian-inspired"],
        idea: (
            "Easy Chicken & Broccoli Stir-fry",
            "Your go-to meal prep for a healthy and satisfying week.",
        ),
        metrics: Metrics { plays: 1875, likes: 402 },
    },
    StarterFridge {
        items: &[("thick bread", 0.9), ("cinnamon", 0.8), ("egg", 0.95), ("milk", 0.92)],
        tags: &["breakfast", "dessert", "sweet", "quick-meal"],
        idea: (
            "Cinnamon French Toast Bites",
            "A fun twist on a classic! Perfect for sharing and dipping.",
        ),
        metrics: Metrics { plays: 2640, likes: 733 },
    },
];

impl StarterFridge {
    fn analysis(&self) -> Analysis {
        Analysis {
            vision_data: VisionData {
                items: self
                    .items
                    .iter()
                    .map(|(name, confidence)| DetectedItem {
                        name: name.to_string(),
                        confidence: *confidence,
                    })
                    .collect(),
                tags: self.tags.iter().map(|t| t.to_string()).collect(),
            },
            recipe_ideas: vec![RecipeIdea {
                title: self.idea.0.to_string(),
                description: self.idea.1.to_string(),
            }],
        }
    }
}

/// The predefined fridge analyses the starter feed is built from
pub fn starter_analyses() -> Vec<Analysis> {
    STARTER_FRIDGES.iter().map(StarterFridge::analysis).collect()
}

async fn generate_starter_reel(
    pipeline: Arc<GenerationPipeline>,
    analysis: Analysis,
    video_url: &'static str,
    metrics: Metrics,
) -> AppResult<VideoRecipe> {
    let idea = analysis
        .recipe_ideas
        .first()
        .ok_or_else(|| AppError::InvalidInput("No recipe ideas provided for initial generation".to_string()))?;

    let mut video = pipeline.generate_reel(&analysis.vision_data, idea).await?;
    video.video_url = video_url.to_string();
    video.metrics = metrics;
    Ok(video)
}

/// Runs every starter fridge through the pipeline concurrently
///
/// Reels come back in starter order. A fridge that fails is logged and
/// skipped rather than failing the whole feed.
pub async fn generate_initial_feed(pipeline: Arc<GenerationPipeline>) -> Vec<VideoRecipe> {
    tracing::info!(count = STARTER_FRIDGES.len(), "Generating initial feed");

    let tasks: Vec<_> = STARTER_FRIDGES
        .iter()
        .enumerate()
        .map(|(index, fridge)| {
            let pipeline = pipeline.clone();
            let analysis = fridge.analysis();
            let video_url = SAMPLE_VIDEO_URLS[index % SAMPLE_VIDEO_URLS.len()];
            let metrics = fridge.metrics;
            tokio::spawn(generate_starter_reel(pipeline, analysis, video_url, metrics))
        })
        .collect();

    let mut videos = Vec::with_capacity(tasks.len());
    let mut failures = 0usize;

    for task in tasks {
        match task.await {
            Ok(Ok(video)) => videos.push(video),
            Ok(Err(e)) => {
                tracing::error!(error = %e, "Starter reel generation failed");
                failures += 1;
            }
            Err(e) => {
                tracing::error!(error = %e, "Task join error");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        tracing::warn!(
            success_count = videos.len(),
            error_count = failures,
            "Partial initial feed generation failure"
        );
    }

    tracing::info!(count = videos.len(), "Initial feed generated");
    videos
}

/// Seeds the state's feed in the background, flagging it as initializing
/// until the starter reels are in
pub fn spawn_initial_feed(state: AppState) -> JoinHandle<()> {
    tokio::spawn(async move {
        state.inner.write().await.is_initializing = true;

        let videos = generate_initial_feed(state.pipeline.clone()).await;

        let mut inner = state.inner.write().await;
        inner.add_videos(videos);
        inner.is_initializing = false;
    })
}
