//! Pluggable recipe and video generation backends
//!
//! Generation is split into two stages with one trait each: fleshing a recipe
//! idea out into a [`RecipeDraft`], then rendering the draft into a reel.
//! Generative model clients plug in behind these traits; the shipped
//! implementations are deterministic stand-ins.

use thiserror::Error;

use crate::{
    models::{RecipeDraft, RecipeIdea, VideoRecipe, VisionData},
    services::signature::Signature,
};

pub mod stock_footage;
pub mod template;

pub use stock_footage::{StockFootageRenderer, SAMPLE_VIDEO_URLS};
pub use template::DraftTemplateGenerator;

/// Errors raised by generation backends
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Recipe generation failed: {0}")]
    Recipe(String),
    #[error("Video generation failed: {0}")]
    Video(String),
}

/// Turns a recipe idea plus detected ingredients into a full draft
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecipeGenerator: Send + Sync {
    async fn generate_recipe(
        &self,
        signature: &Signature,
        vision_data: &VisionData,
        idea: &RecipeIdea,
    ) -> Result<RecipeDraft, GenerationError>;

    /// Generator name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Renders a draft into a playable reel
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait VideoRenderer: Send + Sync {
    async fn render(&self, draft: &RecipeDraft) -> Result<VideoRecipe, GenerationError>;

    /// Renderer name for logging and debugging
    fn name(&self) -> &'static str;
}
