use std::sync::Arc;
use std::time::Duration;

use crate::{
    cache::{CacheKey, MemoryCache, RecipeCache},
    cached,
    error::{AppError, AppResult},
    models::{Analysis, RecipeDraft, RecipeIdea, VideoRecipe, VisionData},
    services::{
        generators::{DraftTemplateGenerator, RecipeGenerator, StockFootageRenderer, VideoRenderer},
        signature::{make_signature, Signature},
    },
};

/// Vision data → signature → recipe draft → reel
///
/// Drafts are cached per signature and recipe title, so re-analysing the same
/// ingredients (in any order or casing) reuses the earlier draft.
pub struct GenerationPipeline {
    generator: Arc<dyn RecipeGenerator>,
    renderer: Arc<dyn VideoRenderer>,
    cache: Arc<dyn RecipeCache>,
    cache_ttl: u64,
}

impl GenerationPipeline {
    pub fn new(
        generator: Arc<dyn RecipeGenerator>,
        renderer: Arc<dyn VideoRenderer>,
        cache: Arc<dyn RecipeCache>,
        cache_ttl: u64,
    ) -> Self {
        Self {
            generator,
            renderer,
            cache,
            cache_ttl,
        }
    }

    /// Template generator, stock footage and a memory cache
    pub fn in_memory(generation_delay: Duration, cache_ttl: u64) -> Self {
        Self::new(
            Arc::new(DraftTemplateGenerator::new(generation_delay)),
            Arc::new(StockFootageRenderer::default()),
            Arc::new(MemoryCache::new()),
            cache_ttl,
        )
    }

    /// Returns the cached draft for this profile and idea, generating it on a miss
    pub async fn draft_for(
        &self,
        signature: &Signature,
        vision_data: &VisionData,
        idea: &RecipeIdea,
    ) -> AppResult<RecipeDraft> {
        let key = CacheKey::RecipeDraft {
            signature: signature.clone(),
            title: idea.title.clone(),
        };

        cached!(
            self.cache,
            key,
            self.cache_ttl,
            self.generator.generate_recipe(signature, vision_data, idea)
        )
    }

    /// Generates one reel for one recipe idea
    pub async fn generate_reel(&self, vision_data: &VisionData, idea: &RecipeIdea) -> AppResult<VideoRecipe> {
        let signature = make_signature(vision_data.item_names(), &vision_data.tags);
        tracing::info!(
            signature = %signature,
            title = %idea.title,
            generator = self.generator.name(),
            renderer = self.renderer.name(),
            "Generating reel"
        );

        let draft = self.draft_for(&signature, vision_data, idea).await?;
        let video = self.renderer.render(&draft).await?;
        Ok(video)
    }

    /// Generates one reel per recipe idea, in idea order
    pub async fn generate_reels(&self, analysis: &Analysis) -> AppResult<Vec<VideoRecipe>> {
        if analysis.recipe_ideas.is_empty() {
            return Err(AppError::InvalidInput(
                "No recipe ideas provided for generation".to_string(),
            ));
        }

        let mut videos = Vec::with_capacity(analysis.recipe_ideas.len());
        for idea in &analysis.recipe_ideas {
            videos.push(self.generate_reel(&analysis.vision_data, idea).await?);
        }

        tracing::info!(count = videos.len(), "Reels generated");
        Ok(videos)
    }
}
