use std::time::Duration;

use tracing::instrument;
use uuid::Uuid;

use super::{GenerationError, RecipeGenerator};
use crate::{
    models::{DraftStatus, Ingredient, RecipeDraft, RecipeIdea, ShotPlanStep, VisionData},
    services::signature::Signature,
};

const TEMPLATE_STEPS: [&str; 5] = [
    "Preheat a lightly oiled griddle or frying pan over medium-high heat.",
    "Whisk the egg and milk together in a shallow dish.",
    "Dip each slice of bread into the egg mixture, ensuring both sides are coated but not soggy.",
    "Place the bread on the hot griddle and cook for 2-3 minutes per side, until golden brown.",
    "Serve immediately with your favorite toppings like syrup, fruit, or powdered sugar.",
];

const TEMPLATE_SHOTS: [(&str, u32); 4] = [
    ("Close-up shot of eggs and milk being whisked.", 4),
    ("Top-down view of bread soaking in the mixture.", 3),
    ("Sizzling shot of the toast frying in the pan.", 5),
    ("Final \"beauty shot\" of the plated dish with syrup being poured.", 4),
];

/// Drafts recipes from a fixed step list and storyboard
///
/// Title, description, ingredients and tags come from the request; steps and
/// shot plan are the template's. `delay` stands in for model latency.
#[derive(Debug, Clone, Default)]
pub struct DraftTemplateGenerator {
    delay: Duration,
}

impl DraftTemplateGenerator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait::async_trait]
impl RecipeGenerator for DraftTemplateGenerator {
    #[instrument(skip(self, vision_data), fields(title = %idea.title))]
    async fn generate_recipe(
        &self,
        signature: &Signature,
        vision_data: &VisionData,
        idea: &RecipeIdea,
    ) -> Result<RecipeDraft, GenerationError> {
        if idea.title.trim().is_empty() {
            return Err(GenerationError::Recipe("recipe idea has no title".to_string()));
        }

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let draft = RecipeDraft {
            id: format!("draft_{}", Uuid::new_v4()),
            signature: signature.clone(),
            title: idea.title.clone(),
            description: idea.description.clone(),
            ingredients: vision_data.item_names().map(Ingredient::new).collect(),
            steps: TEMPLATE_STEPS.iter().map(|s| s.to_string()).collect(),
            tags: vision_data.tags.clone(),
            shot_plan: TEMPLATE_SHOTS
                .iter()
                .zip(1..)
                .map(|((action, duration_sec), step)| ShotPlanStep {
                    step,
                    action: action.to_string(),
                    duration_sec: *duration_sec,
                })
                .collect(),
            status: DraftStatus::Ready,
        };

        tracing::info!(draft_id = %draft.id, "Recipe draft generated");
        Ok(draft)
    }

    fn name(&self) -> &'static str {
        "template"
    }
}
