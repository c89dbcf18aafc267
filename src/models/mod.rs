pub mod favorites;
pub mod nullable;
pub mod recipe;
pub mod vision;

pub use favorites::{FavoriteSet, RECOMMENDATION_UNLOCK_THRESHOLD};
pub use recipe::{DraftStatus, Ingredient, Metrics, RecipeDraft, ShotPlanStep, VideoRecipe};
pub use vision::{Analysis, DetectedItem, RecipeIdea, VisionData};
