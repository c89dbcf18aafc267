use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::services::signature::{make_signature, Signature};

/// A single ingredient line on a recipe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ingredient {
    /// Ingredient name (e.g., "egg", "sourdough bread")
    pub name: String,
    /// Free-form quantity (e.g., "2 slices"), when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
}

impl Ingredient {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: None,
        }
    }
}

/// One shot in the storyboard a reel is rendered from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShotPlanStep {
    pub step: u32,
    pub action: String,
    pub duration_sec: u32,
}

/// Lifecycle of a recipe draft
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DraftStatus {
    Pending,
    Ready,
    Failed,
}

/// A fleshed-out recipe that a reel is rendered from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeDraft {
    pub id: String,
    pub signature: Signature,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<String>,
    pub tags: Vec<String>,
    pub shot_plan: Vec<ShotPlanStep>,
    pub status: DraftStatus,
}

impl RecipeDraft {
    /// Total runtime of the storyboard in seconds
    pub fn planned_duration_sec(&self) -> u32 {
        self.shot_plan.iter().map(|shot| shot.duration_sec).sum()
    }
}

/// Engagement counters shown on a reel
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Metrics {
    pub plays: u64,
    pub likes: u64,
}

/// A recipe reel in the feed
///
/// This is the item the recommender ranks. Only `id` is required on input;
/// every list defaults to empty so partially populated reels from clients
/// still score (as zero) instead of being rejected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoRecipe {
    pub id: String,
    #[serde(default)]
    pub signature: Option<Signature>,
    #[serde(default)]
    pub draft_id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "crate::models::nullable::empty_if_null")]
    pub ingredients: Vec<Ingredient>,
    #[serde(default, deserialize_with = "crate::models::nullable::empty_if_null")]
    pub steps: Vec<String>,
    #[serde(default, deserialize_with = "crate::models::nullable::empty_if_null")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub video_url: String,
    #[serde(default)]
    pub duration_sec: u32,
    #[serde(default)]
    pub metrics: Metrics,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl VideoRecipe {
    /// Builds a bare reel with only the attributes the recommender looks at
    pub fn new<I, T>(id: impl Into<String>, ingredients: I, tags: T) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        Self {
            id: id.into(),
            signature: None,
            draft_id: None,
            title: String::new(),
            description: String::new(),
            ingredients: ingredients
                .into_iter()
                .map(Ingredient::new)
                .collect(),
            steps: Vec::new(),
            tags: tags.into_iter().map(Into::into).collect(),
            video_url: String::new(),
            duration_sec: 0,
            metrics: Metrics::default(),
            created_at: Utc::now(),
        }
    }

    pub fn ingredient_names(&self) -> impl Iterator<Item = &str> {
        self.ingredients.iter().map(|i| i.name.as_str())
    }

    pub fn tag_names(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Derives the signature from ingredients and tags when the reel has none
    pub fn ensure_signature(&mut self) {
        if self.signature.is_none() {
            self.signature = Some(make_signature(self.ingredient_names(), self.tag_names()));
        }
    }
}
