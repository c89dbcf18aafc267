use serde::{Deserialize, Serialize};

/// An ingredient detected in a fridge or pantry photo
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetectedItem {
    pub name: String,
    /// Detector confidence in [0, 1]
    #[serde(default)]
    pub confidence: f32,
}

/// What the vision model saw: ingredients plus broad recipe categories
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VisionData {
    #[serde(default, deserialize_with = "crate::models::nullable::empty_if_null")]
    pub items: Vec<DetectedItem>,
    #[serde(default, deserialize_with = "crate::models::nullable::empty_if_null")]
    pub tags: Vec<String>,
}

impl VisionData {
    pub fn item_names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.name.as_str())
    }
}

/// A one-line recipe suggestion to be fleshed out into a draft
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeIdea {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Result of analysing one set of photos
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Analysis {
    #[serde(default)]
    pub vision_data: VisionData,
    #[serde(default, deserialize_with = "crate::models::nullable::empty_if_null")]
    pub recipe_ideas: Vec<RecipeIdea>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_with_missing_lists_is_empty() {
        let analysis: Analysis = serde_json::from_str("{}").unwrap();
        assert!(analysis.vision_data.items.is_empty());
        assert!(analysis.vision_data.tags.is_empty());
        assert!(analysis.recipe_ideas.is_empty());
    }

    #[test]
    fn test_item_names() {
        let vision = VisionData {
            items: vec![
                DetectedItem { name: "egg".to_string(), confidence: 0.99 },
                DetectedItem { name: "avocado".to_string(), confidence: 0.98 },
            ],
            tags: vec![],
        };
        assert_eq!(vision.item_names().collect::<Vec<_>>(), vec!["egg", "avocado"]);
    }
}
