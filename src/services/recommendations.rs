use std::cmp::Ordering;
use std::collections::HashSet;

use crate::models::VideoRecipe;

/// Share of the score coming from ingredient overlap
pub const INGREDIENT_WEIGHT: f64 = 0.7;
/// Share of the score coming from tag overlap
pub const TAG_WEIGHT: f64 = 0.3;
/// Upper bound on returned recommendations
pub const MAX_RECOMMENDATIONS: usize = 10;

/// A candidate reel paired with its score in [0, 1]
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredItem<'a> {
    pub item: &'a VideoRecipe,
    pub score: f64,
}

/// Ranks a catalog against the attributes of the user's favorites
///
/// The favorite profile is the union of lowercased ingredient names and
/// lowercased tags of every favorited reel found in the catalog. Favorite ids
/// missing from the catalog contribute nothing but are still excluded.
pub struct Recommender<'a> {
    catalog: &'a [VideoRecipe],
    favorite_ids: HashSet<&'a str>,
    favorite_ingredients: HashSet<String>,
    favorite_tags: HashSet<String>,
}

impl<'a> Recommender<'a> {
    pub fn new(favorite_ids: &'a [String], catalog: &'a [VideoRecipe]) -> Self {
        let favorite_ids: HashSet<&str> = favorite_ids.iter().map(String::as_str).collect();

        let mut favorite_ingredients = HashSet::new();
        let mut favorite_tags = HashSet::new();
        for video in catalog.iter().filter(|v| favorite_ids.contains(v.id.as_str())) {
            favorite_ingredients.extend(video.ingredient_names().map(str::to_lowercase));
            favorite_tags.extend(video.tag_names().map(str::to_lowercase));
        }

        Self {
            catalog,
            favorite_ids,
            favorite_ingredients,
            favorite_tags,
        }
    }

    /// Weighted overlap of a candidate with the favorite profile
    pub fn score(&self, candidate: &VideoRecipe) -> f64 {
        let ingredient_score = overlap_ratio(candidate.ingredient_names(), &self.favorite_ingredients);
        let tag_score = overlap_ratio(candidate.tag_names(), &self.favorite_tags);
        ingredient_score * INGREDIENT_WEIGHT + tag_score * TAG_WEIGHT
    }

    /// Non-favorited reels with a positive score, best first, capped at
    /// [`MAX_RECOMMENDATIONS`]. Equal scores keep catalog order.
    pub fn ranked(&self) -> Vec<ScoredItem<'a>> {
        if self.favorite_ids.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<ScoredItem<'a>> = self
            .catalog
            .iter()
            .filter(|v| !self.favorite_ids.contains(v.id.as_str()))
            .map(|item| ScoredItem {
                item,
                score: self.score(item),
            })
            .filter(|s| s.score > 0.0)
            .collect();

        // sort_by is stable
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        scored.truncate(MAX_RECOMMENDATIONS);

        tracing::debug!(
            catalog_size = self.catalog.len(),
            favorites = self.favorite_ids.len(),
            recommended = scored.len(),
            "Ranked recommendations"
        );

        scored
    }
}

/// Fraction of the distinct lowercased values found in `profile`, or 0 when
/// there are no values
fn overlap_ratio<'v>(values: impl Iterator<Item = &'v str>, profile: &HashSet<String>) -> f64 {
    let distinct: HashSet<String> = values.map(str::to_lowercase).collect();
    if distinct.is_empty() {
        return 0.0;
    }
    let matches = distinct.iter().filter(|v| profile.contains(*v)).count();
    matches as f64 / distinct.len() as f64
}

/// Recommends reels similar to the user's favorites
///
/// Returns at most [`MAX_RECOMMENDATIONS`] reels from `all_items`, ordered by
/// descending score. Nothing is recommended without favorites, and favorited
/// reels are never recommended back.
pub fn get_recommendations(favorite_ids: &[String], all_items: &[VideoRecipe]) -> Vec<VideoRecipe> {
    Recommender::new(favorite_ids, all_items)
        .ranked()
        .into_iter()
        .map(|scored| scored.item.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn result_ids(videos: &[VideoRecipe]) -> Vec<&str> {
        videos.iter().map(|v| v.id.as_str()).collect()
    }

    fn breakfast_catalog() -> Vec<VideoRecipe> {
        vec![
            VideoRecipe::new("fav", ["egg", "milk"], ["breakfast"]),
            VideoRecipe::new("toast", ["egg", "bread"], ["breakfast"]),
            VideoRecipe::new("stir_fry", ["chicken breast", "broccoli"], ["dinner"]),
            VideoRecipe::new("pancakes", ["flour", "milk", "egg", "sugar"], ["dessert"]),
        ]
    }

    #[test]
    fn test_no_favorites_means_no_recommendations() {
        let catalog = breakfast_catalog();
        assert!(get_recommendations(&[], &catalog).is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        assert!(get_recommendations(&ids(&["fav"]), &[]).is_empty());
    }

    #[test]
    fn test_weighting_example() {
        let catalog = breakfast_catalog();
        let favorites = ids(&["fav"]);
        let recommender = Recommender::new(&favorites, &catalog);
        let score = recommender.score(&catalog[1]);
        assert!((score - 0.65).abs() < 1e-9, "unexpected score {score}");
    }

    #[test]
    fn test_self_exclusion() {
        let catalog = breakfast_catalog();
        let result = get_recommendations(&ids(&["fav", "toast"]), &catalog);
        assert!(!result_ids(&result).contains(&"fav"));
        assert!(!result_ids(&result).contains(&"toast"));
    }

    #[test]
    fn test_zero_overlap_excluded() {
        let catalog = breakfast_catalog();
        let result = get_recommendations(&ids(&["fav"]), &catalog);
        assert_eq!(result_ids(&result), vec!["toast", "pancakes"]);
    }

    #[test]
    fn test_ingredient_and_tag_matching_is_case_insensitive() {
        let catalog = vec![
            VideoRecipe::new("fav", ["Egg"], ["BREAKFAST"]),
            VideoRecipe::new("other", ["EGG"], ["Breakfast"]),
        ];
        let favorites = ids(&["fav"]);
        let recommender = Recommender::new(&favorites, &catalog);
        assert!((recommender.score(&catalog[1]) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_duplicate_attributes_count_once() {
        let catalog = vec![
            VideoRecipe::new("fav", ["egg"], NONE),
            VideoRecipe::new("other", ["egg", "Egg", "bread"], NONE),
        ];
        let favorites = ids(&["fav"]);
        let recommender = Recommender::new(&favorites, &catalog);
        // distinct {egg, bread}: 1 of 2
        assert!((recommender.score(&catalog[1]) - 0.35).abs() < 1e-9);
    }

    #[test]
    fn test_candidate_without_attributes_scores_zero() {
        let catalog = vec![
            VideoRecipe::new("fav", ["egg"], ["breakfast"]),
            VideoRecipe::new("bare", NONE, NONE),
        ];
        let favorites = ids(&["fav"]);
        let recommender = Recommender::new(&favorites, &catalog);
        assert_eq!(recommender.score(&catalog[1]), 0.0);
        assert!(recommender.ranked().is_empty());
    }

    #[test]
    fn test_tag_only_overlap_is_recommended() {
        let catalog = vec![
            VideoRecipe::new("fav", ["egg"], ["breakfast"]),
            VideoRecipe::new("granola", ["oats"], ["breakfast", "healthy"]),
        ];
        let favorites = ids(&["fav"]);
        let ranked = Recommender::new(&favorites, &catalog).ranked();
        assert_eq!(ranked.len(), 1);
        assert!((ranked[0].score - 0.15).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_favorite_ids_contribute_nothing() {
        let catalog = breakfast_catalog();
        assert!(get_recommendations(&ids(&["vid_gone"]), &catalog).is_empty());
    }

    #[test]
    fn test_top_ten_cap_sorted_descending() {
        // Favorite covers ingredients i0..i14; candidate k matches k+1 of 15
        let all: Vec<String> = (0..15).map(|i| format!("i{i}")).collect();
        let mut catalog = vec![VideoRecipe::new("fav", all.clone(), NONE)];
        for k in 0..15 {
            let mut ingredients: Vec<String> = all[..=k].to_vec();
            ingredients.extend((k + 1..15).map(|j| format!("miss{j}")));
            catalog.push(VideoRecipe::new(format!("c{k}"), ingredients, NONE));
        }

        let favorites = ids(&["fav"]);
        let ranked = Recommender::new(&favorites, &catalog).ranked();
        assert_eq!(ranked.len(), 10);
        assert!(ranked.windows(2).all(|w| w[0].score > w[1].score));
        assert_eq!(ranked[0].item.id, "c14");
        assert_eq!(ranked[9].item.id, "c5");
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = vec![
            VideoRecipe::new("second", ["egg"], NONE),
            VideoRecipe::new("fav", ["egg"], NONE),
            VideoRecipe::new("first", ["egg"], NONE),
            VideoRecipe::new("third", ["egg"], NONE),
        ];
        let result = get_recommendations(&ids(&["fav"]), &catalog);
        assert_eq!(result_ids(&result), vec!["second", "first", "third"]);
    }

    #[test]
    fn test_profile_is_union_of_favorites() {
        let catalog = vec![
            VideoRecipe::new("fav_a", ["egg"], ["breakfast"]),
            VideoRecipe::new("fav_b", ["pasta"], ["dinner"]),
            VideoRecipe::new("carbonara", ["egg", "pasta"], ["dinner"]),
        ];
        let favorites = ids(&["fav_a", "fav_b"]);
        let recommender = Recommender::new(&favorites, &catalog);
        assert!((recommender.score(&catalog[2]) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let catalog = breakfast_catalog();
        let snapshot = catalog.clone();
        let favorites = ids(&["fav"]);
        let _ = get_recommendations(&favorites, &catalog);
        assert_eq!(catalog, snapshot);
        assert_eq!(favorites, ids(&["fav"]));
    }
}
