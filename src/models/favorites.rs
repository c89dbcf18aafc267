use serde::{Deserialize, Serialize};

/// Number of favorites needed before recommendations are shown
pub const RECOMMENDATION_UNLOCK_THRESHOLD: usize = 3;

/// The reels a user has favorited, in the order they were added
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct FavoriteSet {
    ids: Vec<String>,
}

impl FavoriteSet {
    /// Creates an empty favorite set
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the reel if absent, removes it if present.
    /// Returns whether the reel is favorited afterwards.
    pub fn toggle(&mut self, video_id: &str) -> bool {
        if let Some(pos) = self.ids.iter().position(|id| id == video_id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(video_id.to_string());
            true
        }
    }

    pub fn contains(&self, video_id: &str) -> bool {
        self.ids.iter().any(|id| id == video_id)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn unlocks_recommendations(&self) -> bool {
        self.ids.len() >= RECOMMENDATION_UNLOCK_THRESHOLD
    }

    /// How many more favorites are needed to unlock recommendations
    pub fn remaining_to_unlock(&self) -> usize {
        RECOMMENDATION_UNLOCK_THRESHOLD.saturating_sub(self.ids.len())
    }
}

impl<S: Into<String>> FromIterator<S> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = FavoriteSet::new();
        for id in iter {
            let id = id.into();
            if !set.contains(&id) {
                set.ids.push(id);
            }
        }
        set
    }
}
