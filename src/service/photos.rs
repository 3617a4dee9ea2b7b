//! Photo service
//!
//! Image posts and the per-uploader contribution tally.

use std::sync::Arc;

use serde::Deserialize;

use crate::data::{ImagePost, ImagesDocument, PhotoStore};
use crate::error::AppError;

/// Leaderboard ordering
///
/// `Ascending` is the historical default: callers wanting "top
/// contributors first" ask for `descending` explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaderboardOrder {
    #[default]
    Ascending,
    Descending,
}

/// Photo service
pub struct PhotoService {
    store: Arc<dyn PhotoStore>,
}

impl PhotoService {
    /// Create new photo service
    pub fn new(store: Arc<dyn PhotoStore>) -> Self {
        Self { store }
    }

    /// The full images document, as stored.
    pub async fn images(&self) -> Result<ImagesDocument, AppError> {
        Ok(self.store.load_images().await?)
    }

    /// Per-uploader post counts as `[user, count]` pairs.
    ///
    /// Pairs are sorted by count; the sort is stable, so users with equal
    /// counts stay in order of first appearance in the images collection.
    pub async fn leaderboard(
        &self,
        order: LeaderboardOrder,
    ) -> Result<Vec<(String, u64)>, AppError> {
        let document = self.store.load_images().await?;

        // Tally in first-appearance order; the collection is small enough
        // that a linear scan per image beats carrying a map plus an
        // ordering vector.
        let mut tallies: Vec<(String, u64)> = Vec::new();
        for image in &document.images {
            match tallies.iter_mut().find(|(user, _)| *user == image.user) {
                Some((_, count)) => *count += 1,
                None => tallies.push((image.user.clone(), 1)),
            }
        }

        match order {
            LeaderboardOrder::Ascending => tallies.sort_by(|a, b| a.1.cmp(&b.1)),
            LeaderboardOrder::Descending => tallies.sort_by(|a, b| b.1.cmp(&a.1)),
        }

        Ok(tallies)
    }

    /// Append a new image post and rewrite the collection.
    pub async fn upload(
        &self,
        source: String,
        user: String,
        caption: String,
    ) -> Result<(), AppError> {
        let mut document = self.store.load_images().await?;
        tracing::info!(source = %source, user = %user, "Uploading photo");

        document.images.push(ImagePost {
            source,
            user,
            caption,
        });
        self.store.save_images(&document).await?;
        Ok(())
    }
}
