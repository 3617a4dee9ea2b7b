//! Flat JSON file store
//!
//! Each collection is one JSON document on disk, re-read in full on every
//! load and rewritten in full on every save.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::models::{AccountsDocument, CommentsDocument, ImagesDocument};
use super::store::{PhotoStore, StoreError};
use crate::config::StoreConfig;
use crate::metrics::{STORE_READS_TOTAL, STORE_WRITES_TOTAL};

/// File-backed store over the three collection documents.
pub struct JsonFileStore {
    accounts_path: PathBuf,
    images_path: PathBuf,
    comments_path: PathBuf,
}

impl JsonFileStore {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            accounts_path: config.accounts_path.clone(),
            images_path: config.images_path.clone(),
            comments_path: config.comments_path.clone(),
        }
    }

    /// Create any missing store file with an empty document.
    ///
    /// Called once at startup so a fresh deployment starts from empty
    /// collections instead of failing its first read.
    pub async fn ensure_files(&self) -> Result<(), StoreError> {
        Self::ensure_file(&self.accounts_path, &AccountsDocument::default()).await?;
        Self::ensure_file(&self.images_path, &ImagesDocument::default()).await?;
        Self::ensure_file(&self.comments_path, &CommentsDocument::default()).await?;
        Ok(())
    }

    async fn ensure_file<T: Serialize>(path: &Path, empty: &T) -> Result<(), StoreError> {
        if tokio::fs::try_exists(path).await? {
            return Ok(());
        }
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, serde_json::to_vec(empty)?).await?;
        tracing::info!(path = %path.display(), "Created empty store file");
        Ok(())
    }

    async fn read_document<T: DeserializeOwned>(
        path: &Path,
        collection: &str,
    ) -> Result<T, StoreError> {
        STORE_READS_TOTAL.with_label_values(&[collection]).inc();
        let bytes = tokio::fs::read(path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn write_document<T: Serialize>(
        path: &Path,
        collection: &str,
        document: &T,
    ) -> Result<(), StoreError> {
        STORE_WRITES_TOTAL.with_label_values(&[collection]).inc();
        let bytes = serde_json::to_vec(document)?;
        tokio::fs::write(path, bytes).await?;
        tracing::debug!(collection, path = %path.display(), "Rewrote store file");
        Ok(())
    }
}

#[async_trait]
impl PhotoStore for JsonFileStore {
    async fn load_accounts(&self) -> Result<AccountsDocument, StoreError> {
        Self::read_document(&self.accounts_path, "accounts").await
    }

    async fn save_accounts(&self, document: &AccountsDocument) -> Result<(), StoreError> {
        Self::write_document(&self.accounts_path, "accounts", document).await
    }

    async fn load_images(&self) -> Result<ImagesDocument, StoreError> {
        Self::read_document(&self.images_path, "images").await
    }

    async fn save_images(&self, document: &ImagesDocument) -> Result<(), StoreError> {
        Self::write_document(&self.images_path, "images", document).await
    }

    async fn load_comments(&self) -> Result<CommentsDocument, StoreError> {
        Self::read_document(&self.comments_path, "comments").await
    }

    async fn save_comments(&self, document: &CommentsDocument) -> Result<(), StoreError> {
        Self::write_document(&self.comments_path, "comments", document).await
    }
}
