//! Store contract
//!
//! Every collection is loaded and rewritten wholesale; there is no
//! partial update, no locking, and no cross-request coordination.
//! Two concurrent writers to the same collection can lose one update
//! (last writer wins on the snapshot each one held).

use async_trait::async_trait;
use thiserror::Error;

use super::models::{AccountsDocument, CommentsDocument, ImagesDocument};

/// Store-level failure, surfaced to clients as a 500.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("store document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Persistence contract for the three flat collections.
///
/// Handlers only ever see this trait, so tests can swap the file-backed
/// implementation for an in-memory one. Writes are awaited and their
/// failures propagate; no response claims success before its write lands.
#[async_trait]
pub trait PhotoStore: Send + Sync {
    async fn load_accounts(&self) -> Result<AccountsDocument, StoreError>;
    async fn save_accounts(&self, document: &AccountsDocument) -> Result<(), StoreError>;

    async fn load_images(&self) -> Result<ImagesDocument, StoreError>;
    async fn save_images(&self, document: &ImagesDocument) -> Result<(), StoreError>;

    async fn load_comments(&self) -> Result<CommentsDocument, StoreError>;
    async fn save_comments(&self, document: &CommentsDocument) -> Result<(), StoreError>;
}
