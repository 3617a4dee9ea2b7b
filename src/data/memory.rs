//! In-memory store fake for unit tests
//!
//! Mirrors the file store's load-all/save-all semantics, plus a switch
//! that makes every save fail so error propagation can be pinned.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::models::{AccountsDocument, CommentsDocument, ImagesDocument};
use super::store::{PhotoStore, StoreError};

#[derive(Default)]
pub struct MemoryStore {
    accounts: RwLock<AccountsDocument>,
    images: RwLock<ImagesDocument>,
    comments: RwLock<CommentsDocument>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_accounts(mut self, accounts: AccountsDocument) -> Self {
        self.accounts = RwLock::new(accounts);
        self
    }

    pub fn with_images(mut self, images: ImagesDocument) -> Self {
        self.images = RwLock::new(images);
        self
    }

    pub fn with_comments(mut self, comments: CommentsDocument) -> Self {
        self.comments = RwLock::new(comments);
        self
    }

    /// Make every subsequent save return an I/O failure.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check_writable(&self) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Io(io::Error::other("simulated write failure")));
        }
        Ok(())
    }
}

#[async_trait]
impl PhotoStore for MemoryStore {
    async fn load_accounts(&self) -> Result<AccountsDocument, StoreError> {
        Ok(self.accounts.read().await.clone())
    }

    async fn save_accounts(&self, document: &AccountsDocument) -> Result<(), StoreError> {
        self.check_writable()?;
        *self.accounts.write().await = document.clone();
        Ok(())
    }

    async fn load_images(&self) -> Result<ImagesDocument, StoreError> {
        Ok(self.images.read().await.clone())
    }

    async fn save_images(&self, document: &ImagesDocument) -> Result<(), StoreError> {
        self.check_writable()?;
        *self.images.write().await = document.clone();
        Ok(())
    }

    async fn load_comments(&self) -> Result<CommentsDocument, StoreError> {
        Ok(self.comments.read().await.clone())
    }

    async fn save_comments(&self, document: &CommentsDocument) -> Result<(), StoreError> {
        self.check_writable()?;
        *self.comments.write().await = document.clone();
        Ok(())
    }
}
