//! Comment service
//!
//! Comments live in a mapping from image source link to a sequence in
//! submission order; a source's sequence is created lazily on its first
//! comment.

use std::sync::Arc;

use crate::data::{Comment, CommentsDocument, PhotoStore};
use crate::error::AppError;

/// Comment service
pub struct CommentService {
    store: Arc<dyn PhotoStore>,
}

impl CommentService {
    /// Create new comment service
    pub fn new(store: Arc<dyn PhotoStore>) -> Self {
        Self { store }
    }

    /// The entire comment mapping.
    pub async fn all(&self) -> Result<CommentsDocument, AppError> {
        Ok(self.store.load_comments().await?)
    }

    /// Comments for one source link, in submission order.
    pub async fn for_source(&self, source: &str) -> Result<Option<Vec<Comment>>, AppError> {
        let document = self.store.load_comments().await?;
        Ok(document.thread(source).map(<[Comment]>::to_vec))
    }

    /// Append a comment under the decoded source link.
    ///
    /// The submitted link is URL-decoded before keying so encoded and
    /// plain submissions of the same link share one sequence. A link that
    /// does not decode is used as submitted.
    pub async fn submit(
        &self,
        source_link: &str,
        email_address: String,
        comment: String,
    ) -> Result<(), AppError> {
        let source = urlencoding::decode(source_link)
            .map(|decoded| decoded.into_owned())
            .unwrap_or_else(|_| source_link.to_string());

        let mut document = self.store.load_comments().await?;
        tracing::info!(source = %source, email = %email_address, "Submitting comment");

        document.push(
            &source,
            Comment {
                email_address,
                comment,
            },
        );
        self.store.save_comments(&document).await?;
        Ok(())
    }
}
