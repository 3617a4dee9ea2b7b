//! Data models
//!
//! Rust structs representing the three persisted collections. Each
//! collection serializes to one flat JSON document.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// =============================================================================
// Account
// =============================================================================

/// A registered account
///
/// Registration persists the full submitted body, so fields beyond the
/// credentials land in `extra` and survive the round trip verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub email_address: String,
    /// Stored in plaintext, matching the upstream behavior. See DESIGN.md.
    pub password: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Account {
    pub fn new(email_address: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email_address: email_address.into(),
            password: password.into(),
            extra: serde_json::Map::new(),
        }
    }
}

// =============================================================================
// Image Post
// =============================================================================

/// An uploaded image: a source link, the uploader, and a caption.
///
/// Posts are never updated or deleted, and the same source may be
/// uploaded more than once as independent entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagePost {
    pub source: String,
    /// Uploader email, taken from the session at upload time
    pub user: String,
    pub caption: String,
}

// =============================================================================
// Comment
// =============================================================================

/// A single comment on a photo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub email_address: String,
    pub comment: String,
}

// =============================================================================
// Store documents
// =============================================================================

/// The accounts document: `{"accounts": [Account]}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountsDocument {
    pub accounts: Vec<Account>,
}

/// The images document: `{"images": [ImagePost]}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImagesDocument {
    pub images: Vec<ImagePost>,
}

/// The comments document: a mapping from image source link to the
/// comments submitted for it, in submission order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentsDocument(pub BTreeMap<String, Vec<Comment>>);

impl CommentsDocument {
    /// Comments for one source link, if any have been submitted.
    pub fn thread(&self, source: &str) -> Option<&[Comment]> {
        self.0.get(source).map(Vec::as_slice)
    }

    /// Append a comment, creating the source's sequence on first use.
    pub fn push(&mut self, source: &str, comment: Comment) {
        self.0.entry(source.to_string()).or_default().push(comment);
    }
}
