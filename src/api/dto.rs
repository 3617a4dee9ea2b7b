//! Request and response DTOs
//!
//! Every body field arrives optional; the handlers turn absence or
//! emptiness into the operation's specific 422 message instead of a
//! deserialization rejection.

use serde::{Deserialize, Serialize};

use crate::data::{Comment, CommentsDocument};
use crate::error::AppError;
use crate::service::LeaderboardOrder;
use crate::validate::is_valid_email;

/// The `{"message": …}` envelope used by every non-query endpoint.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Login / registration body
///
/// Registration persists the whole record, so unknown fields are kept.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub email_address: Option<String>,
    pub password: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Photo upload body
#[derive(Debug, Deserialize)]
pub struct UploadPhotoRequest {
    pub source_link: Option<String>,
    pub caption: Option<String>,
}

/// Comment submission body
#[derive(Debug, Deserialize)]
pub struct SubmitCommentRequest {
    pub source_link: Option<String>,
    pub comment: Option<String>,
}

/// Query parameters for the comment listing
#[derive(Debug, Deserialize)]
pub struct CommentsQuery {
    pub source: Option<String>,
}

/// Query parameters for the leaderboard
#[derive(Debug, Default, Deserialize)]
pub struct LeaderboardQuery {
    #[serde(default)]
    pub order: LeaderboardOrder,
}

/// The `{"results": …}` envelope returned by the comment listing.
#[derive(Debug, Serialize)]
pub struct ResultsResponse {
    pub results: CommentsResults,
}

/// What a comment query can yield: one source's thread, the whole
/// mapping, or the no-comments placeholder.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CommentsResults {
    Thread(Vec<Comment>),
    All(CommentsDocument),
    Placeholder(&'static str),
}

/// Reject with the given 422 message unless the field is present and
/// non-empty.
pub fn require_non_empty(
    field: Option<String>,
    message: &'static str,
) -> Result<String, AppError> {
    match field {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(AppError::Validation(message.to_string())),
    }
}

/// Reject with the email-specific 422 message unless the field holds a
/// syntactically valid address.
pub fn require_valid_email(field: Option<String>) -> Result<String, AppError> {
    match field {
        Some(value) if is_valid_email(&value) => Ok(value),
        _ => Err(AppError::Validation(
            "A valid email address must be provided".to_string(),
        )),
    }
}
