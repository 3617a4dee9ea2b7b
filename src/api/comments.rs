//! Comment endpoints

use axum::extract::{Json, Query, State};

use super::dto::{
    CommentsQuery, CommentsResults, MessageResponse, ResultsResponse, SubmitCommentRequest,
    require_non_empty,
};
use crate::AppState;
use crate::auth::{MaybeSession, no_valid_cookie};
use crate::error::AppError;

const NO_COMMENTS_PLACEHOLDER: &str = "No comments have been submitted for this photo yet.";

/// GET /api/getComments
///
/// With `?source=`, the thread for that link in submission order, or
/// the placeholder string when nothing has been submitted; without, the
/// entire mapping. 200 either way — absence of comments is not an
/// error.
pub async fn get_comments(
    State(state): State<AppState>,
    Query(query): Query<CommentsQuery>,
) -> Result<Json<ResultsResponse>, AppError> {
    let results = match query.source {
        Some(source) => match state.comments.for_source(&source).await? {
            Some(thread) => CommentsResults::Thread(thread),
            None => CommentsResults::Placeholder(NO_COMMENTS_PLACEHOLDER),
        },
        None => CommentsResults::All(state.comments.all().await?),
    };

    Ok(Json(ResultsResponse { results }))
}

/// POST /api/submitComment
///
/// Field checks come before the session check, mirroring uploadPhoto.
/// The source link is URL-decoded before keying into the mapping.
pub async fn submit_comment(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
    Json(body): Json<SubmitCommentRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let source_link = require_non_empty(body.source_link, "Image source link cannot be empty")?;
    let comment = require_non_empty(body.comment, "Comment cannot be empty")?;
    let session = session.ok_or_else(no_valid_cookie)?;

    state
        .comments
        .submit(&source_link, session.email_address, comment)
        .await?;
    Ok(Json(MessageResponse::new("Comment successfully uploaded")))
}
