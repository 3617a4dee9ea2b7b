//! Photo endpoints
//!
//! Image listing (also the data source for the contributors page), the
//! leaderboard tally, and uploads.

use axum::extract::{Json, Query, State};

use super::dto::{LeaderboardQuery, MessageResponse, UploadPhotoRequest, require_non_empty};
use crate::AppState;
use crate::auth::{MaybeSession, no_valid_cookie};
use crate::data::ImagesDocument;
use crate::error::AppError;

/// GET /api/getImageSources
///
/// Returns the image document as stored.
pub async fn get_image_sources(
    State(state): State<AppState>,
) -> Result<Json<ImagesDocument>, AppError> {
    Ok(Json(state.photos.images().await?))
}

/// GET /api/getUserLeaderboard
///
/// `[user, count]` pairs sorted by count, ascending unless
/// `?order=descending` is given; equal counts keep first-appearance
/// order.
pub async fn get_user_leaderboard(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Json<Vec<(String, u64)>>, AppError> {
    Ok(Json(state.photos.leaderboard(query.order).await?))
}

/// POST /api/uploadPhoto
///
/// Field checks come before the session check, so a missing caption is
/// a 422 even for an anonymous caller; only then is the cookie required.
pub async fn upload_photo(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
    Json(body): Json<UploadPhotoRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let source_link = require_non_empty(body.source_link, "Image source link cannot be empty")?;
    let caption = require_non_empty(body.caption, "Caption cannot be empty")?;
    let session = session.ok_or_else(no_valid_cookie)?;

    state
        .photos
        .upload(source_link, session.email_address, caption)
        .await?;
    Ok(Json(MessageResponse::new("Image successfully uploaded")))
}
