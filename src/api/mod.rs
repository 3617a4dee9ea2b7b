//! API layer
//!
//! One handler module per resource:
//! - accounts: login, registration, session probe, logout
//! - photos: image listing, leaderboard, upload
//! - comments: per-photo threads
//! - metrics: Prometheus endpoint + request instrumentation

mod accounts;
mod comments;
mod dto;
pub mod metrics;
mod photos;

pub use dto::*;
pub use metrics::metrics_router;

use axum::{
    Router,
    routing::{get, post},
};

use crate::AppState;

/// Create the `/api` router.
///
/// Paths are the application's historical route names; the front end
/// depends on them verbatim.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/auth", post(accounts::authenticate))
        .route("/newaccount", post(accounts::register))
        .route("/deleteTestAccount", post(accounts::delete_test_account))
        .route("/checkperms", get(accounts::check_session))
        .route("/logout", get(accounts::logout))
        .route("/getImageSources", get(photos::get_image_sources))
        .route("/getUserLeaderboard", get(photos::get_user_leaderboard))
        .route("/uploadPhoto", post(photos::upload_photo))
        .route("/getComments", get(comments::get_comments))
        .route("/submitComment", post(comments::submit_comment))
}
