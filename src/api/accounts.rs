//! Account endpoints
//!
//! Login, registration, the test-account cleanup hook, the session
//! probe polled by every page render, and logout.

use axum::{
    extract::{Json, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::Cookie;

use super::dto::{CredentialsRequest, MessageResponse, require_non_empty, require_valid_email};
use crate::AppState;
use crate::auth::{MaybeSession, SESSION_COOKIE, Session, create_session_token};
use crate::data::Account;
use crate::error::AppError;
use crate::metrics::SESSIONS_ISSUED_TOTAL;

/// Sign a session for the email and add it to the cookie jar.
fn issue_session_cookie(
    jar: CookieJar,
    state: &AppState,
    email_address: &str,
) -> Result<CookieJar, AppError> {
    let session = Session::issue(email_address, state.config.auth.session_max_age);
    let token = create_session_token(&session, &state.config.auth.session_secret)?;
    SESSIONS_ISSUED_TOTAL.inc();

    let cookie = Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .build();
    Ok(jar.add(cookie))
}

/// POST /api/auth
///
/// Validates the body, scans the credential store for an exact match,
/// and issues a session cookie on success.
pub async fn authenticate(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<CredentialsRequest>,
) -> Result<(CookieJar, Json<MessageResponse>), AppError> {
    let email_address = require_valid_email(body.email_address)?;
    let password = require_non_empty(body.password, "Password cannot be empty")?;

    state.accounts.authenticate(&email_address, &password).await?;

    let jar = issue_session_cookie(jar, &state, &email_address)?;
    Ok((jar, Json(MessageResponse::new("Successfully logged in"))))
}

/// POST /api/newaccount
///
/// Same field validation as login. The full submitted record is
/// appended (extra fields included) unless the email is taken, and a
/// session is issued for the new account.
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<CredentialsRequest>,
) -> Result<(CookieJar, Json<MessageResponse>), AppError> {
    let email_address = require_valid_email(body.email_address)?;
    let password = require_non_empty(body.password, "Password cannot be empty")?;

    state
        .accounts
        .register(Account {
            email_address: email_address.clone(),
            password,
            extra: body.extra,
        })
        .await?;

    let jar = issue_session_cookie(jar, &state, &email_address)?;
    Ok((
        jar,
        Json(MessageResponse::new("Account successfully registered")),
    ))
}

/// POST /api/deleteTestAccount
///
/// Removes every record matching the test sentinel email. Responds 200
/// whether or not anything matched.
pub async fn delete_test_account(
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.accounts.delete_test_accounts().await?;
    Ok(Json(MessageResponse::new("Account successfully deleted")))
}

/// GET /api/checkperms
///
/// Session probe: always 200, reporting whether the request carries a
/// valid session cookie.
pub async fn check_session(MaybeSession(session): MaybeSession) -> Json<MessageResponse> {
    match session {
        Some(_) => Json(MessageResponse::new("authenticated")),
        None => Json(MessageResponse::new("unauthenticated")),
    }
}

/// GET /api/logout
///
/// Clears the session cookie and sends the client back to the shell.
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    let mut cookie = Cookie::build((SESSION_COOKIE, "")).path("/").build();
    cookie.make_removal();

    (
        StatusCode::FOUND,
        jar.add(cookie),
        [(header::LOCATION, "/")],
    )
}
