//! Session extraction
//!
//! A request is authenticated when the session cookie's signature
//! verifies, the session is unexpired, and the claimed email is
//! syntactically valid. The claim is never cross-checked against the
//! credential store; see DESIGN.md.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{HeaderMap, request::Parts},
};
use axum_extra::extract::CookieJar;

use super::session::{SESSION_COOKIE, Session, verify_session_token};
use crate::AppState;
use crate::error::AppError;
use crate::validate::is_valid_email;

/// The 403 rejection shared by every session-guarded operation.
pub fn no_valid_cookie() -> AppError {
    AppError::Forbidden("There is no valid cookie to determine authenticity".to_string())
}

fn extract_token_from_headers(headers: &HeaderMap) -> Option<String> {
    let jar = CookieJar::from_headers(headers);
    jar.get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_owned())
}

fn authenticate_token(token: &str, secret: &str) -> Option<Session> {
    let session = verify_session_token(token, secret).ok()?;
    if !is_valid_email(&session.email_address) {
        return None;
    }
    Some(session)
}

/// Optional session extractor
///
/// Returns None if the cookie is missing, tampered, expired, or does not
/// carry a well-formed email — never an error, so handlers decide between
/// 403 and "unauthenticated" themselves.
///
/// # Usage
/// ```ignore
/// async fn handler(MaybeSession(session): MaybeSession) -> impl IntoResponse {
///     match session {
///         Some(session) => format!("Hello, {}", session.email_address),
///         None => "Hello, stranger".to_string(),
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct MaybeSession(pub Option<Session>);

#[async_trait]
impl<S> FromRequestParts<S> for MaybeSession
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let session = extract_token_from_headers(&parts.headers)
            .and_then(|token| authenticate_token(&token, &app_state.config.auth.session_secret));

        Ok(MaybeSession(session))
    }
}
