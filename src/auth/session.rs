//! Session management
//!
//! Uses HMAC-signed tokens stored in cookies.
//! No server-side session storage needed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the session cookie carrying the signed identity claim.
pub const SESSION_COOKIE: &str = "email_address";

/// Session token failure
#[derive(Debug, Error)]
pub enum SessionError {
    /// Token is not in `payload.signature` form or is not decodable
    #[error("malformed session token")]
    Malformed,

    /// Signature did not verify against the configured secret
    #[error("invalid session signature")]
    InvalidSignature,

    /// Payload verified but the session has expired
    #[error("session expired")]
    Expired,

    /// Token could not be produced
    #[error("session signing failed: {0}")]
    Signing(String),
}

/// User session data
///
/// Stored in a signed cookie. The identity claim is the account email;
/// nothing here is cross-checked against the credential store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Authenticated account email
    pub email_address: String,
    /// When session was created
    pub created_at: DateTime<Utc>,
    /// When session expires
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Start a session for the given email, expiring after `max_age` seconds.
    pub fn issue(email_address: &str, max_age: i64) -> Self {
        let now = Utc::now();
        Self {
            email_address: email_address.to_string(),
            created_at: now,
            expires_at: now + chrono::Duration::seconds(max_age),
        }
    }

    /// Check if session is expired
    pub fn is_expired(&self) -> bool {
        self.expires_at < Utc::now()
    }
}

/// Create a signed session token
///
/// Token format: base64(payload).base64(hmac_sha256(payload))
///
/// # Arguments
/// * `session` - Session data to encode
/// * `secret` - HMAC secret key
///
/// # Returns
/// Signed token string
pub fn create_session_token(session: &Session, secret: &str) -> Result<String, SessionError> {
    use base64::{Engine as _, engine::general_purpose};
    use hmac::{Hmac, Mac};
    use sha2::Sha256;

    // 1. Serialize session to JSON
    let payload = serde_json::to_string(session).map_err(|e| SessionError::Signing(e.to_string()))?;

    // 2. Base64 encode the payload
    let payload_b64 = general_purpose::URL_SAFE_NO_PAD.encode(payload.as_bytes());

    // 3. Create HMAC-SHA256 signature
    type HmacSha256 = Hmac<Sha256>;
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| SessionError::Signing(e.to_string()))?;
    mac.update(payload_b64.as_bytes());
    let signature = mac.finalize().into_bytes();
    let signature_b64 = general_purpose::URL_SAFE_NO_PAD.encode(signature);

    // 4. Return "{payload}.{signature}"
    Ok(format!("{}.{}", payload_b64, signature_b64))
}

/// Verify and decode a session token
///
/// # Arguments
/// * `token` - Token string to verify
/// * `secret` - HMAC secret key
///
/// # Returns
/// Decoded session if valid
///
/// # Errors
/// Returns error if the signature is invalid, the token is malformed,
/// or the session has expired
pub fn verify_session_token(token: &str, secret: &str) -> Result<Session, SessionError> {
    use base64::{Engine as _, engine::general_purpose};
    use hmac::{Hmac, Mac};
    use sha2::Sha256;

    // 1. Split token into payload and signature
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 2 {
        return Err(SessionError::Malformed);
    }

    let payload_b64 = parts[0];
    let signature_b64 = parts[1];

    // 2. Verify HMAC signature
    type HmacSha256 = Hmac<Sha256>;
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| SessionError::Signing(e.to_string()))?;
    mac.update(payload_b64.as_bytes());

    let expected_signature = general_purpose::URL_SAFE_NO_PAD
        .decode(signature_b64)
        .map_err(|_| SessionError::Malformed)?;

    mac.verify_slice(&expected_signature)
        .map_err(|_| SessionError::InvalidSignature)?;

    // 3. Decode and deserialize payload
    let payload_bytes = general_purpose::URL_SAFE_NO_PAD
        .decode(payload_b64)
        .map_err(|_| SessionError::Malformed)?;

    let payload_str = String::from_utf8(payload_bytes).map_err(|_| SessionError::Malformed)?;

    let session: Session =
        serde_json::from_str(&payload_str).map_err(|_| SessionError::Malformed)?;

    // 4. Check if session is expired
    if session.is_expired() {
        return Err(SessionError::Expired);
    }

    Ok(session)
}
