//! Email syntax validation
//!
//! A cookie or request body field counts as an email address when it
//! matches this pattern; account existence is never consulted here.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#
    )
    .expect("email pattern compiles");
}

/// Check whether the candidate is a syntactically valid email address.
///
/// The candidate is lowercased before matching.
pub fn is_valid_email(candidate: &str) -> bool {
    EMAIL_RE.is_match(&candidate.to_lowercase())
}
