//! # Session Extraction
//!
//! Builds the backend [`Session`] for an incoming request. The caller's own
//! bearer token wins; without one the configured service token is used; with
//! neither the request proceeds anonymously.

use axum::http::{
    HeaderMap,
    header::{ACCEPT_LANGUAGE, AUTHORIZATION},
};
use roombook_client::{Session, session::DEFAULT_LANGUAGE};

pub fn session_from_headers(headers: &HeaderMap, service_token: Option<&str>) -> Session {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty());

    // First tag of the Accept-Language list, without its quality value
    let language = headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .and_then(|tag| tag.split(';').next())
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .unwrap_or(DEFAULT_LANGUAGE);

    match bearer.or(service_token) {
        Some(token) => Session::login(token, language),
        None => Session::anonymous(),
    }
}
