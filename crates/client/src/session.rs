//! # Session
//!
//! The caller's identity for backend requests: a bearer token and a language
//! preference. A session starts at login and ends at logout; it is passed to
//! every call instead of living in process-wide state.

use reqwest::{RequestBuilder, header::ACCEPT_LANGUAGE};

pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    language: String,
}

impl Session {
    /// A session with no credentials, for public endpoints.
    pub fn anonymous() -> Self {
        Self {
            token: None,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Starts an authenticated session.
    ///
    /// An empty language falls back to [`DEFAULT_LANGUAGE`].
    pub fn login(token: impl Into<String>, language: impl Into<String>) -> Self {
        let language = language.into();
        Self {
            token: Some(token.into()),
            language: if language.trim().is_empty() {
                DEFAULT_LANGUAGE.to_string()
            } else {
                language
            },
        }
    }

    /// Drops the token and resets the language preference.
    pub fn logout(&mut self) {
        self.token = None;
        self.language = DEFAULT_LANGUAGE.to_string();
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Attaches the session headers to an outgoing request.
    pub fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.header(ACCEPT_LANGUAGE, &self.language);
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::anonymous()
    }
}
