//! Transport capability for the authorization endpoint.
//!
//! The freshness services need exactly two things from the incoming
//! request: its full URL and the value of a named cookie. They are exposed
//! as a capability trait implemented per transport and selected at
//! construction, so the services never downcast a generic request context.

use axum::http::HeaderMap;

/// Cookie name carrying the session token for browser sessions.
pub const SESSION_COOKIE_NAME: &str = "auriga_session";

/// Read-only view of the incoming authorization request.
pub trait AuthorizeContext: Send + Sync {
    /// Full request URL, including the query string.
    fn request_url(&self) -> &str;

    /// Value of the named cookie, if present.
    fn cookie(&self, name: &str) -> Option<String>;
}

/// HTTP implementation of [`AuthorizeContext`] over `axum` header types.
#[derive(Debug, Clone)]
pub struct HttpAuthorizeContext {
    request_url: String,
    headers: HeaderMap,
}

impl HttpAuthorizeContext {
    /// Create a context from the reconstructed request URL and the request
    /// headers.
    #[must_use]
    pub fn new(request_url: impl Into<String>, headers: HeaderMap) -> Self {
        Self {
            request_url: request_url.into(),
            headers,
        }
    }
}

impl AuthorizeContext for HttpAuthorizeContext {
    fn request_url(&self) -> &str {
        &self.request_url
    }

    fn cookie(&self, name: &str) -> Option<String> {
        let cookie_header = self.headers.get(axum::http::header::COOKIE)?;
        let cookie_str = cookie_header.to_str().ok()?;

        // Parse cookie string (format: "name1=value1; name2=value2")
        for part in cookie_str.split(';') {
            let part = part.trim();
            if let Some(value) = part.strip_prefix(name).and_then(|v| v.strip_prefix('=')) {
                return Some(value.trim().to_string());
            }
        }

        None
    }
}
