//! Error types for authorization-request evaluation.

use axum::http::StatusCode;
use thiserror::Error;

/// Result alias for authorization-request operations.
pub type AuthorizeResult<T> = Result<T, OidcAuthorizeError>;

/// Errors raised while evaluating an OIDC authorization request.
///
/// Absence is never an error here: a missing session cookie, a registry
/// miss, or a profile without an authentication-date attribute all surface
/// as `Ok(None)` / `Ok(false)` from the services. Every variant below must
/// cause the authorization endpoint to reject the request rather than
/// default to treating the session as fresh.
#[derive(Debug, Error)]
pub enum OidcAuthorizeError {
    /// The authorization request URL could not be parsed.
    #[error("Malformed authorization request URL: {0}")]
    MalformedUrl(#[from] url::ParseError),

    /// A federated profile carries an authentication-date attribute that is
    /// not a valid ISO-8601 timestamp.
    #[error("Invalid authentication date in federated profile: {0}")]
    InvalidAuthenticationDate(#[from] chrono::ParseError),

    /// Session registry lookup failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl OidcAuthorizeError {
    /// Get the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MalformedUrl(_) | Self::InvalidAuthenticationDate(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Check if this error was caused by the client's request.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedUrl(_) | Self::InvalidAuthenticationDate(_)
        )
    }
}
