//! Session registry lookup.
//!
//! The registry owns authenticated sessions; this crate performs a single
//! lookup per request and nothing else. No retries, no caching: a failed
//! or slow lookup is surfaced to the caller as-is.

use crate::error::AuthorizeResult;
use crate::models::Authentication;
use async_trait::async_trait;
use sha2::{Digest, Sha256};
use sqlx::PgPool;

/// Resolves a session token to its authentication record.
#[async_trait]
pub trait SessionRegistry: Send + Sync {
    /// Look up the authentication behind a session token.
    ///
    /// Returns `Ok(None)` when the token is unknown or the session has
    /// expired; a miss is a normal outcome, not an error.
    async fn authentication_for(&self, token: &str) -> AuthorizeResult<Option<Authentication>>;
}

/// Postgres-backed session registry.
#[derive(Debug, Clone)]
pub struct PgSessionRegistry {
    pool: PgPool,
}

impl PgSessionRegistry {
    /// Create a new registry over the given pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Hash a session token for lookup.
    ///
    /// Tokens are stored hashed; the plaintext token only ever lives in
    /// the client's cookie.
    fn hash_token(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        let hash = hasher.finalize();
        hex::encode(hash)
    }
}

#[async_trait]
impl SessionRegistry for PgSessionRegistry {
    async fn authentication_for(&self, token: &str) -> AuthorizeResult<Option<Authentication>> {
        let token_hash = Self::hash_token(token);

        let authentication: Option<Authentication> = sqlx::query_as(
            r"
            SELECT id, principal, authentication_date
            FROM authenticated_sessions
            WHERE token_hash = $1 AND expires_at > NOW()
            ",
        )
        .bind(&token_hash)
        .fetch_optional(&self.pool)
        .await?;

        Ok(authentication)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_hash_is_deterministic() {
        let token = "st-test-session-token";
        let hash1 = PgSessionRegistry::hash_token(token);
        let hash2 = PgSessionRegistry::hash_token(token);
        assert_eq!(hash1, hash2);
    }

    #[test]
    fn test_token_hash_is_hex() {
        let hash = PgSessionRegistry::hash_token("st-test-session-token");
        // SHA-256 produces 64 hex characters
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_distinct_tokens_hash_differently() {
        assert_ne!(
            PgSessionRegistry::hash_token("st-one"),
            PgSessionRegistry::hash_token("st-two")
        );
    }
}
