//! OIDC authorization-request support for the Auriga identity provider.
//!
//! This crate sits at the boundary of the authorization endpoint and
//! decides whether an existing authenticated session still satisfies the
//! freshness constraints of an incoming authorization request.
//!
//! # What it does
//!
//! - Extracts the `prompt` and `max_age` parameters from the request URL
//! - Resolves the current authentication from the session cookie through
//!   a pluggable session registry
//! - Applies the `max_age` freshness policy: a session is stale only when
//!   an enforceable `max_age` was requested and more seconds than that
//!   have elapsed since login
//! - Resolves an authentication timestamp from a federated identity
//!   profile when the assertion carries one instead of a local session
//!
//! It is a pure decision layer: it issues and revokes nothing, owns no
//! state, and performs exactly one external read (the registry lookup)
//! per evaluated request.
//!
//! # Example
//!
//! ```rust,ignore
//! use auriga_api_oidc::{HttpAuthorizeContext, PgSessionRegistry, SessionFreshnessService};
//! use std::sync::Arc;
//!
//! let service = SessionFreshnessService::new(Arc::new(PgSessionRegistry::new(pool)));
//!
//! let ctx = HttpAuthorizeContext::new(request_url, headers);
//! if service.is_stale_for_request(&ctx).await? {
//!     // redirect to login before honoring the authorization request
//! }
//! ```

pub mod clock;
pub mod context;
pub mod error;
pub mod models;
pub mod registry;
pub mod services;

pub use clock::{Clock, SystemClock};
pub use context::{AuthorizeContext, HttpAuthorizeContext, SESSION_COOKIE_NAME};
pub use error::{AuthorizeResult, OidcAuthorizeError};
pub use models::{Authentication, FederatedProfile, MaxAge, AUTHENTICATION_DATE_ATTRIBUTE};
pub use registry::{PgSessionRegistry, SessionRegistry};
pub use services::{
    max_age, prompt_tokens, LogStalenessObserver, SessionFreshnessService, StalenessObserver,
};
