//! Session freshness policy for `max_age` authorization requests.
//!
//! One primitive decision ([`SessionFreshnessService::is_stale`]) plus
//! thin adapters that bind the `max_age` bound and the authentication
//! timestamp from their different sources: the request URL, the session
//! registry, or a federated profile.

use crate::clock::{Clock, SystemClock};
use crate::context::{AuthorizeContext, SESSION_COOKIE_NAME};
use crate::error::AuthorizeResult;
use crate::models::{Authentication, FederatedProfile, MaxAge};
use crate::registry::SessionRegistry;
use crate::services::{profile, request_params};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::instrument;

/// Observer notified when a session is judged too old.
///
/// Invoked only on the stale branch, with the authentication time and the
/// seconds elapsed since it.
pub trait StalenessObserver: Send + Sync {
    /// A session failed the `max_age` check.
    fn stale_authentication(&self, authenticated_at: DateTime<Utc>, elapsed_seconds: i64);
}

/// Default observer that records the event on the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogStalenessObserver;

impl StalenessObserver for LogStalenessObserver {
    fn stale_authentication(&self, authenticated_at: DateTime<Utc>, elapsed_seconds: i64) {
        tracing::info!(
            authenticated_at = authenticated_at.timestamp(),
            elapsed_seconds,
            "Authentication is too old for the requested max_age"
        );
    }
}

/// Decides whether an existing authenticated session satisfies the
/// freshness constraints of an authorization request.
#[derive(Clone)]
pub struct SessionFreshnessService {
    registry: Arc<dyn SessionRegistry>,
    clock: Arc<dyn Clock>,
    observer: Arc<dyn StalenessObserver>,
    session_cookie: String,
}

impl SessionFreshnessService {
    /// Create a new service over the given session registry.
    ///
    /// Uses the system clock, the logging observer, and the default
    /// session cookie name; see the `with_*` methods to override.
    #[must_use]
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self {
            registry,
            clock: Arc::new(SystemClock),
            observer: Arc::new(LogStalenessObserver),
            session_cookie: SESSION_COOKIE_NAME.to_string(),
        }
    }

    /// Replace the clock source.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the staleness observer.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn StalenessObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Use a different session cookie name.
    #[must_use]
    pub fn with_session_cookie(mut self, name: impl Into<String>) -> Self {
        self.session_cookie = name.into();
        self
    }

    /// The policy primitive: is an authentication older than the requested
    /// `max_age`?
    ///
    /// An `Absent` or `Invalid` `max_age`, and a `max_age` of zero, never
    /// force re-authentication. Otherwise the session is stale when more
    /// than `max_age` seconds have elapsed since `authenticated_at`.
    pub fn is_stale(
        &self,
        max_age: MaxAge,
        authenticated_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> bool {
        let limit = match max_age {
            MaxAge::Value(seconds) if seconds > 0 => {
                i64::try_from(seconds).unwrap_or(i64::MAX)
            }
            _ => return false,
        };

        let elapsed_seconds = now.timestamp() - authenticated_at.timestamp();
        if elapsed_seconds > limit {
            self.observer
                .stale_authentication(authenticated_at, elapsed_seconds);
            return true;
        }
        false
    }

    /// Is the given authentication timestamp too old for the request's
    /// `max_age`?
    pub fn is_stale_for_timestamp(
        &self,
        ctx: &dyn AuthorizeContext,
        authenticated_at: DateTime<Utc>,
    ) -> AuthorizeResult<bool> {
        let max_age = request_params::max_age(ctx.request_url())?;
        Ok(self.is_stale(max_age, authenticated_at, self.clock.now()))
    }

    /// Is the given authentication record too old for the request's
    /// `max_age`?
    pub fn is_stale_for_authentication(
        &self,
        ctx: &dyn AuthorizeContext,
        authentication: &Authentication,
    ) -> AuthorizeResult<bool> {
        self.is_stale_for_timestamp(ctx, authentication.authentication_date)
    }

    /// Is the request's current session too old for its `max_age`?
    ///
    /// Resolves the session through the registry first. A request with no
    /// usable session reports `false`: absence is not staleness. Callers
    /// that must force a login when no session exists check
    /// [`Self::current_authentication`] separately.
    #[instrument(skip(self, ctx))]
    pub async fn is_stale_for_request(&self, ctx: &dyn AuthorizeContext) -> AuthorizeResult<bool> {
        match self.current_authentication(ctx).await? {
            Some(authentication) => self.is_stale_for_authentication(ctx, &authentication),
            None => Ok(false),
        }
    }

    /// Is the authentication asserted by a federated profile too old for
    /// the request's `max_age`?
    ///
    /// A profile without an authentication-date attribute reports `false`;
    /// an unparsable attribute is an error.
    pub fn is_stale_for_profile(
        &self,
        ctx: &dyn AuthorizeContext,
        profile: &FederatedProfile,
    ) -> AuthorizeResult<bool> {
        match profile::authentication_date(profile)? {
            Some(authenticated_at) => self.is_stale_for_timestamp(ctx, authenticated_at),
            None => Ok(false),
        }
    }

    /// Resolve the request's current authentication, if any.
    ///
    /// A blank or missing session cookie and a registry miss are both
    /// `Ok(None)`.
    #[instrument(skip(self, ctx))]
    pub async fn current_authentication(
        &self,
        ctx: &dyn AuthorizeContext,
    ) -> AuthorizeResult<Option<Authentication>> {
        let Some(token) = ctx.cookie(&self.session_cookie) else {
            return Ok(None);
        };
        if token.trim().is_empty() {
            return Ok(None);
        }
        self.registry.authentication_for(&token).await
    }
}
