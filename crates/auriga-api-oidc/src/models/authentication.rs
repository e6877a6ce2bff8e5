//! Authentication record resolved from the session registry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Read-only view of a completed login.
///
/// Owned by the session registry; the freshness evaluation reads only
/// `authentication_date`.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Authentication {
    pub id: Uuid,
    /// Principal the session was established for.
    pub principal: String,
    /// When the login completed, UTC.
    pub authentication_date: DateTime<Utc>,
}
