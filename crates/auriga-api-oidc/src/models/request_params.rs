//! Typed `max_age` authorization-request parameter.

use serde::{Deserialize, Serialize};

/// Resolved `max_age` parameter of an authorization request.
///
/// `Absent` (no parameter) and `Invalid` (a parameter that does not parse
/// as a non-negative integer) are distinct variants. Both fall on the
/// never-stale policy path, but they stay distinguishable to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaxAge {
    /// No `max_age` parameter on the request.
    Absent,
    /// A `max_age` parameter was present but is not a non-negative integer.
    Invalid,
    /// Maximum acceptable authentication age in seconds.
    Value(u64),
}

impl MaxAge {
    /// Resolve a raw `max_age` parameter value.
    ///
    /// Never fails: an unparsable value resolves to [`MaxAge::Invalid`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        raw.parse::<u64>().map_or(MaxAge::Invalid, MaxAge::Value)
    }

    /// The requested age bound in seconds, if one was supplied and parsed.
    #[must_use]
    pub fn seconds(&self) -> Option<u64> {
        match self {
            MaxAge::Value(seconds) => Some(*seconds),
            MaxAge::Absent | MaxAge::Invalid => None,
        }
    }
}
