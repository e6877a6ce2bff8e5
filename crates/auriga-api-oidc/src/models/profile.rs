//! Federated identity profile.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Well-known attribute carrying the authentication timestamp as an
/// ISO-8601 string.
pub const AUTHENTICATION_DATE_ATTRIBUTE: &str = "authentication_date";

/// Identity assertion built for or received from an external relying
/// party.
///
/// Attributes are an open bag: the profile carries whatever the upstream
/// exchange produced, and this crate reads exactly one well-known entry
/// ([`AUTHENTICATION_DATE_ATTRIBUTE`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FederatedProfile {
    /// Subject the assertion is about.
    pub subject: String,
    /// Attribute name to value.
    #[serde(flatten)]
    pub attributes: HashMap<String, serde_json::Value>,
}

impl FederatedProfile {
    /// Create a profile with no attributes.
    #[must_use]
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            attributes: HashMap::new(),
        }
    }

    /// Add an attribute, consuming and returning the profile.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    /// Look up an attribute by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&serde_json::Value> {
        self.attributes.get(name)
    }
}
