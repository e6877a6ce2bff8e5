//! Authentication timestamp resolution from a federated profile.

use crate::error::AuthorizeResult;
use crate::models::{FederatedProfile, AUTHENTICATION_DATE_ATTRIBUTE};
use chrono::{DateTime, Utc};

/// Resolve the authentication timestamp carried by a federated profile.
///
/// Returns `Ok(None)` when the profile carries no authentication-date
/// attribute. A present-but-unparsable attribute is a hard error, unlike
/// the `max_age` sentinel: the attribute sits on an identity assertion,
/// and corrupt evidence must not be evaluated as "fresh forever".
pub fn authentication_date(profile: &FederatedProfile) -> AuthorizeResult<Option<DateTime<Utc>>> {
    let Some(value) = profile.attribute(AUTHENTICATION_DATE_ATTRIBUTE) else {
        return Ok(None);
    };

    let raw = match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    let parsed = DateTime::parse_from_rfc3339(&raw)?;
    Ok(Some(parsed.with_timezone(&Utc)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OidcAuthorizeError;
    use serde_json::json;

    #[test]
    fn test_absent_attribute_is_none() {
        let profile = FederatedProfile::new("alice");
        assert_eq!(authentication_date(&profile).unwrap(), None);
    }

    #[test]
    fn test_parses_rfc3339_timestamp() {
        let profile = FederatedProfile::new("alice")
            .with_attribute(AUTHENTICATION_DATE_ATTRIBUTE, json!("2024-05-01T10:00:00Z"));

        let date = authentication_date(&profile).unwrap().unwrap();
        assert_eq!(date, "2024-05-01T10:00:00Z".parse::<DateTime<Utc>>().unwrap());
    }

    #[test]
    fn test_normalizes_offset_to_utc() {
        let profile = FederatedProfile::new("alice").with_attribute(
            AUTHENTICATION_DATE_ATTRIBUTE,
            json!("2024-05-01T12:00:00+02:00"),
        );

        let date = authentication_date(&profile).unwrap().unwrap();
        assert_eq!(date, "2024-05-01T10:00:00Z".parse::<DateTime<Utc>>().unwrap());
    }

    #[test]
    fn test_malformed_timestamp_is_an_error() {
        let profile = FederatedProfile::new("alice")
            .with_attribute(AUTHENTICATION_DATE_ATTRIBUTE, json!("yesterday"));

        let err = authentication_date(&profile).unwrap_err();
        assert!(matches!(
            err,
            OidcAuthorizeError::InvalidAuthenticationDate(_)
        ));
    }

    #[test]
    fn test_non_string_attribute_is_an_error() {
        let profile = FederatedProfile::new("alice")
            .with_attribute(AUTHENTICATION_DATE_ATTRIBUTE, json!(1714557600));

        assert!(authentication_date(&profile).is_err());
    }
}
