//! `prompt` and `max_age` extraction from the authorization request URL.

use crate::error::AuthorizeResult;
use crate::models::MaxAge;
use std::collections::HashSet;
use url::Url;

/// The `prompt` authorization-request parameter.
pub const PROMPT: &str = "prompt";

/// The `max_age` authorization-request parameter.
pub const MAX_AGE: &str = "max_age";

/// `prompt` value requesting no user interaction.
pub const PROMPT_NONE: &str = "none";

/// `prompt` value forcing re-authentication.
pub const PROMPT_LOGIN: &str = "login";

/// `prompt` value forcing the consent screen.
pub const PROMPT_CONSENT: &str = "consent";

/// Collect the requested `prompt` interaction modes from an authorization
/// request URL.
///
/// Every `prompt` parameter is read, its value split on the single-space
/// delimiter, and the tokens flattened into a deduplicated set. Returns
/// the empty set when the parameter is absent.
pub fn prompt_tokens(request_url: &str) -> AuthorizeResult<HashSet<String>> {
    let url = Url::parse(request_url)?;

    let mut tokens = HashSet::new();
    for (name, value) in url.query_pairs() {
        if name != PROMPT {
            continue;
        }
        tokens.extend(
            value
                .split(' ')
                .filter(|token| !token.is_empty())
                .map(ToOwned::to_owned),
        );
    }
    Ok(tokens)
}

/// Resolve the `max_age` parameter from an authorization request URL.
///
/// The first `max_age` parameter wins. A missing parameter resolves to
/// [`MaxAge::Absent`], an unparsable one to [`MaxAge::Invalid`]; neither
/// is an error.
pub fn max_age(request_url: &str) -> AuthorizeResult<MaxAge> {
    let url = Url::parse(request_url)?;

    for (name, value) in url.query_pairs() {
        if name == MAX_AGE {
            return Ok(MaxAge::parse(&value));
        }
    }
    Ok(MaxAge::Absent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OidcAuthorizeError;

    const AUTHORIZE: &str = "https://idp.example.com/oauth/authorize";

    #[test]
    fn test_prompt_tokens_space_delimited() {
        let tokens = prompt_tokens(&format!("{AUTHORIZE}?prompt=login%20consent")).unwrap();
        assert_eq!(tokens.len(), 2);
        assert!(tokens.contains("login"));
        assert!(tokens.contains("consent"));
    }

    #[test]
    fn test_prompt_tokens_absent() {
        let tokens = prompt_tokens(&format!("{AUTHORIZE}?client_id=abc")).unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_prompt_tokens_deduplicated() {
        let tokens = prompt_tokens(&format!("{AUTHORIZE}?prompt=login%20login")).unwrap();
        assert_eq!(tokens.len(), 1);
        assert!(tokens.contains(PROMPT_LOGIN));
    }

    #[test]
    fn test_prompt_tokens_flatten_repeated_parameters() {
        let tokens = prompt_tokens(&format!("{AUTHORIZE}?prompt=login&prompt=consent")).unwrap();
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_prompt_tokens_case_sensitive() {
        let tokens = prompt_tokens(&format!("{AUTHORIZE}?prompt=Login%20login")).unwrap();
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_prompt_tokens_empty_value() {
        let tokens = prompt_tokens(&format!("{AUTHORIZE}?prompt=")).unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_prompt_tokens_malformed_url() {
        let err = prompt_tokens("not a url").unwrap_err();
        assert!(matches!(err, OidcAuthorizeError::MalformedUrl(_)));
    }

    #[test]
    fn test_max_age_value() {
        let max_age = max_age(&format!("{AUTHORIZE}?max_age=3600")).unwrap();
        assert_eq!(max_age, MaxAge::Value(3600));
    }

    #[test]
    fn test_max_age_invalid_is_not_absent() {
        let max_age = max_age(&format!("{AUTHORIZE}?max_age=abc")).unwrap();
        assert_eq!(max_age, MaxAge::Invalid);
    }

    #[test]
    fn test_max_age_absent() {
        let max_age = max_age(&format!("{AUTHORIZE}?client_id=abc")).unwrap();
        assert_eq!(max_age, MaxAge::Absent);
    }

    #[test]
    fn test_max_age_negative_is_invalid() {
        let max_age = max_age(&format!("{AUTHORIZE}?max_age=-300")).unwrap();
        assert_eq!(max_age, MaxAge::Invalid);
    }

    #[test]
    fn test_max_age_first_parameter_wins() {
        let max_age = max_age(&format!("{AUTHORIZE}?max_age=10&max_age=20")).unwrap();
        assert_eq!(max_age, MaxAge::Value(10));
    }

    #[test]
    fn test_max_age_malformed_url() {
        let err = max_age("://missing-scheme").unwrap_err();
        assert!(matches!(err, OidcAuthorizeError::MalformedUrl(_)));
    }
}
