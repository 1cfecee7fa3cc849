//! URL classification predicates
//!
//! Pure helpers with no relation to the message wire format. Used when
//! validating endpoints read from configuration.

use url::Url;

const DEFAULT_RELATIVE_BASE: &str = "http://localhost";

/// True if `value` parses as an absolute URL
pub fn is_url(value: &str) -> bool {
    !value.is_empty() && Url::parse(value).is_ok()
}

/// True if `value` is an absolute URL using the `https` scheme
pub fn is_https_url(value: &str) -> bool {
    matches!(Url::parse(value), Ok(url) if url.scheme() == "https")
}

/// True if `value` is a root-relative path that resolves against `base`
///
/// `base` defaults to `http://localhost`.
pub fn is_relative_url(value: &str, base: Option<&str>) -> bool {
    if value.is_empty() || !value.starts_with('/') {
        return false;
    }

    Url::parse(base.unwrap_or(DEFAULT_RELATIVE_BASE))
        .and_then(|base| base.join(value))
        .is_ok()
}
