//! String validation functions

use once_cell::sync::Lazy;
use regex::Regex;

// Scheme, optional user info, dotted host, optional port, then path, query or fragment.
static HTTP_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^https?://(?:[^\s/?#@]*@)?[^\s/?#@:.]+(?:\.[^\s/?#@:.]+)+(?::\d*)?(?:[/?#]\S*)?$")
        .expect("valid http url regex")
});

/// Validates the number of characters (not bytes) of a string
pub fn validate_length(s: &str, min: Option<usize>, max: Option<usize>) -> Result<(), String> {
    let length = s.chars().count();

    if let Some(min) = min {
        if length < min {
            return Err(format!("Must be at least {} characters", min));
        }
    }

    if let Some(max) = max {
        if length > max {
            return Err(format!("Must be at most {} characters", max));
        }
    }

    Ok(())
}

/// Validates an http or https URL.
///
/// The scheme must be `http://` or `https://` and must be followed by a host
/// containing at least one '.'. Whitespace is not allowed anywhere.
pub fn is_valid_http_url(url: &str) -> bool {
    HTTP_URL.is_match(url)
}
