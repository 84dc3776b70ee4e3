//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[\p{L}\p{N}._+-]{1,64}@(?:[\p{L}\p{N}]+(?:-+[\p{L}\p{N}]+)*\.)+[\p{L}\p{N}]{2,}$",
    )
    .expect("valid email regex")
});

/// Validates the shape of an email address.
///
/// Checks for:
/// - exactly one '@' with a non-empty local part (at most 64 characters)
/// - a domain with at least one '.', no empty labels, no label starting or ending with '-'
/// - a top level domain of at least 2 characters
pub fn is_valid_email(email: &str) -> bool {
    email.len() <= 320 && EMAIL.is_match(email)
}
