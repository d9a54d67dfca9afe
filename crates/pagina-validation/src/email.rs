//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

/// `local@domain.tld`: word, hyphen and dot characters before `@`, one or more
/// dot-terminated labels after it and a final label of 2 to 4 characters.
///
/// `\w` is spelled out as ASCII so that accented letters are rejected, matching
/// what browsers accept for the same pattern.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.\-]+@(?:[A-Za-z0-9_\-]+\.)+[A-Za-z0-9_\-]{2,4}$")
        .expect("email pattern is a valid regex")
});

/// Validates the shape of an email address
///
/// The value is checked as given; callers trim it first.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
