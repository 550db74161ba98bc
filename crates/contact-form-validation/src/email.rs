//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

// local part ends in a non-dot; domain labels start alphanumeric; alphabetic TLD
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+-]@(?:[A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("email pattern compiles")
});

/// Validates email address format
///
/// Checks for:
/// - A local part of letters, digits and `_'+-.`, not starting or ending with '.'
/// - No consecutive dots anywhere
/// - Domain labels that start with a letter or digit
/// - An alphabetic TLD of at least 2 characters
///
/// Matching is ASCII and case-insensitive.
pub fn is_valid_email(email: &str) -> bool {
    // the regex crate has no lookahead, so the leading-dot and ".." rules live here
    if email.starts_with('.') || email.contains("..") {
        return false;
    }

    EMAIL_REGEX.is_match(email)
}
