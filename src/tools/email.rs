//! Permissive email shape check.
//!
//! `something@something.something` with no whitespace and exactly one `@`.
//! Leading, trailing or consecutive dots, symbol-heavy local parts and
//! non-ASCII domains all pass on purpose: this is a first-pass filter, not a
//! deliverability check.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok());

/// Returns `true` when `input` looks like an email address.
#[must_use]
pub fn is_valid_email(input: &str) -> bool {
    if input.trim().is_empty() {
        return false;
    }

    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(input))
}
