//! Blocklist - banned substrings that forfeit the common-pattern bonus.

/// Substrings that mark a password as following a common pattern.
///
/// The list is fixed; matching is case-insensitive substring containment,
/// not whole-password equality.
pub const BLOCKED_SUBSTRINGS: [&str; 5] = ["123", "abc", "qwe", "password", "admin"];

/// Checks whether the password contains any blocked substring.
#[must_use]
pub fn contains_blocked_substring(password: &str) -> bool {
    let lowered = password.to_lowercase();
    BLOCKED_SUBSTRINGS.iter().any(|b| lowered.contains(b))
}
