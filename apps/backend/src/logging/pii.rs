use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Phone-like digit run: optional `+`, 10-15 digits. Everything this
/// service logs about a user is keyed by phone number, so this is the one
/// pattern that matters here.
/// SAFETY: vetted literal that compiles successfully
fn phone_regex() -> &'static Regex {
    static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"\+?\d{10,15}").unwrap()
    });
    &PHONE_REGEX
}

/// Redacts phone numbers from a string, keeping the last four digits so
/// adjacent log lines for the same user remain correlatable.
pub fn redact(input: &str) -> String {
    phone_regex()
        .replace_all(input, |caps: &regex::Captures| {
            let digits = &caps[0];
            let tail = &digits[digits.len() - 4..];
            format!("***{tail}")
        })
        .to_string()
}

/// A wrapper that automatically redacts sensitive strings when displayed.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}
