//! Phone number normalization and validation.
//!
//! Every number the system stores or forwards goes through
//! [`PhoneNumber::parse`], so a `PhoneNumber` in hand is always canonical:
//! two spellings of the same number compare equal.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("not a valid mobile number")]
pub struct PhoneError;

/// A validated NANP mobile number in canonical `+1XXXXXXXXXX` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Normalize free text into a canonical phone number.
    ///
    /// Formatting characters are stripped; what remains must be a
    /// ten-digit national number, optionally prefixed with a `1` country
    /// code. Anything else is rejected.
    pub fn parse(input: &str) -> Result<Self, PhoneError> {
        let digits: String = input.chars().filter(char::is_ascii_digit).collect();
        let national = match digits.len() {
            10 => digits.as_str(),
            11 if digits.starts_with('1') => &digits[1..],
            _ => return Err(PhoneError),
        };
        Ok(Self(format!("+1{national}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PhoneNumber {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
