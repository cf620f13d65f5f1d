//! Inbound message classification helpers.

/// Whether a reply counts as a "yes, start now" response.
///
/// Matches the SMS convention used across the product: the first word of
/// the reply starts with a `y` ("y", "yes", "yeah", "yup", ...).
pub fn is_affirmative(message: &str) -> bool {
    message
        .split_whitespace()
        .next()
        .map(|word| word.trim_matches(|c: char| !c.is_ascii_alphanumeric()))
        .is_some_and(|word| word.starts_with(['y', 'Y']))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affirmative_variants() {
        for yes in ["y", "Y", "yes", "YES", "yeah!", " yup ", "ya sure"] {
            assert!(is_affirmative(yes), "rejected {yes:?}");
        }
    }

    #[test]
    fn test_non_affirmative_variants() {
        for no in ["", "no", "maybe", "hello", "ok yes", "5551234567"] {
            assert!(!is_affirmative(no), "accepted {no:?}");
        }
    }

    #[test]
    fn test_only_first_word_counts() {
        assert!(is_affirmative("yes 5551234567"));
        assert!(!is_affirmative("start yes"));
    }
}
