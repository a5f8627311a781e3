//! Length check - minimum password length.

pub(crate) const MIN_LENGTH: usize = 8;

/// Checks if the password meets the minimum length of 8 characters.
pub fn has_min_length(password: &str) -> bool {
    password.chars().count() >= MIN_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_short() {
        assert!(!has_min_length("Short1!"));
    }

    #[test]
    fn test_exactly_minimum() {
        assert!(has_min_length("12345678"));
    }

    #[test]
    fn test_long_enough() {
        assert!(has_min_length("LongEnough123!"));
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // 8 characters, more than 8 bytes
        assert!(has_min_length("pässwörd"));
    }
}
