//! Common-password check - matches against the active wordlist.

use crate::wordlist;

/// Checks if the password matches a known weak password.
///
/// Case-insensitive. A match is either an exact hit, or a contained wordlist
/// entry of at least 4 characters whose length exceeds 40% of the password's
/// length. The ratio guard keeps long passwords that merely embed a short
/// common fragment from being flagged.
pub fn has_common_password(password: &str) -> bool {
    let lowered = password.to_lowercase();
    let pwd_len = lowered.chars().count();

    wordlist::entries().iter().any(|entry| {
        if lowered == *entry {
            return true;
        }

        let entry_len = entry.chars().count();
        entry_len >= 4
            && lowered.contains(entry.as_str())
            && entry_len as f64 / pwd_len as f64 > 0.4
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_exact_match() {
        crate::wordlist::reset_wordlist_for_testing();
        assert!(has_common_password("password"));
        assert!(has_common_password("123456"));
    }

    #[test]
    #[serial]
    fn test_case_insensitive() {
        crate::wordlist::reset_wordlist_for_testing();
        assert!(has_common_password("PaSsWoRd"));
        assert!(has_common_password("QWERTY"));
    }

    #[test]
    #[serial]
    fn test_significant_substring() {
        crate::wordlist::reset_wordlist_for_testing();
        // "password" is 8 of 11 chars, well over the 40% ratio
        assert!(has_common_password("password123"));
    }

    #[test]
    #[serial]
    fn test_short_fragment_in_long_password() {
        crate::wordlist::reset_wordlist_for_testing();
        // "1234" is 4 of 24 chars, under the ratio guard
        assert!(!has_common_password("xK9$mW2pLq1234vRtZ8nB3fJ"));
    }

    #[test]
    #[serial]
    fn test_unrelated_password() {
        crate::wordlist::reset_wordlist_for_testing();
        assert!(!has_common_password("CorrectHorseBatteryStaple"));
    }
}
