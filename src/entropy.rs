//! Entropy estimation and crack-time mapping.
//!
//! Entropy here is a randomness proxy: log2 of the number of equally likely
//! passwords with the same length and character-class composition, not the
//! information content of the specific string.

use crate::checks::class_flags;

const LOWERCASE_CHARSET: f64 = 26.0;
const UPPERCASE_CHARSET: f64 = 26.0;
const DIGIT_CHARSET: f64 = 10.0;
/// Nominal size of the special-character class. A fixed constant, not the
/// count of distinct specials actually used.
const SPECIAL_CHARSET: f64 = 33.0;

/// Assumed attacker speed: 10 billion guesses per second.
const GUESSES_PER_SECOND: f64 = 1e10;

/// Estimated entropy in bits: `length * log2(charset_size)`.
///
/// Charset size is the sum of the sizes of the classes present. Zero for the
/// empty password.
pub fn entropy_bits(password: &str) -> f64 {
    if password.is_empty() {
        return 0.0;
    }

    let flags = class_flags(password);
    let mut charset = 0.0;
    if flags.lower {
        charset += LOWERCASE_CHARSET;
    }
    if flags.upper {
        charset += UPPERCASE_CHARSET;
    }
    if flags.digit {
        charset += DIGIT_CHARSET;
    }
    if flags.special {
        charset += SPECIAL_CHARSET;
    }

    password.chars().count() as f64 * charset.log2()
}

/// Maps entropy to a human-readable brute-force time estimate.
///
/// Seconds to exhaust half the search space at [`GUESSES_PER_SECOND`], bucketed
/// by fixed breakpoints. Never returns an empty string.
pub fn estimate_time_to_break(entropy: f64) -> String {
    let seconds = 2f64.powf(entropy) / GUESSES_PER_SECOND / 2.0;

    if seconds < 1.0 {
        "instantly".to_string()
    } else if seconds < 60.0 {
        format!("{} seconds", seconds.round() as u64)
    } else if seconds < 3_600.0 {
        format!("{} minutes", (seconds / 60.0).round() as u64)
    } else if seconds < 86_400.0 {
        format!("{} hours", (seconds / 3_600.0).round() as u64)
    } else if seconds < 2_592_000.0 {
        format!("{} days", (seconds / 86_400.0).round() as u64)
    } else if seconds < 31_536_000.0 {
        format!("{} months", (seconds / 2_592_000.0).round() as u64)
    } else if seconds < 3_153_600_000.0 {
        format!("{} years", (seconds / 31_536_000.0).round() as u64)
    } else {
        "centuries".to_string()
    }
}
