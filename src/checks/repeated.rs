//! Repeated character check - identical runs and doubled blocks.

/// Checks if the password contains three identical consecutive characters
/// (e.g. "aaa"), or a block of 2-3 characters immediately followed by an
/// identical block (e.g. "abab", "xyzxyz").
pub fn has_repeated_chars(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();

    if chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2]) {
        return true;
    }

    for pattern_len in 2..=3 {
        if chars.len() < pattern_len * 2 {
            continue;
        }
        for i in 0..=chars.len() - pattern_len * 2 {
            if chars[i..i + pattern_len] == chars[i + pattern_len..i + pattern_len * 2] {
                return true;
            }
        }
    }

    false
}
