//! Sequential character check - runs like "abc", "123" or keyboard rows.

/// Reference sequences checked in both forward and reversed orientation.
const SEQUENCES: [&str; 5] = [
    "abcdefghijklmnopqrstuvwxyz",
    "0123456789",
    "qwertyuiop",
    "asdfghjkl",
    "zxcvbnm",
];

/// Checks if the password contains any 3-character run taken from the
/// alphabet, the digits or a keyboard row, in either direction.
///
/// Case-insensitive.
pub fn has_sequential_chars(password: &str) -> bool {
    let lowered = password.to_lowercase();

    for seq in SEQUENCES {
        let reversed: String = seq.chars().rev().collect();
        for oriented in [seq, reversed.as_str()] {
            // Reference sequences are ASCII, so byte windows are char windows
            for start in 0..=oriented.len() - 3 {
                if lowered.contains(&oriented[start..start + 3]) {
                    return true;
                }
            }
        }
    }

    false
}
