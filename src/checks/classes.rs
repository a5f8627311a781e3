//! Character class check - uppercase, lowercase, digits, special chars.

/// Presence flags for the four character classes.
///
/// Classes are the ASCII sets A-Z, a-z, 0-9; anything else counts as special.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassFlags {
    pub upper: bool,
    pub lower: bool,
    pub digit: bool,
    pub special: bool,
}

/// Scans the password once and reports which character classes are present.
pub fn class_flags(password: &str) -> ClassFlags {
    let mut flags = ClassFlags::default();
    for c in password.chars() {
        if c.is_ascii_uppercase() {
            flags.upper = true;
        } else if c.is_ascii_lowercase() {
            flags.lower = true;
        } else if c.is_ascii_digit() {
            flags.digit = true;
        } else {
            flags.special = true;
        }
    }
    flags
}
