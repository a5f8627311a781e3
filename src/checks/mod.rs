//! Password detector checks
//!
//! Each check is a pure predicate over the password string, independent of
//! the others. Together they produce the [`Issues`] set that score, feedback
//! and suggestions are derived from.

mod classes;
mod common;
mod length;
mod repeated;
mod sequential;

pub use classes::{class_flags, ClassFlags};
pub use common::has_common_password;
pub use length::has_min_length;
pub use repeated::has_repeated_chars;
pub use sequential::has_sequential_chars;

use crate::analysis::Issues;

/// Runs every detector over a non-empty password.
pub(crate) fn detect_issues(password: &str) -> Issues {
    let flags = class_flags(password);
    Issues {
        has_length: has_min_length(password),
        has_upper_case: flags.upper,
        has_lower_case: flags.lower,
        has_number: flags.digit,
        has_special_char: flags.special,
        has_common_password: has_common_password(password),
        has_sequential_chars: has_sequential_chars(password),
        has_repeated_chars: has_repeated_chars(password),
    }
}
