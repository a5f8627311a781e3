//! Suggestion augmenter - context-specific additions to the base suggestions.

use secrecy::{ExposeSecret, SecretString};

use crate::analyzer::analyze;

/// Returns the base analysis suggestions extended with context-specific
/// heuristics: trailing digits, uppercase-first-then-lowercase shape,
/// letters-only passwords and a phrase nudge for low scores.
///
/// Deterministic rule augmentations, appended in fixed order after the base
/// suggestions. Empty password yields an empty list.
pub fn enhanced_suggestions(password: &SecretString) -> Vec<String> {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return Vec::new();
    }

    let analysis = analyze(password);
    let mut suggestions = analysis.suggestions;

    if ends_with_digits(pwd) {
        suggestions.push("Avoid placing all numbers at the end of your password".to_string());
    }

    if is_capitalized_lowercase(pwd) {
        suggestions.push(
            "Avoid using only an uppercase first letter followed by all lowercase".to_string(),
        );
    }

    if is_pure_alphabetic(pwd) {
        suggestions.push(
            "Consider adding non-alphabetic characters to strengthen your password".to_string(),
        );
    }

    if analysis.score < 60 {
        suggestions.push(
            "Try creating a phrase from the first letters of a memorable sentence".to_string(),
        );
    }

    suggestions
}

fn ends_with_digits(password: &str) -> bool {
    password
        .chars()
        .next_back()
        .is_some_and(|c| c.is_ascii_digit())
}

/// Uppercase first character with everything after it lowercase letters.
/// Vacuously true for a single uppercase character.
fn is_capitalized_lowercase(password: &str) -> bool {
    let mut chars = password.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {
            chars.all(|c| c.is_ascii_lowercase())
        }
        _ => false,
    }
}

fn is_pure_alphabetic(password: &str) -> bool {
    password.chars().count() > 3 && password.chars().all(|c| c.is_ascii_alphabetic())
}
