//! Password analyzer - main analysis logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::analysis::{Analysis, Feedback, Issues, Strength};
use crate::checks::detect_issues;
use crate::entropy::{entropy_bits, estimate_time_to_break};

/// Analyzes a password and returns a complete strength assessment.
///
/// Total function: every input, including the empty string, yields a
/// well-formed [`Analysis`]. Deterministic: the same input always yields the
/// same output.
///
/// # Arguments
/// * `password` - The password to analyze
///
/// # Returns
/// An `Analysis` with score, tier, crack-time estimate, suggestions,
/// feedback and the detected issues.
pub fn analyze(password: &SecretString) -> Analysis {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return Analysis::empty();
    }

    let issues = detect_issues(pwd);
    let entropy = entropy_bits(pwd);

    // Base score from entropy, then multiplicative penalties per issue
    let mut score = (entropy * 4.0).min(100.0);
    if !issues.has_length {
        score *= 0.7;
    }
    if !issues.has_upper_case {
        score *= 0.9;
    }
    if !issues.has_lower_case {
        score *= 0.9;
    }
    if !issues.has_number {
        score *= 0.9;
    }
    if !issues.has_special_char {
        score *= 0.85;
    }
    if issues.has_common_password {
        score *= 0.3;
    }
    if issues.has_sequential_chars {
        score *= 0.8;
    }
    if issues.has_repeated_chars {
        score *= 0.8;
    }
    let score = score.round() as u8;

    #[cfg(feature = "tracing")]
    tracing::debug!(score, ?issues, "password analyzed");

    Analysis {
        score,
        strength: Strength::from_score(score),
        time_to_break: estimate_time_to_break(entropy),
        suggestions: suggestions_for(&issues),
        feedback: feedback_for(&issues),
        issues,
    }
}

/// One suggestion per failing check, in fixed order.
fn suggestions_for(issues: &Issues) -> Vec<String> {
    let mut suggestions = Vec::new();

    if !issues.has_length {
        suggestions.push("Use at least 8 characters".to_string());
    }
    if !issues.has_upper_case || !issues.has_lower_case {
        suggestions.push("Mix uppercase and lowercase letters".to_string());
    }
    if !issues.has_number {
        suggestions.push("Add numbers".to_string());
    }
    if !issues.has_special_char {
        suggestions.push("Include special characters like !@#$%".to_string());
    }
    if issues.has_common_password {
        suggestions.push("Avoid using common words or patterns".to_string());
    }
    if issues.has_sequential_chars {
        suggestions.push("Avoid sequential characters like 123 or abc".to_string());
    }
    if issues.has_repeated_chars {
        suggestions.push("Avoid repeating characters like aaa or 111".to_string());
    }

    if suggestions.is_empty() {
        suggestions.push("Your password is already strong".to_string());
    }

    suggestions
}

/// Positive/negative line per class check; pattern checks only ever
/// contribute negatives.
fn feedback_for(issues: &Issues) -> Feedback {
    let mut feedback = Feedback::default();

    if issues.has_length {
        feedback.positives.push("Good length".to_string());
    } else {
        feedback.negatives.push("Too short".to_string());
    }
    if issues.has_upper_case {
        feedback.positives.push("Has uppercase letters".to_string());
    } else {
        feedback.negatives.push("No uppercase letters".to_string());
    }
    if issues.has_lower_case {
        feedback.positives.push("Has lowercase letters".to_string());
    } else {
        feedback.negatives.push("No lowercase letters".to_string());
    }
    if issues.has_number {
        feedback.positives.push("Has numbers".to_string());
    } else {
        feedback.negatives.push("No numbers".to_string());
    }
    if issues.has_special_char {
        feedback.positives.push("Has special characters".to_string());
    } else {
        feedback.negatives.push("No special characters".to_string());
    }

    if issues.has_common_password {
        feedback
            .negatives
            .push("Contains common password patterns".to_string());
    }
    if issues.has_sequential_chars {
        feedback
            .negatives
            .push("Contains sequential characters".to_string());
    }
    if issues.has_repeated_chars {
        feedback
            .negatives
            .push("Contains repeated characters".to_string());
    }

    feedback
}

/// Async version that sends the analysis via channel after a short delay.
///
/// The delay models the caller's "analyzing..." affordance; the engine itself
/// is synchronous. A cancelled token suppresses delivery.
#[cfg(feature = "async")]
pub async fn analyze_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<Analysis>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("analysis is about to start...");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::info!("analysis cancelled before completion");
            return;
        }
        _ = tokio::time::sleep(Duration::from_millis(300)) => {}
    }

    let analysis = analyze(password);

    if let Err(e) = tx.send(analysis).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password analysis result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    fn reset_wordlist() {
        crate::wordlist::reset_wordlist_for_testing();
    }

    #[test]
    #[serial]
    fn test_empty_password_canonical_analysis() {
        reset_wordlist();
        let analysis = analyze(&secret(""));

        assert_eq!(analysis.score, 0);
        assert_eq!(analysis.strength, Strength::Weak);
        assert_eq!(analysis.time_to_break, "instantly");
        assert_eq!(
            analysis.suggestions,
            vec!["Enter a password to analyze its strength".to_string()]
        );
        assert!(analysis.feedback.positives.is_empty());
        assert_eq!(
            analysis.feedback.negatives,
            vec!["No password entered".to_string()]
        );
        assert_eq!(analysis.issues, Issues::default());
    }

    #[test]
    #[serial]
    fn test_determinism() {
        reset_wordlist();
        for pwd in ["", "a", "password", "Tr0ub4dor&3xk9Qp", "héllo wörld 42"] {
            let first = analyze(&secret(pwd));
            let second = analyze(&secret(pwd));
            assert_eq!(first, second, "analysis of {:?} not deterministic", pwd);
        }
    }

    #[test]
    #[serial]
    fn test_common_password_scores_weak() {
        reset_wordlist();
        let analysis = analyze(&secret("password"));

        assert!(analysis.issues.has_common_password);
        assert!(!analysis.issues.has_sequential_chars);
        assert_eq!(analysis.strength, Strength::Weak);
        // 100 * 0.9 (no upper) * 0.9 (no digit) * 0.85 (no special) * 0.3 (common)
        assert_eq!(analysis.score, 21);
    }

    #[test]
    #[serial]
    fn test_sequential_detection() {
        reset_wordlist();
        let analysis = analyze(&secret("abc12345"));
        assert!(analysis.issues.has_sequential_chars);
    }

    #[test]
    #[serial]
    fn test_repeated_detection() {
        reset_wordlist();
        let analysis = analyze(&secret("Aaaa1111!"));
        assert!(analysis.issues.has_repeated_chars);
    }

    #[test]
    #[serial]
    fn test_strong_password() {
        reset_wordlist();
        let analysis = analyze(&secret("Tr0ub4dor&3xk9Qp"));

        let issues = analysis.issues;
        assert!(issues.has_length);
        assert!(issues.has_upper_case);
        assert!(issues.has_lower_case);
        assert!(issues.has_number);
        assert!(issues.has_special_char);
        assert!(!issues.has_common_password);
        assert!(!issues.has_sequential_chars);
        assert!(!issues.has_repeated_chars);

        assert_eq!(analysis.score, 100);
        assert_eq!(analysis.strength, Strength::VeryStrong);
        assert_eq!(
            analysis.suggestions,
            vec!["Your password is already strong".to_string()]
        );
        assert_eq!(analysis.feedback.negatives, Vec::<String>::new());
        assert_eq!(analysis.feedback.positives.len(), 5);
        assert_eq!(analysis.time_to_break, "centuries");
    }

    #[test]
    #[serial]
    fn test_score_bounds_and_tier_consistency() {
        reset_wordlist();
        let samples = [
            "",
            "a",
            "ab",
            "1234",
            "password",
            "abc12345",
            "Aaaa1111!",
            "MyPass123!",
            "NoDigitsHere!",
            "nouppercasehere",
            "ALLUPPER123",
            "Tr0ub4dor&3xk9Qp",
            "CorrectHorse#42Staple",
            "日本語パスワード",
        ];

        for pwd in samples {
            let analysis = analyze(&secret(pwd));
            assert!(analysis.score <= 100, "score out of bounds for {:?}", pwd);
            assert_eq!(
                analysis.strength,
                Strength::from_score(analysis.score),
                "tier inconsistent for {:?}",
                pwd
            );
        }
    }

    #[test]
    #[serial]
    fn test_suggestions_never_empty() {
        reset_wordlist();
        for pwd in ["a", "password", "xK9$mW2pLqVtZ8nB", "!!!"] {
            let analysis = analyze(&secret(pwd));
            assert!(!analysis.suggestions.is_empty(), "no suggestions for {:?}", pwd);
        }
    }

    #[test]
    #[serial]
    fn test_already_strong_only_when_no_issue_suggestions() {
        reset_wordlist();
        let strong = analyze(&secret("Tr0ub4dor&3xk9Qp"));
        assert_eq!(strong.suggestions.len(), 1);
        assert_eq!(strong.suggestions[0], "Your password is already strong");

        let weak = analyze(&secret("abc"));
        assert!(!weak
            .suggestions
            .iter()
            .any(|s| s == "Your password is already strong"));
    }

    #[test]
    #[serial]
    fn test_combined_case_suggestion_is_single() {
        reset_wordlist();
        // Missing both cases still yields one combined suggestion
        let analysis = analyze(&secret("97531@#97531"));
        let count = analysis
            .suggestions
            .iter()
            .filter(|s| *s == "Mix uppercase and lowercase letters")
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    #[serial]
    fn test_feedback_covers_all_class_checks() {
        reset_wordlist();
        let analysis = analyze(&secret("onlylower"));
        let total = analysis.feedback.positives.len()
            + analysis
                .feedback
                .negatives
                .iter()
                .filter(|n| !n.starts_with("Contains"))
                .count();
        assert_eq!(total, 5);
    }

    #[test]
    #[serial]
    fn test_very_long_input_is_handled() {
        reset_wordlist();
        let long = "xK9$mW2p".repeat(50);
        let analysis = analyze(&secret(&long));
        assert!(analysis.score <= 100);
        assert_eq!(analysis.time_to_break, "centuries");
    }
}
