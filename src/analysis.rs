//! Output types of the password analysis.

use std::fmt;

/// Qualitative strength tier, derived solely from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl Strength {
    /// Maps a 0-100 score to its tier.
    ///
    /// Thresholds: `< 40` weak, `40-59` medium, `60-79` strong, `>= 80` very strong.
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => Strength::VeryStrong,
            60..=79 => Strength::Strong,
            40..=59 => Strength::Medium,
            _ => Strength::Weak,
        }
    }

    /// Kebab-case name, as rendered by callers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Weak => "weak",
            Strength::Medium => "medium",
            Strength::Strong => "strong",
            Strength::VeryStrong => "very-strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The eight detector outputs. Every other field of [`Analysis`] is derived
/// from this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Issues {
    pub has_length: bool,
    pub has_upper_case: bool,
    pub has_lower_case: bool,
    pub has_number: bool,
    pub has_special_char: bool,
    pub has_common_password: bool,
    pub has_sequential_chars: bool,
    pub has_repeated_chars: bool,
}

/// Positive and negative feedback lines, one per satisfied/violated check.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Feedback {
    pub positives: Vec<String>,
    pub negatives: Vec<String>,
}

/// Complete result of analyzing one password.
///
/// Plain owned data, freshly constructed per call. The engine keeps no state;
/// callers may retain copies (e.g. to build a history list).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    /// 0-100, rounded.
    pub score: u8,
    pub strength: Strength,
    /// Human-readable crack-time estimate, e.g. "3 days". Never empty.
    pub time_to_break: String,
    /// Ordered improvement advice. Never empty.
    pub suggestions: Vec<String>,
    pub feedback: Feedback,
    pub issues: Issues,
}

impl Analysis {
    /// Canonical analysis of the empty password.
    pub(crate) fn empty() -> Self {
        Analysis {
            score: 0,
            strength: Strength::Weak,
            time_to_break: "instantly".to_string(),
            suggestions: vec!["Enter a password to analyze its strength".to_string()],
            feedback: Feedback {
                positives: Vec::new(),
                negatives: vec!["No password entered".to_string()],
            },
            issues: Issues::default(),
        }
    }
}
