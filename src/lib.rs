//! Password strength analysis library
//!
//! This library analyzes passwords and produces a structured assessment:
//! a 0-100 score, a qualitative strength tier, a human-readable crack-time
//! estimate, the detected issues and improvement suggestions. The engine is a
//! pure function of its input: no I/O, no state, safe to call concurrently
//! and on every keystroke.
//!
//! # Features
//!
//! - `async` (default): Enables async analysis with cancellation support
//! - `tracing`: Enables logging via tracing crate
//! - `generator`: Enables the seeded strong-password generator
//!
//! # Environment Variables
//!
//! - `PWD_WORDLIST_PATH`: Custom path to a common-password wordlist file
//!   (optional; a built-in list of 25 well-known weak passwords is used
//!   otherwise)
//!
//! # Example
//!
//! ```rust
//! use pwd_analysis::{analyze, enhanced_suggestions};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//!
//! let analysis = analyze(&password);
//! println!("Score: {}", analysis.score);
//! println!("Strength: {}", analysis.strength);
//! println!("Crack time: {}", analysis.time_to_break);
//!
//! for suggestion in enhanced_suggestions(&password) {
//!     println!("- {suggestion}");
//! }
//! ```

// Internal modules
mod analysis;
mod analyzer;
mod augmenter;
mod checks;
mod entropy;
#[cfg(feature = "generator")]
mod generator;
mod wordlist;

// Public API
pub use analysis::{Analysis, Feedback, Issues, Strength};
pub use analyzer::analyze;
pub use augmenter::enhanced_suggestions;
pub use checks::{
    class_flags, has_common_password, has_min_length, has_repeated_chars, has_sequential_chars,
    ClassFlags,
};
pub use entropy::{entropy_bits, estimate_time_to_break};
pub use wordlist::{init_wordlist, init_wordlist_from_path, WordlistError};

#[cfg(feature = "async")]
pub use analyzer::analyze_tx;

#[cfg(feature = "generator")]
pub use generator::PasswordGenerator;
