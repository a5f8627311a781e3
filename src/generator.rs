//! Strong-password generator and transformer.
//!
//! Presentation-adjacent helper behind the `generator` feature: proposes
//! replacement passwords, either from scratch or by rewriting the user's
//! input with character substitutions. Backed by an explicit seedable PRNG
//! so output is reproducible under a fixed seed.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SPECIALS: &str = "!@#$%^&*()-_=+[]{}|;:,.<>?";

const MIN_GENERATED_LENGTH: usize = 16;
const MAX_GENERATED_LENGTH: usize = 22;

/// Leetspeak-style replacement candidates for a character.
fn substitutions(c: char) -> &'static [char] {
    match c {
        'a' => &['@', '4', 'A'],
        'A' => &['4', '@', 'a'],
        'b' => &['8', 'B'],
        'B' => &['8', 'b'],
        'c' => &['(', 'C', '<'],
        'C' => &['(', 'c', '<'],
        'e' => &['3', 'E', '€'],
        'E' => &['3', 'e', '€'],
        'g' => &['G', '9'],
        'G' => &['g', '6', '9'],
        'h' => &['H', '#'],
        'H' => &['h', '#'],
        'i' => &['!', '1', 'I', '|'],
        'I' => &['i', '1', '!', '|'],
        'l' => &['L', '1', '|'],
        'L' => &['l', '1', '|'],
        'o' => &['0', 'O', 'ø'],
        'O' => &['0', 'o', 'ø'],
        's' => &['$', '5', 'S'],
        'S' => &['s', '$', '5'],
        't' => &['T', '+', '7'],
        'T' => &['t', '+', '7'],
        'x' => &['X', '×', '*'],
        'X' => &['x', '×', '*'],
        'z' => &['Z', '2'],
        'Z' => &['z', '2'],
        '0' => &['O', 'o', 'ø', 'D'],
        '1' => &['I', 'i', 'l', 'L', '|', '!'],
        '2' => &['Z', 'z'],
        '3' => &['E', 'e'],
        '4' => &['A', 'a'],
        '5' => &['S', 's', '$'],
        '6' => &['G', 'g', 'b'],
        '7' => &['T', 't', '+'],
        '8' => &['B', 'b'],
        '9' => &['g', 'G', 'q', 'Q'],
        _ => &[],
    }
}

/// Seedable strong-password suggester.
///
/// Holds its PRNG as state; each generated password advances the stream, so a
/// generator built `from_seed` yields the same sequence of passwords on every
/// run.
#[derive(Debug, Clone)]
pub struct PasswordGenerator {
    rng: ChaCha8Rng,
}

impl PasswordGenerator {
    /// Creates a generator with a fixed seed, for reproducible output.
    pub fn from_seed(seed: u64) -> Self {
        PasswordGenerator {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        PasswordGenerator {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Generates a random 16-22 character password containing at least one
    /// character from each class.
    pub fn random_password(&mut self) -> String {
        let length = self
            .rng
            .gen_range(MIN_GENERATED_LENGTH..=MAX_GENERATED_LENGTH);

        let mut chars: Vec<char> = vec![
            self.pick(UPPERCASE),
            self.pick(LOWERCASE),
            self.pick(DIGITS),
            self.pick(SPECIALS),
        ];

        let full_charset: String =
            format!("{UPPERCASE}{LOWERCASE}{DIGITS}{SPECIALS}");
        while chars.len() < length {
            chars.push(self.pick(&full_charset));
        }

        chars.shuffle(&mut self.rng);
        chars.into_iter().collect()
    }

    /// Rewrites an existing password into a stronger variant: substitutes
    /// characters, flips case, inserts special characters, tops up any missing
    /// class, pads to 16 characters and shuffles. Empty input falls back to
    /// [`Self::random_password`].
    pub fn strengthen(&mut self, password: &str) -> String {
        if password.is_empty() {
            return self.random_password();
        }

        let mut chars: Vec<char> = Vec::new();
        for c in password.chars() {
            let candidates = substitutions(c);
            if !candidates.is_empty() && self.rng.gen_bool(0.7) {
                chars.push(candidates[self.rng.gen_range(0..candidates.len())]);
            } else if c.is_ascii_alphabetic() && self.rng.gen_bool(0.5) {
                chars.push(if c.is_ascii_uppercase() {
                    c.to_ascii_lowercase()
                } else {
                    c.to_ascii_uppercase()
                });
            } else {
                chars.push(c);
            }
        }

        // Sprinkle special characters at random positions
        let insertions = (password.chars().count().div_ceil(3)).min(3);
        for _ in 0..insertions {
            let pos = self.rng.gen_range(0..=chars.len());
            chars.insert(pos, self.pick(SPECIALS));
        }

        // Top up any class the rewrite left out
        if !chars.iter().any(|c| c.is_ascii_uppercase()) {
            chars.push('A');
        }
        if !chars.iter().any(|c| c.is_ascii_lowercase()) {
            chars.push('a');
        }
        if !chars.iter().any(|c| c.is_ascii_digit()) {
            chars.push('7');
        }
        if !chars.iter().any(|c| !c.is_ascii_alphanumeric()) {
            chars.push('!');
        }

        let full_charset: String =
            format!("{UPPERCASE}{LOWERCASE}{DIGITS}{SPECIALS}");
        while chars.len() < MIN_GENERATED_LENGTH {
            chars.push(self.pick(&full_charset));
        }

        chars.shuffle(&mut self.rng);
        chars.into_iter().collect()
    }

    /// Produces a batch of replacement suggestions for the given input.
    pub fn suggest_passwords(&mut self, password: &str, count: usize) -> Vec<String> {
        (0..count).map(|_| self.strengthen(password)).collect()
    }

    fn pick(&mut self, charset: &str) -> char {
        let chars: Vec<char> = charset.chars().collect();
        chars[self.rng.gen_range(0..chars.len())]
    }
}
