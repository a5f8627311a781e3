//! Common-password wordlist
//!
//! Holds the list of well-known weak passwords used by the common-password
//! detector. A built-in list is always available with no initialization;
//! callers may replace it with a larger list loaded from a file.

use std::path::PathBuf;
use std::sync::RwLock;
use thiserror::Error;

/// Built-in list of well-known weak passwords.
///
/// Used whenever no custom wordlist has been loaded. Entries are lowercase.
const DEFAULT_COMMON_PASSWORDS: [&str; 25] = [
    "password",
    "123456",
    "qwerty",
    "admin",
    "welcome",
    "login",
    "123123",
    "12345678",
    "abc123",
    "letmein",
    "1234",
    "monkey",
    "1234567890",
    "master",
    "sunshine",
    "football",
    "baseball",
    "dragon",
    "superman",
    "princess",
    "qwertyuiop",
    "asdfghjkl",
    "zxcvbnm",
    "123456789",
    "iloveyou",
];

static CUSTOM_WORDLIST: RwLock<Option<Vec<String>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("Wordlist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read wordlist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Wordlist file is empty")]
    EmptyFile,
}

/// Returns the wordlist file path.
///
/// Priority:
/// 1. Environment variable `PWD_WORDLIST_PATH`
/// 2. Default path `./assets/wordlist.txt`
pub fn get_wordlist_path() -> PathBuf {
    std::env::var("PWD_WORDLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/wordlist.txt"))
}

/// Loads a custom wordlist from the path given by `PWD_WORDLIST_PATH`
/// (or the default path when unset), replacing the built-in list.
///
/// Entirely optional: the analyzer works with the built-in list when this is
/// never called, and keeps working with whatever list was active if it fails.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_wordlist() -> Result<usize, WordlistError> {
    let path = get_wordlist_path();
    init_wordlist_from_path(&path)
}

/// Loads a custom wordlist from a specific file path.
///
/// One entry per line; entries are trimmed and lowercased, blank lines are
/// skipped. Idempotent: once a custom list is loaded, further calls return
/// its size without re-reading.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_wordlist_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<usize, WordlistError> {
    {
        let guard = CUSTOM_WORDLIST.read().unwrap();
        if let Some(list) = guard.as_ref() {
            return Ok(list.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Wordlist initialization FAILED: FileNotFound {}", path.display());
        return Err(WordlistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Wordlist initialization FAILED: Empty file {}", path.display());
        return Err(WordlistError::EmptyFile);
    }

    let list: Vec<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    let count = list.len();
    {
        let mut guard = CUSTOM_WORDLIST.write().unwrap();
        *guard = Some(list);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Wordlist initialized: {} passwords from {:?}", count, path);

    Ok(count)
}

/// Returns the active wordlist: the custom list when loaded, the built-in
/// list otherwise. Entries are lowercase.
pub fn entries() -> Vec<String> {
    let guard = CUSTOM_WORDLIST.read().unwrap();
    match guard.as_ref() {
        Some(list) => list.clone(),
        None => DEFAULT_COMMON_PASSWORDS
            .iter()
            .map(|s| s.to_string())
            .collect(),
    }
}

/// Resets the wordlist to the built-in default for testing purposes.
#[cfg(test)]
pub fn reset_wordlist_for_testing() {
    let mut guard = CUSTOM_WORDLIST.write().unwrap();
    *guard = None;
}
