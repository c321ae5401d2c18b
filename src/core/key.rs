//! Catalog key derivation.
//!
//! Raw text is turned into a catalog key by keeping only ASCII alphanumerics and
//! CJK ideographs, in order, and appending [`MESSAGE_SUFFIX`]:
//!
//! ```
//! use autoglot::core::derive_key;
//!
//! assert_eq!(derive_key("Price: 你好 100"), "你好100.message");
//! assert_eq!(derive_key("!!!"), ".message");
//! ```

use regex::Regex;
use std::sync::LazyLock;

/// Suffix every catalog key ends with.
pub const MESSAGE_SUFFIX: &str = ".message";

/// First and last code point of the target script (CJK Unified Ideographs).
const TARGET_SCRIPT_START: char = '\u{4e00}';
const TARGET_SCRIPT_END: char = '\u{9fa5}';

// Runs of characters that survive key normalization.
static KEY_CHARS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9a-zA-Z\x{4e00}-\x{9fa5}]+").unwrap());

/// Returns true if `c` belongs to the target script.
pub fn is_target_char(c: char) -> bool {
    (TARGET_SCRIPT_START..=TARGET_SCRIPT_END).contains(&c)
}

/// Checks if the text contains at least one target-script character.
///
/// # Examples
///
/// ```
/// use autoglot::core::contains_target_script;
///
/// assert!(contains_target_script("你好"));
/// assert!(contains_target_script("Price: 你好 100"));
/// assert!(!contains_target_script("Hello"));
/// assert!(!contains_target_script(""));
/// ```
pub fn contains_target_script(text: &str) -> bool {
    text.chars().any(is_target_char)
}

/// Derive the catalog key for a raw text value.
///
/// Never fails: text without any key characters yields the bare suffix.
pub fn derive_key(text: &str) -> String {
    let mut key: String = KEY_CHARS_REGEX
        .find_iter(text)
        .map(|m| m.as_str())
        .collect();
    key.push_str(MESSAGE_SUFFIX);
    key
}

/// Treat `text` as an already-formed catalog key.
///
/// Returns the text with all ASCII whitespace removed when that form ends with
/// [`MESSAGE_SUFFIX`]. The result is used verbatim, it is not re-derived.
/// Other whitespace, such as U+3000 or U+00A0, is part of the key.
pub fn explicit_key(text: &str) -> Option<String> {
    let stripped: String = text.chars().filter(|&c| !is_key_whitespace(c)).collect();
    stripped.ends_with(MESSAGE_SUFFIX).then_some(stripped)
}

// Space, tab, line feed, vertical tab, form feed, carriage return.
fn is_key_whitespace(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\u{b}'
}
