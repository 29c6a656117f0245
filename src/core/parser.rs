//! Text extraction primitives for the `nordvpn` client's output.
//!
//! The client prints human-readable `Key: value` lines and column-formatted
//! name tables. These helpers treat that text as a versionless, best-effort
//! grammar: a key is located by its first occurrence anywhere in the text
//! (not anchored to a line start), followed by a colon and one whitespace
//! character, and its value runs to the end of that line.

use regex::Regex;
use std::sync::OnceLock;

use crate::constants;

/// Builds the `<label>:<ws>(<rest of line>)` matcher for a key label.
fn key_pattern(key: &str) -> Option<Regex> {
    Regex::new(&format!(r"{}:\s(.*)", regex::escape(key))).ok()
}

/// Finds the raw, trimmed value following `key:` in `source`.
///
/// Returns `None` only when the key is absent. An empty remainder is a
/// valid empty value.
///
/// # Example
///
/// ```
/// use nordtray::core::parser::find_string_value;
///
/// assert_eq!(find_string_value("City", "City: Milan\n"), Some("Milan".to_string()));
/// assert_eq!(find_string_value("City", "Country: Italy"), None);
/// ```
pub fn find_string_value(key: &str, source: &str) -> Option<String> {
    let captures = key_pattern(key)?.captures(source)?;
    Some(captures.get(1)?.as_str().trim().to_string())
}

/// Finds the boolean value following `key:` in `source`.
///
/// The value is `true` iff it equals one of the client's truthy tokens
/// (`enabled`, `on`, `true`; case-sensitive). Any other value, including an
/// empty one, is `false`. `None` means the key is absent.
pub fn find_bool_value(key: &str, source: &str) -> Option<bool> {
    find_string_value(key, source).map(|value| constants::TRUTHY_TOKENS.contains(&value.as_str()))
}

/// Finds the comma separated list following `key:` in `source`.
///
/// Items keep whatever whitespace surrounds them inside the value; only the
/// value as a whole is trimmed.
pub fn find_list_value(key: &str, source: &str) -> Option<Vec<String>> {
    find_string_value(key, source).map(|value| value.split(',').map(str::to_string).collect())
}

/// Extracts every run of two or more word characters from `raw`.
pub fn parse_words(raw: &str) -> Vec<String> {
    static WORDS: OnceLock<Regex> = OnceLock::new();
    let words = WORDS.get_or_init(|| Regex::new(r"\w{2,}").expect("static pattern is valid"));

    words
        .find_iter(raw)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Returns `true` for prose lines the client prints around its tables:
/// feature announcements, update and login warnings.
///
/// Place and group names never contain sentence punctuation, URLs or
/// backticks, so any line that does is not part of a listing.
pub fn is_announcement(line: &str) -> bool {
    static PROSE: OnceLock<Regex> = OnceLock::new();
    let prose =
        PROSE.get_or_init(|| Regex::new(r"[.!?](?:\s|$)|://|`").expect("static pattern is valid"));

    line.contains(constants::MSG_UPDATE_WARNING)
        || line.contains(constants::MSG_LOGIN_WARNING)
        || prose.is_match(line)
}

/// Parses a `countries` / `groups` / `cities` listing into sorted names.
///
/// Announcement lines are skipped, the remaining lines are tokenized with
/// [`parse_words`], and the result is sorted ascending.
pub fn parse_names(raw: &str) -> Vec<String> {
    let mut names: Vec<String> = raw
        .lines()
        .filter(|line| !is_announcement(line))
        .flat_map(parse_words)
        .collect();
    names.sort();
    names
}
