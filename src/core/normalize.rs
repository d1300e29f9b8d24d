//! Player and team name canonicalization.
//!
//! Spreadsheets, rankings exports and the Sleeper API spell the same player
//! differently ("D.J. Moore", "DJ Moore", "Dj  Moore"). `normalize_name`
//! maps all of them to one comparison key; display names keep their
//! original spelling and only lose roster tags.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Generational suffixes dropped from the end of a name.
pub const SUFFIX_TOKENS: [&str; 6] = ["jr", "sr", "ii", "iii", "iv", "v"];

static TRAILING_BRACED_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\{[^}]*\}\s*$").expect("valid braced-tag pattern"));

/// Canonical comparison key for a player name.
///
/// Lowercases, strips diacritics, deletes apostrophes/periods/hyphens, turns
/// other punctuation into word breaks, drops non-ASCII symbols, collapses
/// whitespace, and removes trailing generational suffixes. The result only
/// contains `[a-z0-9 ]`, so the function is idempotent.
///
/// ```rust
/// use dynasty_ffl::core::normalize_name;
///
/// assert_eq!(normalize_name("  Kenneth Walker III "), "kenneth walker");
/// assert_eq!(normalize_name("J.D. Smith"), "jd smith");
/// ```
pub fn normalize_name(raw: &str) -> String {
    let mut folded = String::with_capacity(raw.len());

    for c in raw.trim().to_lowercase().nfkd() {
        if is_combining_mark(c) || matches!(c, '\'' | '\u{2019}' | '.' | '-') {
            continue;
        }
        if c.is_ascii_alphanumeric() {
            folded.push(c.to_ascii_lowercase());
        } else if !c.is_alphanumeric() {
            folded.push(' ');
        }
    }

    let mut tokens: Vec<&str> = folded.split_whitespace().collect();
    while tokens.len() > 1 && tokens.last().is_some_and(|t| SUFFIX_TOKENS.contains(t)) {
        tokens.pop();
    }

    tokens.join(" ")
}

/// Key for comparing team labels: trimmed, whitespace collapsed, lowercase.
pub fn normalize_team(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Display form of a sheet player cell: trimmed, trailing `{...}` tag removed.
pub fn clean_display_name(raw: &str) -> String {
    TRAILING_BRACED_TAG.replace(raw.trim(), "").trim().to_string()
}
