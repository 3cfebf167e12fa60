//! Regex fragments for string delimiters.
//!
//! The patterns target Oniguruma-style engines used by TextMate grammars, so
//! they rely on backreferences and lookahead. They are produced as plain
//! strings and never compiled here.

use crate::marker::MarkerSet;
use crate::rule::Quote;

const REGEX_SPECIAL: &[char] = &[
    '-', '/', '\\', '^', '$', '*', '+', '?', '.', '(', ')', '|', '[', ']', '{', '}',
];

/// Backslash-escapes every regex metacharacter in `s`.
///
/// # Examples
///
/// ```rust
/// use string_grammar::pattern::escape_regex;
///
/// assert_eq!(escape_regex("$$"), "\\$\\$");
/// assert_eq!(escape_regex("%#"), "%#");
/// assert_eq!(escape_regex("\\"), "\\\\");
/// ```
#[must_use]
pub fn escape_regex(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 2);
    for ch in s.chars() {
        if REGEX_SPECIAL.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Opening delimiter: the quote, or three or more quotes for multiline strings.
#[must_use]
pub fn delimiter(quote: Quote, multiline: bool) -> String {
    let q = quote.as_char();
    if multiline {
        format!("{q}{q}{q}+")
    } else {
        q.to_string()
    }
}

/// Pattern matching the marker prefix written before the quote.
///
/// Empty for the empty set, a single escaped character for one marker and a
/// repeated character class otherwise.
///
/// # Examples
///
/// ```rust
/// use string_grammar::pattern::flag_prefix;
/// use string_grammar::MarkerSet;
///
/// assert_eq!(flag_prefix(MarkerSet::empty()), "");
/// assert_eq!(flag_prefix(MarkerSet::parse("$").unwrap()), "\\$");
/// assert_eq!(flag_prefix(MarkerSet::parse("%\\").unwrap()), "[\\\\%]+");
/// ```
#[must_use]
pub fn flag_prefix(markers: MarkerSet) -> String {
    let escaped: String = markers
        .iter()
        .map(|m| escape_regex(&m.symbol().to_string()))
        .collect();

    match markers.len() {
        0 | 1 => escaped,
        _ => format!("[{}]+", escaped),
    }
}

/// `begin` regex: capture 1 is the marker prefix, capture 2 the delimiter.
#[must_use]
pub fn begin_pattern(quote: Quote, multiline: bool, markers: MarkerSet) -> String {
    format!(
        "\\s*({})({})\\s*",
        flag_prefix(markers),
        delimiter(quote, multiline)
    )
}

/// `end` regex: the delimiter captured by `begin`, not followed by another quote.
#[must_use]
pub fn end_pattern(quote: Quote) -> String {
    format!("\\s*((\\2)(?!{}+))", quote.as_char())
}
