//! String scalar styles.
//!
//! Every string renders in exactly one [`ScalarStyle`], picked in priority
//! order: literal block, single-quoted, double-quoted, bare.
//!
//! ```rust
//! use string_grammar::ScalarStyle;
//!
//! assert_eq!(ScalarStyle::classify("a\nb"), ScalarStyle::Literal);
//! assert_eq!(ScalarStyle::classify("#string-escapes"), ScalarStyle::SingleQuoted);
//! assert_eq!(ScalarStyle::classify("tab\there"), ScalarStyle::DoubleQuoted);
//! assert_eq!(ScalarStyle::classify("hello: world"), ScalarStyle::Bare);
//! ```

use crate::ser::indent;
use crate::{Error, Result};

/// Leading characters that carry structure in YAML.
const SPECIAL_LEADING: &[char] = &[
    '-', ':', '|', '#', '\'', '[', ']', '{', '}', ',', '&', '*', '?', '<', '>', '=', '!', '%',
    '@',
];

/// Control characters that force a double-quoted scalar.
const ESCAPED_CONTROLS: &[char] = &['\u{0008}', '\u{000C}', '\r', '\t'];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScalarStyle {
    /// Written as is. The empty string renders as nothing.
    Bare,
    SingleQuoted,
    DoubleQuoted,
    /// `|` block scalar, used for any string containing a newline.
    Literal,
}

impl ScalarStyle {
    #[must_use]
    pub fn classify(s: &str) -> Self {
        if s.contains('\n') {
            ScalarStyle::Literal
        } else if needs_single_quotes(s) {
            ScalarStyle::SingleQuoted
        } else if s.contains(ESCAPED_CONTROLS) || s.starts_with('"') {
            ScalarStyle::DoubleQuoted
        } else {
            ScalarStyle::Bare
        }
    }
}

fn needs_single_quotes(s: &str) -> bool {
    let (first, last) = match (s.chars().next(), s.chars().next_back()) {
        (Some(first), Some(last)) => (first, last),
        _ => return false,
    };

    first.is_whitespace()
        || last.is_whitespace()
        || last == ':'
        || SPECIAL_LEADING.contains(&first)
}

/// Renders `s` in its style. `width` is the indentation of literal block lines.
pub(crate) fn render_str(s: &str, width: usize) -> Result<String> {
    Ok(match ScalarStyle::classify(s) {
        ScalarStyle::Literal => format!("|\n{}", indent(s, width)),
        ScalarStyle::SingleQuoted => format!("'{}'", s.replace('\'', "''")),
        ScalarStyle::DoubleQuoted => serde_json::to_string(s).map_err(Error::custom)?,
        ScalarStyle::Bare => s.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_quote_triggers() {
        for s in [
            " lead", "trail ", "key:", ":colon", "-dash", "|pipe", "#hash", "'apos",
            "[a]", "{b}", ",", "&anchor", "*alias", "?q", "<", ">", "=", "!tag", "%pct",
            "@at",
        ] {
            assert_eq!(ScalarStyle::classify(s), ScalarStyle::SingleQuoted, "{s:?}");
        }
    }

    #[test]
    fn test_double_quote_triggers() {
        for s in ["a\tb", "cr\r", "bs\u{0008}", "ff\u{000C}", "\"quoted"] {
            assert_eq!(ScalarStyle::classify(s), ScalarStyle::DoubleQuoted, "{s:?}");
        }
    }

    #[test]
    fn test_empty_string_is_bare() {
        assert_eq!(ScalarStyle::classify(""), ScalarStyle::Bare);
        assert_eq!(render_str("", 2).unwrap(), "");
    }

    #[test]
    fn test_single_quote_wins_over_double() {
        assert_eq!(ScalarStyle::classify("\ttab"), ScalarStyle::SingleQuoted);
        assert_eq!(ScalarStyle::classify("'x\ty"), ScalarStyle::SingleQuoted);
    }

    #[test]
    fn test_bare() {
        for s in ["plain", "hello: world", "\\s*()(')\\s*", "a-b", "x#y", "mid 'q'"] {
            assert_eq!(ScalarStyle::classify(s), ScalarStyle::Bare, "{s:?}");
        }
    }

    #[test]
    fn test_render() {
        assert_eq!(render_str("it's", 2).unwrap(), "it's");
        assert_eq!(render_str("'it''", 2).unwrap(), "'''it'''''");
        assert_eq!(render_str("-dash", 2).unwrap(), "'-dash'");
        assert_eq!(render_str("a\tb", 2).unwrap(), "\"a\\tb\"");
        assert_eq!(render_str("\"q\\", 2).unwrap(), "\"\\\"q\\\\\"");
        assert_eq!(render_str("one\n\ntwo", 2).unwrap(), "|\n  one\n\n  two");
    }
}
