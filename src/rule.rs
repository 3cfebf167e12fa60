//! Rule descriptors for a single string literal variant.
//!
//! A variant is the triple (quote, multiline, marker set). [`build_rule`]
//! turns one triple into a [`RuleDescriptor`], the TextMate `begin`/`end`
//! rule that highlights it.
//!
//! ```rust
//! use string_grammar::{build_rule, GrammarOptions, MarkerSet, Quote};
//!
//! let rule = build_rule(Quote::Double, true, MarkerSet::parse("$%").unwrap(), &GrammarOptions::new());
//! assert_eq!(rule.description, "multi double-quoted interpolated and format string");
//! assert_eq!(rule.begin, "\\s*([\\$%]+)(\"\"\"+)\\s*");
//! ```

use crate::marker::{Marker, MarkerSet};
use crate::options::GrammarOptions;
use crate::pattern::{begin_pattern, end_pattern, escape_regex};
use serde::Serialize;
use std::collections::BTreeMap;

/// Capture group holding the marker prefix.
pub const PREFIX_GROUP: u32 = 1;
/// Capture group holding the quote delimiter.
pub const DELIMITER_GROUP: u32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quote {
    Single,
    Double,
}

impl Quote {
    pub const ALL: [Quote; 2] = [Quote::Single, Quote::Double];

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Quote::Single => '\'',
            Quote::Double => '"',
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Quote::Single => "single",
            Quote::Double => "double",
        }
    }
}

/// Style applied to a capture group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Capture {
    pub name: String,
}

/// Reference to a rule in the grammar repository.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Include {
    pub include: String,
}

impl Include {
    fn new(target: &str) -> Self {
        Include {
            include: target.to_string(),
        }
    }
}

/// One fully described string literal variant.
///
/// Field order is the serialized key order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RuleDescriptor {
    #[serde(rename = "comment")]
    pub description: String,
    pub begin: String,
    #[serde(rename = "contentName")]
    pub content_name: String,
    pub end: String,
    pub captures: BTreeMap<u32, Capture>,
    pub patterns: Vec<Include>,
    /// Derived metadata, never rendered: the alternation of doubled tokens
    /// (`''`, `$$`, ...) that a verbatim string reads as literal characters.
    /// Only set when the escape marker is active. Grammar authors use it to
    /// write the matching `#string-escapes` repository entry by hand.
    #[serde(skip)]
    pub escape_pattern: Option<String>,
}

/// Builds the descriptor for one (quote, multiline, markers) variant.
#[must_use]
pub fn build_rule(
    quote: Quote,
    multiline: bool,
    markers: MarkerSet,
    options: &GrammarOptions,
) -> RuleDescriptor {
    let escape_pattern = markers.contains(Marker::Escape).then(|| {
        markers
            .iter()
            .map(|m| escape_regex(&m.doubled(quote)))
            .collect::<Vec<_>>()
            .join("|")
    });

    let mut patterns = Vec::with_capacity(markers.len() + 1);
    if !markers.contains(Marker::Escape) {
        patterns.push(Include::new(Marker::Escape.include()));
    }
    let mut names = Vec::with_capacity(markers.len());
    for marker in markers.iter() {
        patterns.push(Include::new(marker.include()));
        names.push(marker.name());
    }

    let mut captures = BTreeMap::new();
    if !markers.is_empty() {
        captures.insert(
            PREFIX_GROUP,
            Capture {
                name: options.scope("storage.type.string"),
            },
        );
    }
    captures.insert(
        DELIMITER_GROUP,
        Capture {
            name: options.scope("punctuation.definition.string"),
        },
    );

    RuleDescriptor {
        description: describe(quote, multiline, &names),
        begin: begin_pattern(quote, multiline, markers),
        content_name: options.scope(&format!("string.quoted.{}", quote.label())),
        end: end_pattern(quote),
        captures,
        patterns,
        escape_pattern,
    }
}

fn describe(quote: Quote, multiline: bool, names: &[&str]) -> String {
    let phrase = format!(
        "{} {}-quoted {} string",
        if multiline { "multi" } else { "" },
        quote.label(),
        join_names(names)
    );
    phrase.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// English list: `plain`, `a`, `a and b`, `a, b, and c`.
fn join_names(names: &[&str]) -> String {
    match names {
        [] => "plain".to_string(),
        [only] => only.to_string(),
        [first, second] => format!("{} and {}", first, second),
        [init @ .., last] => format!("{}, and {}", init.join(", "), last),
    }
}
