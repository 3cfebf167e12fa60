//! Property-based tests for combination ordering, rule construction and
//! scalar quoting.

use proptest::prelude::*;
use string_grammar::combos::{ordered_combinations, power_set};
use string_grammar::pattern::escape_regex;
use string_grammar::{build_rule, to_string, GrammarOptions, Marker, MarkerSet, Quote, ScalarStyle};

fn marker_set() -> impl Strategy<Value = MarkerSet> {
    prop::sample::subsequence(Marker::ALL.to_vec(), 0..=4)
        .prop_map(|markers| markers.into_iter().collect())
}

fn quote() -> impl Strategy<Value = Quote> {
    prop::sample::select(Quote::ALL.to_vec())
}

/// Characters named by the prefix group of a `begin` pattern.
fn prefix_chars(begin: &str) -> Vec<char> {
    let group = begin
        .strip_prefix("\\s*(")
        .and_then(|rest| rest.split(")(").next())
        .unwrap_or_default();
    let group = group
        .strip_prefix('[')
        .and_then(|g| g.strip_suffix("]+"))
        .unwrap_or(group);

    let mut chars = Vec::new();
    let mut iter = group.chars();
    while let Some(c) = iter.next() {
        if c == '\\' {
            chars.extend(iter.next());
        } else {
            chars.push(c);
        }
    }
    chars
}

proptest! {
    #[test]
    fn prop_longer_combinations_come_first(max in 0usize..=4) {
        let combos = ordered_combinations(max);
        for (i, a) in combos.iter().enumerate() {
            for b in &combos[i + 1..] {
                prop_assert!(a.len() >= b.len());
            }
        }
    }

    #[test]
    fn prop_power_set_size(items in prop::collection::vec(any::<u8>(), 0..8)) {
        let subsets = power_set(&items, None);
        prop_assert_eq!(subsets.len(), 1usize << items.len());
        prop_assert_eq!(subsets.iter().filter(|s| s.is_empty()).count(), 1);
    }

    #[test]
    fn prop_power_set_respects_cap(n in 0usize..7, cap in 0usize..7) {
        let items: Vec<usize> = (0..n).collect();
        prop_assert!(power_set(&items, Some(cap)).iter().all(|s| s.len() <= cap));
    }

    #[test]
    fn prop_build_rule_is_idempotent(q in quote(), multiline in any::<bool>(), markers in marker_set()) {
        let options = GrammarOptions::new();
        let first = build_rule(q, multiline, markers, &options);
        let second = build_rule(q, multiline, markers, &options);
        prop_assert_eq!(to_string(&first).unwrap(), to_string(&second).unwrap());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_prefix_matches_marker_set(q in quote(), multiline in any::<bool>(), markers in marker_set()) {
        let rule = build_rule(q, multiline, markers, &GrammarOptions::new());
        let expected: Vec<char> = markers.iter().map(Marker::symbol).collect();
        prop_assert_eq!(prefix_chars(&rule.begin), expected);
        prop_assert_eq!(rule.captures.contains_key(&1), !markers.is_empty());
    }

    #[test]
    fn prop_one_include_per_marker(q in quote(), multiline in any::<bool>(), markers in marker_set()) {
        let rule = build_rule(q, multiline, markers, &GrammarOptions::new());
        let shared = usize::from(!markers.contains(Marker::Escape));
        prop_assert_eq!(rule.patterns.len(), markers.len() + shared);
        prop_assert_eq!(rule.patterns[0].include.as_str(), "#string-escapes");
    }

    #[test]
    fn prop_escape_regex_is_reversible(s in "\\PC{0,24}") {
        let escaped = escape_regex(&s);
        let mut unescaped = String::new();
        let mut iter = escaped.chars();
        while let Some(c) = iter.next() {
            if c == '\\' {
                unescaped.extend(iter.next());
            } else {
                unescaped.push(c);
            }
        }
        prop_assert_eq!(unescaped, s);
    }

    #[test]
    fn prop_bare_strings_render_unchanged(s in "[a-zA-Z0-9][a-zA-Z0-9 ._/:]{0,30}[a-zA-Z0-9]") {
        prop_assert_eq!(ScalarStyle::classify(&s), ScalarStyle::Bare);
        prop_assert_eq!(to_string(s.as_str()).unwrap(), s);
    }

    #[test]
    fn prop_rendering_matches_style(s in "\\PC{0,16}|[\\t\\r\\n\"' a-z]{0,16}") {
        let rendered = to_string(s.as_str()).unwrap();
        match ScalarStyle::classify(&s) {
            ScalarStyle::Literal => prop_assert!(rendered.starts_with("|\n")),
            ScalarStyle::SingleQuoted => {
                prop_assert!(rendered.starts_with('\'') && rendered.ends_with('\''));
                prop_assert_eq!(rendered[1..rendered.len() - 1].replace("''", "'"), s);
            }
            ScalarStyle::DoubleQuoted => {
                let back: String = serde_json::from_str(&rendered).unwrap();
                prop_assert_eq!(back, s);
            }
            ScalarStyle::Bare => prop_assert_eq!(rendered, s),
        }
    }
}
