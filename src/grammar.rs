//! Assembles the complete string rule set.

use crate::combos::ordered_combinations;
use crate::options::GrammarOptions;
use crate::rule::{build_rule, Quote, RuleDescriptor};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Every string rule of a grammar, in match priority order.
///
/// Serializes as `{strings: {patterns: [...]}}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<RuleDescriptor>,
}

impl RuleSet {
    #[must_use]
    pub fn rules(&self) -> &[RuleDescriptor] {
        &self.rules
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[derive(Serialize)]
struct Patterns<'a> {
    patterns: &'a [RuleDescriptor],
}

impl Serialize for RuleSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(
            "strings",
            &Patterns {
                patterns: &self.rules,
            },
        )?;
        map.end()
    }
}

/// Generates one rule per (marker set, multiline, quote) combination.
///
/// Marker sets come longest first. For each set the multiline rules precede
/// the single-line ones so `'''` is never read as an empty `''` followed by a
/// stray quote.
///
/// # Examples
///
/// ```rust
/// use string_grammar::{generate, GrammarOptions};
///
/// let rules = generate(&GrammarOptions::new());
/// assert_eq!(rules.len(), 64);
/// assert_eq!(
///     rules.rules()[0].description,
///     "multi single-quoted escape, interpolated, format, and template string"
/// );
/// assert_eq!(rules.rules()[63].description, "double-quoted plain string");
/// ```
#[must_use]
pub fn generate(options: &GrammarOptions) -> RuleSet {
    let combos = ordered_combinations(options.max_markers);
    let mut rules = Vec::with_capacity(combos.len() * 4);

    for markers in combos {
        for multiline in [true, false] {
            for quote in Quote::ALL {
                rules.push(build_rule(quote, multiline, markers, options));
            }
        }
    }

    RuleSet { rules }
}
