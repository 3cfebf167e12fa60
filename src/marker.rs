//! The four marker categories a string literal can opt into.
//!
//! A marker is the prefix character written before the opening quote:
//!
//! | marker  | name           | enables                              |
//! |---------|----------------|--------------------------------------|
//! | `\`     | `escape`       | doubled-character escapes            |
//! | `$`     | `interpolated` | `$`-style embedded expressions       |
//! | `%`     | `format`       | `%`-style format fields              |
//! | `#`     | `template`     | `#`-style template placeholders      |
//!
//! [`Marker::ALL`] fixes the canonical order. Every place that walks markers
//! goes through it, so the generated document is identical from run to run.

use crate::rule::Quote;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Marker {
    Escape,
    Interpolated,
    Format,
    Template,
}

impl Marker {
    /// All markers, in canonical order.
    pub const ALL: [Marker; 4] = [
        Marker::Escape,
        Marker::Interpolated,
        Marker::Format,
        Marker::Template,
    ];

    /// The literal prefix character.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Marker::Escape => '\\',
            Marker::Interpolated => '$',
            Marker::Format => '%',
            Marker::Template => '#',
        }
    }

    /// Display name used in rule descriptions.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Marker::Escape => "escape",
            Marker::Interpolated => "interpolated",
            Marker::Format => "format",
            Marker::Template => "template",
        }
    }

    /// Repository rule this marker pulls into a string's nested patterns.
    #[must_use]
    pub const fn include(self) -> &'static str {
        match self {
            Marker::Escape => "#string-escapes",
            Marker::Interpolated => "#embedded-expression",
            Marker::Format => "#embedded-format",
            Marker::Template => "#embedded-placeholder",
        }
    }

    /// The two-character sequence that stands for this marker's literal form.
    ///
    /// For the escape marker this is the doubled quote, which is how a
    /// verbatim string spells its own delimiter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use string_grammar::{Marker, Quote};
    ///
    /// assert_eq!(Marker::Format.doubled(Quote::Single), "%%");
    /// assert_eq!(Marker::Escape.doubled(Quote::Double), "\"\"");
    /// ```
    #[must_use]
    pub fn doubled(self, quote: Quote) -> String {
        let c = match self {
            Marker::Escape => quote.as_char(),
            _ => self.symbol(),
        };
        [c, c].iter().collect()
    }

    #[must_use]
    pub fn from_symbol(c: char) -> Option<Marker> {
        Marker::ALL.into_iter().find(|m| m.symbol() == c)
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A duplicate-free set of markers, always iterated in canonical order.
///
/// # Examples
///
/// ```rust
/// use string_grammar::{Marker, MarkerSet};
///
/// let set: MarkerSet = [Marker::Template, Marker::Escape].into_iter().collect();
/// assert_eq!(set.iter().collect::<Vec<_>>(), vec![Marker::Escape, Marker::Template]);
/// assert_eq!(set.to_string(), "\\#");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MarkerSet(u8);

impl MarkerSet {
    #[must_use]
    pub const fn empty() -> Self {
        MarkerSet(0)
    }

    #[must_use]
    pub const fn full() -> Self {
        MarkerSet(0b1111)
    }

    pub fn insert(&mut self, marker: Marker) {
        self.0 |= marker.bit();
    }

    #[must_use]
    pub const fn contains(self, marker: Marker) -> bool {
        self.0 & marker.bit() != 0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Markers in canonical order, regardless of insertion order.
    pub fn iter(self) -> impl Iterator<Item = Marker> {
        Marker::ALL.into_iter().filter(move |m| self.contains(*m))
    }

    /// Parses a prefix such as `"\\$"`. Returns `None` on unknown characters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use string_grammar::{Marker, MarkerSet};
    ///
    /// let set = MarkerSet::parse("%$").unwrap();
    /// assert!(set.contains(Marker::Format) && set.contains(Marker::Interpolated));
    /// assert!(MarkerSet::parse("@").is_none());
    /// ```
    #[must_use]
    pub fn parse(symbols: &str) -> Option<Self> {
        symbols
            .chars()
            .map(Marker::from_symbol)
            .collect::<Option<Vec<_>>>()
            .map(|markers| markers.into_iter().collect())
    }
}

impl FromIterator<Marker> for MarkerSet {
    fn from_iter<T: IntoIterator<Item = Marker>>(iter: T) -> Self {
        let mut set = MarkerSet::empty();
        for marker in iter {
            set.insert(marker);
        }
        set
    }
}

impl fmt::Display for MarkerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for marker in self.iter() {
            write!(f, "{}", marker.symbol())?;
        }
        Ok(())
    }
}
