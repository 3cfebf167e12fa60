//! Configuration for generation and rendering.
//!
//! - [`EmitOptions`]: how the serializer lays out text
//! - [`GrammarOptions`]: which rules the generator produces and how their
//!   scopes are named
//!
//! ## Examples
//!
//! ```rust
//! use string_grammar::{generate, to_string_with_options, EmitOptions, GrammarOptions};
//!
//! let rules = generate(&GrammarOptions::new().with_language("demo").with_max_markers(1));
//! let yaml = to_string_with_options(&rules, EmitOptions::new().with_trailing_newline(true)).unwrap();
//! assert!(yaml.ends_with('\n'));
//! assert!(yaml.contains("string.quoted.double.demo"));
//! ```

use crate::marker::Marker;

/// Layout options for the structural serializer.
///
/// # Examples
///
/// ```rust
/// use string_grammar::EmitOptions;
///
/// let options = EmitOptions::new();
/// assert_eq!(options.indent, 2);
/// assert!(!options.trailing_newline);
///
/// let options = EmitOptions::new().with_indent(4);
/// assert_eq!(options.indent, 4);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct EmitOptions {
    /// Spaces per nesting level.
    pub indent: usize,
    /// Append a final `\n` to the document.
    pub trailing_newline: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        EmitOptions {
            indent: 2,
            trailing_newline: false,
        }
    }
}

impl EmitOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation size (number of spaces per level).
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    #[must_use]
    pub fn with_trailing_newline(mut self, trailing_newline: bool) -> Self {
        self.trailing_newline = trailing_newline;
        self
    }
}

/// Options for the rule set generator.
///
/// `language` is the suffix appended to every scope name
/// (`string.quoted.single.<language>`). `max_markers` caps how many markers a
/// single rule may combine; values above the number of markers behave as if
/// uncapped.
///
/// # Examples
///
/// ```rust
/// use string_grammar::GrammarOptions;
///
/// let options = GrammarOptions::new();
/// assert_eq!(options.language, "hitori");
/// assert_eq!(options.max_markers, 4);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GrammarOptions {
    pub language: String,
    pub max_markers: usize,
}

impl Default for GrammarOptions {
    fn default() -> Self {
        GrammarOptions {
            language: "hitori".to_string(),
            max_markers: Marker::ALL.len(),
        }
    }
}

impl GrammarOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    #[must_use]
    pub fn with_max_markers(mut self, max_markers: usize) -> Self {
        self.max_markers = max_markers;
        self
    }

    /// Builds `<prefix>.<language>`.
    pub(crate) fn scope(&self, prefix: &str) -> String {
        format!("{}.{}", prefix, self.language)
    }
}
