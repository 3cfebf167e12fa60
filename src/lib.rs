//! # string_grammar
//!
//! Generates the TextMate rules for every quoted string literal variant of a
//! language and renders them as a YAML grammar fragment.
//!
//! ## What gets generated?
//!
//! A string literal variant is a combination of:
//!
//! - a **quote**: `'` or `"`
//! - **single-line** or **multi-line** (three or more quotes)
//! - a **marker set**: any subset of the prefix characters `\` (escape),
//!   `$` (interpolated), `%` (format) and `#` (template)
//!
//! Each variant becomes one [`RuleDescriptor`] with `begin`/`end` regexes,
//! capture styles and the nested patterns its markers enable. With all four
//! markers that is 16 marker sets × 2 line modes × 2 quotes = 64 rules.
//!
//! ## Quick Start
//!
//! ```rust
//! use string_grammar::{generate, to_string, GrammarOptions};
//!
//! let rules = generate(&GrammarOptions::new());
//! let yaml = to_string(&rules).unwrap();
//!
//! assert!(yaml.starts_with("strings:\n  patterns:\n    - comment: multi single-quoted"));
//! ```
//!
//! ## The Serializer
//!
//! Rendering goes through a small, purpose-built writer rather than a general
//! YAML library. Any `Serialize` type is first converted to a [`Value`], then
//! laid out in block style with minimal quoting:
//!
//! ```rust
//! use string_grammar::{to_string, value};
//!
//! let doc = value!({"a": 1, "b": [1, 2, 3]});
//! assert_eq!(to_string(&doc).unwrap(), "a: 1\nb:\n  - 1\n  - 2\n  - 3");
//! ```
//!
//! See [`ScalarStyle`] for the quoting rules.

pub mod combos;
pub mod error;
pub mod grammar;
pub mod macros;
pub mod map;
pub mod marker;
pub mod options;
pub mod pattern;
pub mod rule;
pub mod scalar;
pub mod ser;
pub mod value;

pub use error::{Error, Result};
pub use grammar::{generate, RuleSet};
pub use map::Mapping;
pub use marker::{Marker, MarkerSet};
pub use options::{EmitOptions, GrammarOptions};
pub use rule::{build_rule, Capture, Include, Quote, RuleDescriptor};
pub use scalar::ScalarStyle;
pub use ser::{Serializer, ValueSerializer};
pub use value::{Number, Value};

use serde::Serialize;
use std::io;
use std::path::Path;

/// Render any `T: Serialize` with the default [`EmitOptions`].
///
/// # Errors
///
/// Returns [`Error::UnsupportedValue`] if `value` contains something the
/// value tree cannot express.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, EmitOptions::default())
}

/// Render any `T: Serialize` with custom options.
///
/// # Examples
///
/// ```rust
/// use string_grammar::{to_string_with_options, value, EmitOptions};
///
/// let doc = value!({"outer": {"inner": true}});
/// let text = to_string_with_options(&doc, EmitOptions::new().with_indent(4)).unwrap();
/// assert_eq!(text, "outer:\n    inner: true");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be converted to a [`Value`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: EmitOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let tree = to_value(value)?;
    let mut serializer = Serializer::new(options);
    serializer.serialize_value(&tree)?;
    Ok(serializer.into_inner())
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// # Examples
///
/// ```rust
/// use string_grammar::{build_rule, to_value, GrammarOptions, MarkerSet, Quote};
///
/// let rule = build_rule(Quote::Single, false, MarkerSet::empty(), &GrammarOptions::new());
/// let value = to_value(&rule).unwrap();
///
/// let keys: Vec<_> = value.as_mapping().unwrap().keys().cloned().collect();
/// assert_eq!(keys, ["comment", "begin", "contentName", "end", "captures", "patterns"]);
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedValue`] for map keys that are not strings,
/// integers, booleans or chars, and for enum variants carrying data.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Render any `T: Serialize` into a writer.
///
/// # Errors
///
/// Returns an error if rendering fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(mut writer: W, value: &T, options: EmitOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string_with_options(value, options)?;
    writer.write_all(text.as_bytes())?;
    Ok(())
}

/// Overwrite the file at `path` with `text`.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be written.
pub fn write_file<P: AsRef<Path>>(path: P, text: &str) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, text).map_err(|e| Error::io(&format!("{}: {}", path.display(), e)))
}
