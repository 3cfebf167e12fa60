//! Error types for rule generation and rendering.
//!
//! Generation itself is total: every (quote, multiline, marker set) triple
//! produces a descriptor. Errors only arise at the edges of the crate:
//!
//! - **Unsupported values**: the serde bridge met something the [`Value`]
//!   tree cannot express (a struct used as a map key, an enum variant that
//!   carries data)
//! - **I/O errors**: writing the rendered document failed
//!
//! ## Examples
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use string_grammar::{to_string, Error};
//!
//! let mut keyed_by_pair = BTreeMap::new();
//! keyed_by_pair.insert((1, 2), "point");
//!
//! let err = to_string(&keyed_by_pair).unwrap_err();
//! assert!(matches!(err, Error::UnsupportedValue(_)));
//! ```
//!
//! [`Value`]: crate::Value

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised while building or rendering a document.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error during writing
    #[error("IO error: {0}")]
    Io(String),

    /// The input held a value kind the serializer cannot render
    #[error("unsupported value kind: {0}")]
    UnsupportedValue(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an unsupported value error naming the offending kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use string_grammar::Error;
    ///
    /// let err = Error::unsupported_value("tuple variant `Shape::Line`");
    /// assert_eq!(
    ///     err.to_string(),
    ///     "unsupported value kind: tuple variant `Shape::Line`"
    /// );
    /// ```
    pub fn unsupported_value(kind: &str) -> Self {
        Error::UnsupportedValue(kind.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for file writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
