//! Error types for building, walking and (de)serializing pandoc documents.
//!
//! ## Error Categories
//!
//! - **Arity**: an element constructor called with the wrong number of arguments
//! - **Action**: a failure raised by filter code while the tree is walked
//! - **Malformed**: an element whose content does not have the shape a filter
//!   expects (detected and raised by the filter, never by the walk)
//! - **Missing metadata**: a document without an `unMeta` header
//! - **JSON / I/O**: decoding, encoding, reading or writing failures
//!
//! Every error is terminal for the operation in progress; there is no retry
//! or partial result.
//!
//! ## Examples
//!
//! ```rust
//! use pandoc_filter::{elements::HEADER, Error, Value};
//!
//! let err = HEADER.call([Value::from(1)]).unwrap_err();
//! assert!(matches!(err, Error::Arity { expected: 3, actual: 1, .. }));
//! assert_eq!(err.to_string(), "Header expects 3 arguments, but given 1");
//! ```

use crate::Tag;
use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A constructor was called with a number of arguments other than its arity
    #[error("{tag} expects {expected} arguments, but given {actual}")]
    Arity {
        tag: Tag,
        expected: usize,
        actual: usize,
    },

    /// Failure raised by filter code during a walk
    #[error("Action failed: {0}")]
    Action(String),

    /// Element content inconsistent with what a filter expects
    #[error("Malformed {tag} element: {msg}")]
    Malformed { tag: Tag, msg: String },

    /// Document header without readable metadata
    #[error("Missing document metadata: {0}")]
    MissingMeta(String),

    /// JSON decoding or encoding failure
    #[error("JSON error: {0}")]
    Json(String),

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    /// Creates an arity error for a constructor of `tag`.
    pub fn arity(tag: &Tag, expected: usize, actual: usize) -> Self {
        Error::Arity {
            tag: tag.clone(),
            expected,
            actual,
        }
    }

    /// Creates an action error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pandoc_filter::Error;
    ///
    /// let err = Error::action("unsupported target format");
    /// assert!(err.to_string().contains("unsupported target format"));
    /// ```
    pub fn action<T: fmt::Display>(msg: T) -> Self {
        Error::Action(msg.to_string())
    }

    /// Creates an error for an element whose content has an unexpected shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pandoc_filter::{Error, Tag};
    ///
    /// let err = Error::malformed(&Tag::Header, "expected [level, attr, inlines]");
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Malformed Header element: expected [level, attr, inlines]"
    /// );
    /// ```
    pub fn malformed<T: fmt::Display>(tag: &Tag, msg: T) -> Self {
        Error::Malformed {
            tag: tag.clone(),
            msg: msg.to_string(),
        }
    }

    pub fn missing_meta(msg: &str) -> Self {
        Error::MissingMeta(msg.to_string())
    }

    pub fn json<T: fmt::Display>(msg: T) -> Self {
        Error::Json(msg.to_string())
    }

    /// Creates an I/O error for reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Error::Io(err.to_string())
        } else {
            Error::Json(err.to_string())
        }
    }
}

impl From<std::convert::Infallible> for Error {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
