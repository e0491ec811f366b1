//! # pandoc_filter
//!
//! Write pandoc filters in Rust: walk the pandoc JSON AST and rewrite it node
//! by node.
//!
//! ## What is a pandoc filter?
//!
//! `pandoc --filter ./my-filter` serializes the parsed document to JSON, pipes
//! it to the filter, and reads the rewritten document back from the filter's
//! stdout before writing the output format. Every element of the document is
//! encoded as `{"t": tag, "c": content}`.
//!
//! ## Key Features
//!
//! - **Walk with splicing**: an [`Action`] keeps, replaces, deletes or expands
//!   every element of the tree ([`walk`], [`Rewrite`])
//! - **Arity-checked constructors**: [`elements`] has one [`Constructor`] per
//!   standard element; [`make_constructor`] builds more
//! - **Text extraction**: [`stringify`] drops formatting and keeps the words
//! - **Driver**: [`to_json_filter`] turns an action into a complete filter
//!
//! ## Quick Start
//!
//! Upper-case every word of the document:
//!
//! ```no_run
//! use pandoc_filter::{to_json_filter, Rewrite, Tag};
//!
//! fn main() -> pandoc_filter::Result<()> {
//!     to_json_filter(|tag, content, _format, _meta| {
//!         Ok(match (tag, content.as_str()) {
//!             (Tag::Str, Some(word)) => Rewrite::Literal(word.to_uppercase()),
//!             _ => Rewrite::Keep,
//!         })
//!     })
//! }
//! ```
//!
//! ### Working on documents in memory
//!
//! ```rust
//! use pandoc_filter::{elements::STR, from_str, to_string, Error, Rewrite, Tag, Value, ValueMap};
//!
//! let doc = from_str(r#"[{"unMeta":{}},[{"t":"Para","c":[{"t":"Image","c":[[],["a.png",""]]}]}]]"#)?;
//!
//! let mut strip_images = |tag: &Tag, _: &Value, _: &str, _: &ValueMap| {
//!     Ok::<_, Error>(match tag {
//!         Tag::Image => Rewrite::from(STR.call([Value::from("")])?),
//!         _ => Rewrite::Keep,
//!     })
//! };
//! let altered = doc.walk(&mut strip_images, "html")?;
//! assert_eq!(
//!     to_string(&altered)?,
//!     r#"[{"unMeta":{}},[{"t":"Para","c":[{"t":"Str","c":""}]}]]"#
//! );
//! # Ok::<(), Error>(())
//! ```
//!
//! ## Examples
//!
//! The `demos/` directory holds complete filters:
//!
//! - **`ucwords.rs`** - title-case every word
//! - **`fiction_publishers.rs`** - manuscript clean-up (no images, no links,
//!   title-cased section headings)
//! - **`leanpub.rs`** - Leanpub-style `W>` / `T>` / ... blocks for LaTeX and HTML
//!
//! Run one with: `pandoc -t json in.md | cargo run --example ucwords -- html`

pub mod document;
pub mod elements;
pub mod error;
mod filter;
mod json;
pub mod macros;
pub mod map;
pub mod options;
pub mod stringify;
pub mod tag;
pub mod value;
pub mod walk;

pub use document::Document;
pub use elements::{make_constructor, Constructor, STANDARD_ELEMENTS};
pub use error::{Error, Result};
pub use filter::{attributes, run_filter, to_json_filter, to_json_filter_with_options};
pub use map::ValueMap;
pub use options::FilterOptions;
pub use stringify::stringify;
pub use tag::Tag;
pub use value::{Node, Number, Value};
pub use walk::{walk, Action, Rewrite};

use serde::Serialize;
use std::io;

/// Serialize a document (or any value) to a JSON string.
///
/// `<`, `>` and `&` are hex-escaped; see [`FilterOptions::with_hex_escapes`].
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, &FilterOptions::default())
}

/// Serialize a document (or any value) to a pretty-printed JSON string.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_pretty<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, &FilterOptions::pretty())
}

/// Serialize a document (or any value) to a JSON string with custom options.
///
/// # Examples
///
/// ```rust
/// use pandoc_filter::{pandoc, to_string_with_options, FilterOptions};
///
/// let value = pandoc!({"t": "Str", "c": "x"});
/// let json = to_string_with_options(&value, &FilterOptions::pretty()).unwrap();
/// assert_eq!(json, "{\n  \"t\": \"Str\",\n  \"c\": \"x\"\n}");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: &FilterOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let mut out = Vec::with_capacity(128);
    json::write(&mut out, value, options)?;
    String::from_utf8(out).map_err(Error::json)
}

/// Serialize a document (or any value) as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, &FilterOptions::default())
}

/// Serialize a document (or any value) as JSON to a writer with custom options.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(writer: W, value: &T, options: &FilterOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    json::write(writer, value, options)
}

/// Parse a pandoc document from JSON text.
///
/// # Examples
///
/// ```rust
/// use pandoc_filter::{from_str, Error};
///
/// let doc = from_str(r#"[{"unMeta":{}},[]]"#).unwrap();
/// assert!(doc.meta.is_empty());
///
/// let err = from_str(r#"[{"meta":{}}]"#).unwrap_err();
/// assert!(matches!(err, Error::MissingMeta(_)));
/// ```
///
/// # Errors
///
/// Returns an error if the text is not JSON, or lacks the `unMeta` header.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<Document> {
    let value: Value = serde_json::from_str(s)?;
    Document::from_value(value)
}

/// Parse a pandoc document from JSON bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not valid JSON, or lack the `unMeta` header.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(v: &[u8]) -> Result<Document> {
    let value: Value = serde_json::from_slice(v)?;
    Document::from_value(value)
}

/// Parse a pandoc document from an I/O stream of JSON.
///
/// # Errors
///
/// Returns an error if reading fails, the input is not JSON, or it lacks the
/// `unMeta` header.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(reader: R) -> Result<Document>
where
    R: io::Read,
{
    let value: Value = serde_json::from_reader(io::BufReader::new(reader))?;
    Document::from_value(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[{"unMeta":{"title":{"t":"MetaInlines","c":[{"t":"Str","c":"T"}]}}},[{"t":"Header","c":[1,["t",[],[]],[{"t":"Str","c":"T"}]]},{"t":"Para","c":[{"t":"Str","c":"a"},{"t":"Space","c":[]},{"t":"Str","c":"b"}]}]]"#;

    #[test]
    fn test_document_roundtrip() {
        let doc = from_str(SAMPLE).unwrap();
        assert_eq!(to_string(&doc).unwrap(), SAMPLE);
    }

    #[test]
    fn test_from_slice_and_reader_agree() {
        let a = from_slice(SAMPLE.as_bytes()).unwrap();
        let b = from_reader(io::Cursor::new(SAMPLE)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_pretty_roundtrip() {
        let doc = from_str(SAMPLE).unwrap();
        let pretty = to_string_pretty(&doc).unwrap();
        assert!(pretty.contains('\n'));
        assert_eq!(from_str(&pretty).unwrap(), doc);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(from_str("[{"), Err(Error::Json(_))));
    }

    #[test]
    fn test_to_writer() {
        let doc = from_str(SAMPLE).unwrap();
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &doc).unwrap();
        assert_eq!(buffer, SAMPLE.as_bytes());
    }
}
