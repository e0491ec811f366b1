//! Running an action as a pandoc JSON filter.
//!
//! Pandoc pipes the document to the filter's stdin as JSON and passes the
//! target format as the first argument; the filter writes the rewritten
//! document to stdout. [`to_json_filter`] does exactly that for an action,
//! [`run_filter`] does it on any reader and writer.
//!
//! ```no_run
//! use pandoc_filter::{to_json_filter, Rewrite, Tag};
//!
//! fn main() -> pandoc_filter::Result<()> {
//!     // Drop every footnote.
//!     to_json_filter(|tag, _content, _format, _meta| {
//!         Ok(match tag {
//!             Tag::Note => Rewrite::Splice(vec![]),
//!             _ => Rewrite::Keep,
//!         })
//!     })
//! }
//! ```

use crate::walk::{Action, Rewrite};
use crate::{Error, FilterOptions, Result, Tag, Value, ValueMap};
use std::io::{self, Read, Write};
use tracing::debug;

/// Reads a document from `reader`, rewrites it with `action` and writes it to
/// `writer`, followed by a newline.
///
/// The target format is `options.format`, or `""` when unset. Nothing is
/// written if reading or the action fails.
///
/// # Errors
///
/// Returns an error if the input is not a pandoc JSON document, if the action
/// fails, or if writing fails.
pub fn run_filter<R, W, A>(
    reader: R,
    mut writer: W,
    action: &mut A,
    options: &FilterOptions,
) -> Result<()>
where
    R: Read,
    W: Write,
    A: Action + ?Sized,
    Error: From<A::Error>,
{
    let doc = crate::from_reader(reader)?;
    let format = options.format.as_deref().unwrap_or("");
    debug!(
        format,
        meta_keys = doc.meta.len(),
        body_len = doc.body.len(),
        "read pandoc document"
    );

    let altered = doc.walk(action, format)?;
    debug!(body_len = altered.body.len(), "document rewritten");

    crate::json::write(&mut writer, &altered, options)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Runs `action` as a filter on stdin and stdout, taking the target format
/// from the first command-line argument.
///
/// # Errors
///
/// See [`run_filter`].
pub fn to_json_filter<F>(action: F) -> Result<()>
where
    F: FnMut(&Tag, &Value, &str, &ValueMap) -> Result<Rewrite>,
{
    to_json_filter_with_options(action, &FilterOptions::default())
}

/// Like [`to_json_filter`], with output options. A format set in `options`
/// takes precedence over the command line.
pub fn to_json_filter_with_options<F>(mut action: F, options: &FilterOptions) -> Result<()>
where
    F: FnMut(&Tag, &Value, &str, &ValueMap) -> Result<Rewrite>,
{
    let format = options.resolve_format(std::env::args().skip(1));
    let options = options.clone().with_format(format);
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_filter(stdin.lock(), stdout.lock(), &mut action, &options)
}

/// Builds a pandoc attribute triple `[id, classes, key-value pairs]` from a
/// map.
///
/// `id` defaults to `""` and `classes` to `[]`; every other entry becomes a
/// `[key, value]` pair, in map order.
///
/// # Examples
///
/// ```rust
/// use pandoc_filter::{attributes, pandoc};
///
/// let attrs = pandoc!({"id": "fig-1", "width": "50%", "classes": ["wide"]});
/// let triple = attributes(attrs.as_object().unwrap());
/// assert_eq!(triple, pandoc!(["fig-1", ["wide"], [["width", "50%"]]]));
/// ```
#[must_use]
pub fn attributes(attrs: &ValueMap) -> Value {
    let ident = attrs.get("id").cloned().unwrap_or_else(|| Value::from(""));
    let classes = attrs
        .get("classes")
        .cloned()
        .unwrap_or_else(|| Value::Array(Vec::new()));
    let keyvals = attrs
        .iter()
        .filter(|(key, _)| key.as_str() != "id" && key.as_str() != "classes")
        .map(|(key, value)| Value::Array(vec![Value::from(key.as_str()), value.clone()]))
        .collect();
    Value::Array(vec![ident, classes, Value::Array(keyvals)])
}
