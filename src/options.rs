//! Configuration for running filters and writing documents.
//!
//! ## Examples
//!
//! ```rust
//! use pandoc_filter::FilterOptions;
//!
//! // Defaults: no fixed format, compact output, `<>&` hex-escaped
//! let options = FilterOptions::new();
//! assert!(options.format.is_none());
//! assert!(options.hex_escapes);
//!
//! // Fixed target format, human-readable output
//! let options = FilterOptions::pretty().with_format("latex");
//! assert_eq!(options.format.as_deref(), Some("latex"));
//! ```

/// Options for [`run_filter`](crate::run_filter) and
/// [`to_string_with_options`](crate::to_string_with_options).
#[derive(Clone, Debug, PartialEq)]
pub struct FilterOptions {
    /// Target format handed to the action. When `None`,
    /// [`to_json_filter`](crate::to_json_filter) reads the first command-line
    /// argument and [`run_filter`](crate::run_filter) uses `""`.
    pub format: Option<String>,
    /// Write `<`, `>` and `&` as `\u003C`, `\u003E` and `\u0026`.
    pub hex_escapes: bool,
    pub pretty: bool,
    /// Spaces per level in pretty output.
    pub indent: usize,
}

impl Default for FilterOptions {
    fn default() -> Self {
        FilterOptions {
            format: None,
            hex_escapes: true,
            pretty: false,
            indent: 2,
        }
    }
}

impl FilterOptions {
    /// Creates default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for pretty-printed output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pandoc_filter::FilterOptions;
    ///
    /// let options = FilterOptions::pretty();
    /// assert!(options.pretty);
    /// ```
    #[must_use]
    pub fn pretty() -> Self {
        FilterOptions {
            pretty: true,
            ..Default::default()
        }
    }

    /// Sets the target format instead of reading it from the command line.
    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Turns hex escaping of `<`, `>` and `&` on or off.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pandoc_filter::{to_string_with_options, Document, FilterOptions, Value};
    ///
    /// let doc = Document::new(Default::default(), vec![Value::from("a<b")]);
    /// let plain = to_string_with_options(&doc, &FilterOptions::new().with_hex_escapes(false)).unwrap();
    /// assert_eq!(plain, r#"[{"unMeta":{}},"a<b"]"#);
    /// ```
    #[must_use]
    pub fn with_hex_escapes(mut self, hex_escapes: bool) -> Self {
        self.hex_escapes = hex_escapes;
        self
    }

    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Sets the indentation size. Only affects pretty-printed output.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// The format to hand to the action: the configured one, else the first
    /// element of `args`, else `""`.
    #[must_use]
    pub fn resolve_format<I>(&self, mut args: I) -> String
    where
        I: Iterator<Item = String>,
    {
        match &self.format {
            Some(format) => format.clone(),
            None => args.next().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_format() {
        let args = || vec!["html".to_string(), "extra".to_string()].into_iter();
        assert_eq!(FilterOptions::new().resolve_format(args()), "html");
        assert_eq!(FilterOptions::new().resolve_format(std::iter::empty()), "");
        assert_eq!(
            FilterOptions::new().with_format("epub").resolve_format(args()),
            "epub"
        );
    }

    #[test]
    fn test_builder() {
        let options = FilterOptions::new()
            .with_pretty(true)
            .with_indent(4)
            .with_hex_escapes(false);
        assert!(options.pretty);
        assert_eq!(options.indent, 4);
        assert!(!options.hex_escapes);
    }
}
