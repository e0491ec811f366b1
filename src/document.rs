//! Whole pandoc documents.
//!
//! A document is a JSON array: its first element is a header object whose
//! `unMeta` field holds the metadata, and the remaining elements are the body
//! (with pandoc 1.x the body is a single array of blocks).
//!
//! ```rust
//! use pandoc_filter::Document;
//!
//! let doc: Document = pandoc_filter::from_str(
//!     r#"[{"unMeta":{}},[{"t":"Para","c":[{"t":"Str","c":"Hi"}]}]]"#,
//! ).unwrap();
//! assert!(doc.meta.is_empty());
//! assert_eq!(doc.body.len(), 1);
//! ```

use crate::walk::{walk_map, walk_seq, Action};
use crate::{Error, Result, Value, ValueMap};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The header key holding document metadata.
pub const META_KEY: &str = "unMeta";

/// A parsed pandoc document.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Document {
    /// Document metadata (the `unMeta` object).
    pub meta: ValueMap,
    /// Every element after the header, in order.
    pub body: Vec<Value>,
    /// Header keys besides `unMeta`, kept as found and written after it.
    pub header: ValueMap,
}

impl Document {
    #[must_use]
    pub fn new(meta: ValueMap, body: Vec<Value>) -> Self {
        Document {
            meta,
            body,
            header: ValueMap::new(),
        }
    }

    /// Splits a decoded JSON array into header metadata and body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingMeta`] if `value` is not an array, or its first
    /// element is not an object with an `unMeta` object.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Array(items) = value else {
            return Err(Error::missing_meta("document is not a JSON array"));
        };
        let mut items = items.into_iter();
        let (meta, header) = match items.next() {
            Some(Value::Object(mut header)) => match header.remove(META_KEY) {
                Some(Value::Object(meta)) => (meta, header),
                Some(_) => return Err(Error::missing_meta("`unMeta` is not an object")),
                None => return Err(Error::missing_meta("header has no `unMeta` field")),
            },
            Some(_) => return Err(Error::missing_meta("first element is not a header object")),
            None => return Err(Error::missing_meta("document is empty")),
        };
        Ok(Document {
            meta,
            body: items.collect(),
            header,
        })
    }

    /// Rebuilds the JSON array form.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::from(self.clone())
    }

    fn header_object(&self) -> ValueMap {
        let mut header = ValueMap::with_capacity(self.header.len() + 1);
        header.insert(META_KEY.to_string(), Value::Object(self.meta.clone()));
        for (key, value) in &self.header {
            header.insert(key.clone(), value.clone());
        }
        header
    }

    /// Walks metadata, the other header keys and the body with `action`,
    /// returning the rewritten document.
    ///
    /// The action always receives the original metadata, even while the
    /// metadata itself is being rewritten.
    pub fn walk<A>(&self, action: &mut A, format: &str) -> std::result::Result<Self, A::Error>
    where
        A: Action + ?Sized,
    {
        let meta = walk_map(&self.meta, action, format, &self.meta)?;
        let header = walk_map(&self.header, action, format, &self.meta)?;
        let body = walk_seq(&self.body, action, format, &self.meta)?;
        Ok(Document { meta, body, header })
    }
}

impl TryFrom<Value> for Document {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        Document::from_value(value)
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        let header = doc.header_object();
        let mut items = Vec::with_capacity(doc.body.len() + 1);
        items.push(Value::Object(header));
        items.extend(doc.body);
        Value::Array(items)
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.body.len() + 1))?;
        seq.serialize_element(&Value::Object(self.header_object()))?;
        for element in &self.body {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Document::from_value(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rewrite, Tag};
    use std::convert::Infallible;

    fn parse(json: &str) -> Result<Document> {
        crate::from_str(json)
    }

    #[test]
    fn test_missing_meta_rejected() {
        for json in [
            r#"{"blocks":[]}"#,
            "[]",
            "[1]",
            r#"[{"meta":{}}]"#,
            r#"[{"unMeta":[]}]"#,
        ] {
            assert!(parse(json).is_err(), "{json}");
        }
    }

    #[test]
    fn test_value_roundtrip() {
        let doc = parse(r#"[{"unMeta":{"a":{"t":"MetaBool","c":true}}},[]]"#).unwrap();
        assert_eq!(Document::from_value(doc.to_value()).unwrap(), doc);
        assert_eq!(Value::from(doc.clone()), doc.to_value());
    }

    #[test]
    fn test_other_header_keys_kept() {
        let json = r#"[{"unMeta":{},"source":[{"t":"Str","c":"a"}]},[]]"#;
        let doc = parse(json).unwrap();
        assert_eq!(doc.header.len(), 1);
        assert_eq!(crate::to_string(&doc).unwrap(), json);

        let mut upper = |_: &Tag, content: &Value, _: &str, _: &ValueMap| {
            Ok::<_, Infallible>(content.as_str().map(str::to_uppercase).into())
        };
        let out = doc.walk(&mut upper, "").unwrap();
        assert_eq!(
            crate::to_string(&out).unwrap(),
            r#"[{"unMeta":{},"source":[{"t":"Str","c":"A"}]},[]]"#
        );
    }

    #[test]
    fn test_walk_rewrites_meta_with_original_meta() {
        let doc = parse(
            r#"[{"unMeta":{"title":{"t":"MetaInlines","c":[{"t":"Str","c":"old"}]}}},[]]"#,
        )
        .unwrap();
        let mut action = |tag: &Tag, _: &Value, _: &str, meta: &ValueMap| {
            assert!(meta.contains_key("title"));
            Ok::<_, Infallible>(match tag {
                Tag::Str => Rewrite::Literal("new".into()),
                _ => Rewrite::Keep,
            })
        };
        let out = doc.walk(&mut action, "").unwrap();
        let expected = parse(
            r#"[{"unMeta":{"title":{"t":"MetaInlines","c":[{"t":"Str","c":"new"}]}}},[]]"#,
        )
        .unwrap();
        assert_eq!(out, expected);
        assert_ne!(out, doc);
    }
}
