//! Dynamic value representation for the pandoc JSON AST.
//!
//! This module provides [`Value`], which represents any JSON value found in a
//! pandoc document, and [`Node`], the tagged element (`{"t": .., "c": ..}`)
//! every block and inline is encoded as.
//!
//! ## Core Types
//!
//! - [`Value`]: null, bool, number, string, array, untagged object, or node
//! - [`Node`]: a [`Tag`] plus its content
//! - [`Number`]: integer or float, kept apart so integers re-encode without a
//!   fractional part
//!
//! ## Tagged objects
//!
//! A JSON object is decoded as [`Value::Node`] when it has a string `t`.
//! Everything else stays a [`Value::Object`]. Keys other than `t` and `c` are
//! kept on the node and written back after them. A node without a `c` key
//! reads as [`Value::Null`] content and encodes back without one, while an
//! explicit `"c": null` is written back as is.
//!
//! ```rust
//! use pandoc_filter::{Tag, Value};
//!
//! let v: Value = serde_json::from_str(r#"{"t":"Str","c":"hello"}"#).unwrap();
//! let node = v.as_node().unwrap();
//! assert_eq!(node.tag, Tag::Str);
//! assert_eq!(node.content().as_str(), Some("hello"));
//!
//! let untagged: Value = serde_json::from_str(r#"{"unMeta":{}}"#).unwrap();
//! assert!(untagged.is_object());
//! ```

use crate::{Tag, ValueMap};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed JSON value from a pandoc document.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(ValueMap),
    Node(Box<Node>),
}

/// A tagged element of the document tree.
///
/// The shape of `content` depends on the tag: a string for `Str`, a list of
/// inlines for `Para`, `[level, attr, inlines]` for `Header`, and so on.
/// Nothing here checks that shape; see [`Constructor`](crate::Constructor)
/// for arity-checked construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub tag: Tag,
    /// `None` when the element has no `c` key.
    pub(crate) content: Option<Value>,
    /// Keys besides `t` and `c`, in input order.
    pub(crate) extra: ValueMap,
}

static NO_CONTENT: Value = Value::Null;

impl Node {
    /// Creates a node from a tag and its content.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pandoc_filter::{Node, Tag, Value};
    ///
    /// let node = Node::new(Tag::Str, "word");
    /// assert_eq!(node.content(), &Value::from("word"));
    /// ```
    #[must_use]
    pub fn new(tag: impl Into<Tag>, content: impl Into<Value>) -> Self {
        Node {
            tag: tag.into(),
            content: Some(content.into()),
            extra: ValueMap::new(),
        }
    }

    /// Creates a node without a `c` key, as pandoc writes `Space` and other
    /// content-free elements.
    ///
    /// ```rust
    /// use pandoc_filter::{Node, Tag, Value};
    ///
    /// let space = Node::bare(Tag::Space);
    /// assert!(!space.has_content());
    /// assert_eq!(space.content(), &Value::Null);
    /// assert_eq!(pandoc_filter::to_string(&space).unwrap(), r#"{"t":"Space"}"#);
    /// ```
    #[must_use]
    pub fn bare(tag: impl Into<Tag>) -> Self {
        Node {
            tag: tag.into(),
            content: None,
            extra: ValueMap::new(),
        }
    }

    /// The element's content, [`Value::Null`] when it has none.
    #[inline]
    #[must_use]
    pub fn content(&self) -> &Value {
        self.content.as_ref().unwrap_or(&NO_CONTENT)
    }

    /// Returns `true` if the element has a `c` key, even a `null` one.
    #[inline]
    #[must_use]
    pub fn has_content(&self) -> bool {
        self.content.is_some()
    }

    #[must_use]
    pub fn into_content(self) -> Value {
        self.content.unwrap_or_default()
    }

    /// Keys of the element object other than `t` and `c`.
    #[inline]
    #[must_use]
    pub fn extra(&self) -> &ValueMap {
        &self.extra
    }

    pub fn extra_mut(&mut self) -> &mut ValueMap {
        &mut self.extra
    }

    /// Returns `true` if the node carries the given tag.
    #[inline]
    #[must_use]
    pub fn is(&self, tag: &Tag) -> bool {
        self.tag == *tag
    }

    /// Returns a copy of this node with `content` replaced. Extra keys are
    /// kept.
    #[must_use]
    pub fn with_content(&self, content: impl Into<Value>) -> Self {
        Node {
            tag: self.tag.clone(),
            content: Some(content.into()),
            extra: self.extra.clone(),
        }
    }
}

/// A JSON number.
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Returns `true` if this is an integer value.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Converts this number to an `i64` if it has no fractional part.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pandoc_filter::Number;
    ///
    /// assert_eq!(Number::Integer(2).as_i64(), Some(2));
    /// assert_eq!(Number::Float(2.0).as_i64(), Some(2));
    /// assert_eq!(Number::Float(0.5).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl Value {
    /// Builds a value from a decoded JSON object, recognising the tagged
    /// element shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pandoc_filter::{Tag, Value, ValueMap};
    ///
    /// let mut map = ValueMap::new();
    /// map.insert("t".to_string(), Value::from("Space"));
    /// assert_eq!(Value::from_map(map).tag(), Some(&Tag::Space));
    /// ```
    #[must_use]
    pub fn from_map(mut map: ValueMap) -> Self {
        let tag = match map.get("t") {
            Some(Value::String(t)) => Tag::from(t.as_str()),
            _ => return Value::Object(map),
        };
        map.remove("t");
        let content = map.remove("c");
        Value::from(Node {
            tag,
            content,
            extra: map,
        })
    }

    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_node(&self) -> bool {
        matches!(self, Value::Node(_))
    }

    /// Returns `true` for null, booleans, numbers and strings.
    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(
            self,
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_)
        )
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pandoc_filter::Value;
    ///
    /// assert_eq!(Value::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Value::from(42).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&ValueMap> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Value::Node(node) => Some(node.as_ref()),
            _ => None,
        }
    }

    /// Returns the tag if the value is a node.
    #[inline]
    #[must_use]
    pub fn tag(&self) -> Option<&Tag> {
        self.as_node().map(|node| &node.tag)
    }

    /// Returns `true` if the value is a node carrying `tag`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pandoc_filter::{Node, Tag, Value};
    ///
    /// let space = Value::from(Node::new(Tag::Space, Vec::<Value>::new()));
    /// assert!(space.is_tagged(&Tag::Space));
    /// assert!(!space.is_tagged(&Tag::Str));
    /// assert!(!Value::from("Space").is_tagged(&Tag::Space));
    /// ```
    #[inline]
    #[must_use]
    pub fn is_tagged(&self, tag: &Tag) -> bool {
        self.tag() == Some(tag)
    }

    /// Element `index` of an array value.
    #[inline]
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.as_array().and_then(|arr| arr.get(index))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => f.write_str(s),
            _ => {
                let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;
        let len = 1 + usize::from(self.has_content()) + self.extra.len();
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("t", &self.tag)?;
        if let Some(content) = &self.content {
            map.serialize_entry("c", content)?;
        }
        for (k, v) in &self.extra {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            Value::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
            Value::Node(node) => node.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any JSON value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::Integer(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                if value <= i64::MAX as u64 {
                    Ok(Value::Number(Number::Integer(value as i64)))
                } else {
                    Ok(Value::Number(Number::Float(value as f64)))
                }
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::Float(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(Value::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = ValueMap::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(Value::from_map(values))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(crate::Error::action(format!(
                "expected string, found {}",
                value
            ))),
        }
    }
}

impl TryFrom<Value> for Node {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Node(node) => Ok(*node),
            _ => Err(crate::Error::action(format!(
                "expected tagged element, found {}",
                value
            ))),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(Number::Integer(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::Float(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<ValueMap> for Value {
    fn from(value: ValueMap) -> Self {
        Value::Object(value)
    }
}

impl From<Node> for Value {
    fn from(value: Node) -> Self {
        Value::Node(Box::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Value {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_node_shape_detection() {
        assert!(parse(r#"{"t":"Para","c":[]}"#).is_node());
        assert!(parse(r#"{"c":[],"t":"Para"}"#).is_node());
        assert!(parse(r#"{"t":"Space"}"#).is_node());
        assert!(parse(r#"{"t":"Para","c":[],"x":0}"#).is_node());
        assert!(parse(r#"{"t":1,"c":[]}"#).is_object());
        assert!(parse(r#"{"t":null}"#).is_object());
        assert!(parse(r#"{"c":[]}"#).is_object());
    }

    #[test]
    fn test_node_without_content_roundtrip() {
        let value = parse(r#"{"t":"Space"}"#);
        let node = value.as_node().unwrap();
        assert!(!node.has_content());
        assert_eq!(node.content(), &Value::Null);
        assert_eq!(value, Value::from(Node::bare(Tag::Space)));
        assert_eq!(serde_json::to_string(&value).unwrap(), r#"{"t":"Space"}"#);
    }

    #[test]
    fn test_explicit_null_content_roundtrip() {
        let json = r#"{"t":"Custom","c":null}"#;
        let value = parse(json);
        assert!(value.as_node().unwrap().has_content());
        assert_ne!(value, parse(r#"{"t":"Custom"}"#));
        assert_eq!(serde_json::to_string(&value).unwrap(), json);
    }

    #[test]
    fn test_extra_keys_kept() {
        let json = r#"{"t":"Str","c":"x","k":1}"#;
        let value = parse(json);
        let node = value.as_node().unwrap();
        assert_eq!(node.tag, Tag::Str);
        assert_eq!(node.content(), &Value::from("x"));
        assert_eq!(node.extra().get("k"), Some(&Value::from(1)));
        assert_eq!(serde_json::to_string(&value).unwrap(), json);

        let changed = node.with_content("y");
        assert_eq!(changed.extra().get("k"), Some(&Value::from(1)));
    }

    #[test]
    fn test_node_content_roundtrip() {
        let json = r#"{"t":"Header","c":[2,["intro",[],[]],[{"t":"Str","c":"Intro"}]]}"#;
        let value = parse(json);
        assert_eq!(value.tag(), Some(&Tag::Header));
        assert_eq!(serde_json::to_string(&value).unwrap(), json);
    }

    #[test]
    fn test_numbers_keep_kind() {
        assert_eq!(parse("3"), Value::Number(Number::Integer(3)));
        assert_eq!(parse("0.5"), Value::Number(Number::Float(0.5)));
        assert_eq!(serde_json::to_string(&parse("3")).unwrap(), "3");
    }

    #[test]
    fn test_object_key_order_kept() {
        let json = r#"{"zeta":1,"alpha":2,"mid":3}"#;
        assert_eq!(serde_json::to_string(&parse(json)).unwrap(), json);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from("plain").to_string(), "plain");
        assert_eq!(Value::from(7).to_string(), "7");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(
            Value::from(Node::new(Tag::Str, "x")).to_string(),
            r#"{"t":"Str","c":"x"}"#
        );
    }

    #[test]
    fn test_tryfrom() {
        assert_eq!(String::try_from(Value::from("s")).unwrap(), "s");
        assert!(String::try_from(Value::from(1)).is_err());
        let node = Node::try_from(parse(r#"{"t":"Str","c":"a"}"#)).unwrap();
        assert!(node.is(&Tag::Str));
        assert!(Node::try_from(Value::Null).is_err());
    }
}
