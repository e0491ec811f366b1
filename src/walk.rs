//! The tree walk.
//!
//! [`walk`] rebuilds a [`Value`] tree, giving an [`Action`] the chance to
//! rewrite every element found in a sequence. The action sees the element's
//! tag and content (plus the target format and document metadata) and answers
//! with a [`Rewrite`]:
//!
//! | Rewrite          | Effect on the parent sequence                             |
//! |------------------|-----------------------------------------------------------|
//! | `Keep`           | element kept, its content walked                           |
//! | `Replace(v)`     | `v` walked and put in its place                            |
//! | `Splice(vs)`     | each of `vs` walked and put in its place (empty deletes)   |
//! | `Literal(s)`     | element kept with content `s`, not walked                  |
//!
//! The action runs on an element before its children, and only when it keeps
//! the element are those children visited. Replacement values are walked in
//! turn: the action is not asked about a replacement itself, but it sees the
//! elements nested inside it.
//!
//! Objects are copied with every value walked; nodes that are reached outside
//! a sequence (a document's top value, or the value of an object key) are
//! copied with their content walked, without asking the action about the node
//! itself.
//!
//! ```rust
//! use pandoc_filter::{walk, pandoc, Rewrite, Tag, Value, ValueMap};
//!
//! let para = pandoc!({"t": "Para", "c": [
//!     {"t": "Str", "c": "one"},
//!     {"t": "Space"},
//!     {"t": "Image", "c": [[], ["a.png", ""]]}
//! ]});
//!
//! let mut drop_images = |tag: &Tag, _: &Value, _: &str, _: &ValueMap| {
//!     Ok::<_, std::convert::Infallible>(match tag {
//!         Tag::Image => Rewrite::Splice(vec![]),
//!         _ => Rewrite::Keep,
//!     })
//! };
//! let out = walk(&para, &mut drop_images, "html", &ValueMap::new()).unwrap();
//! assert_eq!(out.as_node().unwrap().content().as_array().unwrap().len(), 2);
//! ```

use crate::{Node, Tag, Value, ValueMap};

/// What an [`Action`] decided for one element.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Rewrite {
    /// Leave the element in place and keep walking into it.
    #[default]
    Keep,
    /// Put a single value in place of the element.
    Replace(Value),
    /// Put zero or more values in place of the element.
    Splice(Vec<Value>),
    /// Keep the element's tag but set its content to this string.
    Literal(String),
}

impl From<Value> for Rewrite {
    /// Classifies a dynamic value: `null` keeps, an array splices, a node or
    /// object replaces, and any other scalar becomes a literal in its string
    /// form. `true` reads as `"1"` and `false` as `""`.
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Rewrite::Keep,
            Value::Array(items) => Rewrite::Splice(items),
            Value::Node(_) | Value::Object(_) => Rewrite::Replace(value),
            Value::Bool(true) => Rewrite::Literal("1".to_string()),
            Value::Bool(false) => Rewrite::Literal(String::new()),
            Value::Number(n) => Rewrite::Literal(n.to_string()),
            Value::String(s) => Rewrite::Literal(s),
        }
    }
}

impl From<Node> for Rewrite {
    fn from(node: Node) -> Self {
        Rewrite::Replace(Value::from(node))
    }
}

impl From<Vec<Value>> for Rewrite {
    fn from(items: Vec<Value>) -> Self {
        Rewrite::Splice(items)
    }
}

impl From<Vec<Node>> for Rewrite {
    fn from(nodes: Vec<Node>) -> Self {
        Rewrite::Splice(nodes.into_iter().map(Value::from).collect())
    }
}

impl From<String> for Rewrite {
    fn from(s: String) -> Self {
        Rewrite::Literal(s)
    }
}

impl From<&str> for Rewrite {
    fn from(s: &str) -> Self {
        Rewrite::Literal(s.to_string())
    }
}

impl<T: Into<Rewrite>> From<Option<T>> for Rewrite {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Rewrite::Keep, Into::into)
    }
}

/// Decides, per element, whether and how to rewrite it.
///
/// Implemented for every closure
/// `FnMut(&Tag, &Value, &str, &ValueMap) -> Result<Rewrite, E>`.
pub trait Action {
    type Error;

    /// Called with the element's tag and content, the target format and the
    /// document metadata.
    fn apply(
        &mut self,
        tag: &Tag,
        content: &Value,
        format: &str,
        meta: &ValueMap,
    ) -> Result<Rewrite, Self::Error>;
}

impl<F, E> Action for F
where
    F: FnMut(&Tag, &Value, &str, &ValueMap) -> Result<Rewrite, E>,
{
    type Error = E;

    fn apply(
        &mut self,
        tag: &Tag,
        content: &Value,
        format: &str,
        meta: &ValueMap,
    ) -> Result<Rewrite, E> {
        self(tag, content, format, meta)
    }
}

/// Walks `value`, applying `action` to every element found in a sequence,
/// and returns the rewritten tree.
///
/// The input is never modified. Elements are visited left to right; an error
/// from the action aborts the walk and is returned unchanged.
pub fn walk<A>(
    value: &Value,
    action: &mut A,
    format: &str,
    meta: &ValueMap,
) -> Result<Value, A::Error>
where
    A: Action + ?Sized,
{
    match value {
        Value::Array(items) => walk_seq(items, action, format, meta).map(Value::Array),
        Value::Object(map) => walk_map(map, action, format, meta).map(Value::Object),
        Value::Node(node) => {
            let content = match &node.content {
                Some(content) => Some(walk(content, action, format, meta)?),
                None => None,
            };
            Ok(Value::from(Node {
                tag: node.tag.clone(),
                content,
                extra: walk_map(&node.extra, action, format, meta)?,
            }))
        }
        scalar => Ok(scalar.clone()),
    }
}

/// Walks every value of `map`, keeping keys and their order.
pub fn walk_map<A>(
    map: &ValueMap,
    action: &mut A,
    format: &str,
    meta: &ValueMap,
) -> Result<ValueMap, A::Error>
where
    A: Action + ?Sized,
{
    let mut out = ValueMap::with_capacity(map.len());
    for (key, value) in map {
        out.insert(key.clone(), walk(value, action, format, meta)?);
    }
    Ok(out)
}

pub(crate) fn walk_seq<A>(
    items: &[Value],
    action: &mut A,
    format: &str,
    meta: &ValueMap,
) -> Result<Vec<Value>, A::Error>
where
    A: Action + ?Sized,
{
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        let Value::Node(node) = item else {
            out.push(walk(item, action, format, meta)?);
            continue;
        };
        match action.apply(&node.tag, node.content(), format, meta)? {
            Rewrite::Keep => out.push(walk(item, action, format, meta)?),
            Rewrite::Replace(replacement) => {
                out.push(walk(&replacement, action, format, meta)?);
            }
            Rewrite::Splice(replacements) => {
                out.reserve(replacements.len());
                for replacement in &replacements {
                    out.push(walk(replacement, action, format, meta)?);
                }
            }
            // Literal content is terminal.
            Rewrite::Literal(text) => out.push(Value::from(node.with_content(text))),
        }
    }
    Ok(out)
}
