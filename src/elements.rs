//! Arity-checked element constructors.
//!
//! A [`Constructor`] builds [`Node`]s of one tag from exactly as many
//! arguments as the tag takes. The standard pandoc elements are available as
//! constants ([`PARA`], [`STR`], [`HEADER`], ...) and as the
//! [`STANDARD_ELEMENTS`] table; [`make_constructor`] builds one for any tag.
//!
//! ```rust
//! use pandoc_filter::elements::{HEADER, STR};
//! use pandoc_filter::{Tag, Value};
//!
//! let title = STR.call([Value::from("Intro")]).unwrap();
//! assert_eq!(title.content(), &Value::from("Intro"));
//!
//! let attr = Value::Array(vec!["intro".into(), Value::Array(vec![]), Value::Array(vec![])]);
//! let header = HEADER
//!     .call([Value::from(2), attr, Value::Array(vec![title.into()])])
//!     .unwrap();
//! assert_eq!(header.tag, Tag::Header);
//! assert_eq!(header.content().as_array().map(Vec::len), Some(3));
//! ```

use crate::{Error, Node, Result, Tag, Value};

/// Builds [`Node`]s of one tag from a fixed number of arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Constructor {
    tag: Tag,
    arity: usize,
}

impl Constructor {
    #[must_use]
    pub const fn new(tag: Tag, arity: usize) -> Self {
        Constructor { tag, arity }
    }

    #[must_use]
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Builds a node from `args`.
    ///
    /// With arity 1 the single argument becomes the content as is; otherwise
    /// the content is the argument list (empty for arity 0).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Arity`] if the number of arguments differs from the
    /// constructor's arity.
    #[must_use = "this returns the result of the operation, errors must be handled"]
    pub fn call<I>(&self, args: I) -> Result<Node>
    where
        I: IntoIterator<Item = Value>,
    {
        let mut args: Vec<Value> = args.into_iter().collect();
        if args.len() != self.arity {
            return Err(Error::arity(&self.tag, self.arity, args.len()));
        }
        let content = match args.pop() {
            Some(only) if self.arity == 1 => only,
            Some(last) => {
                args.push(last);
                Value::Array(args)
            }
            None => Value::Array(Vec::new()),
        };
        Ok(Node::new(self.tag.clone(), content))
    }

    /// Like [`call`](Self::call), returning the node as a [`Value`].
    #[must_use = "this returns the result of the operation, errors must be handled"]
    pub fn value<I>(&self, args: I) -> Result<Value>
    where
        I: IntoIterator<Item = Value>,
    {
        self.call(args).map(Value::from)
    }
}

/// Creates a constructor for `tag` taking exactly `arity` arguments.
///
/// The arity is only checked when the constructor is called.
///
/// # Examples
///
/// ```rust
/// use pandoc_filter::{make_constructor, Value};
///
/// let soft_break = make_constructor("SoftBreak", 0);
/// assert!(soft_break.call([]).is_ok());
/// assert!(soft_break.call([Value::Null]).is_err());
/// ```
#[must_use]
pub fn make_constructor(tag: impl Into<Tag>, arity: usize) -> Constructor {
    Constructor::new(tag.into(), arity)
}

// Block elements
pub const PLAIN: Constructor = Constructor::new(Tag::Plain, 1);
pub const PARA: Constructor = Constructor::new(Tag::Para, 1);
pub const CODE_BLOCK: Constructor = Constructor::new(Tag::CodeBlock, 2);
pub const RAW_BLOCK: Constructor = Constructor::new(Tag::RawBlock, 2);
pub const BLOCK_QUOTE: Constructor = Constructor::new(Tag::BlockQuote, 1);
pub const ORDERED_LIST: Constructor = Constructor::new(Tag::OrderedList, 2);
pub const BULLET_LIST: Constructor = Constructor::new(Tag::BulletList, 1);
pub const DEFINITION_LIST: Constructor = Constructor::new(Tag::DefinitionList, 1);
pub const HEADER: Constructor = Constructor::new(Tag::Header, 3);
pub const HORIZONTAL_RULE: Constructor = Constructor::new(Tag::HorizontalRule, 0);
pub const TABLE: Constructor = Constructor::new(Tag::Table, 5);
pub const DIV: Constructor = Constructor::new(Tag::Div, 2);
pub const NULL: Constructor = Constructor::new(Tag::Null, 0);

// Inline elements
pub const STR: Constructor = Constructor::new(Tag::Str, 1);
pub const EMPH: Constructor = Constructor::new(Tag::Emph, 1);
pub const STRONG: Constructor = Constructor::new(Tag::Strong, 1);
pub const STRIKEOUT: Constructor = Constructor::new(Tag::Strikeout, 1);
pub const SUPERSCRIPT: Constructor = Constructor::new(Tag::Superscript, 1);
pub const SUBSCRIPT: Constructor = Constructor::new(Tag::Subscript, 1);
pub const SMALL_CAPS: Constructor = Constructor::new(Tag::SmallCaps, 1);
pub const QUOTED: Constructor = Constructor::new(Tag::Quoted, 2);
pub const CITE: Constructor = Constructor::new(Tag::Cite, 2);
pub const CODE: Constructor = Constructor::new(Tag::Code, 2);
pub const SPACE: Constructor = Constructor::new(Tag::Space, 0);
pub const LINE_BREAK: Constructor = Constructor::new(Tag::LineBreak, 0);
pub const MATH: Constructor = Constructor::new(Tag::Math, 2);
pub const RAW_INLINE: Constructor = Constructor::new(Tag::RawInline, 2);
pub const LINK: Constructor = Constructor::new(Tag::Link, 2);
pub const IMAGE: Constructor = Constructor::new(Tag::Image, 2);
pub const NOTE: Constructor = Constructor::new(Tag::Note, 1);
pub const SPAN: Constructor = Constructor::new(Tag::Span, 2);

/// The standard catalog: every block and inline element with its arity.
pub const STANDARD_ELEMENTS: &[Constructor] = &[
    PLAIN,
    PARA,
    CODE_BLOCK,
    RAW_BLOCK,
    BLOCK_QUOTE,
    ORDERED_LIST,
    BULLET_LIST,
    DEFINITION_LIST,
    HEADER,
    HORIZONTAL_RULE,
    TABLE,
    DIV,
    NULL,
    STR,
    EMPH,
    STRONG,
    STRIKEOUT,
    SUPERSCRIPT,
    SUBSCRIPT,
    SMALL_CAPS,
    QUOTED,
    CITE,
    CODE,
    SPACE,
    LINE_BREAK,
    MATH,
    RAW_INLINE,
    LINK,
    IMAGE,
    NOTE,
    SPAN,
];

/// Looks up the standard constructor for `tag`.
#[must_use]
pub fn standard(tag: &Tag) -> Option<&'static Constructor> {
    STANDARD_ELEMENTS.iter().find(|c| c.tag == *tag)
}
