//! Element type tags.
//!
//! Every pandoc AST element is encoded as `{"t": tag, "c": content}`. [`Tag`]
//! is the closed set of tags this crate knows how to build (see
//! [`elements`](crate::elements)), plus [`Tag::Other`] for everything else a
//! newer pandoc may emit (`SoftBreak`, `LineBlock`, `MetaInlines`, ...), so a
//! filter never loses nodes it does not understand.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The type tag of a pandoc element.
///
/// # Examples
///
/// ```rust
/// use pandoc_filter::Tag;
///
/// assert_eq!(Tag::from("Para"), Tag::Para);
/// assert_eq!(Tag::Header.arity(), Some(3));
/// assert_eq!(Tag::from("SoftBreak"), Tag::Other("SoftBreak".to_string()));
/// assert_eq!(Tag::from("SoftBreak").arity(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    // Block elements
    Plain,
    Para,
    CodeBlock,
    RawBlock,
    BlockQuote,
    OrderedList,
    BulletList,
    DefinitionList,
    Header,
    HorizontalRule,
    Table,
    Div,
    Null,

    // Inline elements
    Str,
    Emph,
    Strong,
    Strikeout,
    Superscript,
    Subscript,
    SmallCaps,
    Quoted,
    Cite,
    Code,
    Space,
    LineBreak,
    Math,
    RawInline,
    Link,
    Image,
    Note,
    Span,

    /// Any tag outside the standard catalog, kept verbatim.
    Other(String),
}

impl Tag {
    /// Returns the tag as it appears in the `"t"` field.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Tag::Plain => "Plain",
            Tag::Para => "Para",
            Tag::CodeBlock => "CodeBlock",
            Tag::RawBlock => "RawBlock",
            Tag::BlockQuote => "BlockQuote",
            Tag::OrderedList => "OrderedList",
            Tag::BulletList => "BulletList",
            Tag::DefinitionList => "DefinitionList",
            Tag::Header => "Header",
            Tag::HorizontalRule => "HorizontalRule",
            Tag::Table => "Table",
            Tag::Div => "Div",
            Tag::Null => "Null",
            Tag::Str => "Str",
            Tag::Emph => "Emph",
            Tag::Strong => "Strong",
            Tag::Strikeout => "Strikeout",
            Tag::Superscript => "Superscript",
            Tag::Subscript => "Subscript",
            Tag::SmallCaps => "SmallCaps",
            Tag::Quoted => "Quoted",
            Tag::Cite => "Cite",
            Tag::Code => "Code",
            Tag::Space => "Space",
            Tag::LineBreak => "LineBreak",
            Tag::Math => "Math",
            Tag::RawInline => "RawInline",
            Tag::Link => "Link",
            Tag::Image => "Image",
            Tag::Note => "Note",
            Tag::Span => "Span",
            Tag::Other(name) => name,
        }
    }

    /// Number of constructor arguments registered for this tag in the
    /// standard catalog, or `None` for [`Tag::Other`].
    #[must_use]
    pub const fn arity(&self) -> Option<usize> {
        let n = match self {
            Tag::HorizontalRule | Tag::Null | Tag::Space | Tag::LineBreak => 0,
            Tag::Plain
            | Tag::Para
            | Tag::BlockQuote
            | Tag::BulletList
            | Tag::DefinitionList
            | Tag::Str
            | Tag::Emph
            | Tag::Strong
            | Tag::Strikeout
            | Tag::Superscript
            | Tag::Subscript
            | Tag::SmallCaps
            | Tag::Note => 1,
            Tag::CodeBlock
            | Tag::RawBlock
            | Tag::OrderedList
            | Tag::Div
            | Tag::Quoted
            | Tag::Cite
            | Tag::Code
            | Tag::Math
            | Tag::RawInline
            | Tag::Link
            | Tag::Image
            | Tag::Span => 2,
            Tag::Header => 3,
            Tag::Table => 5,
            Tag::Other(_) => return None,
        };
        Some(n)
    }

    /// Returns `true` for block-level tags of the standard catalog.
    #[inline]
    #[must_use]
    pub const fn is_block(&self) -> bool {
        matches!(
            self,
            Tag::Plain
                | Tag::Para
                | Tag::CodeBlock
                | Tag::RawBlock
                | Tag::BlockQuote
                | Tag::OrderedList
                | Tag::BulletList
                | Tag::DefinitionList
                | Tag::Header
                | Tag::HorizontalRule
                | Tag::Table
                | Tag::Div
                | Tag::Null
        )
    }

    /// Returns `true` for inline-level tags of the standard catalog.
    #[inline]
    #[must_use]
    pub const fn is_inline(&self) -> bool {
        !self.is_block() && !matches!(self, Tag::Other(_))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Tag {
    fn from(name: &str) -> Self {
        match name {
            "Plain" => Tag::Plain,
            "Para" => Tag::Para,
            "CodeBlock" => Tag::CodeBlock,
            "RawBlock" => Tag::RawBlock,
            "BlockQuote" => Tag::BlockQuote,
            "OrderedList" => Tag::OrderedList,
            "BulletList" => Tag::BulletList,
            "DefinitionList" => Tag::DefinitionList,
            "Header" => Tag::Header,
            "HorizontalRule" => Tag::HorizontalRule,
            "Table" => Tag::Table,
            "Div" => Tag::Div,
            "Null" => Tag::Null,
            "Str" => Tag::Str,
            "Emph" => Tag::Emph,
            "Strong" => Tag::Strong,
            "Strikeout" => Tag::Strikeout,
            "Superscript" => Tag::Superscript,
            "Subscript" => Tag::Subscript,
            "SmallCaps" => Tag::SmallCaps,
            "Quoted" => Tag::Quoted,
            "Cite" => Tag::Cite,
            "Code" => Tag::Code,
            "Space" => Tag::Space,
            "LineBreak" => Tag::LineBreak,
            "Math" => Tag::Math,
            "RawInline" => Tag::RawInline,
            "Link" => Tag::Link,
            "Image" => Tag::Image,
            "Note" => Tag::Note,
            "Span" => Tag::Span,
            other => Tag::Other(other.to_string()),
        }
    }
}

impl From<String> for Tag {
    fn from(name: String) -> Self {
        match Tag::from(name.as_str()) {
            Tag::Other(_) => Tag::Other(name),
            known => known,
        }
    }
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Tag::from)
    }
}
