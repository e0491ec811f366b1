//! Plain-text extraction.

use crate::walk::{walk, Action, Rewrite};
use crate::{Tag, Value, ValueMap};
use std::convert::Infallible;

/// Returns the text of `value` with all formatting left out.
///
/// `Str` contributes its content, `Code` and `Math` their literal text, and
/// `Space` and `LineBreak` a single space. Every other element contributes
/// nothing itself, but the elements nested inside it are still visited.
///
/// Like [`walk`], only elements found inside a sequence are inspected, so
/// pass an element's content (or a list of elements) rather than a bare
/// `Str`.
///
/// # Examples
///
/// ```rust
/// use pandoc_filter::{pandoc, stringify};
///
/// let inlines = pandoc!([
///     {"t": "Str", "c": "a"},
///     {"t": "Space"},
///     {"t": "Emph", "c": [{"t": "Str", "c": "b"}]}
/// ]);
/// assert_eq!(stringify(&inlines), "a b");
/// ```
#[must_use]
pub fn stringify(value: &Value) -> String {
    let mut collector = TextCollector::default();
    match walk(value, &mut collector, "", &ValueMap::new()) {
        Ok(_) => collector.text,
        Err(never) => match never {},
    }
}

#[derive(Default)]
struct TextCollector {
    text: String,
}

impl Action for TextCollector {
    type Error = Infallible;

    fn apply(
        &mut self,
        tag: &Tag,
        content: &Value,
        _format: &str,
        _meta: &ValueMap,
    ) -> Result<Rewrite, Infallible> {
        let fragment = match tag {
            Tag::Str => content.as_str(),
            Tag::Code | Tag::Math => content.get_index(1).and_then(Value::as_str),
            Tag::Space | Tag::LineBreak => Some(" "),
            _ => None,
        };
        if let Some(fragment) = fragment {
            self.text.push_str(fragment);
        }
        Ok(Rewrite::Keep)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{CODE, EMPH, LINE_BREAK, MATH, PARA, SPACE, STR};

    fn s(text: &str) -> Value {
        STR.value([Value::from(text)]).unwrap()
    }

    #[test]
    fn test_para_with_space() {
        let para = PARA
            .value([Value::Array(vec![s("a"), SPACE.value([]).unwrap(), s("b")])])
            .unwrap();
        assert_eq!(stringify(&para), "a b");
    }

    #[test]
    fn test_code_math_and_breaks() {
        let attr = Value::Array(vec!["".into(), Value::Array(vec![]), Value::Array(vec![])]);
        let math_type = Value::from(crate::Node::new("InlineMath", Value::Null));
        let inlines = Value::Array(vec![
            CODE.value([attr, Value::from("x + 1")]).unwrap(),
            LINE_BREAK.value([]).unwrap(),
            MATH.value([math_type, Value::from("y^2")]).unwrap(),
        ]);
        assert_eq!(stringify(&inlines), "x + 1 y^2");
    }

    #[test]
    fn test_nested_inlines_contribute() {
        let inlines = Value::Array(vec![
            EMPH.value([Value::Array(vec![s("deep")])]).unwrap(),
            s("er"),
        ]);
        assert_eq!(stringify(&inlines), "deeper");
    }

    #[test]
    fn test_malformed_code_contributes_nothing() {
        let code = Value::from(crate::Node::new(Tag::Code, Value::Array(vec![])));
        assert_eq!(stringify(&Value::Array(vec![code])), "");
    }

    #[test]
    fn test_bare_node_is_not_inspected() {
        assert_eq!(stringify(&s("alone")), "");
    }
}
