//! Prepare a manuscript in standard submission format: no images, links
//! reduced to their text, level 2 headings title-cased.
//!
//! Run with: pandoc -t json story.md | cargo run --example fiction_publishers

use pandoc_filter::elements::{HEADER, STR};
use pandoc_filter::{stringify, to_json_filter, Error, Rewrite, Tag, Value};
use tracing_subscriber::EnvFilter;

/// Uppercases the first character of every space-separated word.
fn ucwords(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if at_word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_word_start = ch.is_whitespace();
    }
    out
}

fn main() -> pandoc_filter::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    to_json_filter(|tag, content, _format, _meta| match tag {
        Tag::Image => Ok(STR.call([Value::from("")])?.into()),
        Tag::Link => Ok(STR.call([Value::from(stringify(content))])?.into()),
        Tag::Header if content.get_index(0).and_then(Value::as_i64) == Some(2) => {
            let (Some(level), Some(attr), Some(inlines)) = (
                content.get_index(0),
                content.get_index(1),
                content.get_index(2),
            ) else {
                return Err(Error::malformed(tag, "expected [level, attr, inlines]"));
            };
            let title = STR.value([Value::from(ucwords(&stringify(inlines)))])?;
            let header = HEADER.call([level.clone(), attr.clone(), Value::Array(vec![title])])?;
            Ok(header.into())
        }
        _ => Ok(Rewrite::Keep),
    })
}
