//! Title-case every word of the document.
//!
//! Run with: pandoc -t json in.md | cargo run --example ucwords | pandoc -f json

use pandoc_filter::{to_json_filter, Rewrite, Tag};
use tracing_subscriber::EnvFilter;

fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if at_word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
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

    to_json_filter(|tag, content, _format, _meta| {
        Ok(match (tag, content.as_str()) {
            (Tag::Str, Some(word)) => Rewrite::Literal(title_case(word)),
            _ => Rewrite::Keep,
        })
    })
}
