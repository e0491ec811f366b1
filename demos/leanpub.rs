//! Leanpub block emulation.
//!
//! Paragraphs whose lines start with a block marker become a raw open/close
//! pair around the block content, for LaTeX, HTML and EPUB output:
//!
//! ```text
//! W> This is a **warning**
//! W> that spans lines.
//! W>
//! W> * with a list
//! W> * of two items
//! W> # and a heading
//! ```
//!
//! Supported markers: `D>` discussion, `E>` error, `X>` exercise,
//! `I>` information, `Q>` question, `T>` tip, `W>` warning. For LaTeX the
//! template must define the matching `\lp...` commands.
//!
//! Run with: pandoc -t json book.md | cargo run --example leanpub -- latex

use pandoc_filter::elements::{BULLET_LIST, HEADER, LINE_BREAK, PARA, PLAIN, RAW_BLOCK};
use pandoc_filter::{stringify, to_json_filter, Result, Rewrite, Tag, Value};
use tracing_subscriber::EnvFilter;

struct BlockEmulation {
    marker: &'static str,
    class: &'static str,
}

const BLOCKS: &[BlockEmulation] = &[
    BlockEmulation { marker: "D>", class: "lpdiscussion" },
    BlockEmulation { marker: "E>", class: "lperror" },
    BlockEmulation { marker: "X>", class: "lpexercise" },
    BlockEmulation { marker: "I>", class: "lpinformation" },
    BlockEmulation { marker: "Q>", class: "lpquestion" },
    BlockEmulation { marker: "T>", class: "lptip" },
    BlockEmulation { marker: "W>", class: "lpwarning" },
];

impl BlockEmulation {
    fn is_marker(&self, value: &Value) -> bool {
        value.as_node().is_some_and(|node| {
            node.is(&Tag::Str) && node.content().as_str() == Some(self.marker)
        })
    }

    fn matches(&self, tag: &Tag, inlines: &[Value]) -> bool {
        *tag == Tag::Para
            && inlines.len() >= 2
            && self.is_marker(&inlines[0])
            && inlines[1].is_tagged(&Tag::Space)
    }

    fn open(&self, format: &str) -> String {
        match format {
            "latex" => format!("\\{}{{", self.class),
            "html" | "epub" => format!("<div class=\"{}\">", self.class),
            _ => String::new(),
        }
    }

    fn close(&self, format: &str) -> &'static str {
        match format {
            "latex" => "}",
            "html" | "epub" => "</div>",
            _ => "",
        }
    }

    /// Splits the paragraph at each marker, dropping the markers and the
    /// spaces that start a line. Lines left empty are dropped.
    fn lines(&self, inlines: &[Value]) -> Vec<Vec<Value>> {
        let mut lines = Vec::new();
        let mut current: Vec<Value> = Vec::new();
        for item in inlines {
            if self.is_marker(item) {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
            } else if !(current.is_empty() && item.is_tagged(&Tag::Space)) {
                current.push(item.clone());
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Context {
    Para,
    BulletList,
    Header,
}

impl Context {
    fn of_line(line: &[Value]) -> Self {
        let lead = line.first().and_then(Value::as_node);
        let spaced = line.get(1).map_or(true, |next| next.is_tagged(&Tag::Space));
        match lead {
            Some(node) if node.is(&Tag::Str) && spaced => match node.content().as_str() {
                Some("*") => Context::BulletList,
                Some("#") => Context::Header,
                _ => Context::Para,
            },
            _ => Context::Para,
        }
    }

    /// A heading always stands alone; other contexts close when the next
    /// line starts a different one.
    fn closes_before(previous: Option<Context>, next: Context) -> bool {
        match previous {
            Some(Context::Header) => true,
            Some(previous) => previous != next,
            None => false,
        }
    }

    fn process(self, mut line: Vec<Value>) -> Result<Value> {
        match self {
            Context::Para => {
                line.push(LINE_BREAK.value([])?);
                Ok(Value::Array(line))
            }
            Context::BulletList => {
                let item = line.split_off(2.min(line.len()));
                Ok(Value::Array(vec![PLAIN.value([Value::Array(item)])?]))
            }
            Context::Header => {
                let title = line.split_off(2.min(line.len()));
                let anchor = anchor(&stringify(&Value::Array(title.clone())));
                let attr = Value::Array(vec![
                    Value::from(anchor),
                    Value::Array(vec![]),
                    Value::Array(vec![]),
                ]);
                HEADER.value([Value::from(2), attr, Value::Array(title)])
            }
        }
    }

    fn close(self, lines: Vec<Value>) -> Result<Option<Value>> {
        match self {
            Context::Para => {
                let mut inlines: Vec<Value> = lines
                    .into_iter()
                    .flat_map(|line| match line {
                        Value::Array(items) => items,
                        other => vec![other],
                    })
                    .collect();
                // Trailing line break of the last line.
                inlines.pop();
                Ok(Some(PARA.value([Value::Array(inlines)])?))
            }
            Context::BulletList => Ok(Some(BULLET_LIST.value([Value::Array(lines)])?)),
            Context::Header => Ok(lines.into_iter().next()),
        }
    }
}

fn anchor(text: &str) -> String {
    let slug: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_lowercase() || c.is_ascii_digit() { c } else { '-' })
        .collect();
    slug.trim_matches('-').to_string()
}

fn emulate(block: &BlockEmulation, inlines: &[Value], format: &str) -> Result<Rewrite> {
    let raw = |text: &str| RAW_BLOCK.value([Value::from(format), Value::from(text)]);

    let mut blocks = vec![raw(&block.open(format))?];
    let mut context: Option<Context> = None;
    let mut pending: Vec<Value> = Vec::new();

    for line in block.lines(inlines) {
        let line_context = Context::of_line(&line);
        if let Some(current) = context {
            if Context::closes_before(context, line_context) && !pending.is_empty() {
                blocks.extend(current.close(std::mem::take(&mut pending))?);
            }
        }
        pending.push(line_context.process(line)?);
        context = Some(line_context);
    }
    if let Some(current) = context {
        if !pending.is_empty() {
            blocks.extend(current.close(pending)?);
        }
    }

    blocks.push(raw(block.close(format))?);
    Ok(Rewrite::Splice(blocks))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    to_json_filter(|tag, content, format, _meta| {
        let format = if format.is_empty() { "latex" } else { format };
        let Some(inlines) = content.as_array() else {
            return Ok(Rewrite::Keep);
        };
        match BLOCKS.iter().find(|block| block.matches(tag, inlines)) {
            Some(block) => emulate(block, inlines, format),
            None => Ok(Rewrite::Keep),
        }
    })
}
