//! JSON output in the form pandoc filters conventionally write.
//!
//! Output is plain `serde_json` text, except that `<`, `>` and `&` inside
//! strings can be written as `\u003C`, `\u003E` and `\u0026`, so the result
//! is safe to embed in HTML. Slashes and non-ASCII characters are written
//! unescaped.

use crate::{FilterOptions, Result};
use serde::Serialize;
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter};
use std::io;

/// Serializes `value` to `writer` as configured by `options`.
pub(crate) fn write<W, T>(writer: W, value: &T, options: &FilterOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    if options.pretty {
        let indent = " ".repeat(options.indent);
        let formatter = HexEscapes::new(
            PrettyFormatter::with_indent(indent.as_bytes()),
            options.hex_escapes,
        );
        serialize(writer, value, formatter)
    } else {
        serialize(writer, value, HexEscapes::new(CompactFormatter, options.hex_escapes))
    }
}

fn serialize<W, T, F>(writer: W, value: &T, formatter: F) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
    F: Formatter,
{
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    value.serialize(&mut serializer)?;
    Ok(())
}

/// Wraps another formatter, hex-escaping `<`, `>` and `&` in strings.
struct HexEscapes<F> {
    inner: F,
    enabled: bool,
}

impl<F> HexEscapes<F> {
    fn new(inner: F, enabled: bool) -> Self {
        HexEscapes { inner, enabled }
    }
}

impl<F: Formatter> Formatter for HexEscapes<F> {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if !self.enabled {
            return self.inner.write_string_fragment(writer, fragment);
        }
        let mut start = 0;
        for (i, byte) in fragment.bytes().enumerate() {
            let escaped: &[u8] = match byte {
                b'<' => b"\\u003C",
                b'>' => b"\\u003E",
                b'&' => b"\\u0026",
                _ => continue,
            };
            if start < i {
                self.inner
                    .write_string_fragment(writer, &fragment[start..i])?;
            }
            writer.write_all(escaped)?;
            start = i + 1;
        }
        if start < fragment.len() {
            self.inner.write_string_fragment(writer, &fragment[start..])?;
        }
        Ok(())
    }

    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object_key(writer, first)
    }

    fn end_object_key<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object_key(writer)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object_value(writer)
    }
}
