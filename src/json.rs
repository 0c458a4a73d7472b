//! JSON 输出格式
//!
//! 输出与 Python `json.dumps` 保持一致：单行格式使用 `", "` 与 `": "` 分隔，
//! 缩进格式使用 4 空格；两者都把非 ASCII 字符转义为小写的 `\uXXXX`
//!（超出 BMP 的字符写成代理对）。

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use std::io;

use crate::error::StatError;

/// 单行格式：元素之间 `", "`，键值之间 `": "`
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedCompactFormatter;

impl Formatter for SpacedCompactFormatter {
    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }
}

/// 在内层格式之上把字符串中的非 ASCII 字符转义为 `\uXXXX`
#[derive(Debug, Clone, Default)]
pub struct AsciiFormatter<F> {
    inner: F,
}

impl<F: Formatter> AsciiFormatter<F> {
    pub fn new(inner: F) -> Self {
        Self { inner }
    }
}

impl<F: Formatter> Formatter for AsciiFormatter<F> {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    fn end_object_key<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_key(writer)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (idx, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..idx])?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = idx + ch.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }
}

fn to_string_with<T, F>(value: &T, formatter: F) -> Result<String, StatError>
where
    T: Serialize + ?Sized,
    F: Formatter,
{
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| StatError::Render(e.to_string()))
}

/// 单行 JSON，等同于 `json.dumps(value)`
pub fn to_string<T: Serialize + ?Sized>(value: &T) -> Result<String, StatError> {
    to_string_with(value, AsciiFormatter::new(SpacedCompactFormatter))
}

/// 4 空格缩进 JSON，等同于 `json.dumps(value, indent=4)`
pub fn to_string_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, StatError> {
    to_string_with(
        value,
        AsciiFormatter::new(PrettyFormatter::with_indent(b"    ")),
    )
}
