//! Output escaping layered over serde_json's compact formatting.

use std::io;

use serde_json::ser::{CharEscape, Formatter};

use crate::options::EncodeOptions;

/// Compact JSON formatter with opt-in escaping of slashes, non-ASCII
/// characters, and HTML-sensitive characters.
///
/// serde_json performs the mandatory JSON escapes (double quotes,
/// backslashes, control characters) before string fragments reach a
/// formatter; this one only widens the escape set.
pub struct EscapeFormatter {
    escape_slashes: bool,
    escape_unicode: bool,
    escape_html: bool,
}

impl EscapeFormatter {
    pub fn new(options: &EncodeOptions) -> Self {
        Self {
            escape_slashes: options.escape_slashes,
            escape_unicode: options.escape_unicode,
            escape_html: options.escape_html,
        }
    }

    fn wants_escape(&self, ch: char) -> bool {
        match ch {
            '/' => self.escape_slashes,
            '<' | '>' | '&' | '\'' => self.escape_html,
            c => self.escape_unicode && !c.is_ascii(),
        }
    }
}

impl Formatter for EscapeFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if !(self.escape_slashes || self.escape_unicode || self.escape_html) {
            return writer.write_all(fragment.as_bytes());
        }
        let mut start = 0;
        for (idx, ch) in fragment.char_indices() {
            if !self.wants_escape(ch) {
                continue;
            }
            if start < idx {
                writer.write_all(fragment[start..idx].as_bytes())?;
            }
            if ch == '/' {
                writer.write_all(b"\\/")?;
            } else {
                write_unicode_escape(writer, ch)?;
            }
            start = idx + ch.len_utf8();
        }
        if start < fragment.len() {
            writer.write_all(fragment[start..].as_bytes())?;
        }
        Ok(())
    }

    fn write_char_escape<W>(&mut self, writer: &mut W, char_escape: CharEscape) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let escape: &[u8] = match char_escape {
            // The double quote participates in the HTML-sensitive set.
            CharEscape::Quote if self.escape_html => b"\\u0022",
            CharEscape::Quote => b"\\\"",
            CharEscape::ReverseSolidus => b"\\\\",
            CharEscape::Solidus => b"\\/",
            CharEscape::Backspace => b"\\b",
            CharEscape::FormFeed => b"\\f",
            CharEscape::LineFeed => b"\\n",
            CharEscape::CarriageReturn => b"\\r",
            CharEscape::Tab => b"\\t",
            CharEscape::AsciiControl(byte) => {
                return write!(writer, "\\u{:04x}", byte);
            }
        };
        writer.write_all(escape)
    }
}

/// Writes `ch` as one or two `\uXXXX` units, lowercase hex, surrogate
/// pairs for characters beyond the basic multilingual plane.
fn write_unicode_escape<W>(writer: &mut W, ch: char) -> io::Result<()>
where
    W: ?Sized + io::Write,
{
    let mut units = [0u16; 2];
    for unit in ch.encode_utf16(&mut units).iter() {
        write!(writer, "\\u{:04x}", unit)?;
    }
    Ok(())
}
