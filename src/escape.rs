//! JSON string escaping.
//!
//! Besides the standard JSON escapes, three characters that are legal in
//! JSON string literals must still be escaped because JavaScript engines
//! treat them as line terminators when a document is evaluated as script:
//! U+0085 (Next Line), U+2028 (Line Separator), U+2029 (Paragraph
//! Separator). Remaining control characters below 0x20 are written as
//! `\u00XX` with lowercase hex.
//!
//! The scanner accumulates runs of characters that need no escaping and
//! flushes each run as a single slice. A string containing no special
//! characters is forwarded to the sink in one `write_str` call with no
//! intermediate buffer.

use crate::error::Result;
use crate::sink::Sink;

/// Writes `value` with all required escape sequences (without surrounding
/// quotes).
pub(crate) fn write_escaped<S: Sink + ?Sized>(sink: &mut S, value: &str) -> Result<()> {
    let mut run_start = 0;

    for (i, c) in value.char_indices() {
        let escape: Option<&'static str> = match c {
            '\t' => Some("\\t"),
            '\n' => Some("\\n"),
            '\r' => Some("\\r"),
            '\u{000C}' => Some("\\f"),
            '\u{0008}' => Some("\\b"),
            '\\' => Some("\\\\"),
            '"' => Some("\\\""),
            '\u{0085}' => Some("\\u0085"),
            '\u{2028}' => Some("\\u2028"),
            '\u{2029}' => Some("\\u2029"),
            _ => None,
        };

        if let Some(escape) = escape {
            if run_start < i {
                sink.write_str(&value[run_start..i])?;
            }
            sink.write_str(escape)?;
            run_start = i + c.len_utf8();
        } else if c < '\u{20}' {
            if run_start < i {
                sink.write_str(&value[run_start..i])?;
            }
            write_unicode_escape(sink, c)?;
            run_start = i + c.len_utf8();
        }
    }

    // remaining run; this is the whole string when nothing needed escaping
    if run_start < value.len() {
        sink.write_str(&value[run_start..])?;
    }
    Ok(())
}

/// Writes a `\u00XX` escape for a control character below 0x20.
fn write_unicode_escape<S: Sink + ?Sized>(sink: &mut S, c: char) -> Result<()> {
    let code = c as u32;
    sink.write_str("\\u00")?;
    sink.write_char(hex_digit((code >> 4) & 0xf))?;
    sink.write_char(hex_digit(code & 0xf))
}

fn hex_digit(n: u32) -> char {
    char::from_digit(n, 16).unwrap_or('0')
}
