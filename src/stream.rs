//! The low-level CZML token stream.
//!
//! [`CzmlStream`] owns the structural state machine — container nesting,
//! comma insertion, indentation, line breaks — and emits punctuated tokens
//! to a [`Sink`]. It is a low-level type that does not extensively validate
//! that methods are called in a valid order, so it can be used to generate
//! invalid output; well-formedness is the caller's obligation.
//!
//! ## Usage
//!
//! ```rust
//! use czml_stream::CzmlStream;
//!
//! let mut out = CzmlStream::new(String::new());
//! out.start_object().unwrap();
//! out.write_property_name("id").unwrap();
//! out.write_str("vehicle").unwrap();
//! out.write_property_name("speed").unwrap();
//! out.write_f64(27.5).unwrap();
//! out.end_object().unwrap();
//! assert_eq!(out.into_inner(), r#"{"id":"vehicle","speed":27.5}"#);
//! ```

use crate::error::Result;
use crate::escape::write_escaped;
use crate::number::{format_double, format_int};
use crate::options::CzmlOptions;
use crate::sink::Sink;
use crate::time::to_iso8601;
use crate::uri::CzmlUri;
use chrono::{DateTime, Utc};

/// Container kinds tracked for indentation.
#[derive(Clone, Copy, Debug)]
enum Container {
    Object,
    Sequence,
}

/// A stream to which raw CZML tokens can be written.
///
/// The stream is bound to one sink for the duration of one document
/// emission and must be driven by exactly one logical writer call chain;
/// Rust's borrow rules enforce the exclusive access this type assumes.
pub struct CzmlStream<S: Sink> {
    sink: S,
    options: CzmlOptions,
    nesting: Vec<Container>,
    first_in_stream: bool,
    first_in_container: bool,
    in_property: bool,
    pending_line_break: bool,
}

impl<S: Sink> CzmlStream<S> {
    /// Creates a stream writing compact output into `sink`.
    pub fn new(sink: S) -> Self {
        Self::with_options(sink, CzmlOptions::default())
    }

    /// Creates a stream with explicit formatting options.
    pub fn with_options(sink: S, options: CzmlOptions) -> Self {
        CzmlStream {
            sink,
            options,
            nesting: Vec::new(),
            first_in_stream: true,
            first_in_container: true,
            in_property: false,
            pending_line_break: false,
        }
    }

    /// Whether output is formatted for human readability.
    ///
    /// When `false` (the default), more compact output is generated.
    pub fn pretty_formatting(&self) -> bool {
        self.options.pretty
    }

    /// Enables or disables pretty formatting mid-stream.
    pub fn set_pretty_formatting(&mut self, pretty: bool) {
        self.options.pretty = pretty;
    }

    /// Consumes the stream, returning the sink.
    pub fn into_inner(self) -> S {
        self.sink
    }

    /// Writes the start of an object.
    pub fn start_object(&mut self) -> Result<()> {
        self.pending_line_break = true;
        self.start_new_value()?;
        self.sink.write_char('{')?;
        self.first_in_container = true;
        self.in_property = false;
        self.nesting.push(Container::Object);
        Ok(())
    }

    /// Writes the end of an object.
    pub fn end_object(&mut self) -> Result<()> {
        self.first_in_container = false;
        self.nesting.pop();

        if self.options.pretty {
            self.sink.write_char('\n')?;
            self.write_indent()?;
        }

        self.sink.write_char('}')
    }

    /// Writes the start of a sequence.
    pub fn start_sequence(&mut self) -> Result<()> {
        self.pending_line_break = true;
        self.start_new_value()?;
        self.sink.write_char('[')?;
        self.first_in_container = true;
        self.in_property = false;
        self.nesting.push(Container::Sequence);
        Ok(())
    }

    /// Writes the end of a sequence.
    pub fn end_sequence(&mut self) -> Result<()> {
        self.first_in_container = false;
        self.nesting.pop();

        if self.options.pretty {
            self.sink.write_char('\n')?;
            self.write_indent()?;
        }

        self.sink.write_char(']')
    }

    /// Writes the name of a property, followed by `:`.
    pub fn write_property_name(&mut self, property_name: &str) -> Result<()> {
        self.pending_line_break = true;
        self.start_new_value()?;
        self.sink.write_char('"')?;
        write_escaped(&mut self.sink, property_name)?;
        self.sink.write_char('"')?;
        self.sink.write_char(':')?;
        self.first_in_container = true;
        self.in_property = true;
        Ok(())
    }

    /// Writes a string value, quoted and escaped.
    pub fn write_str(&mut self, value: &str) -> Result<()> {
        self.start_new_value()?;
        self.first_in_container = false;
        self.in_property = false;
        self.sink.write_char('"')?;
        write_escaped(&mut self.sink, value)?;
        self.sink.write_char('"')
    }

    /// Writes the literal `null`.
    pub fn write_null(&mut self) -> Result<()> {
        self.write_raw("null")
    }

    /// Writes a string value, or `null` when absent.
    pub fn write_opt_str(&mut self, value: Option<&str>) -> Result<()> {
        match value {
            Some(value) => self.write_str(value),
            None => self.write_null(),
        }
    }

    /// Writes a double as its shortest round-trip decimal text.
    pub fn write_f64(&mut self, value: f64) -> Result<()> {
        self.start_new_value()?;
        self.first_in_container = false;
        self.in_property = false;
        self.sink.write_str(&format_double(value))
    }

    /// Writes a 32-bit integer.
    pub fn write_i32(&mut self, value: i32) -> Result<()> {
        self.write_raw(&format_int(value as i64))
    }

    /// Writes a 64-bit integer.
    pub fn write_i64(&mut self, value: i64) -> Result<()> {
        self.write_raw(&format_int(value))
    }

    /// Writes a boolean literal.
    pub fn write_bool(&mut self, value: bool) -> Result<()> {
        self.write_raw(if value { "true" } else { "false" })
    }

    /// Writes a URI via its canonical text form, as a string value.
    pub fn write_uri(&mut self, value: &CzmlUri) -> Result<()> {
        self.write_str(value.as_str())
    }

    /// Writes a date as an ISO 8601 string value.
    pub fn write_date(&mut self, value: &DateTime<Utc>) -> Result<()> {
        self.write_str(&to_iso8601(value))
    }

    /// When pretty formatting is enabled, requests a line break before the
    /// next value in a sequence of simple values. Does nothing otherwise.
    pub fn write_line_break(&mut self) {
        self.pending_line_break = true;
    }

    fn write_raw(&mut self, text: &str) -> Result<()> {
        self.start_new_value()?;
        self.first_in_container = false;
        self.in_property = false;
        self.sink.write_str(text)
    }

    /// Emits the separator owed before a new value: nothing at the very
    /// start of the stream, a comma before a later sibling, and the pending
    /// line break plus indentation when formatting prettily and not
    /// immediately after a property name.
    fn start_new_value(&mut self) -> Result<()> {
        if self.first_in_stream {
            self.first_in_stream = false;
            return Ok(());
        }

        if !self.first_in_container {
            self.sink.write_char(',')?;
        }

        if !self.in_property && self.options.pretty && self.pending_line_break {
            self.sink.write_char('\n')?;
            self.write_indent()?;
            self.pending_line_break = false;
        }

        Ok(())
    }

    fn write_indent(&mut self) -> Result<()> {
        let width = self.nesting.len() * self.options.indent;
        for _ in 0..width {
            self.sink.write_char(' ')?;
        }
        Ok(())
    }
}
