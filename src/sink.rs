//! The sink abstraction a [`CzmlStream`](crate::CzmlStream) writes into.
//!
//! A sink is an append-only text destination supporting single-character and
//! string writes; there is no seeking and writes become visible in emission
//! order. Two implementations cover the common cases:
//!
//! - [`String`]: in-memory accumulation, infallible.
//! - [`IoSink`]: an adapter over any [`std::io::Write`], surfacing write
//!   failures as [`Error::Io`](crate::Error::Io).
//!
//! ## Examples
//!
//! ```rust
//! use czml_stream::{CzmlStream, IoSink};
//!
//! // Write into a String
//! let mut stream = CzmlStream::new(String::new());
//! stream.start_object().unwrap();
//! stream.end_object().unwrap();
//! assert_eq!(stream.into_inner(), "{}");
//!
//! // Write into anything io::Write
//! let buffer: Vec<u8> = Vec::new();
//! let stream = CzmlStream::new(IoSink::new(buffer));
//! ```

use crate::error::{Error, Result};
use std::io;

/// An append-only text destination.
pub trait Sink {
    /// Appends a string slice.
    fn write_str(&mut self, s: &str) -> Result<()>;

    /// Appends a single character.
    fn write_char(&mut self, c: char) -> Result<()> {
        let mut buf = [0u8; 4];
        self.write_str(c.encode_utf8(&mut buf))
    }
}

impl Sink for String {
    fn write_str(&mut self, s: &str) -> Result<()> {
        self.push_str(s);
        Ok(())
    }

    fn write_char(&mut self, c: char) -> Result<()> {
        self.push(c);
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn write_str(&mut self, s: &str) -> Result<()> {
        (**self).write_str(s)
    }

    fn write_char(&mut self, c: char) -> Result<()> {
        (**self).write_char(c)
    }
}

/// Adapts any [`io::Write`] into a [`Sink`].
///
/// Write failures are reported as [`Error::Io`]. The writer is not buffered
/// by this adapter; wrap it in a [`io::BufWriter`] for file output.
///
/// # Examples
///
/// ```rust
/// use czml_stream::{CzmlStream, IoSink};
///
/// let mut stream = CzmlStream::new(IoSink::new(Vec::new()));
/// stream.start_sequence().unwrap();
/// stream.end_sequence().unwrap();
/// let bytes = stream.into_inner().into_inner();
/// assert_eq!(bytes, b"[]");
/// ```
#[derive(Debug)]
pub struct IoSink<W: io::Write> {
    inner: W,
}

impl<W: io::Write> IoSink<W> {
    /// Wraps a writer.
    pub fn new(inner: W) -> Self {
        IoSink { inner }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: io::Write> Sink for IoSink<W> {
    fn write_str(&mut self, s: &str) -> Result<()> {
        self.inner
            .write_all(s.as_bytes())
            .map_err(|e| Error::io(&e.to_string()))
    }
}
