//! The property-writer protocol.
//!
//! A CZML property can be expressed four ways: as a plain value, as one or
//! more time-tagged interval entries, as a reference to another property,
//! or as a delete marker. [`PropertyWriter`] implements the stateful part
//! shared by all of them — most importantly the lazy, idempotent opening of
//! the wrapping interval object — so that generated per-property writers
//! can stay thin call-throughs.
//!
//! Like the token stream underneath it, this layer does not police call
//! order: writing a value and a reference for the same property produces
//! output the consumer will reject, and nothing here prevents it. The
//! generated writers are the enforcement point.
//!
//! ## Usage
//!
//! ```rust
//! use czml_stream::{CzmlStream, PropertyWriter};
//!
//! let mut out = CzmlStream::new(String::new());
//! out.start_object().unwrap();
//! {
//!     let mut position = PropertyWriter::new(&mut out, "position");
//!     position.open().unwrap();
//!     position.write_reference_parts("obj1", &["position"]).unwrap();
//!     position.close().unwrap();
//! }
//! out.end_object().unwrap();
//! assert_eq!(
//!     out.into_inner(),
//!     r#"{"position":{"reference":"obj1#position"}}"#
//! );
//! ```

use crate::error::Result;
use crate::reference::Reference;
use crate::sink::Sink;
use crate::stream::CzmlStream;
use crate::time::interval_string;
use chrono::{DateTime, Utc};

/// The name of the `interval` property on an interval entry.
pub const INTERVAL_PROPERTY_NAME: &str = "interval";

/// The name of the `reference` property.
pub const REFERENCE_PROPERTY_NAME: &str = "reference";

/// The name of the `delete` property.
pub const DELETE_PROPERTY_NAME: &str = "delete";

/// Writes a reference value (the canonical escaped string) to a stream.
///
/// A pure helper shared by the reference-writing operations; generated
/// writers may call it directly when they manage the surrounding structure
/// themselves.
pub fn write_reference_value<S: Sink>(
    output: &mut CzmlStream<S>,
    reference: &Reference,
) -> Result<()> {
    output.write_str(&reference.to_string())
}

/// A writer for one occurrence of one logical property.
///
/// The writer borrows the stream for its lifetime, which statically
/// enforces the single-call-chain ownership this protocol assumes: two
/// property writers can never interleave output on the same stream.
///
/// Reuse requires a fresh writer; [`fork`](Self::fork) produces one with
/// independent interval state bound to the same stream.
pub struct PropertyWriter<'a, S: Sink> {
    output: &'a mut CzmlStream<S>,
    name: String,
    force_interval: bool,
    interval_open: bool,
}

impl<'a, S: Sink> PropertyWriter<'a, S> {
    /// Creates a writer for the property `name`. Writes nothing.
    pub fn new(output: &'a mut CzmlStream<S>, name: impl Into<String>) -> Self {
        PropertyWriter {
            output,
            name: name.into(),
            force_interval: false,
            interval_open: false,
        }
    }

    /// The name of the property this writer writes.
    pub fn property_name(&self) -> &str {
        &self.name
    }

    /// Whether a single plain value must still be wrapped in an interval
    /// object. Off by default.
    pub fn force_interval(&self) -> bool {
        self.force_interval
    }

    /// Sets the [`force_interval`](Self::force_interval) flag.
    pub fn set_force_interval(&mut self, force_interval: bool) {
        self.force_interval = force_interval;
    }

    /// Opens the property: writes its name. Call once before any value
    /// operation (not validated).
    pub fn open(&mut self) -> Result<()> {
        self.output.write_property_name(&self.name)
    }

    /// Whether the wrapping interval object has been opened.
    pub fn is_interval(&self) -> bool {
        self.interval_open
    }

    /// Opens the wrapping interval object if it is not open yet.
    ///
    /// Idempotent: the first call on an instance writes `{`, later calls
    /// write nothing. [`close`](Self::close) writes the matching `}`.
    pub fn open_interval_if_necessary(&mut self) -> Result<()> {
        if !self.interval_open {
            self.output.start_object()?;
            self.interval_open = true;
        }
        Ok(())
    }

    /// Eagerly opens an interval entry and returns a writer scoped to it.
    ///
    /// Dropping the returned writer without calling
    /// [`close`](Self::close) leaves the entry unterminated.
    pub fn open_interval(&mut self) -> Result<PropertyWriter<'_, S>> {
        self.output.start_object()?;
        Ok(PropertyWriter {
            output: &mut *self.output,
            name: self.name.clone(),
            force_interval: self.force_interval,
            interval_open: true,
        })
    }

    /// Opens an interval entry covering `start..stop` and writes its
    /// `interval` member.
    pub fn open_interval_between(
        &mut self,
        start: &DateTime<Utc>,
        stop: &DateTime<Utc>,
    ) -> Result<PropertyWriter<'_, S>> {
        let mut interval = self.open_interval()?;
        interval.write_interval(start, stop)?;
        Ok(interval)
    }

    /// Opens a sequence of interval entries.
    pub fn open_multiple_intervals(&mut self) -> Result<IntervalListWriter<'_, S>> {
        self.output.start_sequence()?;
        Ok(IntervalListWriter {
            output: &mut *self.output,
            name: self.name.clone(),
            force_interval: self.force_interval,
        })
    }

    /// Writes the `interval` member describing the time span this entry
    /// covers, opening the wrapping object if necessary.
    pub fn write_interval(&mut self, start: &DateTime<Utc>, stop: &DateTime<Utc>) -> Result<()> {
        self.open_interval_if_necessary()?;
        self.output.write_property_name(INTERVAL_PROPERTY_NAME)?;
        self.output.write_str(&interval_string(start, stop))
    }

    /// Writes one value member through the generated-writer convention:
    /// honor [`force_interval`](Self::force_interval), write `key` only
    /// when inside an interval wrapper, then let `write_value` emit the
    /// value itself.
    ///
    /// ```rust
    /// use czml_stream::{CzmlStream, PropertyWriter};
    ///
    /// let mut out = CzmlStream::new(String::new());
    /// out.start_object().unwrap();
    /// let mut speed = PropertyWriter::new(&mut out, "speed");
    /// speed.open().unwrap();
    /// speed.write_value_with("number", |out| out.write_f64(27.5)).unwrap();
    /// speed.close().unwrap();
    /// out.end_object().unwrap();
    /// assert_eq!(out.into_inner(), r#"{"speed":27.5}"#);
    /// ```
    pub fn write_value_with<F>(&mut self, key: &str, write_value: F) -> Result<()>
    where
        F: FnOnce(&mut CzmlStream<S>) -> Result<()>,
    {
        if self.force_interval {
            self.open_interval_if_necessary()?;
        }
        if self.interval_open {
            self.output.write_property_name(key)?;
        }
        write_value(&mut *self.output)
    }

    /// Writes the `reference` member from a structured reference value.
    pub fn write_reference(&mut self, reference: &Reference) -> Result<()> {
        self.open_interval_if_necessary()?;
        self.output.write_property_name(REFERENCE_PROPERTY_NAME)?;
        write_reference_value(self.output, reference)
    }

    /// Writes the `reference` member from a pre-formatted canonical
    /// reference string, written verbatim.
    pub fn write_reference_string(&mut self, reference: &str) -> Result<()> {
        self.open_interval_if_necessary()?;
        self.output.write_property_name(REFERENCE_PROPERTY_NAME)?;
        self.output.write_str(reference)
    }

    /// Writes the `reference` member from an identifier and property-path
    /// segments, joined into the canonical form.
    pub fn write_reference_parts(&mut self, identifier: &str, path: &[&str]) -> Result<()> {
        let reference = Reference::new(identifier, path.iter().copied());
        self.write_reference(&reference)
    }

    /// Writes the `delete` member.
    ///
    /// When true, this tells the consumer to discard prior data for the
    /// containing interval (or all data when there is none) and to ignore
    /// every other member written alongside it. This layer does not
    /// prevent other members from being written.
    pub fn write_delete(&mut self, value: bool) -> Result<()> {
        self.open_interval_if_necessary()?;
        self.output.write_property_name(DELETE_PROPERTY_NAME)?;
        self.output.write_bool(value)
    }

    /// Returns an independent writer for the same property, with fresh
    /// interval state, bound to the same stream. The sink is never
    /// duplicated.
    ///
    /// The fork mutably reborrows the stream, so the original writer is
    /// unusable until the fork is dropped.
    pub fn fork(&mut self) -> PropertyWriter<'_, S> {
        PropertyWriter {
            name: self.name.clone(),
            force_interval: self.force_interval,
            interval_open: false,
            output: &mut *self.output,
        }
    }

    /// Borrows the underlying stream, e.g. to write a bare value after
    /// [`open`](Self::open).
    pub fn output(&mut self) -> &mut CzmlStream<S> {
        &mut *self.output
    }

    /// Views this writer as a generic value writer of `T`, delegating
    /// value writes to `write_value`.
    ///
    /// The adaptor is a thin borrow of this writer; call
    /// [`close`](CzmlValueWriter::close) on the adaptor or on this writer,
    /// but not on both.
    pub fn as_value_writer<T>(
        &mut self,
        write_value: fn(&mut PropertyWriter<'a, S>, T) -> Result<()>,
    ) -> WriterAdaptor<'_, 'a, S, T> {
        WriterAdaptor {
            parent: self,
            write_value,
        }
    }

    /// Closes the writer: ends the wrapping interval object if one was
    /// opened, otherwise writes nothing. Idempotent.
    pub fn close(&mut self) -> Result<()> {
        if self.interval_open {
            self.output.end_object()?;
            self.interval_open = false;
        }
        Ok(())
    }
}

/// Writes the sequence of interval entries for one property.
///
/// Created by [`PropertyWriter::open_multiple_intervals`]; each call to
/// [`open_interval`](Self::open_interval) yields a writer for one entry,
/// and [`close`](Self::close) terminates the sequence.
pub struct IntervalListWriter<'a, S: Sink> {
    output: &'a mut CzmlStream<S>,
    name: String,
    force_interval: bool,
}

impl<'a, S: Sink> IntervalListWriter<'a, S> {
    /// Opens the next interval entry.
    pub fn open_interval(&mut self) -> Result<PropertyWriter<'_, S>> {
        self.output.start_object()?;
        Ok(PropertyWriter {
            output: &mut *self.output,
            name: self.name.clone(),
            force_interval: self.force_interval,
            interval_open: true,
        })
    }

    /// Opens the next interval entry and writes its `interval` member.
    pub fn open_interval_between(
        &mut self,
        start: &DateTime<Utc>,
        stop: &DateTime<Utc>,
    ) -> Result<PropertyWriter<'_, S>> {
        let mut interval = self.open_interval()?;
        interval.write_interval(start, stop)?;
        Ok(interval)
    }

    /// Ends the sequence of entries.
    pub fn close(&mut self) -> Result<()> {
        self.output.end_sequence()
    }
}

/// The closed capability set a generated writer needs from a property
/// writer viewed as a writer of values of type `T`.
pub trait CzmlValueWriter<T> {
    /// Opens the wrapping interval object if it is not open yet.
    fn open_interval_if_necessary(&mut self) -> Result<()>;
    /// Writes a value of `T`.
    fn write_value(&mut self, value: T) -> Result<()>;
    /// Writes the `reference` member.
    fn write_reference(&mut self, reference: &Reference) -> Result<()>;
    /// Writes the `delete` member.
    fn write_delete(&mut self, value: bool) -> Result<()>;
    /// Closes the underlying writer.
    fn close(&mut self) -> Result<()>;
}

/// A view of a [`PropertyWriter`] as a [`CzmlValueWriter`] of `T`.
///
/// Built from a plain function pointer so that generated writers can
/// expose `as_<format>()` views without allocating; the borrow checker
/// guarantees at most one live view per writer.
pub struct WriterAdaptor<'p, 'a, S: Sink, T> {
    parent: &'p mut PropertyWriter<'a, S>,
    write_value: fn(&mut PropertyWriter<'a, S>, T) -> Result<()>,
}

impl<'p, 'a, S: Sink, T> CzmlValueWriter<T> for WriterAdaptor<'p, 'a, S, T> {
    fn open_interval_if_necessary(&mut self) -> Result<()> {
        self.parent.open_interval_if_necessary()
    }

    fn write_value(&mut self, value: T) -> Result<()> {
        (self.write_value)(&mut *self.parent, value)
    }

    fn write_reference(&mut self, reference: &Reference) -> Result<()> {
        self.parent.write_reference(reference)
    }

    fn write_delete(&mut self, value: bool) -> Result<()> {
        self.parent.write_delete(value)
    }

    fn close(&mut self) -> Result<()> {
        self.parent.close()
    }
}
