//! # czml-stream
//!
//! A streaming token writer for CZML, the JSON-superset scene-description
//! format consumed by Cesium-style 3D geospatial clients.
//!
//! ## What is CZML?
//!
//! CZML describes a time-dynamic scene — vehicles, sensors, orbits,
//! imagery — as a stream of packets. Each property of a packet can carry a
//! constant value, a list of time-tagged interval entries, a reference to
//! another property, or a delete marker. This crate implements the two
//! low-level pieces everything else is generated on top of:
//!
//! - [`CzmlStream`]: the token stream. Owns the structural state machine
//!   (container nesting, comma insertion, indentation, line-break hints)
//!   and the text-encoding primitives (string escaping, shortest
//!   round-trip floating point text).
//! - [`PropertyWriter`]: the property-writer protocol. Expresses the four
//!   encodings of a logical property, lazily opening the interval wrapper
//!   object on first use.
//!
//! ## Key Features
//!
//! - **Streaming**: tokens go straight to a [`Sink`] with no document tree
//!   in memory
//! - **Exact numbers**: doubles render as the shortest text that parses
//!   back bit-identical
//! - **Zero-copy strings**: text with nothing to escape is forwarded to
//!   the sink as a single slice
//! - **Compact or pretty**: one toggle switches between wire-compact
//!   output and 2-space-indented output
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use czml_stream::{CzmlStream, PropertyWriter};
//!
//! let mut out = CzmlStream::new(String::new());
//! out.start_object().unwrap();
//! out.write_property_name("id").unwrap();
//! out.write_str("satellite-1").unwrap();
//!
//! let mut billboard = PropertyWriter::new(&mut out, "billboard");
//! billboard.open().unwrap();
//! billboard.open_interval_if_necessary().unwrap();
//! billboard
//!     .write_value_with("scale", |out| out.write_f64(1.5))
//!     .unwrap();
//! billboard.close().unwrap();
//!
//! out.end_object().unwrap();
//! assert_eq!(
//!     out.into_inner(),
//!     r#"{"id":"satellite-1","billboard":{"scale":1.5}}"#
//! );
//! ```
//!
//! ## What this layer does not do
//!
//! Call-order validation. Mismatched start/end pairs, values without a
//! preceding property name, or a `delete` alongside a value all produce
//! best-effort (possibly invalid) output rather than an error. The
//! schema-generated writer classes built on this protocol are the
//! enforcement point; keeping the hot path branch-light is deliberate.
//! The only checked failures are invalid arguments — rejected before any
//! output is produced — and sink I/O errors (see [`Error`]).

pub mod error;
mod escape;
mod number;
pub mod options;
pub mod property;
pub mod reference;
pub mod sink;
pub mod stream;
pub mod time;
pub mod uri;

pub use error::{Error, Result};
pub use options::CzmlOptions;
pub use property::{
    CzmlValueWriter, IntervalListWriter, PropertyWriter, WriterAdaptor, DELETE_PROPERTY_NAME,
    INTERVAL_PROPERTY_NAME, REFERENCE_PROPERTY_NAME,
};
pub use reference::Reference;
pub use sink::{IoSink, Sink};
pub use stream::CzmlStream;
pub use uri::CzmlUri;
