//! Error types for CZML emission.
//!
//! This layer deliberately validates very little: the stream will happily
//! emit structurally invalid output if operations are called out of order,
//! because well-formedness is guaranteed by the generated writers sitting
//! on top of it. The only checked failures are:
//!
//! - **Invalid arguments**: malformed reference text, an empty URI — raised
//!   at the call boundary before any output is produced.
//! - **I/O errors**: a sink backed by a real writer failed. A `String` sink
//!   never fails.
//!
//! ## Examples
//!
//! ```rust
//! use czml_stream::{Error, Reference};
//!
//! let result = Reference::parse("no-pound-sign-here");
//! assert!(matches!(result, Err(Error::InvalidArgument(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while writing CZML.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error while writing to the sink
    #[error("IO error: {0}")]
    Io(String),

    /// An argument was rejected before any output was produced.
    ///
    /// When this is returned, no stream state has changed and the writer
    /// remains usable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Creates an I/O error for sink write failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates an invalid-argument error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use czml_stream::Error;
    ///
    /// let err = Error::invalid_argument("identifier must not be empty");
    /// assert!(err.to_string().contains("must not be empty"));
    /// ```
    pub fn invalid_argument<T: fmt::Display>(msg: T) -> Self {
        Error::InvalidArgument(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
