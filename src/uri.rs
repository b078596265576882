//! URI values.

use crate::error::{Error, Result};
use std::fmt;

/// A URI written as a string value, e.g. an image or model asset location.
///
/// The constructor rejects empty text; no other validation is performed, so
/// data URIs, relative paths and absolute URLs all pass through untouched.
///
/// # Examples
///
/// ```rust
/// use czml_stream::CzmlUri;
///
/// let uri = CzmlUri::new("https://example.com/model.glb").unwrap();
/// assert_eq!(uri.as_str(), "https://example.com/model.glb");
///
/// assert!(CzmlUri::new("").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CzmlUri(String);

impl CzmlUri {
    /// Creates a URI, rejecting empty text with
    /// [`Error::InvalidArgument`].
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(Error::invalid_argument("URI must not be empty"));
        }
        Ok(CzmlUri(value))
    }

    /// The canonical text form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CzmlUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
