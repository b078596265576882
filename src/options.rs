//! Configuration options for CZML output.
//!
//! [`CzmlOptions`] controls the formatting of the emitted text:
//!
//! - **Compact** (the default): no whitespace at all, the smallest payload
//!   for network delivery.
//! - **Pretty**: newlines and indentation for human readability, useful
//!   when inspecting generated documents.
//!
//! ## Examples
//!
//! ```rust
//! use czml_stream::{CzmlOptions, CzmlStream};
//!
//! // Compact output
//! let stream = CzmlStream::new(String::new());
//!
//! // Pretty-printed with 4-space indentation
//! let options = CzmlOptions::pretty().with_indent(4);
//! let stream = CzmlStream::with_options(String::new(), options);
//! ```

/// Configuration options for a [`CzmlStream`](crate::CzmlStream).
///
/// # Examples
///
/// ```rust
/// use czml_stream::CzmlOptions;
///
/// // Default compact options
/// let options = CzmlOptions::new();
///
/// // Pretty-printed with 2-space indentation
/// let options = CzmlOptions::pretty();
/// ```
#[derive(Clone, Debug)]
pub struct CzmlOptions {
    /// Number of spaces per nesting level in pretty mode.
    pub indent: usize,
    /// Whether to emit newlines and indentation.
    pub pretty: bool,
}

impl Default for CzmlOptions {
    fn default() -> Self {
        CzmlOptions {
            indent: 2,
            pretty: false,
        }
    }
}

impl CzmlOptions {
    /// Creates default options (compact output, 2-space indent when pretty
    /// formatting is later enabled).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use czml_stream::CzmlOptions;
    ///
    /// let options = CzmlOptions::new();
    /// assert_eq!(options.indent, 2);
    /// assert!(!options.pretty);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for pretty-printed output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use czml_stream::CzmlOptions;
    ///
    /// let options = CzmlOptions::pretty();
    /// assert!(options.pretty);
    /// ```
    #[must_use]
    pub fn pretty() -> Self {
        CzmlOptions {
            pretty: true,
            ..Default::default()
        }
    }

    /// Sets the indentation size (number of spaces per nesting level).
    ///
    /// Default is 2. Only affects pretty-printed output.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Enables or disables pretty formatting.
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
