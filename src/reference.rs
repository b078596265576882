//! References from one property to another.
//!
//! A reference names a value defined elsewhere in the document: the
//! identifier of the object that carries it, plus the dotted path of
//! property names leading to it. The canonical text form is
//! `identifier#prop.subprop`; `#`, `.` and `\` occurring inside the
//! identifier or a path segment are backslash-escaped so the form stays
//! unambiguous.
//!
//! ## Examples
//!
//! ```rust
//! use czml_stream::Reference;
//!
//! let reference = Reference::new("obj1", ["position", "x"]);
//! assert_eq!(reference.to_string(), "obj1#position.x");
//!
//! let parsed: Reference = "obj1#position.x".parse().unwrap();
//! assert_eq!(parsed, reference);
//! ```

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A link to another property in the same document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reference {
    identifier: String,
    path: Vec<String>,
}

impl Reference {
    /// Creates a reference from an object identifier and a property path.
    ///
    /// The path lists property names from the referenced object inward;
    /// it usually has a single element.
    pub fn new<I, P>(identifier: I, path: P) -> Self
    where
        I: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Reference {
            identifier: identifier.into(),
            path: path.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a reference to a single named property of an object.
    pub fn to_property(identifier: impl Into<String>, property_name: impl Into<String>) -> Self {
        Reference {
            identifier: identifier.into(),
            path: vec![property_name.into()],
        }
    }

    /// Parses the canonical escaped form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when the text has no unescaped
    /// `#` separating the identifier from the path, or ends in a dangling
    /// backslash.
    pub fn parse(value: &str) -> Result<Self> {
        let mut identifier = None;
        let mut path = Vec::new();
        let mut segment = String::new();
        let mut chars = value.chars();

        while let Some(c) = chars.next() {
            match c {
                '\\' => match chars.next() {
                    Some(escaped) => segment.push(escaped),
                    None => {
                        return Err(Error::invalid_argument(format!(
                            "reference string \"{value}\" ends in an unmatched backslash"
                        )))
                    }
                },
                '#' if identifier.is_none() => {
                    identifier = Some(std::mem::take(&mut segment));
                }
                '.' if identifier.is_some() => {
                    path.push(std::mem::take(&mut segment));
                }
                _ => segment.push(c),
            }
        }

        match identifier {
            Some(identifier) => {
                path.push(segment);
                Ok(Reference { identifier, path })
            }
            None => Err(Error::invalid_argument(format!(
                "reference string \"{value}\" is missing a '#' separating the \
                 identifier from the property path"
            ))),
        }
    }

    /// The identifier of the object containing the referenced property.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The property path on the referenced object.
    pub fn path(&self) -> &[String] {
        &self.path
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_escaped_part(f, &self.identifier)?;
        f.write_str("#")?;
        for (i, segment) in self.path.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write_escaped_part(f, segment)?;
        }
        Ok(())
    }
}

impl FromStr for Reference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Reference::parse(s)
    }
}

/// Escapes `#`, `.` and `\` inside an identifier or path segment.
fn write_escaped_part(f: &mut fmt::Formatter<'_>, part: &str) -> fmt::Result {
    for c in part.chars() {
        if matches!(c, '#' | '.' | '\\') {
            f.write_str("\\")?;
        }
        write!(f, "{c}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_form() {
        let reference = Reference::new("obj1", ["position", "x"]);
        assert_eq!(reference.to_string(), "obj1#position.x");
    }

    #[test]
    fn test_single_property() {
        let reference = Reference::to_property("satellite", "billboard");
        assert_eq!(reference.to_string(), "satellite#billboard");
        assert_eq!(reference.path(), ["billboard"]);
    }

    #[test]
    fn test_escaping() {
        let reference = Reference::new("my#id", ["a.b", "c\\d"]);
        assert_eq!(reference.to_string(), "my\\#id#a\\.b.c\\\\d");
    }

    #[test]
    fn test_parse_round_trip() {
        for text in ["obj1#position.x", "my\\#id#a\\.b.c\\\\d", "id#p"] {
            let reference = Reference::parse(text).unwrap();
            assert_eq!(reference.to_string(), text);
        }
    }

    #[test]
    fn test_parse_components() {
        let reference = Reference::parse("my\\#id#a\\.b.c").unwrap();
        assert_eq!(reference.identifier(), "my#id");
        assert_eq!(reference.path(), ["a.b", "c"]);
    }

    #[test]
    fn test_parse_rejects_missing_separator() {
        assert!(Reference::parse("no separator").is_err());
        assert!(Reference::parse("escaped\\#only").is_err());
    }

    #[test]
    fn test_parse_rejects_dangling_backslash() {
        assert!(Reference::parse("id#path\\").is_err());
    }
}
