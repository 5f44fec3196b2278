//! Canonical encoding of locations.
//!
//! A location is either a slash-separated string or a sequence of segments.
//! The two forms convert into each other without loss as long as the
//! location is well formed:
//!
//! - it is non-empty,
//! - the root is the single empty segment `("",)`, written `"/"`,
//! - no other segment is empty, so the string form never ends with `/`
//!   and never contains `//`.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Either form of a location, as accepted by the codec and the traverser.
///
/// # Examples
///
/// ```
/// use traversal::path::PathInput;
///
/// let text: PathInput = "/foo/bar".into();
/// let segments: PathInput = vec!["", "foo", "bar"].into();
/// assert_ne!(text, segments);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathInput {
    /// A slash-separated string.
    Text(String),
    /// An already split sequence of segments.
    Segments(Vec<String>),
}

impl PathInput {
    /// Render the input for error messages.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Segments(segments) => format!("{segments:?}"),
        }
    }
}

impl From<&str> for PathInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for PathInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for PathInput {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

impl From<Vec<String>> for PathInput {
    fn from(segments: Vec<String>) -> Self {
        Self::Segments(segments)
    }
}

impl From<Vec<&str>> for PathInput {
    fn from(segments: Vec<&str>) -> Self {
        Self::Segments(segments.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for PathInput {
    fn from(segments: &[&str]) -> Self {
        Self::Segments(segments.iter().map(|s| (*s).to_string()).collect())
    }
}

impl From<&[String]> for PathInput {
    fn from(segments: &[String]) -> Self {
        Self::Segments(segments.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for PathInput {
    fn from(segments: [&str; N]) -> Self {
        Self::Segments(segments.iter().map(|s| (*s).to_string()).collect())
    }
}

impl From<Location> for PathInput {
    fn from(location: Location) -> Self {
        Self::Segments(location.segments)
    }
}

impl From<&Location> for PathInput {
    fn from(location: &Location) -> Self {
        Self::Segments(location.segments.clone())
    }
}

/// A well-formed location in sequence form.
///
/// # Examples
///
/// ```
/// use traversal::path::Location;
///
/// let location: Location = "/foo/bar".parse().unwrap();
/// assert_eq!(location.segments(), ["", "foo", "bar"]);
/// assert_eq!(location.to_string(), "/foo/bar");
///
/// assert!(Location::root().is_root());
/// assert_eq!(Location::root().to_string(), "/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    segments: Vec<String>,
}

impl Location {
    /// The root location `("",)`.
    #[must_use]
    pub fn root() -> Self {
        Self {
            segments: vec![String::new()],
        }
    }

    /// The segments of this location.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Convert into the underlying segments.
    #[must_use]
    pub fn into_segments(self) -> Vec<String> {
        self.segments
    }

    /// Whether this is the root location.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.len() == 1 && self.segments[0].is_empty()
    }

    /// Whether the location starts at the root (leading empty segment).
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.segments[0].is_empty()
    }

    /// Number of segments, counting the root marker.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false: locations are non-empty by construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The last segment.
    #[must_use]
    pub fn last(&self) -> &str {
        self.segments.last().map_or("", String::as_str)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            f.write_str("/")
        } else {
            f.write_str(&self.segments.join("/"))
        }
    }
}

impl FromStr for Location {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        decode(s)
    }
}

impl TryFrom<Vec<String>> for Location {
    type Error = Error;

    fn try_from(segments: Vec<String>) -> Result<Self> {
        decode(PathInput::Segments(segments))
    }
}

impl AsRef<[String]> for Location {
    fn as_ref(&self) -> &[String] {
        &self.segments
    }
}

/// Decode a location into its canonical sequence form.
///
/// # Errors
///
/// Returns [`Error::MalformedLocation`] if the location is empty, ends with a
/// slash (or an empty segment) without being the root, contains an empty
/// segment anywhere after the first position, or is a sequence with a
/// segment containing `/`.
///
/// # Examples
///
/// ```
/// use traversal::path::location::decode;
///
/// assert_eq!(decode("/").unwrap().segments(), [""]);
/// assert_eq!(decode("a/b").unwrap().segments(), ["a", "b"]);
/// assert!(decode("a/b/").is_err());
/// assert!(decode("").is_err());
/// ```
pub fn decode(location: impl Into<PathInput>) -> Result<Location> {
    let input = location.into();
    let segments = match &input {
        PathInput::Text(text) => {
            if text.is_empty() {
                return Err(Error::malformed(text.as_str(), "location must be non-empty"));
            }
            if text == "/" {
                return Ok(Location::root());
            }
            text.split('/').map(String::from).collect::<Vec<_>>()
        }
        PathInput::Segments(segments) => {
            if segments.is_empty() {
                return Err(Error::malformed("()", "location must be non-empty"));
            }
            if segments.iter().any(|segment| segment.contains('/')) {
                return Err(Error::malformed(
                    input.display(),
                    "segment must not contain '/'",
                ));
            }
            segments.clone()
        }
    };

    if segments.len() > 1 && segments.last().is_some_and(String::is_empty) {
        return Err(Error::malformed(
            input.display(),
            "location must not end with an empty segment",
        ));
    }
    if segments.iter().skip(1).any(String::is_empty) {
        return Err(Error::malformed(
            input.display(),
            "location must not contain empty segments",
        ));
    }

    Ok(Location { segments })
}

/// Encode a location into its canonical string form.
///
/// # Errors
///
/// Returns [`Error::MalformedLocation`] if the location is empty, would end
/// with a slash, or is a sequence with a segment containing `/`. Returns [`Error::LocationInvariant`] if the joined string
/// contains `//`.
///
/// # Examples
///
/// ```
/// use traversal::path::location::encode;
///
/// assert_eq!(encode([""]).unwrap(), "/");
/// assert_eq!(encode(["", "foo", "bar"]).unwrap(), "/foo/bar");
/// assert!(encode(Vec::<String>::new()).is_err());
/// ```
pub fn encode(location: impl Into<PathInput>) -> Result<String> {
    let text = match location.into() {
        PathInput::Text(text) => {
            if text.is_empty() {
                return Err(Error::malformed(text, "location must be non-empty"));
            }
            text
        }
        PathInput::Segments(segments) => {
            if segments.is_empty() {
                return Err(Error::malformed("()", "location must be non-empty"));
            }
            if segments.len() > 1 && segments.last().is_some_and(String::is_empty) {
                return Err(Error::malformed(
                    format!("{segments:?}"),
                    "location must not end with an empty segment",
                ));
            }
            if segments.iter().any(|segment| segment.contains('/')) {
                return Err(Error::malformed(
                    format!("{segments:?}"),
                    "segment must not contain '/'",
                ));
            }
            let joined = segments.join("/");
            if joined.is_empty() {
                return Ok("/".to_string());
            }
            joined
        }
    };

    if text != "/" && text.ends_with('/') {
        return Err(Error::malformed(text, "location must not end with a slash"));
    }
    if text.contains("//") {
        return Err(Error::LocationInvariant {
            location: text,
            reason: "encoded location contains an empty segment".to_string(),
        });
    }
    Ok(text)
}
