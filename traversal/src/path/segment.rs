//! Grammar of input path segments.
//!
//! Input paths may contain tokens that never appear in a stored physical
//! location: `.`, `..`, namespace segments (`++keyword++name`, `@@name`,
//! `@@/name`) and the virtual host markers (`++vh++spec`, `++`). This module classifies raw
//! segments and holds the stack of segments still to be traversed.

use std::collections::VecDeque;

use crate::error::{Error, Result};
use crate::path::location::PathInput;

/// Keyword of the virtual host namespace.
pub const VIRTUAL_HOST_KEYWORD: &str = "vh";

/// The bare segment closing a virtual host block.
pub const BOUNDARY_MARKER: &str = "++";

/// Keyword implied by the `@@name` shorthand.
pub const VIEW_KEYWORD: &str = "view";

/// The bare segment under which resources are located.
pub const RESOURCES_MARKER: &str = "@@";

/// Keyword of the resource namespace, also reached as `@@/name`.
pub const RESOURCE_KEYWORD: &str = "resource";

/// A parsed `++keyword++name;param;...` segment.
///
/// # Examples
///
/// ```
/// use traversal::path::NamespaceCall;
///
/// let call = NamespaceCall::parse("resource", "logo.png;v2", "++resource++logo.png;v2");
/// assert_eq!(call.keyword, "resource");
/// assert_eq!(call.name, "logo.png");
/// assert_eq!(call.parameters, vec!["v2".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceCall {
    /// The namespace keyword.
    pub keyword: String,
    /// The name within the namespace, without parameters.
    pub name: String,
    /// `;`-separated parameters following the name.
    pub parameters: Vec<String>,
    /// The whole segment as it appeared in the path.
    pub raw: String,
}

impl NamespaceCall {
    /// Split `rest` into a name and its parameters.
    #[must_use]
    pub fn parse(keyword: &str, rest: &str, raw: &str) -> Self {
        let mut parts = rest.split(';');
        let name = parts.next().unwrap_or_default().to_string();
        Self {
            keyword: keyword.to_string(),
            name,
            parameters: parts.map(String::from).collect(),
            raw: raw.to_string(),
        }
    }
}

/// What a raw segment means to the traverser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// An empty segment, skipped.
    Empty,
    /// `.`, stay on the current object.
    Current,
    /// `..`, go to the parent.
    Parent,
    /// `++vh++spec`, opens a virtual host block.
    VirtualHost(&'a str),
    /// A bare `++`, closes a virtual host block or shifts the virtual root.
    Boundary,
    /// A bare `@@`, the next segment names a resource.
    Resources,
    /// A namespace segment dispatched to the namespace registry.
    Namespace(NamespaceCall),
    /// An ordinary child name.
    Name(&'a str),
}

impl<'a> Segment<'a> {
    /// Classify a raw segment.
    ///
    /// A segment starting with `++` but lacking a second `++` is an ordinary
    /// name.
    ///
    /// # Examples
    ///
    /// ```
    /// use traversal::path::Segment;
    ///
    /// assert_eq!(Segment::classify(".."), Segment::Parent);
    /// assert_eq!(Segment::classify("++"), Segment::Boundary);
    /// assert_eq!(Segment::classify("@@"), Segment::Resources);
    /// assert_eq!(Segment::classify("++vh++http:a:80"), Segment::VirtualHost("http:a:80"));
    /// assert_eq!(Segment::classify("++odd"), Segment::Name("++odd"));
    /// assert!(matches!(Segment::classify("@@index"), Segment::Namespace(_)));
    /// ```
    #[must_use]
    pub fn classify(raw: &'a str) -> Self {
        match raw {
            "" => return Self::Empty,
            "." => return Self::Current,
            ".." => return Self::Parent,
            BOUNDARY_MARKER => return Self::Boundary,
            RESOURCES_MARKER => return Self::Resources,
            _ => {}
        }

        if let Some(rest) = raw.strip_prefix("++") {
            if let Some(end) = rest.find("++") {
                let keyword = &rest[..end];
                let tail = &rest[end + 2..];
                if keyword == VIRTUAL_HOST_KEYWORD {
                    return Self::VirtualHost(tail);
                }
                return Self::Namespace(NamespaceCall::parse(keyword, tail, raw));
            }
        } else if let Some(rest) = raw.strip_prefix("@@") {
            return Self::Namespace(NamespaceCall::parse(VIEW_KEYWORD, rest, raw));
        }

        Self::Name(raw)
    }
}

/// The segments still to be traversed, front first.
///
/// Namespace handlers receive this stack and may consume more segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segments {
    remaining: VecDeque<String>,
    absolute: bool,
}

impl Segments {
    /// Parse an input path.
    ///
    /// Unlike [`decode`](crate::path::location::decode) this is lenient: a
    /// leading `/` marks the path absolute, a single trailing `/` is
    /// dropped, and empty segments are kept for the traverser to skip.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedLocation`] for an empty path.
    ///
    /// # Examples
    ///
    /// ```
    /// use traversal::path::Segments;
    ///
    /// let segments = Segments::parse("/foo/bar/").unwrap();
    /// assert!(segments.is_absolute());
    /// assert_eq!(segments.len(), 2);
    /// ```
    pub fn parse(path: impl Into<PathInput>) -> Result<Self> {
        let input = path.into();
        let mut parts: Vec<String> = match &input {
            PathInput::Text(text) => {
                if text.is_empty() {
                    return Err(Error::malformed(text.as_str(), "path must be non-empty"));
                }
                text.split('/').map(String::from).collect()
            }
            PathInput::Segments(segments) => {
                if segments.is_empty() {
                    return Err(Error::malformed("()", "path must be non-empty"));
                }
                segments.clone()
            }
        };

        let absolute = parts[0].is_empty();
        if absolute {
            parts.remove(0);
        }
        if matches!(input, PathInput::Text(_)) && parts.last().is_some_and(String::is_empty) {
            parts.pop();
        }

        Ok(Self {
            remaining: parts.into(),
            absolute,
        })
    }

    /// Whether the path started at the root.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    /// Take the next segment.
    pub fn next_segment(&mut self) -> Option<String> {
        self.remaining.pop_front()
    }

    /// Look at the next segment without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&str> {
        self.remaining.front().map(String::as_str)
    }

    /// Number of segments left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    /// Whether all segments have been consumed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }
}
