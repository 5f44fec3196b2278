//! Error types for the traversal library.
//!
//! Every failure mode of location decoding, traversal and URL computation has
//! its own variant so callers can map them to status codes without parsing
//! messages. Nothing in this crate retries on error.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a traversal error.
///
/// # Examples
///
/// ```
/// use traversal::{Error, Result};
///
/// fn example_operation() -> Result<&'static str> {
///     Ok("/")
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the traversal library.
#[derive(Debug, Error)]
pub enum Error {
    /// A location string or sequence violates the canonical form.
    #[error("malformed location {location:?}: {reason}")]
    MalformedLocation {
        /// The offending location, rendered for display.
        location: String,
        /// Why the location was rejected.
        reason: String,
    },

    /// An encoded location broke an internal invariant.
    ///
    /// This signals a bug in whatever produced the segments, not bad user
    /// input.
    #[error("location invariant violated for {location:?}: {reason}")]
    LocationInvariant {
        /// The encoded location.
        location: String,
        /// The invariant that failed.
        reason: String,
    },

    /// An ordinary segment had no matching child.
    #[error("not found: {name:?} in {container}")]
    NotFound {
        /// The name that could not be resolved.
        name: String,
        /// Description of the container that was searched.
        container: String,
    },

    /// An object has no recorded parent where one is required.
    #[error("not enough context information to traverse: {details}")]
    NoContext {
        /// What was being attempted.
        details: String,
    },

    /// An object lacks the parent or name needed to compute a URL.
    #[error(
        "there isn't enough context to get URL information: {details} \
         (this is probably due to a bug in setting up location information)"
    )]
    InsufficientContext {
        /// What was missing.
        details: String,
    },

    /// A traversal step failed because of an underlying error.
    #[error("cannot traverse {segment:?}: {source}")]
    Traversal {
        /// The segment being traversed.
        segment: String,
        /// The underlying error.
        #[source]
        source: Box<Error>,
    },

    /// A `++keyword++` segment names a namespace nobody registered.
    #[error("unknown namespace: {keyword:?}")]
    UnknownNamespace {
        /// The keyword found in the segment.
        keyword: String,
    },

    /// A `++vh++` marker does not follow the `scheme:host:port` grammar.
    #[error("malformed virtual host spec {spec:?}: {reason}")]
    MalformedVirtualHostSpec {
        /// The marker specification.
        spec: String,
        /// Why it was rejected.
        reason: String,
    },

    /// An application URL could not be parsed.
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        /// The URL text.
        url: String,
        /// The parser error.
        #[source]
        source: url::ParseError,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    pub(crate) fn malformed(location: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedLocation {
            location: location.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn no_context(details: impl Into<String>) -> Self {
        Self::NoContext {
            details: details.into(),
        }
    }

    pub(crate) fn insufficient_context(details: impl Into<String>) -> Self {
        Self::InsufficientContext {
            details: details.into(),
        }
    }

    pub(crate) fn malformed_vh(spec: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedVirtualHostSpec {
            spec: spec.into(),
            reason: reason.into(),
        }
    }

    /// Check if error indicates a name could not be resolved.
    ///
    /// # Examples
    ///
    /// ```
    /// use traversal::Error;
    ///
    /// let err = Error::NotFound { name: "x".into(), container: "/".into() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if error is caused by missing context information.
    ///
    /// A `Traversal` error counts when the error it wraps does.
    ///
    /// # Examples
    ///
    /// ```
    /// use traversal::Error;
    ///
    /// let err = Error::NoContext { details: "no parent".into() };
    /// assert!(err.is_context_error());
    /// ```
    #[must_use]
    pub fn is_context_error(&self) -> bool {
        match self {
            Self::NoContext { .. } | Self::InsufficientContext { .. } => true,
            Self::Traversal { source, .. } => source.is_context_error(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_location_error() {
        let err = Error::malformed("a/b/", "must not end with a slash");
        let display = format!("{err}");
        assert!(display.contains("malformed location"));
        assert!(display.contains("a/b/"));
        assert!(display.contains("must not end with a slash"));
    }

    #[test]
    fn test_location_invariant_is_distinct() {
        let err = Error::LocationInvariant {
            location: "a//b".to_string(),
            reason: "contains an empty segment".to_string(),
        };
        assert!(!matches!(err, Error::MalformedLocation { .. }));
        assert!(format!("{err}").contains("invariant"));
    }

    #[test]
    fn test_not_found_error() {
        let err = Error::NotFound {
            name: "missing".to_string(),
            container: "/foo".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("not found"));
        assert!(display.contains("missing"));
        assert!(err.is_not_found());
        assert!(!err.is_context_error());
    }

    #[test]
    fn test_insufficient_context_error() {
        let err = Error::insufficient_context("object has no parent");
        let display = format!("{err}");
        assert!(display.contains("enough context"));
        assert!(err.is_context_error());
    }

    #[test]
    fn test_traversal_error_wraps_source() {
        let err = Error::Traversal {
            segment: "..".to_string(),
            source: Box::new(Error::no_context("root has no parent")),
        };
        assert!(err.is_context_error());
        assert!(!err.is_not_found());
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert!(source.unwrap().contains("root has no parent"));
    }

    #[test]
    fn test_unknown_namespace_error() {
        let err = Error::UnknownNamespace {
            keyword: "bogus".to_string(),
        };
        assert!(format!("{err}").contains("bogus"));
    }

    #[test]
    fn test_malformed_vh_error() {
        let err = Error::malformed_vh("https:localhost", "expected scheme:host:port");
        let display = format!("{err}");
        assert!(display.contains("virtual host"));
        assert!(display.contains("https:localhost"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("I/O error"));
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "application_url".to_string(),
            message: "must use http or https".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("application_url"));
    }
}
