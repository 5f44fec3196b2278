//! Virtual host rewriting.
//!
//! A path such as `/foo/++vh++https:example.com:443/fake/++/bar` says: the
//! object reached at `/foo` is the application root as seen from
//! `https://example.com/fake`. The segments between the marker and the
//! closing bare `++` do not name containers; they only become part of the
//! application URL. Traversal then carries on with `bar` under `/foo`.

use crate::context::Located;
use crate::error::{Error, Result};
use crate::path::{Segments, BOUNDARY_MARKER};
use crate::request::Request;

/// The server part of a `++vh++scheme:host:port` marker.
///
/// # Examples
///
/// ```
/// use traversal::vhost::Server;
///
/// let server = Server::parse("https:example.com:443").unwrap().unwrap();
/// assert_eq!(server.origin(), "https://example.com");
///
/// let server = Server::parse("http:example.com:8080").unwrap().unwrap();
/// assert_eq!(server.origin(), "http://example.com:8080");
///
/// assert!(Server::parse("").unwrap().is_none());
/// assert!(Server::parse("https:example.com").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Server {
    scheme: String,
    host: String,
    port: u16,
}

impl Server {
    /// Parse a marker spec. An empty spec names no server.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedVirtualHostSpec`] unless the spec has exactly
    /// three non-empty colon-separated fields and the port is a number.
    pub fn parse(spec: &str) -> Result<Option<Self>> {
        if spec.is_empty() {
            return Ok(None);
        }

        let fields: Vec<&str> = spec.split(':').collect();
        let [scheme, host, port] = fields.as_slice() else {
            return Err(Error::malformed_vh(spec, "expected scheme:host:port"));
        };
        if scheme.is_empty() || host.is_empty() {
            return Err(Error::malformed_vh(spec, "scheme and host must be non-empty"));
        }
        if port.is_empty() {
            return Err(Error::malformed_vh(spec, "port must be given explicitly"));
        }
        let port = port
            .parse::<u16>()
            .map_err(|e| Error::malformed_vh(spec, format!("invalid port: {e}")))?;

        Ok(Some(Self {
            scheme: (*scheme).to_string(),
            host: (*host).to_string(),
            port,
        }))
    }

    /// The URL scheme.
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// The host name.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// `scheme://host[:port]`, leaving out the scheme's default port.
    #[must_use]
    pub fn origin(&self) -> String {
        match (self.scheme.as_str(), self.port) {
            ("http", 80) | ("https", 443) => format!("{}://{}", self.scheme, self.host),
            _ => format!("{}://{}:{}", self.scheme, self.host, self.port),
        }
    }
}

/// Virtual host state of one request.
#[derive(Debug, Clone)]
pub struct VirtualHost {
    server: Option<Server>,
    prefix: Vec<String>,
    root: Located,
    strip_depth: usize,
}

impl VirtualHost {
    /// The overriding server, if the marker named one.
    #[must_use]
    pub fn server(&self) -> Option<&Server> {
        self.server.as_ref()
    }

    /// Fake segments inserted after the server in the application URL.
    #[must_use]
    pub fn prefix(&self) -> &[String] {
        &self.prefix
    }

    /// The object that plays the application root.
    #[must_use]
    pub fn root(&self) -> &Located {
        &self.root
    }

    /// How many traversed names were hidden from the public URL.
    #[must_use]
    pub fn strip_depth(&self) -> usize {
        self.strip_depth
    }
}

/// Applies virtual host markers to a request.
pub struct VirtualHostRewriter;

impl VirtualHostRewriter {
    /// Handle `++vh++spec`: consume the fake segments up to the closing `++`
    /// and make `current` the virtual root.
    ///
    /// Only the first marker of a request sets the server; later markers
    /// move the root and replace the prefix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedVirtualHostSpec`] if the spec is malformed or
    /// the closing `++` is missing.
    pub fn enter(
        spec: &str,
        segments: &mut Segments,
        current: &Located,
        request: &mut Request,
    ) -> Result<()> {
        let server = Server::parse(spec)?;

        let mut prefix = Vec::new();
        loop {
            match segments.next_segment() {
                Some(segment) if segment == BOUNDARY_MARKER => break,
                Some(segment) => {
                    if !segment.is_empty() {
                        prefix.push(segment);
                    }
                }
                None => {
                    return Err(Error::malformed_vh(
                        spec,
                        "missing closing `++` segment",
                    ))
                }
            }
        }

        let stripped = request.take_traversed();
        if let Some(existing) = request.virtual_host_mut() {
            if server.is_some() && server.as_ref() != existing.server.as_ref() {
                log::debug!("ignoring server of nested virtual host marker {spec:?}");
            }
            existing.root = current.clone();
            existing.prefix = prefix;
            existing.strip_depth += stripped;
        } else {
            log::debug!("virtual host {spec:?} rooted at {current:?} with prefix {prefix:?}");
            request.set_virtual_host(VirtualHost {
                server,
                prefix,
                root: current.clone(),
                strip_depth: stripped,
            });
        }
        Ok(())
    }

    /// Handle a bare `++` outside a marker: `current` becomes the virtual
    /// root, keeping server and prefix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedVirtualHostSpec`] if no `++vh++` marker came
    /// before.
    pub fn shift_root(current: &Located, request: &mut Request) -> Result<()> {
        if request.virtual_host().is_none() {
            return Err(Error::malformed_vh(
                BOUNDARY_MARKER,
                "boundary marker without a preceding ++vh++ marker",
            ));
        }
        let stripped = request.take_traversed();
        if let Some(existing) = request.virtual_host_mut() {
            existing.root = current.clone();
            existing.strip_depth += stripped;
        }
        Ok(())
    }
}
