//! Per-call request context.
//!
//! A [`Request`] carries the natural application URL, the virtual host
//! state established by `++vh++` markers, and the names traversed since the
//! last virtual root. It is threaded explicitly through traversal and URL
//! computation and is never shared between calls.

use url::Url;

use crate::context::Located;
use crate::error::{Error, Result};
use crate::vhost::VirtualHost;

/// Application URL used when none is configured.
pub const DEFAULT_APPLICATION_URL: &str = "http://localhost";

/// Request context for one traversal or URL computation.
///
/// # Examples
///
/// ```
/// use traversal::Request;
///
/// let request = Request::new("https://example.com/app/").unwrap();
/// assert_eq!(request.application_url(), "https://example.com/app");
/// assert!(request.virtual_host_root().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Request {
    origin: String,
    base_path: String,
    virtual_host: Option<VirtualHost>,
    traversed: Vec<String>,
}

impl Default for Request {
    fn default() -> Self {
        Self {
            origin: DEFAULT_APPLICATION_URL.to_string(),
            base_path: String::new(),
            virtual_host: None,
            traversed: Vec::new(),
        }
    }
}

impl Request {
    /// Create a request whose natural application URL is `application_url`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if the URL cannot be parsed and
    /// [`Error::Validation`] if it has no host.
    pub fn new(application_url: &str) -> Result<Self> {
        let url = Url::parse(application_url).map_err(|source| Error::InvalidUrl {
            url: application_url.to_string(),
            source,
        })?;
        let host = url.host_str().ok_or_else(|| Error::Validation {
            field: "application_url".to_string(),
            message: format!("{application_url} has no host"),
        })?;
        let origin = match url.port() {
            Some(port) => format!("{}://{host}:{port}", url.scheme()),
            None => format!("{}://{host}", url.scheme()),
        };

        Ok(Self {
            origin,
            base_path: url.path().trim_end_matches('/').to_string(),
            ..Self::default()
        })
    }

    /// The application URL as the outside world sees it.
    ///
    /// Without a virtual host this is the natural URL. Under a virtual host
    /// it is the overriding server (or the natural origin when the marker
    /// named none) followed by the virtual root's prefix segments.
    #[must_use]
    pub fn application_url(&self) -> String {
        match &self.virtual_host {
            None => format!("{}{}", self.origin, self.base_path),
            Some(vh) => {
                let mut url = vh
                    .server()
                    .map_or_else(|| self.origin.clone(), |server| server.origin());
                for segment in vh.prefix() {
                    url.push('/');
                    url.push_str(segment);
                }
                url
            }
        }
    }

    /// The application URL configured for this request, ignoring any
    /// virtual host.
    #[must_use]
    pub fn natural_application_url(&self) -> String {
        format!("{}{}", self.origin, self.base_path)
    }

    /// The active virtual host state.
    #[must_use]
    pub fn virtual_host(&self) -> Option<&VirtualHost> {
        self.virtual_host.as_ref()
    }

    /// The object standing in for the application root, if a virtual host
    /// is active.
    #[must_use]
    pub fn virtual_host_root(&self) -> Option<&Located> {
        self.virtual_host.as_ref().map(VirtualHost::root)
    }

    /// Names traversed since the last virtual root.
    #[must_use]
    pub fn traversed_names(&self) -> &[String] {
        &self.traversed
    }

    /// The public URL of the traversed path.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use traversal::object::Folder;
    /// use traversal::{Located, PathResolver, Request};
    ///
    /// let foo = Folder::new();
    /// foo.insert("bar", Arc::new(Folder::new()));
    /// let root_folder = Folder::site();
    /// root_folder.insert("foo", Arc::new(foo));
    /// let root = Located::root(Arc::new(root_folder));
    ///
    /// let mut request = Request::default();
    /// PathResolver::new()
    ///     .traverse(&root, "/foo/++vh++https:example.com:443/++/bar", &mut request)
    ///     .unwrap();
    /// assert_eq!(request.url(), "https://example.com/bar");
    /// ```
    #[must_use]
    pub fn url(&self) -> String {
        let mut url = self.application_url();
        for name in &self.traversed {
            url.push('/');
            url.push_str(name);
        }
        url
    }

    pub(crate) fn push_traversed(&mut self, name: impl Into<String>) {
        self.traversed.push(name.into());
    }

    pub(crate) fn pop_traversed(&mut self) {
        self.traversed.pop();
    }

    /// Forget the traversed names, returning how many there were.
    pub(crate) fn take_traversed(&mut self) -> usize {
        let depth = self.traversed.len();
        self.traversed.clear();
        depth
    }

    pub(crate) fn set_virtual_host(&mut self, virtual_host: VirtualHost) {
        self.virtual_host = Some(virtual_host);
    }

    pub(crate) fn virtual_host_mut(&mut self) -> Option<&mut VirtualHost> {
        self.virtual_host.as_mut()
    }
}
