#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # traversal
//!
//! Path traversal, physical locations and URL computation over a rooted
//! object graph.
//!
//! Objects reached by traversal are wrapped in a [`Located`] that remembers
//! the parent and name they were found under. From there the library can
//! answer where an object lives ([`Located::physical_path`]), walk back to
//! the root, and compute the object's public URL, honoring virtual hosting
//! markers (`++vh++https:example.com:443/++`) seen in the request path.
//!
//! ## Core Types
//!
//! - [`Location`]: canonical location, with [`location_as_string`] and
//!   [`location_as_sequence`]
//! - [`Located`]: an object plus its context
//! - [`PathResolver`]: the traversal engine
//! - [`Request`]: application URL and virtual host state of one request
//! - [`namespace::NamespaceRegistry`]: handlers for `++keyword++name`
//!   segments
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use std::sync::Arc;
//! use traversal::object::{Folder, Item};
//! use traversal::{absolute_url, traverse_with, Located, Request};
//!
//! let docs = Folder::new();
//! docs.insert("manual", Arc::new(Item::new("read me")));
//! let root = Folder::site();
//! root.insert("docs", Arc::new(docs));
//! let root = Located::root(Arc::new(root));
//!
//! let mut request = Request::new("http://localhost:8080").unwrap();
//! let manual = traverse_with(&root, "docs/manual", &mut request).unwrap();
//! assert_eq!(manual.physical_path().unwrap().to_string(), "/docs/manual");
//! assert_eq!(
//!     absolute_url(&manual, &request).unwrap(),
//!     "http://localhost:8080/docs/manual"
//! );
//! ```

pub mod api;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod namespace;
pub mod object;
pub mod path;
pub mod request;
pub mod url;
pub mod vhost;

// Re-export key types at crate root for convenience
pub use crate::api::{
    absolute_url, breadcrumbs, get_parent, get_parents, get_physical_path,
    get_physical_path_string, get_physical_root, location_as_sequence, location_as_string,
    object_name, traverse, traverse_name, traverse_name_or, traverse_or, traverse_with,
};
pub use crate::config::{Config, ConfigBuilder};
pub use crate::context::{Context, ContextLink, Located};
pub use crate::error::{Error, Result};
pub use crate::logging::{init_logger, LogLevel, Logger};
pub use crate::object::{ContainerLookup, Object, ObjectRef};
pub use crate::path::{Location, PathInput, PathResolver};
pub use crate::request::Request;
pub use crate::url::Breadcrumb;
pub use crate::vhost::{Server, VirtualHost};
