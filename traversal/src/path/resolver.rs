//! The traversal engine.
//!
//! This module provides the `PathResolver` type, which walks an input path
//! from a starting object, one segment at a time, delegating virtual host
//! markers to the [`VirtualHostRewriter`], namespace segments to the
//! [`NamespaceRegistry`] and ordinary names to a [`ContainerLookup`].

use std::fmt;
use std::sync::Arc;

use crate::context::Located;
use crate::error::{Error, Result};
use crate::namespace::{NamespaceRegistry, Step};
use crate::object::{ContainerLookup, ObjectLookup};
use crate::path::location::PathInput;
use crate::path::segment::{NamespaceCall, Segment, Segments, RESOURCE_KEYWORD};
use crate::request::Request;
use crate::vhost::VirtualHostRewriter;

/// Resolves input paths against the object graph.
///
/// A resolver is cheap to clone and holds no per-call state; everything a
/// single traversal needs lives in the [`Request`].
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use traversal::object::{Folder, Item};
/// use traversal::{Located, PathResolver, Request};
///
/// let folder = Folder::new();
/// folder.insert("item", Arc::new(Item::new("hello")));
/// let root_folder = Folder::new();
/// root_folder.insert("folder", Arc::new(folder));
/// let root = Located::root(Arc::new(root_folder));
///
/// let resolver = PathResolver::new();
/// let mut request = Request::default();
/// let found = resolver.traverse(&root, "folder/../folder/./item", &mut request).unwrap();
/// assert_eq!(found.physical_path().unwrap().to_string(), "/folder/item");
/// ```
#[derive(Clone)]
pub struct PathResolver {
    /// Handlers for `++keyword++name` segments.
    registry: Arc<NamespaceRegistry>,
    /// How ordinary names are looked up.
    lookup: Arc<dyn ContainerLookup>,
}

impl Default for PathResolver {
    fn default() -> Self {
        Self {
            registry: NamespaceRegistry::global(),
            lookup: Arc::new(ObjectLookup),
        }
    }
}

impl PathResolver {
    /// Create a resolver using the global namespace registry and plain
    /// object lookup.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit namespace registry instead of the global one.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use traversal::namespace::NamespaceRegistry;
    /// use traversal::PathResolver;
    ///
    /// let resolver = PathResolver::new().with_registry(Arc::new(NamespaceRegistry::new()));
    /// assert!(resolver.registry().keywords().is_empty());
    /// ```
    #[must_use]
    pub fn with_registry(mut self, registry: Arc<NamespaceRegistry>) -> Self {
        self.registry = registry;
        self
    }

    /// Use a custom container lookup, for example one enforcing security.
    #[must_use]
    pub fn with_lookup(mut self, lookup: Arc<dyn ContainerLookup>) -> Self {
        self.lookup = lookup;
        self
    }

    /// The namespace registry in use.
    #[must_use]
    pub fn registry(&self) -> &NamespaceRegistry {
        &self.registry
    }

    /// Walk `path` starting at `start`.
    ///
    /// A leading `/` starts the walk at the physical root of `start`. Empty
    /// segments and `.` are skipped; `..` moves to the parent.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - [`Error::MalformedLocation`] for an empty path
    /// - [`Error::NotFound`] if a name does not exist in its container
    /// - [`Error::Traversal`] if `..` is used on an object without a parent
    /// - [`Error::NoContext`] for an absolute path from a detached object
    /// - [`Error::UnknownNamespace`] or [`Error::MalformedVirtualHostSpec`]
    ///   for bad special segments
    pub fn traverse(
        &self,
        start: &Located,
        path: impl Into<PathInput>,
        request: &mut Request,
    ) -> Result<Located> {
        let mut segments = Segments::parse(path)?;
        let current = if segments.is_absolute() {
            start.physical_root()?
        } else {
            start.clone()
        };
        self.walk(current, &mut segments, request)
    }

    /// Like [`traverse`](Self::traverse), but return `default` if any name
    /// along the way is missing.
    ///
    /// Only [`Error::NotFound`] is replaced; every other error propagates.
    ///
    /// # Errors
    ///
    /// Returns any error [`traverse`](Self::traverse) reports other than
    /// [`Error::NotFound`].
    pub fn traverse_or(
        &self,
        start: &Located,
        path: impl Into<PathInput>,
        default: Located,
        request: &mut Request,
    ) -> Result<Located> {
        match self.traverse(start, path, request) {
            Err(err) if err.is_not_found() => {
                log::debug!("using default after lookup failure: {err}");
                Ok(default)
            }
            other => other,
        }
    }

    /// Look up exactly one name in `start`.
    ///
    /// The name is taken literally: `..`, `@@x` or `a/b` are child names
    /// here, never special segments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if `start` has no such child.
    pub fn traverse_name(
        &self,
        start: &Located,
        name: &str,
        request: &mut Request,
    ) -> Result<Located> {
        log::trace!("looking up single name {name:?} in {start:?}");
        let next = self.lookup_name(start, name)?;
        request.push_traversed(name);
        Ok(next)
    }

    /// Drain `segments`, moving from `current` one step at a time.
    fn walk(
        &self,
        mut current: Located,
        segments: &mut Segments,
        request: &mut Request,
    ) -> Result<Located> {
        while let Some(raw) = segments.next_segment() {
            log::trace!("traversing {raw:?} from {current:?}");
            current = self.step(&current, &raw, segments, request)?;
        }
        Ok(current)
    }

    fn step(
        &self,
        current: &Located,
        raw: &str,
        segments: &mut Segments,
        request: &mut Request,
    ) -> Result<Located> {
        match Segment::classify(raw) {
            Segment::Empty | Segment::Current => Ok(current.clone()),
            Segment::Parent => {
                let parent = current.parent().map_err(|source| Error::Traversal {
                    segment: raw.to_string(),
                    source: Box::new(source),
                })?;
                request.pop_traversed();
                Ok(parent)
            }
            Segment::VirtualHost(spec) => {
                VirtualHostRewriter::enter(spec, segments, current, request)?;
                Ok(current.clone())
            }
            Segment::Boundary => {
                VirtualHostRewriter::shift_root(current, request)?;
                Ok(current.clone())
            }
            Segment::Namespace(call) => {
                let mut step = Step {
                    object: current,
                    segments: &mut *segments,
                    request: &*request,
                    lookup: self.lookup.as_ref(),
                };
                let next = self.registry.resolve(&call, &mut step)?;
                request.push_traversed(raw);
                Ok(next)
            }
            Segment::Resources => {
                let name = segments.next_segment().ok_or_else(|| Error::NotFound {
                    name: raw.to_string(),
                    container: current.describe(),
                })?;
                let call = NamespaceCall::parse(RESOURCE_KEYWORD, &name, &format!("{raw}/{name}"));
                let mut step = Step {
                    object: current,
                    segments: &mut *segments,
                    request: &*request,
                    lookup: self.lookup.as_ref(),
                };
                let next = self.registry.resolve(&call, &mut step)?;
                request.push_traversed(raw);
                request.push_traversed(name);
                Ok(next)
            }
            Segment::Name(name) => {
                let next = self.lookup_name(current, name)?;
                request.push_traversed(name);
                Ok(next)
            }
        }
    }

    fn lookup_name(&self, current: &Located, name: &str) -> Result<Located> {
        self.lookup
            .child(current, name)
            .ok_or_else(|| Error::NotFound {
                name: name.to_string(),
                container: current.describe(),
            })
    }
}

impl fmt::Debug for PathResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathResolver")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
