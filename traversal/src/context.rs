//! Context chains: where an object was reached from.
//!
//! A [`Located`] pairs an object with the context it was found in. The
//! context is a back-reference to the parent plus the name under the parent;
//! it never owns anything beyond a shared handle, so many located objects can
//! report the same parent.

use std::fmt;
use std::iter::FusedIterator;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::object::{Object, ObjectRef};
use crate::path::Location;

/// The recorded `(parent, name)` association of a located object.
#[derive(Clone)]
pub struct ContextLink {
    parent: Located,
    name: String,
}

impl ContextLink {
    /// The object this one was reached from.
    #[must_use]
    pub fn parent(&self) -> &Located {
        &self.parent
    }

    /// The name under the parent.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for ContextLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextLink")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// How much context a located object carries.
#[derive(Debug, Clone)]
pub enum Context {
    /// The containment root. It has no parent and its physical path is `/`.
    Root,
    /// Reached from a parent under a name.
    Child(ContextLink),
    /// No context information at all.
    Detached,
}

struct Inner {
    object: ObjectRef,
    context: Context,
}

/// An object together with the context it was reached in.
///
/// Cloning is cheap; clones share the object and the chain.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use traversal::context::Located;
/// use traversal::object::{Folder, Item};
///
/// let root = Located::root(Arc::new(Folder::new()));
/// let foo = Located::child(&root, "foo", Arc::new(Folder::new()));
/// let bar = Located::child(&foo, "bar", Arc::new(Item::new("bar")));
///
/// assert_eq!(bar.physical_path().unwrap().to_string(), "/foo/bar");
/// assert!(bar.physical_root().unwrap().same_object(&root));
/// assert_eq!(bar.parents().unwrap().len(), 2);
/// ```
#[derive(Clone)]
pub struct Located {
    inner: Arc<Inner>,
}

impl Located {
    fn with_context(object: ObjectRef, context: Context) -> Self {
        Self {
            inner: Arc::new(Inner { object, context }),
        }
    }

    /// Locate `object` as the containment root.
    #[must_use]
    pub fn root(object: ObjectRef) -> Self {
        Self::with_context(object, Context::Root)
    }

    /// Locate `object` under `parent` with `name`.
    #[must_use]
    pub fn child(parent: &Located, name: impl Into<String>, object: ObjectRef) -> Self {
        Self::with_context(
            object,
            Context::Child(ContextLink {
                parent: parent.clone(),
                name: name.into(),
            }),
        )
    }

    /// Wrap `object` without any context.
    #[must_use]
    pub fn detached(object: ObjectRef) -> Self {
        Self::with_context(object, Context::Detached)
    }

    /// The object itself.
    #[must_use]
    pub fn object(&self) -> &ObjectRef {
        &self.inner.object
    }

    /// Downcast the object to a concrete type.
    #[must_use]
    pub fn downcast_ref<T: Object>(&self) -> Option<&T> {
        self.inner.object.downcast_ref::<T>()
    }

    /// The recorded context.
    #[must_use]
    pub fn context(&self) -> &Context {
        &self.inner.context
    }

    /// The context link, if the object was reached from a parent.
    #[must_use]
    pub fn link(&self) -> Option<&ContextLink> {
        match &self.inner.context {
            Context::Child(link) => Some(link),
            Context::Root | Context::Detached => None,
        }
    }

    /// The name the object was traversed via.
    ///
    /// The root's name is the empty string; detached objects have none.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match &self.inner.context {
            Context::Root => Some(""),
            Context::Child(link) => Some(&link.name),
            Context::Detached => None,
        }
    }

    /// Whether this is the containment root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        matches!(self.inner.context, Context::Root)
    }

    /// Graph identity: both wrap the very same object.
    #[must_use]
    pub fn same_object(&self, other: &Located) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.inner.object), Arc::as_ptr(&other.inner.object))
    }

    /// The container this object was traversed via.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoContext`] for the root and for detached objects.
    pub fn parent(&self) -> Result<Located> {
        match &self.inner.context {
            Context::Child(link) => Ok(link.parent.clone()),
            Context::Root => Err(Error::no_context("the root has no parent")),
            Context::Detached => Err(Error::no_context(format!(
                "{:?} was not located in a container",
                self.inner.object
            ))),
        }
    }

    /// Lazily walk the parents, nearest first, ending at the root.
    ///
    /// The root itself yields nothing. Iteration stops early if an ancestor
    /// turns out to be detached.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoContext`] if this object is detached.
    pub fn ancestors(&self) -> Result<Ancestors> {
        match &self.inner.context {
            Context::Root => Ok(Ancestors { next: None }),
            Context::Child(link) => Ok(Ancestors {
                next: Some(link.parent.clone()),
            }),
            Context::Detached => Err(Error::no_context(format!(
                "cannot list the parents of unlocated {:?}",
                self.inner.object
            ))),
        }
    }

    /// All parents, nearest first, the last one being the root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoContext`] if this object or any ancestor is
    /// detached.
    pub fn parents(&self) -> Result<Vec<Located>> {
        let parents: Vec<Located> = self.ancestors()?.collect();
        match parents.last() {
            Some(last) if !last.is_root() => Err(Error::no_context(format!(
                "not enough context to list all parents of {:?}",
                self.inner.object
            ))),
            _ => Ok(parents),
        }
    }

    /// Physical path if known, otherwise the debug form. Used in messages.
    pub(crate) fn describe(&self) -> String {
        self.physical_path()
            .map_or_else(|_| format!("{:?}", self.inner.object), |path| path.to_string())
    }

    /// The containment root at the top of the chain.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoContext`] if the chain ends in a detached object
    /// instead of a root.
    pub fn physical_root(&self) -> Result<Located> {
        let mut current = self.clone();
        while !current.is_root() {
            let next = match current.context() {
                Context::Child(link) => link.parent.clone(),
                Context::Root | Context::Detached => {
                    return Err(Error::no_context(format!(
                        "{:?} is not connected to a root",
                        self.inner.object
                    )))
                }
            };
            current = next;
        }
        Ok(current)
    }

    /// The names from the root down to this object, the root contributing
    /// the empty segment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoContext`] if any object on the way up is detached;
    /// a partial path is never returned. Returns [`Error::LocationInvariant`]
    /// if a name on the chain contains `/`.
    pub fn physical_path(&self) -> Result<Location> {
        let mut names = Vec::new();
        let mut current = self.clone();
        loop {
            let next = match current.context() {
                Context::Root => break,
                Context::Child(link) => {
                    names.push(link.name.clone());
                    link.parent.clone()
                }
                Context::Detached => {
                    return Err(Error::no_context(format!(
                        "cannot compute the physical path of {:?}",
                        self.inner.object
                    )))
                }
            };
            current = next;
        }
        names.push(String::new());
        names.reverse();
        if names.iter().any(|name| name.contains('/')) {
            return Err(Error::LocationInvariant {
                location: names.join("/"),
                reason: "a name on the containment chain contains '/'".to_string(),
            });
        }
        Location::try_from(names)
    }
}

impl fmt::Debug for Located {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Located")
            .field("object", &self.inner.object)
            .field("name", &self.name())
            .finish()
    }
}

/// Iterator over the parents of a located object, nearest first.
#[derive(Debug, Clone)]
pub struct Ancestors {
    next: Option<Located>,
}

impl Iterator for Ancestors {
    type Item = Located;

    fn next(&mut self) -> Option<Located> {
        let current = self.next.take()?;
        self.next = current.link().map(|link| link.parent.clone());
        Some(current)
    }
}

impl FusedIterator for Ancestors {}
