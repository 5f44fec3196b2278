//! The object graph collaborator.
//!
//! Traversal never owns objects. It asks them for children by name through
//! [`ContainerLookup`] and relies on the lookup to attach the context link of
//! whatever it returns. [`Folder`] and [`Item`] are small in-memory content
//! types used by the CLI and the tests.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::context::Located;

/// Shared handle to an object in the graph.
pub type ObjectRef = Arc<dyn Object>;

/// An object that can live in a traversable graph.
///
/// Only [`Object::as_any`] is required. Containers override
/// [`Object::child`]; sites and error values flip the marker methods that
/// change how URLs are computed for them.
///
/// # Examples
///
/// ```
/// use std::any::Any;
/// use traversal::object::Object;
///
/// #[derive(Debug)]
/// struct Page;
///
/// impl Object for Page {
///     fn as_any(&self) -> &dyn Any {
///         self
///     }
/// }
///
/// assert!(Page.child("anything").is_none());
/// ```
pub trait Object: Any + Send + Sync + fmt::Debug {
    /// Look up a direct child by name.
    fn child(&self, name: &str) -> Option<ObjectRef> {
        let _ = name;
        None
    }

    /// Whether this object is a site: its URL is the application URL plus
    /// its own name, regardless of the containers above it.
    fn is_site(&self) -> bool {
        false
    }

    /// Whether this object stands for an error. Error objects are not
    /// really located, so their breadcrumbs collapse to the root.
    fn is_error(&self) -> bool {
        false
    }

    /// The site manager reachable through `++etc++site`.
    fn site_manager(&self) -> Option<ObjectRef> {
        None
    }

    /// Upcast used for downcasting to the concrete type.
    fn as_any(&self) -> &dyn Any;
}

impl dyn Object {
    /// Downcast to a concrete object type.
    #[must_use]
    pub fn downcast_ref<T: Object>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

/// Container lookup used for ordinary path segments.
///
/// Implementations must return the child already located under `parent`
/// with `name`, so the traverser never has to attach context itself.
/// Security checks, if any, belong in an implementation of this trait.
pub trait ContainerLookup: Send + Sync {
    /// Return the child of `parent` called `name`, or `None`.
    fn child(&self, parent: &Located, name: &str) -> Option<Located>;
}

/// The default lookup: ask the object itself via [`Object::child`].
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use traversal::context::Located;
/// use traversal::object::{ContainerLookup, Folder, Item, ObjectLookup};
///
/// let folder = Folder::new();
/// folder.insert("page", Arc::new(Item::new("hello")));
/// let root = Located::root(Arc::new(folder));
///
/// let page = ObjectLookup.child(&root, "page").unwrap();
/// assert_eq!(page.name(), Some("page"));
/// assert!(page.parent().unwrap().same_object(&root));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct ObjectLookup;

impl ContainerLookup for ObjectLookup {
    fn child(&self, parent: &Located, name: &str) -> Option<Located> {
        parent
            .object()
            .child(name)
            .map(|object| Located::child(parent, name, object))
    }
}

/// An in-memory container.
///
/// Children can be added and removed while other threads traverse; reads
/// always see a consistent snapshot of a single entry.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use traversal::object::{Folder, Item, Object};
///
/// let folder = Folder::new();
/// folder.insert("a", Arc::new(Item::new("A")));
/// assert!(folder.child("a").is_some());
/// assert_eq!(folder.names(), vec!["a".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct Folder {
    items: RwLock<BTreeMap<String, ObjectRef>>,
    site_manager: Option<ObjectRef>,
}

impl Folder {
    /// Create an empty folder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty folder that is a site, with its own site manager.
    #[must_use]
    pub fn site() -> Self {
        Self {
            items: RwLock::default(),
            site_manager: Some(Arc::new(Folder::new())),
        }
    }

    /// Add or replace a child, returning the previous one.
    pub fn insert(&self, name: impl Into<String>, object: ObjectRef) -> Option<ObjectRef> {
        self.items
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.into(), object)
    }

    /// Remove a child, returning it.
    pub fn remove(&self, name: &str) -> Option<ObjectRef> {
        self.items
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(name)
    }

    /// Names of all children in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    /// Number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether the folder has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Object for Folder {
    fn child(&self, name: &str) -> Option<ObjectRef> {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    fn is_site(&self) -> bool {
        self.site_manager.is_some()
    }

    fn site_manager(&self) -> Option<ObjectRef> {
        self.site_manager.clone()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A leaf object carrying a text value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    value: String,
}

impl Item {
    /// Create an item.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The item's value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Object for Item {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// An error value that ended up in the graph, e.g. as a traversal result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    message: String,
}

impl Failure {
    /// Create a failure object.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Object for Failure {
    fn is_error(&self) -> bool {
        true
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
