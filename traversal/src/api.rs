//! Free-function entry points.
//!
//! These wrap [`PathResolver`], [`Located`] and the location codec for
//! callers that do not need to configure anything. Traversals that do not
//! take a [`Request`] run against a fresh default one.

use crate::context::Located;
use crate::error::{Error, Result};
use crate::path::{self, Location, PathInput, PathResolver};
use crate::request::Request;
use crate::url::{self, Breadcrumb};

/// Traverse `path` from `place`.
///
/// # Errors
///
/// See [`PathResolver::traverse`].
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use traversal::object::{Folder, Item};
/// use traversal::{traverse, Located};
///
/// let folder = Folder::new();
/// folder.insert("item", Arc::new(Item::new("x")));
/// let root = Folder::new();
/// root.insert("folder", Arc::new(folder));
/// let root = Located::root(Arc::new(root));
///
/// let item = traverse(&root, "/folder/item").unwrap();
/// assert_eq!(item.name(), Some("item"));
/// ```
pub fn traverse(place: &Located, path: impl Into<PathInput>) -> Result<Located> {
    traverse_with(place, path, &mut Request::default())
}

/// Traverse `path` from `place`, returning `default` if a name is missing.
///
/// # Errors
///
/// See [`PathResolver::traverse_or`].
pub fn traverse_or(
    place: &Located,
    path: impl Into<PathInput>,
    default: Located,
) -> Result<Located> {
    PathResolver::new().traverse_or(place, path, default, &mut Request::default())
}

/// Traverse `path` from `place` within an existing request.
///
/// Virtual host markers in `path` update `request`.
///
/// # Errors
///
/// See [`PathResolver::traverse`].
pub fn traverse_with(
    place: &Located,
    path: impl Into<PathInput>,
    request: &mut Request,
) -> Result<Located> {
    PathResolver::new().traverse(place, path, request)
}

/// Look up a single, literal name in `place`.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if there is no such child.
pub fn traverse_name(place: &Located, name: &str) -> Result<Located> {
    PathResolver::new().traverse_name(place, name, &mut Request::default())
}

/// Look up a single, literal name in `place`, falling back to `default`.
#[must_use]
pub fn traverse_name_or(place: &Located, name: &str, default: Located) -> Located {
    traverse_name(place, name).unwrap_or(default)
}

/// The name `object` was located under; empty for the root.
///
/// # Errors
///
/// Returns [`Error::NoContext`] for a detached object.
pub fn object_name(object: &Located) -> Result<&str> {
    object
        .name()
        .ok_or_else(|| Error::no_context(format!("{:?} has no name", object.object())))
}

/// The container `object` was located in.
///
/// # Errors
///
/// Returns [`Error::NoContext`] for the root and for detached objects.
pub fn get_parent(object: &Located) -> Result<Located> {
    object.parent()
}

/// All containers of `object`, nearest first.
///
/// # Errors
///
/// Returns [`Error::NoContext`] if the chain does not end at a root.
pub fn get_parents(object: &Located) -> Result<Vec<Located>> {
    object.parents()
}

/// The physical location of `object`.
///
/// # Errors
///
/// Returns [`Error::NoContext`] if the chain does not end at a root.
pub fn get_physical_path(object: &Located) -> Result<Location> {
    object.physical_path()
}

/// The physical location of `object` in string form.
///
/// # Errors
///
/// Returns [`Error::NoContext`] if the chain does not end at a root.
pub fn get_physical_path_string(object: &Located) -> Result<String> {
    path::encode(object.physical_path()?)
}

/// The root at the top of `object`'s chain.
///
/// # Errors
///
/// Returns [`Error::NoContext`] if the chain does not end at a root.
pub fn get_physical_root(object: &Located) -> Result<Located> {
    object.physical_root()
}

/// Canonicalize a location into sequence form.
///
/// # Errors
///
/// Returns [`Error::MalformedLocation`] for a non-canonical location.
///
/// # Examples
///
/// ```
/// use traversal::location_as_sequence;
///
/// let location = location_as_sequence("/a/b").unwrap();
/// assert_eq!(location.segments(), ["", "a", "b"]);
/// assert!(location_as_sequence("a/b/").is_err());
/// ```
pub fn location_as_sequence(location: impl Into<PathInput>) -> Result<Location> {
    path::decode(location)
}

/// Canonicalize a location into string form.
///
/// # Errors
///
/// Returns [`Error::MalformedLocation`] for a non-canonical location and
/// [`Error::LocationInvariant`] if the joined form contains `//`.
///
/// # Examples
///
/// ```
/// use traversal::location_as_string;
///
/// assert_eq!(location_as_string(vec!["", "a", "b"]).unwrap(), "/a/b");
/// assert_eq!(location_as_string(vec![""]).unwrap(), "/");
/// ```
pub fn location_as_string(location: impl Into<PathInput>) -> Result<String> {
    path::encode(location)
}

/// The absolute URL of `object` within `request`.
///
/// # Errors
///
/// Returns [`Error::InsufficientContext`] for objects without enough context.
pub fn absolute_url(object: &Located, request: &Request) -> Result<String> {
    url::absolute_url(object, request)
}

/// The breadcrumb trail of `object` within `request`.
///
/// # Errors
///
/// Returns [`Error::InsufficientContext`] for objects without enough context.
pub fn breadcrumbs(object: &Located, request: &Request) -> Result<Vec<Breadcrumb>> {
    url::breadcrumbs(object, request)
}
