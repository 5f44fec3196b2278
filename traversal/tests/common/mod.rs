//! Common test utilities for integration tests.
//!
//! This module provides fixture builders for object graphs, resolvers and
//! requests used across the traversal integration tests.

pub mod fixture;

use std::sync::Arc;

use traversal::namespace::{NamespaceRegistry, ResourceNamespace};
use traversal::object::{Item, ObjectRef};
use traversal::{Located, PathResolver, Request, Result};

pub use fixture::TreeFixture;

/// The tree used by the virtual hosting scenarios:
/// `/pt`, `/foo/index.html` and `/foo/bar/pt` below a site root.
#[allow(dead_code)]
pub fn hosting_tree() -> Located {
    TreeFixture::site()
        .with_item("/pt", "root page")
        .with_item("/foo/index.html", "Spam")
        .with_item("/foo/bar/pt", "bar page")
        .build()
}

/// Built-in namespaces plus a `quux` resource, the same object on every
/// lookup.
#[allow(dead_code)]
pub fn registry() -> Arc<NamespaceRegistry> {
    let quux: ObjectRef = Arc::new(Item::new("quux"));
    let resources = ResourceNamespace::new().with_resource(
        "quux",
        Arc::new(move |_: &Request| Some(quux.clone())),
    );
    Arc::new(NamespaceRegistry::with_builtins().with("resource", Arc::new(resources)))
}

/// A resolver using [`registry`].
#[allow(dead_code)]
pub fn resolver() -> PathResolver {
    PathResolver::new().with_registry(registry())
}

/// Traverse `path` from the physical root in a fresh request for
/// `http://localhost`, the way a publisher handles an incoming URL.
#[allow(dead_code)]
pub fn publish(root: &Located, path: &str) -> Result<(Located, Request)> {
    let mut request = Request::new("http://localhost")?;
    let found = resolver().traverse(root, path, &mut request)?;
    Ok((found, request))
}
