//! Object tree fixtures.

use std::collections::HashMap;
use std::sync::Arc;

use traversal::object::{Folder, Item, ObjectRef};
use traversal::Located;

/// Builder for object trees.
///
/// Paths are created on demand: intermediate folders spring into existence
/// the first time a path below them is added.
///
/// # Examples
///
/// ```no_run
/// # use common::TreeFixture;
/// let root = TreeFixture::site()
///     .with_item("/foo/bar/pt", "page")
///     .build();
/// ```
#[allow(dead_code)]
pub struct TreeFixture {
    root: Arc<Folder>,
    folders: HashMap<String, Arc<Folder>>,
}

#[allow(dead_code)]
impl TreeFixture {
    /// A fixture whose root is a site, like an application root folder.
    pub fn site() -> Self {
        Self::with_root(Folder::site())
    }

    /// A fixture whose root is a plain folder.
    pub fn plain() -> Self {
        Self::with_root(Folder::new())
    }

    fn with_root(root: Folder) -> Self {
        Self {
            root: Arc::new(root),
            folders: HashMap::new(),
        }
    }

    /// Add `object` at `path`, creating folders along the way.
    pub fn with_object(mut self, path: &str, object: ObjectRef) -> Self {
        let names: Vec<&str> = path.trim_start_matches('/').split('/').collect();
        let (last, parents) = names.split_last().expect("path must name an object");
        let folder = self.folder(parents);
        folder.insert(*last, object);
        self
    }

    /// Add a text item at `path`.
    pub fn with_item(self, path: &str, value: &str) -> Self {
        self.with_object(path, Arc::new(Item::new(value)))
    }

    /// Add a folder at `path`.
    pub fn with_folder(self, path: &str, folder: Folder) -> Self {
        let mut fixture = self;
        let names: Vec<&str> = path.trim_start_matches('/').split('/').collect();
        let folder = Arc::new(folder);
        fixture.folders.insert(names.join("/"), folder.clone());
        fixture.with_object(path, folder)
    }

    /// The located root.
    pub fn build(self) -> Located {
        Located::root(self.root)
    }

    fn folder(&mut self, names: &[&str]) -> Arc<Folder> {
        let mut current = self.root.clone();
        for depth in 1..=names.len() {
            let key = names[..depth].join("/");
            current = match self.folders.get(&key) {
                Some(existing) => existing.clone(),
                None => {
                    let created = Arc::new(Folder::new());
                    current.insert(names[depth - 1], created.clone());
                    self.folders.insert(key, created.clone());
                    created
                }
            };
        }
        current
    }
}
