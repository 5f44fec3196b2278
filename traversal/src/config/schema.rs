//! Configuration schema definitions.
//!
//! This module defines the configuration structure for traversal: the
//! natural application URL, the log mode, an object tree description and
//! the named views and resources to register.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::context::Located;
use crate::error::Result;
use crate::logging::LogLevel;
use crate::namespace::{NamespaceRegistry, ResourceNamespace, ViewNamespace};
use crate::object::{Folder, Item, ObjectRef};
use crate::request::{Request, DEFAULT_APPLICATION_URL};

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use traversal::config::Config;
///
/// let config: Config = serde_yaml::from_str(
///     "application_url: https://example.com\n\
///      tree:\n  site: true\n  children:\n    docs:\n      value: manual\n",
/// )
/// .unwrap();
/// assert_eq!(config.application_url.as_deref(), Some("https://example.com"));
/// assert!(config.root().is_some());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Natural application URL, e.g. `http://localhost:8080/app`.
    pub application_url: Option<String>,

    /// Log verbosity.
    pub log_mode: Option<LogLevel>,

    /// The object graph, starting at the root.
    pub tree: Option<TreeNode>,

    /// Views available through `@@name`, by name, with the text they render.
    pub views: Option<BTreeMap<String, String>>,

    /// Resources available through `++resource++name`, by name.
    pub resources: Option<BTreeMap<String, String>>,
}

/// One node of a configured object tree.
///
/// A node with a `value` and no children becomes an [`Item`]; anything
/// else becomes a [`Folder`].
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TreeNode {
    /// Whether the folder is a site.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub site: bool,

    /// Content of a leaf item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Child nodes by name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub children: BTreeMap<String, TreeNode>,
}

impl TreeNode {
    /// Whether this node describes an item rather than a folder.
    #[must_use]
    pub fn is_item(&self) -> bool {
        self.value.is_some() && self.children.is_empty() && !self.site
    }

    /// Build the object this node describes, children included.
    #[must_use]
    pub fn build(&self) -> ObjectRef {
        if let (true, Some(value)) = (self.is_item(), &self.value) {
            return Arc::new(Item::new(value.clone()));
        }
        let folder = if self.site {
            Folder::site()
        } else {
            Folder::new()
        };
        for (name, child) in &self.children {
            folder.insert(name.clone(), child.build());
        }
        Arc::new(folder)
    }

    /// Number of nodes in this subtree, this one included.
    #[must_use]
    pub fn count(&self) -> usize {
        1 + self.children.values().map(TreeNode::count).sum::<usize>()
    }
}

impl Config {
    /// Parse a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the YAML is invalid or has
    /// unknown fields.
    ///
    /// [`Error::Configuration`]: crate::Error::Configuration
    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// The configured application URL, or the default one.
    #[must_use]
    pub fn application_url(&self) -> &str {
        self.application_url
            .as_deref()
            .unwrap_or(DEFAULT_APPLICATION_URL)
    }

    /// A fresh request for the configured application URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the application URL is invalid.
    pub fn request(&self) -> Result<Request> {
        Request::new(self.application_url())
    }

    /// The located root of the configured tree, if there is one.
    #[must_use]
    pub fn root(&self) -> Option<Located> {
        self.tree.as_ref().map(|tree| Located::root(tree.build()))
    }

    /// The built-in namespaces plus the configured views and resources.
    #[must_use]
    pub fn registry(&self) -> NamespaceRegistry {
        let mut views = ViewNamespace::new();
        for (name, text) in self.views.iter().flatten() {
            let text = text.clone();
            views = views.with_view(
                name.clone(),
                Arc::new(move |_: &Located, _: &Request| {
                    Some(Arc::new(Item::new(text.clone())) as ObjectRef)
                }),
            );
        }

        let mut resources = ResourceNamespace::new();
        for (name, text) in self.resources.iter().flatten() {
            let text = text.clone();
            resources = resources.with_resource(
                name.clone(),
                Arc::new(move |_: &Request| Some(Arc::new(Item::new(text.clone())) as ObjectRef)),
            );
        }

        NamespaceRegistry::with_builtins()
            .with("view", Arc::new(views))
            .with("resource", Arc::new(resources))
    }
}
