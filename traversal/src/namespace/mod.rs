//! Namespace dispatch for `++keyword++name` segments.
//!
//! The traverser knows nothing about concrete namespaces. It parses the
//! segment into a [`NamespaceCall`] and hands it to the handler registered
//! for the keyword. New namespaces are added by registration.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use traversal::namespace::{NamespaceHandler, NamespaceRegistry, Step};
//! use traversal::path::NamespaceCall;
//! use traversal::{Located, Result};
//!
//! /// `++self++anything` resolves to the current object.
//! struct SelfNamespace;
//!
//! impl NamespaceHandler for SelfNamespace {
//!     fn resolve(&self, _call: &NamespaceCall, step: &mut Step<'_>) -> Result<Located> {
//!         Ok(step.object.clone())
//!     }
//! }
//!
//! let registry = NamespaceRegistry::with_builtins().with("self", Arc::new(SelfNamespace));
//! assert!(registry.contains("self"));
//! assert!(registry.contains("etc"));
//! ```

mod builtins;

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::context::Located;
use crate::error::{Error, Result};
use crate::object::ContainerLookup;
use crate::path::{NamespaceCall, Segments};
use crate::request::Request;

pub use builtins::{
    EtcFactory, EtcNamespace, ItemNamespace, ResourceFactory, ResourceNamespace, ResourcesView,
    ViewFactory, ViewNamespace,
};

/// Everything a handler may look at while resolving one namespace segment.
pub struct Step<'a> {
    /// The object being stepped from.
    pub object: &'a Located,
    /// Segments not yet traversed; handlers may consume more of them.
    pub segments: &'a mut Segments,
    /// The request context.
    pub request: &'a Request,
    /// The container lookup in use by the traverser.
    pub lookup: &'a dyn ContainerLookup,
}

/// Resolves segments of one namespace.
pub trait NamespaceHandler: Send + Sync {
    /// Produce the next object of the walk.
    ///
    /// # Errors
    ///
    /// Handlers report [`Error::NotFound`] when the name does not exist in
    /// their namespace; other errors pass through unchanged.
    fn resolve(&self, call: &NamespaceCall, step: &mut Step<'_>) -> Result<Located>;
}

static GLOBAL: OnceLock<Arc<NamespaceRegistry>> = OnceLock::new();

/// Keyword to handler mapping.
#[derive(Clone, Default)]
pub struct NamespaceRegistry {
    handlers: HashMap<String, Arc<dyn NamespaceHandler>>,
}

impl NamespaceRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the `item`, `etc`, `view` and `resource` namespaces.
    ///
    /// The view and resource namespaces start out empty.
    #[must_use]
    pub fn with_builtins() -> Self {
        Self::new()
            .with("item", Arc::new(ItemNamespace))
            .with("etc", Arc::new(EtcNamespace::new()))
            .with("view", Arc::new(ViewNamespace::new()))
            .with("resource", Arc::new(ResourceNamespace::new()))
    }

    /// Register a handler, replacing any previous one for the keyword.
    #[must_use]
    pub fn with(mut self, keyword: impl Into<String>, handler: Arc<dyn NamespaceHandler>) -> Self {
        self.register(keyword, handler);
        self
    }

    /// Register a handler in place.
    pub fn register(&mut self, keyword: impl Into<String>, handler: Arc<dyn NamespaceHandler>) {
        self.handlers.insert(keyword.into(), handler);
    }

    /// Whether a handler is registered for `keyword`.
    #[must_use]
    pub fn contains(&self, keyword: &str) -> bool {
        self.handlers.contains_key(keyword)
    }

    /// Registered keywords in sorted order.
    #[must_use]
    pub fn keywords(&self) -> Vec<&str> {
        let mut keywords: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        keywords.sort_unstable();
        keywords
    }

    /// Dispatch a namespace segment to its handler.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNamespace`] if no handler is registered for
    /// the keyword, or whatever the handler reports.
    pub fn resolve(&self, call: &NamespaceCall, step: &mut Step<'_>) -> Result<Located> {
        let handler = self
            .handlers
            .get(&call.keyword)
            .ok_or_else(|| Error::UnknownNamespace {
                keyword: call.keyword.clone(),
            })?;
        log::trace!("dispatching {:?} to namespace {:?}", call.raw, call.keyword);
        handler.resolve(call, step)
    }

    /// Make this registry the process-wide one.
    ///
    /// Must happen before the first traversal that uses the global registry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if a global registry is already in place.
    pub fn install(self) -> Result<()> {
        GLOBAL.set(Arc::new(self)).map_err(|_| Error::Validation {
            field: "namespace registry".to_string(),
            message: "a global namespace registry is already installed".to_string(),
        })
    }

    /// The process-wide registry, defaulting to [`Self::with_builtins`].
    #[must_use]
    pub fn global() -> Arc<NamespaceRegistry> {
        GLOBAL
            .get_or_init(|| Arc::new(NamespaceRegistry::with_builtins()))
            .clone()
    }
}

impl fmt::Debug for NamespaceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamespaceRegistry")
            .field("keywords", &self.keywords())
            .finish()
    }
}
