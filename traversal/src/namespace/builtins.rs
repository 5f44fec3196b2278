//! Namespaces shipped with the library.

use std::collections::HashMap;
use std::sync::Arc;

use crate::context::Located;
use crate::error::{Error, Result};
use crate::namespace::{NamespaceHandler, Step};
use crate::object::{Object, ObjectRef};
use crate::path::{NamespaceCall, RESOURCES_MARKER};
use crate::request::Request;

/// Builds the object behind an `++etc++name` segment.
pub type EtcFactory = Arc<dyn Fn(&Located) -> Option<ObjectRef> + Send + Sync>;

/// Builds a view of the current object.
pub type ViewFactory = Arc<dyn Fn(&Located, &Request) -> Option<ObjectRef> + Send + Sync>;

/// Builds a resource for the request.
pub type ResourceFactory = Arc<dyn Fn(&Request) -> Option<ObjectRef> + Send + Sync>;

fn not_found(call: &NamespaceCall, step: &Step<'_>) -> Error {
    Error::NotFound {
        name: call.raw.clone(),
        container: step.object.describe(),
    }
}

/// `++item++name`: plain container lookup, bypassing any special meaning
/// `name` would have as an ordinary segment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ItemNamespace;

impl NamespaceHandler for ItemNamespace {
    fn resolve(&self, call: &NamespaceCall, step: &mut Step<'_>) -> Result<Located> {
        step.lookup
            .child(step.object, &call.name)
            .ok_or_else(|| not_found(call, step))
    }
}

/// `++etc++name`: configuration objects attached to the current object.
///
/// `site` is always available and yields the object's site manager. Further
/// names dispatch to registered factories; no extra segments are consumed.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use traversal::namespace::EtcNamespace;
/// use traversal::object::Item;
///
/// let etc = EtcNamespace::new().with_entry("process", Arc::new(|_| {
///     Some(Arc::new(Item::new("controller")) as _)
/// }));
/// assert_eq!(etc.names(), vec!["process", "site"]);
/// ```
#[derive(Clone)]
pub struct EtcNamespace {
    entries: HashMap<String, EtcFactory>,
}

impl Default for EtcNamespace {
    fn default() -> Self {
        Self::new()
    }
}

impl EtcNamespace {
    /// The `etc` namespace with only the `site` entry.
    #[must_use]
    pub fn new() -> Self {
        let mut entries: HashMap<String, EtcFactory> = HashMap::new();
        entries.insert(
            "site".to_string(),
            Arc::new(|located: &Located| located.object().site_manager()),
        );
        Self { entries }
    }

    /// Add an entry.
    #[must_use]
    pub fn with_entry(mut self, name: impl Into<String>, factory: EtcFactory) -> Self {
        self.entries.insert(name.into(), factory);
        self
    }

    /// Entry names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl NamespaceHandler for EtcNamespace {
    fn resolve(&self, call: &NamespaceCall, step: &mut Step<'_>) -> Result<Located> {
        let object = self
            .entries
            .get(&call.name)
            .and_then(|factory| factory(step.object))
            .ok_or_else(|| not_found(call, step))?;
        Ok(Located::child(step.object, call.raw.clone(), object))
    }
}

/// `++view++name` and `@@name`: named views of the current object.
///
/// A view is located under the object it views, named `@@name`.
#[derive(Clone, Default)]
pub struct ViewNamespace {
    views: HashMap<String, ViewFactory>,
}

impl ViewNamespace {
    /// An empty view namespace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a view factory.
    #[must_use]
    pub fn with_view(mut self, name: impl Into<String>, factory: ViewFactory) -> Self {
        self.views.insert(name.into(), factory);
        self
    }
}

impl NamespaceHandler for ViewNamespace {
    fn resolve(&self, call: &NamespaceCall, step: &mut Step<'_>) -> Result<Located> {
        let object = self
            .views
            .get(&call.name)
            .and_then(|factory| factory(step.object, step.request))
            .ok_or_else(|| not_found(call, step))?;
        Ok(Located::child(step.object, format!("@@{}", call.name), object))
    }
}

/// `++resource++name`: request-level resources such as images.
///
/// Resources do not belong to the object they were reached from. They are
/// located under a [`ResourcesView`] named `@@` below the application root
/// (the virtual root if one is active), so their URL is the application URL
/// plus `/@@/name`, which traverses back to the same resource.
#[derive(Clone, Default)]
pub struct ResourceNamespace {
    resources: HashMap<String, ResourceFactory>,
}

impl ResourceNamespace {
    /// An empty resource namespace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource factory.
    #[must_use]
    pub fn with_resource(mut self, name: impl Into<String>, factory: ResourceFactory) -> Self {
        self.resources.insert(name.into(), factory);
        self
    }
}

impl NamespaceHandler for ResourceNamespace {
    fn resolve(&self, call: &NamespaceCall, step: &mut Step<'_>) -> Result<Located> {
        let object = self
            .resources
            .get(&call.name)
            .and_then(|factory| factory(step.request))
            .ok_or_else(|| not_found(call, step))?;
        let root = match step.request.virtual_host_root() {
            Some(root) => root.clone(),
            None => step.object.physical_root()?,
        };
        let view = Located::child(&root, RESOURCES_MARKER, Arc::new(ResourcesView));
        Ok(Located::child(&view, call.name.clone(), object))
    }
}

/// The container every resource is located in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResourcesView;

impl Object for ResourcesView {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{Folder, Item, ObjectLookup};
    use crate::path::{Segment, Segments};

    fn call(raw: &str) -> NamespaceCall {
        match Segment::classify(raw) {
            Segment::Namespace(call) => call,
            other => panic!("{raw} is not a namespace segment: {other:?}"),
        }
    }

    fn resolve(
        handler: &dyn NamespaceHandler,
        raw: &str,
        object: &Located,
        request: &Request,
    ) -> Result<Located> {
        let mut segments = Segments::default();
        let mut step = Step {
            object,
            segments: &mut segments,
            request,
            lookup: &ObjectLookup,
        };
        handler.resolve(&call(raw), &mut step)
    }

    fn site_root() -> (Located, Arc<Folder>) {
        let folder = Arc::new(Folder::site());
        folder.insert("..", Arc::new(Item::new("dots")));
        (Located::root(folder.clone()), folder)
    }

    #[test]
    fn test_item_namespace_takes_name_literally() {
        let (root, _) = site_root();
        let request = Request::default();
        let found = resolve(&ItemNamespace, "++item++..", &root, &request).unwrap();
        assert_eq!(found.downcast_ref::<Item>().unwrap().value(), "dots");
        assert_eq!(found.name(), Some(".."));
    }

    #[test]
    fn test_item_namespace_not_found() {
        let (root, _) = site_root();
        let request = Request::default();
        let result = resolve(&ItemNamespace, "++item++missing", &root, &request);
        assert!(result.unwrap_err().is_not_found());
    }

    #[test]
    fn test_etc_site() {
        let (root, folder) = site_root();
        let request = Request::default();
        let manager = resolve(&EtcNamespace::new(), "++etc++site", &root, &request).unwrap();
        let expected = folder.site_manager().unwrap();
        assert!(std::ptr::addr_eq(Arc::as_ptr(manager.object()), Arc::as_ptr(&expected)));
        assert_eq!(manager.name(), Some("++etc++site"));
    }

    #[test]
    fn test_etc_site_on_non_site_is_not_found() {
        let root = Located::root(Arc::new(Folder::new()));
        let request = Request::default();
        let result = resolve(&EtcNamespace::new(), "++etc++site", &root, &request);
        assert!(result.unwrap_err().is_not_found());
    }

    #[test]
    fn test_etc_registered_entry() {
        let etc = EtcNamespace::new().with_entry(
            "process",
            Arc::new(|_: &Located| Some(Arc::new(Item::new("controller")) as ObjectRef)),
        );
        let root = Located::root(Arc::new(Folder::new()));
        let request = Request::default();
        let found = resolve(&etc, "++etc++process", &root, &request).unwrap();
        assert_eq!(found.downcast_ref::<Item>().unwrap().value(), "controller");
    }

    #[test]
    fn test_view_namespace() {
        let views = ViewNamespace::new().with_view(
            "index.html",
            Arc::new(|context: &Located, _: &Request| {
                Some(Arc::new(Item::new(format!("view of {:?}", context.name()))) as ObjectRef)
            }),
        );
        let (root, _) = site_root();
        let request = Request::default();

        let view = resolve(&views, "@@index.html", &root, &request).unwrap();
        assert_eq!(view.name(), Some("@@index.html"));
        assert!(view.parent().unwrap().same_object(&root));
        assert!(resolve(&views, "++view++index.html", &root, &request).is_ok());
        assert!(resolve(&views, "@@other", &root, &request)
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_resource_namespace_locates_under_root() {
        let resources = ResourceNamespace::new().with_resource(
            "quux",
            Arc::new(|_: &Request| Some(Arc::new(Item::new("quux")) as ObjectRef)),
        );
        let (root, folder) = site_root();
        let child = Arc::new(Folder::new());
        folder.insert("foo", child.clone());
        let foo = Located::child(&root, "foo", child);
        let request = Request::default();

        let resource = resolve(&resources, "++resource++quux", &foo, &request).unwrap();
        assert_eq!(resource.name(), Some("quux"));
        let view = resource.parent().unwrap();
        assert_eq!(view.name(), Some("@@"));
        assert!(view.downcast_ref::<ResourcesView>().is_some());
        assert!(view.parent().unwrap().same_object(&root));
        assert_eq!(resource.physical_path().unwrap().segments(), ["", "@@", "quux"]);
    }
}
