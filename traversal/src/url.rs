//! Absolute URLs and breadcrumb trails.
//!
//! URLs are computed by walking the context chain upwards until an object
//! that stands for the application root: the request's virtual root, the
//! physical root, or a site. The names passed on the way are appended to the
//! request's application URL.

use serde::Serialize;

use crate::context::Located;
use crate::error::{Error, Result};
use crate::request::Request;

/// One entry of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    /// Name of the object, empty for the application root.
    pub name: String,
    /// Absolute URL of the object.
    pub url: String,
}

impl Breadcrumb {
    fn root(request: &Request) -> Self {
        Self {
            name: String::new(),
            url: request.application_url(),
        }
    }
}

fn is_virtual_root(object: &Located, request: &Request) -> bool {
    request
        .virtual_host_root()
        .is_some_and(|root| root.same_object(object))
}

fn insufficient_context(object: &Located) -> Error {
    Error::insufficient_context(format!(
        "there isn't enough context to get URL information for {object:?}"
    ))
}

/// Split off the parent link, or fail for a detached object.
fn step_up(object: &Located) -> Result<(String, Located)> {
    let link = object.link().ok_or_else(|| insufficient_context(object))?;
    Ok((link.name().to_string(), link.parent().clone()))
}

fn append(url: &mut String, names: Vec<String>) {
    for name in names.into_iter().rev().filter(|name| !name.is_empty()) {
        url.push('/');
        url.push_str(&name);
    }
}

/// The absolute URL of `object`.
///
/// # Errors
///
/// Returns [`Error::InsufficientContext`] if the chain reaches a detached
/// object before an application root.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use traversal::object::{Folder, Item};
/// use traversal::url::absolute_url;
/// use traversal::{Located, Request};
///
/// let root = Located::root(Arc::new(Folder::new()));
/// let folder = Located::child(&root, "folder", Arc::new(Folder::new()));
/// let item = Located::child(&folder, "item", Arc::new(Item::new("x")));
///
/// let request = Request::new("http://example.com").unwrap();
/// assert_eq!(absolute_url(&item, &request).unwrap(), "http://example.com/folder/item");
/// ```
pub fn absolute_url(object: &Located, request: &Request) -> Result<String> {
    let mut names = Vec::new();
    let mut current = object.clone();
    let mut url = loop {
        if is_virtual_root(&current, request) || current.is_root() {
            break request.application_url();
        }
        if current.object().is_site() {
            break site_absolute_url(&current, request);
        }
        let (name, parent) = step_up(&current)?;
        names.push(name);
        current = parent;
    };
    append(&mut url, names);
    log::trace!("absolute url of {object:?} is {url}");
    Ok(url)
}

/// The breadcrumb trail leading to `object`, application root first.
///
/// Error objects yield only the root crumb.
///
/// # Errors
///
/// Returns [`Error::InsufficientContext`] if the chain reaches a detached
/// object before an application root.
pub fn breadcrumbs(object: &Located, request: &Request) -> Result<Vec<Breadcrumb>> {
    let mut names = Vec::new();
    let mut current = object.clone();
    let mut crumbs = loop {
        if current.link().is_none() && !current.is_root() {
            return Err(insufficient_context(&current));
        }
        if is_virtual_root(&current, request)
            || current.is_root()
            || current.object().is_error()
        {
            break vec![Breadcrumb::root(request)];
        }
        if current.object().is_site() {
            break site_breadcrumbs(&current, request);
        }
        let (name, parent) = step_up(&current)?;
        names.push(name);
        current = parent;
    };

    let mut url = crumbs
        .last()
        .map_or_else(|| request.application_url(), |crumb| crumb.url.clone());
    for name in names.into_iter().rev().filter(|name| !name.is_empty()) {
        url = format!("{url}/{name}");
        crumbs.push(Breadcrumb {
            name,
            url: url.clone(),
        });
    }
    Ok(crumbs)
}

/// The URL of a site: the application URL plus the site's own name.
///
/// Sites sit directly below the application root as far as URLs are
/// concerned, whatever their containers.
#[must_use]
pub fn site_absolute_url(site: &Located, request: &Request) -> String {
    let mut url = request.application_url();
    if is_virtual_root(site, request) {
        return url;
    }
    if let Some(name) = site.name().filter(|name| !name.is_empty()) {
        url.push('/');
        url.push_str(name);
    }
    url
}

/// The breadcrumbs of a site: the root crumb plus the site's own crumb.
#[must_use]
pub fn site_breadcrumbs(site: &Located, request: &Request) -> Vec<Breadcrumb> {
    let root = Breadcrumb::root(request);
    if is_virtual_root(site, request) {
        return vec![root];
    }
    match site.name().filter(|name| !name.is_empty()) {
        Some(name) => {
            let url = format!("{}/{name}", root.url);
            vec![
                root,
                Breadcrumb {
                    name: name.to_string(),
                    url,
                },
            ]
        }
        None => vec![root],
    }
}
