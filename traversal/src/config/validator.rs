//! Configuration validation.
//!
//! Checks that the application URL is usable and that every name in the
//! configured tree, views and resources can be reached by traversal.

use std::collections::BTreeMap;

use url::Url;

use crate::config::schema::{Config, TreeNode};
use crate::error::{Error, Result};
use crate::path::BOUNDARY_MARKER;

/// Validates configuration.
///
/// # Examples
///
/// ```
/// use traversal::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref url) = config.application_url {
            Self::validate_application_url(url)?;
        }

        if let Some(ref tree) = config.tree {
            Self::validate_tree("tree", tree)?;
        }

        if let Some(ref views) = config.views {
            Self::validate_namespace_names("views", views)?;
        }

        if let Some(ref resources) = config.resources {
            Self::validate_namespace_names("resources", resources)?;
        }

        Ok(())
    }

    /// The application URL must parse, use http or https and have a host.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if the URL does not parse and
    /// [`Error::Validation`] otherwise.
    pub fn validate_application_url(value: &str) -> Result<()> {
        let url = Url::parse(value).map_err(|source| Error::InvalidUrl {
            url: value.to_string(),
            source,
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Validation {
                field: "application_url".into(),
                message: format!("Unsupported scheme {:?}, expected http or https", url.scheme()),
            });
        }

        if url.host_str().is_none() {
            return Err(Error::Validation {
                field: "application_url".into(),
                message: "URL must have a host".into(),
            });
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(Error::Validation {
                field: "application_url".into(),
                message: "URL must not have a query or fragment".into(),
            });
        }

        Ok(())
    }

    /// Validate a name that will be stored in a container.
    ///
    /// Names must be non-empty, must not contain `/`, must not be `.` or
    /// `..`, and must not look like a namespace or virtual host segment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for an unusable name.
    pub fn validate_name(field: &str, name: &str) -> Result<()> {
        let problem = if name.is_empty() {
            Some("Name cannot be empty")
        } else if name.contains('/') {
            Some("Name cannot contain '/'")
        } else if name == "." || name == ".." {
            Some("Name cannot be '.' or '..'")
        } else if name.starts_with(BOUNDARY_MARKER) || name.starts_with("@@") {
            Some("Name cannot start with '++' or '@@'")
        } else if name.contains('\0') {
            Some("Name cannot contain null bytes")
        } else {
            None
        };

        match problem {
            Some(message) => Err(Error::Validation {
                field: format!("{field}.{name}"),
                message: message.into(),
            }),
            None => Ok(()),
        }
    }

    fn validate_tree(field: &str, node: &TreeNode) -> Result<()> {
        if node.value.is_some() && (node.site || !node.children.is_empty()) {
            return Err(Error::Validation {
                field: field.into(),
                message: "A node with a value cannot be a site or have children".into(),
            });
        }

        for (name, child) in &node.children {
            Self::validate_name(field, name)?;
            Self::validate_tree(&format!("{field}.{name}"), child)?;
        }

        Ok(())
    }

    fn validate_namespace_names(field: &str, entries: &BTreeMap<String, String>) -> Result<()> {
        for name in entries.keys() {
            if name.is_empty() || name.contains('/') || name.contains(';') {
                return Err(Error::Validation {
                    field: format!("{field}.{name}"),
                    message: "Name must be non-empty and cannot contain '/' or ';'".into(),
                });
            }
        }
        Ok(())
    }
}
