//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `resolve`: Traverse a path and print the physical path of the result
//! - `url`: Print the absolute URL of the object at a path
//! - `breadcrumbs`: Print the breadcrumb trail of the object at a path
//! - `location`: Canonicalize a location
//! - `validate`: Load and validate configuration
//! - `completions`: Generate shell completion scripts

pub mod breadcrumbs;
pub mod completions;
pub mod location;
pub mod resolve;
pub mod url;
pub mod validate;

pub use breadcrumbs::BreadcrumbsCommand;
pub use completions::CompletionsCommand;
pub use location::LocationCommand;
pub use resolve::ResolveCommand;
pub use url::UrlCommand;
pub use validate::ValidateCommand;
