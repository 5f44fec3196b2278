//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, logger setup and opening the configured
//! object tree.

use crate::error::CliError;
use clap::ValueEnum;
use std::path::PathBuf;
use std::sync::Arc;
use traversal::{Config, ConfigBuilder, Located, Logger, PathResolver, Request};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,

    /// Override the natural application URL.
    pub application_url: Option<String>,
}

/// Output format for commands that can print structured data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one entry per line.
    Text,
    /// A single JSON document.
    Json,
}

/// A builder honoring the global options.
pub fn config_builder(global: &GlobalOptions) -> ConfigBuilder {
    let mut builder = ConfigBuilder::new();
    if let Some(ref path) = global.config {
        builder = builder.with_file(path);
    }
    if let Some(ref url) = global.application_url {
        builder = builder.with_config(Config {
            application_url: Some(url.clone()),
            ..Config::default()
        });
    }
    builder
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    config_builder(global)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Install the global logger.
///
/// `--verbose` and `--quiet` win, then `TRAVERSAL_LOG_MODE`, then the
/// configured `log_mode`.
pub fn init_logging(global: &GlobalOptions) {
    let mut logger = traversal::init_logger(global.verbose, global.quiet);
    if !global.verbose && !global.quiet {
        let configured = config_builder(global)
            .build()
            .ok()
            .and_then(|config| config.log_mode);
        if let Some(level) = configured {
            logger = Logger::new(level);
        }
    }
    logger.install();
}

/// The configured tree, ready to traverse.
pub struct Tree {
    /// The physical root.
    pub root: Located,
    /// Resolver with the configured views and resources.
    pub resolver: PathResolver,
    /// A fresh request for the configured application URL.
    pub request: Request,
}

impl Tree {
    /// Open the tree described by `config`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no tree is configured or the
    /// application URL is unusable.
    pub fn open(config: &Config) -> Result<Self, CliError> {
        let root = config
            .root()
            .ok_or_else(|| CliError::Config("no tree is configured".to_string()))?;
        let request = config
            .request()
            .map_err(|e| CliError::Config(e.to_string()))?;
        let resolver = PathResolver::new().with_registry(Arc::new(config.registry()));
        log::debug!(
            "opened tree of {} objects at {}",
            config.tree.as_ref().map_or(0, traversal::config::TreeNode::count),
            request.application_url()
        );
        Ok(Self {
            root,
            resolver,
            request,
        })
    }

    /// Load configuration and open its tree.
    ///
    /// # Errors
    ///
    /// See [`load_configuration`] and [`Tree::open`].
    pub fn load(global: &GlobalOptions) -> Result<Self, CliError> {
        Self::open(&load_configuration(global)?)
    }

    /// Traverse `path` from the root, updating the request.
    ///
    /// # Errors
    ///
    /// Returns the library error if traversal fails.
    pub fn traverse(&mut self, path: &str) -> Result<Located, CliError> {
        Ok(self.resolver.traverse(&self.root, path, &mut self.request)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use traversal::config::TreeNode;

    fn config() -> Config {
        let mut folder = TreeNode::default();
        folder.children.insert(
            "item".to_string(),
            TreeNode {
                value: Some("x".to_string()),
                ..TreeNode::default()
            },
        );
        let mut root = TreeNode::default();
        root.children.insert("folder".to_string(), folder);
        Config {
            tree: Some(root),
            ..Config::default()
        }
    }

    #[test]
    fn test_open_and_traverse() {
        let mut tree = Tree::open(&config()).unwrap();
        let item = tree.traverse("folder/item").unwrap();
        assert_eq!(item.physical_path().unwrap().to_string(), "/folder/item");
    }

    #[test]
    fn test_open_without_tree() {
        let err = Tree::open(&Config::default()).err().unwrap();
        assert_eq!(err.exit_code(), 7);
    }

    #[test]
    fn test_config_builder_applies_application_url() {
        let global = GlobalOptions {
            application_url: Some("https://example.com".to_string()),
            ..GlobalOptions::default()
        };
        let config = config_builder(&global).skip_files().skip_env().build().unwrap();
        assert_eq!(config.application_url(), "https://example.com");
    }
}
