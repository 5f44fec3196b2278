//! Command to traverse a path and report where the result lives.

use crate::error::CliError;
use crate::utils::{GlobalOptions, OutputFormat, Tree};
use clap::Args;
use serde::Serialize;
use std::sync::Arc;
use traversal::object::Item;
use traversal::{absolute_url, Located};

/// Traverse a path from the root of the configured tree.
#[derive(Args)]
pub struct ResolveCommand {
    /// Path to traverse, relative to the root or absolute
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Look PATH up as one literal name instead of a path
    #[arg(long)]
    pub single: bool,

    /// Print TEXT instead of failing when a name is missing
    #[arg(long, value_name = "TEXT")]
    pub default: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// What `resolve --format json` prints.
#[derive(Debug, Serialize)]
struct Resolved {
    path: String,
    name: String,
    url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut tree = Tree::load(global)?;

        let found = match self.default {
            Some(ref text) => {
                let default = Located::detached(Arc::new(Item::new(text.clone())));
                let found = self.lookup_or(&mut tree, default.clone())?;
                if found.same_object(&default) {
                    log::debug!("{:?} not found, using the default", self.path);
                    println!("{text}");
                    return Ok(());
                }
                found
            }
            None => self.lookup(&mut tree)?,
        };

        let path = found.physical_path()?.to_string();
        match self.format {
            OutputFormat::Text => println!("{path}"),
            OutputFormat::Json => {
                let resolved = Resolved {
                    path,
                    name: found.name().unwrap_or_default().to_string(),
                    url: absolute_url(&found, &tree.request)?,
                    value: found.downcast_ref::<Item>().map(|item| item.value().to_string()),
                };
                println!("{}", serde_json::to_string_pretty(&resolved)?);
            }
        }
        Ok(())
    }

    fn lookup(&self, tree: &mut Tree) -> Result<Located, CliError> {
        if self.single {
            Ok(tree
                .resolver
                .traverse_name(&tree.root, &self.path, &mut tree.request)?)
        } else {
            tree.traverse(&self.path)
        }
    }

    fn lookup_or(&self, tree: &mut Tree, default: Located) -> Result<Located, CliError> {
        if self.single {
            match tree
                .resolver
                .traverse_name(&tree.root, &self.path, &mut tree.request)
            {
                Err(e) if e.is_not_found() => Ok(default),
                other => Ok(other?),
            }
        } else {
            Ok(tree.resolver.traverse_or(
                &tree.root,
                self.path.as_str(),
                default,
                &mut tree.request,
            )?)
        }
    }
}
