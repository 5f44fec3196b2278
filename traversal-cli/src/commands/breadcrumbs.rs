//! Command to print the breadcrumb trail of an object.

use crate::error::CliError;
use crate::utils::{GlobalOptions, OutputFormat, Tree};
use clap::Args;
use traversal::breadcrumbs;

/// Print the breadcrumb trail of the object at a path.
#[derive(Args)]
pub struct BreadcrumbsCommand {
    /// Path to traverse from the root
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl BreadcrumbsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut tree = Tree::load(global)?;
        let found = tree.traverse(&self.path)?;
        let crumbs = breadcrumbs(&found, &tree.request)?;

        match self.format {
            OutputFormat::Text => {
                for crumb in &crumbs {
                    let name = if crumb.name.is_empty() { "/" } else { &crumb.name };
                    println!("{name}\t{}", crumb.url);
                }
            }
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&crumbs)?),
        }
        Ok(())
    }
}
