//! Command to print the absolute URL of an object.

use crate::error::CliError;
use crate::utils::{GlobalOptions, Tree};
use clap::Args;
use traversal::absolute_url;

/// Print the absolute URL of the object at a path.
///
/// Virtual hosting markers in the path apply to the printed URL.
#[derive(Args)]
pub struct UrlCommand {
    /// Path to traverse from the root
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl UrlCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut tree = Tree::load(global)?;
        let found = tree.traverse(&self.path)?;
        println!("{}", absolute_url(&found, &tree.request)?);
        Ok(())
    }
}
