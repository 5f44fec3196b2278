//! Command to validate configuration.

use crate::error::CliError;
use crate::utils::{config_builder, GlobalOptions};
use clap::Args;
use std::path::PathBuf;

/// Load and validate configuration.
///
/// Without a path, validates the configuration the other commands would use.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: Option<PathBuf>,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut builder = config_builder(global);
        if let Some(ref path) = self.config_path {
            if !path.exists() {
                return Err(CliError::InvalidArguments(format!(
                    "File not found: {}",
                    path.display()
                )));
            }
            builder = builder.with_file(path);
        }

        match builder.build() {
            Ok(config) => {
                let objects = config.tree.as_ref().map_or(0, |tree| tree.count());
                log::info!(
                    "{objects} objects, {} views, {} resources",
                    config.views.as_ref().map_or(0, |views| views.len()),
                    config.resources.as_ref().map_or(0, |resources| resources.len())
                );
                println!("Configuration is valid");
                Ok(())
            }
            Err(e) => {
                eprintln!("Validation error: {e}");
                Err(CliError::SemanticFailure(
                    "Configuration validation failed".to_string(),
                ))
            }
        }
    }
}
