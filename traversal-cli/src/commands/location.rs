//! Command to canonicalize a location.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use traversal::{location_as_sequence, location_as_string};

/// Canonicalize a location without touching any tree.
#[derive(Args)]
pub struct LocationCommand {
    /// Location in string form, e.g. `/a/b` or `a/b`
    #[arg(value_name = "LOCATION")]
    pub location: String,

    /// Print the sequence form as a JSON array
    #[arg(long)]
    pub sequence: bool,
}

impl LocationCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        if self.sequence {
            let location = location_as_sequence(self.location.as_str())?;
            println!("{}", serde_json::to_string(location.segments())?);
        } else {
            println!("{}", location_as_string(self.location.as_str())?);
        }
        Ok(())
    }
}
