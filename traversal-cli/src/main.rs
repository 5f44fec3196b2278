//! Main entry point for the traversal CLI.
//!
//! This is the command-line interface for the traversal library. It loads an
//! object tree from configuration and provides commands to inspect it:
//! - `resolve`: Traverse a path and print where the object lives
//! - `url`: Print the absolute URL of the object at a path
//! - `breadcrumbs`: Print the breadcrumb trail of the object at a path
//! - `location`: Canonicalize a location
//! - `validate`: Load and validate configuration

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
        application_url: cli.application_url,
    };

    utils::init_logging(&global);

    let result = match cli.command {
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::Url(cmd) => cmd.execute(&global),
        cli::Command::Breadcrumbs(cmd) => cmd.execute(&global),
        cli::Command::Location(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
