//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    BreadcrumbsCommand, CompletionsCommand, LocationCommand, ResolveCommand, UrlCommand,
    ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Resolve paths and URLs against a configured object tree.
#[derive(Parser)]
#[command(name = "traversal")]
#[command(version, about = "Resolve paths and URLs against an object tree", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Use this configuration file instead of discovering one
    #[arg(long, value_name = "PATH", global = true, env = "TRAVERSAL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the natural application URL
    #[arg(long, value_name = "URL", global = true, env = "TRAVERSAL_APPLICATION_URL")]
    pub application_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Traverse a path and print the physical path of the result
    Resolve(ResolveCommand),

    /// Print the absolute URL of the object at a path
    Url(UrlCommand),

    /// Print the breadcrumb trail of the object at a path
    Breadcrumbs(BreadcrumbsCommand),

    /// Canonicalize a location
    Location(LocationCommand),

    /// Load and validate configuration
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
