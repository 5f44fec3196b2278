//! Build script for traversal-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this structure synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("traversal")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve paths and URLs against an object tree")
        .long_about(
            "Command-line tool for traversing a configured object tree, computing \
             physical locations, absolute URLs and breadcrumbs, with virtual hosting",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Use this configuration file instead of discovering one")
                .value_name("PATH")
                .global(true)
                .env("TRAVERSAL_CONFIG"),
        )
        .arg(
            Arg::new("application-url")
                .long("application-url")
                .help("Override the natural application URL")
                .value_name("URL")
                .global(true)
                .env("TRAVERSAL_APPLICATION_URL"),
        )
        .subcommands(vec![
            Command::new("resolve")
                .about("Traverse a path and print the physical path of the result")
                .long_about(
                    "Traverse a path from the root of the configured tree, optionally as a \
                     single literal name or with a default for missing names",
                ),
            Command::new("url")
                .about("Print the absolute URL of the object at a path")
                .long_about("Print the absolute URL, honoring virtual hosting markers in the path"),
            Command::new("breadcrumbs")
                .about("Print the breadcrumb trail of the object at a path")
                .long_about("Print name and URL of every crumb from the application root down"),
            Command::new("location")
                .about("Canonicalize a location")
                .long_about("Print the canonical string or sequence form of a location"),
            Command::new("validate")
                .about("Load and validate configuration")
                .long_about("Check a traversal configuration file for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("traversal.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
