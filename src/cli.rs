//! CLI argument parsing for docfx-version-sync.
//!
//! Uses clap derive macros for declarative argument definitions. The tool is
//! single-purpose, so there are no subcommands: one invocation is one sync
//! run.

use clap::Parser;

/// Sync a binary's product version into docfx.json and generate the
/// globalMetadata CSS variables stylesheet.
///
/// Reads the product version embedded in ARTIFACT, writes it into
/// `build.globalMetadata.documentationVersion` of the config document (only
/// when it changed), and regenerates the stylesheet derived from
/// `build.globalMetadata` on every run.
#[derive(Parser, Debug)]
#[command(name = "docfx-version-sync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the binary whose embedded product version is the source of
    /// truth.
    pub artifact: String,

    /// Path to the DocFX configuration file to synchronize.
    #[arg(long, default_value = "docfx.json")]
    pub config: String,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
