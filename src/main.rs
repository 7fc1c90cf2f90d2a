//! docfx-version-sync: keeps docfx.json in sync with a compiled binary.
//!
//! Reads the product version embedded in a binary artifact, writes it into
//! `build.globalMetadata.documentationVersion` of a DocFX configuration
//! file (preserving every other field), and generates a CSS stylesheet
//! exposing the globalMetadata section as custom properties.

mod cli;
mod css;
mod document;
mod error;
mod exit_codes;
mod fs;
mod paths;
mod sync;
#[cfg(test)]
mod test_support;
mod version;

use cli::Cli;
use std::process::ExitCode;
use version::FileVersionSource;

fn main() -> ExitCode {
    // Status lines go to stderr at info by default; RUST_LOG=debug reveals
    // the low-importance detail.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse_args();
    let options = sync::SyncOptions::new(cli.artifact).with_config_path(cli.config);

    match sync::run(&options, &FileVersionSource) {
        Ok(_) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            log::error!("{}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
