//! The sync workflow: compare-then-conditionally-write, then emit CSS.
//!
//! One invocation processes exactly one artifact/config pair, start to
//! finish, with blocking sequential I/O:
//!
//! 1. validate inputs
//! 2. read the artifact's product version
//! 3. load the config document
//! 4. compare against the stored `documentationVersion`
//! 5. on mismatch, update the field and rewrite the document
//! 6. always emit the stylesheet from the in-memory document (skipped only
//!    when globalMetadata is empty or absent)
//!
//! The config file is rewritten only when the version changed, so an
//! unchanged build leaves it byte-identical with an untouched timestamp.

use crate::css;
use crate::document::ConfigDocument;
use crate::error::{Result, SyncError};
use crate::paths::resolve_output_path;
use crate::version::VersionSource;
use log::{debug, info};
use std::path::Path;

/// Default config document path when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "docfx.json";

const VERSION_PATH: &[&str] = &["build", "globalMetadata", "documentationVersion"];
const METADATA_PATH: &[&str] = &["build", "globalMetadata"];
const TEMPLATE_PATH: &[&str] = &["build", "template"];

/// Inputs for one sync run.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Path to the binary whose embedded product version is the source of
    /// truth.
    pub artifact_path: String,

    /// Path to the config document to synchronize.
    pub config_path: String,
}

impl SyncOptions {
    /// Options for syncing from `artifact_path` into the default config
    /// document.
    pub fn new(artifact_path: impl Into<String>) -> Self {
        Self {
            artifact_path: artifact_path.into(),
            config_path: DEFAULT_CONFIG_PATH.to_string(),
        }
    }

    /// Override the config document path.
    pub fn with_config_path(mut self, path: impl Into<String>) -> Self {
        self.config_path = path.into();
        self
    }
}

/// What a completed sync run did.
#[derive(Debug)]
pub struct SyncReport {
    /// The product version read from the artifact.
    pub version: String,

    /// Whether the config document was rewritten.
    pub config_updated: bool,

    /// Whether the version attribute was created (as opposed to updated).
    /// Only meaningful when `config_updated` is true.
    pub version_created: bool,

    /// Path of the written stylesheet, if one was emitted.
    pub stylesheet_path: Option<String>,

    /// Number of CSS variable declarations emitted.
    pub declaration_count: usize,
}

/// Run the sync workflow once.
///
/// Relative paths (the default config path and template-derived stylesheet
/// paths) resolve against the process working directory. Concurrent runs
/// against the same config file are not coordinated; serializing them is the
/// caller's responsibility.
pub fn run(options: &SyncOptions, versions: &dyn VersionSource) -> Result<SyncReport> {
    if options.artifact_path.trim().is_empty() {
        return Err(SyncError::MissingArgument(
            "'artifact' parameter is empty or blank".to_string(),
        ));
    }

    let config_path = &options.config_path;
    if config_path != DEFAULT_CONFIG_PATH {
        info!("using '{}' as config file to update", config_path);
    }

    let version = versions.product_version(Path::new(&options.artifact_path))?;
    debug!("artifact product version is '{}'", version);

    let mut doc = ConfigDocument::load(config_path)?;

    let stored = doc.nested_str(VERSION_PATH).map(str::to_string);
    let stored_blank = stored.as_deref().is_none_or(|s| s.trim().is_empty());
    match stored.as_deref() {
        Some(s) if !stored_blank => {
            debug!(
                "current 'documentationVersion' attribute in '{}' is '{}'",
                config_path, s
            );
        }
        _ => debug!(
            "no 'documentationVersion' attribute in '{}' found",
            config_path
        ),
    }

    let versions_equal = if stored_blank {
        version.trim().is_empty()
    } else {
        stored.as_deref() == Some(version.as_str())
    };

    let (config_updated, version_created) = if versions_equal {
        info!(
            "artifact version and 'documentationVersion' attribute in '{}' are equal. \
             Current value is '{}'. No update needed.",
            config_path,
            stored.as_deref().unwrap_or("")
        );
        (false, false)
    } else {
        doc.set_nested_string(VERSION_PATH, &version)?;
        doc.save(config_path)?;

        if stored_blank {
            info!(
                "created 'documentationVersion' attribute in '{}' with value '{}'",
                config_path, version
            );
            (true, true)
        } else {
            info!(
                "updated 'documentationVersion' attribute in '{}' to '{}'",
                config_path, version
            );
            (true, false)
        }
    };

    // The stylesheet reflects the in-memory document, including an update
    // made just above, and is regenerated on every run.
    let metadata = doc.flat_string_map(METADATA_PATH)?;
    if metadata.is_empty() {
        info!(
            "no 'globalMetadata' attributes found in '{}', skipping generation of '{}'",
            config_path,
            css::CSS_FILE_NAME
        );
        return Ok(SyncReport {
            version,
            config_updated,
            version_created,
            stylesheet_path: None,
            declaration_count: 0,
        });
    }

    let templates = doc.nested_string_list(TEMPLATE_PATH);
    let output_path = resolve_output_path(templates.as_deref(), css::CSS_FILE_NAME);
    let content = css::render(&metadata);
    css::write_stylesheet(&output_path, &content)?;

    info!(
        "stylesheet '{}' written with {} css variable declarations",
        output_path,
        metadata.len()
    );

    Ok(SyncReport {
        version,
        config_updated,
        version_created,
        stylesheet_path: Some(output_path),
        declaration_count: metadata.len(),
    })
}
