//! CSS custom-properties rendering for globalMetadata.
//!
//! Every scalar entry of `build.globalMetadata` becomes a `--key: "value";`
//! declaration inside a `:root` block, preceded by a fixed do-not-edit
//! header. Page templates consume these variables instead of re-reading
//! docfx.json.

use crate::error::{Result, SyncError};
use crate::fs::atomic_write;
use std::path::Path;

/// Default file name for the generated stylesheet.
pub const CSS_FILE_NAME: &str = "globalMetadataVariables.css";

const CSS_HEADER: &str = concat!(
    "/*\n",
    " * This file was created by docfx-version-sync.\n",
    " *\n",
    " * Do not change this file - changes will be overwritten on next build.\n",
    " *\n",
    " * This file is based on data from 'globalMetadata' section in docfx.json.\n",
    " * Edit 'globalMetadata' section of docfx.json instead of changing this file.\n",
    " */\n",
);

/// Render metadata entries into the stylesheet content.
///
/// Declarations keep the order of `metadata`, which is the insertion order
/// of the source document's globalMetadata object. Values are wrapped in
/// literal double quotes without escaping; a value that itself contains `"`
/// yields invalid CSS.
pub fn render(metadata: &[(String, String)]) -> String {
    let mut css = String::from(CSS_HEADER);

    css.push_str(":root {\n");
    for (key, value) in metadata {
        css.push_str(&format!("    --{}: \"{}\";\n", key, value));
    }
    css.push_str("}\n");

    css
}

/// Write the rendered stylesheet to `path`.
///
/// The parent directory must already exist; it is not created here.
pub fn write_stylesheet<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    atomic_write(path, content.as_bytes()).map_err(|e| {
        SyncError::OutputWrite(format!(
            "failed to write stylesheet '{}': {}",
            path.display(),
            e
        ))
    })
}
