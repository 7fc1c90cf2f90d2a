//! Output path derivation for the generated stylesheet.
//!
//! DocFX resolves template directories relative to the build's working
//! directory, and page templates load their styles from a `styles` subfolder
//! of the active template. The last entry of `build.template` wins, so the
//! stylesheet is placed in that template's `styles` folder. Without a
//! template list the file lands next to the config document instead.

/// Derive the stylesheet output path from the config's template list.
///
/// Absent or empty list: `file_name` alone, relative to the caller's working
/// directory. Otherwise: `<last template>/styles/<file_name>` with `/` as the
/// only separator. Backslashes are normalized and doubled separators
/// collapsed, so a template entry with a trailing separator does not produce
/// `//` in the result.
pub fn resolve_output_path(templates: Option<&[String]>, file_name: &str) -> String {
    let Some(last) = templates.and_then(|t| t.last()) else {
        return file_name.to_string();
    };

    let mut joined = format!("{}/styles/{}", last, file_name).replace('\\', "/");
    while joined.contains("//") {
        joined = joined.replace("//", "/");
    }
    joined
}
