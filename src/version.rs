//! Product-version extraction from binary artifacts.
//!
//! The version written into docfx.json is the product (informational)
//! version embedded in the compiled binary's version-information block, read
//! verbatim. It is not required to be a strict semantic version.
//!
//! Extraction is behind the `VersionSource` trait so the sync workflow can
//! be exercised in tests without crafting binary fixtures for every case.

use crate::error::{Result, SyncError};
use std::fs;
use std::path::Path;

/// Capability to read the product version embedded in a file.
pub trait VersionSource {
    /// Read the product version of the file at `path`.
    ///
    /// Fails with `SyncError::ArtifactRead` when the file is missing,
    /// unreadable, or has no embedded version metadata.
    fn product_version(&self, path: &Path) -> Result<String>;
}

/// Reads the version from the artifact's embedded version-information block.
///
/// This is a marker scan, not a full executable parser: it locates the
/// UTF-16LE `ProductVersion` key of the version-info string table and reads
/// the NUL-terminated UTF-16 value that follows it. That is sufficient for
/// the artifacts a documentation build points this tool at, and keeps the
/// extraction free of any binary-format dependency.
pub struct FileVersionSource;

impl VersionSource for FileVersionSource {
    fn product_version(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).map_err(|e| {
            SyncError::ArtifactRead(format!(
                "failed to read artifact '{}': {}",
                path.display(),
                e
            ))
        })?;

        extract_product_version(&bytes).ok_or_else(|| {
            SyncError::ArtifactRead(format!(
                "no embedded product version found in '{}'",
                path.display()
            ))
        })
    }
}

/// Scan raw bytes for the `ProductVersion` entry and return its value.
fn extract_product_version(bytes: &[u8]) -> Option<String> {
    let key = utf16le_bytes("ProductVersion");
    let start = find_aligned(bytes, &key)?;

    // Skip the key's NUL terminator and the zero padding that aligns the
    // value to a 32-bit boundary.
    let mut cursor = start + key.len();
    while cursor + 1 < bytes.len() && bytes[cursor] == 0 && bytes[cursor + 1] == 0 {
        cursor += 2;
    }

    let mut units = Vec::new();
    while cursor + 1 < bytes.len() {
        let unit = u16::from_le_bytes([bytes[cursor], bytes[cursor + 1]]);
        if unit == 0 {
            break;
        }
        units.push(unit);
        cursor += 2;
    }

    let value = String::from_utf16(&units).ok()?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Find `needle` in `haystack` at a 2-byte-aligned offset.
///
/// Version-info structures are sequences of 16-bit units, so a match at an
/// odd offset is a coincidence in unrelated data, not a key.
fn find_aligned(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    (0..=haystack.len() - needle.len())
        .step_by(2)
        .find(|&i| &haystack[i..i + needle.len()] == needle)
}

/// Encode a string as UTF-16LE bytes.
fn utf16le_bytes(s: &str) -> Vec<u8> {
    s.encode_utf16().flat_map(u16::to_le_bytes).collect()
}
