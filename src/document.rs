//! Generic JSON config document with typed nested accessors.
//!
//! docfx.json has no fixed schema from this tool's point of view: only two
//! paths are ever addressed (`build.globalMetadata.documentationVersion` and
//! `build.template`), and everything else must survive a read-modify-write
//! round trip byte-for-byte in structure. The document is therefore held as
//! a generic `serde_json::Value` tree rather than a typed record, and all
//! traversal goes through accessors that fail predictably on shape mismatch
//! instead of panicking mid-walk.
//!
//! serde_json's `preserve_order` feature is required: field order and the
//! insertion order of the globalMetadata object are contract-bearing (they
//! drive both the rewritten file's diff and the stylesheet's declaration
//! order).

use crate::error::{Result, SyncError};
use crate::fs::atomic_write;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// A loaded JSON configuration document.
#[derive(Debug, Clone)]
pub struct ConfigDocument {
    root: Value,
}

impl ConfigDocument {
    /// Load a document from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let text = fs::read_to_string(path).map_err(|e| {
            SyncError::ConfigRead(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::parse(&text).map_err(|e| match e {
            SyncError::ConfigDeserialize(msg) => SyncError::ConfigDeserialize(format!(
                "could not deserialize config file '{}': {}",
                path.display(),
                msg
            )),
            other => other,
        })
    }

    /// Parse a document from JSON text.
    ///
    /// The root must be a JSON object; an empty file is a parse error, not
    /// an empty document.
    pub fn parse(text: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(text)
            .map_err(|e| SyncError::ConfigDeserialize(format!("invalid JSON: {}", e)))?;

        if !root.is_object() {
            return Err(SyncError::ConfigDeserialize(
                "document root is not a JSON object".to_string(),
            ));
        }

        Ok(Self { root })
    }

    /// Read the string at a nested key path.
    ///
    /// Returns `None` when any key on the path is missing or the leaf is not
    /// a string. `None` (never set) and `Some("")` (explicitly set to empty)
    /// are distinct outcomes.
    pub fn nested_str(&self, path: &[&str]) -> Option<&str> {
        self.node(path).and_then(Value::as_str)
    }

    /// Read the string array at a nested key path.
    ///
    /// Returns `None` when the node is absent or is not an array consisting
    /// solely of strings.
    pub fn nested_string_list(&self, path: &[&str]) -> Option<Vec<String>> {
        let array = self.node(path)?.as_array()?;
        array
            .iter()
            .map(|v| v.as_str().map(str::to_string))
            .collect()
    }

    /// Read the object at a nested key path as a flat key→string map.
    ///
    /// An absent node is an empty map. String members are taken verbatim,
    /// numbers and booleans are stringified, and `null` becomes the empty
    /// string; an object or array member means the node cannot be
    /// interpreted as flat and raises a shape error. Entry order is the
    /// object's insertion order.
    pub fn flat_string_map(&self, path: &[&str]) -> Result<Vec<(String, String)>> {
        let Some(node) = self.node(path) else {
            return Ok(Vec::new());
        };

        let object = node.as_object().ok_or_else(|| {
            SyncError::Shape(format!("'{}' is not an object", path.join(".")))
        })?;

        let mut entries = Vec::with_capacity(object.len());
        for (key, value) in object {
            let text = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null => String::new(),
                Value::Array(_) | Value::Object(_) => {
                    return Err(SyncError::Shape(format!(
                        "'{}.{}' is not a scalar value",
                        path.join("."),
                        key
                    )));
                }
            };
            entries.push((key.clone(), text));
        }

        Ok(entries)
    }

    /// Set the string at a nested key path, creating intermediate objects as
    /// needed.
    ///
    /// Sibling fields and their order are not disturbed; updating an
    /// existing key keeps its position. Fails with a shape error when an
    /// intermediate node exists but is not an object.
    pub fn set_nested_string(&mut self, path: &[&str], value: &str) -> Result<()> {
        let Some((leaf, parents)) = path.split_last() else {
            return Err(SyncError::Shape(
                "cannot set a value at an empty path".to_string(),
            ));
        };

        let mut current = &mut self.root;
        for (depth, key) in parents.iter().enumerate() {
            let object = current.as_object_mut().ok_or_else(|| {
                SyncError::Shape(format!("'{}' is not an object", path[..depth].join(".")))
            })?;
            current = object
                .entry((*key).to_string())
                .or_insert_with(|| Value::Object(Map::new()));
        }

        let object = current.as_object_mut().ok_or_else(|| {
            SyncError::Shape(format!("'{}' is not an object", parents.join(".")))
        })?;
        object.insert((*leaf).to_string(), Value::String(value.to_string()));

        Ok(())
    }

    /// Serialize the document with indented formatting and atomically
    /// replace the file at `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        let mut text = serde_json::to_string_pretty(&self.root).map_err(|e| {
            SyncError::ConfigWrite(format!("failed to serialize config document: {}", e))
        })?;
        text.push('\n');

        atomic_write(path, text.as_bytes()).map_err(|e| {
            SyncError::ConfigWrite(format!(
                "failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Walk a key path through nested objects.
    fn node(&self, path: &[&str]) -> Option<&Value> {
        let mut current = &self.root;
        for key in path {
            current = current.as_object()?.get(*key)?;
        }
        Some(current)
    }
}
