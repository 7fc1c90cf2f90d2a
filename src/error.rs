//! Error types for the docfx-version-sync CLI.
//!
//! Uses thiserror for derive macros. Each variant corresponds to one failure
//! category of the sync workflow and maps to a distinct exit code, so the
//! enclosing build step can tell "fix your input" apart from environmental
//! failures.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for sync operations.
///
/// Variant messages carry the failing operation and path so a single log
/// line is enough to diagnose a broken build.
#[derive(Error, Debug)]
pub enum SyncError {
    /// A required input was missing or blank.
    #[error("{0}")]
    MissingArgument(String),

    /// The binary artifact could not be read or carries no embedded
    /// product version.
    #[error("artifact read failed: {0}")]
    ArtifactRead(String),

    /// The config document could not be read from disk.
    #[error("config read failed: {0}")]
    ConfigRead(String),

    /// The config document was present but could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigDeserialize(String),

    /// An addressed node in the config document has an unexpected shape.
    #[error("unexpected config shape: {0}")]
    Shape(String),

    /// The updated config document could not be written back.
    #[error("config write failed: {0}")]
    ConfigWrite(String),

    /// The generated stylesheet could not be written.
    #[error("stylesheet write failed: {0}")]
    OutputWrite(String),
}

impl SyncError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SyncError::MissingArgument(_) => exit_codes::USER_ERROR,
            SyncError::ConfigDeserialize(_) => exit_codes::USER_ERROR,
            SyncError::ArtifactRead(_) => exit_codes::ARTIFACT_FAILURE,
            SyncError::ConfigRead(_) => exit_codes::CONFIG_FAILURE,
            SyncError::Shape(_) => exit_codes::CONFIG_FAILURE,
            SyncError::ConfigWrite(_) => exit_codes::CONFIG_FAILURE,
            SyncError::OutputWrite(_) => exit_codes::OUTPUT_FAILURE,
        }
    }
}

/// Result type alias for sync operations.
pub type Result<T> = std::result::Result<T, SyncError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_argument_has_user_error_exit_code() {
        let err = SyncError::MissingArgument("'artifact' parameter is blank".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn deserialize_error_has_user_error_exit_code() {
        let err = SyncError::ConfigDeserialize("docfx.json is empty".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn artifact_read_has_artifact_exit_code() {
        let err = SyncError::ArtifactRead("no such file".to_string());
        assert_eq!(err.exit_code(), exit_codes::ARTIFACT_FAILURE);
    }

    #[test]
    fn config_errors_have_config_exit_code() {
        let read = SyncError::ConfigRead("permission denied".to_string());
        let shape = SyncError::Shape("'build.globalMetadata' is not an object".to_string());
        let write = SyncError::ConfigWrite("disk full".to_string());
        assert_eq!(read.exit_code(), exit_codes::CONFIG_FAILURE);
        assert_eq!(shape.exit_code(), exit_codes::CONFIG_FAILURE);
        assert_eq!(write.exit_code(), exit_codes::CONFIG_FAILURE);
    }

    #[test]
    fn output_write_has_output_exit_code() {
        let err = SyncError::OutputWrite("no parent directory".to_string());
        assert_eq!(err.exit_code(), exit_codes::OUTPUT_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = SyncError::ArtifactRead("failed to read 'lib.dll'".to_string());
        assert_eq!(err.to_string(), "artifact read failed: failed to read 'lib.dll'");

        let err = SyncError::MissingArgument("'artifact' parameter is blank".to_string());
        assert_eq!(err.to_string(), "'artifact' parameter is blank");
    }
}
