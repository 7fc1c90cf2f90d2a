//! Exit code constants for the docfx-version-sync CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unparsable config document)
//! - 2: Artifact read failure
//! - 3: Config read/write/shape failure
//! - 4: Stylesheet write failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: missing/blank argument or a config document that is present
/// but cannot be parsed. Fixed by the caller correcting the input.
pub const USER_ERROR: i32 = 1;

/// Artifact failure: the binary is missing, unreadable, or carries no
/// embedded product version.
pub const ARTIFACT_FAILURE: i32 = 2;

/// Config failure: the config document could not be read, rewritten, or has
/// an unexpected shape at an addressed node.
pub const CONFIG_FAILURE: i32 = 3;

/// Output failure: the generated stylesheet could not be written.
pub const OUTPUT_FAILURE: i32 = 4;
