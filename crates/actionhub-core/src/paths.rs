use crate::error::WriteError;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Layout constants
// ---------------------------------------------------------------------------

pub const ACTIONS_DIR: &str = "actions";
pub const DOCUMENT_FILE: &str = "README.md";
pub const CONFIG_FILE: &str = "actionhub.yaml";
pub const DEFAULT_OUTPUT_DIR: &str = "artifacthub-manifests";
pub const MANIFEST_EXTENSION: &str = "yml";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn actions_dir(context: &Path) -> PathBuf {
    context.join(ACTIONS_DIR)
}

pub fn config_path(context: &Path) -> PathBuf {
    context.join(CONFIG_FILE)
}

pub fn document_path(action_dir: &Path, document_name: &str) -> PathBuf {
    action_dir.join(document_name)
}

/// `<output>/<name>.yml`, rejecting names that would escape `output`.
pub fn manifest_path(output: &Path, name: &str) -> Result<PathBuf, WriteError> {
    validate_manifest_name(name)?;
    Ok(output.join(format!("{name}.{MANIFEST_EXTENSION}")))
}

// ---------------------------------------------------------------------------
// Name validation
// ---------------------------------------------------------------------------

pub fn validate_manifest_name(name: &str) -> Result<(), WriteError> {
    if name.trim().is_empty()
        || name.contains('/')
        || name.contains('\\')
        || name.contains("..")
        || name.contains('\0')
    {
        return Err(WriteError::InvalidName(name.to_string()));
    }
    Ok(())
}
