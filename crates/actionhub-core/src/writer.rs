use crate::error::{CatalogError, Result, WriteError};
use crate::manifest::ManifestRecord;
use crate::paths;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Serialize the record as it stands, without touching the filesystem.
pub fn render_manifest(record: &ManifestRecord) -> std::result::Result<String, WriteError> {
    Ok(serde_yaml::to_string(record)?)
}

/// Write `record` to `<output>/<name>.yml`, replacing any existing file.
/// Returns the path written.
pub fn write_manifest(record: &ManifestRecord, output: &Path) -> Result<PathBuf> {
    let path = paths::manifest_path(output, &record.name).map_err(|source| {
        CatalogError::Write {
            path: output.join(&record.name),
            source,
        }
    })?;
    let wrap = |source: WriteError| CatalogError::Write {
        path: path.clone(),
        source,
    };

    let data = render_manifest(record).map_err(wrap)?;
    std::fs::create_dir_all(output).map_err(|e| wrap(e.into()))?;
    replace_file(output, &path, data.as_bytes()).map_err(wrap)?;

    tracing::info!(name = %record.name, path = %path.display(), "wrote manifest");
    Ok(path)
}

/// Stage `data` in a temp file inside `output`, then rename it over `path`,
/// so a reader of the catalog never sees a half-written manifest.
fn replace_file(output: &Path, path: &Path, data: &[u8]) -> std::result::Result<(), WriteError> {
    let mut staged = NamedTempFile::new_in(output)?;
    staged.write_all(data)?;
    staged.persist(path).map_err(|e| WriteError::Io(e.error))?;
    Ok(())
}

/// Parse a manifest previously written by [`write_manifest`].
pub fn read_manifest(path: &Path) -> Result<ManifestRecord> {
    let data = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&data).map_err(|source| CatalogError::Manifest {
        path: path.to_path_buf(),
        source,
    })
}
