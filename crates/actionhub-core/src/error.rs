use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("actions directory not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("actions directory must be a directory, not a file: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("proposal document not found: {}", .0.display())]
    DocumentNotFound(PathBuf),

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write manifest {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: WriteError,
    },

    #[error("invalid config {}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid manifest {}", path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("{phase} '{entry}'")]
    Phase {
        phase: Phase,
        entry: String,
        #[source]
        source: Box<CatalogError>,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    /// The innermost error, with any phase wrappers removed.
    pub fn root_cause(&self) -> &CatalogError {
        match self {
            CatalogError::Phase { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("invalid manifest name '{0}': must be a plain file name")]
    InvalidName(String),

    #[error("manifest name '{name}' was already written for action '{first}'")]
    DuplicateName { name: String, first: String },

    #[error(transparent)]
    Serialize(#[from] serde_yaml::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Step of the per-action pipeline an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Open,
    Extract,
    Write,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Open => "error reading the proposal document for",
            Phase::Extract => "error converting the proposal document to a manifest for",
            Phase::Write => "error writing the manifest for",
        };
        f.write_str(s)
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
