//! Walk the actions directory and emit one manifest per action.

use crate::config::{CatalogConfig, CatalogTemplate};
use crate::error::{CatalogError, Phase, Result, WriteError};
use crate::extract::{populate_from_reader, ExtractOptions};
use crate::manifest::ManifestRecord;
use crate::{paths, writer};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// What happens to fields a README does not mention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldPolicy {
    /// Every action starts from a fresh copy of the template.
    #[default]
    Reset,
    /// One record is reused across actions; unmentioned fields keep the
    /// value from the previously processed action.
    CarryOver,
}

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Directory holding one subdirectory per action.
    pub input_root: PathBuf,
    pub output_root: PathBuf,
    pub document_name: String,
    pub policy: FieldPolicy,
    pub embed_readme: bool,
}

impl GenerateOptions {
    pub fn new(input_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            input_root: input_root.into(),
            output_root: output_root.into(),
            document_name: paths::DOCUMENT_FILE.to_string(),
            policy: FieldPolicy::default(),
            embed_readme: false,
        }
    }

    pub fn with_config(mut self, config: &CatalogConfig) -> Self {
        self.policy = config.policy();
        self.embed_readme = config.embed_readme;
        self
    }
}

#[derive(Debug, Clone)]
pub struct GeneratedManifest {
    /// Action subdirectory name.
    pub entry: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default)]
pub struct GenerateReport {
    pub manifests: Vec<GeneratedManifest>,
}

fn in_phase(phase: Phase, entry: &str) -> impl FnOnce(CatalogError) -> CatalogError + '_ {
    move |source| CatalogError::Phase {
        phase,
        entry: entry.to_string(),
        source: Box::new(source),
    }
}

/// Action subdirectories of `input_root`, sorted by name.
pub fn list_actions(input_root: &Path) -> Result<Vec<PathBuf>> {
    let meta = match std::fs::metadata(input_root) {
        Ok(meta) => meta,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(CatalogError::NotFound(input_root.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };
    if !meta.is_dir() {
        return Err(CatalogError::NotADirectory(input_root.to_path_buf()));
    }

    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(input_root)? {
        let path = entry?.path();
        if path.is_dir() {
            dirs.push(path);
        } else {
            tracing::debug!(path = %path.display(), "skipping non-directory entry");
        }
    }
    dirs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(dirs)
}

/// Generate a manifest for every action under `opts.input_root`.
///
/// Stops at the first failure. Manifests already written stay on disk.
pub fn generate(opts: &GenerateOptions, template: &CatalogTemplate) -> Result<GenerateReport> {
    let actions = list_actions(&opts.input_root)?;

    std::fs::create_dir_all(&opts.output_root).map_err(|source| CatalogError::Write {
        path: opts.output_root.clone(),
        source: source.into(),
    })?;

    tracing::info!(
        input = %opts.input_root.display(),
        output = %opts.output_root.display(),
        count = actions.len(),
        policy = ?opts.policy,
        "generating manifests"
    );

    let extract_opts = ExtractOptions {
        embed_readme: opts.embed_readme,
    };
    let mut shared: Option<ManifestRecord> = None;
    // manifest name -> action that claimed it in this run
    let mut written: HashMap<String, String> = HashMap::new();
    let mut report = GenerateReport::default();

    for dir in actions {
        let entry = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let doc_path = paths::document_path(&dir, &opts.document_name);

        let file = File::open(&doc_path)
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    CatalogError::DocumentNotFound(doc_path.clone())
                } else {
                    CatalogError::Read {
                        path: doc_path.clone(),
                        source: e,
                    }
                }
            })
            .map_err(in_phase(Phase::Open, &entry))?;

        let mut fresh;
        let record: &mut ManifestRecord = match opts.policy {
            FieldPolicy::Reset => {
                fresh = template.new_record(entry.as_str());
                &mut fresh
            }
            FieldPolicy::CarryOver => {
                let r = shared.get_or_insert_with(|| template.new_record(entry.as_str()));
                r.name = entry.clone();
                r
            }
        };

        populate_from_reader(BufReader::new(file), &doc_path, record, extract_opts)
            .map_err(in_phase(Phase::Extract, &entry))?;
        tracing::debug!(entry = %entry, name = %record.name, "extracted manifest fields");

        if let Some(first) = written.get(&record.name) {
            return Err(in_phase(Phase::Write, &entry)(CatalogError::Write {
                path: paths::manifest_path(&opts.output_root, &record.name)
                    .unwrap_or_else(|_| opts.output_root.join(&record.name)),
                source: WriteError::DuplicateName {
                    name: record.name.clone(),
                    first: first.clone(),
                },
            }));
        }

        let path = writer::write_manifest(record, &opts.output_root)
            .map_err(in_phase(Phase::Write, &entry))?;
        written.insert(record.name.clone(), entry.clone());

        report.manifests.push(GeneratedManifest { entry, path });
    }

    Ok(report)
}
