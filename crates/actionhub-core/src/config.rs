use crate::error::{CatalogError, Result};
use crate::generate::FieldPolicy;
use crate::manifest::{Link, ManifestRecord, Provider};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// CatalogTemplate
// ---------------------------------------------------------------------------

/// Values shared by every manifest in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogTemplate {
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_home_url")]
    pub home_url: String,
    #[serde(default = "default_logo_path")]
    pub logo_path: String,
    #[serde(default = "default_license")]
    pub license: String,
    #[serde(default = "default_links")]
    pub links: Vec<Link>,
}

fn default_provider() -> String {
    "tinkerbell-community".to_string()
}

fn default_home_url() -> String {
    "https://github.com/tinkerbell/actions".to_string()
}

fn default_logo_path() -> String {
    "./../../logo.png".to_string()
}

fn default_license() -> String {
    "Apache-2".to_string()
}

fn default_links() -> Vec<Link> {
    vec![
        Link::new("website", "https://tinkerbell.org/"),
        Link::new("support", "https://github.com/tinkerbell/actions/issues"),
    ]
}

impl Default for CatalogTemplate {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            home_url: default_home_url(),
            logo_path: default_logo_path(),
            license: default_license(),
            links: default_links(),
        }
    }
}

impl CatalogTemplate {
    /// A record with the fixed fields filled in and every variable field empty.
    pub fn new_record(&self, name: impl Into<String>) -> ManifestRecord {
        ManifestRecord {
            version: None,
            name: name.into(),
            display_name: None,
            created_at: None,
            description: None,
            logo_path: self.logo_path.clone(),
            license: self.license.clone(),
            home_url: self.home_url.clone(),
            keywords: Vec::new(),
            links: self.links.clone(),
            readme: None,
            maintainers: Vec::new(),
            provider: Provider {
                name: self.provider.clone(),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// CatalogConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub template: CatalogTemplate,
    /// Reuse one record across actions so fields a README omits keep the
    /// previous action's value.
    #[serde(default)]
    pub carry_over_fields: bool,
    /// Copy the README body into the manifest's `readme` field.
    #[serde(default)]
    pub embed_readme: bool,
}

impl CatalogConfig {
    /// Load `<context>/actionhub.yaml`, falling back to defaults when absent.
    pub fn load(context: &Path) -> Result<Self> {
        let path = paths::config_path(context);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path).map_err(|source| CatalogError::Read {
            path: path.clone(),
            source,
        })?;
        if data.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&data).map_err(|source| CatalogError::Config { path, source })
    }

    pub fn policy(&self) -> FieldPolicy {
        if self.carry_over_fields {
            FieldPolicy::CarryOver
        } else {
            FieldPolicy::Reset
        }
    }
}
