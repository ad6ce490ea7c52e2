//! The Artifact Hub package manifest produced for each action.
//!
//! Field names follow the `artifacthub-pkg.yml` schema. The provider, links,
//! logo, license and home URL are fixed per run and come from the
//! [`CatalogTemplate`](crate::config::CatalogTemplate); everything else is
//! scraped from the action's README.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub logo_path: String,
    pub license: String,
    #[serde(rename = "homeURL")]
    pub home_url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    pub links: Vec<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readme: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub maintainers: Vec<Maintainer>,
    pub provider: Provider,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub name: String,
    pub url: String,
}

impl Link {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maintainer {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Maintainer {
    /// Parse `Name <email>`, `<email>` or a bare `Name`.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        if let (Some(open), true) = (raw.find('<'), raw.ends_with('>')) {
            let email = raw[open + 1..raw.len() - 1].trim();
            let name = raw[..open].trim();
            let name = if name.is_empty() { email } else { name };
            if name.is_empty() {
                return None;
            }
            return Some(Self {
                name: name.to_string(),
                email: (!email.is_empty()).then(|| email.to_string()),
            });
        }
        Some(Self {
            name: raw.to_string(),
            email: None,
        })
    }
}
