//! Scrape manifest fields out of an action's README.
//!
//! Recognized markers, in the order they are considered:
//!
//! 1. YAML front matter between a leading `---` line and the next `---` line.
//! 2. `key: value` lines in the preamble (before the first `##` heading).
//! 3. The first `# Title` heading, which becomes `displayName` unless a key
//!    already set it.
//! 4. `## Field` headings; the text up to the next heading is the value.
//!
//! Marker names are matched case-insensitively with `_`, `-` and spaces
//! ignored, see [`Field::from_marker`]. A field with no marker in the
//! document is left untouched.

use crate::error::{CatalogError, Result};
use crate::manifest::{Maintainer, ManifestRecord};
use chrono::DateTime;
use regex::Regex;
use serde_yaml::{Mapping, Value};
use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions {
    /// Copy the document body into `readme`.
    pub embed_readme: bool,
}

/// Manifest field a marker refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    DisplayName,
    Description,
    Version,
    CreatedAt,
    Keywords,
    Maintainers,
}

impl Field {
    pub fn from_marker(marker: &str) -> Option<Self> {
        let key: String = marker
            .trim()
            .trim_end_matches(':')
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' ' | '\t'))
            .flat_map(char::to_lowercase)
            .collect();
        let field = match key.as_str() {
            "name" | "slug" => Field::Name,
            "displayname" | "title" => Field::DisplayName,
            "description" | "summary" => Field::Description,
            "version" => Field::Version,
            "createdat" | "created" => Field::CreatedAt,
            "keywords" | "tags" => Field::Keywords,
            "maintainers" | "maintainer" | "authors" => Field::Maintainers,
            _ => return None,
        };
        Some(field)
    }

    fn is_list(self) -> bool {
        matches!(self, Field::Keywords | Field::Maintainers)
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Read a whole document from `reader` and populate `record` from it.
/// `source` only labels the error when the read fails.
pub fn populate_from_reader<R: Read>(
    mut reader: R,
    source: &Path,
    record: &mut ManifestRecord,
    opts: ExtractOptions,
) -> Result<()> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|e| CatalogError::Read {
            path: source.to_path_buf(),
            source: e,
        })?;
    populate_from_markdown(&content, record, opts);
    Ok(())
}

pub fn populate_from_markdown(content: &str, record: &mut ManifestRecord, opts: ExtractOptions) {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let (front_matter, body) = split_front_matter(content);

    let mut display_name_locked = false;
    if let Some(fm) = front_matter {
        display_name_locked = apply_front_matter(fm, record);
    }

    scan_body(body, record, display_name_locked);

    if opts.embed_readme {
        let body = body.trim();
        if !body.is_empty() {
            record.readme = Some(body.to_string());
        }
    }
}

// ---------------------------------------------------------------------------
// Front matter
// ---------------------------------------------------------------------------

/// Split off the block between a leading `---` line and the next `---` line.
/// Without a closing delimiter the whole document is body.
fn split_front_matter(content: &str) -> (Option<&str>, &str) {
    let Some(first_end) = content.find('\n') else {
        return (None, content);
    };
    if content[..first_end].trim_end() != "---" {
        return (None, content);
    }
    let fm_start = first_end + 1;
    let mut offset = fm_start;
    for line in content[fm_start..].split_inclusive('\n') {
        if line.trim_end() == "---" {
            return (Some(&content[fm_start..offset]), &content[offset + line.len()..]);
        }
        offset += line.len();
    }
    (None, content)
}

/// Returns true when the front matter set `displayName`.
fn apply_front_matter(fm: &str, record: &mut ManifestRecord) -> bool {
    match serde_yaml::from_str::<Mapping>(fm) {
        Ok(map) => apply_front_matter_yaml(fm, &map, record),
        Err(e) => {
            tracing::debug!(error = %e, "front matter is not valid YAML, reading it line by line");
            let mut locked = false;
            for line in fm.lines() {
                if let Some((field, value)) = parse_key_value(line) {
                    if apply_scalar(record, field, value) && field == Field::DisplayName {
                        locked = true;
                    }
                }
            }
            locked
        }
    }
}

fn apply_front_matter_yaml(fm: &str, map: &Mapping, record: &mut ManifestRecord) -> bool {
    let mut locked = false;
    for (key, value) in map {
        let Some(key) = key.as_str() else {
            continue;
        };
        let Some(field) = Field::from_marker(key) else {
            continue;
        };
        let applied = match value {
            Value::Sequence(items) => {
                let items = items.iter().filter_map(yaml_item_text).collect();
                apply_list(record, field, items)
            }
            // `1.10` parses as a float; keep the digits as written.
            Value::Number(_) => match raw_front_matter_value(fm, key) {
                Some(raw) => apply_scalar(record, field, raw),
                None => false,
            },
            other => match yaml_scalar_text(other) {
                Some(text) => apply_scalar(record, field, &text),
                None => false,
            },
        };
        if applied && field == Field::DisplayName {
            locked = true;
        }
    }
    locked
}

/// The unparsed text after `key:` on a top-level front matter line.
fn raw_front_matter_value<'a>(fm: &'a str, key: &str) -> Option<&'a str> {
    fm.lines().find_map(|line| {
        if line.starts_with(char::is_whitespace) {
            return None;
        }
        let (k, v) = line.split_once(':')?;
        if k.trim() != key {
            return None;
        }
        let v = v.split(" #").next().unwrap_or(v).trim();
        (!v.is_empty()).then_some(v)
    })
}

fn yaml_scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Sequence items may be scalars or `{name, email}` maps.
fn yaml_item_text(value: &Value) -> Option<String> {
    if let Value::Mapping(map) = value {
        let name = map.get("name").and_then(yaml_scalar_text);
        let email = map.get("email").and_then(yaml_scalar_text);
        return match (name, email) {
            (Some(name), Some(email)) => Some(format!("{name} <{email}>")),
            (Some(name), None) => Some(name),
            (None, Some(email)) => Some(format!("<{email}>")),
            (None, None) => None,
        };
    }
    yaml_scalar_text(value)
}

// ---------------------------------------------------------------------------
// Body scan
// ---------------------------------------------------------------------------

static HEADING_RE: OnceLock<Regex> = OnceLock::new();
static KEY_VALUE_RE: OnceLock<Regex> = OnceLock::new();

fn heading_re() -> &'static Regex {
    HEADING_RE.get_or_init(|| Regex::new(r"^ {0,3}(#{1,6})(?:[ \t]+(.*?))?[ \t]*$").unwrap())
}

fn key_value_re() -> &'static Regex {
    KEY_VALUE_RE
        .get_or_init(|| Regex::new(r"^([A-Za-z][A-Za-z0-9 _\-]*?)[ \t]*:[ \t]*(\S.*)$").unwrap())
}

fn parse_heading(line: &str) -> Option<(usize, &str)> {
    let caps = heading_re().captures(line)?;
    let level = caps.get(1)?.as_str().len();
    let text = caps
        .get(2)
        .map(|m| m.as_str().trim_end_matches('#').trim())
        .unwrap_or("");
    Some((level, text))
}

fn parse_key_value(line: &str) -> Option<(Field, &str)> {
    let caps = key_value_re().captures(line.trim())?;
    let field = Field::from_marker(caps.get(1)?.as_str())?;
    Some((field, caps.get(2)?.as_str()))
}

fn fence_marker(trimmed: &str) -> Option<&'static str> {
    if trimmed.starts_with("```") {
        Some("```")
    } else if trimmed.starts_with("~~~") {
        Some("~~~")
    } else {
        None
    }
}

#[derive(Default)]
struct ScanState<'a> {
    section: Option<Field>,
    block: Vec<&'a str>,
    fence: Option<&'static str>,
    in_preamble: bool,
    title_seen: bool,
    display_name_locked: bool,
}

impl ScanState<'_> {
    fn flush_section(&mut self, record: &mut ManifestRecord) {
        if let Some(field) = self.section.take() {
            if apply_block(record, field, &self.block) && field == Field::DisplayName {
                self.display_name_locked = true;
            }
        }
        self.block.clear();
    }
}

fn scan_body(body: &str, record: &mut ManifestRecord, display_name_locked: bool) {
    let mut state = ScanState {
        in_preamble: true,
        display_name_locked,
        ..ScanState::default()
    };

    for line in body.lines() {
        let trimmed = line.trim();

        if let Some(fence) = state.fence {
            if trimmed.starts_with(fence) {
                state.fence = None;
            }
            if state.section.is_some() {
                state.block.push(line);
            }
            continue;
        }

        if let Some(fence) = fence_marker(trimmed) {
            state.fence = Some(fence);
            if state.section.is_some() {
                state.block.push(line);
            }
            continue;
        }

        if let Some((level, text)) = parse_heading(line) {
            state.flush_section(record);
            if level == 1 {
                if !state.title_seen {
                    state.title_seen = true;
                    if !state.display_name_locked {
                        apply_scalar(record, Field::DisplayName, text);
                    }
                }
                continue;
            }
            state.in_preamble = false;
            state.section = Field::from_marker(text);
            continue;
        }

        if state.section.is_some() {
            state.block.push(line);
        } else if state.in_preamble {
            let unbolded = trimmed.replace("**", "");
            if let Some((field, value)) = parse_key_value(&unbolded) {
                if apply_scalar(record, field, value) && field == Field::DisplayName {
                    state.display_name_locked = true;
                }
            }
        }
    }

    state.flush_section(record);
}

// ---------------------------------------------------------------------------
// Field assignment
// ---------------------------------------------------------------------------

/// Assign a single-line value. Returns true if the record changed.
fn apply_scalar(record: &mut ManifestRecord, field: Field, raw: &str) -> bool {
    if field.is_list() {
        return apply_list(record, field, split_inline_list(raw));
    }
    let value = unquote(raw);
    if value.is_empty() {
        return false;
    }
    match field {
        Field::Name => record.name = value.to_string(),
        Field::DisplayName => record.display_name = Some(value.to_string()),
        Field::Description => record.description = Some(value.to_string()),
        Field::Version => record.version = Some(value.to_string()),
        Field::CreatedAt => match DateTime::parse_from_rfc3339(value) {
            Ok(ts) => record.created_at = Some(ts),
            Err(e) => {
                tracing::warn!(value, error = %e, "ignoring createdAt that is not RFC 3339");
                return false;
            }
        },
        Field::Keywords | Field::Maintainers => unreachable!("list fields handled above"),
    }
    true
}

/// Replace a list field wholesale. Scalar fields take the first item.
fn apply_list(record: &mut ManifestRecord, field: Field, items: Vec<String>) -> bool {
    match field {
        Field::Keywords => {
            let keywords: Vec<String> = items
                .iter()
                .map(|s| unquote(s).to_string())
                .filter(|s| !s.is_empty())
                .collect();
            if keywords.is_empty() {
                return false;
            }
            record.keywords = keywords;
            true
        }
        Field::Maintainers => {
            let maintainers: Vec<Maintainer> = items
                .iter()
                .filter_map(|s| Maintainer::parse(unquote(s)))
                .collect();
            if maintainers.is_empty() {
                return false;
            }
            record.maintainers = maintainers;
            true
        }
        _ => match items.first() {
            Some(first) => apply_scalar(record, field, first),
            None => false,
        },
    }
}

/// Assign the text under a `## Field` heading.
fn apply_block(record: &mut ManifestRecord, field: Field, lines: &[&str]) -> bool {
    match field {
        Field::Description => match block_text(lines) {
            Some(text) => {
                record.description = Some(text);
                true
            }
            None => false,
        },
        Field::Keywords | Field::Maintainers => {
            let items: Vec<String> = lines
                .iter()
                .filter_map(|l| list_item(l.trim()))
                .map(str::to_string)
                .collect();
            if items.is_empty() {
                let joined = lines
                    .iter()
                    .map(|l| l.trim())
                    .filter(|l| !l.is_empty())
                    .collect::<Vec<_>>()
                    .join(",");
                apply_list(record, field, split_inline_list(&joined))
            } else {
                apply_list(record, field, items)
            }
        }
        _ => {
            let first = lines
                .iter()
                .map(|l| l.trim())
                .find(|l| !l.is_empty() && fence_marker(l).is_none());
            match first {
                Some(line) => apply_scalar(record, field, list_item(line).unwrap_or(line)),
                None => false,
            }
        }
    }
}

/// Paragraphs separated by a blank line; wrapped lines joined by a space.
/// List items start a new line and fenced code is kept verbatim.
fn block_text(lines: &[&str]) -> Option<String> {
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut code: Vec<&str> = Vec::new();
    let mut fence: Option<&'static str> = None;

    fn flush(current: &mut Vec<String>, paragraphs: &mut Vec<String>) {
        if !current.is_empty() {
            paragraphs.push(current.join("\n"));
            current.clear();
        }
    }

    for line in lines {
        let trimmed = line.trim();
        if let Some(f) = fence {
            code.push(line.trim_end());
            if trimmed.starts_with(f) {
                fence = None;
                paragraphs.push(code.join("\n"));
                code.clear();
            }
            continue;
        }
        if let Some(f) = fence_marker(trimmed) {
            flush(&mut current, &mut paragraphs);
            fence = Some(f);
            code.push(line.trim_end());
            continue;
        }
        if trimmed.is_empty() {
            flush(&mut current, &mut paragraphs);
        } else if list_item(trimmed).is_some() || current.is_empty() {
            current.push(trimmed.to_string());
        } else if let Some(last) = current.last_mut() {
            last.push(' ');
            last.push_str(trimmed);
        }
    }
    flush(&mut current, &mut paragraphs);
    if !code.is_empty() {
        paragraphs.push(code.join("\n"));
    }

    let text = paragraphs.join("\n\n");
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn list_item(trimmed: &str) -> Option<&str> {
    for marker in ["- ", "* ", "+ "] {
        if let Some(rest) = trimmed.strip_prefix(marker) {
            return Some(rest.trim());
        }
    }
    let digits = trimmed.chars().take_while(char::is_ascii_digit).count();
    if digits > 0 {
        if let Some(rest) = trimmed[digits..].strip_prefix(". ") {
            return Some(rest.trim());
        }
    }
    None
}

fn split_inline_list(raw: &str) -> Vec<String> {
    let raw = unquote(raw);
    let raw = raw
        .strip_prefix('[')
        .and_then(|r| r.strip_suffix(']'))
        .unwrap_or(raw);
    raw.split(',')
        .map(|s| unquote(s).to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Strip one pair of matching quotes or a markdown code span.
fn unquote(raw: &str) -> &str {
    let s = raw.trim();
    for q in ['"', '\'', '`'] {
        if s.len() >= 2 && s.starts_with(q) && s.ends_with(q) {
            return s[1..s.len() - 1].trim();
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CatalogTemplate;

    fn record() -> ManifestRecord {
        CatalogTemplate::default().new_record("seed")
    }

    fn populate(content: &str, r: &mut ManifestRecord) {
        populate_from_markdown(content, r, ExtractOptions::default());
    }

    const ARCHIVE2DISK: &str = r#"---
slug: archive2disk
name: archive2disk
tags: disk, archive
maintainers: Jason DeTiberus <detiberusj@vmware.com>
description: "This action will stream a remote archive to a block device."
version: v1.0.0
createdAt: "2021-04-07T09:25:00Z"
---

# Archive2Disk

This action streams a compressed archive onto a disk.

```yaml
actions:
  - name: "stream image"
    image: quay.io/tinkerbell-actions/archive2disk:v1.0.0
```
"#;

    #[test]
    fn front_matter_populates_fields() {
        let mut r = record();
        populate(ARCHIVE2DISK, &mut r);
        assert_eq!(r.name, "archive2disk");
        assert_eq!(r.version.as_deref(), Some("v1.0.0"));
        assert_eq!(
            r.description.as_deref(),
            Some("This action will stream a remote archive to a block device.")
        );
        assert_eq!(r.keywords, vec!["disk", "archive"]);
        assert_eq!(r.maintainers.len(), 1);
        assert_eq!(r.maintainers[0].name, "Jason DeTiberus");
        assert_eq!(
            r.created_at.unwrap().to_rfc3339(),
            "2021-04-07T09:25:00+00:00"
        );
        assert_eq!(r.display_name.as_deref(), Some("Archive2Disk"));
    }

    #[test]
    fn description_heading_block() {
        let mut r = record();
        populate("# nginx\n\n## Description\n\nRuns nginx.\n", &mut r);
        assert_eq!(r.description.as_deref(), Some("Runs nginx."));
        assert_eq!(r.display_name.as_deref(), Some("nginx"));
    }

    #[test]
    fn block_ends_at_next_heading() {
        let mut r = record();
        populate(
            "## Description\nFirst line\nwraps here.\n\nSecond paragraph.\n## Version\n\n`v2.1.0`\n",
            &mut r,
        );
        assert_eq!(
            r.description.as_deref(),
            Some("First line wraps here.\n\nSecond paragraph.")
        );
        assert_eq!(r.version.as_deref(), Some("v2.1.0"));
    }

    #[test]
    fn identity_when_no_markers() {
        let mut r = record();
        populate(
            "---\nname: first\ndescription: one\nversion: v1\ntags: a, b\n---\n# First\n",
            &mut r,
        );
        let before = r.clone();
        populate(
            "Just some prose.\n\n## Usage\n\nRun it like this.\n\n```\nversion: 9\n```\n",
            &mut r,
        );
        assert_eq!(r, before);
    }

    #[test]
    fn markers_overwrite_prior_values() {
        let mut r = record();
        r.description = Some("old".to_string());
        r.version = Some("v0".to_string());
        r.keywords = vec!["old".to_string()];
        populate(
            "version: v3\n\n## Description\nnew\n\n## Keywords\n- disk\n- install\n",
            &mut r,
        );
        assert_eq!(r.description.as_deref(), Some("new"));
        assert_eq!(r.version.as_deref(), Some("v3"));
        assert_eq!(r.keywords, vec!["disk", "install"]);
    }

    #[test]
    fn empty_section_leaves_field_unchanged() {
        let mut r = record();
        r.description = Some("kept".to_string());
        populate("## Description\n\n## Usage\nstuff\n", &mut r);
        assert_eq!(r.description.as_deref(), Some("kept"));
    }

    #[test]
    fn headings_inside_code_fences_are_ignored() {
        let mut r = record();
        populate(
            "## Description\nWrites files.\n\n```sh\n## Version\necho hi\n```\n",
            &mut r,
        );
        assert!(r.version.is_none());
        assert_eq!(
            r.description.as_deref(),
            Some("Writes files.\n\n```sh\n## Version\necho hi\n```")
        );
    }

    #[test]
    fn key_values_after_preamble_are_body_text() {
        let mut r = record();
        populate("## Usage\n\nversion: v9\n", &mut r);
        assert!(r.version.is_none());
    }

    #[test]
    fn bold_preamble_keys() {
        let mut r = record();
        populate("# Kexec\n\n**Version**: v1.2.0\n**Maintainers:** A <a@x.io>, B\n", &mut r);
        assert_eq!(r.version.as_deref(), Some("v1.2.0"));
        assert_eq!(r.maintainers.len(), 2);
        assert_eq!(r.maintainers[0].email.as_deref(), Some("a@x.io"));
        assert_eq!(r.maintainers[1].name, "B");
    }

    #[test]
    fn front_matter_display_name_beats_title() {
        let mut r = record();
        populate("---\ndisplayName: Disk Wipe\n---\n# wipe\n", &mut r);
        assert_eq!(r.display_name.as_deref(), Some("Disk Wipe"));
    }

    #[test]
    fn only_first_title_counts() {
        let mut r = record();
        populate("# One\n\n# Two\n", &mut r);
        assert_eq!(r.display_name.as_deref(), Some("One"));
    }

    #[test]
    fn front_matter_sequences_and_maps() {
        let mut r = record();
        populate(
            "---\nkeywords:\n  - disk\n  - oci\nmaintainers:\n  - name: Ann\n    email: ann@example.com\n  - Bob\nversion: 1\n---\n",
            &mut r,
        );
        assert_eq!(r.keywords, vec!["disk", "oci"]);
        assert_eq!(r.maintainers[0].name, "Ann");
        assert_eq!(r.maintainers[0].email.as_deref(), Some("ann@example.com"));
        assert_eq!(r.maintainers[1].name, "Bob");
        assert_eq!(r.version.as_deref(), Some("1"));
    }

    #[test]
    fn invalid_yaml_front_matter_falls_back_to_lines() {
        let mut r = record();
        populate(
            "---\nname: cexec\ndescription: runs: a command in a chroot\n---\n",
            &mut r,
        );
        assert_eq!(r.name, "cexec");
        assert_eq!(
            r.description.as_deref(),
            Some("runs: a command in a chroot")
        );
    }

    #[test]
    fn byte_order_mark_does_not_hide_first_line() {
        let mut r = record();
        populate("\u{feff}# Nginx\n\n## Description\nRuns nginx.\n", &mut r);
        assert_eq!(r.display_name.as_deref(), Some("Nginx"));
        assert_eq!(r.description.as_deref(), Some("Runs nginx."));

        let mut r = record();
        populate("\u{feff}version: v1.0.0\n", &mut r);
        assert_eq!(r.version.as_deref(), Some("v1.0.0"));

        let mut r = record();
        populate("\u{feff}---\nversion: v2\n---\n", &mut r);
        assert_eq!(r.version.as_deref(), Some("v2"));
    }

    #[test]
    fn numeric_front_matter_keeps_original_text() {
        let mut r = record();
        populate("---\nversion: 1.10\n---\n", &mut r);
        assert_eq!(r.version.as_deref(), Some("1.10"));

        let mut r = record();
        populate("---\nname: 007\nversion: 2.0 # pinned\n---\n", &mut r);
        assert_eq!(r.name, "007");
        assert_eq!(r.version.as_deref(), Some("2.0"));
    }

    #[test]
    fn backtick_code_spans_are_unwrapped() {
        let mut r = record();
        populate("version: `v3.1.0`\n", &mut r);
        assert_eq!(r.version.as_deref(), Some("v3.1.0"));
    }

    #[test]
    fn unterminated_front_matter_is_body() {
        let mut r = record();
        populate("---\nname: ghost\n", &mut r);
        assert_eq!(r.name, "ghost");
    }

    #[test]
    fn invalid_created_at_is_ignored() {
        let mut r = record();
        populate("createdAt: yesterday\n", &mut r);
        assert!(r.created_at.is_none());
    }

    #[test]
    fn bracketed_inline_list() {
        let mut r = record();
        populate("tags: [\"disk\", 'install']\n", &mut r);
        assert_eq!(r.keywords, vec!["disk", "install"]);
    }

    #[test]
    fn description_list_items_keep_lines() {
        let mut r = record();
        populate(
            "## Description\nSupports:\n- ext4\n- xfs\n",
            &mut r,
        );
        assert_eq!(r.description.as_deref(), Some("Supports:\n- ext4\n- xfs"));
    }

    #[test]
    fn readme_embedded_only_when_enabled() {
        let doc = "---\nname: a\n---\n\n# A\n\nBody.\n";
        let mut r = record();
        populate(doc, &mut r);
        assert!(r.readme.is_none());

        populate_from_markdown(doc, &mut r, ExtractOptions { embed_readme: true });
        assert_eq!(r.readme.as_deref(), Some("# A\n\nBody."));
    }

    #[test]
    fn marker_names_are_normalized() {
        assert_eq!(Field::from_marker("Display Name"), Some(Field::DisplayName));
        assert_eq!(Field::from_marker("created_at"), Some(Field::CreatedAt));
        assert_eq!(Field::from_marker("TAGS:"), Some(Field::Keywords));
        assert_eq!(Field::from_marker("Usage"), None);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("device went away"))
        }
    }

    #[test]
    fn reader_failure_is_read_error() {
        let mut r = record();
        let before = r.clone();
        let err = populate_from_reader(
            FailingReader,
            Path::new("actions/x/README.md"),
            &mut r,
            ExtractOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
        assert_eq!(r, before);
    }

    #[test]
    fn invalid_utf8_is_read_error() {
        let mut r = record();
        let bytes: &[u8] = &[0x23, 0x20, 0xff, 0xfe];
        let err = populate_from_reader(
            bytes,
            Path::new("README.md"),
            &mut r,
            ExtractOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }
}
