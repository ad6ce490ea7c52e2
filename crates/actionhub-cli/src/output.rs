use actionhub_core::generate::GeneratedManifest;

const ACTION_HEADER: &str = "ACTION";
const MANIFEST_HEADER: &str = "MANIFEST";

/// Two-column summary of a run: the action directory and the file written for it.
pub fn report_lines(manifests: &[GeneratedManifest]) -> Vec<String> {
    let action_width = manifests
        .iter()
        .map(|m| m.entry.len())
        .fold(ACTION_HEADER.len(), usize::max);

    let mut lines = Vec::with_capacity(manifests.len() + 2);
    lines.push(format!("{ACTION_HEADER:action_width$}  {MANIFEST_HEADER}"));
    lines.push(format!(
        "{}  {}",
        "-".repeat(action_width),
        "-".repeat(MANIFEST_HEADER.len())
    ));
    for m in manifests {
        lines.push(format!("{:action_width$}  {}", m.entry, m.path.display()));
    }
    lines
}

pub fn print_report(manifests: &[GeneratedManifest]) {
    for line in report_lines(manifests) {
        println!("{line}");
    }
}
