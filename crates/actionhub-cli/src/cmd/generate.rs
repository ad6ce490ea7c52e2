use crate::output::print_report;
use actionhub_core::{
    config::CatalogConfig,
    generate::{generate, GenerateOptions},
    paths,
};
use anyhow::Context;
use std::path::Path;

pub fn run(context: &Path, output: &Path) -> anyhow::Result<()> {
    let config = CatalogConfig::load(context)
        .with_context(|| format!("failed to load {}", paths::CONFIG_FILE))?;

    let opts = GenerateOptions::new(paths::actions_dir(context), output).with_config(&config);
    let report = generate(&opts, &config.template).context("failed to generate manifests")?;

    if report.manifests.is_empty() {
        println!("No actions found in {}", opts.input_root.display());
        return Ok(());
    }

    print_report(&report.manifests);
    println!(
        "\nGenerated {} manifest(s) in {}",
        report.manifests.len(),
        output.display()
    );
    Ok(())
}
