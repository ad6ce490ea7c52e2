mod cmd;
mod output;

use actionhub_core::paths;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "actionhub",
    about = "Generate Artifact Hub manifests from action proposal READMEs",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one manifest per action under <context>/actions
    Generate {
        /// Base path of the actions repository
        #[arg(long, default_value = ".", env = "ACTIONHUB_CONTEXT")]
        context: PathBuf,

        /// Where the generated manifests are stored
        #[arg(long, default_value = paths::DEFAULT_OUTPUT_DIR)]
        output: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Generate { context, output } => {
            cmd::generate::run(&context, &output)
        }
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
