mod archive;
mod chart;
mod cmd_bundle;
mod dockerfile;
mod error;
mod manifest;
mod output;
mod utils;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

const HINT: &str = "Run 'helm2bundle --help' for usage.";

#[derive(Parser)]
#[command(name = "helm2bundle", version)]
#[command(about = "Packages a Helm chart as a Service Bundle")]
struct Cli {
    #[command(flatten)]
    bundle: cmd_bundle::BundleArgs,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cmd_bundle::run(&cli.bundle) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:?}");
            eprintln!("{HINT}");
            ExitCode::FAILURE
        }
    }
}
