use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use cap_std_ext::cap_std::{self, fs::Dir};
use clap::Args;

use crate::archive;
use crate::output::{self, DOCKERFILE, MANIFEST_FILE};
use crate::utils::one_line;

#[derive(Args, Debug)]
pub struct BundleArgs {
    /// Path to the packaged Helm chart (.tgz)
    #[arg(value_name = "CHARTFILE")]
    pub chartfile: Utf8PathBuf,

    /// Overwrite existing apb.yml and Dockerfile
    #[arg(short, long)]
    pub force: bool,
}

/// Generate the bundle files for `args.chartfile` in the current directory.
pub fn run(args: &BundleArgs) -> Result<()> {
    let cwd = Dir::open_ambient_dir(".", cap_std::ambient_authority())
        .context("opening current directory")?;
    run_in(&cwd, args)?;
    println!("Wrote {MANIFEST_FILE} and {DOCKERFILE}");
    Ok(())
}

fn run_in(dir: &Dir, args: &BundleArgs) -> Result<()> {
    let archive = archive::read_chart_archive(&args.chartfile)
        .with_context(|| format!("reading chart from {}", args.chartfile))?;
    tracing::debug!(
        "chart {}: {}",
        archive.chart.name,
        one_line(&archive.chart.description)
    );

    output::write_bundle(dir, &archive, args.force).context("writing bundle")?;
    Ok(())
}
