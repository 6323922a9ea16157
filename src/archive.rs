use std::io::Read;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std_ext::cap_std::{self, fs::Dir};
use flate2::read::GzDecoder;

use crate::chart::Chart;
use crate::error::{BundleError, Result};
use crate::utils::format_size;

pub const CHART_FILE: &str = "Chart.yaml";
pub const VALUES_FILE: &str = "values.yaml";

/// Everything the bundle is built from, as read out of one chart archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartArchive {
    pub chart: Chart,
    pub values: String,
    /// Final component of the archive path, e.g. `redis-1.1.12.tgz`.
    pub file_name: String,
}

/// Returns true if `path` is `<dir>/<file_name>` with exactly one leading
/// directory component, i.e. it matches the pattern `*/<file_name>`.
pub fn matches_member(path: &str, file_name: &str) -> bool {
    match path.split_once('/') {
        Some((dir, rest)) => !dir.contains('/') && rest == file_name,
        None => false,
    }
}

/// Open a gzip-compressed chart archive and pull out its `Chart.yaml` and
/// `values.yaml`.
pub fn read_chart_archive(path: &Utf8Path) -> Result<ChartArchive> {
    let open_err = |e: std::io::Error| match e.kind() {
        std::io::ErrorKind::NotFound => BundleError::NotFound {
            path: path.to_owned(),
        },
        _ => BundleError::Io {
            path: path.to_owned(),
            source: e,
        },
    };
    let parent = match path.parent() {
        Some(p) if !p.as_str().is_empty() => p,
        _ => Utf8Path::new("."),
    };
    let file_name = path.file_name().unwrap_or(path.as_str()).to_string();

    let dir = Dir::open_ambient_dir(parent, cap_std::ambient_authority()).map_err(open_err)?;
    let file = dir.open(&file_name).map_err(open_err)?;
    tracing::info!("reading chart archive {path}");

    let (chart, values) = scan_archive(path, GzDecoder::new(file))?;

    Ok(ChartArchive {
        chart,
        values,
        file_name,
    })
}

/// Walk the tar stream in `reader` until both members have been found.
///
/// `path` is only used for error reporting.
fn scan_archive(path: &Utf8Path, reader: impl Read) -> Result<(Chart, String)> {
    let corrupt = |source| BundleError::CorruptArchive {
        path: path.to_owned(),
        source,
    };

    let mut archive = tar::Archive::new(reader);
    let mut chart: Option<Chart> = None;
    let mut values: Option<String> = None;

    for entry in archive.entries().map_err(corrupt)? {
        let mut entry = entry.map_err(corrupt)?;
        let member = match entry.path() {
            Ok(p) => match Utf8PathBuf::from_path_buf(p.into_owned()) {
                Ok(p) => p.into_string(),
                Err(_) => continue,
            },
            Err(_) => continue,
        };

        let is_chart = matches_member(&member, CHART_FILE);
        let is_values = matches_member(&member, VALUES_FILE);
        if !is_chart && !is_values {
            tracing::trace!("skipping {member}");
            continue;
        }

        if is_chart && has_name(chart.as_ref()) {
            tracing::debug!("ignoring additional chart {member}");
            continue;
        }
        if is_values && values.is_some() {
            tracing::debug!("ignoring additional values {member}");
            continue;
        }

        let mut content = Vec::new();
        entry.read_to_end(&mut content).map_err(corrupt)?;
        tracing::debug!("found {member} ({})", format_size(content.len()));

        let content = String::from_utf8(content).map_err(|e| BundleError::ParseError {
            member: member.clone(),
            source: Box::new(e),
        })?;

        if is_chart {
            let parsed = Chart::parse(&member, &content)?;
            if parsed.name.is_empty() {
                tracing::warn!("{member} has no chart name; continuing scan");
            }
            chart = Some(parsed);
        } else {
            values = Some(content);
        }

        if has_name(chart.as_ref()) && values.as_ref().is_some_and(|v| !v.is_empty()) {
            tracing::debug!("found all chart members; stopping scan");
            break;
        }
    }

    let chart = match chart {
        Some(chart) if !chart.name.is_empty() => chart,
        _ => {
            return Err(BundleError::ChartNotFound {
                path: path.to_owned(),
            });
        }
    };
    let values = values.ok_or_else(|| BundleError::IncompleteArchive {
        path: path.to_owned(),
        missing: VALUES_FILE,
    })?;

    tracing::info!(
        "found chart {} {} with {} of values",
        chart.name,
        chart.version,
        format_size(values.len())
    );
    Ok((chart, values))
}

fn has_name(chart: Option<&Chart>) -> bool {
    chart.is_some_and(|c| !c.name.is_empty())
}
