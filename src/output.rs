use cap_std_ext::cap_std::fs::Dir;
use cap_std_ext::dirext::CapStdExtDirExt;

use crate::archive::ChartArchive;
use crate::dockerfile;
use crate::error::{BundleError, Result};
use crate::manifest::Manifest;

pub const MANIFEST_FILE: &str = "apb.yml";
pub const DOCKERFILE: &str = "Dockerfile";

/// Render the manifest and Dockerfile for `archive` and write them into
/// `dir`.
///
/// Both files are rendered before anything is written and each one is
/// replaced atomically. Unless `force` is set, an existing output file aborts
/// the run before either is touched.
pub fn write_bundle(dir: &Dir, archive: &ChartArchive, force: bool) -> Result<()> {
    if !force {
        for name in [MANIFEST_FILE, DOCKERFILE] {
            let existing = dir
                .symlink_metadata_optional(name)
                .map_err(|e| BundleError::WriteError {
                    name,
                    source: Box::new(e),
                })?;
            if existing.is_some() {
                return Err(BundleError::AlreadyExists { name });
            }
        }
    }

    let manifest = Manifest::from_chart(archive)
        .to_yaml()
        .map_err(|e| BundleError::WriteError {
            name: MANIFEST_FILE,
            source: Box::new(e),
        })?;
    let dockerfile = dockerfile::render(&archive.file_name);

    for (name, contents) in [(MANIFEST_FILE, manifest), (DOCKERFILE, dockerfile)] {
        dir.atomic_write(name, contents)
            .map_err(|e| BundleError::WriteError {
                name,
                source: Box::new(e),
            })?;
        tracing::info!("wrote {name}");
    }

    Ok(())
}
