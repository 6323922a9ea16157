use camino::Utf8PathBuf;
use thiserror::Error;

/// Failures of a single bundling run. None of them are retried.
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("chart archive {path} not found")]
    NotFound { path: Utf8PathBuf },

    #[error("opening chart archive {path}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not a valid gzip-compressed tar archive")]
    CorruptArchive {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Chart.yaml not found in archive {path}")]
    ChartNotFound { path: Utf8PathBuf },

    #[error("{missing} not found in archive {path}")]
    IncompleteArchive {
        path: Utf8PathBuf,
        missing: &'static str,
    },

    #[error("parsing {member}")]
    ParseError {
        member: String,
        #[source]
        source: BoxedError,
    },

    #[error("{name} already exists; use --force to overwrite")]
    AlreadyExists { name: &'static str },

    #[error("writing {name}")]
    WriteError {
        name: &'static str,
        #[source]
        source: BoxedError,
    },
}

pub type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type Result<T, E = BundleError> = std::result::Result<T, E>;
