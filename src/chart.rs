use serde::Deserialize;

use crate::error::{BundleError, Result};

/// The subset of a chart's `Chart.yaml` that ends up in the bundle.
///
/// Fields absent from the source document are left empty and anything we
/// don't know about is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Chart {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub version: String,
}

impl Chart {
    /// Parse the contents of a `Chart.yaml` member. `member` is the archive
    /// path, used for error reporting.
    pub fn parse(member: &str, content: &str) -> Result<Self> {
        // serde_yaml rejects an empty document for a struct; an empty chart is
        // just a chart without a name.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| BundleError::ParseError {
            member: member.to_string(),
            source: Box::new(e),
        })
    }
}
