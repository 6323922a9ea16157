//! The `apb.yml` service bundle manifest generated from a chart.

use indexmap::IndexMap;
use serde::Serialize;

use crate::archive::ChartArchive;

pub const MANIFEST_VERSION: &str = "1.0";

/// Top-level `apb.yml` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub version: String,
    pub name: String,
    pub description: String,
    pub bindable: bool,
    #[serde(rename = "async")]
    pub async_mode: String,
    pub metadata: IndexMap<String, String>,
    pub plans: Vec<Plan>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub name: String,
    pub description: String,
    pub free: bool,
    pub metadata: IndexMap<String, String>,
    pub parameters: Vec<Parameter>,
}

/// A user-editable plan parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub display_type: String,
    pub default: String,
}

impl Manifest {
    /// Map an extracted chart onto a bundle manifest.
    ///
    /// Bundles generated from charts can't be bound, and the chart's values
    /// file is exposed unparsed as the default of a single `values` parameter
    /// so it can be edited at provision time.
    pub fn from_chart(archive: &ChartArchive) -> Self {
        let chart = &archive.chart;

        let mut metadata = IndexMap::new();
        metadata.insert("displayName".to_string(), format!("{}-helm", chart.name));
        metadata.insert("imageURL".to_string(), chart.icon.clone());

        let values = Parameter {
            name: "values".to_string(),
            title: "Values".to_string(),
            kind: "string".to_string(),
            display_type: "textarea".to_string(),
            default: archive.values.clone(),
        };

        let plan = Plan {
            name: "default".to_string(),
            description: format!("This default plan deploys helm chart {}", chart.name),
            free: true,
            metadata: IndexMap::new(),
            parameters: vec![values],
        };

        Manifest {
            version: MANIFEST_VERSION.to_string(),
            name: format!("{}-apb", chart.name),
            description: chart.description.clone(),
            bindable: false,
            async_mode: "optional".to_string(),
            metadata,
            plans: vec![plan],
        }
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}
