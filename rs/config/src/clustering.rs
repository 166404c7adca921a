use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PALETTE: [&str; 10] = [
    "Blue", "Green", "Purple", "Pink", "Red", "Orange", "Brown", "Black", "Yellow", "Grey",
];

/// Config for a clustering run. Every field is optional in the YAML file, missing
/// fields take their default.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ClusteringConfig {
    /// CSV file with `name,birthrate,life_expectancy` rows, first row is a header.
    /// The user is prompted for it when unset.
    /// Default: None
    pub input_path: Option<String>,

    /// Number of clusters to build. Must be between 1 and the number of countries
    /// in the input. The user is prompted for it when unset.
    /// Default: None
    pub num_clusters: Option<usize>,

    /// Colors handed out to clusters. The palette is shuffled on every run, so a
    /// cluster doesn't keep its color between runs. Its size caps the number of
    /// clusters.
    /// Default: Blue, Green, Purple, Pink, Red, Orange, Brown, Black, Yellow, Grey
    pub palette: Vec<String>,

    /// If set, the per-cluster report is also written to this path as JSON.
    /// Default: None
    pub report_path: Option<String>,

    /// If set, a scatter plot of the clusters is written to this path as SVG.
    /// Default: None
    pub plot_path: Option<String>,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            input_path: None,
            num_clusters: None,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            report_path: None,
            plot_path: None,
        }
    }
}

impl ClusteringConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str::<ClusteringConfig>(yaml)?)
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&yaml)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
