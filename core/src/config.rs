//! Dashboard configuration.
//!
//! Config lives in an optional `dashboard.json` next to the source
//! files; every field has a default so a bare data directory with the
//! canonical file names works without any config at all.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceFiles {
    pub clients: String,
    pub sales: String,
    pub visits: String,
    pub subscriptions: String,
    pub complaints: String,
    pub staff_movements: String,
    pub trainers: String,
}

impl Default for SourceFiles {
    fn default() -> Self {
        Self {
            clients: "clients.csv".into(),
            sales: "sales.csv".into(),
            visits: "visits.csv".into(),
            subscriptions: "subscriptions.csv".into(),
            complaints: "complaints.csv".into(),
            staff_movements: "staff_movements.csv".into(),
            trainers: "trainers.csv".into(),
        }
    }
}

/// Parameters of the synthetic churn fixture. Not a model — a seeded,
/// reproducible demo table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChurnFixtureConfig {
    pub seed: u64,
    pub sample_size: usize,
    pub high_risk_probability: f64,
}

impl Default for ChurnFixtureConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            sample_size: 11,
            high_risk_probability: 0.6,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default)]
    pub sources: SourceFiles,
    #[serde(default)]
    pub churn: ChurnFixtureConfig,
}

fn default_data_dir() -> String {
    "./data".into()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            sources: SourceFiles::default(),
            churn: ChurnFixtureConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// Load from `{data_dir}/dashboard.json`, falling back to defaults
    /// when the file does not exist.
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let path = format!("{data_dir}/dashboard.json");
        let mut config = match std::fs::read_to_string(&path) {
            Ok(content) => {
                let parsed: DashboardConfig = serde_json::from_str(&content)
                    .map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))?;
                parsed
            }
            Err(_) => {
                log::debug!("no dashboard.json in {data_dir}, using defaults");
                DashboardConfig::default()
            }
        };
        config.data_dir = data_dir.to_string();
        Ok(config)
    }

    /// Defaults for tests: canonical file names, fixture seed 42.
    pub fn default_test() -> Self {
        DashboardConfig::default()
    }

    pub fn source_path(&self, file_name: &str) -> PathBuf {
        Path::new(&self.data_dir).join(file_name)
    }
}
