//! Runtime configuration.
//!
//! Read from environment variables; every variable has a default so an unconfigured run
//! reads `data/` and exports to `dist/index.html`.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{DashboardError, Result};

pub const PROSPECTS_FILE: &str = "prospects.json";
pub const SNIPPETS_FILE: &str = "knowledge-snippets.json";

/// Scenario label → file, relative to the data directory.
const DEFAULT_SCENARIOS: &[(&str, &str)] = &[
    ("NovaThera Labs • Audit Push", "call-studio-sample.json"),
    ("Federal Pulse • Security Consolidation", "dashboard-preload-sample.json"),
];

/// One scenario document and the label it is selected by.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScenarioSource {
    pub label: String,
    pub path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct ScenarioManifest {
    scenarios: Vec<ScenarioSource>,
}

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub data_dir: PathBuf,
    pub prospects_path: PathBuf,
    pub snippets_path: PathBuf,
    /// Ordered; the first entry is the default scenario.
    pub scenarios: Vec<ScenarioSource>,
    pub export_path: PathBuf,
    pub port: u16,
}

impl DashboardConfig {
    /// Defaults rooted at `data_dir`.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        let scenarios = DEFAULT_SCENARIOS
            .iter()
            .map(|(label, file)| ScenarioSource {
                label: (*label).to_string(),
                path: data_dir.join(file),
            })
            .collect();

        Self {
            prospects_path: data_dir.join(PROSPECTS_FILE),
            snippets_path: data_dir.join(SNIPPETS_FILE),
            data_dir,
            scenarios,
            export_path: PathBuf::from("dist/index.html"),
            port: 8050,
        }
    }

    /// Configuration from `DATA_DIR`, `SCENARIO_MANIFEST`, `EXPORT_PATH` and `PORT`.
    pub fn from_env() -> Result<Self> {
        let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string());
        let mut config = Self::with_data_dir(data_dir);

        if let Ok(manifest) = std::env::var("SCENARIO_MANIFEST") {
            config.scenarios = load_scenario_manifest(Path::new(&manifest), &config.data_dir)?;
        }

        if let Ok(export_path) = std::env::var("EXPORT_PATH") {
            config.export_path = PathBuf::from(export_path);
        }

        if let Some(port) = std::env::var("PORT").ok().and_then(|p| p.parse().ok()) {
            config.port = port;
        }

        Ok(config)
    }
}

/// Read a `{"scenarios": [{"label", "path"}]}` manifest. Relative paths resolve
/// against `data_dir`.
pub fn load_scenario_manifest(path: &Path, data_dir: &Path) -> Result<Vec<ScenarioSource>> {
    let label = path.display().to_string();
    let raw = std::fs::read_to_string(path).map_err(|source| DashboardError::Io {
        path: label.clone(),
        source,
    })?;
    let manifest: ScenarioManifest = serde_json::from_str(&raw)
        .map_err(|source| DashboardError::Parse { path: label.clone(), source })?;

    if manifest.scenarios.is_empty() {
        return Err(DashboardError::MalformedDocument {
            path: label,
            reason: "manifest lists no scenarios".to_string(),
        });
    }

    Ok(manifest
        .scenarios
        .into_iter()
        .map(|source| ScenarioSource {
            path: if source.path.is_relative() {
                data_dir.join(&source.path)
            } else {
                source.path
            },
            label: source.label,
        })
        .collect())
}
