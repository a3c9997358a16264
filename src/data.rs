//! Data Loading and Management
//!
//! Loads the prospect roster, the knowledge snippet library and the scenario bundles
//! into one read-only `DataStore`. Loading is all-or-nothing: any unreadable or
//! malformed document aborts startup.

use std::collections::HashMap;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::config::DashboardConfig;
use crate::dashboard::types::{KnowledgeSnippet, Prospect, Scenario};
use crate::error::{DashboardError, Result};

/// One prospect as it appears in the roster.
///
/// The source object is kept verbatim (key order included) so the static export can
/// embed it unchanged; the typed view is produced when the prospect is rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct ProspectRecord {
    key: String,
    raw: Value,
}

impl ProspectRecord {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Typed prospect; fails if a required field is missing or mistyped.
    pub fn to_prospect(&self) -> Result<Prospect> {
        Prospect::deserialize(&self.raw).map_err(|source| DashboardError::MalformedRecord {
            key: self.key.clone(),
            source,
        })
    }
}

#[derive(Debug, Deserialize)]
struct SnippetLibrary {
    #[serde(default)]
    documents: Vec<KnowledgeSnippet>,
}

/// Read-only data for the process lifetime.
#[derive(Debug, Clone)]
pub struct DataStore {
    prospects: Vec<ProspectRecord>,
    prospect_index: HashMap<String, usize>,
    snippets: Vec<KnowledgeSnippet>,
    scenarios: Vec<(String, Scenario)>,
}

impl DataStore {
    /// Load every configured document from disk.
    pub fn load(config: &DashboardConfig) -> Result<Self> {
        tracing::info!("Loading prospect roster from {}", config.prospects_path.display());
        let roster_label = config.prospects_path.display().to_string();
        let roster: Value = parse_json(&roster_label, &read_file(&config.prospects_path)?)?;

        tracing::info!("Loading knowledge snippets from {}", config.snippets_path.display());
        let library_label = config.snippets_path.display().to_string();
        let library: SnippetLibrary =
            parse_json(&library_label, &read_file(&config.snippets_path)?)?;

        let mut scenarios = Vec::with_capacity(config.scenarios.len());
        for source in &config.scenarios {
            tracing::info!("Loading scenario '{}' from {}", source.label, source.path.display());
            let label = source.path.display().to_string();
            let scenario: Scenario = parse_json(&label, &read_file(&source.path)?)?;
            scenarios.push((source.label.clone(), scenario));
        }

        let store = Self::assemble(&roster_label, roster, library.documents, scenarios)?;
        tracing::info!(
            "Loaded {} prospects, {} snippets, {} scenarios",
            store.prospects.len(),
            store.snippets.len(),
            store.scenarios.len()
        );
        Ok(store)
    }

    /// Build a store from JSON text already in memory. Scenarios are `(label, json)`.
    pub fn from_json_documents(
        prospects_json: &str,
        snippets_json: &str,
        scenarios: &[(&str, &str)],
    ) -> Result<Self> {
        let roster: Value = parse_json("<prospects>", prospects_json)?;
        let library: SnippetLibrary = parse_json("<knowledge snippets>", snippets_json)?;
        let scenarios = scenarios
            .iter()
            .map(|(label, json)| {
                let scenario: Scenario = parse_json(&format!("<scenario {}>", label), json)?;
                Ok(((*label).to_string(), scenario))
            })
            .collect::<Result<Vec<_>>>()?;

        Self::assemble("<prospects>", roster, library.documents, scenarios)
    }

    fn assemble(
        roster_label: &str,
        roster: Value,
        snippets: Vec<KnowledgeSnippet>,
        scenarios: Vec<(String, Scenario)>,
    ) -> Result<Self> {
        let prospects = build_roster(roster_label, roster)?;
        let scenarios = dedupe_scenarios(scenarios);

        if scenarios.is_empty() {
            return Err(DashboardError::MalformedDocument {
                path: "scenarios".to_string(),
                reason: "no scenarios configured".to_string(),
            });
        }

        let prospect_index = prospects
            .iter()
            .enumerate()
            .map(|(idx, record)| (record.key.clone(), idx))
            .collect();

        Ok(Self {
            prospects,
            prospect_index,
            snippets,
            scenarios,
        })
    }

    // ------------------------------------------------------------------------
    // Lookups
    // ------------------------------------------------------------------------

    pub fn find_prospect(&self, name: &str) -> Option<&ProspectRecord> {
        self.prospect_index.get(name).map(|&idx| &self.prospects[idx])
    }

    pub fn find_scenario(&self, label: &str) -> Option<&Scenario> {
        self.scenarios
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, scenario)| scenario)
    }

    /// Prospect for `key`, or the first prospect when the key is unset or unknown.
    pub fn resolve_prospect(&self, key: Option<&str>) -> &ProspectRecord {
        match key.filter(|k| !k.is_empty()) {
            Some(k) => self.find_prospect(k).unwrap_or_else(|| {
                tracing::warn!(
                    "Unknown prospect '{}', falling back to '{}'",
                    k,
                    self.default_prospect_key()
                );
                &self.prospects[0]
            }),
            None => &self.prospects[0],
        }
    }

    /// Scenario for `label` with its label, or the first scenario when unset or unknown.
    pub fn resolve_scenario(&self, label: Option<&str>) -> (&str, &Scenario) {
        let found = label
            .filter(|l| !l.is_empty())
            .and_then(|l| {
                let hit = self.scenarios.iter().find(|(name, _)| name == l);
                if hit.is_none() {
                    tracing::warn!(
                        "Unknown scenario '{}', falling back to '{}'",
                        l,
                        self.default_scenario_key()
                    );
                }
                hit
            })
            .unwrap_or(&self.scenarios[0]);
        (found.0.as_str(), &found.1)
    }

    pub fn default_prospect_key(&self) -> &str {
        &self.prospects[0].key
    }

    pub fn default_scenario_key(&self) -> &str {
        &self.scenarios[0].0
    }

    pub fn prospect_keys(&self) -> impl Iterator<Item = &str> {
        self.prospects.iter().map(|p| p.key.as_str())
    }

    pub fn scenario_keys(&self) -> impl Iterator<Item = &str> {
        self.scenarios.iter().map(|(label, _)| label.as_str())
    }

    pub fn prospect_records(&self) -> &[ProspectRecord] {
        &self.prospects
    }

    pub fn scenarios(&self) -> impl Iterator<Item = (&str, &Scenario)> {
        self.scenarios.iter().map(|(label, s)| (label.as_str(), s))
    }

    pub fn snippet_library(&self) -> &[KnowledgeSnippet] {
        &self.snippets
    }

    /// The scenario's own snippets when it has a non-empty override, else the whole
    /// library. Never a mix of the two.
    pub fn effective_snippets<'a>(&'a self, scenario: &'a Scenario) -> &'a [KnowledgeSnippet] {
        match &scenario.knowledge_snippets {
            Some(own) if !own.is_empty() => own,
            _ => &self.snippets,
        }
    }
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| DashboardError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn parse_json<T: DeserializeOwned>(label: &str, text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(|source| DashboardError::Parse {
        path: label.to_string(),
        source,
    })
}

/// Extract the ordered prospect records. A repeated company name replaces the earlier
/// record in place.
fn build_roster(label: &str, roster: Value) -> Result<Vec<ProspectRecord>> {
    let malformed = |reason: String| DashboardError::MalformedDocument {
        path: label.to_string(),
        reason,
    };

    let entries = match roster {
        Value::Object(mut map) => match map.remove("prospects") {
            Some(Value::Array(entries)) => entries,
            _ => return Err(malformed("missing `prospects` array".to_string())),
        },
        _ => return Err(malformed("roster is not a JSON object".to_string())),
    };

    let mut records: Vec<ProspectRecord> = Vec::with_capacity(entries.len());
    for (idx, raw) in entries.into_iter().enumerate() {
        let key = raw
            .get("companyName")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| malformed(format!("prospect #{} has no string `companyName`", idx)))?;

        match records.iter_mut().find(|r| r.key == key) {
            Some(existing) => {
                tracing::warn!("Duplicate prospect '{}' in roster, keeping the later entry", key);
                existing.raw = raw;
            }
            None => records.push(ProspectRecord { key, raw }),
        }
    }

    if records.is_empty() {
        return Err(malformed("roster lists no prospects".to_string()));
    }
    Ok(records)
}

/// A repeated scenario label replaces the earlier scenario in place, as prospects do.
fn dedupe_scenarios(scenarios: Vec<(String, Scenario)>) -> Vec<(String, Scenario)> {
    let mut unique: Vec<(String, Scenario)> = Vec::with_capacity(scenarios.len());
    for (label, scenario) in scenarios {
        match unique.iter_mut().find(|(existing, _)| *existing == label) {
            Some(slot) => {
                tracing::warn!("Duplicate scenario '{}', keeping the later entry", label);
                slot.1 = scenario;
            }
            None => unique.push((label, scenario)),
        }
    }
    unique
}
