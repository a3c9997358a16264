//! Dashboard Generator
//!
//! Composes the view builders into the ten named regions for one selection.
//!
//! Public API (consumed by api_server.rs, web handlers and the static exporter):
//! - prospect_regions(prospect) -> ProspectRegions
//! - scenario_regions(scenario, snippets) -> ScenarioRegions
//! - render_dashboard(store, prospect_key, scenario_key) -> Result<DashboardView>
//! - DashboardSession: the two selection variables, re-rendering on every change

use crate::dashboard::types::{KnowledgeSnippet, Prospect, Scenario};
use crate::dashboard::view_builder as vb;
use crate::dashboard::view_models::{DashboardView, ProspectRegions, ScenarioRegions};
use crate::data::DataStore;
use crate::error::Result;

pub fn prospect_regions(prospect: &Prospect) -> ProspectRegions {
    ProspectRegions {
        company_meta: vb::company_capsule(prospect),
        personas: vb::personas_section(prospect),
        tech_stack: vb::tech_stack_section(prospect),
        challenges: vb::list_section("Challenges", &prospect.challenges),
        triggers: vb::list_section("Buying Triggers", &prospect.buying_triggers),
        competition: vb::list_section("Competitive Notes", &prospect.competitive_notes),
    }
}

pub fn scenario_regions(scenario: &Scenario, snippets: &[KnowledgeSnippet]) -> ScenarioRegions {
    ScenarioRegions {
        snippet_feed: vb::snippet_feed(snippets),
        intel_brief: vb::intel_brief(&scenario.intel_scout_brief),
        playbook: vb::playbook(&scenario.playbook),
        call_studio: vb::call_studio(&scenario.call_studio),
    }
}

/// Render all ten regions. Unknown or missing keys fall back to the first entry;
/// a malformed prospect fails the whole render.
pub fn render_dashboard(
    store: &DataStore,
    prospect_key: Option<&str>,
    scenario_key: Option<&str>,
) -> Result<DashboardView> {
    let record = store.resolve_prospect(prospect_key);
    let (scenario_label, scenario) = store.resolve_scenario(scenario_key);

    let prospect = record.to_prospect()?;
    let snippets = store.effective_snippets(scenario);

    tracing::debug!(
        "Rendering dashboard for '{}' / '{}' ({} snippets)",
        record.key(),
        scenario_label,
        snippets.len()
    );

    Ok(DashboardView {
        prospect: record.key().to_string(),
        scenario: scenario_label.to_string(),
        prospect_regions: prospect_regions(&prospect),
        scenario_regions: scenario_regions(scenario, snippets),
    })
}

/// Selection state of one dashboard viewer.
///
/// Holds exactly the two selection keys. Every change re-renders the full set of ten
/// regions, even those the changed key does not affect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSession {
    prospect: String,
    scenario: String,
}

impl DashboardSession {
    /// Session starting at both defaults.
    pub fn new(store: &DataStore) -> Self {
        Self {
            prospect: store.default_prospect_key().to_string(),
            scenario: store.default_scenario_key().to_string(),
        }
    }

    /// Session starting at the requested keys, each falling back to its default.
    pub fn with_selection(
        store: &DataStore,
        prospect: Option<&str>,
        scenario: Option<&str>,
    ) -> Self {
        Self {
            prospect: store.resolve_prospect(prospect).key().to_string(),
            scenario: store.resolve_scenario(scenario).0.to_string(),
        }
    }

    pub fn prospect(&self) -> &str {
        &self.prospect
    }

    pub fn scenario(&self) -> &str {
        &self.scenario
    }

    pub fn select_prospect(&mut self, store: &DataStore, key: &str) -> Result<DashboardView> {
        self.prospect = store.resolve_prospect(Some(key)).key().to_string();
        self.render(store)
    }

    pub fn select_scenario(&mut self, store: &DataStore, label: &str) -> Result<DashboardView> {
        self.scenario = store.resolve_scenario(Some(label)).0.to_string();
        self.render(store)
    }

    pub fn render(&self, store: &DataStore) -> Result<DashboardView> {
        render_dashboard(store, Some(&self.prospect), Some(&self.scenario))
    }
}
