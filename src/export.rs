//! Static export: one self-contained HTML file.
//!
//! The bundle inlines the stylesheet, both selectors, the default selection rendered
//! into the ten regions, and a small script. The script carries the verbatim prospect
//! records plus the region markup for every prospect and every scenario, produced by the
//! same builders as the live page, and swaps regions when a selector changes.

use std::path::Path;

use askama::Template;
use chrono::Utc;
use serde_json::{Map, Value};

use crate::dashboard::generator::{prospect_regions, render_dashboard, scenario_regions};
use crate::data::DataStore;
use crate::error::{DashboardError, Result};
use crate::formatters::html::{json_for_script_tag, HtmlFormatter};
use crate::formatters::page::{region_columns, select_options, PAGE_SUBTITLE, PAGE_TITLE};
use crate::formatters::{RegionView, SelectOption, STYLESHEET};

#[derive(Template)]
#[template(path = "export/index.html")]
pub struct StaticBundleTemplate {
    pub title: String,
    pub subtitle: String,
    pub stylesheet: String,
    pub generated_at: String,
    pub prospect_options: Vec<SelectOption>,
    pub scenario_options: Vec<SelectOption>,
    pub left_regions: Vec<RegionView>,
    pub right_regions: Vec<RegionView>,
    pub prospects_json: String,
    pub views_json: String,
    pub defaults_json: String,
}

/// Render the complete bundle. Fails outright if any prospect cannot be rendered.
pub fn render_static_bundle(store: &DataStore) -> Result<String> {
    let default_view = render_dashboard(store, None, None)?;
    let (left_regions, right_regions) = region_columns(&default_view);

    let prospects: Vec<&Value> = store.prospect_records().iter().map(|r| r.raw()).collect();
    let views = serde_json::json!({
        "prospects": prospect_views(store)?,
        "scenarios": scenario_views(store),
    });
    let defaults = serde_json::json!({
        "prospects": store.default_prospect_key(),
        "scenarios": store.default_scenario_key(),
    });

    let template = StaticBundleTemplate {
        title: PAGE_TITLE.to_string(),
        subtitle: PAGE_SUBTITLE.to_string(),
        stylesheet: STYLESHEET.to_string(),
        generated_at: Utc::now().to_rfc3339(),
        prospect_options: select_options(store.prospect_keys(), store.default_prospect_key()),
        scenario_options: select_options(store.scenario_keys(), store.default_scenario_key()),
        left_regions,
        right_regions,
        prospects_json: script_json(&prospects)?,
        views_json: script_json(&views)?,
        defaults_json: script_json(&defaults)?,
    };

    Ok(template.render()?)
}

/// Render the bundle and write it to `path`, replacing any previous export.
pub fn export_static_bundle(store: &DataStore, path: &Path) -> Result<usize> {
    let html = render_static_bundle(store)?;
    let write_err = |source: std::io::Error| DashboardError::Write {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, &html).map_err(write_err)?;

    tracing::info!("Wrote {} ({} bytes)", path.display(), html.len());
    Ok(html.len())
}

/// Prospect name → region id → inner markup.
fn prospect_views(store: &DataStore) -> Result<Map<String, Value>> {
    let mut views = Map::new();
    for record in store.prospect_records() {
        let regions = prospect_regions(&record.to_prospect()?);
        let markup: Map<String, Value> = regions
            .entries()
            .into_iter()
            .map(|(id, fragment)| {
                (id.dom_id().to_string(), Value::String(HtmlFormatter::format(fragment)))
            })
            .collect();
        views.insert(record.key().to_string(), Value::Object(markup));
    }
    Ok(views)
}

/// Scenario label → region id → inner markup.
fn scenario_views(store: &DataStore) -> Map<String, Value> {
    store
        .scenarios()
        .map(|(label, scenario)| {
            let regions = scenario_regions(scenario, store.effective_snippets(scenario));
            let markup: Map<String, Value> = regions
                .entries()
                .into_iter()
                .map(|(id, fragment)| {
                    (id.dom_id().to_string(), Value::String(HtmlFormatter::format(fragment)))
                })
                .collect();
            (label.to_string(), Value::Object(markup))
        })
        .collect()
}

fn script_json<T: serde::Serialize>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value).map_err(|source| DashboardError::Serialize {
        what: "static bundle data".to_string(),
        source,
    })?;
    Ok(json_for_script_tag(&json))
}

/// Parse the prospect array embedded in an exported bundle.
pub fn embedded_prospects(bundle: &str) -> Option<Vec<Value>> {
    const MARKER: &str = "const PROSPECTS = ";
    let start = bundle.find(MARKER)? + MARKER.len();
    let line = bundle[start..].lines().next()?;
    serde_json::from_str(line.trim_end().trim_end_matches(';')).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROSTER: &str = r#"{"prospects": [
        {"companyName": "NovaThera Labs", "industry": "Biotech", "headquarters": "Boston, MA",
         "annualRevenue": "$120M", "growthStage": "Series C",
         "techStack": {"backend": "Postgres", "analytics": "dbt"},
         "personas": [{"name": "Dana", "title": "CISO", "personaBio": "Says </script> a lot."}],
         "challenges": ["Evidence"], "buyingTriggers": ["Audit"], "competitiveNotes": ["Vanta"],
         "crmOwner": "kept verbatim"},
        {"companyName": "Federal Pulse", "industry": "GovTech", "headquarters": "Arlington, VA",
         "annualRevenue": "$80M", "growthStage": "Growth", "techStack": {},
         "personas": [], "challenges": [], "buyingTriggers": [], "competitiveNotes": []}
    ]}"#;

    fn store() -> DataStore {
        DataStore::from_json_documents(
            ROSTER,
            r#"{"documents": [{"title": "Runbook", "snippet": "Rotate", "path": "docs/r.md"}]}"#,
            &[
                ("Audit Push", r#"{"playbook": {"opening_angle": "Lead with audit"}}"#),
                ("Consolidation", r#"{"call_studio": {"fallback_line": "Send recap"}}"#),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_bundle_round_trips_prospects() {
        let store = store();
        let bundle = render_static_bundle(&store).unwrap();

        let embedded = embedded_prospects(&bundle).expect("embedded prospect array");
        let source: Value = serde_json::from_str(ROSTER).unwrap();
        assert_eq!(embedded, source["prospects"].as_array().unwrap().clone());
    }

    #[test]
    fn test_bundle_has_both_selectors_in_order() {
        let bundle = render_static_bundle(&store()).unwrap();
        assert!(bundle.contains("<select id=\"prospect-select\""));
        assert!(bundle.contains("<select id=\"scenario-select\""));

        let nova = bundle.find("<option value=\"NovaThera Labs\"").unwrap();
        let pulse = bundle.find("<option value=\"Federal Pulse\"").unwrap();
        assert!(nova < pulse);
        assert!(bundle.find("<option value=\"Audit Push\"").unwrap()
            < bundle.find("<option value=\"Consolidation\"").unwrap());
    }

    #[test]
    fn test_bundle_is_self_contained() {
        let bundle = render_static_bundle(&store()).unwrap();
        assert!(bundle.contains("<style>"));
        assert!(bundle.contains(".stat-grid"));
        assert!(bundle.contains("const VIEWS = "));
        assert!(!bundle.contains("Says </script>"));
        // default selection rendered server-side
        assert!(bundle.contains("Lead with audit"));
        assert!(bundle.contains("id=\"call-studio\""));
    }

    #[test]
    fn test_bundle_fails_on_malformed_prospect() {
        let store = DataStore::from_json_documents(
            r#"{"prospects": [{"companyName": "Half Record"}]}"#,
            "{}",
            &[("Only", "{}")],
        )
        .unwrap();
        let err = render_static_bundle(&store).unwrap_err();
        assert!(matches!(err, DashboardError::MalformedRecord { .. }));
    }

    #[test]
    fn test_script_json_failure_is_serialize_error() {
        // serde_json rejects non-string map keys
        let mut unencodable = std::collections::HashMap::new();
        unencodable.insert(vec![1u8], "value");

        let err = script_json(&unencodable).unwrap_err();
        assert!(matches!(err, DashboardError::Serialize { .. }), "got {:?}", err);
        assert!(err.to_string().starts_with("failed to serialize static bundle data"));
    }

    #[test]
    fn test_export_overwrites_previous_file() {
        let dir = std::env::temp_dir().join(format!("dealcast-export-{}", std::process::id()));
        let path = dir.join("nested").join("index.html");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "stale").unwrap();

        let written = export_static_bundle(&store(), &path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.len(), written);
        assert!(contents.starts_with("<!doctype html>"));

        std::fs::remove_dir_all(&dir).ok();
    }
}
