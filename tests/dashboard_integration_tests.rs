//! Dashboard Integration Tests
//!
//! Loads the bundled `data/` documents and runs the whole pipeline: store → fragments →
//! HTML, for the live renderer and the static export.

use std::path::PathBuf;

use dealcast::dashboard::view_builder::to_title_case;
use dealcast::export::embedded_prospects;
use dealcast::formatters::HtmlFormatter;
use dealcast::{
    render_dashboard, render_static_bundle, DashboardConfig, DashboardError, DashboardSession,
    DataStore, RegionId,
};
use serde_json::Value;

const AUDIT_PUSH: &str = "NovaThera Labs • Audit Push";
const CONSOLIDATION: &str = "Federal Pulse • Security Consolidation";

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

fn load_store() -> DataStore {
    DataStore::load(&DashboardConfig::with_data_dir(data_dir())).expect("Failed to load data/")
}

fn source_prospects() -> Vec<Value> {
    let raw = std::fs::read_to_string(data_dir().join("prospects.json")).unwrap();
    let doc: Value = serde_json::from_str(&raw).unwrap();
    doc["prospects"].as_array().unwrap().clone()
}

// =========================================================================
// Loading
// =========================================================================

#[test]
fn test_load_bundled_data() {
    let store = load_store();

    let prospects: Vec<&str> = store.prospect_keys().collect();
    assert_eq!(
        prospects,
        vec!["NovaThera Labs", "Federal Pulse", "Harbor Freight Analytics"],
        "Prospects keep source order"
    );

    let scenarios: Vec<&str> = store.scenario_keys().collect();
    assert_eq!(scenarios, vec![AUDIT_PUSH, CONSOLIDATION]);
    assert_eq!(store.default_prospect_key(), "NovaThera Labs");
    assert_eq!(store.default_scenario_key(), AUDIT_PUSH);
    assert_eq!(store.snippet_library().len(), 3);
}

#[test]
fn test_missing_data_dir_is_io_error() {
    let config = DashboardConfig::with_data_dir(data_dir().join("does-not-exist"));
    let err = DataStore::load(&config).unwrap_err();
    assert!(matches!(err, DashboardError::Io { .. }), "got {:?}", err);
}

// =========================================================================
// Rendering every prospect
// =========================================================================

#[test]
fn test_every_prospect_renders_stat_grid_in_order() {
    let store = load_store();

    for key in store.prospect_keys() {
        let view = render_dashboard(&store, Some(key), None).expect("render");
        assert_eq!(view.prospect, key);

        let capsule = view.region(RegionId::CompanyMeta);
        assert_eq!(
            capsule.texts_of("stat-label"),
            vec!["Industry", "HQ", "Revenue", "Stage"],
            "Stat grid order for {}",
            key
        );
    }
}

#[test]
fn test_tech_stack_cards_follow_source_lanes() {
    let store = load_store();

    for prospect in source_prospects() {
        let name = prospect["companyName"].as_str().unwrap();
        let view = render_dashboard(&store, Some(name), None).unwrap();

        let expected: Vec<String> = prospect["techStack"]
            .as_object()
            .unwrap()
            .keys()
            .map(|lane| to_title_case(lane))
            .collect();
        let labels = view.region(RegionId::TechStack).texts_of("tech-label");
        assert_eq!(labels, expected, "Tech lanes for {}", name);
    }

    let view = render_dashboard(&store, Some("NovaThera Labs"), None).unwrap();
    let labels = view.region(RegionId::TechStack).texts_of("tech-label");
    assert_eq!(labels[0], "Backend");
    assert_eq!(labels[1], "Data_Lake");
}

#[test]
fn test_empty_competitive_notes_render_empty_list() {
    let store = load_store();
    let view = render_dashboard(&store, Some("Harbor Freight Analytics"), None).unwrap();

    let competition = view.region(RegionId::Competition);
    let lists = competition.find_all("bullets");
    assert_eq!(lists.len(), 1);
    assert!(lists[0].children().is_empty());

    let html = HtmlFormatter::format(competition);
    assert!(html.contains("<ul class=\"bullets\"></ul>"));
}

// =========================================================================
// Scenarios and snippets
// =========================================================================

#[test]
fn test_scenario_snippets_override_library() {
    let store = load_store();

    let audit = render_dashboard(&store, None, Some(AUDIT_PUSH)).unwrap();
    let titles = audit.region(RegionId::SnippetFeed).texts_of("snippet-title");
    assert_eq!(titles, vec!["Audit window checklist", "Lab system onboarding"]);
    let sources = audit.region(RegionId::SnippetFeed).texts_of("snippet-source");
    assert_eq!(sources, vec!["AICPA guidance summary", "docs/integrations/lab-systems.md"]);

    let consolidation = render_dashboard(&store, None, Some(CONSOLIDATION)).unwrap();
    let feed = consolidation.region(RegionId::SnippetFeed);
    assert_eq!(feed.texts_of("snippet-title").len(), 3, "Falls back to the shared library");
    assert_eq!(
        feed.texts_of("snippet-body")[0],
        "Connect cloud, identity and ticketing once; evidence for access reviews and change management is collected daily."
    );
    assert_eq!(feed.texts_of("snippet-source")[0], "docs/playbooks/soc2-automation.md");
}

#[test]
fn test_talk_track_overlay_only_when_present() {
    let store = load_store();
    let view = render_dashboard(&store, None, Some(AUDIT_PUSH)).unwrap();

    let html = HtmlFormatter::format(view.region(RegionId::Playbook));
    assert_eq!(html.matches("Overlay: ").count(), 1);
    assert!(html.contains("Overlay: Evidence timeline graphic"));
}

#[test]
fn test_call_studio_lists_script_and_cues() {
    let store = load_store();
    let view = render_dashboard(&store, None, Some(AUDIT_PUSH)).unwrap();

    let studio = view.region(RegionId::CallStudio);
    assert_eq!(studio.texts_of("script-timestamp"), vec!["00:00", "02:30", "08:00"]);

    let html = HtmlFormatter::format(studio);
    assert!(html.contains("02:30: Show evidence timeline overlay"));
    assert!(html.contains("If the demo stalls"));
}

// =========================================================================
// Selection fallback
// =========================================================================

#[test]
fn test_unknown_keys_fall_back_to_defaults() {
    let store = load_store();

    let default_view = render_dashboard(&store, None, None).unwrap();
    let unknown = render_dashboard(&store, Some("Nobody Inc"), Some("No Such Scenario")).unwrap();
    assert_eq!(unknown, default_view);

    // Rendering the fallback twice yields the same regions
    let again = render_dashboard(&store, Some("Nobody Inc"), Some("No Such Scenario")).unwrap();
    assert_eq!(again, unknown);
}

#[test]
fn test_session_rerenders_all_regions() {
    let store = load_store();
    let mut session = DashboardSession::new(&store);

    let first = session.render(&store).unwrap();
    let switched = session.select_prospect(&store, "Federal Pulse").unwrap();
    assert_eq!(switched.regions().len(), 10);
    assert_ne!(
        switched.region(RegionId::CompanyMeta),
        first.region(RegionId::CompanyMeta)
    );
    assert_eq!(
        switched.region(RegionId::IntelBrief),
        first.region(RegionId::IntelBrief),
        "Scenario regions unchanged by a prospect switch"
    );

    let rescened = session.select_scenario(&store, CONSOLIDATION).unwrap();
    assert_eq!(rescened.prospect, "Federal Pulse");
    assert_eq!(rescened.scenario, CONSOLIDATION);
}

// =========================================================================
// Static export
// =========================================================================

#[test]
fn test_static_bundle_embeds_every_prospect_verbatim() {
    let store = load_store();
    let bundle = render_static_bundle(&store).expect("Failed to render bundle");

    println!("\n================================================================================");
    println!("STATIC BUNDLE: {} bytes", bundle.len());
    println!("================================================================================\n");

    let embedded = embedded_prospects(&bundle).expect("Embedded prospect array");
    assert_eq!(embedded, source_prospects());
    assert_eq!(embedded[0]["crmOwner"], "Priya Shah", "Extra fields survive the export");

    for key in store.prospect_keys() {
        assert!(bundle.contains(&format!("<option value=\"{}\"", key)));
    }
    for region in RegionId::ALL {
        assert!(
            bundle.contains(&format!("id=\"{}\"", region.dom_id())),
            "Missing region {}",
            region.dom_id()
        );
    }
}
