//! Typed records behind the dashboard.
//!
//! Data sources:
//! - Prospects: `prospects.json` (`prospects` array, camelCase keys)
//! - Knowledge snippets: `knowledge-snippets.json` (`documents` array) or a scenario override
//! - Scenarios: one JSON document per scenario label, snake_case keys

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Lane name → description, in source order.
pub type TechStack = Map<String, Value>;

/// Prospect company profile.
///
/// Every field is required: a prospect missing one of them fails to render. Text fields
/// take any JSON scalar and keep its display text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prospect {
    #[serde(deserialize_with = "scalar_text")]
    pub company_name: String,
    #[serde(deserialize_with = "scalar_text")]
    pub industry: String,
    #[serde(deserialize_with = "scalar_text")]
    pub headquarters: String,
    #[serde(deserialize_with = "scalar_text")]
    pub annual_revenue: String,
    #[serde(deserialize_with = "scalar_text")]
    pub growth_stage: String,
    pub tech_stack: TechStack,
    pub personas: Vec<Persona>,
    #[serde(deserialize_with = "scalar_list")]
    pub challenges: Vec<String>,
    #[serde(deserialize_with = "scalar_list")]
    pub buying_triggers: Vec<String>,
    #[serde(deserialize_with = "scalar_list")]
    pub competitive_notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Persona {
    #[serde(deserialize_with = "scalar_text")]
    pub name: String,
    #[serde(deserialize_with = "scalar_text")]
    pub title: String,
    #[serde(deserialize_with = "scalar_text")]
    pub persona_bio: String,
}

/// Knowledge snippet in canonical shape.
///
/// Library documents carry `snippet`/`path`, scenario overrides carry `excerpt`/`source`;
/// both resolve here at load time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "SnippetDocument")]
pub struct KnowledgeSnippet {
    pub title: String,
    pub body: String,
    pub source: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SnippetDocument {
    #[serde(deserialize_with = "opt_scalar_text")]
    title: Option<String>,
    #[serde(deserialize_with = "opt_scalar_text")]
    excerpt: Option<String>,
    #[serde(deserialize_with = "opt_scalar_text")]
    snippet: Option<String>,
    #[serde(deserialize_with = "opt_scalar_text")]
    source: Option<String>,
    #[serde(deserialize_with = "opt_scalar_text")]
    path: Option<String>,
}

impl From<SnippetDocument> for KnowledgeSnippet {
    fn from(doc: SnippetDocument) -> Self {
        Self {
            title: doc.title.unwrap_or_default(),
            body: first_non_empty(doc.excerpt, doc.snippet),
            source: first_non_empty(doc.source, doc.path),
        }
    }
}

fn first_non_empty(preferred: Option<String>, fallback: Option<String>) -> String {
    preferred
        .filter(|s| !s.is_empty())
        .or(fallback)
        .unwrap_or_default()
}

/// Call-prep bundle selected by scenario label. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub knowledge_snippets: Option<Vec<KnowledgeSnippet>>,
    pub intel_scout_brief: IntelBrief,
    pub playbook: Playbook,
    pub call_studio: CallStudio,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct IntelBrief {
    #[serde(deserialize_with = "opt_scalar_text")]
    pub headline: Option<String>,
    #[serde(deserialize_with = "opt_scalar_text")]
    pub why_now: Option<String>,
    pub signal_stack: Vec<Signal>,
    #[serde(deserialize_with = "scalar_list")]
    pub risk_flags: Vec<String>,
    #[serde(deserialize_with = "scalar_list")]
    pub gaps: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Signal {
    #[serde(deserialize_with = "opt_scalar_text")]
    pub label: Option<String>,
    #[serde(deserialize_with = "opt_scalar_text")]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Playbook {
    #[serde(deserialize_with = "opt_scalar_text")]
    pub opening_angle: Option<String>,
    pub talk_tracks: Vec<TalkTrack>,
    pub cta_blocks: Vec<CtaBlock>,
    #[serde(deserialize_with = "opt_scalar_text")]
    pub producer_notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TalkTrack {
    #[serde(deserialize_with = "opt_scalar_text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "scalar_list")]
    pub beats: Vec<String>,
    #[serde(deserialize_with = "opt_scalar_text")]
    pub overlay: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CtaBlock {
    #[serde(deserialize_with = "opt_scalar_text")]
    pub label: Option<String>,
    #[serde(deserialize_with = "opt_scalar_text")]
    pub microcopy: Option<String>,
    #[serde(deserialize_with = "opt_scalar_text")]
    pub asset: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CallStudio {
    pub host_script: Vec<ScriptRow>,
    pub cue_sheet: Vec<Cue>,
    #[serde(deserialize_with = "scalar_list")]
    pub safety_checks: Vec<String>,
    #[serde(deserialize_with = "opt_scalar_text")]
    pub fallback_line: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScriptRow {
    #[serde(deserialize_with = "opt_scalar_text")]
    pub timestamp: Option<String>,
    #[serde(deserialize_with = "opt_scalar_text")]
    pub copy: Option<String>,
    #[serde(deserialize_with = "opt_scalar_text")]
    pub delivery: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Cue {
    #[serde(deserialize_with = "opt_scalar_text")]
    pub time: Option<String>,
    #[serde(deserialize_with = "opt_scalar_text")]
    pub action: Option<String>,
}

/// Display text for a JSON value: strings verbatim, null empty, anything else as JSON.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Display text for an optional field.
pub fn opt_text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn scalar_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|value| value_text(&value))
}

/// `null` reads as absent, so an explicit null overlay still omits its tag.
fn opt_scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Value>::deserialize(deserializer).map(|value| value.as_ref().map(value_text))
}

fn scalar_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<Value>::deserialize(deserializer).map(|items| items.iter().map(value_text).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_prefers_excerpt_and_source() {
        let snippet: KnowledgeSnippet = serde_json::from_str(
            r#"{"title": "SOC2", "excerpt": "Audit window", "snippet": "ignored",
                "source": "Gartner", "path": "ignored.md"}"#,
        )
        .unwrap();
        assert_eq!(snippet.body, "Audit window");
        assert_eq!(snippet.source, "Gartner");
    }

    #[test]
    fn test_snippet_falls_back_to_snippet_and_path() {
        let snippet: KnowledgeSnippet = serde_json::from_str(
            r#"{"title": "Runbook", "snippet": "Rotate keys weekly", "path": "docs/runbook.md"}"#,
        )
        .unwrap();
        assert_eq!(snippet.title, "Runbook");
        assert_eq!(snippet.body, "Rotate keys weekly");
        assert_eq!(snippet.source, "docs/runbook.md");
    }

    #[test]
    fn test_snippet_empty_excerpt_falls_through() {
        let snippet: KnowledgeSnippet =
            serde_json::from_str(r#"{"excerpt": "", "snippet": "body"}"#).unwrap();
        assert_eq!(snippet.body, "body");
        assert_eq!(snippet.title, "");
        assert_eq!(snippet.source, "");
    }

    #[test]
    fn test_scenario_sections_default_when_absent() {
        let scenario: Scenario = serde_json::from_str("{}").unwrap();
        assert!(scenario.knowledge_snippets.is_none());
        assert!(scenario.intel_scout_brief.signal_stack.is_empty());
        assert!(scenario.playbook.talk_tracks.is_empty());
        assert!(scenario.call_studio.fallback_line.is_none());
    }

    #[test]
    fn test_prospect_requires_personas() {
        let result: Result<Prospect, _> = serde_json::from_str(
            r#"{"companyName": "Acme", "industry": "Retail", "headquarters": "Austin",
                "annualRevenue": "$10M", "growthStage": "Seed", "techStack": {},
                "challenges": [], "buyingTriggers": [], "competitiveNotes": []}"#,
        );
        let err = result.unwrap_err().to_string();
        assert!(err.contains("personas"), "unexpected error: {}", err);
    }

    #[test]
    fn test_prospect_accepts_numeric_firmographics() {
        let prospect: Prospect = serde_json::from_str(
            r#"{"companyName": "Acme", "industry": "Retail", "headquarters": "Austin",
                "annualRevenue": 120000000, "growthStage": 3, "techStack": {},
                "personas": [{"name": "Lee", "title": "CFO", "personaBio": null}],
                "challenges": [42], "buyingTriggers": [true], "competitiveNotes": []}"#,
        )
        .unwrap();
        assert_eq!(prospect.annual_revenue, "120000000");
        assert_eq!(prospect.growth_stage, "3");
        assert_eq!(prospect.personas[0].persona_bio, "");
        assert_eq!(prospect.challenges, vec!["42"]);
        assert_eq!(prospect.buying_triggers, vec!["true"]);
    }

    #[test]
    fn test_scenario_accepts_numeric_leaves() {
        let scenario: Scenario = serde_json::from_str(
            r#"{"intel_scout_brief": {"headline": 2024, "gaps": [1, "two"]},
                "playbook": {"talk_tracks": [{"title": "T", "beats": [], "overlay": null}]},
                "call_studio": {"host_script": [{"timestamp": 90, "copy": "Hi"}]}}"#,
        )
        .unwrap();
        assert_eq!(scenario.intel_scout_brief.headline.as_deref(), Some("2024"));
        assert_eq!(scenario.intel_scout_brief.gaps, vec!["1", "two"]);
        assert!(scenario.playbook.talk_tracks[0].overlay.is_none());
        assert_eq!(scenario.call_studio.host_script[0].timestamp.as_deref(), Some("90"));
    }

    #[test]
    fn test_value_text() {
        assert_eq!(value_text(&Value::String("Postgres".into())), "Postgres");
        assert_eq!(value_text(&Value::Null), "");
        assert_eq!(value_text(&serde_json::json!(3)), "3");
    }
}
