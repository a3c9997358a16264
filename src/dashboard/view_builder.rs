//! View Builder - Converts dashboard records to view models
//!
//! Pure functions from typed records to `Fragment` trees. Both the live server and the
//! static exporter render through these; nothing here touches the store.

use crate::dashboard::types::{
    opt_text, value_text, CallStudio, CtaBlock, Cue, IntelBrief, KnowledgeSnippet, Persona,
    Playbook, Prospect, ScriptRow, Signal, TalkTrack, TechStack,
};
use crate::dashboard::view_models::{Fragment, FragmentKind as K};

// ============================================================================
// Primitive builders
// ============================================================================

/// Company capsule: Industry, HQ, Revenue, Stage, always in that order.
pub fn stat_grid(prospect: &Prospect) -> Fragment {
    let stats = [
        ("Industry", &prospect.industry),
        ("HQ", &prospect.headquarters),
        ("Revenue", &prospect.annual_revenue),
        ("Stage", &prospect.growth_stage),
    ];

    Fragment::node(
        K::Block,
        "stat-grid",
        stats
            .iter()
            .map(|(label, value)| {
                Fragment::node(
                    K::Block,
                    "stat-card",
                    vec![
                        Fragment::text(K::Block, "stat-label", *label),
                        Fragment::text(K::Block, "stat-value", value.as_str()),
                    ],
                )
            })
            .collect(),
    )
}

pub fn bullet_list<S: AsRef<str>>(items: &[S]) -> Fragment {
    Fragment::node(
        K::List,
        "bullets",
        items
            .iter()
            .map(|item| Fragment::plain(K::Item, item.as_ref()))
            .collect(),
    )
}

/// Titled bulleted list.
pub fn list_section<S: AsRef<str>>(title: &str, items: &[S]) -> Fragment {
    Fragment::group(K::Block, vec![section_title(title), bullet_list(items)])
}

pub fn persona_cards(personas: &[Persona]) -> Fragment {
    Fragment::node(
        K::Block,
        "persona-grid",
        personas
            .iter()
            .map(|person| {
                Fragment::node(
                    K::Block,
                    "persona-card",
                    vec![
                        Fragment::text(K::Block, "persona-title", person.title.as_str()),
                        Fragment::text(K::Block, "persona-name", person.name.as_str()),
                        Fragment::text(K::Paragraph, "persona-bio", person.persona_bio.as_str()),
                    ],
                )
            })
            .collect(),
    )
}

/// One card per lane, in source order, lane name title-cased.
pub fn tech_stack_cards(stack: &TechStack) -> Fragment {
    Fragment::node(
        K::Block,
        "tech-grid",
        stack
            .iter()
            .map(|(lane, value)| {
                Fragment::node(
                    K::Block,
                    "tech-card",
                    vec![
                        Fragment::text(K::Block, "tech-label", to_title_case(lane)),
                        Fragment::text(K::Block, "tech-value", value_text(value)),
                    ],
                )
            })
            .collect(),
    )
}

pub fn snippet_cards(snippets: &[KnowledgeSnippet]) -> Fragment {
    Fragment::node(
        K::Block,
        "snippet-grid",
        snippets
            .iter()
            .map(|snippet| {
                Fragment::node(
                    K::Block,
                    "snippet-card",
                    vec![
                        Fragment::text(K::Block, "snippet-title", snippet.title.as_str()),
                        Fragment::text(K::Paragraph, "snippet-body", snippet.body.as_str()),
                        Fragment::text(K::Block, "snippet-source", snippet.source.as_str()),
                    ],
                )
            })
            .collect(),
    )
}

pub fn signal_stack(signals: &[Signal]) -> Fragment {
    Fragment::node(
        K::List,
        "signal-stack",
        signals
            .iter()
            .map(|signal| {
                Fragment::group(
                    K::Item,
                    vec![
                        Fragment::text(K::Span, "chip", opt_text(&signal.label)),
                        Fragment::text(K::Span, "signal-detail", opt_text(&signal.detail)),
                    ],
                )
            })
            .collect(),
    )
}

pub fn talk_track_cards(tracks: &[TalkTrack]) -> Fragment {
    Fragment::node(
        K::Block,
        "talktrack-grid",
        tracks
            .iter()
            .map(|track| {
                let mut card = vec![
                    Fragment::text(K::Block, "talktrack-title", opt_text(&track.title)),
                    bullet_list(&track.beats),
                ];
                if let Some(overlay) = &track.overlay {
                    card.push(Fragment::text(
                        K::Block,
                        "overlay-tag",
                        format!("Overlay: {}", overlay),
                    ));
                }
                Fragment::node(K::Block, "talktrack-card", card)
            })
            .collect(),
    )
}

pub fn cta_blocks(ctas: &[CtaBlock]) -> Fragment {
    Fragment::node(
        K::Block,
        "cta-grid",
        ctas.iter()
            .map(|cta| {
                Fragment::node(
                    K::Block,
                    "cta-card",
                    vec![
                        Fragment::text(K::Block, "cta-label", opt_text(&cta.label)),
                        Fragment::text(K::Paragraph, "cta-copy", opt_text(&cta.microcopy)),
                        Fragment::text(K::Block, "cta-asset", opt_text(&cta.asset)),
                    ],
                )
            })
            .collect(),
    )
}

/// Host script as a three-column row table.
pub fn host_script_table(script: &[ScriptRow]) -> Fragment {
    Fragment::node(
        K::Block,
        "script-table",
        script
            .iter()
            .map(|row| {
                Fragment::node(
                    K::Block,
                    "script-row",
                    vec![
                        Fragment::text(K::Block, "script-timestamp", opt_text(&row.timestamp)),
                        Fragment::text(K::Block, "script-copy", opt_text(&row.copy)),
                        Fragment::text(K::Block, "script-delivery", opt_text(&row.delivery)),
                    ],
                )
            })
            .collect(),
    )
}

pub fn cue_sheet(cues: &[Cue]) -> Fragment {
    let lines: Vec<String> = cues
        .iter()
        .map(|cue| format!("{}: {}", opt_text(&cue.time), opt_text(&cue.action)))
        .collect();
    bullet_list(&lines)
}

// ============================================================================
// Region composers
// ============================================================================

fn section_title(title: &str) -> Fragment {
    Fragment::text(K::Block, "section-title", title)
}

fn subheading(title: &str) -> Fragment {
    Fragment::text(K::Block, "subheading", title)
}

fn titled(title: &str, body: Fragment) -> Fragment {
    Fragment::group(K::Block, vec![section_title(title), body])
}

pub fn company_capsule(prospect: &Prospect) -> Fragment {
    titled("Company Capsule", stat_grid(prospect))
}

pub fn personas_section(prospect: &Prospect) -> Fragment {
    titled("Personas", persona_cards(&prospect.personas))
}

pub fn tech_stack_section(prospect: &Prospect) -> Fragment {
    titled("Tech Stack", tech_stack_cards(&prospect.tech_stack))
}

pub fn snippet_feed(snippets: &[KnowledgeSnippet]) -> Fragment {
    titled("Knowledge Snippets", snippet_cards(snippets))
}

pub fn intel_brief(intel: &IntelBrief) -> Fragment {
    Fragment::group(
        K::Block,
        vec![
            section_title("Intel Scout"),
            Fragment::text(K::Block, "intel-headline", opt_text(&intel.headline)),
            Fragment::text(K::Paragraph, "intel-why", opt_text(&intel.why_now)),
            subheading("Signal Stack"),
            signal_stack(&intel.signal_stack),
            subheading("Risks"),
            bullet_list(&intel.risk_flags),
            subheading("Gaps"),
            bullet_list(&intel.gaps),
        ],
    )
}

pub fn playbook(playbook: &Playbook) -> Fragment {
    Fragment::group(
        K::Block,
        vec![
            section_title("Playbook Crafter"),
            Fragment::text(K::Paragraph, "intel-why", opt_text(&playbook.opening_angle)),
            subheading("Talk Tracks"),
            talk_track_cards(&playbook.talk_tracks),
            subheading("CTA Blocks"),
            cta_blocks(&playbook.cta_blocks),
            subheading("Producer Notes"),
            Fragment::text(K::Paragraph, "producer-notes", opt_text(&playbook.producer_notes)),
        ],
    )
}

pub fn call_studio(call: &CallStudio) -> Fragment {
    Fragment::group(
        K::Block,
        vec![
            section_title("Call Studio"),
            subheading("Host Script"),
            host_script_table(&call.host_script),
            subheading("Cue Sheet"),
            cue_sheet(&call.cue_sheet),
            subheading("Safety Checks"),
            bullet_list(&call.safety_checks),
            subheading("Fallback"),
            Fragment::text(K::Paragraph, "fallback-line", opt_text(&call.fallback_line)),
        ],
    )
}

/// Word-initial capitalisation: first letter of each alphabetic run upper-cased, the
/// rest lower-cased (`data_lake` -> `Data_Lake`).
pub fn to_title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}
