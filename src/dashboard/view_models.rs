//! View Models for the dashboard
//!
//! Presentation fragments produced by the builders. A fragment is an ordered tree of
//! `{kind, class, text | children}` nodes; the HTML formatter and the JSON API both
//! consume it unchanged.

use serde::Serialize;

/// Markup role of a fragment node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FragmentKind {
    Block,
    Paragraph,
    Span,
    List,
    Item,
}

impl FragmentKind {
    pub fn tag(&self) -> &'static str {
        match self {
            FragmentKind::Block => "div",
            FragmentKind::Paragraph => "p",
            FragmentKind::Span => "span",
            FragmentKind::List => "ul",
            FragmentKind::Item => "li",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FragmentBody {
    Text(String),
    Children(Vec<Fragment>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fragment {
    pub kind: FragmentKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<&'static str>,
    pub body: FragmentBody,
}

impl Fragment {
    pub fn text(kind: FragmentKind, class: &'static str, text: impl Into<String>) -> Self {
        Self {
            kind,
            class: Some(class),
            body: FragmentBody::Text(text.into()),
        }
    }

    pub fn plain(kind: FragmentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            class: None,
            body: FragmentBody::Text(text.into()),
        }
    }

    pub fn node(kind: FragmentKind, class: &'static str, children: Vec<Fragment>) -> Self {
        Self {
            kind,
            class: Some(class),
            body: FragmentBody::Children(children),
        }
    }

    pub fn group(kind: FragmentKind, children: Vec<Fragment>) -> Self {
        Self {
            kind,
            class: None,
            body: FragmentBody::Children(children),
        }
    }

    pub fn children(&self) -> &[Fragment] {
        match &self.body {
            FragmentBody::Children(children) => children,
            FragmentBody::Text(_) => &[],
        }
    }

    pub fn text_content(&self) -> Option<&str> {
        match &self.body {
            FragmentBody::Text(text) => Some(text),
            FragmentBody::Children(_) => None,
        }
    }

    /// Depth-first search for every node carrying `class`.
    pub fn find_all(&self, class: &str) -> Vec<&Fragment> {
        let mut found = Vec::new();
        self.collect_class(class, &mut found);
        found
    }

    fn collect_class<'a>(&'a self, class: &str, found: &mut Vec<&'a Fragment>) {
        if self.class == Some(class) {
            found.push(self);
        }
        for child in self.children() {
            child.collect_class(class, found);
        }
    }

    /// Text of every node carrying `class`, in document order.
    pub fn texts_of(&self, class: &str) -> Vec<&str> {
        self.find_all(class)
            .into_iter()
            .filter_map(|f| f.text_content())
            .collect()
    }
}

// ============================================================================
// Regions
// ============================================================================

/// The ten display regions, in layout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegionId {
    CompanyMeta,
    Personas,
    TechStack,
    Challenges,
    Triggers,
    Competition,
    SnippetFeed,
    IntelBrief,
    Playbook,
    CallStudio,
}

impl RegionId {
    pub const ALL: [RegionId; 10] = [
        RegionId::CompanyMeta,
        RegionId::Personas,
        RegionId::TechStack,
        RegionId::Challenges,
        RegionId::Triggers,
        RegionId::Competition,
        RegionId::SnippetFeed,
        RegionId::IntelBrief,
        RegionId::Playbook,
        RegionId::CallStudio,
    ];

    /// DOM id of the region container.
    pub fn dom_id(&self) -> &'static str {
        match self {
            RegionId::CompanyMeta => "company-meta",
            RegionId::Personas => "personas",
            RegionId::TechStack => "tech-stack",
            RegionId::Challenges => "challenges",
            RegionId::Triggers => "triggers",
            RegionId::Competition => "competition",
            RegionId::SnippetFeed => "snippet-feed",
            RegionId::IntelBrief => "intel-brief",
            RegionId::Playbook => "playbook",
            RegionId::CallStudio => "call-studio",
        }
    }

    /// Left column holds the prospect capsule and snippets, right column the scenario.
    pub fn in_left_column(&self) -> bool {
        !matches!(
            self,
            RegionId::IntelBrief | RegionId::Playbook | RegionId::CallStudio
        )
    }
}

/// Regions that depend only on the selected prospect.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProspectRegions {
    pub company_meta: Fragment,
    pub personas: Fragment,
    pub tech_stack: Fragment,
    pub challenges: Fragment,
    pub triggers: Fragment,
    pub competition: Fragment,
}

impl ProspectRegions {
    pub fn entries(&self) -> [(RegionId, &Fragment); 6] {
        [
            (RegionId::CompanyMeta, &self.company_meta),
            (RegionId::Personas, &self.personas),
            (RegionId::TechStack, &self.tech_stack),
            (RegionId::Challenges, &self.challenges),
            (RegionId::Triggers, &self.triggers),
            (RegionId::Competition, &self.competition),
        ]
    }
}

/// Regions that depend only on the selected scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioRegions {
    pub snippet_feed: Fragment,
    pub intel_brief: Fragment,
    pub playbook: Fragment,
    pub call_studio: Fragment,
}

impl ScenarioRegions {
    pub fn entries(&self) -> [(RegionId, &Fragment); 4] {
        [
            (RegionId::SnippetFeed, &self.snippet_feed),
            (RegionId::IntelBrief, &self.intel_brief),
            (RegionId::Playbook, &self.playbook),
            (RegionId::CallStudio, &self.call_studio),
        ]
    }
}

/// Full render for one (prospect, scenario) selection: always all ten regions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub prospect: String,
    pub scenario: String,
    pub prospect_regions: ProspectRegions,
    pub scenario_regions: ScenarioRegions,
}

impl DashboardView {
    /// All ten regions in layout order.
    pub fn regions(&self) -> Vec<(RegionId, &Fragment)> {
        let mut regions: Vec<(RegionId, &Fragment)> =
            self.prospect_regions.entries().into_iter().collect();
        regions.extend(self.scenario_regions.entries());
        regions
    }

    pub fn region(&self, id: RegionId) -> &Fragment {
        match id {
            RegionId::CompanyMeta => &self.prospect_regions.company_meta,
            RegionId::Personas => &self.prospect_regions.personas,
            RegionId::TechStack => &self.prospect_regions.tech_stack,
            RegionId::Challenges => &self.prospect_regions.challenges,
            RegionId::Triggers => &self.prospect_regions.triggers,
            RegionId::Competition => &self.prospect_regions.competition,
            RegionId::SnippetFeed => &self.scenario_regions.snippet_feed,
            RegionId::IntelBrief => &self.scenario_regions.intel_brief,
            RegionId::Playbook => &self.scenario_regions.playbook,
            RegionId::CallStudio => &self.scenario_regions.call_studio,
        }
    }
}
