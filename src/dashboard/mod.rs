//! Dashboard View Module
//!
//! Turns prospect and scenario records into the ten display regions.
//!
//! ## Regions
//! Prospect side: company-meta, personas, tech-stack, challenges, triggers, competition
//! Scenario side: snippet-feed, intel-brief, playbook, call-studio

pub mod types;
pub mod view_models;
pub mod view_builder;
pub mod generator;

pub use generator::{prospect_regions, render_dashboard, scenario_regions, DashboardSession};
pub use types::{KnowledgeSnippet, Persona, Prospect, Scenario};
pub use view_models::{DashboardView, Fragment, FragmentKind, RegionId};
