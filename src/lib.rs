//! DealCast Control Surface
//!
//! Read-only sales-intelligence dashboard. Prospect profiles and call-prep scenarios are
//! loaded from JSON once, turned into fragment trees per region, and rendered either by
//! the live Axum server or into a single static HTML bundle.
//!
//! - `data`: loading, validation and key lookup
//! - `dashboard`: typed records, fragment view models and the region builders
//! - `formatters`: fragment → HTML, page shell pieces, stylesheet
//! - `export`: the static bundle
//! - `api_server` / `web`: the interactive server (feature `server`)

pub mod config;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod export;
pub mod formatters;

#[cfg(feature = "server")]
pub mod api_server;
#[cfg(feature = "server")]
pub mod web;

// Re-export commonly used types
pub use config::DashboardConfig;
pub use dashboard::{render_dashboard, DashboardSession, DashboardView, RegionId};
pub use data::DataStore;
pub use error::{DashboardError, Result};
pub use export::{export_static_bundle, render_static_bundle};

#[cfg(feature = "server")]
pub use api_server::{create_router, AppState};
