// Page handlers for HTML rendering with Askama

use askama::Template;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Response};
use axum_htmx::{HxHistoryRestoreRequest, HxRequest};
use serde::Deserialize;

use crate::api_server::{AppError, AppState};
use crate::dashboard::generator::DashboardSession;
use crate::formatters::page::{
    oob_regions, region_columns, select_options, PAGE_SUBTITLE, PAGE_TITLE,
};
use crate::formatters::{RegionView, SelectOption, STYLESHEET};

/// Query string of `/` and `/api/dashboard`. Missing or unknown keys fall back to defaults.
#[derive(Debug, Default, Deserialize)]
pub struct Selection {
    pub prospect: Option<String>,
    pub scenario: Option<String>,
}

// ============================================================================
// Dashboard Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/dashboard.html")]
pub struct DashboardTemplate {
    pub title: String,
    pub subtitle: String,
    pub stylesheet: &'static str,
    pub prospect_options: Vec<SelectOption>,
    pub scenario_options: Vec<SelectOption>,
    pub left_regions: Vec<RegionView>,
    pub right_regions: Vec<RegionView>,
}

pub async fn dashboard_page(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
    HxHistoryRestoreRequest(is_history_restore): HxHistoryRestoreRequest,
    Query(selection): Query<Selection>,
) -> Result<Response, AppError> {
    let store = &state.store;
    let session = DashboardSession::with_selection(
        store,
        selection.prospect.as_deref(),
        selection.scenario.as_deref(),
    );
    let view = session.render(store)?;

    // Selector change: swap the ten regions in place, leave the shell alone.
    // History restore swaps into <body> without OOB processing, so it needs the full page.
    if is_htmx && !is_history_restore {
        return Ok(Html(oob_regions(&view)).into_response());
    }

    let (left_regions, right_regions) = region_columns(&view);
    let template = DashboardTemplate {
        title: PAGE_TITLE.to_string(),
        subtitle: PAGE_SUBTITLE.to_string(),
        stylesheet: STYLESHEET,
        prospect_options: select_options(store.prospect_keys(), session.prospect()),
        scenario_options: select_options(store.scenario_keys(), session.scenario()),
        left_regions,
        right_regions,
    };
    Ok(template.into_response())
}
