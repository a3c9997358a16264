// Axum Server Module
//
// Purpose: serve the interactive dashboard (HTML + htmx partials), its JSON view of the
// same fragments, and the static bundle, all from one read-only DataStore.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use serde_json::{Map, Value};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use std::sync::Arc;

use crate::config::DashboardConfig;
use crate::dashboard::generator::DashboardSession;
use crate::data::DataStore;
use crate::error::DashboardError;
use crate::export::render_static_bundle;
use crate::web::handlers::pages::{dashboard_page, Selection};

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DataStore>,
}

impl AppState {
    pub fn new(config: &DashboardConfig) -> anyhow::Result<Self> {
        tracing::info!("Loading dashboard data from {}...", config.data_dir.display());
        let store = DataStore::load(config)?;
        Ok(Self::from_store(store))
    }

    pub fn from_store(store: DataStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Interactive page; htmx requests get only the ten regions back
        .route("/", get(dashboard_page))

        // Static bundle, same output as the export_static binary
        .route("/export", get(export_bundle))

        // JSON endpoints
        .route("/api/prospects", get(list_prospects))
        .route("/api/scenarios", get(list_scenarios))
        .route("/api/dashboard", get(get_dashboard))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn list_prospects(State(state): State<AppState>) -> Json<Value> {
    let keys: Vec<&str> = state.store.prospect_keys().collect();
    Json(serde_json::json!({
        "default": state.store.default_prospect_key(),
        "data": keys,
    }))
}

async fn list_scenarios(State(state): State<AppState>) -> Json<Value> {
    let keys: Vec<&str> = state.store.scenario_keys().collect();
    Json(serde_json::json!({
        "default": state.store.default_scenario_key(),
        "data": keys,
    }))
}

/// Fragment trees for one selection, keyed by region id.
async fn get_dashboard(
    State(state): State<AppState>,
    Query(selection): Query<Selection>,
) -> Result<Json<Value>, AppError> {
    let session = DashboardSession::with_selection(
        &state.store,
        selection.prospect.as_deref(),
        selection.scenario.as_deref(),
    );
    let view = session.render(&state.store)?;

    let mut regions = Map::new();
    for (id, fragment) in view.regions() {
        let tree = serde_json::to_value(fragment).map_err(|source| DashboardError::Serialize {
            what: format!("region {}", id.dom_id()),
            source,
        })?;
        regions.insert(id.dom_id().to_string(), tree);
    }

    Ok(Json(serde_json::json!({
        "prospect": view.prospect,
        "scenario": view.scenario,
        "regions": regions,
    })))
}

async fn export_bundle(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    Ok(Html(render_static_bundle(&state.store)?))
}

// ============================================================================
// Error Handling
// ============================================================================

/// Any failure while serving a request, a malformed prospect included. Always a 500
/// with a JSON `{"error": ...}` body.
#[derive(Debug)]
pub enum AppError {
    Internal(String),
}

impl From<DashboardError> for AppError {
    fn from(err: DashboardError) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        tracing::error!("{}", message);

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
