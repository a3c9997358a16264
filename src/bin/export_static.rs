//! Export the Static Dashboard Bundle
//!
//! Writes one self-contained HTML file with every prospect and scenario baked in.
//! Run with: cargo run --bin export_static
//!
//! Output goes to `EXPORT_PATH` (default `dist/index.html`).

use anyhow::Context;
use dealcast::{export_static_bundle, DashboardConfig, DataStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dealcast=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = DashboardConfig::from_env()?;

    let store = DataStore::load(&config)
        .with_context(|| format!("loading data from {}", config.data_dir.display()))?;

    println!(
        "Exporting {} prospects and {} scenarios...",
        store.prospect_records().len(),
        store.scenario_keys().count()
    );

    let bytes = export_static_bundle(&store, &config.export_path)?;

    println!(
        "\n✓ Static dashboard saved to: {} ({} bytes)",
        config.export_path.display(),
        bytes
    );
    Ok(())
}
