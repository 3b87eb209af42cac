//! Wiring & DI. Entry point: load config, build the catalog, run the shell.
//! No business logic here.

use dotenv::dotenv;
use hvut_site::adapters::content::{default_generators, featured_posts};
use hvut_site::adapters::ui::tui::{HeaderSettings, TuiInputPort};
use hvut_site::ports::InputPort;
use hvut_site::shared::AppConfig;
use hvut_site::usecases::{CatalogExporter, ContentAggregator};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    hvut_site::adapters::ui::init_ui();

    let cfg = match AppConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(error = %e, "config load failed, using defaults");
            AppConfig::default()
        }
    };

    // --- Catalog: built once, rejected at startup if ids collide or dangle ---
    let aggregator = ContentAggregator::new(default_generators(), featured_posts());
    let catalog = Arc::new(
        aggregator
            .build()
            .map_err(|e| anyhow::anyhow!("invalid post catalog: {}", e))?,
    );

    let export_dir = cfg.export_dir_or_default();
    info!(export_dir = %export_dir, "catalog export directory");
    let exporter = Arc::new(CatalogExporter::new(export_dir));

    let settings = HeaderSettings {
        privileged_role: cfg.privileged_role_or_default(),
        initial_path: cfg.initial_path_or_default(),
        sign_out_delay: Duration::from_millis(cfg.sign_out_delay_ms_or_default()),
        demo_identity: cfg.demo_identity(),
    };
    info!(
        privileged_role = %settings.privileged_role,
        sign_out_delay_ms = settings.sign_out_delay.as_millis() as u64,
        "header settings"
    );

    let input_port: Arc<dyn InputPort> =
        Arc::new(TuiInputPort::new(Arc::clone(&catalog), exporter, settings));

    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
