//! Love Quotes launcher
//!
//! Loads the configuration, wires the collaborators, and drives the router
//! through launch: the ad SDK starts, the home screen renders, and the app
//! becomes active.
//!
//! Usage: `love-quotes [config.json]`

use anyhow::{Context, Result};
use app_core::InMemoryLibrary;
use app_platform::ScenePhase;
use app_state::AppConfig;
use app_ui::{AppServices, NavigationRouter};
use media_processing::{DirectoryAssets, MemoryAssets};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "love-quotes.json";

fn main() -> Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    let config = AppConfig::load_or_default(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;

    init_tracing(&config.log_filter);

    let assets = DirectoryAssets::new(config.asset_directory.clone());
    tracing::info!(
        config = %config_path.display(),
        assets = %assets.root().display(),
        "starting love quotes"
    );

    let services = AppServices::in_memory(InMemoryLibrary::new(), MemoryAssets::new())
        .with_assets(Arc::new(assets));

    let mut router = NavigationRouter::new(services, &config);

    let rendered = router.render();
    tracing::info!(
        screen = rendered.screen.title(),
        ads = rendered.ads_enabled,
        category = %rendered.selection.category_name,
        "rendered initial screen"
    );

    if router.on_scene_phase(ScenePhase::Active) {
        tracing::info!("app-open ad requested");
    }

    Ok(())
}

fn init_tracing(fallback: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
