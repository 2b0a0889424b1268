//! Collaborators handed to screens
//!
//! The router owns one [`AppServices`] and passes it down; screens never
//! look collaborators up globally.

use app_core::{DatabaseHelper, InMemoryLibrary, MessagesManager, QuotesManager};
use app_platform::{AdPresenter, NoopAdPresenter};
use media_processing::{AssetCatalog, MemoryAssets};
use std::sync::Arc;

/// Shared collaborators
#[derive(Clone)]
pub struct AppServices {
    /// Ad SDK
    pub ads: Arc<dyn AdPresenter>,
    /// Bundled image assets
    pub assets: Arc<dyn AssetCatalog>,
    /// Settings store
    pub database: Arc<dyn DatabaseHelper>,
    /// Message content
    pub messages: Arc<dyn MessagesManager>,
    /// Quote image content
    pub quotes: Arc<dyn QuotesManager>,
}

impl AppServices {
    /// Services backed by one in-memory library and no ads
    pub fn in_memory(library: InMemoryLibrary, assets: MemoryAssets) -> Self {
        let library = Arc::new(library);
        Self {
            ads: Arc::new(NoopAdPresenter),
            assets: Arc::new(assets),
            database: library.clone(),
            messages: library.clone(),
            quotes: library,
        }
    }

    /// Replace the ad presenter
    pub fn with_ads(mut self, ads: Arc<dyn AdPresenter>) -> Self {
        self.ads = ads;
        self
    }

    /// Replace the asset catalog
    pub fn with_assets(mut self, assets: Arc<dyn AssetCatalog>) -> Self {
        self.assets = assets;
        self
    }
}

impl std::fmt::Debug for AppServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppServices").finish_non_exhaustive()
    }
}
