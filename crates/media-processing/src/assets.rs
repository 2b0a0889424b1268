//! Bundled image assets
//!
//! Selection strings that are not inline payloads name an asset shipped
//! with the app. Catalogs map such a name to the encoded bytes.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Extensions tried, in order, when a name has none
const CANDIDATE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Lookup of bundled assets by name
pub trait AssetCatalog: Send + Sync {
    /// Encoded bytes of the named asset, if bundled
    fn load(&self, name: &str) -> Option<Vec<u8>>;
}

/// Assets stored as files under a root directory
#[derive(Debug, Clone)]
pub struct DirectoryAssets {
    root: PathBuf,
}

impl DirectoryAssets {
    /// Create a catalog rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetCatalog for DirectoryAssets {
    fn load(&self, name: &str) -> Option<Vec<u8>> {
        if !is_plain_name(name) {
            return None;
        }

        let exact = std::iter::once(self.root.join(name));
        let with_ext = CANDIDATE_EXTENSIONS
            .iter()
            .map(|ext| self.root.join(format!("{}.{}", name, ext)));

        for path in exact.chain(with_ext) {
            if path.is_file() {
                match std::fs::read(&path) {
                    Ok(bytes) => return Some(bytes),
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "failed to read asset");
                        return None;
                    }
                }
            }
        }

        tracing::debug!(name, root = %self.root.display(), "asset not found");
        None
    }
}

/// Assets held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryAssets {
    assets: HashMap<String, Vec<u8>>,
}

impl MemoryAssets {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an asset
    pub fn with_asset(mut self, name: &str, bytes: Vec<u8>) -> Self {
        self.insert(name, bytes);
        self
    }

    /// Add or replace an asset
    pub fn insert(&mut self, name: &str, bytes: Vec<u8>) {
        self.assets.insert(name.to_string(), bytes);
    }

    /// Number of assets
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl AssetCatalog for MemoryAssets {
    fn load(&self, name: &str) -> Option<Vec<u8>> {
        self.assets.get(name).cloned()
    }
}

/// Asset names are single path components
fn is_plain_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}
