//! JSON file catalog.
//!
//! Reads a catalog export: a JSON array of clothing items, each with at
//! least an `id` (UUID) and a `category`.
//!
//! ```json
//! [
//!   { "id": "6f1c…", "category": "top", "name": "Linen shirt" },
//!   { "id": "0b9e…", "category": "pants", "tags": ["summer"] }
//! ]
//! ```
//!
//! The file is read again on every fetch, so edits show up on the next
//! refresh.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;
use wardrobe_core::ClothingItem;

use crate::application::compose_outfit::{CatalogError, CatalogSource};

/// Parses a catalog export.
///
/// # Errors
///
/// Returns [`CatalogError::Malformed`] if `json` is not an array of items.
pub fn parse_catalog(json: &str) -> Result<Vec<ClothingItem>, CatalogError> {
    serde_json::from_str(json).map_err(|e| CatalogError::Malformed(e.to_string()))
}

/// [`CatalogSource`] backed by a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for JsonFileCatalog {
    async fn fetch_items(&self) -> Result<Vec<ClothingItem>, CatalogError> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            CatalogError::Unavailable(format!("{}: {e}", self.path.display()))
        })?;
        let items = parse_catalog(&content)?;
        debug!(path = %self.path.display(), items = items.len(), "catalog file read");
        Ok(items)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
