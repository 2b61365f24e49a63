use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use pricelist_products::Catalog;

use super::{CatalogStore, StoreError};

/// In-memory catalog store for tests/dev.
///
/// Saved catalogs stay addressable under the name they were saved with; there
/// is no home-directory relocation.
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    inner: RwLock<HashMap<PathBuf, Catalog>>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate `file` with `catalog`.
    pub fn with_catalog(self, file: impl Into<PathBuf>, catalog: Catalog) -> Self {
        if let Ok(mut map) = self.inner.write() {
            map.insert(file.into(), catalog);
        }
        self
    }

    /// Number of files currently held.
    pub fn file_count(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }
}

impl CatalogStore for InMemoryCatalogStore {
    fn load(&self, file: &Path) -> Result<Catalog, StoreError> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return Ok(Catalog::new()),
        };
        Ok(map.get(file).cloned().unwrap_or_default())
    }

    fn save(&self, file: &Path, catalog: &Catalog) -> Result<PathBuf, StoreError> {
        if let Ok(mut map) = self.inner.write() {
            map.insert(file.to_path_buf(), catalog.clone());
        }
        Ok(file.to_path_buf())
    }
}
