//! Catalog persistence abstractions.

pub mod in_memory;
pub mod json_file;

pub use in_memory::InMemoryCatalogStore;
pub use json_file::JsonFileStore;

use std::path::{Path, PathBuf};

use pricelist_products::Catalog;

/// Loads and saves whole catalogs, addressed by data file name.
pub trait CatalogStore: Send + Sync {
    /// Load the catalog stored under `file`. A missing file is an empty catalog.
    fn load(&self, file: &Path) -> Result<Catalog, StoreError>;

    /// Persist `catalog` under `file`, returning where it ended up.
    fn save(&self, file: &Path, catalog: &Catalog) -> Result<PathBuf, StoreError>;
}

/// Catalog store error.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to parse product data in {}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to serialize product data for {}", .path.display())]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid data file name: {}", .0.display())]
    InvalidFileName(PathBuf),
    #[error("environment error: {0}")]
    Environment(String),
}
