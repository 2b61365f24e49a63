//! Infrastructure layer: storage configuration and catalog persistence.

pub mod config;
pub mod store;

pub use config::StoreConfig;
pub use store::{CatalogStore, InMemoryCatalogStore, JsonFileStore, StoreError};
