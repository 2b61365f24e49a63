//! JSON file storage for catalogs.
//!
//! Files are a pretty-printed JSON array (4-space indent, UTF-8, non-ASCII
//! kept literal). A save writes next to the working directory and then moves
//! the file into the home directory; the two steps are not atomic, so a crash
//! in between leaves the data only at the working-directory path.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use pricelist_products::Catalog;

use super::{CatalogStore, StoreError};
use crate::config::StoreConfig;

const INDENT: &[u8] = b"    ";

/// File-backed catalog store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    config: StoreConfig,
}

impl JsonFileStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
}

impl CatalogStore for JsonFileStore {
    fn load(&self, file: &Path) -> Result<Catalog, StoreError> {
        let path = self.config.working_path(file);

        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "data file not found; starting empty");
                return Ok(Catalog::new());
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        let catalog: Catalog = serde_json::from_str(&data)
            .map_err(|source| StoreError::Parse { path: path.clone(), source })?;

        tracing::debug!(path = %path.display(), records = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    fn save(&self, file: &Path, catalog: &Catalog) -> Result<PathBuf, StoreError> {
        let source_path = self.config.working_path(file);
        let target_path = self.config.home_path(file)?;

        let bytes = to_pretty_json(catalog).map_err(|source| StoreError::Serialize {
            path: source_path.clone(),
            source,
        })?;

        fs::write(&source_path, bytes).map_err(|source| StoreError::Io {
            path: source_path.clone(),
            source,
        })?;
        tracing::debug!(path = %source_path.display(), records = catalog.len(), "wrote catalog");

        relocate(&source_path, &target_path).map_err(|source| StoreError::Io {
            path: target_path.clone(),
            source,
        })?;
        tracing::info!(
            from = %source_path.display(),
            to = %target_path.display(),
            "catalog saved"
        );

        Ok(target_path)
    }
}

fn to_pretty_json(catalog: &Catalog) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    catalog.serialize(&mut ser)?;
    Ok(buf)
}

/// Move `from` to `to`, replacing any existing file.
///
/// `rename` cannot cross filesystems, so on failure fall back to copy and
/// remove. If the fallback also fails, the rename error is reported.
fn relocate(from: &Path, to: &Path) -> io::Result<()> {
    if from == to {
        return Ok(());
    }

    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(rename_err) => {
            tracing::debug!(error = %rename_err, "rename failed; falling back to copy");
            fs::copy(from, to)
                .and_then(|_| fs::remove_file(from))
                .map_err(|_| rename_err)
        }
    }
}
