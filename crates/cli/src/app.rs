//! Command execution.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;

use pricelist_infra::CatalogStore;
use pricelist_products::ProductCreate;

use crate::args::Command;

/// What a command did.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A catalog (or selection) was printed; nothing was saved.
    Printed { records: usize },
    /// The catalog changed and was saved to this location.
    Saved(PathBuf),
}

/// Run one command against `store`, printing any output to `out`.
///
/// The catalog is loaded first, even for `add`, so a malformed data file
/// aborts before any change is attempted. Only a mutating command saves.
pub fn execute<S, W>(command: Command, store: &S, out: &mut W) -> anyhow::Result<Outcome>
where
    S: CatalogStore + ?Sized,
    W: Write,
{
    let file = command.filename().to_path_buf();
    let catalog = store
        .load(&file)
        .with_context(|| format!("failed to load products from {}", file.display()))?;

    match command {
        Command::Add(args) => {
            let catalog = catalog.append(ProductCreate::new(args.name, args.price, args.shop))?;
            let saved = store
                .save(&file, &catalog)
                .with_context(|| format!("failed to save products to {}", file.display()))?;
            tracing::debug!(records = catalog.len(), path = %saved.display(), "product added");
            Ok(Outcome::Saved(saved))
        }
        Command::Display(_) => {
            write!(out, "{catalog}").context("failed to write output")?;
            Ok(Outcome::Printed { records: catalog.len() })
        }
        Command::Select(args) => {
            let selected = catalog.filter_by_name(&args.select);
            tracing::debug!(query = %args.select, matches = selected.len(), "selected products");
            write!(out, "{selected}").context("failed to write output")?;
            Ok(Outcome::Printed { records: selected.len() })
        }
    }
}
