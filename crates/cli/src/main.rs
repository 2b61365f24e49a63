use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use pricelist_cli::{Cli, execute, normalize_args};
use pricelist_infra::{JsonFileStore, StoreConfig};

fn main() -> ExitCode {
    pricelist_observability::init();

    // Usage errors exit here with clap's status code, before any file IO.
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = StoreConfig::from_env().context("failed to resolve storage locations")?;
    tracing::debug!(
        working_dir = %config.working_dir.display(),
        home_dir = %config.home_dir.display(),
        "storage configured"
    );

    let store = JsonFileStore::new(config);
    let mut out = std::io::stdout().lock();
    execute(cli.command, &store, &mut out)?;
    Ok(())
}
