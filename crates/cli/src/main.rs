//! `stockpile` entry point.

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use stockpile_cli::{Cli, Shell};
use stockpile_infra::{InventoryStore, JsonFileStorage};
use stockpile_observability::LogTarget;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = stockpile_observability::init(LogTarget::from_option(cli.log_file.clone())) {
        eprintln!("warning: {err}; logging to stderr instead");
        let _ = stockpile_observability::init(LogTarget::Stderr);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "stockpile stopped");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    tracing::info!(file = %cli.file.display(), "starting stockpile");

    let storage = JsonFileStorage::new(&cli.file);
    let mut store = InventoryStore::initialize(storage)
        .with_context(|| format!("could not load inventory from {}", cli.file.display()))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock());
    shell
        .run(&mut store)
        .context("inventory shell stopped")?;

    tracing::info!(items = store.inventory().len(), "stockpile exited");
    Ok(())
}
