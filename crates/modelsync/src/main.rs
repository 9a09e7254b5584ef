mod catalog;
mod cli;
mod document;
mod ident;
mod report;
mod resolver;

use anyhow::Context as _;
use clap::Parser as _;
use env_flags::env_flags;

use crate::cli::Cli;
use crate::report::Reporter;

fn init_tracing() {
    env_flags! {
        /// Tracing filter, e.g. "info", "debug", or targets format.
        RUST_LOG: &str = "info";
        /// Compact single-line formatting for logs (ignored if TRACING_JSON=true)
        TRACING_COMPACT: bool = true;
        /// JSON formatting for logs
        TRACING_JSON: bool = false;
    }

    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, prelude::*};

    let filter =
        EnvFilter::try_new((*RUST_LOG).to_string()).unwrap_or_else(|_| EnvFilter::new("info"));

    // Always write logs to stderr; stdout carries the report stream.
    let base = tracing_subscriber::fmt::layer()
        .with_file(false)
        .with_line_number(false)
        .with_target(true)
        .with_ansi(true)
        .with_writer(std::io::stderr);
    let reg = tracing_subscriber::registry().with(filter);
    if *TRACING_JSON {
        let subscriber = reg.with(base.json());
        if let Err(e) = subscriber.try_init() {
            tracing::debug!("tracing already set: {:?}", e);
        }
    } else if *TRACING_COMPACT {
        let subscriber = reg.with(base.compact());
        if let Err(e) = subscriber.try_init() {
            tracing::debug!("tracing already set: {:?}", e);
        }
    } else {
        let subscriber = reg.with(base);
        if let Err(e) = subscriber.try_init() {
            tracing::debug!("tracing already set: {:?}", e);
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    tracing::info!("loading configuration {}", cli.config.display());
    let mut config = document::load_config(&cli.config)?;

    tracing::info!("loading catalog export {}", cli.catalog.display());
    let lines = document::load_catalog_source(&cli.catalog)?;
    if lines.is_empty() {
        anyhow::bail!("catalog export {} is empty", cli.catalog.display());
    }
    tracing::info!("loaded {} catalog lines", lines.len());

    let catalog = catalog::parse_catalog(&lines);
    let tables = match cli.tables.as_deref() {
        Some(path) => resolver::tables::load_from_file(path)
            .with_context(|| format!("loading tables {}", path.display()))?,
        None => resolver::tables::builtin().clone(),
    };

    let reporter = Reporter::new(cli.apply);
    reporter.catalog_summary(&catalog);

    let stats = document::refresh_document(&mut config, &catalog, &tables, &reporter);
    reporter.summary(&stats);

    if cli.apply {
        document::save_config(&cli.config, &config)?;
        tracing::info!("configuration written to {}", cli.config.display());
    } else {
        tracing::info!("dry run; no changes written");
    }
    Ok(())
}
