//! Berth lease contract generator
//!
//! Command line front end: reads a contract record, fills the templates in
//! and writes the contract HTML, ready for the browser's print-to-PDF.

mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();

    // stdout may carry the contract, so logs go to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("berth-contract v{}", env!("CARGO_PKG_VERSION"));

    let ok = cli::run(args).await?;
    if !ok {
        std::process::exit(1);
    }
    Ok(())
}
