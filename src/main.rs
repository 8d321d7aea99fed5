//! Feed generator — binary entrypoint.
//! Loads config, runs one scrape pass over all sources and writes the RSS file.
//! Meant to be invoked periodically by cron or similar.

use toulouse_experiences_feed::ingest::config::load_config_default;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev so RUST_LOG can live there; no-op otherwise.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cfg = load_config_default()?;
    tracing::info!(
        sources = cfg.sources.len(),
        output = %cfg.output_path.display(),
        "starting feed run"
    );

    let report = toulouse_experiences_feed::run(&cfg).await?;
    if report.fetched == 0 && !cfg.sources.is_empty() {
        tracing::warn!("every source failed; wrote an empty feed");
    }
    Ok(())
}
