// src/lib.rs
// Public library surface for the binary and integration tests.

pub mod analyze;
pub mod feed;
pub mod ingest;

// ---- Re-exports for stable public API ----
pub use crate::ingest::config::FeedConfig;
pub use crate::ingest::types::{Candidate, Item, PageFetcher, Source};
pub use crate::ingest::RunReport;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::info;

use crate::ingest::fetch::HttpFetcher;

/// Run the pipeline once with an arbitrary fetcher and return the feed document.
///
/// `build_date` is stamped on the channel and on every item.
pub async fn build_document<F>(
    cfg: &FeedConfig,
    fetcher: &F,
    build_date: DateTime<Utc>,
) -> Result<(String, RunReport)>
where
    F: PageFetcher + ?Sized,
{
    let rules = cfg.rules.compile().context("compiling classification rules")?;
    let report = ingest::run_once(&cfg.sources, fetcher, &rules, cfg.max_items_per_source).await;

    if report.items.len() > cfg.max_items_total {
        tracing::debug!(
            total = report.items.len(),
            cap = cfg.max_items_total,
            "global cap drops trailing items"
        );
    }

    let doc = feed::build_feed(
        &report.items,
        &cfg.channel,
        cfg.channel_link(),
        cfg.max_items_total,
        build_date,
    );
    Ok((doc, report))
}

/// Full run: fetch over HTTP, build the feed, write it to `cfg.output_path`.
///
/// Per-source fetch failures are tolerated; only an unusable config or a failed
/// write makes this return `Err`.
pub async fn run(cfg: &FeedConfig) -> Result<RunReport> {
    let fetcher = HttpFetcher::new(&cfg.user_agent, cfg.timeout()).context("building fetcher")?;
    let (doc, report) = build_document(cfg, &fetcher, Utc::now()).await?;
    feed::sink::write_feed(&cfg.output_path, &doc)?;

    info!(
        sources = cfg.sources.len(),
        fetched = report.fetched,
        failed = report.failures.len(),
        items = report.items.len().min(cfg.max_items_total),
        "feed run finished"
    );
    Ok(report)
}
