// src/ingest/mod.rs
pub mod config;
pub mod extract;
pub mod fetch;
pub mod types;

use crate::analyze::classify::classify_page;
use crate::analyze::rules::CompiledRules;
use crate::ingest::types::{Item, PageFetcher, Source};
use metrics::{counter, describe_counter, describe_gauge, gauge};
use once_cell::sync::OnceCell;
use std::collections::HashSet;

/// One-time metrics registration.
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("feed_pages_fetched_total", "Source pages fetched successfully.");
        describe_counter!("feed_fetch_errors_total", "Source pages that failed to fetch.");
        describe_counter!(
            "feed_candidates_total",
            "Anchors surviving the boilerplate filters."
        );
        describe_counter!(
            "feed_items_kept_total",
            "Items kept per source after classification and cap."
        );
        describe_counter!(
            "feed_dedup_dropped_total",
            "Items dropped because another source already had the link."
        );
        describe_gauge!("feed_last_run_items", "Unique items produced by the last run.");
    });
}

/// Outcome of one pass over all sources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Globally deduplicated items, in source-list order.
    pub items: Vec<Item>,
    /// `(source name, reason)` for every source that could not be fetched.
    pub failures: Vec<(String, String)>,
    pub fetched: usize,
    pub candidates: usize,
    pub dropped_duplicates: usize,
}

/// First occurrence of each link wins; order is preserved.
/// Returns (kept, dropped_count).
pub fn dedup_by_link(items: Vec<Item>) -> (Vec<Item>, usize) {
    let mut seen: HashSet<String> = HashSet::new();
    let mut keep = Vec::with_capacity(items.len());
    let mut dropped = 0usize;

    for it in items {
        if !seen.insert(it.link.clone()) {
            dropped += 1;
            continue;
        }
        keep.push(it);
    }

    (keep, dropped)
}

/// Extract + classify one already-fetched page.
pub fn items_from_page(
    source: &Source,
    html: &str,
    rules: &CompiledRules,
    max_per_source: usize,
) -> (Vec<Item>, usize) {
    let candidates = extract::extract_candidates(&source.url, html, rules);
    let n_candidates = candidates.len();
    let items = classify_page(candidates, rules, max_per_source)
        .into_iter()
        .map(|(title, link)| Item {
            source_name: source.name.clone(),
            title,
            link,
        })
        .collect();
    (items, n_candidates)
}

/// Fetch every source in list order and return the merged, deduplicated items.
///
/// A failing source is logged and skipped; it never aborts the run.
pub async fn run_once<F>(
    sources: &[Source],
    fetcher: &F,
    rules: &CompiledRules,
    max_per_source: usize,
) -> RunReport
where
    F: PageFetcher + ?Sized,
{
    ensure_metrics_described();

    let mut report = RunReport::default();
    let mut all = Vec::new();

    for src in sources {
        let page = match fetcher.fetch(&src.url).await {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!(source = %src.name, url = %src.url, error = %e, "skipping source");
                counter!("feed_fetch_errors_total").increment(1);
                report.failures.push((src.name.clone(), e.to_string()));
                continue;
            }
        };
        report.fetched += 1;
        counter!("feed_pages_fetched_total").increment(1);

        let (mut items, n_candidates) = items_from_page(src, &page, rules, max_per_source);
        tracing::info!(
            source = %src.name,
            candidates = n_candidates,
            kept = items.len(),
            "source processed"
        );
        report.candidates += n_candidates;
        counter!("feed_candidates_total").increment(n_candidates as u64);
        counter!("feed_items_kept_total", "source" => src.name.clone())
            .increment(items.len() as u64);

        all.append(&mut items);
    }

    let (items, dropped) = dedup_by_link(all);
    report.items = items;
    report.dropped_duplicates = dropped;

    counter!("feed_dedup_dropped_total").increment(dropped as u64);
    gauge!("feed_last_run_items").set(report.items.len() as f64);

    report
}
