// src/analyze/classify.rs
use std::collections::HashSet;

use crate::analyze::rules::CompiledRules;
use crate::ingest::types::Candidate;

pub const DEFAULT_MAX_PER_SOURCE: usize = 15;

/// Keep the candidates of one page that look like workshops/events.
///
/// Links are deduplicated first (first occurrence wins), then classified, then
/// capped at `max_per_source`. Returns `(title, link)` pairs in page order.
pub fn classify_page(
    candidates: Vec<Candidate>,
    rules: &CompiledRules,
    max_per_source: usize,
) -> Vec<(String, String)> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();

    for c in candidates {
        if !seen.insert(c.link.clone()) {
            continue;
        }
        if rules.looks_like_experience(&c.text, &c.link) {
            out.push((c.text, c.link));
        }
    }

    out.truncate(max_per_source);
    out
}
