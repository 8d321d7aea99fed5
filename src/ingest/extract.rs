// src/ingest/extract.rs
//! Anchor discovery: HTML in, `(text, absolute link)` candidates out.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::analyze::rules::CompiledRules;
use crate::ingest::types::Candidate;

static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").expect("anchor selector"));

/// Extract every anchor that survives the boilerplate filters, in document order.
///
/// Malformed HTML is parsed permissively; the worst case is an empty result.
pub fn extract_candidates(base_url: &str, html: &str, rules: &CompiledRules) -> Vec<Candidate> {
    let origin = origin_of(base_url);
    if origin.is_none() {
        tracing::debug!(base = base_url, "base url has no origin; relative links dropped");
    }

    let document = Html::parse_document(html);
    let mut out = Vec::new();

    for a in document.select(&ANCHOR) {
        let href = a.value().attr("href").unwrap_or_default().trim();
        let text = visible_text(&a);

        if href.is_empty() || text.is_empty() {
            continue;
        }
        if text.chars().count() < rules.min_text_chars() {
            continue;
        }
        if rules.href_blocked(href) || rules.text_blocked(&text) {
            continue;
        }

        let link = match resolve(origin.as_deref(), href) {
            Some(l) => l,
            None => continue,
        };
        out.push(Candidate { text, link });
    }

    out
}

/// Resolve `href` against `base_url` the cheap way: anything starting with
/// `http` is kept, everything else hangs off `scheme://host[:port]/`.
pub fn absolute_url(base_url: &str, href: &str) -> Option<String> {
    resolve(origin_of(base_url).as_deref(), href)
}

// --- internals ---

fn resolve(origin: Option<&str>, href: &str) -> Option<String> {
    if href.starts_with("http") {
        return Some(href.to_string());
    }
    let origin = origin?;
    if href.starts_with('/') {
        Some(format!("{origin}{href}"))
    } else {
        Some(format!("{origin}/{href}"))
    }
}

fn origin_of(base_url: &str) -> Option<String> {
    let url = Url::parse(base_url).ok()?;
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{}://{}:{}", url.scheme(), host, port),
        None => format!("{}://{}", url.scheme(), host),
    })
}

/// Text nodes trimmed, empties dropped, joined by single spaces.
fn visible_text(el: &ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
