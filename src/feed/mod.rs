// src/feed/mod.rs
//! RSS 2.0 document assembly.
//!
//! The document is composed as plain text: every dynamic value goes through
//! [`escape`] first, item descriptions are additionally wrapped in CDATA.

pub mod sink;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt::Write as _;

use crate::ingest::types::Item;

pub const DEFAULT_MAX_ITEMS: usize = 50;

/// `<channel>` header fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelMeta {
    pub title: String,
    pub description: String,
    pub language: String,
}

impl Default for ChannelMeta {
    fn default() -> Self {
        Self {
            title: "Toulouse. Sorties & experiences".into(),
            description:
                "Workshops, hands-on experiences, and events in Toulouse and nearby. Updated daily."
                    .into(),
            language: "fr".into(),
        }
    }
}

/// Entity-escape `&`, `<`, `>`, `"` and `'` for embedding in markup.
pub fn escape(s: &str) -> String {
    html_escape::encode_quoted_attribute(s).into_owned()
}

/// Stable item id: hex SHA-256 of the unescaped title followed by the link.
pub fn make_guid(title: &str, link: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(title.as_bytes());
    hasher.update(link.as_bytes());
    hex::encode(hasher.finalize())
}

/// RFC-822 style timestamp, e.g. `Mon, 01 Jan 2024 00:00:00 +0000`.
pub fn rfc822(ts: DateTime<Utc>) -> String {
    ts.format("%a, %d %b %Y %H:%M:%S %z").to_string()
}

/// Build the full feed document from deduplicated items.
///
/// Only the first `max_items` are emitted. `channel_link` is usually the first
/// configured source URL (empty when there are no sources).
pub fn build_feed(
    items: &[Item],
    channel: &ChannelMeta,
    channel_link: &str,
    max_items: usize,
    build_date: DateTime<Utc>,
) -> String {
    let stamp = rfc822(build_date);

    let mut out = String::with_capacity(1024 + items.len().min(max_items) * 512);
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<rss version=\"2.0\">\n");
    out.push_str("  <channel>\n");
    let _ = writeln!(out, "    <title>{}</title>", escape(&channel.title));
    let _ = writeln!(out, "    <link>{}</link>", escape(channel_link));
    let _ = writeln!(
        out,
        "    <description>{}</description>",
        escape(&channel.description)
    );
    let _ = writeln!(out, "    <language>{}</language>", escape(&channel.language));
    let _ = writeln!(out, "    <lastBuildDate>{stamp}</lastBuildDate>");

    for item in items.iter().take(max_items) {
        write_item(&mut out, item, &stamp);
    }

    out.push_str("  </channel>\n");
    out.push_str("</rss>\n");
    out
}

fn write_item(out: &mut String, item: &Item, stamp: &str) {
    let title = escape(&format!("{} ({})", item.title, item.source_name));
    let link = escape(&item.link);
    let guid = make_guid(&item.title, &item.link);
    let desc = format!("Source: {}<br/>Link: {}", escape(&item.source_name), link);

    out.push_str("    <item>\n");
    let _ = writeln!(out, "      <title>{title}</title>");
    let _ = writeln!(out, "      <link>{link}</link>");
    let _ = writeln!(out, "      <guid isPermaLink=\"false\">{guid}</guid>");
    let _ = writeln!(out, "      <pubDate>{stamp}</pubDate>");
    let _ = writeln!(out, "      <description><![CDATA[{desc}]]></description>");
    out.push_str("    </item>\n");
}
