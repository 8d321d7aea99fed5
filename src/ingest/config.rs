// src/ingest/config.rs
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::analyze::classify::DEFAULT_MAX_PER_SOURCE;
use crate::analyze::rules::RuleSet;
use crate::feed::sink::DEFAULT_OUTPUT_PATH;
use crate::feed::{ChannelMeta, DEFAULT_MAX_ITEMS};
use crate::ingest::fetch::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use crate::ingest::types::Source;

pub const DEFAULT_CONFIG_TOML: &str = "config/feed.toml";
pub const DEFAULT_CONFIG_JSON: &str = "config/feed.json";

/// Everything a run needs. Missing fields in a config file take the built-in value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub sources: Vec<Source>,
    pub output_path: PathBuf,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub max_items_per_source: usize,
    pub max_items_total: usize,
    pub channel: ChannelMeta,
    pub rules: RuleSet,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            sources: default_sources(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_items_per_source: DEFAULT_MAX_PER_SOURCE,
            max_items_total: DEFAULT_MAX_ITEMS,
            channel: ChannelMeta::default(),
            rules: RuleSet::default(),
        }
    }
}

impl FeedConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// URL advertised as the channel `<link>`: the first source, if any.
    pub fn channel_link(&self) -> &str {
        self.sources.first().map(|s| s.url.as_str()).unwrap_or("")
    }
}

pub fn default_sources() -> Vec<Source> {
    vec![
        Source::new("Wecandoo Toulouse", "https://wecandoo.fr/ateliers/toulouse"),
        Source::new(
            "Quai des Savoirs Agenda",
            "https://quaidessavoirs.toulouse-metropole.fr/agenda/",
        ),
    ]
}

/// Load config from an explicit path. Supports TOML or JSON formats.
pub fn load_config_from(path: &Path) -> Result<FeedConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading feed config from {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let cfg = parse_config(&content, ext.as_str())
        .with_context(|| format!("parsing feed config {}", path.display()))?;
    Ok(sanitize(cfg))
}

/// Load config using fallbacks:
/// 1) config/feed.toml
/// 2) config/feed.json
/// 3) built-in defaults
pub fn load_config_default() -> Result<FeedConfig> {
    for p in [DEFAULT_CONFIG_TOML, DEFAULT_CONFIG_JSON] {
        let pb = PathBuf::from(p);
        if pb.exists() {
            return load_config_from(&pb);
        }
    }
    Ok(FeedConfig::default())
}

fn parse_config(s: &str, hint_ext: &str) -> Result<FeedConfig> {
    match hint_ext {
        "toml" => return toml::from_str(s).map_err(|e| anyhow!("invalid toml: {e}")),
        "json" => return serde_json::from_str(s).map_err(|e| anyhow!("invalid json: {e}")),
        _ => {}
    }
    // Unknown extension: JSON first (stricter), then TOML.
    if let Ok(v) = serde_json::from_str(s) {
        return Ok(v);
    }
    toml::from_str(s).map_err(|_| anyhow!("unsupported feed config format"))
}

fn sanitize(mut cfg: FeedConfig) -> FeedConfig {
    cfg.sources = cfg
        .sources
        .into_iter()
        .map(|s| Source::new(s.name.trim(), s.url.trim()))
        .filter(|s| !s.name.is_empty() && !s.url.is_empty())
        .collect();
    if cfg.timeout_secs == 0 {
        cfg.timeout_secs = DEFAULT_TIMEOUT_SECS;
    }
    if cfg.user_agent.trim().is_empty() {
        cfg.user_agent = DEFAULT_USER_AGENT.to_string();
    }
    cfg
}
