//! Heuristic pattern rules for link filtering and experience classification.
//!
//! Everything is plain data so it can be overridden from the config file:
//! - `min_text_chars`:  anchors with shorter visible text are icon/empty links
//! - `href_blocklist`:  substrings that disqualify a raw (unresolved) href
//! - `text_blocklist`:  substrings that disqualify the lowercased anchor text
//! - `title_patterns`:  regex fragments; a title matching any of them qualifies
//! - `link_patterns`:   regex fragments; a link matching any of them qualifies
//!
//! Pattern matching is case-insensitive and unanchored (substring semantics).

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    pub min_text_chars: usize,
    pub href_blocklist: Vec<String>,
    pub text_blocklist: Vec<String>,
    pub title_patterns: Vec<String>,
    pub link_patterns: Vec<String>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            min_text_chars: 6,
            href_blocklist: to_owned(&["#", "javascript:", "/login", "/signup", "/account"]),
            text_blocklist: to_owned(&["cookie", "privacy", "terms", "contact", "menu"]),
            title_patterns: to_owned(&[
                "atelier",
                "workshop",
                "cours",
                "initiation",
                "stage",
                "masterclass",
            ]),
            link_patterns: to_owned(&[
                "atelier",
                "workshop",
                "event",
                "evenement",
                "billet",
                "ticket",
            ]),
        }
    }
}

impl RuleSet {
    /// Compile pattern lists into matchers. Fails on an invalid regex fragment.
    pub fn compile(&self) -> Result<CompiledRules> {
        Ok(CompiledRules {
            min_text_chars: self.min_text_chars,
            href_blocklist: self.href_blocklist.clone(),
            text_blocklist: self
                .text_blocklist
                .iter()
                .map(|s| s.to_lowercase())
                .collect(),
            title_re: alternation(&self.title_patterns).context("compiling title_patterns")?,
            link_re: alternation(&self.link_patterns).context("compiling link_patterns")?,
        })
    }
}

/// Ready-to-use form of a [`RuleSet`].
#[derive(Debug, Clone)]
pub struct CompiledRules {
    min_text_chars: usize,
    href_blocklist: Vec<String>,
    text_blocklist: Vec<String>,
    title_re: Option<Regex>,
    link_re: Option<Regex>,
}

impl CompiledRules {
    pub fn min_text_chars(&self) -> usize {
        self.min_text_chars
    }

    /// True if the raw href contains any blocked fragment (`#`, `javascript:`, auth paths).
    pub fn href_blocked(&self, href: &str) -> bool {
        self.href_blocklist
            .iter()
            .any(|bad| !bad.is_empty() && href.contains(bad.as_str()))
    }

    /// True if the anchor text looks like site chrome (cookie banner, menu, ...).
    pub fn text_blocked(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.text_blocklist
            .iter()
            .any(|bad| !bad.is_empty() && lower.contains(bad.as_str()))
    }

    pub fn title_matches(&self, title: &str) -> bool {
        self.title_re.as_ref().is_some_and(|re| re.is_match(title))
    }

    pub fn link_matches(&self, link: &str) -> bool {
        self.link_re.as_ref().is_some_and(|re| re.is_match(link))
    }

    /// A candidate looks like an experience if either its title or its link matches.
    pub fn looks_like_experience(&self, title: &str, link: &str) -> bool {
        self.title_matches(title) || self.link_matches(link)
    }
}

impl Default for CompiledRules {
    fn default() -> Self {
        RuleSet::default()
            .compile()
            .expect("built-in rule patterns are valid")
    }
}

// --- internals ---

fn alternation(patterns: &[String]) -> Result<Option<Regex>> {
    let parts: Vec<&str> = patterns
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect();
    if parts.is_empty() {
        return Ok(None);
    }
    let re = Regex::new(&format!("(?i)({})", parts.join("|")))?;
    Ok(Some(re))
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
