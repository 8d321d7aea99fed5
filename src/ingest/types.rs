// src/ingest/types.rs
use serde::{Deserialize, Serialize};

use crate::ingest::fetch::FetchError;

/// One configured origin page to scrape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Source {
    pub name: String, // e.g., "Wecandoo Toulouse"
    pub url: String,
}

impl Source {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Raw anchor pulled from a page, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub text: String,
    pub link: String, // absolute URL
}

/// Classified entry that makes it into the feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub source_name: String,
    pub title: String,
    pub link: String,
}

#[async_trait::async_trait]
pub trait PageFetcher {
    /// Return the textual body of `url`, or why it could not be fetched.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}
