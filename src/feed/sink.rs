// src/feed/sink.rs
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub const DEFAULT_OUTPUT_PATH: &str = "feed.xml";

/// Write the document to `path`, replacing whatever was there.
pub fn write_feed(path: &Path, document: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }
    fs::write(path, document.as_bytes())
        .with_context(|| format!("writing feed to {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = document.len(), "feed written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrites_and_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/nested/feed.xml");

        write_feed(&path, "first, and rather long").unwrap();
        write_feed(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn unwritable_target_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        // a directory cannot be overwritten as a file
        let err = write_feed(dir.path(), "x").unwrap_err();
        assert!(format!("{err:#}").contains("writing feed to"));
    }
}
