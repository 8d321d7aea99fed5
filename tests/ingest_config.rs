// tests/ingest_config.rs
use std::{env, fs};
use toulouse_experiences_feed::ingest::config::{load_config_default, load_config_from};
use toulouse_experiences_feed::{FeedConfig, Source};

#[test]
fn parse_toml_and_json_paths() {
    let dir = tempfile::tempdir().unwrap();

    let p_toml = dir.path().join("feed.toml");
    fs::write(
        &p_toml,
        r#"
output_path = "public/feed.xml"
timeout_secs = 10

[channel]
title = "Test feed"

[[sources]]
name = "Local"
url = "http://localhost/agenda"

[rules]
title_patterns = ["concert"]
"#,
    )
    .unwrap();
    let cfg = load_config_from(&p_toml).unwrap();
    assert_eq!(cfg.sources, vec![Source::new("Local", "http://localhost/agenda")]);
    assert_eq!(cfg.output_path.to_str(), Some("public/feed.xml"));
    assert_eq!(cfg.timeout_secs, 10);
    assert_eq!(cfg.channel.title, "Test feed");
    assert_eq!(cfg.channel.language, "fr");
    assert_eq!(cfg.rules.title_patterns, vec!["concert".to_string()]);
    assert_eq!(cfg.rules.min_text_chars, 6);

    let p_json = dir.path().join("feed.json");
    fs::write(
        &p_json,
        r#"{"sources":[{"name":"A","url":"https://a.test/"}],"max_items_total":5}"#,
    )
    .unwrap();
    let cj = load_config_from(&p_json).unwrap();
    assert_eq!(cj.sources.len(), 1);
    assert_eq!(cj.max_items_total, 5);
    assert_eq!(cj.max_items_per_source, 15);
}

#[test]
fn broken_file_is_an_error_naming_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("feed.toml");
    fs::write(&p, "sources = 3").unwrap();
    let err = load_config_from(&p).unwrap_err();
    assert!(format!("{err:#}").contains("feed.toml"));
}

#[serial_test::serial]
#[test]
fn default_uses_file_then_builtins() {
    // Isolate CWD so the repo's own config/ does not leak in
    let old = env::current_dir().unwrap();
    let tmp = tempfile::tempdir().unwrap();
    env::set_current_dir(tmp.path()).unwrap();

    // 1) No file → built-in sources
    let cfg = load_config_default().unwrap();
    assert_eq!(cfg, FeedConfig::default());
    assert_eq!(cfg.sources.len(), 2);

    // 2) config/feed.json is picked up
    let cfg_dir = tmp.path().join("config");
    fs::create_dir_all(&cfg_dir).unwrap();
    fs::write(cfg_dir.join("feed.json"), r#"{"sources":[]}"#).unwrap();
    assert!(load_config_default().unwrap().sources.is_empty());

    // 3) TOML wins over JSON
    fs::write(
        cfg_dir.join("feed.toml"),
        "[[sources]]\nname = \"T\"\nurl = \"https://t.test/\"\n",
    )
    .unwrap();
    let ct = load_config_default().unwrap();
    assert_eq!(ct.sources, vec![Source::new("T", "https://t.test/")]);

    env::set_current_dir(&old).unwrap();
}

#[test]
fn shipped_config_matches_builtins() {
    let p = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("config/feed.toml");
    assert_eq!(load_config_from(&p).unwrap(), FeedConfig::default());
}
