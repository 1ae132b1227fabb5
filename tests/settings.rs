// tests/settings.rs

use tempfile::tempdir;

use chainscrape::config::state::AppState;
use chainscrape::engine::crawler::CrawlConfig;
use chainscrape::store::{Settings, load_settings_from, save_settings_to};

#[test]
fn settings_round_trip() {
    let dir = tempdir().unwrap();

    let mut state = AppState::default();
    state.options.scrape.url = "https://example.org/start".into();
    state.options.scrape.max_pages = 42;
    state.gui.current_tab = 2;
    state.gui.auto_scroll = false;

    let mut crawl = CrawlConfig::default();
    crawl.request_pause_ms = 777;
    crawl.user_agent = "test-agent/1.0".into();

    save_settings_to(dir.path(), &state, &crawl).unwrap();
    let loaded = load_settings_from(dir.path());

    assert_eq!(loaded.options, state.options);
    assert_eq!(loaded.gui, state.gui);
    assert_eq!(loaded.crawl, crawl);
}

#[test]
fn missing_settings_fall_back_to_defaults() {
    let dir = tempdir().unwrap();
    assert_eq!(load_settings_from(dir.path()), Settings::default());
}

#[test]
fn corrupt_settings_fall_back_to_defaults() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("settings.json"), "{ not json").unwrap();
    assert_eq!(load_settings_from(dir.path()), Settings::default());
}
