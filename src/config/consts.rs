// src/config/consts.rs

// Session defaults
pub const DEFAULT_URL: &str = "https://example.com";
pub const DEFAULT_MAX_PAGES: u32 = 10;

// Local state
pub const STORE_DIR: &str = ".store";
pub const SETTINGS_FILE: &str = "settings.json";
pub const LOG_FILE: &str = "chainscrape.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_LEDGER_STEM: &str = "ledger";
pub const DEFAULT_LOG_FILE: &str = "out/session.log";

// Crawl politeness
pub const REQUEST_PAUSE_MS: u64 = 250; // be polite
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = "chainscrape/0.1";
