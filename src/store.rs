// src/store.rs
//
// Settings that survive a restart, as JSON under `.store/`.

use std::path::{Path, PathBuf};
use std::{fs, io};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::config::consts::{SETTINGS_FILE, STORE_DIR};
use crate::config::state::{AppState, GuiState};
use crate::engine::crawler::CrawlConfig;
use crate::config::options::AppOptions;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub options: AppOptions,
    #[serde(default)]
    pub gui: GuiState,
    #[serde(default)]
    pub crawl: CrawlConfig,
}

fn settings_path(dir: &Path) -> PathBuf {
    dir.join(SETTINGS_FILE)
}

pub fn load_settings() -> Settings {
    load_settings_from(Path::new(STORE_DIR))
}

/// Missing settings are normal (first run); a corrupt file is logged and
/// replaced with defaults rather than failing startup.
pub fn load_settings_from(dir: &Path) -> Settings {
    let path = settings_path(dir);
    let Ok(text) = fs::read_to_string(&path) else {
        return Settings::default();
    };
    match serde_json::from_str(&text) {
        Ok(settings) => {
            info!("Settings: loaded {}", path.display());
            settings
        }
        Err(e) => {
            warn!("Settings: ignoring corrupt {}: {e}", path.display());
            Settings::default()
        }
    }
}

pub fn save_settings(state: &AppState, crawl: &CrawlConfig) -> io::Result<PathBuf> {
    save_settings_to(Path::new(STORE_DIR), state, crawl)
}

pub fn save_settings_to(
    dir: &Path,
    state: &AppState,
    crawl: &CrawlConfig,
) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let settings = Settings {
        options: state.options.clone(),
        gui: state.gui.clone(),
        crawl: crawl.clone(),
    };
    let text = serde_json::to_string_pretty(&settings).map_err(io::Error::other)?;
    let path = settings_path(dir);
    fs::write(&path, text)?;
    Ok(path)
}
