// src/config/state.rs
use serde::{Deserialize, Serialize};

use super::options::AppOptions;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GuiState {
    /// Active tab index into `gui::tabs::TABS`.
    pub current_tab: usize,

    /// Log view follows the newest line.
    pub auto_scroll: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            current_tab: 0,
            auto_scroll: true,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
