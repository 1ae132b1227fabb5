// src/gui/tabs/mod.rs
use eframe::egui;
use log::info;

use super::app::App;

pub mod analysis;
pub mod blockchain;
pub mod logs;
pub mod settings;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabKind {
    Logs,
    Blockchain,
    Analysis,
    Settings,
}

pub trait Tab: Send + Sync + 'static {
    fn kind(&self) -> TabKind;
    fn title(&self) -> &'static str;
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);
}

pub static TABS: &[&'static dyn Tab] = &[
    &logs::TAB,
    &blockchain::TAB,
    &analysis::TAB,
    &settings::TAB,
];

pub fn index_of(kind: TabKind) -> usize {
    TABS.iter().position(|t| t.kind() == kind).unwrap_or(0)
}

pub fn draw_tab_strip(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let current = app.state.gui.current_tab.min(TABS.len() - 1);
        for (idx, tab) in TABS.iter().enumerate() {
            if ui.selectable_label(idx == current, tab.title()).clicked() && idx != current {
                info!("UI: tab switch {:?} → {:?}", TABS[current].kind(), tab.kind());
                app.state.gui.current_tab = idx;
            }
        }
    });
}

pub fn draw_current(ui: &mut egui::Ui, app: &mut App) {
    let idx = app.state.gui.current_tab.min(TABS.len() - 1);
    TABS[idx].draw(ui, app);
}
