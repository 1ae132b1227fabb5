// src/gui/tabs/analysis.rs
use eframe::egui;

use crate::gui::app::App;
use crate::gui::commands::{self, CommandId};

use super::{Tab, TabKind};

pub struct AnalysisTab;
pub static TAB: AnalysisTab = AnalysisTab;

impl Tab for AnalysisTab {
    fn kind(&self) -> TabKind {
        TabKind::Analysis
    }

    fn title(&self) -> &'static str {
        "Analysis"
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.horizontal(|ui| {
            for id in [CommandId::GenerateReport, CommandId::DetectAnomalies] {
                let Some(cmd) = commands::command(id) else {
                    continue;
                };
                if ui.button(cmd.label).clicked() {
                    commands::dispatch(app, ui.ctx(), id);
                }
            }
        });

        ui.separator();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if app.analysis.is_empty() {
                    ui.weak("No report yet — generate one above.");
                } else {
                    ui.monospace(&app.analysis);
                }
            });
    }
}
