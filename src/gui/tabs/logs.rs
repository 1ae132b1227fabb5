// src/gui/tabs/logs.rs
use eframe::egui;

use crate::gui::app::App;
use crate::gui::commands::{self, CommandId};

use super::{Tab, TabKind};

pub struct LogsTab;
pub static TAB: LogsTab = LogsTab;

impl Tab for LogsTab {
    fn kind(&self) -> TabKind {
        TabKind::Logs
    }

    fn title(&self) -> &'static str {
        "Logs"
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.horizontal(|ui| {
            for id in [CommandId::ClearLogs, CommandId::SaveLogs] {
                let Some(cmd) = commands::command(id) else {
                    continue;
                };
                if ui.button(cmd.label).clicked() {
                    commands::dispatch(app, ui.ctx(), id);
                }
            }

            ui.label("Save to:");
            ui.add(
                egui::TextEdit::singleline(&mut app.log_path_text)
                    .font(egui::TextStyle::Monospace)
                    .desired_width(260.0),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.checkbox(&mut app.logs.auto_scroll, "Auto-scroll");
            });
        });

        ui.separator();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .stick_to_bottom(app.logs.auto_scroll)
            .show(ui, |ui| {
                for line in app.logs.lines() {
                    ui.monospace(line.to_string());
                }
            });
    }
}
