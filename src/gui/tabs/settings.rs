// src/gui/tabs/settings.rs
use eframe::egui;
use log::info;

use crate::config::options::ExportFormat;
use crate::gui::app::App;
use crate::gui::notices::NoticeKind;
use crate::store;

use super::{Tab, TabKind};

pub struct SettingsTab;
pub static TAB: SettingsTab = SettingsTab;

impl Tab for SettingsTab {
    fn kind(&self) -> TabKind {
        TabKind::Settings
    }

    fn title(&self) -> &'static str {
        "Settings"
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.heading("Scraping");
        {
            // Shared with the engine; a running session keeps the values it
            // started with, the next one picks these up.
            let crawl = app.crawl_config();
            let mut cfg = crawl.lock().unwrap();
            ui.horizontal(|ui| {
                ui.label("Request delay:");
                ui.add(
                    egui::DragValue::new(&mut cfg.request_pause_ms)
                        .range(0..=5_000)
                        .suffix(" ms"),
                );
                ui.label("Timeout:");
                ui.add(
                    egui::DragValue::new(&mut cfg.timeout_secs)
                        .range(1..=120)
                        .suffix(" s"),
                );
            });
            ui.horizontal(|ui| {
                ui.label("User agent:");
                ui.add(
                    egui::TextEdit::singleline(&mut cfg.user_agent)
                        .font(egui::TextStyle::Monospace)
                        .desired_width(320.0),
                );
            });
        }

        ui.separator();
        ui.heading("Export");
        {
            let export = &mut app.state.options.export;
            let prev_format = export.format.clone();
            ui.horizontal(|ui| {
                ui.label("Format:");
                ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
                ui.selectable_value(&mut export.format, ExportFormat::Json, "JSON");
            });
            let format_changed = export.format != prev_format;
            if format_changed {
                info!("UI: export format → {:?}", export.format);
            }

            let csv = export.format == ExportFormat::Csv;
            ui.add_enabled(csv, egui::Checkbox::new(&mut export.include_headers, "Include header row"));

            // If the operator hasn't typed a path, keep the text field in
            // step with the format's extension.
            if format_changed && !app.out_path_dirty {
                app.out_path_text = app
                    .state
                    .options
                    .export
                    .out_path()
                    .to_string_lossy()
                    .into_owned();
            }
        }

        ui.horizontal(|ui| {
            ui.label("Output:");
            if ui
                .add(
                    egui::TextEdit::singleline(&mut app.out_path_text)
                        .font(egui::TextStyle::Monospace)
                        .desired_width(320.0),
                )
                .changed()
            {
                app.out_path_dirty = true;
            }
        });

        ui.separator();

        if ui.button("Save settings").clicked() {
            app.state.gui.auto_scroll = app.logs.auto_scroll;
            let crawl = app.crawl_config();
            let cfg = crawl.lock().unwrap().clone();
            match store::save_settings(&app.state, &cfg) {
                Ok(path) => {
                    info!("Settings: saved {}", path.display());
                    app.status = format!("Settings saved → {}", path.display());
                }
                Err(e) => {
                    app.notify(NoticeKind::Error, format!("Saving settings failed: {e}"));
                }
            }
        }
        ui.weak("Settings are also saved when the window closes.");
    }
}
