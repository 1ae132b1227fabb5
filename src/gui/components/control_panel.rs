// src/gui/components/control_panel.rs
//
// Target inputs plus the primary command buttons and the status line.
// Buttons go through the command table; enablement is never hand-rolled
// at the widget.

use eframe::egui::{self, widgets::Spinner};

use crate::gui::app::App;
use crate::gui::commands::{self, CommandId};

const PRIMARY: &[CommandId] = &[
    CommandId::StartScrape,
    CommandId::StopScrape,
    CommandId::GenerateReport,
    CommandId::ExportData,
    CommandId::Search,
];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        ui.label("Target URL:");
        ui.add_enabled(
            app.session.is_idle(),
            egui::TextEdit::singleline(&mut app.state.options.scrape.url)
                .font(egui::TextStyle::Monospace)
                .desired_width(420.0),
        );
        ui.label("Max pages:");
        ui.add_enabled(
            app.session.is_idle(),
            egui::DragValue::new(&mut app.state.options.scrape.max_pages).range(1..=10_000),
        );
    });

    ui.add_space(4.0);

    ui.horizontal(|ui| {
        for &id in PRIMARY {
            let Some(cmd) = commands::command(id) else {
                continue;
            };
            let enabled = (cmd.enabled)(app);

            let black = egui::Color32::BLACK;
            let button = match id {
                CommandId::StartScrape => egui::Button::new(
                    egui::RichText::new(cmd.label).color(black).strong(),
                )
                .fill(egui::Color32::from_rgb(60, 180, 75)),
                CommandId::StopScrape => egui::Button::new(
                    egui::RichText::new(cmd.label).color(black).strong(),
                )
                .fill(egui::Color32::from_rgb(220, 60, 60)),
                _ => egui::Button::new(cmd.label),
            };

            if ui.add_enabled(enabled, button).clicked() {
                (cmd.run)(app, ui.ctx());
            }
        }

        if !app.session.is_idle() {
            ui.add(Spinner::new().size(16.0));
        }

        ui.label(format!("Status: {}", app.status));
    });

    ui.add_space(4.0);
}
