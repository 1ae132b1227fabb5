// src/gui/actions/session.rs
use eframe::egui;
use log::warn;

use crate::gui::app::App;
use crate::gui::notices::NoticeKind;

pub fn start(app: &mut App, _ctx: &egui::Context) {
    if let Err(e) = app.start_scraping() {
        warn!("Validation: {e}");
        app.status = format!("Invalid input: {e}");
        app.notify(NoticeKind::Error, e.to_string());
    }
}

pub fn stop(app: &mut App, _ctx: &egui::Context) {
    app.stop_scraping();
}
