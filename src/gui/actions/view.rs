// src/gui/actions/view.rs
use eframe::egui;
use log::info;

use crate::gui::app::{App, LedgerView};
use crate::gui::tabs::{self, TabKind};

pub fn generate_report(app: &mut App, _ctx: &egui::Context) {
    let engine = app.engine();
    app.analysis = engine.generate_report();
    app.state.gui.current_tab = tabs::index_of(TabKind::Analysis);
    info!("Analysis: report generated");
    app.status = "Report generated".into();
}

pub fn detect_anomalies(app: &mut App, _ctx: &egui::Context) {
    let engine = app.engine();
    app.analysis = engine.detect_anomalies();
    app.state.gui.current_tab = tabs::index_of(TabKind::Analysis);
    info!("Analysis: anomaly pass done");
    app.status = "Anomaly pass done".into();
}

pub fn refresh_ledger(app: &mut App, _ctx: &egui::Context) {
    app.refresh_ledger();
    app.status = match &app.ledger {
        LedgerView::Loaded { rows, .. } => format!("Ledger: {} block(s)", rows.len()),
        LedgerView::Unavailable => "Ledger: nothing stored yet".into(),
    };
}

pub fn clear_logs(app: &mut App, _ctx: &egui::Context) {
    app.logs.clear();
    info!("UI: logs cleared");
    app.status = "Logs cleared".into();
}

pub fn toggle_search(app: &mut App, _ctx: &egui::Context) {
    app.search.open = !app.search.open;
}
