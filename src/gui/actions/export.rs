// src/gui/actions/export.rs
use std::path::Path;

use eframe::egui;
use log::{error, info};

use crate::file;
use crate::gui::app::{App, LedgerView};
use crate::gui::notices::NoticeKind;

/// Write the ledger rows as currently displayed. Session state is never
/// touched here; a failed write is a notice, nothing more.
pub fn export_data(app: &mut App, _ctx: &egui::Context) {
    let rows = match &app.ledger {
        LedgerView::Loaded { rows, .. } => rows.clone(),
        LedgerView::Unavailable => {
            app.status = "Nothing to export — refresh the blockchain view first".into();
            return;
        }
    };

    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        app.out_path_dirty = false;
        info!(
            "Export: out path set → {}",
            app.state.options.export.out_path().display()
        );
    }

    match file::write_ledger_export(&app.state.options.export, &rows) {
        Ok(path) => {
            info!("Export: OK {} record(s) → {}", rows.len(), path.display());
            app.status = format!("Exported {} record(s) → {}", rows.len(), path.display());
        }
        Err(e) => {
            error!("Export: {e}");
            app.notify(NoticeKind::Error, format!("Export failed: {e}"));
        }
    }
}

/// Write the log view verbatim to the operator-chosen path.
pub fn save_logs(app: &mut App, _ctx: &egui::Context) {
    if app.logs.is_empty() {
        app.status = "Nothing to save".into();
        return;
    }
    let text = app.logs.to_text();
    match file::write_log_export(Path::new(&app.log_path_text), &text) {
        Ok(path) => {
            info!("Logs: saved {} line(s) → {}", app.logs.len(), path.display());
            app.status = format!("Saved logs → {}", path.display());
        }
        Err(e) => {
            error!("Logs: save failed: {e}");
            app.notify(NoticeKind::Error, format!("Saving logs failed: {e}"));
        }
    }
}
