// src/gui/search.rs
//
// Search window over the data already on screen (log lines and ledger
// rows). Client-side only; the engine interface stays narrow.

use eframe::egui;

use super::app::{App, LedgerView};

#[derive(Clone, Debug, Default)]
pub struct SearchState {
    pub open: bool,
    pub query: String,
    pub hits: Vec<SearchHit>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchHit {
    pub source: &'static str,
    pub text: String,
}

/// Case-insensitive substring match over the displayed views.
pub fn run_query(app: &mut App) {
    let query = app.search.query.trim().to_lowercase();
    app.search.hits.clear();
    if query.is_empty() {
        return;
    }

    let hits = &mut app.search.hits;
    for line in app.logs.lines() {
        if line.text.to_lowercase().contains(&query) {
            hits.push(SearchHit {
                source: "log",
                text: line.to_string(),
            });
        }
    }
    if let LedgerView::Loaded { rows, .. } = &app.ledger {
        for r in rows {
            let text = format!("#{} {} {}", r.index, r.data_type, r.hash);
            if text.to_lowercase().contains(&query) {
                hits.push(SearchHit {
                    source: "ledger",
                    text,
                });
            }
        }
    }
}

pub fn draw(ctx: &egui::Context, app: &mut App) {
    if !app.search.open {
        return;
    }
    let mut open = true;
    egui::Window::new("Search")
        .open(&mut open)
        .resizable(true)
        .default_width(480.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let response = ui.text_edit_singleline(&mut app.search.query);
                if response.changed() || ui.button("Find").clicked() {
                    run_query(app);
                }
            });
            ui.separator();
            if app.search.hits.is_empty() {
                ui.weak("No matches.");
            } else {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, true])
                    .max_height(300.0)
                    .show(ui, |ui| {
                        for hit in &app.search.hits {
                            ui.horizontal(|ui| {
                                ui.weak(hit.source);
                                ui.label(&hit.text);
                            });
                        }
                    });
            }
        });
    app.search.open = open;
}
