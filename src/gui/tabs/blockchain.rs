// src/gui/tabs/blockchain.rs
use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::gui::app::{App, LedgerView};
use crate::gui::commands::{self, CommandId};

use super::{Tab, TabKind};

pub struct BlockchainTab;
pub static TAB: BlockchainTab = BlockchainTab;

impl Tab for BlockchainTab {
    fn kind(&self) -> TabKind {
        TabKind::Blockchain
    }

    fn title(&self) -> &'static str {
        "Blockchain"
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.horizontal(|ui| {
            if let Some(cmd) = commands::command(CommandId::RefreshLedger) {
                if ui.button(cmd.label).clicked() {
                    commands::dispatch(app, ui.ctx(), CommandId::RefreshLedger);
                }
            }
            match &app.ledger {
                LedgerView::Loaded { rows, refreshed } => {
                    ui.label(format!(
                        "{} block(s), refreshed {}",
                        rows.len(),
                        refreshed.format("%H:%M:%S")
                    ));
                }
                LedgerView::Unavailable => {
                    ui.weak("Ledger unavailable — no blocks stored yet");
                }
            }
        });

        ui.separator();

        if let LedgerView::Loaded { rows, .. } = &app.ledger {
            TableBuilder::new(ui)
                .striped(true)
                .column(Column::auto().at_least(50.0))
                .column(Column::auto().at_least(150.0))
                .column(Column::auto().at_least(130.0))
                .column(Column::auto().at_least(130.0))
                .column(Column::remainder())
                .header(20.0, |mut header| {
                    for title in ["Index", "Timestamp", "Hash", "Previous hash", "Data type"] {
                        header.col(|ui| {
                            ui.label(title);
                        });
                    }
                })
                .body(|mut body| {
                    body.rows(18.0, rows.len(), |mut row| {
                        let record = &rows[row.index()];
                        row.col(|ui| {
                            ui.label(record.index.to_string());
                        });
                        row.col(|ui| {
                            ui.label(record.timestamp.format("%Y-%m-%d %H:%M:%S").to_string());
                        });
                        row.col(|ui| {
                            ui.monospace(short_hash(&record.hash))
                                .on_hover_text(&record.hash);
                        });
                        row.col(|ui| {
                            ui.monospace(short_hash(&record.previous_hash))
                                .on_hover_text(&record.previous_hash);
                        });
                        row.col(|ui| {
                            ui.label(&record.data_type);
                        });
                    });
                });
        }
    }
}

fn short_hash(hash: &str) -> String {
    if hash.len() > 14 {
        format!("{}…", &hash[..14])
    } else if hash.is_empty() {
        "—".into()
    } else {
        hash.to_owned()
    }
}
