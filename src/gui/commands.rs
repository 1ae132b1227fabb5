// src/gui/commands.rs
//
// Every operator-facing action in one table: label, enablement over the
// session state, handler. Buttons dispatch through here so enablement and
// behavior can't drift apart.

use eframe::egui;

use super::actions;
use super::app::App;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandId {
    StartScrape,
    StopScrape,
    GenerateReport,
    DetectAnomalies,
    ExportData,
    SaveLogs,
    ClearLogs,
    RefreshLedger,
    Search,
}

pub struct Command {
    pub id: CommandId,
    pub label: &'static str,
    pub enabled: fn(&App) -> bool,
    pub run: fn(&mut App, &egui::Context),
}

fn always(_: &App) -> bool {
    true
}

pub static COMMANDS: &[Command] = &[
    Command {
        id: CommandId::StartScrape,
        label: "Start scraping",
        enabled: |app| app.session.is_idle(),
        run: actions::start,
    },
    Command {
        id: CommandId::StopScrape,
        label: "Stop scraping",
        enabled: |app| app.session.is_running(),
        run: actions::stop,
    },
    Command {
        id: CommandId::GenerateReport,
        label: "Generate report",
        enabled: always,
        run: actions::generate_report,
    },
    Command {
        id: CommandId::DetectAnomalies,
        label: "Detect anomalies",
        enabled: always,
        run: actions::detect_anomalies,
    },
    Command {
        id: CommandId::ExportData,
        label: "Export data",
        enabled: always,
        run: actions::export_data,
    },
    Command {
        id: CommandId::SaveLogs,
        label: "Save logs",
        enabled: always,
        run: actions::save_logs,
    },
    Command {
        id: CommandId::ClearLogs,
        label: "Clear logs",
        enabled: always,
        run: actions::clear_logs,
    },
    Command {
        id: CommandId::RefreshLedger,
        label: "Refresh",
        enabled: always,
        run: actions::refresh_ledger,
    },
    Command {
        id: CommandId::Search,
        label: "Search",
        enabled: always,
        run: actions::toggle_search,
    },
];

pub fn command(id: CommandId) -> Option<&'static Command> {
    COMMANDS.iter().find(|c| c.id == id)
}

pub fn is_enabled(app: &App, id: CommandId) -> bool {
    command(id).map(|c| (c.enabled)(app)).unwrap_or(false)
}

pub fn dispatch(app: &mut App, ctx: &egui::Context, id: CommandId) {
    if let Some(cmd) = command(id) {
        if (cmd.enabled)(app) {
            (cmd.run)(app, ctx);
        }
    }
}
