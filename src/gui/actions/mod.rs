// src/gui/actions/mod.rs

mod export;
mod session;
mod view;

pub use export::{export_data, save_logs};
pub use session::{start, stop};
pub use view::{clear_logs, detect_anomalies, generate_report, refresh_ledger, toggle_search};
