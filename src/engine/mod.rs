// src/engine/mod.rs
//
// Boundary between the control shell and the scraping/ledger engine.
// The shell calls `Engine::run` from a worker thread and receives progress
// through an mpsc channel; view state is only ever touched on the UI thread
// when those events are drained (see gui::app::App::pump_events).

pub mod analysis;
pub mod crawler;
pub mod ledger;
pub mod types;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc::Sender};

use thiserror::Error;

use types::{BlockRecord, LogLine, RunSummary, ScrapeRequest};

/// Fatal engine failure, delivered through the terminal event. Per-page
/// trouble is reported as log lines and counted in the summary instead.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },
    #[error("http client setup failed: {0}")]
    Client(String),
}

/// Events delivered from the engine's execution context to the shell.
/// Zero or more `Log`s, then exactly one `Finished` per session. Lines may
/// still arrive after a stop was requested; the shell tolerates them.
#[derive(Debug)]
pub enum EngineEvent {
    Log(LogLine),
    Finished(Result<RunSummary, EngineError>),
}

/// Cooperative cancellation flag shared between the shell and a running
/// engine. Best-effort: the engine polls it between units of work.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Engine side of the event channel: stamps log lines, ships them, and
/// pokes the UI awake after each send.
pub struct EventSink {
    tx: Sender<EngineEvent>,
    wake: Arc<dyn Fn() + Send + Sync>,
}

impl EventSink {
    pub(crate) fn new(tx: Sender<EngineEvent>, wake: Arc<dyn Fn() + Send + Sync>) -> Self {
        Self { tx, wake }
    }

    pub fn log(&self, text: impl Into<String>) {
        self.send(EngineEvent::Log(LogLine::now(text)));
    }

    pub(crate) fn send(&self, event: EngineEvent) {
        // A closed receiver means the window went away mid-run; nothing to do.
        let _ = self.tx.send(event);
        (self.wake)();
    }
}

/// The narrow call contract the shell has with its engine.
pub trait Engine: Send + Sync {
    /// Blocking scrape run; the shell calls this from a worker thread.
    /// Emit progress through `sink`, poll `cancel` between units of work,
    /// and return the terminal result. A cancelled run is still `Ok`, with
    /// the summary flagged accordingly.
    fn run(
        &self,
        req: &ScrapeRequest,
        sink: &EventSink,
        cancel: &CancelToken,
    ) -> Result<RunSummary, EngineError>;

    /// Current ledger contents, oldest first. Empty when nothing has been
    /// stored yet.
    fn ledger_snapshot(&self) -> Vec<BlockRecord>;

    /// Plain-text analysis report, rendered verbatim by the shell.
    fn generate_report(&self) -> String;

    /// Plain-text anomaly findings, rendered verbatim by the shell.
    fn detect_anomalies(&self) -> String;
}
