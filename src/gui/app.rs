// src/gui/app.rs
use std::error::Error;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Local};
use eframe::egui;
use log::{error, info};

use crate::config::consts::DEFAULT_LOG_FILE;
use crate::config::state::AppState;
use crate::engine::crawler::CrawlConfig;
use crate::engine::types::{BlockRecord, LogLine, ScrapeRequest, ValidationError};
use crate::engine::{Engine, EngineEvent};
use crate::session::Session;
use crate::store;

use super::log_model::LogModel;
use super::notices::{self, Notice, NoticeKind};
use super::search::{self, SearchState};
use super::worker::{self, SessionHandle};
use super::{components, tabs};

pub fn run(
    state: AppState,
    crawl: Arc<Mutex<CrawlConfig>>,
    engine: Arc<dyn Engine>,
) -> Result<(), Box<dyn Error>> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([1000.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Chainscrape",
        options,
        Box::new(move |cc| {
            Ok(Box::new(App::new(
                state,
                crawl,
                engine,
                Some(cc.egui_ctx.clone()),
            )))
        }),
    )?;
    Ok(())
}

/// Display state for the Blockchain tab. Rows are replaced wholesale on
/// refresh; an empty snapshot is a normal "nothing stored yet" state.
#[derive(Clone, Debug)]
pub enum LedgerView {
    Unavailable,
    Loaded {
        rows: Vec<BlockRecord>,
        refreshed: DateTime<Local>,
    },
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub session: Session,
    pub logs: LogModel,
    pub ledger: LedgerView,
    pub analysis: String,
    pub notices: Vec<Notice>,
    pub search: SearchState,
    pub status: String,

    // output text field UX (mapped <-> ExportOptions on export)
    pub out_path_text: String,
    pub out_path_dirty: bool,
    pub log_path_text: String,

    engine: Arc<dyn Engine>,
    crawl: Arc<Mutex<CrawlConfig>>,
    events: Receiver<EngineEvent>,
    events_tx: Sender<EngineEvent>,
    worker: Option<SessionHandle>,
    egui_ctx: Option<egui::Context>,
}

impl App {
    pub fn new(
        state: AppState,
        crawl: Arc<Mutex<CrawlConfig>>,
        engine: Arc<dyn Engine>,
        egui_ctx: Option<egui::Context>,
    ) -> Self {
        let (events_tx, events) = mpsc::channel();
        let out_path_text = state.options.export.out_path().to_string_lossy().into_owned();
        let mut logs = LogModel::new();
        logs.auto_scroll = state.gui.auto_scroll;

        info!(
            "Init: url={} max_pages={}",
            state.options.scrape.url, state.options.scrape.max_pages
        );

        Self {
            state,
            session: Session::new(),
            logs,
            ledger: LedgerView::Unavailable,
            analysis: String::new(),
            notices: Vec::new(),
            search: SearchState::default(),
            status: "Idle".into(),
            out_path_text,
            out_path_dirty: false,
            log_path_text: DEFAULT_LOG_FILE.into(),
            engine,
            crawl,
            events,
            events_tx,
            worker: None,
            egui_ctx,
        }
    }

    /* ---------- engine plumbing ---------- */

    pub fn engine(&self) -> Arc<dyn Engine> {
        self.engine.clone()
    }

    pub fn crawl_config(&self) -> Arc<Mutex<CrawlConfig>> {
        self.crawl.clone()
    }

    /// Sender feeding this shell's event queue (workers hold a clone).
    pub fn events_sender(&self) -> Sender<EngineEvent> {
        self.events_tx.clone()
    }

    fn wake_handle(&self) -> Arc<dyn Fn() + Send + Sync> {
        match &self.egui_ctx {
            Some(ctx) => {
                let ctx = ctx.clone();
                Arc::new(move || ctx.request_repaint())
            }
            None => Arc::new(|| {}),
        }
    }

    /// Drain queued engine events. The only place worker output touches
    /// view state, and it runs on the UI thread at the top of every frame.
    pub fn pump_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.handle_event(event);
        }
    }

    pub fn handle_event(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::Log(line) => self.logs.push(line),
            EngineEvent::Finished(result) => {
                self.session.finish();
                self.worker = None; // thread has delivered; reap it
                match result {
                    Ok(summary) => {
                        info!("Session finished: {summary}");
                        self.logs
                            .push(LogLine::now(format!("Session finished: {summary}")));
                        self.status = format!("Done: {summary}");
                        self.refresh_ledger();
                    }
                    Err(e) => {
                        error!("Engine: {e}");
                        self.status = format!("Error: {e}");
                        self.notify(NoticeKind::Error, format!("Scraping failed: {e}"));
                    }
                }
            }
        }
    }

    /* ---------- operator actions ---------- */

    /// Validate the current inputs and launch a session worker.
    /// Anything but Idle is a silent no-op (Start is disabled then anyway).
    pub fn start_scraping(&mut self) -> Result<(), ValidationError> {
        if !self.session.is_idle() {
            return Ok(());
        }
        let req = ScrapeRequest::new(
            &self.state.options.scrape.url,
            self.state.options.scrape.max_pages,
        )?;

        self.session.begin();
        info!(
            "Scrape: begin url={} max_pages={}",
            req.url(),
            req.max_pages()
        );
        self.logs.push(LogLine::now(format!(
            "Session started: {} (max {} pages)",
            req.url(),
            req.max_pages()
        )));
        self.status = "Scraping…".into();
        self.worker = Some(worker::spawn(
            self.engine.clone(),
            req,
            self.events_sender(),
            self.wake_handle(),
        ));
        Ok(())
    }

    /// Signal the engine and wait for its terminal event; never blocks.
    pub fn stop_scraping(&mut self) {
        if !self.session.request_stop() {
            return;
        }
        if let Some(worker) = &self.worker {
            worker.request_cancel();
        }
        info!("Scrape: stop requested");
        self.status = "Stopping…".into();
    }

    /// Replace the ledger rows wholesale from a fresh engine snapshot.
    pub fn refresh_ledger(&mut self) {
        let rows = self.engine.ledger_snapshot();
        self.ledger = if rows.is_empty() {
            LedgerView::Unavailable
        } else {
            info!("Ledger: {} block(s)", rows.len());
            LedgerView::Loaded {
                rows,
                refreshed: Local::now(),
            }
        };
    }

    pub fn notify(&mut self, kind: NoticeKind, text: impl Into<String>) {
        self.notices.push(Notice {
            kind,
            text: text.into(),
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.pump_events();

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            components::control_panel::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            tabs::draw_tab_strip(ui, self);
            ui.separator();
            tabs::draw_current(ui, self);
        });

        notices::draw(ctx, &mut self.notices);
        search::draw(ctx, self);
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.state.gui.auto_scroll = self.logs.auto_scroll;
        let crawl = self.crawl.lock().unwrap().clone();
        if let Err(e) = store::save_settings(&self.state, &crawl) {
            error!("Settings: save failed: {e}");
        }
    }
}
