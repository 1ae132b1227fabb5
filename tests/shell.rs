// tests/shell.rs
//
// Shell behavior against engine doubles: the real worker thread, the real
// event channel, no rendering. Mirrors how the app drains events at the
// top of each frame by calling pump_events directly.

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use chainscrape::config::state::AppState;
use chainscrape::engine::crawler::CrawlConfig;
use chainscrape::engine::types::{
    BlockRecord, LogLine, RunSummary, ScrapeRequest, ValidationError,
};
use chainscrape::engine::{CancelToken, Engine, EngineError, EngineEvent, EventSink};
use chainscrape::gui::commands::{self, CommandId};
use chainscrape::gui::App;
use chainscrape::session::SessionPhase;

/* ---------- engine doubles ---------- */

struct ScriptedEngine {
    lines: Vec<&'static str>,
}

impl Engine for ScriptedEngine {
    fn run(
        &self,
        _req: &ScrapeRequest,
        sink: &EventSink,
        _cancel: &CancelToken,
    ) -> Result<RunSummary, EngineError> {
        for line in &self.lines {
            sink.log(*line);
        }
        Ok(RunSummary {
            pages_fetched: self.lines.len(),
            blocks_appended: self.lines.len(),
            ..RunSummary::default()
        })
    }

    fn ledger_snapshot(&self) -> Vec<BlockRecord> {
        Vec::new()
    }

    fn generate_report(&self) -> String {
        String::new()
    }

    fn detect_anomalies(&self) -> String {
        String::new()
    }
}

struct FailingEngine;

impl Engine for FailingEngine {
    fn run(
        &self,
        req: &ScrapeRequest,
        _sink: &EventSink,
        _cancel: &CancelToken,
    ) -> Result<RunSummary, EngineError> {
        Err(EngineError::Fetch {
            url: req.url().to_string(),
            reason: "connection refused".into(),
        })
    }

    fn ledger_snapshot(&self) -> Vec<BlockRecord> {
        Vec::new()
    }

    fn generate_report(&self) -> String {
        String::new()
    }

    fn detect_anomalies(&self) -> String {
        String::new()
    }
}

/// Runs until the shell asks it to stop.
struct WaitingEngine;

impl Engine for WaitingEngine {
    fn run(
        &self,
        _req: &ScrapeRequest,
        _sink: &EventSink,
        cancel: &CancelToken,
    ) -> Result<RunSummary, EngineError> {
        while !cancel.is_cancelled() {
            thread::sleep(Duration::from_millis(2));
        }
        Ok(RunSummary {
            cancelled: true,
            ..RunSummary::default()
        })
    }

    fn ledger_snapshot(&self) -> Vec<BlockRecord> {
        Vec::new()
    }

    fn generate_report(&self) -> String {
        String::new()
    }

    fn detect_anomalies(&self) -> String {
        String::new()
    }
}

/* ---------- helpers ---------- */

fn new_app(engine: Arc<dyn Engine>) -> App {
    let crawl = Arc::new(Mutex::new(CrawlConfig::default()));
    App::new(AppState::default(), crawl, engine, None)
}

fn wait_until_idle(app: &mut App) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while !app.session.is_idle() {
        assert!(
            Instant::now() < deadline,
            "engine never delivered its terminal event"
        );
        app.pump_events();
        thread::sleep(Duration::from_millis(2));
    }
}

/* ---------- tests ---------- */

#[test]
fn start_runs_session_to_completion() {
    let lines = vec!["one", "two", "three", "four", "five"];
    let mut app = new_app(Arc::new(ScriptedEngine {
        lines: lines.clone(),
    }));

    app.start_scraping().unwrap();
    assert_eq!(app.session.phase(), SessionPhase::Running);
    assert!(!commands::is_enabled(&app, CommandId::StartScrape));
    assert!(commands::is_enabled(&app, CommandId::StopScrape));

    wait_until_idle(&mut app);

    // "Session started" + the five scripted lines + "Session finished"
    assert_eq!(app.logs.len(), 7);
    let texts: Vec<&str> = app.logs.lines().iter().map(|l| l.text.as_str()).collect();
    assert!(texts[0].starts_with("Session started"));
    assert_eq!(&texts[1..6], lines.as_slice());
    assert!(texts[6].starts_with("Session finished"));

    assert!(commands::is_enabled(&app, CommandId::StartScrape));
    assert!(!commands::is_enabled(&app, CommandId::StopScrape));
}

#[test]
fn invalid_input_leaves_state_unchanged() {
    let mut app = new_app(Arc::new(ScriptedEngine { lines: Vec::new() }));

    app.state.options.scrape.url = String::new();
    assert_eq!(app.start_scraping().unwrap_err(), ValidationError::EmptyUrl);
    assert_eq!(app.session.phase(), SessionPhase::Idle);
    assert!(app.logs.is_empty());

    app.state.options.scrape.url = "https://example.com".into();
    app.state.options.scrape.max_pages = 0;
    assert_eq!(
        app.start_scraping().unwrap_err(),
        ValidationError::ZeroPages
    );
    assert_eq!(app.session.phase(), SessionPhase::Idle);
    assert!(app.logs.is_empty());
}

#[test]
fn stop_in_idle_is_a_noop() {
    let mut app = new_app(Arc::new(ScriptedEngine { lines: Vec::new() }));
    app.stop_scraping();
    assert_eq!(app.session.phase(), SessionPhase::Idle);
    assert!(app.notices.is_empty());
}

#[test]
fn stop_requests_cancel_and_returns_to_idle() {
    let mut app = new_app(Arc::new(WaitingEngine));

    app.start_scraping().unwrap();
    assert_eq!(app.session.phase(), SessionPhase::Running);

    app.stop_scraping();
    assert_eq!(app.session.phase(), SessionPhase::Stopping);
    assert!(!commands::is_enabled(&app, CommandId::StartScrape));
    assert!(!commands::is_enabled(&app, CommandId::StopScrape));

    // start while not Idle is a silent no-op
    let logged = app.logs.len();
    app.start_scraping().unwrap();
    assert_eq!(app.session.phase(), SessionPhase::Stopping);
    assert_eq!(app.logs.len(), logged);

    wait_until_idle(&mut app);
    assert!(commands::is_enabled(&app, CommandId::StartScrape));
}

#[test]
fn engine_error_returns_to_idle_with_a_notice() {
    let mut app = new_app(Arc::new(FailingEngine));

    app.start_scraping().unwrap();
    wait_until_idle(&mut app);

    assert_eq!(app.session.phase(), SessionPhase::Idle);
    assert_eq!(app.notices.len(), 1);
    assert!(app.notices[0].text.contains("connection refused"));
    assert!(app.status.starts_with("Error"));
}

#[test]
fn log_lines_keep_arrival_order_across_threads() {
    let mut app = new_app(Arc::new(ScriptedEngine { lines: Vec::new() }));

    let tx = app.events_sender();
    let sender = thread::spawn(move || {
        for i in 0..100 {
            tx.send(EngineEvent::Log(LogLine::now(format!("line {i}"))))
                .unwrap();
        }
    });
    sender.join().unwrap();

    app.pump_events();

    assert_eq!(app.logs.len(), 100);
    for (i, line) in app.logs.lines().iter().enumerate() {
        assert_eq!(line.text, format!("line {i}"));
    }
}
