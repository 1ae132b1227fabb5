// tests/ledger_view.rs
//
// The blockchain view is a wholesale projection of whatever snapshot the
// engine hands over; an empty snapshot is the explicit "unavailable" state.

use std::sync::{Arc, Mutex};

use chainscrape::config::state::AppState;
use chainscrape::engine::crawler::CrawlConfig;
use chainscrape::engine::ledger::Ledger;
use chainscrape::engine::types::{BlockRecord, RunSummary, ScrapeRequest};
use chainscrape::engine::{CancelToken, Engine, EngineError, EventSink};
use chainscrape::gui::{App, LedgerView};

struct LedgerEngine {
    rows: Mutex<Vec<BlockRecord>>,
}

impl Engine for LedgerEngine {
    fn run(
        &self,
        _req: &ScrapeRequest,
        _sink: &EventSink,
        _cancel: &CancelToken,
    ) -> Result<RunSummary, EngineError> {
        Ok(RunSummary::default())
    }

    fn ledger_snapshot(&self) -> Vec<BlockRecord> {
        self.rows.lock().unwrap().clone()
    }

    fn generate_report(&self) -> String {
        String::new()
    }

    fn detect_anomalies(&self) -> String {
        String::new()
    }
}

fn new_app(engine: Arc<LedgerEngine>) -> App {
    let crawl = Arc::new(Mutex::new(CrawlConfig::default()));
    App::new(AppState::default(), crawl, engine, None)
}

fn chained_rows() -> Vec<BlockRecord> {
    let mut ledger = Ledger::new();
    ledger.append("page", "{\"url\":\"https://example.com/\"}".into());
    ledger.append("page", "{\"url\":\"https://example.com/2\"}".into());
    ledger.snapshot()
}

#[test]
fn refresh_displays_snapshot_rows_in_index_order() {
    let rows = chained_rows();
    assert_eq!(rows.len(), 3);

    let engine = Arc::new(LedgerEngine {
        rows: Mutex::new(rows.clone()),
    });
    let mut app = new_app(engine);

    app.refresh_ledger();
    match &app.ledger {
        LedgerView::Loaded { rows: shown, .. } => {
            assert_eq!(shown.len(), 3);
            for (i, record) in shown.iter().enumerate() {
                assert_eq!(record.index, i as u64);
            }
            for pair in shown.windows(2) {
                assert_eq!(pair[1].previous_hash, pair[0].hash);
            }
            assert_eq!(*shown, rows);
        }
        LedgerView::Unavailable => panic!("expected a loaded ledger view"),
    }
}

#[test]
fn refresh_replaces_rows_wholesale() {
    let engine = Arc::new(LedgerEngine {
        rows: Mutex::new(chained_rows()),
    });
    let mut app = new_app(engine.clone());

    app.refresh_ledger();
    assert!(matches!(&app.ledger, LedgerView::Loaded { rows, .. } if rows.len() == 3));

    // engine grows; the view only changes on the next refresh
    let mut ledger = Ledger::new();
    ledger.append("page", "a".into());
    ledger.append("page", "b".into());
    ledger.append("session", "c".into());
    *engine.rows.lock().unwrap() = ledger.snapshot();
    assert!(matches!(&app.ledger, LedgerView::Loaded { rows, .. } if rows.len() == 3));

    app.refresh_ledger();
    assert!(matches!(&app.ledger, LedgerView::Loaded { rows, .. } if rows.len() == 4));
}

#[test]
fn empty_snapshot_is_the_unavailable_state() {
    let engine = Arc::new(LedgerEngine {
        rows: Mutex::new(Vec::new()),
    });
    let mut app = new_app(engine);

    app.refresh_ledger();
    assert!(matches!(app.ledger, LedgerView::Unavailable));
}
