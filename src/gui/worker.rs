// src/gui/worker.rs
//
// One background thread per active session. The thread runs the blocking
// engine call and forwards the terminal event over the same channel the
// log lines travel on; the UI thread never blocks on it.

use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

use crate::engine::{CancelToken, Engine, EngineEvent, EventSink};
use crate::engine::types::ScrapeRequest;

pub struct SessionHandle {
    cancel: CancelToken,
    join: Option<JoinHandle<()>>,
}

impl SessionHandle {
    pub fn request_cancel(&self) {
        self.cancel.cancel();
    }
}

impl Drop for SessionHandle {
    // Dropped either after the terminal event (thread already done, join is
    // immediate) or on shutdown, where cancelling first bounds the wait.
    fn drop(&mut self) {
        self.cancel.cancel();
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}

pub fn spawn(
    engine: Arc<dyn Engine>,
    req: ScrapeRequest,
    tx: Sender<EngineEvent>,
    wake: Arc<dyn Fn() + Send + Sync>,
) -> SessionHandle {
    let cancel = CancelToken::new();
    let cancel_for_run = cancel.clone();
    let join = thread::spawn(move || {
        let sink = EventSink::new(tx, wake);
        let result = engine.run(&req, &sink, &cancel_for_run);
        sink.send(EngineEvent::Finished(result));
    });
    SessionHandle {
        cancel,
        join: Some(join),
    }
}
