// src/session.rs
//
// One start-to-finish scraping run as tracked by the shell. The engine does
// the work; this is only the shell-side lifecycle that drives button
// enablement and decides whether a new run may begin.

use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    Idle,
    Running,
    Stopping,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionPhase::Idle => "Idle",
            SessionPhase::Running => "Running",
            SessionPhase::Stopping => "Stopping",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Session {
    phase: SessionPhase,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == SessionPhase::Idle
    }

    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    pub fn is_stopping(&self) -> bool {
        self.phase == SessionPhase::Stopping
    }

    /// Idle → Running. Returns false (and changes nothing) from any other
    /// phase: only one session may run at a time.
    pub fn begin(&mut self) -> bool {
        if self.is_idle() {
            self.phase = SessionPhase::Running;
            true
        } else {
            false
        }
    }

    /// Running → Stopping. A stop request in any other phase is a no-op;
    /// the engine is only signalled, never waited on here.
    pub fn request_stop(&mut self) -> bool {
        if self.is_running() {
            self.phase = SessionPhase::Stopping;
            true
        } else {
            false
        }
    }

    /// Terminal event arrived: back to Idle, success and error alike.
    pub fn finish(&mut self) {
        self.phase = SessionPhase::Idle;
    }
}
