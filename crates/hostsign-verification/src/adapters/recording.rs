//! # Recording Diagnostic Sink
//!
//! Keeps every event in memory. Used for audit capture in tests and by
//! embedding applications that forward diagnostics in batches.

use crate::domain::diagnostics::DiagnosticEvent;
use crate::ports::outbound::DiagnosticSink;
use parking_lot::Mutex;

#[derive(Default)]
pub struct RecordingDiagnosticSink {
    events: Mutex<Vec<DiagnosticEvent>>,
}

impl RecordingDiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded events, oldest first.
    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.events.lock().clone()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.events.lock().iter().map(DiagnosticEvent::name).collect()
    }

    pub fn count(&self, name: &str) -> usize {
        self.events.lock().iter().filter(|e| e.name() == name).count()
    }

    /// Remove and return all recorded events.
    pub fn drain(&self) -> Vec<DiagnosticEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl DiagnosticSink for RecordingDiagnosticSink {
    fn emit(&self, event: &DiagnosticEvent) {
        self.events.lock().push(event.clone());
    }
}
