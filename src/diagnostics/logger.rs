// Fri Jan 16 2026 - Alex

use std::sync::{Arc, Mutex};

use crate::diagnostics::{Diagnostic, DiagnosticSink, Severity};

/// Default sink: forwards every advisory to the `log` facade at the
/// matching level.
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, severity: Severity, message: &str) {
        log::log!(severity.to_level(), "{}", message);
    }
}

/// Recording sink for tests and host-side assertions. Clones share the
/// same buffer.
#[derive(Clone, Default)]
pub struct CaptureSink {
    entries: Arc<Mutex<Vec<Diagnostic>>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}

impl DiagnosticSink for CaptureSink {
    fn report(&self, severity: Severity, message: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(Diagnostic {
                severity,
                message: message.to_string(),
            });
        }
    }
}
