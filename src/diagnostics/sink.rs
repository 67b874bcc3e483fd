// Fri Jan 16 2026 - Alex

use std::fmt;

use once_cell::sync::OnceCell;
use thiserror::Error;

use crate::diagnostics::LogSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Info,
    Debug,
}

impl Severity {
    pub fn to_level(self) -> log::Level {
        match self {
            Severity::Error => log::Level::Error,
            Severity::Warning => log::Level::Warn,
            Severity::Info => log::Level::Info,
            Severity::Debug => log::Level::Debug,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Warning => write!(f, "WARN"),
            Severity::Info => write!(f, "INFO"),
            Severity::Debug => write!(f, "DEBUG"),
        }
    }
}

/// One advisory message as handed to the sink.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.severity, self.message)
    }
}

/// Receives advisory messages. Fire-and-forget: implementations must
/// not fail back into the caller.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, severity: Severity, message: &str);
}

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("a diagnostic sink is already installed")]
    AlreadyInstalled,
}

static SINK: OnceCell<Box<dyn DiagnosticSink>> = OnceCell::new();

/// Install the process-wide sink. First install wins; later attempts
/// fail and the first sink stays active.
pub fn set_sink(sink: Box<dyn DiagnosticSink>) -> Result<(), SinkError> {
    SINK.set(sink).map_err(|_| SinkError::AlreadyInstalled)
}

/// Dispatch to the installed sink, or to the `log` facade when the
/// host never installed one.
pub fn report(severity: Severity, message: &str) {
    match SINK.get() {
        Some(sink) => sink.report(severity, message),
        None => LogSink.report(severity, message),
    }
}


// The alignment-check tests own the process-wide sink when the
// check-cast-align feature is on, so the global installation path gets
// its coverage here only in the unchecked configuration.
#[cfg(all(test, not(feature = "check-cast-align")))]
mod install_tests {
    use super::*;
    use crate::diagnostics::CaptureSink;

    #[test]
    fn test_first_install_wins() {
        let capture = CaptureSink::new();
        set_sink(Box::new(capture.clone())).unwrap();
        assert!(matches!(
            set_sink(Box::new(CaptureSink::new())),
            Err(SinkError::AlreadyInstalled)
        ));

        report(Severity::Warning, "still routed to the first sink");
        let entries = capture.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].severity, Severity::Warning);
        assert_eq!(entries[0].message, "still routed to the first sink");
    }
}
