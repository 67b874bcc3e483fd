// Fri Jan 16 2026 - Alex

pub mod logger;
pub mod sink;

pub use logger::{CaptureSink, LogSink};
pub use sink::{report, set_sink, Diagnostic, DiagnosticSink, Severity, SinkError};
