// Fri Jan 16 2026 - Alex

//! Checked pointer reinterpretation for hosts that run on architectures
//! with differing tolerance for unaligned memory access.
//!
//! Some 32-bit CPUs trap on unaligned reads, and ARMv5 silently returns
//! wrong values; common desktop CPUs merely slow down. This crate gives
//! the host a single place to reinterpret a byte pointer as a structured
//! type, with two build-time switches:
//!
//! - `cast-via-void`: route every reinterpretation through an untyped
//!   pointer stage before the target type.
//! - `check-cast-align`: check each produced address against the target
//!   type's required alignment and report misses through the diagnostic
//!   sink. The check is advisory; the cast always completes and the
//!   address is returned unchanged. Build with this enabled periodically
//!   and run the host to find misaligned call sites.
//!
//! With both features off (the usual production configuration) the
//! operations compile down to bare pointer casts.

pub mod cast;
pub mod diagnostics;

pub use cast::{
    cast_field_to, cast_field_to_mut, cast_to, cast_to_mut, erase, erase_mut, Address, Alignment,
    CAST_VIA_VOID, CHECK_CAST_ALIGN,
};
pub use diagnostics::{
    set_sink, CaptureSink, Diagnostic, DiagnosticSink, LogSink, Severity, SinkError,
};
