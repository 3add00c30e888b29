//! Progress event reporting.
//!
//! The pipelines report every notable per-record step through a caller
//! supplied [`EventSink`]: one method, three severities. The sink is the only
//! reporting surface the core depends on; durable logging, display, and
//! persistence belong to the caller.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a pipeline event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Receiver for pipeline progress events.
///
/// Implementations must be thread-safe: the extraction pipeline emits from
/// concurrent worker tasks. Events for a single record arrive in order;
/// events of different records may interleave.
pub trait EventSink: Send + Sync {
    fn emit(&self, message: &str, severity: Severity);
}

/// Sink that forwards events to the `tracing` subscriber.
///
/// The default bridge for callers that already run a tracing stack and do
/// not need their own sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Info => tracing::info!(target: "cartorio::events", "{message}"),
            Severity::Warning => tracing::warn!(target: "cartorio::events", "{message}"),
            Severity::Error => tracing::error!(target: "cartorio::events", "{message}"),
        }
    }
}
