//! Outbound application events.
//!
//! The [`SamplerService`](super::service::SamplerService) emits these through
//! the [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them — log to the console, publish over a
//! future host protocol, etc.  The verdict line stream itself does NOT go
//! through this path; it has its own [`ReportSink`](super::ports::ReportSink).

use super::verdict::Verdict;

/// Structured events emitted by the application core.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The sampler has started (carries the first verdict).
    Started(Verdict),

    /// The verdict changed between two consecutive cycles.
    VerdictChanged { from: Verdict, to: Verdict },

    /// Periodic status snapshot.
    Status(StatusReport),
}

/// A point-in-time status snapshot suitable for logging.
#[derive(Debug, Clone, Copy)]
pub struct StatusReport {
    pub verdict: Verdict,
    pub cycles: u64,
    pub transitions: u64,
    pub dropped_reports: u64,
}
