//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ SamplerService (domain)
//! ```
//!
//! Driven adapters (the probe input, the report UART, the console logger)
//! implement these traits.  The [`SamplerService`](super::service::SamplerService)
//! consumes them via generics, so the domain core never touches hardware
//! directly.

use crate::error::{ReportError, SensorError};

use super::events::AppEvent;
use super::verdict::Verdict;

// ───────────────────────────────────────────────────────────────
// Probe port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this to sample the sense input.
pub trait ProbePort {
    /// Instantaneous logical level of the sense pin.
    /// `true` = high (pull-up default), `false` = pulled low.
    fn sample_level(&mut self) -> Result<bool, SensorError>;
}

// ───────────────────────────────────────────────────────────────
// Report sink port (driven adapter: domain → serial stream)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain pushes one verdict line per cycle.
///
/// A failed write is reported but never fatal — if no host is attached
/// the output is simply dropped, which is accepted behavior.
pub trait ReportSink {
    /// Write the wire line for `verdict` to the output stream.
    fn emit(&mut self, verdict: Verdict) -> Result<(), ReportError>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`]s through this port.
/// Adapters decide where they go (console log today; MQTT or a host
/// protocol would implement the same trait).
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}
