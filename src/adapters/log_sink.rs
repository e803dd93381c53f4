//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the console logger (UART0 / USB-CDC in production).  The verdict line
//! stream never goes through here — it has its own UART, so a future
//! MQTT or host-protocol adapter could implement the same trait without
//! disturbing the wire protocol.

use log::info;

use crate::adapters::time::TimeAdapter;
use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the console.
pub struct LogEventSink {
    time: TimeAdapter,
}

impl LogEventSink {
    pub fn new() -> Self {
        Self {
            time: TimeAdapter::new(),
        }
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(verdict) => {
                info!("START | first_verdict={}", verdict);
            }
            AppEvent::VerdictChanged { from, to } => {
                info!("PROBE | {} -> {}", from, to);
            }
            AppEvent::Status(s) => {
                info!(
                    "STATUS | up={}s | verdict={} ({}) | cycles={} | transitions={} | dropped={}",
                    self.time.uptime_secs(),
                    s.verdict,
                    s.verdict.as_token(),
                    s.cycles,
                    s.transitions,
                    s.dropped_reports,
                );
            }
        }
    }
}
