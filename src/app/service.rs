//! Sampler service — the hexagonal core.
//!
//! [`SamplerService`] owns the per-cycle orchestration: sample the probe,
//! map the level to a verdict, push the verdict line, and surface state
//! changes as structured events.  All I/O flows through port traits
//! injected at call sites, making the entire service testable with mock
//! adapters.
//!
//! ```text
//!   ProbePort ──▶ ┌────────────────────────┐ ──▶ ReportSink (`0`/`1` lines)
//!                 │     SamplerService     │
//!                 │  level → verdict map   │ ──▶ EventSink  (structured log)
//!                 └────────────────────────┘
//! ```

use log::warn;

use crate::config::SystemConfig;

use super::events::{AppEvent, StatusReport};
use super::ports::{EventSink, ProbePort, ReportSink};
use super::verdict::Verdict;

/// Orchestrates the sample → map → report cycle.
pub struct SamplerService {
    config: SystemConfig,
    /// Verdict from the previous cycle, for change detection.
    /// `None` until the first sample.
    last_verdict: Option<Verdict>,
    cycle_count: u64,
    transition_count: u64,
    dropped_reports: u64,
    cycles_per_status: u64,
}

impl SamplerService {
    pub fn new(config: SystemConfig) -> Self {
        let cycles_per_status = config.cycles_per_status_report();
        Self {
            config,
            last_verdict: None,
            cycle_count: 0,
            transition_count: 0,
            dropped_reports: 0,
            cycles_per_status,
        }
    }

    /// Inter-cycle delay the main loop should honour.
    pub fn sample_interval_ms(&self) -> u32 {
        self.config.sample_interval_ms
    }

    /// Verdict from the most recent cycle, if any.
    pub fn current_verdict(&self) -> Option<Verdict> {
        self.last_verdict
    }

    /// Total cycles executed since start.
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    /// Run one full sample cycle: read probe → map → report → events.
    ///
    /// Returns the verdict for this cycle.  A probe read failure repeats
    /// the previous verdict (pull-up default `Open` before the first
    /// sample) so the output cadence of one line per cycle is preserved.
    pub fn tick(
        &mut self,
        probe: &mut impl ProbePort,
        report: &mut impl ReportSink,
        sink: &mut impl EventSink,
    ) -> Verdict {
        self.cycle_count += 1;

        // 1. Sample the sense pin.
        let verdict = match probe.sample_level() {
            Ok(level_high) => Verdict::from_level(level_high),
            Err(e) => {
                let fallback = self.last_verdict.unwrap_or(Verdict::Open);
                warn!("probe read failed ({}), repeating {}", e, fallback);
                fallback
            }
        };

        // 2. Push the verdict line.  Dropped output is accepted behavior
        //    (no host attached); count it for the status report.
        if let Err(e) = report.emit(verdict) {
            self.dropped_reports += 1;
            warn!("report dropped ({})", e);
        }

        // 3. Surface state changes.
        match self.last_verdict {
            None => sink.emit(&AppEvent::Started(verdict)),
            Some(prev) if prev != verdict => {
                self.transition_count += 1;
                sink.emit(&AppEvent::VerdictChanged {
                    from: prev,
                    to: verdict,
                });
            }
            Some(_) => {}
        }
        self.last_verdict = Some(verdict);

        // 4. Periodic status snapshot.
        if self.cycle_count % self.cycles_per_status == 0 {
            sink.emit(&AppEvent::Status(StatusReport {
                verdict,
                cycles: self.cycle_count,
                transitions: self.transition_count,
                dropped_reports: self.dropped_reports,
            }));
        }

        verdict
    }
}
