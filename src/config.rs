//! System configuration parameters
//!
//! All tunable parameters for the ContiSense probe.  There is no external
//! configuration surface (no flags, files, or environment variables) — the
//! defaults below are the shipping values, matching the original probe
//! hardware.

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Sampling ---
    /// Inter-cycle delay between probe samples (milliseconds).
    pub sample_interval_ms: u32,

    // --- Report stream ---
    /// Symbol rate of the report UART.
    pub report_baud: u32,

    // --- Status logging ---
    /// Interval between periodic status reports on the console log (seconds).
    pub status_report_interval_secs: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // 200 Hz probe sampling
            sample_interval_ms: 5,

            // Host expects 9600 baud on the verdict stream
            report_baud: crate::pins::REPORT_UART_BAUD,

            // One status line per minute
            status_report_interval_secs: 60,
        }
    }
}

impl SystemConfig {
    /// Number of sample cycles per status report.
    pub fn cycles_per_status_report(&self) -> u64 {
        let cycles = u64::from(self.status_report_interval_secs) * 1000
            / u64::from(self.sample_interval_ms.max(1));
        cycles.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sane() {
        let c = SystemConfig::default();
        assert!(c.sample_interval_ms > 0);
        assert_eq!(c.report_baud, 9600);
        assert!(c.status_report_interval_secs > 0);
    }

    #[test]
    fn serde_roundtrip() {
        let c = SystemConfig::default();
        let json = serde_json::to_string(&c).unwrap();
        let c2: SystemConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c.sample_interval_ms, c2.sample_interval_ms);
        assert_eq!(c.report_baud, c2.report_baud);
        assert_eq!(
            c.status_report_interval_secs,
            c2.status_report_interval_secs
        );
    }

    #[test]
    fn postcard_roundtrip() {
        let c = SystemConfig::default();
        let bytes = postcard::to_allocvec(&c).unwrap();
        let c2: SystemConfig = postcard::from_bytes(&bytes).unwrap();
        assert_eq!(c.sample_interval_ms, c2.sample_interval_ms);
        assert_eq!(c.report_baud, c2.report_baud);
    }

    #[test]
    fn status_report_cadence() {
        let c = SystemConfig::default();
        // 60 s at 5 ms per cycle = 12 000 cycles between status lines.
        assert_eq!(c.cycles_per_status_report(), 12_000);

        let degenerate = SystemConfig {
            sample_interval_ms: 0,
            ..SystemConfig::default()
        };
        assert!(degenerate.cycles_per_status_report() >= 1);
    }
}
