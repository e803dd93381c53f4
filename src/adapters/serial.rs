//! UART report sink — the verdict line stream.
//!
//! Implements [`ReportSink`] over the dedicated report UART.  Each call
//! writes one complete line (`1\n` or `0\n`).  On non-espidf targets the
//! write is a no-op that still exercises the short-write accounting, so
//! host tests and simulation share the code path.

use crate::app::ports::ReportSink;
use crate::app::verdict::Verdict;
use crate::drivers::hw_init;
use crate::error::ReportError;

/// Adapter that pushes verdict lines out the report UART.
pub struct UartReportSink {
    lines_written: u64,
}

impl UartReportSink {
    pub fn new() -> Self {
        Self { lines_written: 0 }
    }

    /// Total lines the UART driver accepted in full.
    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }
}

impl Default for UartReportSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSink for UartReportSink {
    fn emit(&mut self, verdict: Verdict) -> Result<(), ReportError> {
        let line = verdict.as_line().as_bytes();
        let written = hw_init::uart_write(line);

        if written < 0 {
            return Err(ReportError::WriteFailed(written));
        }
        if written as usize != line.len() {
            return Err(ReportError::ShortWrite);
        }

        self.lines_written += 1;
        Ok(())
    }
}
