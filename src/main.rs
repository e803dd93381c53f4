//! ContiSense Firmware — Main Entry Point
//!
//! Hexagonal architecture around one synchronous polling loop:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   Adapters (outer ring)                  │
//! │                                                          │
//! │  ProbeAdapter      UartReportSink     LogEventSink       │
//! │  (ProbePort)       (ReportSink)       (EventSink)        │
//! │                                                          │
//! │  ─────────────── Port Trait Boundary ─────────────────   │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │           SamplerService (pure logic)              │  │
//! │  │  level → verdict map · change detection · status   │  │
//! │  └────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Each iteration samples the pulled-up sense pin, writes one `1`/`0`
//! line to the report UART, and sleeps for the configured 5 ms.
#![deny(unused_must_use)]

use std::thread;
use std::time::Duration;

use anyhow::Result;
use log::info;

use contisense::adapters::hardware::ProbeAdapter;
use contisense::adapters::log_sink::LogEventSink;
use contisense::adapters::serial::UartReportSink;
use contisense::app::service::SamplerService;
use contisense::config::SystemConfig;
use contisense::drivers::watchdog::Watchdog;
use contisense::drivers;
use contisense::pins;
use contisense::sensors::ContinuitySensor;

fn main() -> Result<()> {
    // ── 1. Bootstrap ──────────────────────────────────────────
    #[cfg(target_os = "espidf")]
    {
        esp_idf_svc::sys::link_patches();
        esp_idf_logger::init()?;
    }

    info!("ContiSense v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration (compile-time defaults, no external surface) ──
    let config = SystemConfig::default();

    // ── 3. Initialise hardware peripherals ────────────────────
    if let Err(e) = drivers::hw_init::init_peripherals(config.report_baud) {
        // Peripheral init failure is critical — log and halt.
        // In production this triggers the watchdog reset after timeout.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }
    let watchdog = Watchdog::new();

    // ── 4. Construct adapters ─────────────────────────────────
    let mut probe = ProbeAdapter::new(ContinuitySensor::new(pins::CONTINUITY_GPIO));
    let mut report = UartReportSink::new();
    let mut log_sink = LogEventSink::new();

    // ── 5. Construct the sampler service ──────────────────────
    let mut sampler = SamplerService::new(config);
    let interval = Duration::from_millis(u64::from(sampler.sample_interval_ms()));

    info!(
        "Sampling GPIO{} every {}ms, reporting on UART{} at {} baud",
        pins::CONTINUITY_GPIO,
        sampler.sample_interval_ms(),
        pins::REPORT_UART_PORT,
        pins::REPORT_UART_BAUD,
    );

    // ── 6. Sampling loop ──────────────────────────────────────
    loop {
        sampler.tick(&mut probe, &mut report, &mut log_sink);

        // Feed watchdog on every iteration.
        watchdog.feed();

        // On ESP-IDF, std sleep maps to vTaskDelay; on host it is the
        // simulation tick.  Matches the original probe's 5 ms cadence.
        thread::sleep(interval);
    }
}
