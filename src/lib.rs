//! ContiSense firmware library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection.  All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;

mod error;
pub mod pins;

pub use error::{Error, ReportError, Result, SensorError};

// Hardware-facing modules; the device implementations are guarded by
// cfg attributes inside, host builds get simulation stubs.
pub mod adapters;
pub mod drivers;
pub mod sensors;
