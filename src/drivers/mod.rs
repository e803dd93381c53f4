//! Hardware peripheral drivers (ESP-IDF on device, no-op stubs on host).

pub mod hw_init;
pub mod watchdog;
