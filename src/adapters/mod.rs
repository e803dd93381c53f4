//! Adapters — implementations of the app's port traits over real
//! peripherals (or simulation stubs on host targets).

pub mod hardware;
pub mod log_sink;
pub mod serial;
pub mod time;
