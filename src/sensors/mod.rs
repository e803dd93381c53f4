//! Sensor drivers (raw reads, no interpretation).

pub mod continuity;

pub use continuity::ContinuitySensor;
