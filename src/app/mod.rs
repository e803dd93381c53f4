//! Application core — hardware-agnostic sampling logic.

pub mod events;
pub mod ports;
pub mod service;
pub mod verdict;
