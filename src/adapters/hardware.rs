//! Hardware probe adapters — bridge real pins to the [`ProbePort`] trait.
//!
//! Two implementations:
//!
//! - [`ProbeAdapter`] owns the [`ContinuitySensor`] and is what `main()`
//!   wires up.  On non-espidf targets the underlying sensor uses a
//!   cfg-gated simulation stub.
//! - [`InputPinProbe`] adapts any `embedded-hal` [`InputPin`], so the
//!   service can run against HAL pin drivers or host-side mock pins
//!   without touching this crate's GPIO helpers.

use embedded_hal::digital::InputPin;

use crate::app::ports::ProbePort;
use crate::error::SensorError;
use crate::sensors::ContinuitySensor;

/// Concrete adapter over the board's continuity sense input.
pub struct ProbeAdapter {
    sensor: ContinuitySensor,
}

impl ProbeAdapter {
    pub fn new(sensor: ContinuitySensor) -> Self {
        Self { sensor }
    }
}

impl ProbePort for ProbeAdapter {
    fn sample_level(&mut self) -> Result<bool, SensorError> {
        Ok(self.sensor.read_level())
    }
}

/// Adapter over any `embedded-hal` input pin.
pub struct InputPinProbe<P> {
    pin: P,
}

impl<P: InputPin> InputPinProbe<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P: InputPin> ProbePort for InputPinProbe<P> {
    fn sample_level(&mut self) -> Result<bool, SensorError> {
        self.pin.is_high().map_err(|_| SensorError::GpioReadFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::{Error, ErrorKind, ErrorType};

    #[derive(Debug)]
    struct PinFault;

    impl Error for PinFault {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    struct StubPin {
        level_high: bool,
        faulty: bool,
    }

    impl ErrorType for StubPin {
        type Error = PinFault;
    }

    impl InputPin for StubPin {
        fn is_high(&mut self) -> Result<bool, PinFault> {
            if self.faulty {
                Err(PinFault)
            } else {
                Ok(self.level_high)
            }
        }

        fn is_low(&mut self) -> Result<bool, PinFault> {
            self.is_high().map(|h| !h)
        }
    }

    #[test]
    fn hal_pin_level_passes_through() {
        let mut probe = InputPinProbe::new(StubPin {
            level_high: false,
            faulty: false,
        });
        assert_eq!(probe.sample_level(), Ok(false));
    }

    #[test]
    fn hal_pin_fault_maps_to_sensor_error() {
        let mut probe = InputPinProbe::new(StubPin {
            level_high: true,
            faulty: true,
        });
        assert_eq!(probe.sample_level(), Err(SensorError::GpioReadFailed));
    }
}
