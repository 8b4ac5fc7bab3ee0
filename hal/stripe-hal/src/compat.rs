//! Adapters for `embedded-hal` 1.0 peripherals
//!
//! Lets any HAL that implements the `embedded-hal` traits drive the panel
//! without a dedicated implementation. Writes through these adapters are
//! blocking, so the bus never reports busy and the driver's asynchronous
//! path degenerates to a synchronous one.

use core::convert::Infallible;

use crate::gpio::OutputPin;
use crate::spi::{SpiBus, SpiConfig};

/// Output pin adapter for infallible `embedded-hal` pins
pub struct Output<P> {
    pin: P,
}

impl<P> Output<P> {
    /// Wrap an `embedded-hal` output pin
    pub const fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Release the wrapped pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P> OutputPin for Output<P>
where
    P: embedded_hal::digital::OutputPin<Error = Infallible>,
{
    fn set_high(&mut self) {
        match self.pin.set_high() {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    fn set_low(&mut self) {
        match self.pin.set_low() {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }
}

/// Blocking SPI adapter for `embedded-hal` buses
///
/// The clock is configured when the underlying bus is created, so the
/// session settings are ignored.
pub struct BlockingSpi<B> {
    bus: B,
}

impl<B> BlockingSpi<B> {
    /// Wrap an `embedded-hal` SPI bus
    pub const fn new(bus: B) -> Self {
        Self { bus }
    }

    /// Release the wrapped bus
    pub fn into_inner(self) -> B {
        self.bus
    }
}

impl<B> SpiBus for BlockingSpi<B>
where
    B: embedded_hal::spi::SpiBus<u8>,
{
    type Error = B::Error;

    fn begin_transaction(&mut self, _config: &SpiConfig) {}

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.bus.write(data)?;
        self.bus.flush()
    }

    fn is_busy(&mut self) -> bool {
        false
    }

    fn end_transaction(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::spi::{ErrorKind, ErrorType};

    #[derive(Default)]
    struct RecordingBus {
        written: usize,
        flushes: usize,
        fail: bool,
    }

    impl ErrorType for RecordingBus {
        type Error = ErrorKind;
    }

    impl embedded_hal::spi::SpiBus<u8> for RecordingBus {
        fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
            if self.fail {
                return Err(ErrorKind::Overrun);
            }
            self.written += words.len();
            Ok(())
        }

        fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            self.flushes += 1;
            Ok(())
        }
    }

    struct Level(bool);

    impl embedded_hal::digital::ErrorType for Level {
        type Error = Infallible;
    }

    impl embedded_hal::digital::OutputPin for Level {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.0 = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.0 = true;
            Ok(())
        }
    }

    #[test]
    fn test_blocking_write_flushes() {
        let mut spi = BlockingSpi::new(RecordingBus::default());
        spi.begin_transaction(&SpiConfig::default());
        spi.write(&[1, 2, 3]).unwrap();
        assert!(!spi.is_busy());
        spi.end_transaction();

        let bus = spi.into_inner();
        assert_eq!(bus.written, 3);
        assert_eq!(bus.flushes, 1);
    }

    #[test]
    fn test_blocking_write_error() {
        let mut spi = BlockingSpi::new(RecordingBus {
            fail: true,
            ..Default::default()
        });
        assert_eq!(spi.write(&[0xAA]), Err(ErrorKind::Overrun));
    }

    #[test]
    fn test_output_pin() {
        let mut pin = Output::new(Level(false));
        pin.set_high();
        assert!(pin.pin.0);
        pin.set_state(false);
        assert!(!pin.into_inner().0);
    }
}
