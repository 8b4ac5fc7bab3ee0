//! SPI bus abstractions
//!
//! A display link is a write-only SPI master. Writes are queued: `write`
//! returns once the hardware (FIFO, DMA channel, ...) has accepted every
//! byte, while the tail may still be shifting out. [`SpiBus::is_busy`]
//! reports that tail so callers can overlap CPU work with the transfer.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// SPI bus master with session framing and queued writes
pub trait SpiBus {
    /// Error type for SPI operations
    type Error;

    /// Open a bus session with the given clock settings
    ///
    /// Called before the device is selected. Implementations sharing the
    /// bus with other devices lock and reconfigure it here.
    fn begin_transaction(&mut self, config: &SpiConfig);

    /// Queue bytes for transmission
    ///
    /// Returns when the hardware has accepted all of `data`; the bytes
    /// may still be in flight afterwards.
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Check whether previously queued bytes are still being transmitted
    fn is_busy(&mut self) -> bool;

    /// Close the bus session
    ///
    /// Called after the queue drained and before the device is deselected.
    fn end_transaction(&mut self);

    /// Spin until all queued bytes have been transmitted
    fn flush(&mut self) {
        while self.is_busy() {
            core::hint::spin_loop();
        }
    }
}

impl<T: SpiBus + ?Sized> SpiBus for &mut T {
    type Error = T::Error;

    fn begin_transaction(&mut self, config: &SpiConfig) {
        (**self).begin_transaction(config);
    }

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        (**self).write(data)
    }

    fn is_busy(&mut self) -> bool {
        (**self).is_busy()
    }

    fn end_transaction(&mut self) {
        (**self).end_transaction();
    }
}

/// SPI configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpiConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
    /// Clock polarity
    pub polarity: Polarity,
    /// Clock phase
    pub phase: Phase,
}

impl SpiConfig {
    /// Create a config from a clock frequency and a combined SPI mode
    pub const fn new(frequency: u32, mode: Mode) -> Self {
        let (polarity, phase) = mode.split();
        Self {
            frequency,
            polarity,
            phase,
        }
    }

    /// The combined SPI mode of this config
    pub const fn mode(&self) -> Mode {
        match (self.polarity, self.phase) {
            (Polarity::IdleLow, Phase::CaptureOnFirstTransition) => Mode::Mode0,
            (Polarity::IdleLow, Phase::CaptureOnSecondTransition) => Mode::Mode1,
            (Polarity::IdleHigh, Phase::CaptureOnFirstTransition) => Mode::Mode2,
            (Polarity::IdleHigh, Phase::CaptureOnSecondTransition) => Mode::Mode3,
        }
    }
}

impl Default for SpiConfig {
    fn default() -> Self {
        Self::new(1_000_000, Mode::Mode0) // 1 MHz
    }
}

/// SPI clock polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Polarity {
    /// Clock idles low (CPOL=0)
    IdleLow,
    /// Clock idles high (CPOL=1)
    IdleHigh,
}

/// SPI clock phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Phase {
    /// Data captured on first clock transition (CPHA=0)
    CaptureOnFirstTransition,
    /// Data captured on second clock transition (CPHA=1)
    CaptureOnSecondTransition,
}

/// SPI mode (combined polarity and phase)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Mode {
    /// Mode 0: CPOL=0, CPHA=0
    Mode0,
    /// Mode 1: CPOL=0, CPHA=1
    Mode1,
    /// Mode 2: CPOL=1, CPHA=0
    Mode2,
    /// Mode 3: CPOL=1, CPHA=1
    Mode3,
}

impl Mode {
    const fn split(self) -> (Polarity, Phase) {
        match self {
            Mode::Mode0 => (Polarity::IdleLow, Phase::CaptureOnFirstTransition),
            Mode::Mode1 => (Polarity::IdleLow, Phase::CaptureOnSecondTransition),
            Mode::Mode2 => (Polarity::IdleHigh, Phase::CaptureOnFirstTransition),
            Mode::Mode3 => (Polarity::IdleHigh, Phase::CaptureOnSecondTransition),
        }
    }
}

impl From<Mode> for (Polarity, Phase) {
    fn from(mode: Mode) -> Self {
        mode.split()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_round_trip() {
        for mode in [Mode::Mode0, Mode::Mode1, Mode::Mode2, Mode::Mode3] {
            assert_eq!(SpiConfig::new(8_000_000, mode).mode(), mode);
        }
    }

    #[test]
    fn test_mode2_idles_high() {
        let (polarity, phase) = Mode::Mode2.into();
        assert_eq!(polarity, Polarity::IdleHigh);
        assert_eq!(phase, Phase::CaptureOnFirstTransition);
    }

    #[test]
    fn test_default_config() {
        let config = SpiConfig::default();
        assert_eq!(config.frequency, 1_000_000);
        assert_eq!(config.mode(), Mode::Mode0);
    }
}
