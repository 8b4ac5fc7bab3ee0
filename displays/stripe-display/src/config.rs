//! Display configuration
//!
//! Everything that is fixed for a given board: the glass dimensions and the
//! bus settings.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use stripe_hal::spi::{Mode, SpiConfig};

use crate::geometry::HardwareExtent;
use crate::ROW_HEIGHT;

/// Bus settings the ST7789 runs at: 60 MHz, mode 2
pub const ST7789_SPI: SpiConfig = SpiConfig::new(60_000_000, Mode::Mode2);

/// Board-level display configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Physical glass
    pub hardware: HardwareExtent,
    /// Bus session settings
    pub spi: SpiConfig,
}

impl DisplayConfig {
    /// An ST7789 module of the given size
    pub const fn st7789(hardware: HardwareExtent) -> Self {
        Self {
            hardware,
            spi: ST7789_SPI,
        }
    }

    /// Bytes the line buffer needs for this glass
    pub const fn line_buffer_len(&self) -> usize {
        line_buffer_len(self.hardware)
    }
}

impl Default for DisplayConfig {
    /// 135x240 module, centered in the controller
    fn default() -> Self {
        Self::st7789(HardwareExtent::new(135, 240, true))
    }
}

/// Bytes needed for one text band spanning the long side of the glass
pub const fn line_buffer_len(hardware: HardwareExtent) -> usize {
    hardware.long_side() as usize * ROW_HEIGHT as usize * 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_buffer_len() {
        assert_eq!(line_buffer_len(HardwareExtent::new(135, 240, true)), 240 * 60 * 2);
        assert_eq!(line_buffer_len(HardwareExtent::new(240, 240, false)), 240 * 60 * 2);
        assert_eq!(DisplayConfig::default().line_buffer_len(), 28_800);
    }

    #[test]
    fn test_st7789_bus() {
        let config = DisplayConfig::default();
        assert_eq!(config.spi.frequency, 60_000_000);
        assert_eq!(config.spi.mode(), Mode::Mode2);
    }
}
