//! RGB565 colors

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 16 bit RGB color, 5:6:5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub const BLACK: Self = Self(0x0000);
    pub const WHITE: Self = Self(0xffff);
    pub const RED: Self = Self(0xf800);
    pub const GREEN: Self = Self(0x07e0);
    pub const BLUE: Self = Self(0x001f);
    pub const CYAN: Self = Self(0x07ff);
    pub const MAGENTA: Self = Self(0xf81f);
    pub const YELLOW: Self = Self(0xffe0);
    pub const ORANGE: Self = Self(0xfc00);

    /// Pack 8 bit channels, dropping the low bits
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u16 & 0xf8) << 8) | ((g as u16 & 0xfc) << 3) | (b as u16 >> 3))
    }

    /// The pixel as sent to the controller, most significant byte first
    pub const fn to_wire(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl From<u16> for Rgb565 {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgb() {
        assert_eq!(Rgb565::from_rgb(255, 0, 0), Rgb565::RED);
        assert_eq!(Rgb565::from_rgb(0, 255, 0), Rgb565::GREEN);
        assert_eq!(Rgb565::from_rgb(0, 0, 255), Rgb565::BLUE);
        assert_eq!(Rgb565::from_rgb(255, 255, 255), Rgb565::WHITE);
        assert_eq!(Rgb565::from_rgb(255, 128, 0), Rgb565::ORANGE);
    }

    #[test]
    fn test_wire_order_is_big_endian() {
        assert_eq!(Rgb565::ORANGE.to_wire(), [0xfc, 0x00]);
        assert_eq!(Rgb565(0x1234).to_wire(), [0x12, 0x34]);
    }
}
