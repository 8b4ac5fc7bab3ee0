//! Sitronix ST7789 backend
//!
//! 240x320 RGB565 controller. Smaller glass is bonded into the controller's
//! address space, see [`crate::geometry::orient`] for the offsets.

use crate::backend::{run_sequence, CommandLink, DisplayError, InitStep, PanelBackend};
use crate::geometry::{orient, AxisMode, Extent, HardwareExtent, Rotation, VisibleExtent, Window};

/// ST7789 commands
pub mod cmd {
    pub const NOP: u8 = 0x00;
    pub const SWRESET: u8 = 0x01;
    pub const SLPIN: u8 = 0x10;
    pub const SLPOUT: u8 = 0x11;
    pub const NORON: u8 = 0x13;
    pub const INVOFF: u8 = 0x20;
    pub const INVON: u8 = 0x21;
    pub const DISPOFF: u8 = 0x28;
    pub const DISPON: u8 = 0x29;
    pub const CASET: u8 = 0x2a;
    pub const RASET: u8 = 0x2b;
    pub const RAMWR: u8 = 0x2c;
    pub const MADCTL: u8 = 0x36;
    pub const COLMOD: u8 = 0x3a;

    /// MADCTL bits
    pub const MADCTL_MY: u8 = 0x80;
    pub const MADCTL_MX: u8 = 0x40;
    pub const MADCTL_MV: u8 = 0x20;
    pub const MADCTL_ML: u8 = 0x10;
    pub const MADCTL_RGB: u8 = 0x00;
}

/// Power-on sequence
const RESET_SEQUENCE: [InitStep; 7] = [
    InitStep::new(cmd::SWRESET).delay(5),
    InitStep::new(cmd::SLPOUT),
    InitStep::new(cmd::COLMOD).args(&[0x55]), // 16 bit pixels
    InitStep::new(cmd::MADCTL).args(&[0x08]),
    InitStep::new(cmd::INVON),
    InitStep::new(cmd::NORON),
    InitStep::new(cmd::DISPON),
];

/// ST7789 panel
#[derive(Debug, Clone, Copy, Default)]
pub struct St7789;

impl St7789 {
    /// Controller address space
    pub const NATIVE: Extent = Extent::new(240, 320);

    pub const fn new() -> Self {
        Self
    }

    /// Switch the panel output on or off, keeping the frame memory
    pub fn set_enabled(&mut self, link: &mut dyn CommandLink, on: bool) -> Result<(), DisplayError> {
        link.write_command(if on { cmd::DISPON } else { cmd::DISPOFF }, &[])
    }

    /// Enter or leave sleep mode
    pub fn set_sleep(&mut self, link: &mut dyn CommandLink, on: bool) -> Result<(), DisplayError> {
        link.write_command(if on { cmd::SLPIN } else { cmd::SLPOUT }, &[])
    }
}

/// MADCTL byte for a scan mode, RGB order
pub const fn madctl(mode: AxisMode) -> u8 {
    let mut value = cmd::MADCTL_RGB;
    if mode.mirror_y {
        value |= cmd::MADCTL_MY;
    }
    if mode.mirror_x {
        value |= cmd::MADCTL_MX;
    }
    if mode.swap_xy {
        value |= cmd::MADCTL_MV;
    }
    value
}

/// Start and inclusive end address, most significant byte first
fn address_range(start: u16, len: u16) -> [u8; 4] {
    let end = start.saturating_add(len.saturating_sub(1));
    let [s_hi, s_lo] = start.to_be_bytes();
    let [e_hi, e_lo] = end.to_be_bytes();
    [s_hi, s_lo, e_hi, e_lo]
}

impl PanelBackend for St7789 {
    fn native(&self) -> Extent {
        Self::NATIVE
    }

    fn reset(&mut self, link: &mut dyn CommandLink) -> Result<(), DisplayError> {
        run_sequence(link, &RESET_SEQUENCE)
    }

    fn set_orientation(
        &mut self,
        link: &mut dyn CommandLink,
        hardware: HardwareExtent,
        rotation: Rotation,
    ) -> Result<VisibleExtent, DisplayError> {
        let (visible, mode) = orient(self.native(), hardware, rotation);
        link.write_command(cmd::MADCTL, &[madctl(mode)])?;
        Ok(visible)
    }

    fn set_window(
        &mut self,
        link: &mut dyn CommandLink,
        visible: &VisibleExtent,
        window: Window,
    ) -> Result<(), DisplayError> {
        let columns = address_range(window.x.saturating_add(visible.x_start), window.width);
        let rows = address_range(window.y.saturating_add(visible.y_start), window.height);

        link.write_command(cmd::CASET, &columns)?;
        link.write_command(cmd::RASET, &rows)?;
        link.write_command(cmd::RAMWR, &[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Script {
        log: Vec<(u8, Vec<u8>)>,
        delays: Vec<u32>,
    }

    impl CommandLink for Script {
        fn write_command(&mut self, command: u8, args: &[u8]) -> Result<(), DisplayError> {
            self.log.push((command, args.to_vec()));
            Ok(())
        }

        fn delay_ms(&mut self, ms: u32) {
            self.delays.push(ms);
        }
    }

    #[test]
    fn test_reset_sequence() {
        let mut link = Script::default();
        St7789::new().reset(&mut link).unwrap();

        let opcodes: Vec<u8> = link.log.iter().map(|(c, _)| *c).collect();
        assert_eq!(opcodes, [0x01, 0x11, 0x3a, 0x36, 0x21, 0x13, 0x29]);
        assert_eq!(link.log[2].1, [0x55]);
        assert_eq!(link.log[3].1, [0x08]);
        assert_eq!(link.delays, [5]);
    }

    #[test]
    fn test_madctl_per_rotation() {
        let hw = HardwareExtent::new(135, 240, true);
        let expected = [
            (Rotation::Deg0, 0x00),
            (Rotation::Deg90, 0x60),
            (Rotation::Deg180, 0xc0),
            (Rotation::Deg270, 0xa0),
        ];

        for (rotation, byte) in expected {
            let mut link = Script::default();
            let panel = &mut St7789::new();
            let visible = panel.set_orientation(&mut link, hw, rotation).unwrap();
            assert_eq!(link.log, [(cmd::MADCTL, vec![byte])]);
            assert_eq!(visible, orient(panel.native(), hw, rotation).0);
        }
    }

    #[test]
    fn test_window_framing() {
        let mut link = Script::default();
        let visible = VisibleExtent {
            width: 240,
            height: 135,
            x_start: 40,
            y_start: 53,
        };

        St7789::new()
            .set_window(&mut link, &visible, Window::new(10, 60, 220, 60))
            .unwrap();

        // x: 50..=269, y: 113..=172
        assert_eq!(
            link.log,
            [
                (cmd::CASET, vec![0x00, 50, 0x01, 0x0d]),
                (cmd::RASET, vec![0x00, 113, 0x00, 172]),
                (cmd::RAMWR, vec![]),
            ]
        );
    }

    #[test]
    fn test_power_commands() {
        let mut link = Script::default();
        let mut panel = St7789::new();
        panel.set_enabled(&mut link, false).unwrap();
        panel.set_enabled(&mut link, true).unwrap();
        panel.set_sleep(&mut link, true).unwrap();
        panel.set_sleep(&mut link, false).unwrap();

        let opcodes: Vec<u8> = link.log.iter().map(|(c, _)| *c).collect();
        assert_eq!(opcodes, [0x28, 0x29, 0x10, 0x11]);
    }

    #[test]
    fn test_usable_through_reference() {
        fn native_of(panel: impl PanelBackend) -> Extent {
            panel.native()
        }

        let mut panel = St7789::new();
        assert_eq!(native_of(&mut panel), Extent::new(240, 320));
        let dynamic: &mut dyn PanelBackend = &mut panel;
        assert_eq!(native_of(dynamic), Extent::new(240, 320));
    }
}
