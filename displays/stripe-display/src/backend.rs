//! Panel backend trait
//!
//! Defines the interface to one controller's command set. The renderer
//! works in logical pixels and windows; a backend frames those as the
//! controller's opcodes. Backends never own the bus, they write through the
//! [`CommandLink`] of the transaction that is currently open.

use crate::geometry::{Extent, HardwareExtent, Rotation, VisibleExtent, Window};

/// Display driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// The bus reported a write failure
    Communication,
    /// Rotation angle other than 0, 90, 180 or 270 degrees
    InvalidRotation,
    /// Line buffer cannot hold one row band
    BufferTooSmall,
}

/// Command channel into the controller, valid while the bus is held
pub trait CommandLink {
    /// Send one opcode in command mode followed by its argument bytes
    fn write_command(&mut self, command: u8, args: &[u8]) -> Result<(), DisplayError>;

    /// Block for the given number of milliseconds
    fn delay_ms(&mut self, ms: u32);
}

/// One step of a controller initialization table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InitStep {
    /// Opcode
    pub command: u8,
    /// Argument bytes sent in data mode
    pub args: &'static [u8],
    /// Pause after the command, in milliseconds
    pub delay_ms: u8,
}

impl InitStep {
    /// A bare command
    pub const fn new(command: u8) -> Self {
        Self {
            command,
            args: &[],
            delay_ms: 0,
        }
    }

    /// Attach argument bytes
    pub const fn args(self, args: &'static [u8]) -> Self {
        Self { args, ..self }
    }

    /// Attach a pause after the command
    pub const fn delay(self, delay_ms: u8) -> Self {
        Self { delay_ms, ..self }
    }
}

/// Execute an initialization table in order
pub fn run_sequence(link: &mut dyn CommandLink, steps: &[InitStep]) -> Result<(), DisplayError> {
    for step in steps {
        link.write_command(step.command, step.args)?;
        if step.delay_ms > 0 {
            link.delay_ms(u32::from(step.delay_ms));
        }
    }
    Ok(())
}

/// Controller-specific command framing
///
/// Implementations translate the three primitives the renderer needs into
/// the controller's command sequences. All methods are called while the
/// transfer engine holds the bus.
pub trait PanelBackend {
    /// The controller's native coordinate space, unrotated
    fn native(&self) -> Extent;

    /// Bring the controller from power-on into a drawable state
    fn reset(&mut self, link: &mut dyn CommandLink) -> Result<(), DisplayError>;

    /// Program the scan direction for `rotation`
    ///
    /// Returns the resulting visible extent; see [`crate::geometry::orient`].
    fn set_orientation(
        &mut self,
        link: &mut dyn CommandLink,
        hardware: HardwareExtent,
        rotation: Rotation,
    ) -> Result<VisibleExtent, DisplayError>;

    /// Address `window` and arm the controller for a pixel write
    fn set_window(
        &mut self,
        link: &mut dyn CommandLink,
        visible: &VisibleExtent,
        window: Window,
    ) -> Result<(), DisplayError>;
}

impl<P: PanelBackend + ?Sized> PanelBackend for &mut P {
    fn native(&self) -> Extent {
        (**self).native()
    }

    fn reset(&mut self, link: &mut dyn CommandLink) -> Result<(), DisplayError> {
        (**self).reset(link)
    }

    fn set_orientation(
        &mut self,
        link: &mut dyn CommandLink,
        hardware: HardwareExtent,
        rotation: Rotation,
    ) -> Result<VisibleExtent, DisplayError> {
        (**self).set_orientation(link, hardware, rotation)
    }

    fn set_window(
        &mut self,
        link: &mut dyn CommandLink,
        visible: &VisibleExtent,
        window: Window,
    ) -> Result<(), DisplayError> {
        (**self).set_window(link, visible, window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Script {
        log: Vec<(u8, Vec<u8>)>,
        delays: Vec<u32>,
        fail_on: Option<u8>,
    }

    impl CommandLink for Script {
        fn write_command(&mut self, command: u8, args: &[u8]) -> Result<(), DisplayError> {
            if self.fail_on == Some(command) {
                return Err(DisplayError::Communication);
            }
            self.log.push((command, args.to_vec()));
            Ok(())
        }

        fn delay_ms(&mut self, ms: u32) {
            self.delays.push(ms);
        }
    }

    const STEPS: [InitStep; 3] = [
        InitStep::new(0x01).delay(5),
        InitStep::new(0x3a).args(&[0x55]),
        InitStep::new(0x29),
    ];

    #[test]
    fn test_run_sequence_in_order() {
        let mut script = Script::default();
        run_sequence(&mut script, &STEPS).unwrap();

        assert_eq!(
            script.log,
            [(0x01, Vec::new()), (0x3a, [0x55].to_vec()), (0x29, Vec::new())]
        );
        assert_eq!(script.delays, [5]);
    }

    #[test]
    fn test_run_sequence_stops_on_error() {
        let mut script = Script {
            fail_on: Some(0x3a),
            ..Default::default()
        };
        assert_eq!(
            run_sequence(&mut script, &STEPS),
            Err(DisplayError::Communication)
        );
        assert_eq!(script.log.len(), 1);
    }
}
