//! Panel geometry and the orientation transform
//!
//! Small panels are bonded onto a larger controller. The controller always
//! addresses its native coordinate space, so every rotation needs the
//! offset of the visible glass inside that space. Across the narrow axis
//! the glass is centered; along the long axis it is either centered or
//! flush with one edge, depending on the module (`y_centered`).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::backend::DisplayError;

/// Width and height of a pixel area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Extent {
    /// Pixels along x
    pub width: u16,
    /// Pixels along y
    pub height: u16,
}

impl Extent {
    /// Create an extent
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Physical properties of the panel glass, fixed for the driver's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HardwareExtent {
    /// Pixels along the controller's short axis
    pub width: u16,
    /// Pixels along the controller's long axis
    pub height: u16,
    /// Glass centered on the long axis (otherwise flush with its start)
    pub y_centered: bool,
}

impl HardwareExtent {
    /// Create a hardware extent
    pub const fn new(width: u16, height: u16, y_centered: bool) -> Self {
        Self {
            width,
            height,
            y_centered,
        }
    }

    /// Longer of both sides
    pub const fn long_side(&self) -> u16 {
        if self.width > self.height {
            self.width
        } else {
            self.height
        }
    }
}

/// The addressable pixel rectangle after rotation and centering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VisibleExtent {
    /// Logical width after rotation
    pub width: u16,
    /// Logical height after rotation
    pub height: u16,
    /// Offset of logical x = 0 in controller coordinates
    pub x_start: u16,
    /// Offset of logical y = 0 in controller coordinates
    pub y_start: u16,
}

/// Panel rotation, clockwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rotation {
    /// Native portrait orientation
    #[default]
    Deg0,
    /// Landscape, X/Y exchanged
    Deg90,
    /// Portrait, upside down
    Deg180,
    /// Landscape, upside down
    Deg270,
}

impl Rotation {
    /// All rotations in clockwise order
    pub const ALL: [Rotation; 4] = [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ];

    /// Angle in degrees
    pub const fn degrees(self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// The next rotation, 90° further clockwise
    pub const fn next(self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg90,
            Rotation::Deg90 => Rotation::Deg180,
            Rotation::Deg180 => Rotation::Deg270,
            Rotation::Deg270 => Rotation::Deg0,
        }
    }
}

impl TryFrom<u16> for Rotation {
    type Error = DisplayError;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Rotation::Deg0),
            90 => Ok(Rotation::Deg90),
            180 => Ok(Rotation::Deg180),
            270 => Ok(Rotation::Deg270),
            _ => Err(DisplayError::InvalidRotation),
        }
    }
}

/// Scan direction flags a backend encodes into its memory access mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisMode {
    /// Mirror the X axis
    pub mirror_x: bool,
    /// Mirror the Y axis
    pub mirror_y: bool,
    /// Exchange X and Y
    pub swap_xy: bool,
}

/// A rectangle in logical (rotated) coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Window {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Window {
    /// Create a window
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Number of pixels covered
    pub const fn pixel_count(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// Clip the window to the visible area, `None` if nothing remains
    pub fn clamp_to(&self, visible: &VisibleExtent) -> Option<Window> {
        if self.x >= visible.width || self.y >= visible.height {
            return None;
        }

        let width = self.width.min(visible.width - self.x);
        let height = self.height.min(visible.height - self.y);
        if width == 0 || height == 0 {
            return None;
        }

        Some(Window::new(self.x, self.y, width, height))
    }
}

/// Compute the visible extent and scan mode for a rotation
///
/// `native` is the controller's coordinate space in its unrotated
/// orientation. The per-rotation rounding is asymmetric on purpose: the
/// odd pixel of the narrow axis ends up on the same physical side in
/// every orientation.
pub fn orient(
    native: Extent,
    hardware: HardwareExtent,
    rotation: Rotation,
) -> (VisibleExtent, AxisMode) {
    let spare_x = native.width.saturating_sub(hardware.width);
    let spare_y = native.height.saturating_sub(hardware.height);

    let centered_y = spare_y / 2;
    let (leading_y, trailing_y) = if hardware.y_centered {
        (centered_y, centered_y)
    } else {
        (0, spare_y)
    };

    match rotation {
        Rotation::Deg0 => (
            VisibleExtent {
                width: hardware.width,
                height: hardware.height,
                x_start: spare_x / 2,
                y_start: leading_y,
            },
            AxisMode::default(),
        ),
        Rotation::Deg90 => (
            VisibleExtent {
                width: hardware.height,
                height: hardware.width,
                x_start: leading_y,
                y_start: (spare_x + 1) / 2,
            },
            AxisMode {
                mirror_x: true,
                mirror_y: false,
                swap_xy: true,
            },
        ),
        Rotation::Deg180 => (
            VisibleExtent {
                width: hardware.width,
                height: hardware.height,
                x_start: (spare_x + 1) / 2,
                y_start: trailing_y,
            },
            AxisMode {
                mirror_x: true,
                mirror_y: true,
                swap_xy: false,
            },
        ),
        Rotation::Deg270 => (
            VisibleExtent {
                width: hardware.height,
                height: hardware.width,
                x_start: trailing_y,
                y_start: spare_x / 2,
            },
            AxisMode {
                mirror_x: false,
                mirror_y: true,
                swap_xy: true,
            },
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const NATIVE: Extent = Extent::new(240, 320);

    #[test]
    fn test_full_panel_has_no_offsets() {
        let hw = HardwareExtent::new(240, 320, true);
        for rotation in Rotation::ALL {
            let (visible, _) = orient(NATIVE, hw, rotation);
            assert_eq!(visible.x_start, 0);
            assert_eq!(visible.y_start, 0);
        }
    }

    #[test]
    fn test_centered_135x240() {
        let hw = HardwareExtent::new(135, 240, true);

        let (v, mode) = orient(NATIVE, hw, Rotation::Deg0);
        assert_eq!((v.width, v.height, v.x_start, v.y_start), (135, 240, 52, 40));
        assert_eq!(mode, AxisMode::default());

        let (v, mode) = orient(NATIVE, hw, Rotation::Deg90);
        assert_eq!((v.width, v.height, v.x_start, v.y_start), (240, 135, 40, 53));
        assert!(mode.mirror_x && mode.swap_xy && !mode.mirror_y);

        let (v, mode) = orient(NATIVE, hw, Rotation::Deg180);
        assert_eq!((v.width, v.height, v.x_start, v.y_start), (135, 240, 53, 40));
        assert!(mode.mirror_x && mode.mirror_y && !mode.swap_xy);

        let (v, mode) = orient(NATIVE, hw, Rotation::Deg270);
        assert_eq!((v.width, v.height, v.x_start, v.y_start), (240, 135, 40, 52));
        assert!(!mode.mirror_x && mode.mirror_y && mode.swap_xy);
    }

    #[test]
    fn test_flush_240x280() {
        let hw = HardwareExtent::new(240, 280, false);

        let (v, _) = orient(NATIVE, hw, Rotation::Deg0);
        assert_eq!((v.x_start, v.y_start), (0, 0));

        let (v, _) = orient(NATIVE, hw, Rotation::Deg90);
        assert_eq!((v.x_start, v.y_start), (0, 0));

        let (v, _) = orient(NATIVE, hw, Rotation::Deg180);
        assert_eq!((v.x_start, v.y_start), (0, 40));

        let (v, _) = orient(NATIVE, hw, Rotation::Deg270);
        assert_eq!((v.x_start, v.y_start), (40, 0));
    }

    #[test]
    fn test_rotation_from_degrees() {
        assert_eq!(Rotation::try_from(0), Ok(Rotation::Deg0));
        assert_eq!(Rotation::try_from(270), Ok(Rotation::Deg270));
        assert_eq!(Rotation::try_from(45), Err(DisplayError::InvalidRotation));
        for rotation in Rotation::ALL {
            assert_eq!(Rotation::try_from(rotation.degrees()), Ok(rotation));
        }
    }

    #[test]
    fn test_window_clamp() {
        let visible = VisibleExtent {
            width: 240,
            height: 135,
            x_start: 40,
            y_start: 53,
        };

        assert_eq!(
            Window::new(200, 100, 100, 100).clamp_to(&visible),
            Some(Window::new(200, 100, 40, 35))
        );
        assert_eq!(Window::new(240, 0, 10, 10).clamp_to(&visible), None);
        assert_eq!(Window::new(0, 0, 0, 10).clamp_to(&visible), None);
        assert_eq!(
            Window::new(0, 0, 240, 135).clamp_to(&visible),
            Some(Window::new(0, 0, 240, 135))
        );
    }

    proptest! {
        #[test]
        fn prop_visible_extent_is_permutation(
            width in 1u16..=240,
            height in 1u16..=320,
            y_centered in any::<bool>(),
        ) {
            let hw = HardwareExtent::new(width, height, y_centered);
            for rotation in Rotation::ALL {
                let (v, mode) = orient(NATIVE, hw, rotation);
                if mode.swap_xy {
                    prop_assert_eq!((v.width, v.height), (height, width));
                } else {
                    prop_assert_eq!((v.width, v.height), (width, height));
                }

                // The visible rectangle stays inside the controller space
                let native = if mode.swap_xy {
                    Extent::new(NATIVE.height, NATIVE.width)
                } else {
                    NATIVE
                };
                prop_assert!(v.x_start + v.width <= native.width);
                prop_assert!(v.y_start + v.height <= native.height);
            }
        }

        #[test]
        fn prop_cycle_follows_offset_table(
            width in 1u16..=240,
            height in 1u16..=320,
            y_centered in any::<bool>(),
        ) {
            let hw = HardwareExtent::new(width, height, y_centered);
            let spare_x = 240 - width;
            let spare_y = 320 - height;
            let lead = if y_centered { spare_y / 2 } else { 0 };
            let trail = if y_centered { spare_y / 2 } else { spare_y };

            let (start, _) = orient(NATIVE, hw, Rotation::Deg0);
            let mut rotation = Rotation::Deg0;
            let mut visible = start;
            for _ in 0..4 {
                let expected = match rotation {
                    Rotation::Deg0 => (width, height, spare_x / 2, lead),
                    Rotation::Deg90 => (height, width, lead, (spare_x + 1) / 2),
                    Rotation::Deg180 => (width, height, (spare_x + 1) / 2, trail),
                    Rotation::Deg270 => (height, width, trail, spare_x / 2),
                };
                prop_assert_eq!(
                    (visible.width, visible.height, visible.x_start, visible.y_start),
                    expected
                );

                rotation = rotation.next();
                visible = orient(NATIVE, hw, rotation).0;
            }

            prop_assert_eq!(rotation, Rotation::Deg0);
            prop_assert_eq!(visible, start);
        }
    }
}
