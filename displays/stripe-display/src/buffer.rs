//! Offscreen pixel band
//!
//! One band of [`ROW_HEIGHT`] rows is composed here and streamed to the
//! controller in a single pixel write. Pixels are stored in wire order, so
//! the bytes go out untouched.

use crate::color::Rgb565;
use crate::font::{Font, Glyph};
use crate::ROW_HEIGHT;

/// A view of the line buffer as rows of `stride` pixels
pub struct LineBuffer<'a> {
    bytes: &'a mut [u8],
    stride: u16,
}

impl<'a> LineBuffer<'a> {
    /// Interpret `bytes` as rows of `stride` pixels
    pub fn new(bytes: &'a mut [u8], stride: u16) -> Self {
        Self { bytes, stride }
    }

    /// Pixels the buffer can hold
    pub fn capacity(&self) -> usize {
        self.bytes.len() / 2
    }

    /// Fill the first `pixels` slots with `color`
    ///
    /// Returns the number of slots written, at most [`capacity`](Self::capacity).
    pub fn fill(&mut self, color: Rgb565, pixels: usize) -> usize {
        let wire = color.to_wire();
        let mut written = 0;
        for slot in self.bytes.chunks_exact_mut(2).take(pixels) {
            slot.copy_from_slice(&wire);
            written += 1;
        }
        written
    }

    /// Clear one full band to `color`
    pub fn clear(&mut self, color: Rgb565) {
        self.fill(color, usize::from(self.stride) * usize::from(ROW_HEIGHT));
    }

    /// Paint a pixel, ignoring coordinates outside the band
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb565) {
        if x < 0 || y < 0 || x >= i32::from(self.stride) || y >= i32::from(ROW_HEIGHT) {
            return;
        }

        let index = (y as usize * usize::from(self.stride) + x as usize) * 2;
        if let Some(slot) = self.bytes.get_mut(index..index + 2) {
            slot.copy_from_slice(&color.to_wire());
        }
    }

    /// Composite a glyph with its pen at `pen_x` on the baseline
    ///
    /// Set bits paint `color`, clear bits leave the background alone.
    pub fn draw_glyph(&mut self, font: &Font, glyph: &Glyph, pen_x: u16, baseline: u16, color: Rgb565) {
        let left = i32::from(pen_x) + i32::from(glyph.x_start);
        let top = i32::from(baseline) + i32::from(glyph.y_start);

        for (ix, iy) in font.pixels(glyph) {
            self.set_pixel(left + i32::from(ix), top + i32::from(iy), color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::DEFAULT;
    use crate::BASELINE;

    fn pixel(bytes: &[u8], stride: usize, x: usize, y: usize) -> u16 {
        let i = (y * stride + x) * 2;
        u16::from_be_bytes([bytes[i], bytes[i + 1]])
    }

    #[test]
    fn test_fill_is_bounded() {
        let mut bytes = vec![0u8; 10];
        let mut buffer = LineBuffer::new(&mut bytes, 5);
        assert_eq!(buffer.capacity(), 5);
        assert_eq!(buffer.fill(Rgb565::ORANGE, 3), 3);
        assert_eq!(buffer.fill(Rgb565::ORANGE, 100), 5);
        assert_eq!(&bytes[..4], &[0xfc, 0x00, 0xfc, 0x00]);
    }

    #[test]
    fn test_clear_band() {
        let mut bytes = vec![0u8; 4 * 60 * 2 + 2];
        LineBuffer::new(&mut bytes, 4).clear(Rgb565::WHITE);
        assert!(bytes[..4 * 60 * 2].iter().all(|&b| b == 0xff));
        // Slack past the band is untouched
        assert_eq!(&bytes[4 * 60 * 2..], &[0, 0]);
    }

    #[test]
    fn test_set_pixel_clips() {
        let mut bytes = vec![0u8; 3 * 60 * 2];
        let mut buffer = LineBuffer::new(&mut bytes, 3);
        buffer.set_pixel(-1, 0, Rgb565::RED);
        buffer.set_pixel(3, 0, Rgb565::RED);
        buffer.set_pixel(0, 60, Rgb565::RED);
        buffer.set_pixel(0, -5, Rgb565::RED);
        assert!(bytes.iter().all(|&b| b == 0));

        let mut buffer = LineBuffer::new(&mut bytes, 3);
        buffer.set_pixel(2, 59, Rgb565::RED);
        assert_eq!(pixel(&bytes, 3, 2, 59), Rgb565::RED.0);
    }

    #[test]
    fn test_draw_glyph_on_baseline() {
        let stride = 40;
        let mut bytes = vec![0u8; stride * 60 * 2];
        let glyph = DEFAULT.glyph(b'H');
        {
            let mut buffer = LineBuffer::new(&mut bytes, stride as u16);
            buffer.clear(Rgb565::BLACK);
            buffer.draw_glyph(&DEFAULT, glyph, 0, BASELINE, Rgb565::WHITE);
        }

        // The left stem of 'H' spans from the cap height down to the baseline
        let x = glyph.x_start as usize;
        let top = (i32::from(BASELINE) + i32::from(glyph.y_start)) as usize;
        assert_eq!(pixel(&bytes, stride, x, top), Rgb565::WHITE.0);
        assert_eq!(pixel(&bytes, stride, x, usize::from(BASELINE) - 1), Rgb565::WHITE.0);
        assert_eq!(pixel(&bytes, stride, x, usize::from(BASELINE)), Rgb565::BLACK.0);
        assert_eq!(pixel(&bytes, stride, x, top - 1), Rgb565::BLACK.0);
    }

    #[test]
    fn test_draw_glyph_clipped_at_edge() {
        let stride = 10;
        let mut bytes = vec![0u8; stride * 60 * 2];
        let glyph = DEFAULT.glyph(b'W');
        let mut buffer = LineBuffer::new(&mut bytes, stride as u16);
        buffer.clear(Rgb565::BLACK);
        buffer.draw_glyph(&DEFAULT, glyph, 0, BASELINE, Rgb565::WHITE);
        // Wider than the band, still no out of bounds write
        assert_eq!(bytes.len(), stride * 60 * 2);
    }
}
