//! Default tier, proportional sans, bold.
//!
//! Generated from the DejaVu fonts (Bitstream Vera derivative, free license).

use super::{Font, Glyph};

/// Default tier, proportional sans, bold.
pub static DEFAULT: Font = Font::new(&BITMAPS, &GLYPHS);

#[rustfmt::skip]
static BITMAPS: [u8; 5650] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xf7, 0xdf, 0x7c, 0x00, 0x00, 0xff,
    0xff, 0xff, 0xff, 0xf0, 0xf8, 0xff, 0x8f, 0xf8, 0xff, 0x8f, 0xf8, 0xff, 0x8f, 0xf8, 0xff, 0x8f,
    0xf8, 0xf7, 0x07, 0x00, 0x3c, 0x1c, 0x00, 0x0f, 0x0f, 0x00, 0x07, 0x83, 0xc0, 0x01, 0xe0, 0xf0,
    0x00, 0x78, 0x38, 0x00, 0x1e, 0x1e, 0x00, 0x0f, 0x07, 0x80, 0xff, 0xff, 0xff, 0x3f, 0xff, 0xff,
    0xcf, 0xff, 0xff, 0xf1, 0xff, 0xff, 0xfc, 0x07, 0x83, 0xc0, 0x01, 0xe0, 0xe0, 0x00, 0x78, 0x78,
    0x00, 0x3c, 0x1e, 0x01, 0xff, 0xff, 0xf8, 0xff, 0xff, 0xff, 0x3f, 0xff, 0xff, 0xcf, 0xff, 0xff,
    0xf0, 0x1e, 0x0f, 0x00, 0x07, 0x83, 0xc0, 0x01, 0xe1, 0xe0, 0x00, 0x70, 0x78, 0x00, 0x3c, 0x1e,
    0x00, 0x0f, 0x07, 0x80, 0x03, 0xc3, 0xc0, 0x00, 0x00, 0xe0, 0x00, 0x0e, 0x00, 0x00, 0xe0, 0x00,
    0x0e, 0x00, 0x0f, 0xff, 0x83, 0xff, 0xfc, 0x7f, 0xff, 0xcf, 0xff, 0xfc, 0xfc, 0xe0, 0xcf, 0xce,
    0x00, 0xfc, 0xe0, 0x0f, 0xce, 0x00, 0xff, 0xe0, 0x0f, 0xff, 0xe0, 0x7f, 0xff, 0x83, 0xff, 0xfc,
    0x0f, 0xff, 0xe0, 0x0f, 0xfe, 0x00, 0xe7, 0xf0, 0x0e, 0x3f, 0x00, 0xe3, 0xf8, 0x0e, 0x3f, 0xf8,
    0xe7, 0xef, 0xff, 0xfe, 0xff, 0xff, 0xcf, 0xff, 0xf8, 0x0f, 0xfc, 0x00, 0x0e, 0x00, 0x00, 0xe0,
    0x00, 0x0e, 0x00, 0x00, 0xe0, 0x00, 0x0e, 0x00, 0x07, 0x80, 0x01, 0xe0, 0x07, 0xfc, 0x00, 0x78,
    0x03, 0xff, 0x80, 0x3c, 0x01, 0xf3, 0xe0, 0x1e, 0x00, 0x78, 0x7c, 0x07, 0x80, 0x3e, 0x0f, 0x03,
    0xc0, 0x0f, 0x83, 0xc1, 0xe0, 0x03, 0xe0, 0xf0, 0x78, 0x00, 0xf8, 0x3c, 0x3c, 0x00, 0x3e, 0x0f,
    0x0f, 0x00, 0x07, 0x87, 0xc7, 0x80, 0x01, 0xfb, 0xe3, 0xc0, 0x00, 0x3f, 0xf0, 0xf0, 0x00, 0x07,
    0xf8, 0x78, 0x1e, 0x00, 0x38, 0x1e, 0x3f, 0xe0, 0x00, 0x0f, 0x1f, 0xfc, 0x00, 0x07, 0x87, 0xcf,
    0x80, 0x01, 0xe3, 0xe1, 0xe0, 0x00, 0xf0, 0xf8, 0x7c, 0x00, 0x3c, 0x3c, 0x1f, 0x00, 0x1e, 0x0f,
    0x07, 0xc0, 0x0f, 0x03, 0xc1, 0xf0, 0x03, 0xc0, 0xf8, 0x7c, 0x01, 0xe0, 0x3e, 0x1e, 0x00, 0x78,
    0x07, 0xff, 0x80, 0x3c, 0x00, 0xff, 0xc0, 0x1e, 0x00, 0x1f, 0xe0, 0x07, 0x00, 0x00, 0xc0, 0x00,
    0x3f, 0x00, 0x00, 0x3f, 0xfc, 0x00, 0x0f, 0xff, 0x80, 0x03, 0xff, 0xf0, 0x00, 0xff, 0xfe, 0x00,
    0x1f, 0xc0, 0x40, 0x03, 0xf0, 0x00, 0x00, 0x7f, 0x00, 0x00, 0x0f, 0xe0, 0x00, 0x00, 0xfe, 0x00,
    0x00, 0x1f, 0xe0, 0x00, 0x07, 0xfe, 0x03, 0xf1, 0xff, 0xe0, 0x7e, 0x7f, 0xfe, 0x0f, 0x9f, 0xdf,
    0xe1, 0xf3, 0xf1, 0xfc, 0x7e, 0xfe, 0x1f, 0xcf, 0xdf, 0x81, 0xff, 0xf3, 0xf0, 0x1f, 0xfe, 0x7e,
    0x01, 0xff, 0x8f, 0xe0, 0x3f, 0xe0, 0xfe, 0x03, 0xfc, 0x1f, 0xe0, 0xff, 0xc1, 0xff, 0xff, 0xfc,
    0x3f, 0xff, 0xff, 0xc1, 0xff, 0xfb, 0xfc, 0x1f, 0xfc, 0x3f, 0x80, 0x38, 0x00, 0x00, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xfb, 0x80, 0x07, 0xc3, 0xf0, 0xf8, 0x7e, 0x1f, 0x0f, 0xc3, 0xf0, 0xf8, 0x7e,
    0x1f, 0x87, 0xe3, 0xf0, 0xfc, 0x3f, 0x0f, 0xc3, 0xf0, 0xfc, 0x3f, 0x0f, 0xc3, 0xf0, 0x7e, 0x1f,
    0x87, 0xe1, 0xf8, 0x3e, 0x0f, 0xc1, 0xf0, 0x7e, 0x1f, 0x83, 0xe0, 0x7c, 0x1f, 0xfc, 0x1f, 0x07,
    0xe0, 0xf8, 0x3f, 0x0f, 0xc1, 0xf8, 0x7e, 0x1f, 0x83, 0xf0, 0xfc, 0x3f, 0x0f, 0xc3, 0xf0, 0xfc,
    0x3f, 0x0f, 0xc3, 0xf0, 0xfc, 0x3f, 0x0f, 0xc3, 0xf0, 0xf8, 0x7e, 0x1f, 0x87, 0xc3, 0xf0, 0xf8,
    0x7e, 0x1f, 0x0f, 0xc3, 0xe0, 0x01, 0xc0, 0x00, 0xe0, 0x00, 0x70, 0x08, 0x38, 0x2f, 0x1c, 0x7f,
    0xee, 0xfd, 0xff, 0xfc, 0x3f, 0xf8, 0x07, 0xf0, 0x07, 0xfc, 0x0f, 0xff, 0x9f, 0xbb, 0xff, 0x1c,
    0x7a, 0x0e, 0x18, 0x07, 0x00, 0x03, 0x80, 0x01, 0xc0, 0x00, 0x00, 0x78, 0x00, 0x01, 0xe0, 0x00,
    0x07, 0x80, 0x00, 0x1e, 0x00, 0x00, 0x78, 0x00, 0x01, 0xe0, 0x00, 0x07, 0x80, 0x00, 0x1e, 0x00,
    0x00, 0x78, 0x00, 0x01, 0xe0, 0x0f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xf0, 0x07, 0x80, 0x00, 0x1e, 0x00, 0x00, 0x78, 0x00, 0x01, 0xe0, 0x00, 0x07, 0x80, 0x00, 0x1e,
    0x00, 0x00, 0x78, 0x00, 0x01, 0xe0, 0x00, 0x07, 0x80, 0x00, 0x3f, 0x3f, 0x3f, 0x3f, 0x3f, 0x3f,
    0x7e, 0x7e, 0x7c, 0x78, 0xf8, 0xf0, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xc0, 0x00, 0x78, 0x03, 0xc0, 0x3c, 0x01, 0xe0, 0x0f, 0x00, 0xf0, 0x07, 0x80, 0x3c,
    0x01, 0xc0, 0x1e, 0x00, 0xf0, 0x07, 0x00, 0x78, 0x03, 0xc0, 0x1e, 0x01, 0xe0, 0x0f, 0x00, 0x78,
    0x07, 0x80, 0x3c, 0x01, 0xe0, 0x1e, 0x00, 0xf0, 0x07, 0x80, 0x38, 0x03, 0xc0, 0x1e, 0x00, 0xe0,
    0x0f, 0x00, 0x00, 0x00, 0xf8, 0x00, 0x3f, 0xf8, 0x03, 0xff, 0xe0, 0x3f, 0xff, 0x83, 0xff, 0xfe,
    0x3f, 0xc7, 0xf9, 0xfc, 0x1f, 0xcf, 0xc0, 0x7e, 0xfe, 0x03, 0xff, 0xf0, 0x1f, 0xff, 0x80, 0xff,
    0xfc, 0x07, 0xff, 0xe0, 0x3f, 0xff, 0x01, 0xff, 0xf8, 0x0f, 0xff, 0xc0, 0x7f, 0xfe, 0x03, 0xff,
    0xf0, 0x1f, 0xff, 0x80, 0xff, 0xfc, 0x07, 0xf7, 0xe0, 0x3f, 0x3f, 0x83, 0xf8, 0xfe, 0x3f, 0xc7,
    0xff, 0xfc, 0x1f, 0xff, 0xc0, 0x7f, 0xfc, 0x00, 0xff, 0x80, 0x00, 0xe0, 0x00, 0x3f, 0xf8, 0x1f,
    0xff, 0x03, 0xff, 0xe0, 0x7f, 0xfc, 0x0f, 0xff, 0x81, 0x07, 0xf0, 0x00, 0xfe, 0x00, 0x1f, 0xc0,
    0x03, 0xf8, 0x00, 0x7f, 0x00, 0x0f, 0xe0, 0x01, 0xfc, 0x00, 0x3f, 0x80, 0x07, 0xf0, 0x00, 0xfe,
    0x00, 0x1f, 0xc0, 0x03, 0xf8, 0x00, 0x7f, 0x00, 0x0f, 0xe0, 0x01, 0xfc, 0x00, 0x3f, 0x81, 0xff,
    0xff, 0xbf, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfc, 0x07, 0xf0, 0x0f, 0xff, 0xc3,
    0xff, 0xfc, 0x7f, 0xff, 0xcf, 0xff, 0xfd, 0xe0, 0x7f, 0xb0, 0x07, 0xf8, 0x00, 0x7f, 0x00, 0x0f,
    0xe0, 0x01, 0xfc, 0x00, 0x3f, 0x00, 0x0f, 0xe0, 0x03, 0xf8, 0x00, 0xff, 0x00, 0x3f, 0xc0, 0x0f,
    0xf0, 0x03, 0xfc, 0x00, 0xff, 0x00, 0x3f, 0x80, 0x0f, 0xe0, 0x03, 0xf8, 0x01, 0xfe, 0x00, 0x3f,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x80, 0x07, 0xf8, 0x03, 0xff,
    0xf0, 0x7f, 0xff, 0xc7, 0xff, 0xfe, 0x7f, 0xff, 0xe7, 0x01, 0xfe, 0x00, 0x0f, 0xf0, 0x00, 0x7f,
    0x00, 0x07, 0xe0, 0x00, 0xfe, 0x00, 0x1f, 0xe0, 0x7f, 0xfc, 0x07, 0xff, 0x00, 0x7f, 0xf8, 0x07,
    0xff, 0xc0, 0x7f, 0xfe, 0x00, 0x0f, 0xf0, 0x00, 0x7f, 0x00, 0x07, 0xf0, 0x00, 0x7f, 0x00, 0x07,
    0xf4, 0x00, 0x7f, 0xf8, 0x1f, 0xff, 0xff, 0xfe, 0xff, 0xff, 0xcf, 0xff, 0xf8, 0x7f, 0xfe, 0x00,
    0x3e, 0x00, 0x00, 0x1f, 0xe0, 0x00, 0x7f, 0xc0, 0x01, 0xff, 0x80, 0x03, 0xff, 0x00, 0x0f, 0xfe,
    0x00, 0x3f, 0xfc, 0x00, 0x7f, 0xf8, 0x01, 0xf7, 0xf0, 0x07, 0xcf, 0xe0, 0x0f, 0x1f, 0xc0, 0x3e,
    0x3f, 0x80, 0xf8, 0x7f, 0x01, 0xe0, 0xfe, 0x07, 0xc1, 0xfc, 0x1f, 0x03, 0xf8, 0x3c, 0x07, 0xf0,
    0xff, 0xff, 0xfd, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xe0, 0x01,
    0xfc, 0x00, 0x03, 0xf8, 0x00, 0x07, 0xf0, 0x00, 0x0f, 0xe0, 0x00, 0x1f, 0xc0, 0x7f, 0xff, 0xc7,
    0xff, 0xfc, 0x7f, 0xff, 0xc7, 0xff, 0xfc, 0x7f, 0xff, 0xc7, 0xc0, 0x00, 0x7c, 0x00, 0x07, 0xc0,
    0x00, 0x7d, 0xf0, 0x07, 0xff, 0xe0, 0x7f, 0xff, 0x87, 0xff, 0xfc, 0x7f, 0xff, 0xc7, 0x03, 0xfe,
    0x00, 0x0f, 0xe0, 0x00, 0xfe, 0x00, 0x07, 0xf0, 0x00, 0x7f, 0x00, 0x07, 0xf0, 0x00, 0xfe, 0xc0,
    0x0f, 0xef, 0x83, 0xfe, 0xff, 0xff, 0xcf, 0xff, 0xf8, 0xff, 0xff, 0x03, 0xff, 0xc0, 0x03, 0xc0,
    0x00, 0x00, 0x3f, 0x00, 0x0f, 0xff, 0x01, 0xff, 0xfc, 0x1f, 0xff, 0xe1, 0xff, 0xff, 0x1f, 0xe0,
    0x38, 0xfe, 0x00, 0x0f, 0xe0, 0x00, 0x7e, 0x00, 0x03, 0xf0, 0x00, 0x1f, 0xbf, 0xc1, 0xff, 0xff,
    0x8f, 0xff, 0xfe, 0x7f, 0xff, 0xfb, 0xfe, 0x1f, 0xdf, 0xe0, 0x7f, 0xff, 0x03, 0xff, 0xf8, 0x1f,
    0xdf, 0xc0, 0xfe, 0xfe, 0x07, 0xf7, 0xf0, 0x3f, 0xbf, 0x81, 0xfc, 0xfe, 0x1f, 0xc3, 0xff, 0xfe,
    0x1f, 0xff, 0xe0, 0x7f, 0xfe, 0x00, 0xff, 0xc0, 0x00, 0x70, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0x7f, 0xff, 0xf0, 0x00, 0x7e, 0x00, 0x0f, 0xe0, 0x00, 0xfc, 0x00,
    0x1f, 0xc0, 0x01, 0xfc, 0x00, 0x3f, 0x80, 0x03, 0xf8, 0x00, 0x7f, 0x00, 0x07, 0xf0, 0x00, 0x7e,
    0x00, 0x0f, 0xe0, 0x00, 0xfc, 0x00, 0x1f, 0xc0, 0x01, 0xf8, 0x00, 0x3f, 0x80, 0x03, 0xf8, 0x00,
    0x7f, 0x00, 0x07, 0xf0, 0x00, 0xfe, 0x00, 0x0f, 0xe0, 0x00, 0xfc, 0x00, 0x01, 0xfc, 0x00, 0x7f,
    0xfc, 0x07, 0xff, 0xf0, 0x7f, 0xff, 0xc7, 0xff, 0xff, 0x3f, 0x83, 0xf9, 0xf8, 0x0f, 0xcf, 0xc0,
    0x7e, 0x7e, 0x03, 0xf3, 0xf8, 0x3f, 0x8f, 0xe3, 0xf8, 0x3f, 0xff, 0x80, 0xff, 0xf8, 0x07, 0xff,
    0xc0, 0xff, 0xff, 0x8f, 0xf1, 0xfe, 0x7e, 0x03, 0xf7, 0xf0, 0x1f, 0xff, 0x80, 0xff, 0xfc, 0x07,
    0xff, 0xe0, 0x3f, 0xff, 0x01, 0xfd, 0xfc, 0x1f, 0xcf, 0xff, 0xfe, 0x3f, 0xff, 0xe0, 0xff, 0xfe,
    0x03, 0xff, 0xe0, 0x01, 0xf0, 0x00, 0x01, 0xf0, 0x00, 0x7f, 0xf0, 0x07, 0xff, 0xe0, 0x7f, 0xff,
    0x87, 0xff, 0xfc, 0x3f, 0x87, 0xf3, 0xf8, 0x1f, 0xdf, 0xc0, 0xfe, 0xfe, 0x07, 0xf7, 0xf0, 0x3f,
    0xbf, 0x81, 0xff, 0xfc, 0x0f, 0xff, 0xe0, 0x7f, 0xbf, 0xcf, 0xfd, 0xff, 0xff, 0xe7, 0xff, 0xff,
    0x1f, 0xff, 0xf8, 0x3f, 0x9f, 0x80, 0x00, 0xfc, 0x00, 0x07, 0xe0, 0x00, 0x7f, 0x00, 0x07, 0xf1,
    0xc0, 0x7f, 0x0f, 0xff, 0xf8, 0x7f, 0xff, 0x83, 0xff, 0xf8, 0x0f, 0xff, 0x00, 0x07, 0x80, 0x00,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xc0, 0x00, 0x00, 0x00, 0x03, 0xff, 0xff, 0xff, 0xff, 0xff, 0x3f,
    0x3f, 0x3f, 0x3f, 0x3f, 0x3f, 0x3f, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3f, 0x3f, 0x3f, 0x3f,
    0x3f, 0x3f, 0x3f, 0x7e, 0x7c, 0x7c, 0x78, 0xf0, 0x00, 0x00, 0x0c, 0x00, 0x01, 0xf0, 0x00, 0x3f,
    0xc0, 0x07, 0xff, 0x00, 0xff, 0xf8, 0x0f, 0xff, 0x01, 0xff, 0xe0, 0x3f, 0xfc, 0x00, 0xff, 0x80,
    0x03, 0xf0, 0x00, 0x0f, 0xf0, 0x00, 0x3f, 0xf8, 0x00, 0x3f, 0xf8, 0x00, 0x1f, 0xfc, 0x00, 0x1f,
    0xfe, 0x00, 0x0f, 0xff, 0x00, 0x07, 0xfc, 0x00, 0x03, 0xf0, 0x00, 0x03, 0xc0, 0x00, 0x01, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xe0, 0x00, 0x03, 0xe0, 0x00, 0x0f, 0xf0, 0x00, 0x3f, 0xf8, 0x00, 0x3f, 0xfc, 0x00, 0x3f, 0xfc,
    0x00, 0x1f, 0xfe, 0x00, 0x0f, 0xff, 0x00, 0x07, 0xfc, 0x00, 0x03, 0xf0, 0x00, 0x1f, 0xc0, 0x03,
    0xff, 0x00, 0x7f, 0xf0, 0x0f, 0xff, 0x01, 0xff, 0xe0, 0x3f, 0xfc, 0x00, 0xff, 0x80, 0x03, 0xf8,
    0x00, 0x0f, 0x00, 0x00, 0x20, 0x00, 0x00, 0x07, 0xe0, 0x3f, 0xfe, 0x3f, 0xff, 0x9f, 0xff, 0xef,
    0xff, 0xf7, 0x83, 0xfb, 0x00, 0xfe, 0x00, 0x7f, 0x00, 0x3f, 0x00, 0x3f, 0x80, 0x1f, 0xc0, 0x1f,
    0xc0, 0x3f, 0xc0, 0x1f, 0xc0, 0x1f, 0xc0, 0x1f, 0xc0, 0x0f, 0xe0, 0x07, 0xf0, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x7f, 0x00, 0x3f, 0x80, 0x1f, 0xc0, 0x0f, 0xe0, 0x07, 0xf0, 0x03, 0xf8,
    0x00, 0x00, 0x1f, 0xfc, 0x00, 0x00, 0x7f, 0xff, 0x00, 0x01, 0xff, 0xff, 0xc0, 0x03, 0xf8, 0x0f,
    0xe0, 0x07, 0xc0, 0x01, 0xf0, 0x0f, 0x80, 0x00, 0xf8, 0x1e, 0x00, 0x00, 0x7c, 0x3c, 0x00, 0x00,
    0x3c, 0x3c, 0x0f, 0xcf, 0x1e, 0x78, 0x1f, 0xff, 0x1e, 0x78, 0x3f, 0xff, 0x0e, 0x70, 0x7c, 0x3f,
    0x0e, 0x70, 0x78, 0x1f, 0x0f, 0xf0, 0x78, 0x1f, 0x0f, 0xf0, 0x78, 0x1f, 0x0f, 0xf0, 0xf8, 0x1f,
    0x0e, 0xf0, 0x78, 0x1f, 0x0e, 0xf0, 0x78, 0x1f, 0x1e, 0x70, 0x78, 0x1f, 0x1c, 0x70, 0x7c, 0x3f,
    0x7c, 0x78, 0x3f, 0xff, 0xf8, 0x78, 0x1f, 0xff, 0xf0, 0x3c, 0x0f, 0xef, 0xc0, 0x3e, 0x01, 0x0c,
    0x00, 0x1e, 0x00, 0x00, 0x00, 0x0f, 0x80, 0x00, 0x80, 0x07, 0xc0, 0x03, 0xc0, 0x03, 0xf8, 0x1f,
    0xc0, 0x01, 0xff, 0xff, 0x80, 0x00, 0x7f, 0xff, 0x00, 0x00, 0x1f, 0xf8, 0x00, 0x00, 0x3f, 0xc0,
    0x00, 0x07, 0xfe, 0x00, 0x00, 0x7f, 0xe0, 0x00, 0x0f, 0xfe, 0x00, 0x00, 0xff, 0xf0, 0x00, 0x0f,
    0xff, 0x00, 0x01, 0xff, 0xf0, 0x00, 0x1f, 0xbf, 0x80, 0x01, 0xf9, 0xf8, 0x00, 0x3f, 0x9f, 0xc0,
    0x03, 0xf0, 0xfc, 0x00, 0x3f, 0x0f, 0xc0, 0x07, 0xf0, 0xfe, 0x00, 0x7e, 0x07, 0xe0, 0x0f, 0xe0,
    0x7e, 0x00, 0xfe, 0x07, 0xf0, 0x0f, 0xff, 0xff, 0x01, 0xff, 0xff, 0xf8, 0x1f, 0xff, 0xff, 0x81,
    0xff, 0xff, 0xf8, 0x3f, 0xff, 0xff, 0xc3, 0xf8, 0x01, 0xfc, 0x7f, 0x00, 0x0f, 0xc7, 0xf0, 0x00,
    0xfe, 0x7f, 0x00, 0x0f, 0xef, 0xe0, 0x00, 0x7f, 0xff, 0xff, 0x03, 0xff, 0xff, 0x8f, 0xff, 0xff,
    0x3f, 0xff, 0xfc, 0xfe, 0x0f, 0xfb, 0xf8, 0x0f, 0xef, 0xe0, 0x3f, 0xbf, 0x80, 0xfe, 0xfe, 0x03,
    0xfb, 0xf8, 0x1f, 0xcf, 0xff, 0xff, 0x3f, 0xff, 0xf0, 0xff, 0xff, 0xe3, 0xff, 0xff, 0xcf, 0xff,
    0xff, 0xbf, 0x80, 0xfe, 0xfe, 0x01, 0xff, 0xf8, 0x07, 0xff, 0xe0, 0x1f, 0xff, 0x80, 0x7f, 0xfe,
    0x03, 0xff, 0xff, 0xff, 0xef, 0xff, 0xff, 0xbf, 0xff, 0xfc, 0xff, 0xff, 0xe3, 0xff, 0xfc, 0x00,
    0x00, 0x1f, 0x80, 0x07, 0xff, 0xe0, 0x7f, 0xff, 0xc3, 0xff, 0xff, 0x1f, 0xff, 0xfc, 0xff, 0xc1,
    0xf3, 0xfc, 0x00, 0xdf, 0xe0, 0x00, 0x7f, 0x00, 0x03, 0xfc, 0x00, 0x0f, 0xe0, 0x00, 0x3f, 0x80,
    0x00, 0xfe, 0x00, 0x03, 0xf8, 0x00, 0x0f, 0xe0, 0x00, 0x3f, 0x80, 0x00, 0xfe, 0x00, 0x03, 0xf8,
    0x00, 0x0f, 0xf0, 0x00, 0x1f, 0xc0, 0x00, 0x7f, 0x80, 0x04, 0xff, 0x00, 0x33, 0xff, 0xff, 0xc7,
    0xff, 0xff, 0x0f, 0xff, 0xfc, 0x0f, 0xff, 0xf0, 0x0f, 0xff, 0x00, 0x03, 0xc0, 0xff, 0xff, 0x00,
    0x7f, 0xff, 0xf0, 0x3f, 0xff, 0xfc, 0x1f, 0xff, 0xff, 0x0f, 0xff, 0xff, 0xc7, 0xf0, 0x3f, 0xf3,
    0xf8, 0x07, 0xfd, 0xfc, 0x01, 0xfe, 0xfe, 0x00, 0x7f, 0x7f, 0x00, 0x3f, 0xff, 0x80, 0x0f, 0xff,
    0xc0, 0x07, 0xff, 0xe0, 0x03, 0xff, 0xf0, 0x01, 0xff, 0xf8, 0x00, 0xff, 0xfc, 0x00, 0x7f, 0xfe,
    0x00, 0x7f, 0xff, 0x00, 0x3f, 0xbf, 0x80, 0x3f, 0xdf, 0xc0, 0x3f, 0xef, 0xe0, 0x7f, 0xe7, 0xff,
    0xff, 0xe3, 0xff, 0xff, 0xe1, 0xff, 0xff, 0xe0, 0xff, 0xff, 0xc0, 0x7f, 0xff, 0x00, 0x00, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfd, 0xfc, 0x00, 0x3f, 0x80, 0x07,
    0xf0, 0x00, 0xfe, 0x00, 0x1f, 0xc0, 0x03, 0xff, 0xff, 0x7f, 0xff, 0xef, 0xff, 0xfd, 0xff, 0xff,
    0xbf, 0xff, 0xf7, 0xf0, 0x00, 0xfe, 0x00, 0x1f, 0xc0, 0x03, 0xf8, 0x00, 0x7f, 0x00, 0x0f, 0xe0,
    0x01, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfc, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfd, 0xfc, 0x00, 0x3f, 0x80, 0x07, 0xf0, 0x00,
    0xfe, 0x00, 0x1f, 0xc0, 0x03, 0xff, 0xff, 0x7f, 0xff, 0xef, 0xff, 0xfd, 0xff, 0xff, 0xbf, 0xff,
    0xf7, 0xf0, 0x00, 0xfe, 0x00, 0x1f, 0xc0, 0x03, 0xf8, 0x00, 0x7f, 0x00, 0x0f, 0xe0, 0x01, 0xfc,
    0x00, 0x3f, 0x80, 0x07, 0xf0, 0x00, 0xfe, 0x00, 0x1f, 0xc0, 0x00, 0x00, 0x1f, 0xc0, 0x00, 0xff,
    0xfe, 0x00, 0xff, 0xff, 0xc1, 0xff, 0xff, 0xe1, 0xff, 0xff, 0xf1, 0xff, 0xc1, 0xf8, 0xff, 0x00,
    0x1c, 0xff, 0x00, 0x00, 0x7f, 0x00, 0x00, 0x7f, 0x80, 0x00, 0x3f, 0x80, 0x00, 0x1f, 0xc0, 0x00,
    0x0f, 0xe0, 0x1f, 0xff, 0xf0, 0x1f, 0xff, 0xf8, 0x0f, 0xff, 0xfc, 0x07, 0xff, 0xfe, 0x03, 0xff,
    0xff, 0x00, 0x1f, 0xff, 0xc0, 0x0f, 0xef, 0xe0, 0x07, 0xf7, 0xf8, 0x03, 0xf9, 0xfe, 0x01, 0xfc,
    0xff, 0xff, 0xfe, 0x3f, 0xff, 0xff, 0x0f, 0xff, 0xff, 0x81, 0xff, 0xff, 0x80, 0x3f, 0xfe, 0x00,
    0x01, 0xe0, 0x00, 0xfe, 0x00, 0x7f, 0xfe, 0x00, 0x7f, 0xfe, 0x00, 0x7f, 0xfe, 0x00, 0x7f, 0xfe,
    0x00, 0x7f, 0xfe, 0x00, 0x7f, 0xfe, 0x00, 0x7f, 0xfe, 0x00, 0x7f, 0xfe, 0x00, 0x7f, 0xfe, 0x00,
    0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xfe, 0x00, 0x7f, 0xfe, 0x00, 0x7f, 0xfe, 0x00, 0x7f, 0xfe, 0x00, 0x7f, 0xfe, 0x00, 0x7f, 0xfe,
    0x00, 0x7f, 0xfe, 0x00, 0x7f, 0xfe, 0x00, 0x7f, 0xfe, 0x00, 0x7f, 0xfe, 0x00, 0x7f, 0xfe, 0x00,
    0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfc, 0x07, 0xf0, 0x7f, 0x07, 0xf0, 0x7f, 0x07, 0xf0,
    0x7f, 0x07, 0xf0, 0x7f, 0x07, 0xf0, 0x7f, 0x07, 0xf0, 0x7f, 0x07, 0xf0, 0x7f, 0x07, 0xf0, 0x7f,
    0x07, 0xf0, 0x7f, 0x07, 0xf0, 0x7f, 0x07, 0xf0, 0x7f, 0x07, 0xf0, 0x7f, 0x07, 0xf0, 0x7f, 0x0f,
    0xf1, 0xfe, 0xff, 0xef, 0xfe, 0xff, 0xcf, 0xf8, 0xfc, 0x00, 0xfe, 0x00, 0xff, 0x7f, 0x00, 0xff,
    0x3f, 0x80, 0xff, 0x1f, 0xc0, 0xff, 0x0f, 0xe0, 0xff, 0x07, 0xf0, 0xff, 0x03, 0xf8, 0xff, 0x01,
    0xfc, 0xff, 0x00, 0xfe, 0xff, 0x00, 0x7f, 0xff, 0x00, 0x3f, 0xff, 0x00, 0x1f, 0xff, 0x00, 0x0f,
    0xff, 0x00, 0x07, 0xff, 0xc0, 0x03, 0xff, 0xf0, 0x01, 0xff, 0xfc, 0x00, 0xfe, 0xff, 0x00, 0x7f,
    0x3f, 0xc0, 0x3f, 0x8f, 0xf0, 0x1f, 0xc3, 0xfc, 0x0f, 0xe0, 0xff, 0x07, 0xf0, 0x3f, 0xc3, 0xf8,
    0x0f, 0xf1, 0xfc, 0x03, 0xfc, 0xfe, 0x00, 0xff, 0x7f, 0x00, 0x3f, 0xc0, 0xfe, 0x00, 0x1f, 0xc0,
    0x03, 0xf8, 0x00, 0x7f, 0x00, 0x0f, 0xe0, 0x01, 0xfc, 0x00, 0x3f, 0x80, 0x07, 0xf0, 0x00, 0xfe,
    0x00, 0x1f, 0xc0, 0x03, 0xf8, 0x00, 0x7f, 0x00, 0x0f, 0xe0, 0x01, 0xfc, 0x00, 0x3f, 0x80, 0x07,
    0xf0, 0x00, 0xfe, 0x00, 0x1f, 0xc0, 0x03, 0xf8, 0x00, 0x7f, 0x00, 0x0f, 0xe0, 0x01, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfc, 0xff, 0x80, 0x07, 0xff, 0xff, 0x00,
    0x3f, 0xff, 0xfc, 0x00, 0xff, 0xff, 0xf8, 0x07, 0xff, 0xff, 0xe0, 0x1f, 0xff, 0xff, 0x80, 0xff,
    0xff, 0xff, 0x03, 0xff, 0xff, 0xfc, 0x0f, 0xff, 0xff, 0xf8, 0x7d, 0xff, 0xfb, 0xe1, 0xf7, 0xff,
    0xef, 0xcf, 0xdf, 0xff, 0x9f, 0x3e, 0x7f, 0xfe, 0x7d, 0xf9, 0xff, 0xf8, 0xff, 0xc7, 0xff, 0xe3,
    0xff, 0x1f, 0xff, 0x8f, 0xf8, 0x7f, 0xfe, 0x1f, 0xe1, 0xff, 0xf8, 0x7f, 0x87, 0xff, 0xe0, 0xfc,
    0x1f, 0xff, 0x83, 0xf0, 0x7f, 0xfe, 0x07, 0x81, 0xff, 0xf8, 0x00, 0x07, 0xff, 0xe0, 0x00, 0x1f,
    0xff, 0x80, 0x00, 0x7f, 0xfe, 0x00, 0x01, 0xff, 0xf8, 0x00, 0x07, 0xf0, 0xff, 0x00, 0x7f, 0xff,
    0x80, 0x7f, 0xff, 0x80, 0x7f, 0xff, 0xc0, 0x7f, 0xff, 0xc0, 0x7f, 0xff, 0xe0, 0x7f, 0xff, 0xe0,
    0x7f, 0xff, 0xf0, 0x7f, 0xff, 0xf8, 0x7f, 0xff, 0xf8, 0x7f, 0xfe, 0xfc, 0x7f, 0xfe, 0x7c, 0x7f,
    0xfe, 0x7e, 0x7f, 0xfe, 0x3e, 0x7f, 0xfe, 0x3f, 0x7f, 0xfe, 0x1f, 0x7f, 0xfe, 0x1f, 0xff, 0xfe,
    0x0f, 0xff, 0xfe, 0x0f, 0xff, 0xfe, 0x07, 0xff, 0xfe, 0x07, 0xff, 0xfe, 0x03, 0xff, 0xfe, 0x03,
    0xff, 0xfe, 0x01, 0xff, 0xfe, 0x01, 0xff, 0xfe, 0x00, 0xff, 0x00, 0x3f, 0x00, 0x00, 0x3f, 0xfe,
    0x00, 0x1f, 0xff, 0xf0, 0x07, 0xff, 0xff, 0x01, 0xff, 0xff, 0xf0, 0x7f, 0xc3, 0xff, 0x1f, 0xe0,
    0x1f, 0xe3, 0xfc, 0x01, 0xfe, 0x7f, 0x00, 0x1f, 0xdf, 0xc0, 0x03, 0xfb, 0xf8, 0x00, 0x7f, 0xff,
    0x00, 0x07, 0xff, 0xe0, 0x00, 0xff, 0xfc, 0x00, 0x1f, 0xff, 0x80, 0x03, 0xff, 0xf0, 0x00, 0x7f,
    0xfe, 0x00, 0x0f, 0xff, 0xc0, 0x03, 0xfb, 0xfc, 0x00, 0x7f, 0x3f, 0x80, 0x0f, 0xe7, 0xf8, 0x03,
    0xfc, 0x7f, 0x80, 0xff, 0x0f, 0xff, 0xff, 0xc0, 0xff, 0xff, 0xf8, 0x0f, 0xff, 0xfe, 0x00, 0xff,
    0xff, 0x00, 0x07, 0xff, 0x80, 0x00, 0x0f, 0x00, 0x00, 0xff, 0xff, 0x83, 0xff, 0xff, 0x8f, 0xff,
    0xff, 0x3f, 0xff, 0xfe, 0xff, 0xff, 0xfb, 0xf8, 0x0f, 0xff, 0xe0, 0x3f, 0xff, 0x80, 0x7f, 0xfe,
    0x01, 0xff, 0xf8, 0x07, 0xff, 0xe0, 0x3f, 0xff, 0x81, 0xfe, 0xff, 0xff, 0xfb, 0xff, 0xff, 0xcf,
    0xff, 0xfe, 0x3f, 0xff, 0xf0, 0xff, 0xfe, 0x03, 0xf8, 0x00, 0x0f, 0xe0, 0x00, 0x3f, 0x80, 0x00,
    0xfe, 0x00, 0x03, 0xf8, 0x00, 0x0f, 0xe0, 0x00, 0x3f, 0x80, 0x00, 0xfe, 0x00, 0x03, 0xf8, 0x00,
    0x00, 0x00, 0x3f, 0x80, 0x00, 0x3f, 0xfe, 0x00, 0x1f, 0xff, 0xf0, 0x07, 0xff, 0xff, 0x01, 0xff,
    0xff, 0xf0, 0x7f, 0xc3, 0xff, 0x1f, 0xe0, 0x1f, 0xe3, 0xfc, 0x01, 0xfe, 0x7f, 0x00, 0x1f, 0xdf,
    0xc0, 0x03, 0xfb, 0xf8, 0x00, 0x7f, 0xff, 0x00, 0x07, 0xff, 0xe0, 0x00, 0xff, 0xfc, 0x00, 0x1f,
    0xff, 0x80, 0x03, 0xff, 0xf0, 0x00, 0x7f, 0xfe, 0x00, 0x0f, 0xff, 0xc0, 0x03, 0xfb, 0xfc, 0x00,
    0x7f, 0x3f, 0x80, 0x0f, 0xe7, 0xf8, 0x03, 0xf8, 0x7f, 0x80, 0xff, 0x0f, 0xff, 0xff, 0xc0, 0xff,
    0xff, 0xf0, 0x0f, 0xff, 0xfc, 0x00, 0xff, 0xff, 0x00, 0x03, 0xff, 0xc0, 0x00, 0x07, 0xfc, 0x00,
    0x00, 0x1f, 0x80, 0x00, 0x01, 0xf8, 0x00, 0x00, 0x1f, 0x80, 0x00, 0x01, 0xf8, 0xff, 0xff, 0x00,
    0xff, 0xff, 0xc0, 0xff, 0xff, 0xe0, 0xff, 0xff, 0xf0, 0xff, 0xff, 0xf0, 0xfe, 0x07, 0xf8, 0xfe,
    0x03, 0xf8, 0xfe, 0x03, 0xf8, 0xfe, 0x03, 0xf8, 0xfe, 0x03, 0xf0, 0xfe, 0x07, 0xf0, 0xff, 0xff,
    0xe0, 0xff, 0xff, 0xc0, 0xff, 0xff, 0x00, 0xff, 0xff, 0x80, 0xff, 0xff, 0xc0, 0xfe, 0x1f, 0xe0,
    0xfe, 0x0f, 0xf0, 0xfe, 0x07, 0xf0, 0xfe, 0x03, 0xf8, 0xfe, 0x03, 0xf8, 0xfe, 0x01, 0xfc, 0xfe,
    0x01, 0xfc, 0xfe, 0x00, 0xfe, 0xfe, 0x00, 0xfe, 0xfe, 0x00, 0xff, 0x01, 0xfe, 0x00, 0x7f, 0xff,
    0x07, 0xff, 0xfc, 0x7f, 0xff, 0xe7, 0xff, 0xff, 0x3f, 0xc1, 0xf9, 0xf8, 0x00, 0xcf, 0xc0, 0x00,
    0xfe, 0x00, 0x03, 0xf0, 0x00, 0x1f, 0xf0, 0x00, 0xff, 0xfc, 0x03, 0xff, 0xfc, 0x0f, 0xff, 0xf0,
    0x3f, 0xff, 0xc0, 0x7f, 0xff, 0x00, 0x3f, 0xf8, 0x00, 0x3f, 0xc0, 0x00, 0xfe, 0x00, 0x03, 0xf4,
    0x00, 0x1f, 0xb8, 0x01, 0xfd, 0xff, 0xff, 0xef, 0xff, 0xfe, 0x7f, 0xff, 0xf3, 0xff, 0xff, 0x07,
    0xff, 0xe0, 0x00, 0xf0, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0x00, 0x7f, 0x00, 0x00, 0x7f, 0x00, 0x00, 0x7f, 0x00, 0x00, 0x7f, 0x00,
    0x00, 0x7f, 0x00, 0x00, 0x7f, 0x00, 0x00, 0x7f, 0x00, 0x00, 0x7f, 0x00, 0x00, 0x7f, 0x00, 0x00,
    0x7f, 0x00, 0x00, 0x7f, 0x00, 0x00, 0x7f, 0x00, 0x00, 0x7f, 0x00, 0x00, 0x7f, 0x00, 0x00, 0x7f,
    0x00, 0x00, 0x7f, 0x00, 0x00, 0x7f, 0x00, 0x00, 0x7f, 0x00, 0x00, 0x7f, 0x00, 0x00, 0x7f, 0x00,
    0x00, 0x7f, 0x00, 0xfe, 0x00, 0xff, 0xfc, 0x01, 0xff, 0xf8, 0x03, 0xff, 0xf0, 0x07, 0xff, 0xe0,
    0x0f, 0xff, 0xc0, 0x1f, 0xff, 0x80, 0x3f, 0xff, 0x00, 0x7f, 0xfe, 0x00, 0xff, 0xfc, 0x01, 0xff,
    0xf8, 0x03, 0xff, 0xf0, 0x07, 0xff, 0xe0, 0x0f, 0xff, 0xc0, 0x1f, 0xff, 0x80, 0x3f, 0xff, 0x00,
    0x7f, 0xfe, 0x00, 0xff, 0xfc, 0x01, 0xff, 0xf8, 0x03, 0xfb, 0xf8, 0x0f, 0xe7, 0xf8, 0x1f, 0xcf,
    0xff, 0xff, 0x8f, 0xff, 0xfe, 0x0f, 0xff, 0xf8, 0x0f, 0xff, 0xe0, 0x07, 0xff, 0x80, 0x00, 0xf0,
    0x00, 0xfe, 0x00, 0x07, 0xef, 0xe0, 0x01, 0xfd, 0xfc, 0x00, 0x3f, 0x9f, 0x80, 0x07, 0xe3, 0xf8,
    0x01, 0xfc, 0x7f, 0x00, 0x3f, 0x87, 0xe0, 0x0f, 0xe0, 0xfe, 0x01, 0xfc, 0x1f, 0xc0, 0x3f, 0x01,
    0xf8, 0x0f, 0xe0, 0x3f, 0x81, 0xfc, 0x03, 0xf0, 0x3f, 0x00, 0x7f, 0x0f, 0xe0, 0x0f, 0xe1, 0xfc,
    0x00, 0xfc, 0x3f, 0x00, 0x1f, 0xcf, 0xe0, 0x03, 0xf9, 0xf8, 0x00, 0x3f, 0x3f, 0x00, 0x07, 0xff,
    0xe0, 0x00, 0xff, 0xf8, 0x00, 0x0f, 0xff, 0x00, 0x01, 0xff, 0xe0, 0x00, 0x1f, 0xf8, 0x00, 0x03,
    0xff, 0x00, 0x00, 0x7f, 0xe0, 0x00, 0x07, 0xf8, 0x00, 0xfe, 0x01, 0xfc, 0x01, 0xff, 0xf0, 0x0f,
    0xf0, 0x0f, 0xdf, 0x80, 0x7f, 0x80, 0xfe, 0xfc, 0x03, 0xfc, 0x07, 0xf7, 0xf0, 0x3f, 0xe0, 0x3f,
    0xbf, 0x81, 0xff, 0x81, 0xf8, 0xfc, 0x0f, 0xfc, 0x0f, 0xc7, 0xe0, 0x7f, 0xe0, 0xfe, 0x3f, 0x87,
    0xdf, 0x07, 0xf1, 0xfc, 0x3e, 0x78, 0x3f, 0x07, 0xe1, 0xf3, 0xe1, 0xf8, 0x3f, 0x0f, 0x9f, 0x1f,
    0xc1, 0xfc, 0x78, 0xf8, 0xfe, 0x0f, 0xe7, 0xc3, 0xc7, 0xe0, 0x3f, 0x3e, 0x1f, 0x3f, 0x01, 0xf9,
    0xf0, 0xfb, 0xf8, 0x0f, 0xef, 0x07, 0xdf, 0xc0, 0x7f, 0xf8, 0x1e, 0xfc, 0x03, 0xff, 0xc0, 0xff,
    0xe0, 0x0f, 0xfe, 0x07, 0xff, 0x00, 0x7f, 0xe0, 0x3f, 0xf8, 0x03, 0xff, 0x01, 0xff, 0x80, 0x1f,
    0xf8, 0x07, 0xfc, 0x00, 0x7f, 0xc0, 0x3f, 0xe0, 0x03, 0xfe, 0x01, 0xff, 0x00, 0x1f, 0xe0, 0x0f,
    0xf8, 0x00, 0x7f, 0x00, 0x3f, 0x9f, 0xc0, 0x1f, 0xe3, 0xf8, 0x07, 0xf0, 0x7f, 0x03, 0xf8, 0x1f,
    0xc1, 0xfc, 0x03, 0xf8, 0x7f, 0x00, 0x7f, 0x3f, 0x80, 0x1f, 0xdf, 0xc0, 0x03, 0xff, 0xf0, 0x00,
    0x7f, 0xf8, 0x00, 0x1f, 0xfc, 0x00, 0x03, 0xff, 0x00, 0x00, 0x7f, 0x80, 0x00, 0x3f, 0xf0, 0x00,
    0x1f, 0xfc, 0x00, 0x07, 0xff, 0x80, 0x03, 0xff, 0xf0, 0x01, 0xff, 0xfc, 0x00, 0x7f, 0x3f, 0x80,
    0x3f, 0x8f, 0xf0, 0x1f, 0xe1, 0xfc, 0x07, 0xf0, 0x3f, 0x83, 0xf8, 0x07, 0xf1, 0xfe, 0x01, 0xfc,
    0x7f, 0x00, 0x3f, 0xbf, 0x80, 0x07, 0xf0, 0xff, 0x00, 0x3f, 0xdf, 0xc0, 0x0f, 0xe7, 0xf8, 0x07,
    0xf8, 0xfe, 0x01, 0xfc, 0x1f, 0xc0, 0xfe, 0x07, 0xf8, 0x7f, 0x80, 0xfe, 0x1f, 0xc0, 0x1f, 0xcf,
    0xe0, 0x07, 0xff, 0xf8, 0x00, 0xff, 0xfc, 0x00, 0x1f, 0xfe, 0x00, 0x07, 0xff, 0x80, 0x00, 0xff,
    0xc0, 0x00, 0x1f, 0xe0, 0x00, 0x07, 0xf8, 0x00, 0x00, 0xfe, 0x00, 0x00, 0x3f, 0x80, 0x00, 0x0f,
    0xe0, 0x00, 0x03, 0xf8, 0x00, 0x00, 0xfe, 0x00, 0x00, 0x3f, 0x80, 0x00, 0x0f, 0xe0, 0x00, 0x03,
    0xf8, 0x00, 0x00, 0xfe, 0x00, 0x00, 0x3f, 0x80, 0x00, 0x0f, 0xe0, 0x00, 0x7f, 0xff, 0xfe, 0x7f,
    0xff, 0xfe, 0x7f, 0xff, 0xfe, 0x7f, 0xff, 0xfe, 0x7f, 0xff, 0xfe, 0x00, 0x03, 0xfc, 0x00, 0x07,
    0xf8, 0x00, 0x07, 0xf0, 0x00, 0x0f, 0xe0, 0x00, 0x1f, 0xc0, 0x00, 0x3f, 0xc0, 0x00, 0x7f, 0x80,
    0x00, 0xff, 0x00, 0x00, 0xfe, 0x00, 0x01, 0xfc, 0x00, 0x03, 0xf8, 0x00, 0x07, 0xf8, 0x00, 0x0f,
    0xf0, 0x00, 0x1f, 0xe0, 0x00, 0x1f, 0xc0, 0x00, 0x3f, 0x80, 0x00, 0x7f, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xc1, 0xf8, 0x3f, 0x07, 0xe0, 0xfc, 0x1f, 0x83, 0xf0, 0x7e, 0x0f, 0xc1, 0xf8, 0x3f, 0x07, 0xe0,
    0xfc, 0x1f, 0x83, 0xf0, 0x7e, 0x0f, 0xc1, 0xf8, 0x3f, 0x07, 0xe0, 0xfc, 0x1f, 0x83, 0xf0, 0x7e,
    0x0f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xf0, 0x03, 0x80, 0x1e, 0x00, 0xf0, 0x07, 0x80, 0x1e, 0x00,
    0xf0, 0x07, 0x80, 0x1e, 0x00, 0xf0, 0x07, 0x80, 0x1e, 0x00, 0xf0, 0x07, 0x80, 0x1e, 0x00, 0xf0,
    0x07, 0x80, 0x1c, 0x00, 0xf0, 0x07, 0x80, 0x3c, 0x00, 0xf0, 0x07, 0x80, 0x3c, 0x00, 0xf0, 0x07,
    0x80, 0x3c, 0x00, 0xf0, 0x07, 0x80, 0xff, 0xff, 0xff, 0xff, 0xbf, 0xf0, 0x7e, 0x0f, 0xc1, 0xf8,
    0x3f, 0x07, 0xe0, 0xfc, 0x1f, 0x83, 0xf0, 0x7e, 0x0f, 0xc1, 0xf8, 0x3f, 0x07, 0xe0, 0xfc, 0x1f,
    0x83, 0xf0, 0x7e, 0x0f, 0xc1, 0xf8, 0x3f, 0x07, 0xe0, 0xfc, 0x1f, 0x83, 0xff, 0xff, 0xff, 0xff,
    0xfb, 0xff, 0x00, 0xfc, 0x00, 0x07, 0xf8, 0x00, 0x3f, 0xf0, 0x01, 0xff, 0xe0, 0x0f, 0xff, 0xc0,
    0x7e, 0x1f, 0x81, 0xf0, 0x3f, 0x0f, 0x80, 0x7e, 0x78, 0x00, 0x7f, 0xc0, 0x00, 0xf0, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xf8, 0x3e, 0x0f, 0x03, 0xc0, 0xf0, 0x3c, 0x0e, 0x0f,
    0xfe, 0x01, 0xff, 0xfe, 0x0f, 0xff, 0xf8, 0x7f, 0xff, 0xc3, 0x80, 0xff, 0x00, 0x01, 0xf8, 0x00,
    0x0f, 0xc0, 0x3f, 0xfe, 0x0f, 0xff, 0xf9, 0xff, 0xff, 0xdf, 0xff, 0xfe, 0xff, 0x07, 0xf7, 0xe0,
    0x3f, 0xff, 0x01, 0xff, 0xf8, 0x1f, 0xef, 0xe1, 0xff, 0x7f, 0xff, 0xfb, 0xff, 0xff, 0xcf, 0xfe,
    0xfe, 0x3f, 0xe7, 0xf0, 0x38, 0x00, 0x00, 0xfc, 0x00, 0x07, 0xe0, 0x00, 0x3f, 0x00, 0x01, 0xf8,
    0x00, 0x0f, 0xc0, 0x00, 0x7e, 0x00, 0x03, 0xf0, 0x00, 0x1f, 0x8f, 0xe0, 0xfc, 0xff, 0xc7, 0xef,
    0xff, 0x3f, 0xff, 0xf9, 0xff, 0xff, 0xef, 0xf0, 0x7f, 0x7f, 0x01, 0xff, 0xf8, 0x0f, 0xff, 0xc0,
    0x7f, 0xfc, 0x01, 0xff, 0xe0, 0x0f, 0xff, 0x00, 0xff, 0xfc, 0x07, 0xff, 0xe0, 0x3f, 0xff, 0x01,
    0xfb, 0xfe, 0x3f, 0xdf, 0xff, 0xfe, 0xff, 0xff, 0xe7, 0xe7, 0xfe, 0x3f, 0x1f, 0xe0, 0x00, 0x18,
    0x00, 0x01, 0xff, 0x81, 0xff, 0xf0, 0xff, 0xfc, 0x7f, 0xff, 0x3f, 0xf3, 0xdf, 0xe0, 0x17, 0xf0,
    0x01, 0xfc, 0x00, 0x7e, 0x00, 0x3f, 0x80, 0x0f, 0xe0, 0x01, 0xf8, 0x00, 0x7e, 0x00, 0x1f, 0xc0,
    0x07, 0xf8, 0x00, 0xff, 0x03, 0x3f, 0xff, 0xc7, 0xff, 0xf0, 0xff, 0xfc, 0x0f, 0xff, 0x00, 0x3c,
    0x00, 0x00, 0x03, 0xf8, 0x00, 0x1f, 0xc0, 0x00, 0xfe, 0x00, 0x07, 0xf0, 0x00, 0x3f, 0x80, 0x01,
    0xfc, 0x00, 0x0f, 0xe0, 0xfc, 0x7f, 0x1f, 0xfb, 0xf9, 0xff, 0xff, 0xdf, 0xff, 0xfe, 0xff, 0xff,
    0xff, 0xf0, 0x7f, 0xff, 0x01, 0xff, 0xf0, 0x0f, 0xff, 0x80, 0x7f, 0xfc, 0x03, 0xff, 0xe0, 0x1f,
    0xff, 0x00, 0xff, 0xf8, 0x07, 0xff, 0xe0, 0x3f, 0xff, 0x03, 0xfd, 0xfe, 0x3f, 0xef, 0xff, 0xff,
    0x3f, 0xff, 0xf8, 0xff, 0xdf, 0xc3, 0xfc, 0xfe, 0x03, 0x00, 0x00, 0x01, 0xff, 0x00, 0x1f, 0xff,
    0x00, 0xff, 0xfe, 0x07, 0xff, 0xfc, 0x3f, 0x87, 0xf1, 0xfc, 0x0f, 0xe7, 0xf0, 0x1f, 0x9f, 0x80,
    0x7e, 0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xdf, 0xff, 0xff, 0x7e, 0x00, 0x01, 0xf8,
    0x00, 0x07, 0xf0, 0x00, 0x8f, 0xe0, 0x1e, 0x3f, 0xff, 0xf8, 0x7f, 0xff, 0xe0, 0xff, 0xff, 0x80,
    0xff, 0xf8, 0x00, 0x3c, 0x00, 0x03, 0xfe, 0x1f, 0xfc, 0x3f, 0xf8, 0xff, 0xf1, 0xf8, 0x03, 0xf0,
    0x07, 0xe0, 0x7f, 0xfe, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xe1, 0xf8, 0x03, 0xf0, 0x07,
    0xe0, 0x0f, 0xc0, 0x1f, 0x80, 0x3f, 0x00, 0x7e, 0x00, 0xfc, 0x01, 0xf8, 0x03, 0xf0, 0x07, 0xe0,
    0x0f, 0xc0, 0x1f, 0x80, 0x3f, 0x00, 0x7e, 0x00, 0x07, 0xe1, 0xf8, 0xff, 0xdf, 0xcf, 0xff, 0xfe,
    0xff, 0xff, 0xf7, 0xff, 0xff, 0xff, 0x83, 0xff, 0xf8, 0x0f, 0xff, 0x80, 0x7f, 0xfc, 0x03, 0xff,
    0xe0, 0x1f, 0xff, 0x00, 0xff, 0xf8, 0x07, 0xff, 0xc0, 0x3f, 0xff, 0x01, 0xff, 0xfc, 0x1f, 0xef,
    0xff, 0xff, 0x7f, 0xff, 0xf9, 0xff, 0xff, 0xc7, 0xfe, 0xfe, 0x0f, 0xc7, 0xf0, 0x00, 0x3f, 0x80,
    0x01, 0xf8, 0xc0, 0x1f, 0xc7, 0xff, 0xfc, 0x3f, 0xff, 0xe1, 0xff, 0xfc, 0x0f, 0xff, 0xc0, 0x0f,
    0xf0, 0x00, 0xfc, 0x00, 0x0f, 0xc0, 0x00, 0xfc, 0x00, 0x0f, 0xc0, 0x00, 0xfc, 0x00, 0x0f, 0xc0,
    0x00, 0xfc, 0x00, 0x0f, 0xc3, 0xf0, 0xfc, 0xff, 0xcf, 0xdf, 0xfe, 0xff, 0xff, 0xef, 0xff, 0xfe,
    0xff, 0x07, 0xff, 0xe0, 0x7f, 0xfe, 0x07, 0xff, 0xe0, 0x7f, 0xfc, 0x07, 0xff, 0xc0, 0x7f, 0xfc,
    0x07, 0xff, 0xc0, 0x7f, 0xfc, 0x07, 0xff, 0xc0, 0x7f, 0xfc, 0x07, 0xff, 0xc0, 0x7f, 0xfc, 0x07,
    0xff, 0xc0, 0x7f, 0xfc, 0x07, 0xf0, 0xff, 0xff, 0xff, 0xfc, 0x00, 0x3f, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xc0, 0x0f, 0xc3, 0xf0, 0xfc, 0x3f,
    0x0f, 0xc0, 0x00, 0x00, 0x3f, 0x0f, 0xc3, 0xf0, 0xfc, 0x3f, 0x0f, 0xc3, 0xf0, 0xfc, 0x3f, 0x0f,
    0xc3, 0xf0, 0xfc, 0x3f, 0x0f, 0xc3, 0xf0, 0xfc, 0x3f, 0x0f, 0xc3, 0xf0, 0xfc, 0x3f, 0x0f, 0xc7,
    0xf3, 0xff, 0xfe, 0xff, 0xbf, 0xcf, 0x80, 0xfc, 0x00, 0x07, 0xe0, 0x00, 0x3f, 0x00, 0x01, 0xf8,
    0x00, 0x0f, 0xc0, 0x00, 0x7e, 0x00, 0x03, 0xf0, 0x00, 0x1f, 0x80, 0xfe, 0xfc, 0x0f, 0xf7, 0xe0,
    0xff, 0x3f, 0x0f, 0xe1, 0xf8, 0xfe, 0x0f, 0xcf, 0xe0, 0x7e, 0xfe, 0x03, 0xff, 0xe0, 0x1f, 0xfe,
    0x00, 0xff, 0xf0, 0x07, 0xff, 0x80, 0x3f, 0xfe, 0x01, 0xfb, 0xf8, 0x0f, 0xcf, 0xe0, 0x7e, 0x3f,
    0x83, 0xf0, 0xfe, 0x1f, 0x83, 0xf8, 0xfc, 0x0f, 0xe7, 0xe0, 0x3f, 0xbf, 0x00, 0xfe, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xc0, 0xfc, 0x7e, 0x03, 0xf0, 0xfc, 0xff, 0x8f, 0xf8, 0xfd, 0xff, 0xdf, 0xfc, 0xff,
    0xff, 0xff, 0xfe, 0xff, 0xff, 0xff, 0xfe, 0xff, 0x0f, 0xf8, 0x7e, 0xfe, 0x0f, 0xf0, 0x7f, 0xfe,
    0x0f, 0xe0, 0x7f, 0xfe, 0x07, 0xe0, 0x7f, 0xfc, 0x07, 0xe0, 0x7f, 0xfc, 0x07, 0xe0, 0x7f, 0xfc,
    0x07, 0xe0, 0x7f, 0xfc, 0x07, 0xe0, 0x7f, 0xfc, 0x07, 0xe0, 0x7f, 0xfc, 0x07, 0xe0, 0x7f, 0xfc,
    0x07, 0xe0, 0x7f, 0xfc, 0x07, 0xe0, 0x7f, 0xfc, 0x07, 0xe0, 0x7f, 0xfc, 0x07, 0xe0, 0x7f, 0xfc,
    0x07, 0xe0, 0x7f, 0xfc, 0x3f, 0x0f, 0xcf, 0xfc, 0xfd, 0xff, 0xef, 0xff, 0xfe, 0xff, 0xff, 0xef,
    0xf0, 0x7f, 0xfe, 0x07, 0xff, 0xe0, 0x7f, 0xfe, 0x07, 0xff, 0xc0, 0x7f, 0xfc, 0x07, 0xff, 0xc0,
    0x7f, 0xfc, 0x07, 0xff, 0xc0, 0x7f, 0xfc, 0x07, 0xff, 0xc0, 0x7f, 0xfc, 0x07, 0xff, 0xc0, 0x7f,
    0xfc, 0x07, 0xff, 0xc0, 0x7f, 0x01, 0xff, 0x00, 0x1f, 0xff, 0x00, 0xff, 0xfe, 0x07, 0xff, 0xfc,
    0x3f, 0xcf, 0xf9, 0xfe, 0x0f, 0xe7, 0xf0, 0x1f, 0xdf, 0x80, 0x7f, 0x7e, 0x01, 0xff, 0xf8, 0x07,
    0xff, 0xe0, 0x0f, 0xdf, 0x80, 0x7f, 0x7e, 0x01, 0xfd, 0xfc, 0x07, 0xf7, 0xf0, 0x3f, 0x8f, 0xe1,
    0xfe, 0x3f, 0xff, 0xf0, 0x7f, 0xff, 0xc0, 0xff, 0xfc, 0x00, 0xff, 0xe0, 0x00, 0x38, 0x00, 0xfc,
    0x7f, 0x07, 0xe7, 0xfe, 0x3f, 0x7f, 0xf9, 0xff, 0xff, 0xcf, 0xff, 0xff, 0x7f, 0x83, 0xfb, 0xf8,
    0x0f, 0xff, 0xc0, 0x7f, 0xfe, 0x03, 0xff, 0xe0, 0x0f, 0xff, 0x00, 0x7f, 0xf8, 0x07, 0xff, 0xe0,
    0x3f, 0xff, 0x01, 0xff, 0xf8, 0x0f, 0xdf, 0xf1, 0xfe, 0xff, 0xff, 0xf7, 0xff, 0xff, 0x3f, 0x3f,
    0xf1, 0xf8, 0xff, 0x0f, 0xc0, 0xc0, 0x7e, 0x00, 0x03, 0xf0, 0x00, 0x1f, 0x80, 0x00, 0xfc, 0x00,
    0x07, 0xe0, 0x00, 0x3f, 0x00, 0x01, 0xf8, 0x00, 0x00, 0x07, 0xe1, 0xf8, 0xff, 0xdf, 0xcf, 0xff,
    0xfe, 0xff, 0xff, 0xf7, 0xff, 0xff, 0xff, 0x83, 0xff, 0xf8, 0x0f, 0xff, 0x80, 0x7f, 0xfc, 0x03,
    0xff, 0xe0, 0x1f, 0xff, 0x00, 0xff, 0xf8, 0x07, 0xff, 0xc0, 0x3f, 0xff, 0x01, 0xff, 0xf8, 0x1f,
    0xef, 0xf1, 0xff, 0x7f, 0xff, 0xf9, 0xff, 0xff, 0xc7, 0xfe, 0xfe, 0x1f, 0xe7, 0xf0, 0x18, 0x3f,
    0x80, 0x01, 0xfc, 0x00, 0x0f, 0xe0, 0x00, 0x7f, 0x00, 0x03, 0xf8, 0x00, 0x1f, 0xc0, 0x00, 0xfe,
    0x00, 0x03, 0xe0, 0xfc, 0x7f, 0xf9, 0xff, 0xf7, 0xff, 0xff, 0xff, 0xff, 0xff, 0xf0, 0x3f, 0xc0,
    0x7f, 0x00, 0xfe, 0x01, 0xf8, 0x03, 0xf0, 0x07, 0xe0, 0x0f, 0xc0, 0x1f, 0x80, 0x3f, 0x00, 0x7e,
    0x00, 0xfc, 0x01, 0xf8, 0x03, 0xf0, 0x07, 0xe0, 0x00, 0x0f, 0xfe, 0x0f, 0xff, 0xe7, 0xff, 0xfb,
    0xff, 0xfe, 0xfc, 0x07, 0xbf, 0x00, 0x0f, 0xc0, 0x03, 0xfc, 0x00, 0xff, 0xf8, 0x1f, 0xff, 0xc3,
    0xff, 0xf8, 0x3f, 0xfe, 0x00, 0x7f, 0xc0, 0x07, 0xf0, 0x00, 0xff, 0x80, 0x7f, 0xff, 0xff, 0xbf,
    0xff, 0xef, 0xff, 0xf1, 0xff, 0xf0, 0x03, 0xe0, 0x00, 0x1f, 0xc0, 0x0f, 0xe0, 0x07, 0xf0, 0x03,
    0xf8, 0x01, 0xfc, 0x03, 0xff, 0xfb, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xbf, 0xff, 0x87, 0xf0,
    0x03, 0xf8, 0x01, 0xfc, 0x00, 0xfe, 0x00, 0x7f, 0x00, 0x3f, 0x80, 0x1f, 0xc0, 0x0f, 0xe0, 0x07,
    0xf0, 0x01, 0xf8, 0x00, 0xff, 0xe0, 0x7f, 0xf8, 0x3f, 0xfc, 0x0f, 0xfe, 0x01, 0xff, 0x00, 0xfc,
    0x07, 0xef, 0xc0, 0x7f, 0xfc, 0x07, 0xff, 0xc0, 0x7f, 0xfc, 0x07, 0xff, 0xc0, 0x7f, 0xfc, 0x07,
    0xff, 0xc0, 0x7f, 0xfc, 0x07, 0xff, 0xc0, 0x7f, 0xfc, 0x07, 0xff, 0xc0, 0x7f, 0xfc, 0x07, 0xff,
    0xc0, 0x7f, 0xfe, 0x0f, 0xff, 0xf3, 0xff, 0xff, 0xff, 0xf7, 0xff, 0xff, 0x3f, 0xf7, 0xf1, 0xfe,
    0x7f, 0x03, 0x00, 0x00, 0xfc, 0x00, 0xff, 0xf0, 0x07, 0xef, 0xe0, 0x1f, 0x9f, 0x80, 0xfe, 0x7e,
    0x03, 0xf0, 0xfc, 0x0f, 0xc3, 0xf0, 0x7f, 0x0f, 0xc1, 0xf8, 0x1f, 0x87, 0xe0, 0x7e, 0x3f, 0x00,
    0xfc, 0xfc, 0x03, 0xf3, 0xf0, 0x0f, 0xdf, 0x80, 0x1f, 0xfe, 0x00, 0x7f, 0xf0, 0x01, 0xff, 0xc0,
    0x03, 0xff, 0x00, 0x0f, 0xf8, 0x00, 0x1f, 0xe0, 0x00, 0x7f, 0x00, 0xfc, 0x07, 0xc0, 0x7e, 0xfc,
    0x0f, 0xc0, 0xfd, 0xf8, 0x3f, 0x83, 0xf3, 0xf0, 0x7f, 0x07, 0xe7, 0xe0, 0xfe, 0x0f, 0xc7, 0xe1,
    0xfe, 0x1f, 0x8f, 0xc7, 0xfc, 0x7e, 0x1f, 0x8f, 0xf8, 0xfc, 0x3f, 0x1e, 0xf1, 0xf8, 0x3f, 0x3d,
    0xf3, 0xf0, 0x7e, 0xf9, 0xef, 0xc0, 0xfd, 0xe3, 0xdf, 0x81, 0xfb, 0xc7, 0xbf, 0x01, 0xff, 0x8f,
    0xfe, 0x03, 0xff, 0x0f, 0xf8, 0x07, 0xfc, 0x1f, 0xf0, 0x07, 0xf8, 0x3f, 0xe0, 0x0f, 0xf0, 0x7f,
    0xc0, 0x1f, 0xe0, 0x7f, 0x00, 0x3f, 0x80, 0xfe, 0x00, 0xfe, 0x01, 0xfb, 0xf0, 0x1f, 0x9f, 0xc1,
    0xfc, 0x7f, 0x1f, 0xc1, 0xf8, 0xfc, 0x07, 0xef, 0xe0, 0x3f, 0xfe, 0x00, 0xff, 0xe0, 0x03, 0xfe,
    0x00, 0x0f, 0xf0, 0x00, 0x7f, 0x80, 0x07, 0xfc, 0x00, 0x7f, 0xf0, 0x07, 0xff, 0xc0, 0x3f, 0x7f,
    0x03, 0xf1, 0xf8, 0x3f, 0x8f, 0xe3, 0xf8, 0x3f, 0x9f, 0x80, 0xff, 0xfc, 0x03, 0xf0, 0xfc, 0x00,
    0xff, 0xf0, 0x07, 0xef, 0xe0, 0x1f, 0x9f, 0x80, 0xfe, 0x7e, 0x03, 0xf0, 0xfc, 0x0f, 0xc3, 0xf0,
    0x7e, 0x0f, 0xe1, 0xf8, 0x1f, 0x87, 0xe0, 0x7e, 0x3f, 0x00, 0xfc, 0xfc, 0x03, 0xf3, 0xf0, 0x07,
    0xff, 0x80, 0x1f, 0xfe, 0x00, 0x7f, 0xf0, 0x00, 0xff, 0xc0, 0x03, 0xff, 0x00, 0x07, 0xf8, 0x00,
    0x1f, 0xe0, 0x00, 0x3f, 0x00, 0x00, 0xfc, 0x00, 0x03, 0xf0, 0x00, 0x1f, 0x80, 0x01, 0xfe, 0x00,
    0x3f, 0xf0, 0x00, 0xff, 0xc0, 0x03, 0xfe, 0x00, 0x07, 0xe0, 0x00, 0x7f, 0xff, 0xdf, 0xff, 0xf7,
    0xff, 0xfd, 0xff, 0xff, 0x7f, 0xff, 0xc0, 0x0f, 0xe0, 0x07, 0xf8, 0x03, 0xfc, 0x01, 0xfe, 0x00,
    0xff, 0x00, 0x3f, 0x80, 0x1f, 0xc0, 0x0f, 0xe0, 0x07, 0xf0, 0x03, 0xf8, 0x01, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x00, 0x7f, 0x80, 0xff, 0xc0, 0x7f, 0xe0, 0x7f,
    0xf0, 0x3f, 0x80, 0x1f, 0x80, 0x0f, 0xc0, 0x07, 0xe0, 0x03, 0xf0, 0x01, 0xf8, 0x00, 0xfc, 0x00,
    0x7e, 0x00, 0x7f, 0x00, 0x3f, 0x81, 0xff, 0x81, 0xff, 0x80, 0xff, 0x80, 0x7f, 0xf0, 0x07, 0xf8,
    0x00, 0xfe, 0x00, 0x3f, 0x00, 0x1f, 0x80, 0x0f, 0xc0, 0x07, 0xe0, 0x03, 0xf0, 0x01, 0xf8, 0x00,
    0xfc, 0x00, 0x7e, 0x00, 0x3f, 0x80, 0x1f, 0xfc, 0x07, 0xfe, 0x01, 0xff, 0x00, 0x3f, 0x80, 0x77,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xf7, 0x00, 0xff, 0x80, 0x7f, 0xe0, 0x3f, 0xf8, 0x0f, 0xfc, 0x00,
    0x7f, 0x00, 0x3f, 0x80, 0x0f, 0xc0, 0x07, 0xe0, 0x03, 0xf0, 0x01, 0xf8, 0x00, 0xfc, 0x00, 0x7e,
    0x00, 0x3f, 0x00, 0x1f, 0xc0, 0x0f, 0xfe, 0x03, 0xff, 0x00, 0xff, 0x80, 0xff, 0xc0, 0xff, 0x80,
    0x7f, 0x00, 0x3f, 0x00, 0x1f, 0x80, 0x0f, 0xc0, 0x07, 0xe0, 0x03, 0xf0, 0x01, 0xf8, 0x00, 0xfc,
    0x00, 0xfe, 0x00, 0xfe, 0x07, 0xff, 0x03, 0xff, 0x81, 0xff, 0x80, 0x7f, 0x00, 0x00, 0x07, 0x00,
    0x00, 0xff, 0x80, 0x37, 0xff, 0xc3, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x80, 0xff, 0xe8, 0x00,
    0x7c, 0x00,
];

#[rustfmt::skip]
static GLYPHS: [Glyph; 95] = [
    Glyph::new(0, 0, 0, 13, 0, 0), // 0x20 ' '
    Glyph::new(0, 6, 26, 16, 5, -26), // 0x21 '!'
    Glyph::new(20, 12, 10, 19, 3, -26), // 0x22 '"'
    Glyph::new(35, 26, 26, 30, 2, -26), // 0x23 '#'
    Glyph::new(120, 20, 32, 25, 3, -27), // 0x24 '$'
    Glyph::new(200, 34, 28, 36, 1, -27), // 0x25 '%'
    Glyph::new(319, 27, 28, 31, 2, -27), // 0x26 '&'
    Glyph::new(414, 5, 10, 11, 3, -26), // 0x27 '''
    Glyph::new(421, 10, 32, 16, 3, -27), // 0x28 '('
    Glyph::new(461, 10, 32, 16, 3, -27), // 0x29 ')'
    Glyph::new(501, 17, 17, 19, 1, -27), // 0x2a '*'
    Glyph::new(538, 22, 23, 30, 4, -23), // 0x2b '+'
    Glyph::new(602, 8, 12, 14, 2, -7), // 0x2c ','
    Glyph::new(614, 11, 5, 15, 2, -13), // 0x2d '-'
    Glyph::new(621, 6, 7, 14, 4, -7), // 0x2e '.'
    Glyph::new(627, 13, 29, 13, 0, -26), // 0x2f '/'
    Glyph::new(675, 21, 28, 25, 2, -27), // 0x30 '0'
    Glyph::new(749, 19, 26, 25, 4, -26), // 0x31 '1'
    Glyph::new(811, 19, 27, 25, 3, -27), // 0x32 '2'
    Glyph::new(876, 20, 28, 25, 2, -27), // 0x33 '3'
    Glyph::new(946, 23, 26, 25, 1, -26), // 0x34 '4'
    Glyph::new(1021, 20, 27, 25, 3, -26), // 0x35 '5'
    Glyph::new(1089, 21, 28, 25, 2, -27), // 0x36 '6'
    Glyph::new(1163, 20, 26, 25, 2, -26), // 0x37 '7'
    Glyph::new(1228, 21, 28, 25, 2, -27), // 0x38 '8'
    Glyph::new(1302, 21, 28, 25, 2, -27), // 0x39 '9'
    Glyph::new(1376, 6, 20, 14, 4, -20), // 0x3a ':'
    Glyph::new(1391, 8, 25, 14, 2, -20), // 0x3b ';'
    Glyph::new(1416, 22, 20, 30, 4, -21), // 0x3c '<'
    Glyph::new(1471, 22, 12, 30, 4, -17), // 0x3d '='
    Glyph::new(1504, 22, 20, 30, 4, -21), // 0x3e '>'
    Glyph::new(1559, 17, 27, 21, 2, -27), // 0x3f '?'
    Glyph::new(1617, 32, 31, 36, 2, -25), // 0x40 '@'
    Glyph::new(1741, 28, 26, 28, 0, -26), // 0x41 'A'
    Glyph::new(1832, 22, 26, 27, 3, -26), // 0x42 'B'
    Glyph::new(1904, 22, 28, 26, 2, -27), // 0x43 'C'
    Glyph::new(1981, 25, 26, 30, 3, -26), // 0x44 'D'
    Glyph::new(2063, 19, 26, 25, 3, -26), // 0x45 'E'
    Glyph::new(2125, 19, 26, 25, 3, -26), // 0x46 'F'
    Glyph::new(2187, 25, 28, 30, 2, -27), // 0x47 'G'
    Glyph::new(2275, 24, 26, 30, 3, -26), // 0x48 'H'
    Glyph::new(2353, 7, 26, 13, 3, -26), // 0x49 'I'
    Glyph::new(2376, 12, 33, 13, -2, -26), // 0x4a 'J'
    Glyph::new(2426, 25, 26, 28, 3, -26), // 0x4b 'K'
    Glyph::new(2508, 19, 26, 23, 3, -26), // 0x4c 'L'
    Glyph::new(2570, 30, 26, 36, 3, -26), // 0x4d 'M'
    Glyph::new(2668, 24, 26, 30, 3, -26), // 0x4e 'N'
    Glyph::new(2746, 27, 28, 31, 2, -27), // 0x4f 'O'
    Glyph::new(2841, 22, 26, 26, 3, -26), // 0x50 'P'
    Glyph::new(2913, 27, 32, 31, 2, -27), // 0x51 'Q'
    Glyph::new(3021, 24, 26, 28, 3, -26), // 0x52 'R'
    Glyph::new(3099, 21, 28, 26, 2, -27), // 0x53 'S'
    Glyph::new(3173, 24, 26, 25, 0, -26), // 0x54 'T'
    Glyph::new(3251, 23, 27, 29, 3, -26), // 0x55 'U'
    Glyph::new(3329, 27, 26, 28, 0, -26), // 0x56 'V'
    Glyph::new(3417, 37, 26, 40, 1, -26), // 0x57 'W'
    Glyph::new(3538, 26, 26, 28, 1, -26), // 0x58 'X'
    Glyph::new(3623, 26, 26, 26, 0, -26), // 0x59 'Y'
    Glyph::new(3708, 24, 26, 26, 1, -26), // 0x5a 'Z'
    Glyph::new(3786, 11, 32, 16, 3, -27), // 0x5b '['
    Glyph::new(3830, 13, 29, 13, 0, -26), // 0x5c '\\'
    Glyph::new(3878, 11, 32, 16, 2, -27), // 0x5d ']'
    Glyph::new(3922, 22, 10, 30, 4, -26), // 0x5e '^'
    Glyph::new(3950, 18, 4, 18, 0, 5), // 0x5f '_'
    Glyph::new(3959, 9, 7, 18, 2, -29), // 0x60 '`'
    Glyph::new(3967, 21, 21, 24, 1, -20), // 0x61 'a'
    Glyph::new(4023, 21, 28, 26, 3, -27), // 0x62 'b'
    Glyph::new(4097, 18, 21, 21, 1, -20), // 0x63 'c'
    Glyph::new(4145, 21, 28, 26, 2, -27), // 0x64 'd'
    Glyph::new(4219, 22, 21, 24, 1, -20), // 0x65 'e'
    Glyph::new(4277, 15, 27, 16, 1, -27), // 0x66 'f'
    Glyph::new(4328, 21, 28, 26, 2, -20), // 0x67 'g'
    Glyph::new(4402, 20, 27, 26, 3, -27), // 0x68 'h'
    Glyph::new(4470, 6, 27, 12, 3, -27), // 0x69 'i'
    Glyph::new(4491, 10, 35, 12, -1, -27), // 0x6a 'j'
    Glyph::new(4535, 21, 27, 24, 3, -27), // 0x6b 'k'
    Glyph::new(4606, 6, 27, 12, 3, -27), // 0x6c 'l'
    Glyph::new(4627, 32, 20, 38, 3, -20), // 0x6d 'm'
    Glyph::new(4707, 20, 20, 26, 3, -20), // 0x6e 'n'
    Glyph::new(4757, 22, 21, 25, 1, -20), // 0x6f 'o'
    Glyph::new(4815, 21, 28, 26, 3, -20), // 0x70 'p'
    Glyph::new(4889, 21, 28, 26, 2, -20), // 0x71 'q'
    Glyph::new(4963, 15, 20, 18, 3, -20), // 0x72 'r'
    Glyph::new(5001, 18, 21, 21, 2, -20), // 0x73 's'
    Glyph::new(5049, 17, 25, 17, 0, -25), // 0x74 't'
    Glyph::new(5103, 20, 21, 26, 3, -20), // 0x75 'u'
    Glyph::new(5156, 22, 20, 23, 1, -20), // 0x76 'v'
    Glyph::new(5211, 31, 20, 33, 1, -20), // 0x77 'w'
    Glyph::new(5289, 21, 20, 23, 1, -20), // 0x78 'x'
    Glyph::new(5342, 22, 28, 23, 1, -20), // 0x79 'y'
    Glyph::new(5419, 18, 20, 21, 1, -20), // 0x7a 'z'
    Glyph::new(5464, 17, 33, 26, 4, -27), // 0x7b '{'
    Glyph::new(5535, 5, 37, 13, 4, -28), // 0x7c '|'
    Glyph::new(5559, 17, 33, 26, 4, -27), // 0x7d '}'
    Glyph::new(5630, 22, 7, 30, 4, -15), // 0x7e '~'
];
