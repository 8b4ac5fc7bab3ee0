//! Condensed tier, same height, narrower advances.
//!
//! Generated from the DejaVu fonts (Bitstream Vera derivative, free license).

use super::{Font, Glyph};

/// Condensed tier, same height, narrower advances.
pub static CONDENSED: Font = Font::new(&BITMAPS, &GLYPHS);

#[rustfmt::skip]
static BITMAPS: [u8; 5100] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xf7, 0xdf, 0x7d, 0xf7, 0xdf, 0x7c, 0x00, 0x00, 0xff,
    0xff, 0xff, 0xff, 0xf0, 0xf1, 0xfe, 0x3f, 0xc7, 0xf8, 0xff, 0x1f, 0xe3, 0xfc, 0x7f, 0x8f, 0xf1,
    0xfc, 0x38, 0x00, 0x70, 0x70, 0x00, 0xe1, 0xe0, 0x03, 0xc3, 0xc0, 0x07, 0x87, 0x00, 0x0e, 0x0e,
    0x00, 0x1c, 0x3c, 0x00, 0x78, 0x78, 0x1f, 0xff, 0xff, 0x3f, 0xff, 0xfe, 0x7f, 0xff, 0xfc, 0xff,
    0xff, 0xf8, 0x1e, 0x1e, 0x00, 0x3c, 0x38, 0x00, 0x70, 0x70, 0x00, 0xe1, 0xe0, 0x3f, 0xff, 0xfc,
    0xff, 0xff, 0xf9, 0xff, 0xff, 0xf3, 0xff, 0xff, 0xe0, 0x78, 0x78, 0x00, 0xf0, 0xf0, 0x01, 0xe1,
    0xc0, 0x03, 0x83, 0x80, 0x07, 0x0f, 0x00, 0x1e, 0x1e, 0x00, 0x3c, 0x38, 0x00, 0x00, 0xe0, 0x00,
    0x38, 0x00, 0x0e, 0x00, 0x03, 0x80, 0x0f, 0xff, 0x07, 0xff, 0xe3, 0xff, 0xf9, 0xff, 0xfe, 0x7c,
    0xe1, 0x9f, 0x38, 0x0f, 0xce, 0x03, 0xf3, 0x80, 0x7f, 0xe0, 0x1f, 0xff, 0x03, 0xff, 0xf0, 0x7f,
    0xfe, 0x0f, 0xff, 0xc0, 0x3f, 0xf0, 0x0e, 0xfc, 0x03, 0x9f, 0x00, 0xe7, 0xf0, 0x39, 0xff, 0x8e,
    0xff, 0xff, 0xff, 0xff, 0xff, 0x9f, 0xff, 0xc0, 0xff, 0xc0, 0x03, 0x80, 0x00, 0xe0, 0x00, 0x38,
    0x00, 0x0e, 0x00, 0x03, 0x80, 0x0f, 0x00, 0x07, 0x00, 0x7f, 0x80, 0x1e, 0x01, 0xff, 0x80, 0x38,
    0x03, 0xcf, 0x80, 0xf0, 0x0f, 0x8f, 0x01, 0xc0, 0x1e, 0x1f, 0x07, 0x80, 0x3c, 0x1e, 0x1e, 0x00,
    0x78, 0x3c, 0x3c, 0x00, 0xf0, 0x78, 0xf0, 0x01, 0xe1, 0xf1, 0xc0, 0x01, 0xe3, 0xc7, 0x80, 0x03,
    0xef, 0x8e, 0x00, 0x03, 0xfe, 0x3c, 0x00, 0x03, 0xf8, 0x70, 0x78, 0x01, 0xc1, 0xe3, 0xfc, 0x00,
    0x03, 0x8f, 0xfc, 0x00, 0x0f, 0x1e, 0x7c, 0x00, 0x3c, 0x78, 0x78, 0x00, 0x78, 0xf0, 0xf0, 0x01,
    0xe1, 0xe1, 0xe0, 0x03, 0x83, 0xc3, 0xe0, 0x0f, 0x07, 0x87, 0x80, 0x1c, 0x0f, 0x0f, 0x00, 0x78,
    0x1e, 0x1e, 0x00, 0xe0, 0x1f, 0xfc, 0x03, 0xc0, 0x3f, 0xf0, 0x07, 0x00, 0x3f, 0xc0, 0x0c, 0x00,
    0x0c, 0x00, 0x00, 0x7c, 0x00, 0x01, 0xff, 0xc0, 0x01, 0xff, 0xe0, 0x01, 0xff, 0xf0, 0x00, 0xff,
    0xf8, 0x00, 0xfc, 0x04, 0x00, 0x7e, 0x00, 0x00, 0x3f, 0x00, 0x00, 0x0f, 0xc0, 0x00, 0x07, 0xf0,
    0x00, 0x03, 0xf8, 0x00, 0x03, 0xfe, 0x03, 0xe3, 0xff, 0x81, 0xf1, 0xff, 0xe0, 0xf9, 0xfb, 0xf8,
    0xf9, 0xf8, 0xfe, 0x7c, 0xfc, 0x3f, 0x3e, 0x7e, 0x1f, 0xff, 0x3f, 0x07, 0xff, 0x1f, 0x81, 0xff,
    0x8f, 0xc0, 0x7f, 0x87, 0xf0, 0x3f, 0xc1, 0xfc, 0x3f, 0xe0, 0xff, 0xff, 0xf8, 0x3f, 0xff, 0xfe,
    0x0f, 0xff, 0xbf, 0x83, 0xff, 0x0f, 0xe0, 0x1c, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff, 0xfe, 0x0f,
    0x8f, 0x87, 0xc3, 0xe3, 0xe1, 0xf1, 0xf8, 0xf8, 0x7c, 0x7e, 0x3f, 0x1f, 0x8f, 0x87, 0xc3, 0xe1,
    0xf0, 0xf8, 0x7c, 0x3e, 0x1f, 0x0f, 0xc7, 0xe1, 0xf0, 0xf8, 0x7c, 0x1f, 0x0f, 0x87, 0xc1, 0xf0,
    0xf8, 0x3e, 0x1f, 0xf8, 0x7c, 0x1f, 0x0f, 0x83, 0xe1, 0xf0, 0xf8, 0x3e, 0x1f, 0x0f, 0x87, 0xe3,
    0xf1, 0xf8, 0xfc, 0x3e, 0x1f, 0x0f, 0x8f, 0xc7, 0xe3, 0xf1, 0xf8, 0xf8, 0x7c, 0x3e, 0x3f, 0x1f,
    0x0f, 0x8f, 0x87, 0xc3, 0xe3, 0xe1, 0xe0, 0x03, 0x80, 0x07, 0x00, 0x0e, 0x02, 0x1c, 0x2e, 0x38,
    0xff, 0x77, 0xdf, 0xff, 0x0f, 0xf8, 0x0f, 0xe0, 0x3f, 0xe0, 0xff, 0xe7, 0xdd, 0xff, 0x39, 0xf8,
    0x70, 0x80, 0xe0, 0x01, 0xc0, 0x03, 0x80, 0x00, 0x70, 0x00, 0x03, 0xc0, 0x00, 0x1e, 0x00, 0x00,
    0xf0, 0x00, 0x07, 0x80, 0x00, 0x3c, 0x00, 0x01, 0xe0, 0x00, 0x0f, 0x00, 0x00, 0x78, 0x00, 0x03,
    0xc0, 0x3f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xbf, 0xff, 0xfc, 0x01, 0xe0, 0x00, 0x0f,
    0x00, 0x00, 0x78, 0x00, 0x03, 0xc0, 0x00, 0x1e, 0x00, 0x00, 0xf0, 0x00, 0x07, 0x80, 0x00, 0x3c,
    0x00, 0x01, 0xe0, 0x00, 0x7e, 0xfd, 0xfb, 0xf7, 0xef, 0xdf, 0x3e, 0x79, 0xf3, 0xc7, 0x80, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xc0, 0xff, 0xff, 0xff, 0xff, 0xff, 0xc0, 0x00, 0xf0, 0x0e, 0x00,
    0xe0, 0x1e, 0x01, 0xe0, 0x1c, 0x03, 0xc0, 0x3c, 0x03, 0x80, 0x38, 0x07, 0x80, 0x78, 0x07, 0x00,
    0xf0, 0x0f, 0x00, 0xe0, 0x0e, 0x01, 0xe0, 0x1e, 0x01, 0xc0, 0x3c, 0x03, 0xc0, 0x38, 0x03, 0x80,
    0x78, 0x07, 0x80, 0x70, 0x0f, 0x00, 0xf0, 0x00, 0x00, 0xf8, 0x00, 0x7f, 0xe0, 0x0f, 0xff, 0x01,
    0xff, 0xf8, 0x1f, 0xff, 0xc3, 0xf8, 0xfc, 0x3f, 0x07, 0xe7, 0xe0, 0x7e, 0x7e, 0x07, 0xe7, 0xe0,
    0x3f, 0x7e, 0x03, 0xf7, 0xe0, 0x3f, 0xfe, 0x03, 0xff, 0xe0, 0x3f, 0xfe, 0x03, 0xff, 0xe0, 0x3f,
    0x7e, 0x03, 0xf7, 0xe0, 0x3f, 0x7e, 0x03, 0xf7, 0xe0, 0x7e, 0x7e, 0x07, 0xe3, 0xf0, 0x7e, 0x3f,
    0x8f, 0xc1, 0xff, 0xfc, 0x1f, 0xff, 0x80, 0xff, 0xf0, 0x03, 0xfe, 0x00, 0x07, 0x00, 0x3f, 0xe0,
    0xff, 0xe0, 0xff, 0xe0, 0xff, 0xe0, 0xff, 0xe0, 0x07, 0xe0, 0x07, 0xe0, 0x07, 0xe0, 0x07, 0xe0,
    0x07, 0xe0, 0x07, 0xe0, 0x07, 0xe0, 0x07, 0xe0, 0x07, 0xe0, 0x07, 0xe0, 0x07, 0xe0, 0x07, 0xe0,
    0x07, 0xe0, 0x07, 0xe0, 0x07, 0xe0, 0x07, 0xe0, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0x07, 0xe0, 0x0f, 0xff, 0x0f, 0xff, 0xe3, 0xff, 0xfc, 0xff, 0xff, 0xbe, 0x0f, 0xec,
    0x01, 0xf8, 0x00, 0x7f, 0x00, 0x1f, 0xc0, 0x07, 0xf0, 0x01, 0xf8, 0x00, 0x7e, 0x00, 0x3f, 0x00,
    0x1f, 0xc0, 0x0f, 0xe0, 0x07, 0xf0, 0x03, 0xf8, 0x01, 0xfc, 0x00, 0xfe, 0x00, 0x7f, 0x00, 0x3f,
    0x80, 0x1f, 0xc0, 0x0f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfc, 0x07,
    0xf0, 0x1f, 0xff, 0x07, 0xff, 0xf1, 0xff, 0xfe, 0x7f, 0xff, 0x98, 0x0f, 0xe0, 0x01, 0xf8, 0x00,
    0x7e, 0x00, 0x1f, 0x80, 0x07, 0xe0, 0x03, 0xf8, 0x3f, 0xfc, 0x0f, 0xfc, 0x03, 0xff, 0x80, 0xff,
    0xf0, 0x3f, 0xfe, 0x00, 0x3f, 0x80, 0x07, 0xf0, 0x00, 0xfc, 0x00, 0x3f, 0x00, 0x0f, 0xe0, 0x07,
    0xff, 0x03, 0xfb, 0xff, 0xfe, 0xff, 0xff, 0x3f, 0xff, 0x87, 0xff, 0xc0, 0x1f, 0x00, 0x00, 0x7f,
    0x80, 0x07, 0xf8, 0x00, 0xff, 0x80, 0x0f, 0xf8, 0x01, 0xff, 0x80, 0x3f, 0xf8, 0x03, 0xdf, 0x80,
    0x7d, 0xf8, 0x07, 0x9f, 0x80, 0xf1, 0xf8, 0x1f, 0x1f, 0x81, 0xe1, 0xf8, 0x3e, 0x1f, 0x83, 0xc1,
    0xf8, 0x78, 0x1f, 0x87, 0x81, 0xf8, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xf0, 0x01, 0xf8, 0x00, 0x1f, 0x80, 0x01, 0xf8, 0x00, 0x1f, 0x80, 0x01, 0xf8, 0x7f,
    0xff, 0x9f, 0xff, 0xe7, 0xff, 0xf9, 0xff, 0xfe, 0x7f, 0xff, 0x1f, 0x00, 0x07, 0xc0, 0x01, 0xf0,
    0x00, 0x7d, 0xe0, 0x1f, 0xff, 0x07, 0xff, 0xf1, 0xff, 0xfe, 0x7f, 0xff, 0x9c, 0x0f, 0xf0, 0x01,
    0xfc, 0x00, 0x3f, 0x00, 0x0f, 0xc0, 0x03, 0xf0, 0x00, 0xfc, 0x00, 0x3f, 0xc0, 0x1f, 0xfe, 0x0f,
    0xff, 0xff, 0xfb, 0xff, 0xfc, 0x7f, 0xfe, 0x0f, 0xff, 0x00, 0x1c, 0x00, 0x00, 0x7c, 0x00, 0x7f,
    0xf0, 0x3f, 0xfe, 0x0f, 0xff, 0xc1, 0xff, 0xf8, 0x7f, 0x03, 0x1f, 0xc0, 0x03, 0xf0, 0x00, 0x7c,
    0x00, 0x1f, 0x80, 0x03, 0xf7, 0xf8, 0x7f, 0xff, 0x8f, 0xff, 0xf9, 0xff, 0xff, 0xbf, 0xc7, 0xf7,
    0xf0, 0x7e, 0xfe, 0x07, 0xff, 0xc0, 0xff, 0xf8, 0x1f, 0xbf, 0x03, 0xf7, 0xe0, 0x7e, 0xfc, 0x1f,
    0x8f, 0xc3, 0xf1, 0xff, 0xfe, 0x1f, 0xff, 0x81, 0xff, 0xe0, 0x1f, 0xf0, 0x00, 0x70, 0x00, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xc0, 0x07, 0xe0, 0x01, 0xf8, 0x00,
    0xfc, 0x00, 0x3f, 0x00, 0x0f, 0xc0, 0x07, 0xe0, 0x01, 0xf8, 0x00, 0xfc, 0x00, 0x3f, 0x00, 0x0f,
    0xc0, 0x07, 0xe0, 0x01, 0xf8, 0x00, 0xfc, 0x00, 0x3f, 0x00, 0x1f, 0x80, 0x07, 0xe0, 0x01, 0xf8,
    0x00, 0xfc, 0x00, 0x3f, 0x00, 0x1f, 0x80, 0x07, 0xe0, 0x00, 0x03, 0xf0, 0x03, 0xff, 0xc0, 0xff,
    0xfc, 0x3f, 0xff, 0xc7, 0xff, 0xfc, 0xfc, 0x1f, 0xbf, 0x03, 0xf7, 0xe0, 0x7e, 0x7c, 0x0f, 0xcf,
    0xc1, 0xf9, 0xf8, 0x7e, 0x1f, 0xff, 0x81, 0xff, 0xe0, 0x1f, 0xfc, 0x0f, 0xff, 0xc3, 0xf8, 0xfc,
    0x7e, 0x0f, 0xdf, 0x80, 0xfb, 0xf0, 0x1f, 0xfe, 0x03, 0xff, 0xc0, 0x7f, 0xf8, 0x1f, 0xbf, 0x83,
    0xf3, 0xff, 0xfe, 0x7f, 0xff, 0x87, 0xff, 0xe0, 0x3f, 0xf8, 0x00, 0xf0, 0x00, 0x01, 0xe0, 0x01,
    0xff, 0x80, 0x7f, 0xf8, 0x1f, 0xff, 0x87, 0xff, 0xf1, 0xfc, 0x3f, 0x3f, 0x03, 0xe7, 0xe0, 0x7e,
    0xfc, 0x0f, 0xdf, 0x81, 0xfb, 0xf0, 0x3f, 0x7e, 0x07, 0xef, 0xc1, 0xff, 0xfe, 0x7f, 0xdf, 0xff,
    0xf9, 0xff, 0xfe, 0x1f, 0xff, 0xc1, 0xfd, 0xf8, 0x00, 0x3f, 0x00, 0x07, 0xe0, 0x01, 0xf8, 0x00,
    0x3f, 0x18, 0x1f, 0xc3, 0xff, 0xf8, 0x7f, 0xfe, 0x0f, 0xff, 0x80, 0xff, 0xc0, 0x01, 0xc0, 0x00,
    0x7f, 0xff, 0xff, 0xff, 0xff, 0xc0, 0x00, 0x00, 0x00, 0x01, 0xff, 0xff, 0xff, 0xff, 0xff, 0x3e,
    0xfd, 0xfb, 0xf7, 0xef, 0xdf, 0x80, 0x00, 0x00, 0x00, 0x00, 0x07, 0xdf, 0xbf, 0x7e, 0xfd, 0xfb,
    0xf7, 0xcf, 0x9e, 0x78, 0xf0, 0x00, 0x00, 0x38, 0x00, 0x07, 0xc0, 0x01, 0xfe, 0x00, 0x3f, 0xf0,
    0x0f, 0xfe, 0x01, 0xff, 0xc0, 0x7f, 0xf0, 0x0f, 0xfc, 0x00, 0xff, 0x80, 0x07, 0xe0, 0x00, 0x3f,
    0xc0, 0x00, 0xff, 0x80, 0x03, 0xff, 0x80, 0x03, 0xff, 0x00, 0x07, 0xff, 0x00, 0x07, 0xfe, 0x00,
    0x0f, 0xf8, 0x00, 0x0f, 0xc0, 0x00, 0x1e, 0x00, 0x00, 0x10, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xfe, 0xff, 0xff, 0xf0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe, 0xff, 0xff, 0xf0, 0xe0, 0x00, 0x07, 0xc0, 0x00, 0x3f,
    0xc0, 0x01, 0xff, 0x80, 0x03, 0xff, 0x80, 0x03, 0xff, 0x00, 0x07, 0xff, 0x00, 0x07, 0xfe, 0x00,
    0x0f, 0xf8, 0x00, 0x0f, 0xc0, 0x00, 0xfe, 0x00, 0x3f, 0xf0, 0x0f, 0xfe, 0x01, 0xff, 0xc0, 0x7f,
    0xf0, 0x0f, 0xfe, 0x00, 0xff, 0x80, 0x07, 0xf0, 0x00, 0x3c, 0x00, 0x00, 0x80, 0x00, 0x00, 0x0f,
    0x80, 0xff, 0xe3, 0xff, 0xe7, 0xff, 0xef, 0xff, 0xdc, 0x1f, 0xe0, 0x1f, 0x80, 0x3f, 0x00, 0x7e,
    0x01, 0xf8, 0x03, 0xf0, 0x0f, 0xc0, 0x3f, 0x80, 0xfe, 0x03, 0xf8, 0x07, 0xe0, 0x1f, 0x80, 0x3f,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0xf0, 0x07, 0xe0, 0x0f, 0xc0, 0x1f, 0x80, 0x3f, 0x00,
    0x7e, 0x00, 0x00, 0x3f, 0xe0, 0x00, 0x0f, 0xff, 0xc0, 0x03, 0xff, 0xfe, 0x00, 0x7e, 0x03, 0xf0,
    0x0f, 0x80, 0x0f, 0x81, 0xf0, 0x00, 0x3c, 0x1c, 0x00, 0x01, 0xc3, 0xc0, 0x00, 0x1e, 0x38, 0x1f,
    0x38, 0xe7, 0x03, 0xff, 0x8f, 0x70, 0x7f, 0xf8, 0x77, 0x0f, 0x8f, 0x87, 0xe0, 0xf0, 0x78, 0x7e,
    0x0e, 0x07, 0x87, 0xe1, 0xe0, 0x78, 0x7e, 0x1e, 0x07, 0x87, 0xe1, 0xe0, 0x78, 0x7e, 0x0e, 0x07,
    0x8f, 0xe0, 0xf0, 0x78, 0xe7, 0x0f, 0x0f, 0x9e, 0x70, 0x7f, 0xff, 0xc7, 0x07, 0xff, 0xf8, 0x38,
    0x3f, 0x3e, 0x03, 0xc0, 0x43, 0x00, 0x1c, 0x00, 0x00, 0x01, 0xf0, 0x00, 0x40, 0x0f, 0x80, 0x0e,
    0x00, 0x7e, 0x07, 0xe0, 0x03, 0xff, 0xfe, 0x00, 0x0f, 0xff, 0x80, 0x00, 0x3f, 0xe0, 0x00, 0x00,
    0x7f, 0x00, 0x00, 0x7f, 0xc0, 0x00, 0x3f, 0xe0, 0x00, 0x1f, 0xf0, 0x00, 0x1f, 0xfc, 0x00, 0x0f,
    0xfe, 0x00, 0x07, 0xff, 0x00, 0x07, 0xef, 0xc0, 0x03, 0xf7, 0xe0, 0x01, 0xf1, 0xf0, 0x01, 0xf8,
    0xfc, 0x00, 0xfc, 0x7e, 0x00, 0x7e, 0x1f, 0x00, 0x7e, 0x0f, 0xc0, 0x3f, 0x07, 0xe0, 0x1f, 0x83,
    0xf0, 0x1f, 0xff, 0xfc, 0x0f, 0xff, 0xfe, 0x07, 0xff, 0xff, 0x07, 0xff, 0xff, 0xc3, 0xff, 0xff,
    0xe1, 0xf8, 0x03, 0xf1, 0xf8, 0x00, 0xfc, 0xfc, 0x00, 0x7e, 0x7e, 0x00, 0x3f, 0x7e, 0x00, 0x0f,
    0xc0, 0xff, 0xfc, 0x0f, 0xff, 0xf0, 0xff, 0xff, 0x8f, 0xff, 0xfc, 0xfc, 0x3f, 0xcf, 0xc0, 0xfc,
    0xfc, 0x0f, 0xef, 0xc0, 0xfc, 0xfc, 0x0f, 0xcf, 0xc1, 0xfc, 0xff, 0xff, 0x8f, 0xff, 0xf0, 0xff,
    0xff, 0x8f, 0xff, 0xfc, 0xff, 0xff, 0xef, 0xc0, 0xfe, 0xfc, 0x07, 0xef, 0xc0, 0x7e, 0xfc, 0x07,
    0xff, 0xc0, 0x7e, 0xfc, 0x0f, 0xef, 0xff, 0xfe, 0xff, 0xff, 0xef, 0xff, 0xfc, 0xff, 0xff, 0x8f,
    0xff, 0xc0, 0x00, 0x7e, 0x00, 0x3f, 0xfc, 0x07, 0xff, 0xf0, 0xff, 0xff, 0x1f, 0xff, 0xf3, 0xfe,
    0x1f, 0x7f, 0x80, 0x37, 0xf0, 0x00, 0xfe, 0x00, 0x0f, 0xe0, 0x00, 0xfc, 0x00, 0x0f, 0xc0, 0x00,
    0xfc, 0x00, 0x0f, 0xc0, 0x00, 0xfc, 0x00, 0x0f, 0xc0, 0x00, 0xfc, 0x00, 0x0f, 0xc0, 0x00, 0xfe,
    0x00, 0x0f, 0xe0, 0x00, 0x7f, 0x00, 0x17, 0xf8, 0x07, 0x3f, 0xff, 0xf1, 0xff, 0xff, 0x0f, 0xff,
    0xf0, 0x7f, 0xff, 0x01, 0xff, 0xc0, 0x01, 0xc0, 0xff, 0xfc, 0x03, 0xff, 0xfe, 0x0f, 0xff, 0xfc,
    0x3f, 0xff, 0xf8, 0xff, 0xff, 0xf3, 0xf0, 0x3f, 0xcf, 0xc0, 0x7f, 0xbf, 0x00, 0xfe, 0xfc, 0x01,
    0xff, 0xf0, 0x07, 0xff, 0xc0, 0x0f, 0xff, 0x00, 0x3f, 0xfc, 0x00, 0xff, 0xf0, 0x03, 0xff, 0xc0,
    0x0f, 0xff, 0x00, 0x3f, 0xfc, 0x01, 0xff, 0xf0, 0x07, 0xff, 0xc0, 0x3f, 0xbf, 0x01, 0xfe, 0xfc,
    0x1f, 0xf3, 0xff, 0xff, 0xcf, 0xff, 0xfe, 0x3f, 0xff, 0xf0, 0xff, 0xff, 0x03, 0xff, 0xe0, 0x00,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xf7, 0xe0, 0x03, 0xf0, 0x01, 0xf8,
    0x00, 0xfc, 0x00, 0x7e, 0x00, 0x3f, 0xff, 0xdf, 0xff, 0xef, 0xff, 0xf7, 0xff, 0xfb, 0xff, 0xfd,
    0xf8, 0x00, 0xfc, 0x00, 0x7e, 0x00, 0x3f, 0x00, 0x1f, 0x80, 0x0f, 0xc0, 0x07, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xc0, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xf7, 0xe0, 0x03, 0xf0, 0x01, 0xf8, 0x00, 0xfc, 0x00, 0x7e, 0x00, 0x3f, 0xff, 0xdf,
    0xff, 0xef, 0xff, 0xf7, 0xff, 0xfb, 0xff, 0xfd, 0xf8, 0x00, 0xfc, 0x00, 0x7e, 0x00, 0x3f, 0x00,
    0x1f, 0x80, 0x0f, 0xc0, 0x07, 0xe0, 0x03, 0xf0, 0x01, 0xf8, 0x00, 0xfc, 0x00, 0x7e, 0x00, 0x00,
    0x00, 0x3f, 0x00, 0x0f, 0xff, 0xc0, 0x7f, 0xff, 0x83, 0xff, 0xfe, 0x1f, 0xff, 0xf8, 0xff, 0x83,
    0xe7, 0xf8, 0x01, 0x9f, 0xc0, 0x00, 0xfe, 0x00, 0x03, 0xf8, 0x00, 0x0f, 0xc0, 0x00, 0x3f, 0x00,
    0x00, 0xfc, 0x07, 0xff, 0xf0, 0x1f, 0xff, 0xc0, 0x7f, 0xff, 0x01, 0xff, 0xfc, 0x07, 0xff, 0xf0,
    0x03, 0xff, 0xe0, 0x0f, 0xff, 0x80, 0x3f, 0x7f, 0x00, 0xfd, 0xfe, 0x03, 0xf3, 0xff, 0xff, 0xc7,
    0xff, 0xff, 0x0f, 0xff, 0xfc, 0x1f, 0xff, 0xe0, 0x1f, 0xfe, 0x00, 0x07, 0x00, 0xfc, 0x01, 0xff,
    0xe0, 0x0f, 0xff, 0x00, 0x7f, 0xf8, 0x03, 0xff, 0xc0, 0x1f, 0xfe, 0x00, 0xff, 0xf0, 0x07, 0xff,
    0x80, 0x3f, 0xfc, 0x01, 0xff, 0xe0, 0x0f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0x80, 0x3f, 0xfc, 0x01, 0xff, 0xe0, 0x0f, 0xff, 0x00, 0x7f, 0xf8,
    0x03, 0xff, 0xc0, 0x1f, 0xfe, 0x00, 0xff, 0xf0, 0x07, 0xff, 0x80, 0x3f, 0xfc, 0x01, 0xff, 0xe0,
    0x0f, 0xc0, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xf0, 0x07, 0xe0, 0xfc, 0x1f, 0x83, 0xf0, 0x7e, 0x0f, 0xc1, 0xf8,
    0x3f, 0x07, 0xe0, 0xfc, 0x1f, 0x83, 0xf0, 0x7e, 0x0f, 0xc1, 0xf8, 0x3f, 0x07, 0xe0, 0xfc, 0x1f,
    0x83, 0xf0, 0x7e, 0x0f, 0xc1, 0xf8, 0x3f, 0x07, 0xe0, 0xfc, 0x3f, 0x8f, 0xff, 0xfd, 0xff, 0xbf,
    0xe7, 0xf8, 0xfc, 0x00, 0xfc, 0x03, 0xf9, 0xf8, 0x0f, 0xe3, 0xf0, 0x3f, 0x87, 0xe0, 0xff, 0x0f,
    0xc3, 0xfc, 0x1f, 0x87, 0xf0, 0x3f, 0x1f, 0xc0, 0x7e, 0x7f, 0x00, 0xfd, 0xfc, 0x01, 0xff, 0xf0,
    0x03, 0xff, 0xc0, 0x07, 0xff, 0x00, 0x0f, 0xfe, 0x00, 0x1f, 0xfe, 0x00, 0x3f, 0xfe, 0x00, 0x7f,
    0xfe, 0x00, 0xfd, 0xfc, 0x01, 0xf9, 0xfc, 0x03, 0xf1, 0xfc, 0x07, 0xe1, 0xfc, 0x0f, 0xc3, 0xfc,
    0x1f, 0x83, 0xfc, 0x3f, 0x03, 0xfc, 0x7e, 0x03, 0xfc, 0xfc, 0x03, 0xfd, 0xf8, 0x03, 0xfc, 0xfc,
    0x00, 0x7e, 0x00, 0x3f, 0x00, 0x1f, 0x80, 0x0f, 0xc0, 0x07, 0xe0, 0x03, 0xf0, 0x01, 0xf8, 0x00,
    0xfc, 0x00, 0x7e, 0x00, 0x3f, 0x00, 0x1f, 0x80, 0x0f, 0xc0, 0x07, 0xe0, 0x03, 0xf0, 0x01, 0xf8,
    0x00, 0xfc, 0x00, 0x7e, 0x00, 0x3f, 0x00, 0x1f, 0x80, 0x0f, 0xc0, 0x07, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xc0, 0xff, 0x00, 0x3f, 0xff, 0xc0, 0x0f, 0xff, 0xf8, 0x07,
    0xff, 0xfe, 0x01, 0xff, 0xff, 0xc0, 0x7f, 0xff, 0xf0, 0x3f, 0xff, 0xfc, 0x0f, 0xff, 0xff, 0x83,
    0xff, 0xff, 0xe1, 0xff, 0xff, 0x78, 0x7b, 0xff, 0xdf, 0x3e, 0xff, 0xf3, 0xcf, 0xbf, 0xfc, 0xfb,
    0xcf, 0xff, 0x3f, 0xf3, 0xff, 0xc7, 0xfc, 0xff, 0xf1, 0xfe, 0x3f, 0xfc, 0x7f, 0x8f, 0xff, 0x0f,
    0xc3, 0xff, 0xc3, 0xf0, 0xff, 0xf0, 0x7c, 0x3f, 0xfc, 0x1e, 0x0f, 0xff, 0x00, 0x03, 0xff, 0xc0,
    0x00, 0xff, 0xf0, 0x00, 0x3f, 0xfc, 0x00, 0x0f, 0xff, 0x00, 0x03, 0xf0, 0xfe, 0x01, 0xff, 0xf8,
    0x0f, 0xff, 0xc0, 0x7f, 0xff, 0x03, 0xff, 0xf8, 0x1f, 0xff, 0xe0, 0xff, 0xff, 0x07, 0xff, 0xfc,
    0x3f, 0xff, 0xe1, 0xff, 0xff, 0x0f, 0xff, 0x7c, 0x7f, 0xfb, 0xe3, 0xff, 0xcf, 0x9f, 0xfe, 0x7c,
    0xff, 0xf1, 0xf7, 0xff, 0x8f, 0xbf, 0xfc, 0x3f, 0xff, 0xe1, 0xff, 0xff, 0x07, 0xff, 0xf8, 0x3f,
    0xff, 0xc0, 0xff, 0xfe, 0x07, 0xff, 0xf0, 0x1f, 0xff, 0x80, 0xff, 0xfc, 0x03, 0xff, 0xe0, 0x1f,
    0xc0, 0x00, 0x7e, 0x00, 0x03, 0xff, 0xc0, 0x0f, 0xff, 0xe0, 0x1f, 0xff, 0xf0, 0x3f, 0xff, 0xf8,
    0x3f, 0xc3, 0xfc, 0x7f, 0x01, 0xfc, 0x7e, 0x00, 0xfe, 0xfe, 0x00, 0x7e, 0xfe, 0x00, 0x7e, 0xfc,
    0x00, 0x7f, 0xfc, 0x00, 0x7f, 0xfc, 0x00, 0x7f, 0xfc, 0x00, 0x3f, 0xfc, 0x00, 0x3f, 0xfc, 0x00,
    0x7f, 0xfc, 0x00, 0x7f, 0xfc, 0x00, 0x7f, 0xfe, 0x00, 0x7e, 0xfe, 0x00, 0xfe, 0x7f, 0x00, 0xfe,
    0x7f, 0x81, 0xfc, 0x3f, 0xff, 0xfc, 0x1f, 0xff, 0xf8, 0x1f, 0xff, 0xf0, 0x07, 0xff, 0xe0, 0x03,
    0xff, 0x80, 0x00, 0x38, 0x00, 0xff, 0xfe, 0x0f, 0xff, 0xf0, 0xff, 0xff, 0xcf, 0xff, 0xfc, 0xff,
    0xff, 0xef, 0xc0, 0xfe, 0xfc, 0x07, 0xef, 0xc0, 0x7e, 0xfc, 0x07, 0xff, 0xc0, 0x7e, 0xfc, 0x07,
    0xef, 0xc1, 0xfe, 0xff, 0xff, 0xef, 0xff, 0xfc, 0xff, 0xff, 0x8f, 0xff, 0xf0, 0xff, 0xfc, 0x0f,
    0xc0, 0x00, 0xfc, 0x00, 0x0f, 0xc0, 0x00, 0xfc, 0x00, 0x0f, 0xc0, 0x00, 0xfc, 0x00, 0x0f, 0xc0,
    0x00, 0xfc, 0x00, 0x0f, 0xc0, 0x00, 0x00, 0x7e, 0x00, 0x03, 0xff, 0xc0, 0x0f, 0xff, 0xe0, 0x1f,
    0xff, 0xf0, 0x3f, 0xff, 0xf8, 0x3f, 0xc3, 0xfc, 0x7f, 0x01, 0xfc, 0x7e, 0x00, 0xfe, 0xfe, 0x00,
    0x7e, 0xfe, 0x00, 0x7e, 0xfc, 0x00, 0x7f, 0xfc, 0x00, 0x7f, 0xfc, 0x00, 0x7f, 0xfc, 0x00, 0x3f,
    0xfc, 0x00, 0x3f, 0xfc, 0x00, 0x7f, 0xfc, 0x00, 0x7f, 0xfc, 0x00, 0x7f, 0xfe, 0x00, 0x7e, 0xfe,
    0x00, 0xfe, 0x7f, 0x00, 0xfe, 0x7f, 0x01, 0xfc, 0x3f, 0xff, 0xfc, 0x1f, 0xff, 0xf8, 0x1f, 0xff,
    0xf0, 0x07, 0xff, 0xe0, 0x01, 0xff, 0xc0, 0x00, 0x1f, 0xc0, 0x00, 0x07, 0xe0, 0x00, 0x03, 0xf0,
    0x00, 0x01, 0xf8, 0x00, 0x00, 0xf8, 0xff, 0xfc, 0x07, 0xff, 0xf8, 0x3f, 0xff, 0xe1, 0xff, 0xff,
    0x8f, 0xff, 0xfc, 0x7e, 0x0f, 0xe3, 0xf0, 0x3f, 0x1f, 0x81, 0xf8, 0xfc, 0x0f, 0xc7, 0xe0, 0x7e,
    0x3f, 0x07, 0xf1, 0xff, 0xff, 0x0f, 0xff, 0xf0, 0x7f, 0xfe, 0x03, 0xff, 0xf8, 0x1f, 0xff, 0xe0,
    0xfc, 0x3f, 0x87, 0xe0, 0xfe, 0x3f, 0x07, 0xf1, 0xf8, 0x1f, 0x8f, 0xc0, 0xfe, 0x7e, 0x03, 0xf3,
    0xf0, 0x1f, 0xdf, 0x80, 0x7e, 0xfc, 0x03, 0xff, 0xe0, 0x0f, 0xc0, 0x03, 0xf8, 0x01, 0xff, 0xf0,
    0x7f, 0xff, 0x1f, 0xff, 0xe7, 0xff, 0xfc, 0xfe, 0x0f, 0xbf, 0x00, 0x37, 0xe0, 0x00, 0xfc, 0x00,
    0x1f, 0xc0, 0x01, 0xfe, 0x00, 0x3f, 0xfc, 0x07, 0xff, 0xf0, 0x7f, 0xff, 0x07, 0xff, 0xf0, 0x3f,
    0xfe, 0x00, 0x7f, 0xe0, 0x01, 0xfc, 0x00, 0x1f, 0x80, 0x03, 0xfc, 0x00, 0x7f, 0xe0, 0x1f, 0xff,
    0xff, 0xf7, 0xff, 0xfe, 0xff, 0xff, 0x8f, 0xff, 0xf0, 0x7f, 0xf8, 0x00, 0x70, 0x00, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfc, 0x03, 0xf0, 0x00, 0x0f,
    0xc0, 0x00, 0x3f, 0x00, 0x00, 0xfc, 0x00, 0x03, 0xf0, 0x00, 0x0f, 0xc0, 0x00, 0x3f, 0x00, 0x00,
    0xfc, 0x00, 0x03, 0xf0, 0x00, 0x0f, 0xc0, 0x00, 0x3f, 0x00, 0x00, 0xfc, 0x00, 0x03, 0xf0, 0x00,
    0x0f, 0xc0, 0x00, 0x3f, 0x00, 0x00, 0xfc, 0x00, 0x03, 0xf0, 0x00, 0x0f, 0xc0, 0x00, 0x3f, 0x00,
    0x00, 0xfc, 0x00, 0x03, 0xf0, 0x00, 0xfc, 0x03, 0xff, 0xc0, 0x3f, 0xfc, 0x03, 0xff, 0xc0, 0x3f,
    0xfc, 0x03, 0xff, 0xc0, 0x3f, 0xfc, 0x03, 0xff, 0xc0, 0x3f, 0xfc, 0x03, 0xff, 0xc0, 0x3f, 0xfc,
    0x03, 0xff, 0xc0, 0x3f, 0xfc, 0x03, 0xff, 0xc0, 0x3f, 0xfc, 0x03, 0xff, 0xc0, 0x3f, 0xfc, 0x03,
    0xff, 0xc0, 0x3f, 0xfc, 0x03, 0xff, 0xe0, 0x3f, 0x7e, 0x07, 0xf7, 0xff, 0xfe, 0x7f, 0xff, 0xe3,
    0xff, 0xfc, 0x1f, 0xff, 0x80, 0x7f, 0xf0, 0x00, 0xf0, 0x00, 0xfe, 0x00, 0x1f, 0xbf, 0x00, 0x1f,
    0x9f, 0x80, 0x0f, 0xcf, 0xc0, 0x07, 0xe3, 0xf0, 0x07, 0xe1, 0xf8, 0x03, 0xf0, 0xfc, 0x01, 0xf8,
    0x3f, 0x01, 0xf8, 0x1f, 0x80, 0xfc, 0x0f, 0xc0, 0x7e, 0x03, 0xf0, 0x7e, 0x01, 0xf8, 0x3f, 0x00,
    0xfc, 0x1f, 0x80, 0x3f, 0x1f, 0x80, 0x1f, 0x8f, 0xc0, 0x0f, 0xc7, 0xe0, 0x03, 0xf7, 0xe0, 0x01,
    0xfb, 0xf0, 0x00, 0xff, 0xf8, 0x00, 0x3f, 0xf8, 0x00, 0x1f, 0xfc, 0x00, 0x0f, 0xfe, 0x00, 0x03,
    0xfe, 0x00, 0x01, 0xff, 0x00, 0x00, 0xff, 0x80, 0x00, 0x3f, 0x80, 0x00, 0xfc, 0x03, 0xf0, 0x0f,
    0xff, 0x00, 0xfc, 0x03, 0xe7, 0xc0, 0x7f, 0x01, 0xf9, 0xf8, 0x1f, 0xe0, 0x7e, 0x7e, 0x07, 0xf8,
    0x1f, 0x9f, 0x81, 0xfe, 0x07, 0xe7, 0xe0, 0xff, 0x83, 0xf0, 0xfc, 0x3f, 0xe0, 0xfc, 0x3f, 0x0f,
    0x7c, 0x3f, 0x0f, 0xc3, 0xcf, 0x0f, 0xc3, 0xf0, 0xf3, 0xc3, 0xe0, 0xfc, 0x7c, 0xf1, 0xf8, 0x1f,
    0x9f, 0x3e, 0x7e, 0x07, 0xe7, 0x8f, 0x9f, 0x81, 0xf9, 0xe1, 0xe7, 0xe0, 0x7e, 0x78, 0x79, 0xf0,
    0x1f, 0xbe, 0x1e, 0xfc, 0x03, 0xff, 0x07, 0xff, 0x00, 0xff, 0xc1, 0xff, 0xc0, 0x3f, 0xf0, 0x3f,
    0xf0, 0x0f, 0xfc, 0x0f, 0xf8, 0x01, 0xff, 0x03, 0xfe, 0x00, 0x7f, 0x80, 0xff, 0x80, 0x1f, 0xe0,
    0x1f, 0xe0, 0x07, 0xf8, 0x07, 0xf8, 0x01, 0xfe, 0x01, 0xfc, 0x00, 0xfe, 0x00, 0xfe, 0xfc, 0x01,
    0xf8, 0xfc, 0x07, 0xe1, 0xfc, 0x1f, 0xc1, 0xf8, 0x3f, 0x03, 0xf8, 0xfe, 0x03, 0xf3, 0xf8, 0x03,
    0xf7, 0xe0, 0x07, 0xff, 0xc0, 0x07, 0xff, 0x00, 0x0f, 0xfc, 0x00, 0x0f, 0xf8, 0x00, 0x0f, 0xe0,
    0x00, 0x3f, 0xe0, 0x00, 0x7f, 0xc0, 0x01, 0xff, 0xc0, 0x07, 0xff, 0xc0, 0x0f, 0xdf, 0x80, 0x3f,
    0xbf, 0x80, 0x7e, 0x3f, 0x01, 0xf8, 0x3f, 0x07, 0xf0, 0x7f, 0x0f, 0xc0, 0x7e, 0x3f, 0x80, 0xfe,
    0xfe, 0x00, 0xfd, 0xf8, 0x00, 0xfc, 0xfe, 0x00, 0x7e, 0xfc, 0x01, 0xfd, 0xfc, 0x07, 0xf1, 0xfc,
    0x0f, 0xe3, 0xf8, 0x3f, 0x83, 0xf8, 0x7e, 0x03, 0xf1, 0xfc, 0x07, 0xf3, 0xf0, 0x07, 0xef, 0xe0,
    0x0f, 0xff, 0x80, 0x0f, 0xfe, 0x00, 0x0f, 0xfc, 0x00, 0x1f, 0xf0, 0x00, 0x1f, 0xe0, 0x00, 0x3f,
    0x80, 0x00, 0x3f, 0x00, 0x00, 0x7e, 0x00, 0x00, 0xfc, 0x00, 0x01, 0xf8, 0x00, 0x03, 0xf0, 0x00,
    0x07, 0xe0, 0x00, 0x0f, 0xc0, 0x00, 0x1f, 0x80, 0x00, 0x3f, 0x00, 0x00, 0x7e, 0x00, 0x00, 0xfc,
    0x00, 0x7f, 0xff, 0xfb, 0xff, 0xff, 0xdf, 0xff, 0xfe, 0xff, 0xff, 0xf7, 0xff, 0xff, 0x00, 0x03,
    0xf0, 0x00, 0x3f, 0x80, 0x03, 0xf8, 0x00, 0x3f, 0x80, 0x01, 0xfc, 0x00, 0x1f, 0xc0, 0x01, 0xfc,
    0x00, 0x1f, 0xc0, 0x00, 0xfe, 0x00, 0x0f, 0xe0, 0x00, 0xfe, 0x00, 0x0f, 0xe0, 0x00, 0x7f, 0x00,
    0x07, 0xf0, 0x00, 0x7f, 0x00, 0x07, 0xf0, 0x00, 0x3f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xc0, 0xff, 0xff, 0xff, 0xff, 0xfe, 0xf8, 0x3e, 0x0f, 0x83, 0xe0,
    0xf8, 0x3e, 0x0f, 0x83, 0xe0, 0xf8, 0x3e, 0x0f, 0x83, 0xe0, 0xf8, 0x3e, 0x0f, 0x83, 0xe0, 0xf8,
    0x3e, 0x0f, 0x83, 0xe0, 0xf8, 0x3e, 0x0f, 0x83, 0xe0, 0xff, 0xff, 0xff, 0xff, 0xfe, 0xf0, 0x0f,
    0x00, 0x70, 0x07, 0x80, 0x78, 0x03, 0x80, 0x38, 0x03, 0xc0, 0x3c, 0x01, 0xc0, 0x1e, 0x01, 0xe0,
    0x0e, 0x00, 0xe0, 0x0f, 0x00, 0xf0, 0x07, 0x00, 0x78, 0x07, 0x80, 0x38, 0x03, 0x80, 0x3c, 0x03,
    0xc0, 0x1c, 0x01, 0xc0, 0x1e, 0x01, 0xe0, 0x0e, 0x00, 0xf0, 0xff, 0xff, 0xff, 0xfd, 0xff, 0x07,
    0xc1, 0xf0, 0x7c, 0x1f, 0x07, 0xc1, 0xf0, 0x7c, 0x1f, 0x07, 0xc1, 0xf0, 0x7c, 0x1f, 0x07, 0xc1,
    0xf0, 0x7c, 0x1f, 0x07, 0xc1, 0xf0, 0x7c, 0x1f, 0x07, 0xc1, 0xf0, 0x7c, 0x1f, 0xff, 0xff, 0xff,
    0xff, 0xff, 0x01, 0xf0, 0x00, 0x7f, 0x00, 0x1f, 0xf0, 0x07, 0xff, 0x00, 0xfb, 0xf0, 0x3e, 0x3e,
    0x0f, 0x83, 0xe3, 0xe0, 0x1e, 0xf0, 0x01, 0xfc, 0x00, 0x1c, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xf0, 0x78, 0x3c, 0x3c, 0x1e, 0x0f, 0x07, 0x1f, 0xfc, 0x0f, 0xff, 0xc3, 0xff, 0xf8,
    0xff, 0xfe, 0x38, 0x1f, 0xc0, 0x03, 0xf0, 0x00, 0xfc, 0x07, 0xff, 0x1f, 0xff, 0xcf, 0xff, 0xf7,
    0xff, 0xfd, 0xfc, 0x3f, 0xfc, 0x0f, 0xff, 0x03, 0xff, 0xc0, 0xff, 0xf8, 0x7f, 0x7f, 0xff, 0xdf,
    0xff, 0xf3, 0xff, 0xfc, 0x7f, 0x3f, 0x03, 0x00, 0x00, 0xfc, 0x00, 0x1f, 0x80, 0x03, 0xf0, 0x00,
    0x7e, 0x00, 0x0f, 0xc0, 0x01, 0xf8, 0x00, 0x3f, 0x00, 0x07, 0xe7, 0xe0, 0xfd, 0xff, 0x1f, 0xff,
    0xe3, 0xff, 0xfe, 0x7f, 0xff, 0xef, 0xe0, 0xfd, 0xf8, 0x1f, 0xbf, 0x01, 0xff, 0xe0, 0x3f, 0xfc,
    0x07, 0xff, 0x80, 0xff, 0xf0, 0x1f, 0xfe, 0x03, 0xff, 0xc0, 0xfd, 0xf8, 0x1f, 0xbf, 0xc7, 0xf7,
    0xff, 0xfc, 0xff, 0xff, 0x9f, 0xff, 0xe3, 0xf3, 0xf8, 0x00, 0x18, 0x00, 0x03, 0xfe, 0x0f, 0xff,
    0x1f, 0xff, 0x3f, 0xff, 0x3f, 0xcf, 0x7f, 0x01, 0x7e, 0x00, 0x7e, 0x00, 0xfe, 0x00, 0xfc, 0x00,
    0xfc, 0x00, 0xfc, 0x00, 0x7e, 0x00, 0x7e, 0x00, 0x7f, 0x00, 0x7f, 0x83, 0x3f, 0xff, 0x1f, 0xff,
    0x0f, 0xff, 0x07, 0xff, 0x00, 0x70, 0x00, 0x03, 0xf0, 0x00, 0x3f, 0x00, 0x03, 0xf0, 0x00, 0x3f,
    0x00, 0x03, 0xf0, 0x00, 0x3f, 0x00, 0x03, 0xf0, 0x7e, 0x3f, 0x0f, 0xf3, 0xf1, 0xff, 0xff, 0x3f,
    0xff, 0xf3, 0xff, 0xff, 0x7f, 0x07, 0xf7, 0xe0, 0x7f, 0x7e, 0x07, 0xff, 0xe0, 0x3f, 0xfc, 0x03,
    0xff, 0xc0, 0x3f, 0xfc, 0x03, 0xf7, 0xe0, 0x3f, 0x7e, 0x07, 0xf7, 0xe0, 0x7f, 0x7f, 0x0f, 0xf3,
    0xff, 0xff, 0x3f, 0xff, 0xf1, 0xff, 0xbf, 0x0f, 0xf3, 0xf0, 0x18, 0x00, 0x03, 0xfc, 0x00, 0xff,
    0xf0, 0x1f, 0xff, 0x83, 0xff, 0xfc, 0x3f, 0x0f, 0xc7, 0xe0, 0x7e, 0x7e, 0x07, 0xe7, 0xc0, 0x7e,
    0xff, 0xff, 0xef, 0xff, 0xfe, 0xff, 0xff, 0xff, 0xff, 0xff, 0x7c, 0x00, 0x07, 0xe0, 0x00, 0x7e,
    0x00, 0x47, 0xf0, 0x1e, 0x3f, 0xff, 0xe1, 0xff, 0xfe, 0x0f, 0xff, 0xe0, 0x7f, 0xf8, 0x00, 0x70,
    0x00, 0x03, 0xfe, 0x0f, 0xfc, 0x3f, 0xf8, 0x7f, 0xe1, 0xf8, 0x03, 0xf0, 0x07, 0xe0, 0x3f, 0xfe,
    0xff, 0xfd, 0xff, 0xfb, 0xff, 0xf3, 0xff, 0xe1, 0xf8, 0x03, 0xf0, 0x07, 0xe0, 0x0f, 0xc0, 0x1f,
    0x80, 0x3f, 0x00, 0x7e, 0x00, 0xfc, 0x01, 0xf8, 0x03, 0xf0, 0x07, 0xe0, 0x0f, 0xc0, 0x1f, 0x80,
    0x3f, 0x00, 0x7e, 0x00, 0x07, 0xe3, 0xe0, 0xff, 0x3f, 0x1f, 0xff, 0xf3, 0xff, 0xff, 0x7f, 0xff,
    0xf7, 0xf0, 0x7f, 0x7e, 0x07, 0xf7, 0xe0, 0x7f, 0xfe, 0x03, 0xff, 0xc0, 0x3f, 0xfc, 0x03, 0xff,
    0xe0, 0x3f, 0x7e, 0x07, 0xf7, 0xe0, 0x7f, 0x7f, 0x0f, 0xf3, 0xff, 0xff, 0x3f, 0xff, 0xf1, 0xff,
    0xbf, 0x0f, 0xf3, 0xf0, 0x7e, 0x3e, 0x00, 0x07, 0xe0, 0x00, 0x7e, 0x30, 0x0f, 0xe3, 0xff, 0xfc,
    0x3f, 0xff, 0xc3, 0xff, 0xf8, 0x1f, 0xfe, 0x00, 0x3f, 0x00, 0xfc, 0x00, 0x3f, 0x00, 0x0f, 0xc0,
    0x03, 0xf0, 0x00, 0xfc, 0x00, 0x3f, 0x00, 0x0f, 0xc0, 0x03, 0xf3, 0xf0, 0xfd, 0xff, 0x3f, 0xff,
    0xcf, 0xff, 0xfb, 0xff, 0xfe, 0xfe, 0x1f, 0xbf, 0x03, 0xff, 0xc0, 0xff, 0xf0, 0x3f, 0xfc, 0x0f,
    0xff, 0x03, 0xff, 0xc0, 0xff, 0xf0, 0x3f, 0xfc, 0x0f, 0xff, 0x03, 0xff, 0xc0, 0xff, 0xf0, 0x3f,
    0xfc, 0x0f, 0xff, 0x03, 0xff, 0xc0, 0xfc, 0xff, 0xff, 0xff, 0xf8, 0x00, 0x3e, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xc0, 0x0f, 0xc3, 0xf0, 0xfc,
    0x3f, 0x0f, 0x80, 0x00, 0x00, 0x3e, 0x0f, 0xc3, 0xf0, 0xfc, 0x3f, 0x0f, 0xc3, 0xf0, 0xfc, 0x3f,
    0x0f, 0xc3, 0xf0, 0xfc, 0x3f, 0x0f, 0xc3, 0xf0, 0xfc, 0x3f, 0x0f, 0xc3, 0xf0, 0xfc, 0x3e, 0x0f,
    0x87, 0xe3, 0xfb, 0xfc, 0xff, 0x3f, 0x8f, 0x80, 0xfc, 0x00, 0x1f, 0x80, 0x03, 0xf0, 0x00, 0x7e,
    0x00, 0x0f, 0xc0, 0x01, 0xf8, 0x00, 0x3f, 0x00, 0x07, 0xe0, 0x7e, 0xfc, 0x1f, 0x9f, 0x87, 0xe3,
    0xf1, 0xf8, 0x7e, 0x7e, 0x0f, 0xdf, 0xc1, 0xff, 0xf0, 0x3f, 0xfc, 0x07, 0xff, 0x00, 0xff, 0xc0,
    0x1f, 0xfc, 0x03, 0xff, 0xc0, 0x7f, 0xfc, 0x0f, 0xdf, 0x81, 0xf9, 0xf8, 0x3f, 0x3f, 0x87, 0xe3,
    0xf8, 0xfc, 0x3f, 0x9f, 0x83, 0xfb, 0xf0, 0x3f, 0x80, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xc0, 0xf8, 0xfc,
    0x1f, 0x8f, 0xdf, 0xe3, 0xfc, 0xff, 0xff, 0x7f, 0xef, 0xff, 0xff, 0xfe, 0xff, 0xff, 0xff, 0xff,
    0xe1, 0xfc, 0x3f, 0xfc, 0x1f, 0xc3, 0xff, 0xc1, 0xf8, 0x3f, 0xfc, 0x1f, 0x83, 0xff, 0xc1, 0xf8,
    0x3f, 0xfc, 0x1f, 0x83, 0xff, 0xc1, 0xf8, 0x3f, 0xfc, 0x1f, 0x83, 0xff, 0xc1, 0xf8, 0x3f, 0xfc,
    0x1f, 0x83, 0xff, 0xc1, 0xf8, 0x3f, 0xfc, 0x1f, 0x83, 0xff, 0xc1, 0xf8, 0x3f, 0xfc, 0x1f, 0x83,
    0xff, 0xc1, 0xf8, 0x3f, 0xf8, 0xfc, 0x3f, 0x7f, 0xcf, 0xff, 0xf3, 0xff, 0xfe, 0xff, 0xff, 0xbf,
    0x87, 0xef, 0xc0, 0xff, 0xf0, 0x3f, 0xfc, 0x0f, 0xff, 0x03, 0xff, 0xc0, 0xff, 0xf0, 0x3f, 0xfc,
    0x0f, 0xff, 0x03, 0xff, 0xc0, 0xff, 0xf0, 0x3f, 0xfc, 0x0f, 0xff, 0x03, 0xff, 0xc0, 0xff, 0xf0,
    0x3f, 0x03, 0xfc, 0x00, 0xff, 0xf0, 0x1f, 0xff, 0x83, 0xff, 0xfc, 0x3f, 0x9f, 0xe7, 0xf0, 0x7e,
    0x7e, 0x07, 0xe7, 0xe0, 0x3f, 0xfc, 0x03, 0xff, 0xc0, 0x3f, 0xfc, 0x03, 0xff, 0xc0, 0x3f, 0x7e,
    0x03, 0xf7, 0xe0, 0x7f, 0x7e, 0x07, 0xe7, 0xf0, 0xfe, 0x3f, 0xff, 0xc1, 0xff, 0xfc, 0x0f, 0xff,
    0x80, 0x7f, 0xe0, 0x00, 0x70, 0x00, 0xf8, 0xfc, 0x1f, 0xbf, 0xe3, 0xff, 0xfc, 0x7f, 0xff, 0xcf,
    0xff, 0xfd, 0xfc, 0x1f, 0xbf, 0x03, 0xf7, 0xe0, 0x3f, 0xfc, 0x07, 0xff, 0x80, 0xff, 0xf0, 0x1f,
    0xfe, 0x03, 0xff, 0xc0, 0x7f, 0xf8, 0x1f, 0xbf, 0x03, 0xf7, 0xf8, 0xfe, 0xff, 0xff, 0x9f, 0xff,
    0xf3, 0xff, 0xfc, 0x7e, 0x7f, 0x0f, 0xc3, 0x01, 0xf8, 0x00, 0x3f, 0x00, 0x07, 0xe0, 0x00, 0xfc,
    0x00, 0x1f, 0x80, 0x03, 0xf0, 0x00, 0x7c, 0x00, 0x00, 0x07, 0xe3, 0xe0, 0xff, 0x3f, 0x1f, 0xff,
    0xf3, 0xff, 0xff, 0x3f, 0xff, 0xf7, 0xf0, 0x7f, 0x7e, 0x07, 0xf7, 0xe0, 0x7f, 0xfe, 0x03, 0xff,
    0xc0, 0x3f, 0xfc, 0x03, 0xff, 0xc0, 0x3f, 0x7e, 0x03, 0xf7, 0xe0, 0x7f, 0x7e, 0x07, 0xf7, 0xf0,
    0xff, 0x3f, 0xff, 0xf3, 0xff, 0xff, 0x1f, 0xfb, 0xf0, 0xff, 0x3f, 0x01, 0x83, 0xf0, 0x00, 0x3f,
    0x00, 0x03, 0xf0, 0x00, 0x3f, 0x00, 0x03, 0xf0, 0x00, 0x3f, 0x00, 0x03, 0xf0, 0x00, 0x3e, 0xf8,
    0xff, 0xef, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x87, 0xf8, 0x1f, 0x80, 0xfc, 0x07, 0xe0, 0x3f,
    0x01, 0xf8, 0x0f, 0xc0, 0x7e, 0x03, 0xf0, 0x1f, 0x80, 0xfc, 0x07, 0xe0, 0x3f, 0x01, 0xf8, 0x00,
    0x1f, 0xf8, 0x7f, 0xfe, 0x7f, 0xfe, 0xff, 0xfe, 0xfc, 0x1e, 0xf8, 0x00, 0xf8, 0x00, 0xfe, 0x00,
    0xff, 0xf0, 0xff, 0xfc, 0x7f, 0xfe, 0x1f, 0xfe, 0x00, 0xff, 0x00, 0x3f, 0x00, 0x3f, 0xc0, 0x3f,
    0xff, 0xfe, 0xff, 0xfe, 0xff, 0xfc, 0x7f, 0xf8, 0x07, 0x80, 0x1f, 0x80, 0x3f, 0x00, 0x7e, 0x00,
    0xfc, 0x01, 0xf8, 0x0f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe, 0xff, 0xfc, 0x7e, 0x00, 0xfc,
    0x01, 0xf8, 0x03, 0xf0, 0x07, 0xe0, 0x0f, 0xc0, 0x1f, 0x80, 0x3f, 0x00, 0x7e, 0x00, 0xfc, 0x01,
    0xff, 0xc1, 0xff, 0x83, 0xff, 0x03, 0xfe, 0x03, 0xfc, 0x7c, 0x07, 0xff, 0x01, 0xff, 0xc0, 0x7f,
    0xf0, 0x1f, 0xfc, 0x07, 0xff, 0x01, 0xff, 0xc0, 0x7f, 0xf0, 0x1f, 0xfc, 0x07, 0xff, 0x01, 0xff,
    0xc0, 0x7f, 0xf0, 0x1f, 0xfc, 0x0f, 0xff, 0x03, 0xf7, 0xe1, 0xfd, 0xfc, 0xff, 0x7f, 0xff, 0xcf,
    0xff, 0xf3, 0xff, 0x7c, 0x7f, 0x1f, 0x03, 0x00, 0x00, 0xf8, 0x03, 0xff, 0x80, 0x7f, 0xf0, 0x1f,
    0xbe, 0x03, 0xf7, 0xe0, 0x7c, 0xfc, 0x1f, 0x8f, 0x83, 0xe1, 0xf0, 0x7c, 0x3f, 0x1f, 0x83, 0xe3,
    0xe0, 0x7c, 0x7c, 0x0f, 0xdf, 0x80, 0xfb, 0xe0, 0x1f, 0xfc, 0x01, 0xff, 0x80, 0x3f, 0xe0, 0x07,
    0xfc, 0x00, 0x7f, 0x80, 0x0f, 0xe0, 0x01, 0xfc, 0x00, 0xfc, 0x0f, 0x03, 0xff, 0xc1, 0xf8, 0x3f,
    0x7c, 0x1f, 0x83, 0xe7, 0xc1, 0xf8, 0x3e, 0x7e, 0x1f, 0x87, 0xe7, 0xe3, 0xfc, 0x7e, 0x3e, 0x3f,
    0xc7, 0xc3, 0xe3, 0xfc, 0x7c, 0x3e, 0x3f, 0xcf, 0xc3, 0xf3, 0x9c, 0xfc, 0x1f, 0x79, 0xef, 0x81,
    0xf7, 0x9e, 0xf8, 0x1f, 0x79, 0xff, 0x81, 0xff, 0x1f, 0xf8, 0x1f, 0xf0, 0xff, 0x00, 0xff, 0x0f,
    0xf0, 0x0f, 0xf0, 0xff, 0x00, 0xff, 0x0f, 0xf0, 0x0f, 0xe0, 0x7f, 0x00, 0x7e, 0x07, 0xe0, 0xfc,
    0x07, 0xef, 0xc1, 0xf9, 0xf8, 0x3f, 0x1f, 0x8f, 0xc1, 0xf3, 0xf0, 0x3f, 0x7e, 0x03, 0xff, 0x80,
    0x3f, 0xe0, 0x07, 0xfc, 0x00, 0x7f, 0x00, 0x0f, 0xe0, 0x03, 0xfe, 0x00, 0xff, 0xc0, 0x1f, 0xfc,
    0x07, 0xef, 0xc1, 0xf9, 0xf8, 0x3f, 0x1f, 0x8f, 0xc1, 0xfb, 0xf0, 0x3f, 0x7e, 0x03, 0xf0, 0xf8,
    0x03, 0xff, 0x00, 0x7f, 0xf0, 0x1f, 0xbe, 0x03, 0xe7, 0xe0, 0x7c, 0xfc, 0x1f, 0x8f, 0x83, 0xe1,
    0xf8, 0x7c, 0x1f, 0x1f, 0x83, 0xe3, 0xe0, 0x7e, 0x7c, 0x07, 0xdf, 0x80, 0xfb, 0xe0, 0x1f, 0xfc,
    0x01, 0xff, 0x80, 0x3f, 0xe0, 0x03, 0xfc, 0x00, 0x7f, 0x80, 0x0f, 0xe0, 0x00, 0xfc, 0x00, 0x1f,
    0x80, 0x03, 0xe0, 0x00, 0x7c, 0x00, 0x3f, 0x00, 0x3f, 0xe0, 0x07, 0xf8, 0x00, 0xfe, 0x00, 0x1f,
    0x80, 0x00, 0x7f, 0xff, 0x7f, 0xff, 0x7f, 0xff, 0x7f, 0xff, 0x7f, 0xff, 0x00, 0x7f, 0x00, 0xfe,
    0x01, 0xfc, 0x01, 0xf8, 0x03, 0xf0, 0x07, 0xe0, 0x0f, 0xc0, 0x1f, 0xc0, 0x3f, 0x80, 0x7f, 0x00,
    0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x01, 0xfe, 0x07, 0xfc, 0x0f, 0xf8,
    0x3f, 0xf0, 0x7e, 0x00, 0xfc, 0x01, 0xf0, 0x03, 0xe0, 0x07, 0xc0, 0x0f, 0x80, 0x1f, 0x00, 0x3e,
    0x00, 0x7c, 0x01, 0xf8, 0x3f, 0xf0, 0x7f, 0xc0, 0xff, 0x01, 0xff, 0x00, 0xff, 0x00, 0x7e, 0x00,
    0x7c, 0x00, 0xf8, 0x01, 0xf0, 0x03, 0xe0, 0x07, 0xc0, 0x0f, 0x80, 0x1f, 0x80, 0x3f, 0x00, 0x7f,
    0x00, 0xff, 0xc0, 0xff, 0x80, 0xff, 0x00, 0x7e, 0xef, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xe0, 0xff, 0x01, 0xff, 0x03, 0xfe,
    0x07, 0xfe, 0x00, 0xfc, 0x01, 0xf8, 0x01, 0xf0, 0x03, 0xe0, 0x07, 0xc0, 0x0f, 0x80, 0x1f, 0x00,
    0x3e, 0x00, 0x7e, 0x00, 0xfc, 0x01, 0xff, 0x81, 0xff, 0x01, 0xfe, 0x07, 0xfc, 0x1f, 0xe0, 0x3f,
    0x00, 0x7c, 0x00, 0xf8, 0x01, 0xf0, 0x03, 0xe0, 0x07, 0xc0, 0x0f, 0x80, 0x1f, 0x00, 0x7e, 0x01,
    0xfc, 0x1f, 0xf8, 0x3f, 0xe0, 0x7f, 0x80, 0xfc, 0x00, 0x07, 0x00, 0x08, 0xff, 0x00, 0xdf, 0xfe,
    0x1f, 0xff, 0xff, 0xff, 0xff, 0xff, 0x70, 0x1f, 0xf2, 0x00, 0x3e, 0x00,
];

#[rustfmt::skip]
static GLYPHS: [Glyph; 95] = [
    Glyph::new(0, 0, 0, 11, 0, 0), // 0x20 ' '
    Glyph::new(0, 6, 26, 15, 4, -26), // 0x21 '!'
    Glyph::new(20, 11, 10, 17, 3, -26), // 0x22 '"'
    Glyph::new(34, 23, 26, 27, 2, -26), // 0x23 '#'
    Glyph::new(109, 18, 32, 23, 2, -27), // 0x24 '$'
    Glyph::new(181, 31, 28, 32, 1, -27), // 0x25 '%'
    Glyph::new(290, 25, 28, 28, 2, -27), // 0x26 '&'
    Glyph::new(378, 4, 10, 10, 3, -26), // 0x27 '''
    Glyph::new(383, 9, 32, 15, 3, -27), // 0x28 '('
    Glyph::new(419, 9, 32, 15, 3, -27), // 0x29 ')'
    Glyph::new(455, 15, 17, 17, 1, -27), // 0x2a '*'
    Glyph::new(487, 21, 23, 27, 3, -23), // 0x2b '+'
    Glyph::new(548, 7, 12, 12, 2, -7), // 0x2c ','
    Glyph::new(559, 10, 5, 13, 2, -13), // 0x2d '-'
    Glyph::new(566, 6, 7, 12, 3, -7), // 0x2e '.'
    Glyph::new(572, 12, 29, 12, 0, -26), // 0x2f '/'
    Glyph::new(616, 20, 28, 23, 1, -27), // 0x30 '0'
    Glyph::new(686, 16, 26, 23, 4, -26), // 0x31 '1'
    Glyph::new(738, 18, 27, 23, 2, -27), // 0x32 '2'
    Glyph::new(799, 18, 28, 23, 2, -27), // 0x33 '3'
    Glyph::new(862, 20, 26, 23, 1, -26), // 0x34 '4'
    Glyph::new(927, 18, 27, 23, 2, -26), // 0x35 '5'
    Glyph::new(988, 19, 28, 23, 2, -27), // 0x36 '6'
    Glyph::new(1055, 18, 26, 23, 2, -26), // 0x37 '7'
    Glyph::new(1114, 19, 28, 23, 2, -27), // 0x38 '8'
    Glyph::new(1181, 19, 28, 23, 2, -27), // 0x39 '9'
    Glyph::new(1248, 6, 20, 13, 3, -20), // 0x3a ':'
    Glyph::new(1263, 7, 25, 13, 2, -20), // 0x3b ';'
    Glyph::new(1285, 21, 20, 27, 3, -21), // 0x3c '<'
    Glyph::new(1338, 21, 12, 27, 3, -17), // 0x3d '='
    Glyph::new(1370, 21, 20, 27, 3, -21), // 0x3e '>'
    Glyph::new(1423, 15, 27, 19, 2, -27), // 0x3f '?'
    Glyph::new(1474, 28, 31, 32, 2, -25), // 0x40 '@'
    Glyph::new(1583, 25, 26, 25, 0, -26), // 0x41 'A'
    Glyph::new(1665, 20, 26, 25, 3, -26), // 0x42 'B'
    Glyph::new(1730, 20, 28, 24, 2, -27), // 0x43 'C'
    Glyph::new(1800, 22, 26, 27, 3, -26), // 0x44 'D'
    Glyph::new(1872, 17, 26, 22, 3, -26), // 0x45 'E'
    Glyph::new(1928, 17, 26, 22, 3, -26), // 0x46 'F'
    Glyph::new(1984, 22, 28, 27, 2, -27), // 0x47 'G'
    Glyph::new(2061, 21, 26, 27, 3, -26), // 0x48 'H'
    Glyph::new(2130, 6, 26, 12, 3, -26), // 0x49 'I'
    Glyph::new(2150, 11, 33, 12, -2, -26), // 0x4a 'J'
    Glyph::new(2196, 23, 26, 25, 3, -26), // 0x4b 'K'
    Glyph::new(2271, 17, 26, 21, 3, -26), // 0x4c 'L'
    Glyph::new(2327, 26, 26, 32, 3, -26), // 0x4d 'M'
    Glyph::new(2412, 21, 26, 27, 3, -26), // 0x4e 'N'
    Glyph::new(2481, 24, 28, 28, 2, -27), // 0x4f 'O'
    Glyph::new(2565, 20, 26, 24, 3, -26), // 0x50 'P'
    Glyph::new(2630, 24, 32, 28, 2, -27), // 0x51 'Q'
    Glyph::new(2726, 21, 26, 25, 3, -26), // 0x52 'R'
    Glyph::new(2795, 19, 28, 23, 2, -27), // 0x53 'S'
    Glyph::new(2862, 22, 26, 22, 0, -26), // 0x54 'T'
    Glyph::new(2934, 20, 27, 26, 3, -26), // 0x55 'U'
    Glyph::new(3002, 25, 26, 25, 0, -26), // 0x56 'V'
    Glyph::new(3084, 34, 26, 36, 1, -26), // 0x57 'W'
    Glyph::new(3195, 23, 26, 25, 1, -26), // 0x58 'X'
    Glyph::new(3270, 23, 26, 23, 0, -26), // 0x59 'Y'
    Glyph::new(3345, 21, 26, 23, 1, -26), // 0x5a 'Z'
    Glyph::new(3414, 10, 32, 15, 3, -27), // 0x5b '['
    Glyph::new(3454, 12, 29, 12, 0, -26), // 0x5c '\\'
    Glyph::new(3498, 10, 32, 15, 2, -27), // 0x5d ']'
    Glyph::new(3538, 19, 10, 27, 4, -26), // 0x5e '^'
    Glyph::new(3562, 16, 4, 16, 0, 5), // 0x5f '_'
    Glyph::new(3570, 8, 7, 16, 2, -29), // 0x60 '`'
    Glyph::new(3577, 18, 21, 22, 1, -20), // 0x61 'a'
    Glyph::new(3625, 19, 28, 23, 3, -27), // 0x62 'b'
    Glyph::new(3692, 16, 21, 19, 1, -20), // 0x63 'c'
    Glyph::new(3734, 20, 28, 23, 1, -27), // 0x64 'd'
    Glyph::new(3804, 20, 21, 22, 1, -20), // 0x65 'e'
    Glyph::new(3857, 15, 27, 14, 0, -27), // 0x66 'f'
    Glyph::new(3908, 20, 28, 23, 1, -20), // 0x67 'g'
    Glyph::new(3978, 18, 27, 23, 3, -27), // 0x68 'h'
    Glyph::new(4039, 6, 27, 11, 3, -27), // 0x69 'i'
    Glyph::new(4060, 10, 35, 11, -1, -27), // 0x6a 'j'
    Glyph::new(4104, 19, 27, 22, 3, -27), // 0x6b 'k'
    Glyph::new(4169, 6, 27, 11, 3, -27), // 0x6c 'l'
    Glyph::new(4190, 28, 20, 34, 3, -20), // 0x6d 'm'
    Glyph::new(4260, 18, 20, 23, 3, -20), // 0x6e 'n'
    Glyph::new(4305, 20, 21, 22, 1, -20), // 0x6f 'o'
    Glyph::new(4358, 19, 28, 23, 3, -20), // 0x70 'p'
    Glyph::new(4425, 20, 28, 23, 1, -20), // 0x71 'q'
    Glyph::new(4495, 13, 20, 16, 3, -20), // 0x72 'r'
    Glyph::new(4528, 16, 21, 19, 2, -20), // 0x73 's'
    Glyph::new(4570, 15, 25, 15, 0, -25), // 0x74 't'
    Glyph::new(4617, 18, 21, 23, 2, -20), // 0x75 'u'
    Glyph::new(4665, 19, 20, 21, 1, -20), // 0x76 'v'
    Glyph::new(4713, 28, 20, 30, 1, -20), // 0x77 'w'
    Glyph::new(4783, 19, 20, 21, 1, -20), // 0x78 'x'
    Glyph::new(4831, 19, 28, 21, 1, -20), // 0x79 'y'
    Glyph::new(4898, 16, 20, 19, 1, -20), // 0x7a 'z'
    Glyph::new(4938, 15, 33, 23, 4, -27), // 0x7b '{'
    Glyph::new(5000, 4, 37, 12, 4, -28), // 0x7c '|'
    Glyph::new(5019, 15, 33, 23, 4, -27), // 0x7d '}'
    Glyph::new(5081, 21, 7, 27, 3, -15), // 0x7e '~'
];
