//! Smallest tier, condensed at reduced height.
//!
//! Generated from the DejaVu fonts (Bitstream Vera derivative, free license).

use super::{Font, Glyph};

/// Smallest tier, condensed at reduced height.
pub static CONDENSED_SMALL: Font = Font::new(&BITMAPS, &GLYPHS);

#[rustfmt::skip]
static BITMAPS: [u8; 2677] = [
    0xff, 0xff, 0xff, 0xff, 0xfe, 0xf7, 0x9c, 0xe7, 0x01, 0xdf, 0xff, 0xfe, 0xe7, 0xe7, 0xe7, 0xe7,
    0xe7, 0xe7, 0xe7, 0x01, 0x8e, 0x00, 0xc7, 0x00, 0xe3, 0x80, 0x71, 0x80, 0x39, 0xc1, 0xff, 0xfc,
    0xff, 0xfe, 0x7f, 0xff, 0x07, 0x18, 0x03, 0x1c, 0x01, 0x8e, 0x0f, 0xff, 0xcf, 0xff, 0xf7, 0xff,
    0xf8, 0x71, 0xc0, 0x38, 0xe0, 0x1c, 0x60, 0x0e, 0x30, 0x06, 0x38, 0x00, 0x06, 0x00, 0x30, 0x01,
    0x80, 0x3f, 0x87, 0xff, 0x7f, 0xfb, 0xd8, 0xde, 0xc0, 0xf6, 0x07, 0xf0, 0x3f, 0xf0, 0xff, 0xe1,
    0xff, 0x03, 0xfc, 0x19, 0xe0, 0xcf, 0xc6, 0x7f, 0xff, 0xbf, 0xf8, 0x7f, 0x80, 0x60, 0x03, 0x00,
    0x18, 0x00, 0xc0, 0x3e, 0x03, 0x81, 0xfc, 0x0c, 0x0e, 0x70, 0x70, 0x38, 0xe1, 0x80, 0xe3, 0x8e,
    0x03, 0x8e, 0x30, 0x0e, 0x39, 0xc0, 0x39, 0xc6, 0x00, 0x7f, 0x38, 0x00, 0xf9, 0xc7, 0x80, 0x07,
    0x3f, 0x80, 0x39, 0xce, 0x00, 0xc7, 0x1c, 0x07, 0x3c, 0x70, 0x18, 0xf1, 0xc0, 0xe1, 0xc7, 0x03,
    0x07, 0x38, 0x1c, 0x1f, 0xe0, 0x60, 0x3f, 0x00, 0x07, 0xf8, 0x03, 0xfe, 0x01, 0xff, 0x80, 0x78,
    0x20, 0x1e, 0x00, 0x07, 0xc0, 0x00, 0xf0, 0x00, 0x7e, 0x00, 0x3f, 0xc3, 0xdf, 0xf8, 0xe7, 0x9e,
    0x39, 0xe7, 0xde, 0xf0, 0xff, 0xbe, 0x1f, 0xc7, 0x83, 0xe1, 0xf0, 0xfc, 0x7f, 0xff, 0x0f, 0xff,
    0xe1, 0xfe, 0x7c, 0xff, 0xff, 0xf8, 0x1e, 0x38, 0xf1, 0xc7, 0x8f, 0x1e, 0x78, 0xf1, 0xe3, 0xc7,
    0x8f, 0x1e, 0x3c, 0x78, 0x70, 0xf1, 0xe1, 0xc3, 0xc7, 0x87, 0x06, 0xe1, 0xe1, 0xc3, 0xc3, 0x87,
    0x8f, 0x1e, 0x3c, 0x3c, 0x78, 0xf1, 0xe3, 0xc7, 0x9e, 0x3c, 0x78, 0xf3, 0xc7, 0x8e, 0x3c, 0x70,
    0x0c, 0x01, 0x83, 0x31, 0x76, 0xf7, 0xf8, 0x3e, 0x0f, 0xc7, 0xfe, 0xcc, 0xf1, 0x88, 0x30, 0x06,
    0x00, 0x03, 0x80, 0x07, 0x00, 0x0e, 0x00, 0x1c, 0x00, 0x38, 0x00, 0x70, 0x1f, 0xff, 0xff, 0xff,
    0xff, 0xfe, 0x07, 0x00, 0x0e, 0x00, 0x1c, 0x00, 0x38, 0x00, 0x70, 0x00, 0xe0, 0x01, 0xc0, 0x7d,
    0xf7, 0xdf, 0x79, 0xe7, 0x38, 0xe0, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x80, 0x03, 0x03, 0x07,
    0x07, 0x06, 0x0e, 0x0e, 0x0c, 0x0c, 0x1c, 0x1c, 0x18, 0x38, 0x38, 0x30, 0x30, 0x70, 0x70, 0x60,
    0x60, 0xe0, 0xc0, 0x0f, 0xc0, 0x7f, 0xc3, 0xff, 0x9f, 0x3e, 0x78, 0x79, 0xe1, 0xff, 0x83, 0xfe,
    0x0f, 0xf8, 0x3f, 0xe0, 0xff, 0x83, 0xfe, 0x0f, 0xf8, 0x3f, 0xe1, 0xf7, 0x87, 0x9f, 0x3e, 0x3f,
    0xf8, 0x7f, 0xc0, 0xfe, 0x00, 0x7f, 0x0f, 0xf0, 0xff, 0x0f, 0xf0, 0x0f, 0x00, 0xf0, 0x0f, 0x00,
    0xf0, 0x0f, 0x00, 0xf0, 0x0f, 0x00, 0xf0, 0x0f, 0x00, 0xf0, 0x0f, 0x0f, 0xfe, 0xff, 0xff, 0xff,
    0xff, 0xf0, 0x7f, 0xcf, 0xfe, 0xff, 0xfe, 0x3f, 0x81, 0xf0, 0x0f, 0x00, 0xf0, 0x1f, 0x01, 0xe0,
    0x3e, 0x07, 0xc0, 0xf8, 0x1f, 0x03, 0xe0, 0x7c, 0x0f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xf0, 0x3f,
    0xe1, 0xff, 0xc7, 0xff, 0x98, 0x3e, 0x00, 0xf8, 0x03, 0xe0, 0x0f, 0x80, 0x7c, 0x1f, 0xe0, 0x7f,
    0xc0, 0xff, 0x80, 0x3e, 0x00, 0x78, 0x01, 0xf0, 0x07, 0xb0, 0x3e, 0xff, 0xfb, 0xff, 0xc7, 0xfe,
    0x00, 0x01, 0xf0, 0x0f, 0xc0, 0x7f, 0x01, 0xfc, 0x0f, 0xf0, 0x3f, 0xc1, 0xdf, 0x0f, 0x7c, 0x39,
    0xf1, 0xc7, 0xc7, 0x1f, 0x38, 0x7c, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x01, 0xf0, 0x07,
    0xc0, 0x1f, 0x00, 0xff, 0xf7, 0xff, 0xbf, 0xfd, 0xff, 0xcf, 0x00, 0x78, 0x03, 0xfc, 0x1f, 0xf8,
    0xff, 0xe7, 0xff, 0x80, 0x7c, 0x01, 0xf0, 0x0f, 0x80, 0x7c, 0x03, 0xf8, 0x3e, 0xff, 0xf7, 0xff,
    0x1f, 0xf0, 0x07, 0xf8, 0x7f, 0xe3, 0xff, 0x8f, 0x82, 0x7c, 0x01, 0xe0, 0x07, 0x98, 0x1f, 0xfc,
    0xff, 0xfb, 0xff, 0xef, 0xc7, 0xfe, 0x0f, 0x78, 0x3d, 0xe0, 0xf7, 0x83, 0xdf, 0x1f, 0x3f, 0xf8,
    0x7f, 0xc0, 0xfe, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xdf, 0xfe, 0x00, 0xf8, 0x03, 0xc0, 0x0f,
    0x00, 0x7c, 0x01, 0xe0, 0x0f, 0x80, 0x3c, 0x00, 0xf0, 0x07, 0x80, 0x1e, 0x00, 0xf8, 0x03, 0xc0,
    0x1f, 0x00, 0x78, 0x01, 0xe0, 0x00, 0x1f, 0xe0, 0xff, 0xc7, 0xff, 0x9e, 0x1e, 0x78, 0x7d, 0xe1,
    0xe7, 0x87, 0x8f, 0xfe, 0x1f, 0xe0, 0x7f, 0xc7, 0xff, 0x9e, 0x1e, 0xf8, 0x3f, 0xe0, 0xff, 0x83,
    0xde, 0x1f, 0x7f, 0xf8, 0xff, 0xe1, 0xfe, 0x00, 0x1f, 0xc0, 0xff, 0x87, 0xff, 0x1e, 0x3e, 0xf8,
    0x7b, 0xe1, 0xef, 0x87, 0xfe, 0x1f, 0xf8, 0x7d, 0xff, 0xf7, 0xff, 0xcf, 0xff, 0x06, 0x7c, 0x01,
    0xe0, 0x07, 0x90, 0x3c, 0x7f, 0xf1, 0xff, 0x87, 0xfc, 0x00, 0xff, 0xff, 0xf7, 0x80, 0x00, 0x07,
    0xff, 0xff, 0xfc, 0xff, 0xff, 0xf7, 0x80, 0x00, 0x07, 0xff, 0xff, 0xfb, 0xdc, 0xe6, 0x00, 0x00,
    0x06, 0x00, 0x7c, 0x03, 0xf8, 0x3f, 0xc1, 0xfc, 0x0f, 0xe0, 0x3e, 0x00, 0x7e, 0x00, 0x7f, 0x00,
    0x3f, 0xc0, 0x0f, 0xf0, 0x07, 0xf0, 0x01, 0xe0, 0x00, 0xc0, 0x7f, 0xff, 0xff, 0xff, 0xff, 0xfb,
    0xff, 0xf0, 0x00, 0x00, 0x00, 0x1f, 0xff, 0xff, 0xff, 0xff, 0xfe, 0xe0, 0x01, 0xf8, 0x01, 0xfc,
    0x00, 0xff, 0x00, 0x7f, 0x80, 0x1f, 0xc0, 0x07, 0x80, 0x1f, 0x01, 0xfe, 0x0f, 0xe0, 0xff, 0x07,
    0xf0, 0x0f, 0x80, 0x18, 0x00, 0x00, 0x7f, 0x9f, 0xfb, 0xff, 0xf1, 0xf0, 0x1e, 0x03, 0xc0, 0xf8,
    0x1e, 0x07, 0xc1, 0xf0, 0x7c, 0x0f, 0x01, 0xe0, 0x00, 0x07, 0x80, 0xf0, 0x1e, 0x03, 0xc0, 0x78,
    0x00, 0x01, 0xfe, 0x00, 0x3f, 0xfc, 0x03, 0xc0, 0xf0, 0x38, 0x03, 0xc3, 0x80, 0x06, 0x18, 0x10,
    0x39, 0xc3, 0xfc, 0xcc, 0x3f, 0xe7, 0x63, 0x8f, 0x3b, 0x1c, 0x39, 0xf8, 0xe1, 0xcf, 0xc7, 0x0e,
    0x76, 0x38, 0x73, 0x31, 0xc7, 0xb9, 0x87, 0xff, 0x8e, 0x3f, 0xf8, 0x30, 0xf7, 0x01, 0xc0, 0x00,
    0x07, 0x00, 0x60, 0x1e, 0x07, 0x00, 0x7f, 0xf8, 0x01, 0xff, 0x00, 0x00, 0xc0, 0x00, 0x03, 0xf0,
    0x00, 0xfc, 0x00, 0x3f, 0x00, 0x1f, 0xe0, 0x07, 0xf8, 0x01, 0xfe, 0x00, 0xf3, 0xc0, 0x3c, 0xf0,
    0x0f, 0x3c, 0x07, 0xc7, 0x81, 0xe1, 0xe0, 0x78, 0x7c, 0x3f, 0xff, 0x0f, 0xff, 0xc3, 0xff, 0xf9,
    0xff, 0xfe, 0x78, 0x07, 0x9e, 0x01, 0xff, 0x80, 0x7c, 0xff, 0xc3, 0xff, 0xcf, 0xff, 0xbe, 0x7e,
    0xf8, 0x7f, 0xe1, 0xff, 0x87, 0xbf, 0xfe, 0xff, 0xf3, 0xff, 0xcf, 0xff, 0xbe, 0x1f, 0xf8, 0x3f,
    0xe0, 0xff, 0x87, 0xfe, 0x3f, 0xff, 0xff, 0xff, 0xef, 0xfe, 0x00, 0x07, 0xf8, 0x1f, 0xfc, 0x7f,
    0xf9, 0xf8, 0x77, 0xc0, 0x2f, 0x80, 0x3e, 0x00, 0x7c, 0x00, 0xf8, 0x01, 0xf0, 0x03, 0xe0, 0x07,
    0xc0, 0x0f, 0x80, 0x0f, 0x80, 0x1f, 0x00, 0x9f, 0x87, 0x3f, 0xfe, 0x3f, 0xfc, 0x1f, 0xf0, 0xff,
    0xc0, 0xff, 0xf0, 0xff, 0xfc, 0xff, 0xfc, 0xf8, 0x7e, 0xf8, 0x3f, 0xf8, 0x1f, 0xf8, 0x1f, 0xf8,
    0x0f, 0xf8, 0x0f, 0xf8, 0x0f, 0xf8, 0x1f, 0xf8, 0x1f, 0xf8, 0x3f, 0xf8, 0x7e, 0xff, 0xfe, 0xff,
    0xfc, 0xff, 0xf0, 0xff, 0xc0, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xf8, 0x0f, 0x80, 0xf8, 0x0f,
    0xfe, 0xff, 0xff, 0xff, 0xff, 0xff, 0x80, 0xf8, 0x0f, 0x80, 0xf8, 0x0f, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xf0, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xf8, 0x0f, 0x80, 0xf8, 0x0f, 0xfe, 0xff, 0xff,
    0xff, 0xff, 0xff, 0x80, 0xf8, 0x0f, 0x80, 0xf8, 0x0f, 0x80, 0xf8, 0x0f, 0x80, 0xf8, 0x00, 0x07,
    0xfc, 0x07, 0xff, 0x87, 0xff, 0xc7, 0xe1, 0xe7, 0xe0, 0x13, 0xe0, 0x03, 0xe0, 0x01, 0xf0, 0x00,
    0xf8, 0x3f, 0x7c, 0x1f, 0xfe, 0x0f, 0xff, 0x07, 0xff, 0x80, 0xfb, 0xe0, 0x7d, 0xf0, 0x3e, 0x7e,
    0x1f, 0x3f, 0xff, 0x8f, 0xff, 0x81, 0xff, 0x00, 0xf8, 0x1f, 0xf8, 0x1f, 0xf8, 0x1f, 0xf8, 0x1f,
    0xf8, 0x1f, 0xf8, 0x1f, 0xf8, 0x1f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xf8, 0x1f,
    0xf8, 0x1f, 0xf8, 0x1f, 0xf8, 0x1f, 0xf8, 0x1f, 0xf8, 0x1f, 0xf8, 0x1f, 0xf8, 0x1f, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe, 0x1f, 0x1f, 0x1f, 0x1f, 0x1f, 0x1f,
    0x1f, 0x1f, 0x1f, 0x1f, 0x1f, 0x1f, 0x1f, 0x1f, 0x1f, 0x1f, 0x1f, 0x1f, 0x1f, 0x1e, 0xfe, 0xfe,
    0xfc, 0xf0, 0xf8, 0x3f, 0xf8, 0x3e, 0xf8, 0x7c, 0xf8, 0xf8, 0xf9, 0xf0, 0xfb, 0xe0, 0xff, 0xc0,
    0xff, 0x80, 0xff, 0x00, 0xff, 0x00, 0xff, 0x80, 0xff, 0xc0, 0xff, 0xe0, 0xfb, 0xf0, 0xf9, 0xf8,
    0xf8, 0xfc, 0xf8, 0x7e, 0xf8, 0x3e, 0xf8, 0x1f, 0xf8, 0x0f, 0x80, 0xf8, 0x0f, 0x80, 0xf8, 0x0f,
    0x80, 0xf8, 0x0f, 0x80, 0xf8, 0x0f, 0x80, 0xf8, 0x0f, 0x80, 0xf8, 0x0f, 0x80, 0xf8, 0x0f, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xf0, 0xfc, 0x07, 0xff, 0x80, 0xff, 0xf8, 0x1f, 0xff, 0x07, 0xff, 0xe0,
    0xff, 0xfe, 0x3f, 0xfd, 0xc7, 0x7f, 0xbc, 0xef, 0xf3, 0xbd, 0xfe, 0x7f, 0x3f, 0xcf, 0xe7, 0xf8,
    0xfc, 0xff, 0x1f, 0x1f, 0xe1, 0xe3, 0xfc, 0x38, 0x7f, 0x80, 0x0f, 0xf0, 0x01, 0xfe, 0x00, 0x3f,
    0xc0, 0x07, 0x80, 0xf8, 0x1f, 0xfc, 0x1f, 0xfc, 0x1f, 0xfe, 0x1f, 0xfe, 0x1f, 0xff, 0x1f, 0xff,
    0x1f, 0xf7, 0x9f, 0xf7, 0x9f, 0xf3, 0xdf, 0xf3, 0xdf, 0xf1, 0xff, 0xf1, 0xff, 0xf0, 0xff, 0xf0,
    0xff, 0xf0, 0x7f, 0xf0, 0x7f, 0xf0, 0x3f, 0xf0, 0x3f, 0x07, 0xf8, 0x07, 0xff, 0x83, 0xff, 0xf0,
    0xfc, 0xfc, 0x7c, 0x0f, 0x9f, 0x03, 0xef, 0x80, 0x7b, 0xe0, 0x1f, 0xf8, 0x07, 0xfe, 0x01, 0xff,
    0x80, 0x7f, 0xe0, 0x1f, 0xf8, 0x07, 0x9f, 0x03, 0xe7, 0xc0, 0xf8, 0xf8, 0xfc, 0x3f, 0xff, 0x07,
    0xff, 0x80, 0x7f, 0x80, 0xff, 0xc3, 0xff, 0xcf, 0xff, 0xbf, 0xff, 0xf8, 0x7f, 0xe0, 0xff, 0x83,
    0xfe, 0x1f, 0xf8, 0xff, 0xff, 0xff, 0xff, 0xbf, 0xfc, 0xff, 0x03, 0xe0, 0x0f, 0x80, 0x3e, 0x00,
    0xf8, 0x03, 0xe0, 0x0f, 0x80, 0x00, 0x07, 0xf8, 0x07, 0xff, 0x83, 0xff, 0xf0, 0xfc, 0xfc, 0x7c,
    0x0f, 0x9f, 0x03, 0xef, 0x80, 0x7b, 0xe0, 0x1f, 0xf8, 0x07, 0xfe, 0x01, 0xff, 0x80, 0x7f, 0xe0,
    0x1f, 0xf8, 0x07, 0x9e, 0x03, 0xe7, 0xc0, 0xf8, 0xf8, 0xfc, 0x3f, 0xff, 0x07, 0xff, 0x80, 0x7f,
    0x80, 0x01, 0xf0, 0x00, 0x3e, 0x00, 0x07, 0x80, 0x00, 0xf0, 0xff, 0xc1, 0xff, 0xe3, 0xff, 0xe7,
    0xff, 0xcf, 0x87, 0x9f, 0x0f, 0x3e, 0x1e, 0x7c, 0x3c, 0xff, 0xf1, 0xff, 0xc3, 0xff, 0x87, 0xff,
    0x8f, 0x8f, 0x9f, 0x1f, 0x3e, 0x1f, 0x7c, 0x3e, 0xf8, 0x3d, 0xf0, 0x7f, 0xe0, 0x78, 0x3f, 0xf3,
    0xff, 0xbf, 0xfd, 0xf0, 0xef, 0x00, 0x78, 0x03, 0xc0, 0x1f, 0xe0, 0xff, 0xe3, 0xff, 0x87, 0xfe,
    0x07, 0xf0, 0x0f, 0x80, 0x3e, 0x01, 0xfe, 0x1f, 0xff, 0xf7, 0xff, 0x9f, 0xf8, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0x03, 0xc0, 0x03, 0xc0, 0x03, 0xc0, 0x03, 0xc0, 0x03, 0xc0, 0x03,
    0xc0, 0x03, 0xc0, 0x03, 0xc0, 0x03, 0xc0, 0x03, 0xc0, 0x03, 0xc0, 0x03, 0xc0, 0x03, 0xc0, 0x03,
    0xc0, 0x03, 0xc0, 0xf8, 0x3f, 0xf0, 0x7f, 0xe0, 0xff, 0xc1, 0xff, 0x83, 0xff, 0x07, 0xfe, 0x0f,
    0xfc, 0x1f, 0xf8, 0x3f, 0xf0, 0x7f, 0xe0, 0xff, 0xc1, 0xff, 0x83, 0xff, 0x07, 0xfe, 0x0f, 0xbe,
    0x3e, 0x7f, 0xfc, 0x7f, 0xf0, 0x7f, 0xc0, 0xf8, 0x07, 0xde, 0x01, 0xf7, 0x80, 0x79, 0xf0, 0x3e,
    0x3c, 0x0f, 0x8f, 0x03, 0xc3, 0xe1, 0xf0, 0x78, 0x7c, 0x1e, 0x1e, 0x07, 0xc7, 0x80, 0xf3, 0xe0,
    0x3c, 0xf0, 0x0f, 0xbc, 0x01, 0xff, 0x00, 0x7f, 0x80, 0x1f, 0xe0, 0x03, 0xf8, 0x00, 0xfc, 0x00,
    0x3f, 0x00, 0xf0, 0x3c, 0x0f, 0xf0, 0x7c, 0x0f, 0xf0, 0x7e, 0x1f, 0xf8, 0x7e, 0x1e, 0x78, 0x7e,
    0x1e, 0x78, 0x7e, 0x1e, 0x78, 0xfe, 0x3e, 0x7c, 0xef, 0x3e, 0x7c, 0xe7, 0x3c, 0x3c, 0xe7, 0x3c,
    0x3c, 0xe7, 0x3c, 0x3d, 0xc7, 0xfc, 0x3f, 0xc3, 0xf8, 0x1f, 0xc3, 0xf8, 0x1f, 0xc3, 0xf8, 0x1f,
    0xc3, 0xf8, 0x1f, 0x83, 0xf8, 0x1f, 0x81, 0xf0, 0x0f, 0x81, 0xf0, 0xf8, 0x1f, 0x78, 0x1e, 0x7c,
    0x3e, 0x3c, 0x3c, 0x3e, 0x7c, 0x1f, 0xf8, 0x0f, 0xf0, 0x0f, 0xf0, 0x07, 0xe0, 0x07, 0xe0, 0x07,
    0xe0, 0x0f, 0xf0, 0x1f, 0xf8, 0x1e, 0x78, 0x3e, 0x7c, 0x3c, 0x3c, 0x7c, 0x3e, 0xf8, 0x1f, 0xf0,
    0x0f, 0xf8, 0x0f, 0xbc, 0x0f, 0x9f, 0x07, 0xc7, 0xc7, 0xc3, 0xe3, 0xe0, 0xfb, 0xe0, 0x3f, 0xe0,
    0x1f, 0xf0, 0x07, 0xf0, 0x03, 0xf8, 0x00, 0xf8, 0x00, 0x7c, 0x00, 0x3e, 0x00, 0x1f, 0x00, 0x0f,
    0x80, 0x07, 0xc0, 0x03, 0xe0, 0x01, 0xf0, 0x00, 0xf8, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xe0, 0x07, 0xc0, 0x1f, 0x00, 0x7c, 0x01, 0xf0, 0x03, 0xe0, 0x0f, 0x80, 0x3e, 0x00, 0xf8,
    0x01, 0xf0, 0x07, 0xc0, 0x1f, 0x00, 0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xf8, 0xff, 0xff,
    0xff, 0x8f, 0x1e, 0x3c, 0x78, 0xf1, 0xe3, 0xc7, 0x8f, 0x1e, 0x3c, 0x78, 0xf1, 0xe3, 0xc7, 0x8f,
    0xff, 0xff, 0xff, 0xe0, 0xe0, 0x60, 0x70, 0x70, 0x30, 0x30, 0x38, 0x38, 0x18, 0x18, 0x1c, 0x1c,
    0x0c, 0x0e, 0x0e, 0x06, 0x06, 0x07, 0x07, 0x03, 0x03, 0x7f, 0xff, 0xff, 0x0f, 0x0f, 0x0f, 0x0f,
    0x0f, 0x0f, 0x0f, 0x0f, 0x0f, 0x0f, 0x0f, 0x0f, 0x0f, 0x0f, 0x0f, 0x0f, 0x0f, 0x7f, 0xff, 0xff,
    0x7e, 0x07, 0x80, 0x3e, 0x01, 0xfc, 0x0f, 0xf8, 0x38, 0xf1, 0xc1, 0xee, 0x01, 0xc0, 0xff, 0xff,
    0xff, 0xc7, 0x1c, 0x71, 0x80, 0x0f, 0x03, 0xff, 0x1f, 0xfc, 0xff, 0xe0, 0x07, 0x80, 0x3c, 0x7f,
    0xef, 0xff, 0xff, 0xff, 0x83, 0xfc, 0x1f, 0xe1, 0xff, 0xff, 0xbf, 0xfc, 0xf9, 0xe0, 0xf0, 0x03,
    0xc0, 0x0f, 0x00, 0x3c, 0x00, 0xf0, 0x03, 0xc6, 0x0f, 0x7e, 0x3f, 0xfc, 0xff, 0xfb, 0xe1, 0xef,
    0x07, 0xbc, 0x1f, 0xf0, 0x7f, 0xc1, 0xff, 0x07, 0xfe, 0x1e, 0xf8, 0xfb, 0xff, 0xef, 0xff, 0x3d,
    0xf8, 0x03, 0x83, 0xfc, 0xff, 0xbf, 0xf7, 0xc1, 0xf0, 0x3c, 0x07, 0x80, 0xf0, 0x1f, 0x03, 0xe0,
    0x3e, 0x17, 0xfe, 0x7f, 0xc7, 0xf8, 0x00, 0x3c, 0x00, 0xf0, 0x03, 0xc0, 0x0f, 0x00, 0x3c, 0x10,
    0xf3, 0xf3, 0xcf, 0xff, 0x7f, 0xfd, 0xe1, 0xff, 0x87, 0xfc, 0x1f, 0xf0, 0x3f, 0xc0, 0xff, 0x07,
    0xfe, 0x1f, 0x78, 0x7d, 0xff, 0xf3, 0xff, 0xc7, 0xcf, 0x03, 0x00, 0x7f, 0x83, 0xff, 0x1f, 0xfe,
    0x78, 0x7b, 0xc1, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xc0, 0x0f, 0x80, 0x1e, 0x06, 0x7f, 0xf8,
    0xff, 0xe1, 0xff, 0x00, 0x07, 0xc1, 0xfc, 0x7f, 0x8f, 0x03, 0xe0, 0x7c, 0x3f, 0xf7, 0xfe, 0xff,
    0xc7, 0xc0, 0xf8, 0x1f, 0x03, 0xe0, 0x7c, 0x0f, 0x81, 0xf0, 0x3e, 0x07, 0xc0, 0xf8, 0x1f, 0x00,
    0x04, 0x00, 0x7c, 0xf3, 0xff, 0xdf, 0xff, 0x78, 0x7f, 0xe1, 0xff, 0x03, 0xfc, 0x0f, 0xf0, 0x3f,
    0xe1, 0xff, 0x87, 0xdf, 0x3f, 0x7f, 0xfc, 0xfe, 0xf1, 0xf3, 0xc0, 0x1f, 0x00, 0x79, 0xff, 0xe7,
    0xff, 0x0f, 0xf8, 0x0f, 0x00, 0xf0, 0x07, 0x80, 0x3c, 0x01, 0xe0, 0x0f, 0x00, 0x78, 0xc3, 0xdf,
    0x9f, 0xfe, 0xff, 0xf7, 0xc7, 0xfe, 0x1f, 0xe0, 0xff, 0x07, 0xf8, 0x3f, 0xc1, 0xfe, 0x0f, 0xf0,
    0x7f, 0x83, 0xfc, 0x1f, 0xe0, 0xf0, 0xff, 0xff, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0x1e, 0x3c, 0x78, 0xf0, 0x00, 0x07, 0x8f, 0x1e, 0x3c, 0x78, 0xf1, 0xe3, 0xc7, 0x8f, 0x1e, 0x3c,
    0x78, 0xf1, 0xe3, 0xdf, 0xfe, 0xf8, 0xe0, 0xf0, 0x03, 0xc0, 0x0f, 0x00, 0x3c, 0x00, 0xf0, 0x03,
    0xc0, 0x0f, 0x0f, 0xbc, 0x7c, 0xf3, 0xe3, 0xdf, 0x0f, 0xf8, 0x3f, 0xc0, 0xff, 0x03, 0xfc, 0x0f,
    0xf8, 0x3d, 0xf0, 0xf3, 0xe3, 0xc7, 0xcf, 0x0f, 0xbc, 0x1f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0x01, 0x81, 0x87, 0xbf, 0x3f, 0x3f, 0xff, 0xfd, 0xff, 0xff, 0xef, 0x8f,
    0x8f, 0x78, 0x7c, 0x7f, 0xc3, 0xc3, 0xfe, 0x1e, 0x1f, 0xf0, 0xf0, 0xff, 0x87, 0x87, 0xfc, 0x3c,
    0x3f, 0xe1, 0xe1, 0xff, 0x0f, 0x0f, 0xf8, 0x78, 0x7f, 0xc3, 0xc3, 0xe0, 0x01, 0x87, 0xbf, 0x3f,
    0xfd, 0xff, 0xef, 0x8f, 0xfc, 0x3f, 0xc1, 0xfe, 0x0f, 0xf0, 0x7f, 0x83, 0xfc, 0x1f, 0xe0, 0xff,
    0x07, 0xf8, 0x3f, 0xc1, 0xe0, 0x03, 0x80, 0x7f, 0x83, 0xff, 0x1f, 0xfe, 0x78, 0x7f, 0xe1, 0xff,
    0x03, 0xfc, 0x0f, 0xf0, 0x3f, 0xc0, 0xff, 0x87, 0xde, 0x1e, 0x7f, 0xf8, 0xff, 0xc1, 0xfe, 0x00,
    0x01, 0x83, 0xdf, 0x8f, 0xff, 0x3f, 0xfe, 0xf8, 0x7b, 0xc1, 0xef, 0x07, 0xfc, 0x1f, 0xf0, 0x7f,
    0xc1, 0xff, 0x87, 0xbe, 0x3e, 0xff, 0xfb, 0xff, 0xcf, 0x7e, 0x3c, 0x00, 0xf0, 0x03, 0xc0, 0x0f,
    0x00, 0x3c, 0x00, 0xf0, 0x00, 0x04, 0x00, 0x7c, 0xf3, 0xff, 0xdf, 0xff, 0x78, 0x7f, 0xe1, 0xff,
    0x07, 0xfc, 0x0f, 0xf0, 0x3f, 0xc1, 0xff, 0x87, 0xde, 0x1f, 0x7f, 0xfc, 0xff, 0xf1, 0xf3, 0xc0,
    0x0f, 0x00, 0x3c, 0x00, 0xf0, 0x03, 0xc0, 0x0f, 0x00, 0x38, 0x01, 0xbd, 0xff, 0xff, 0xff, 0xfc,
    0x3e, 0x0f, 0x03, 0xc0, 0xf0, 0x3c, 0x0f, 0x03, 0xc0, 0xf0, 0x3c, 0x0f, 0x00, 0x0f, 0x03, 0xfe,
    0x7f, 0xef, 0xfe, 0xf0, 0x2f, 0x00, 0xff, 0x07, 0xfe, 0x3f, 0xe0, 0x7f, 0x00, 0xf0, 0x0f, 0xff,
    0xff, 0xfe, 0x7f, 0xc0, 0x3e, 0x07, 0xc0, 0xf8, 0x1f, 0x0f, 0xff, 0xff, 0xff, 0xf9, 0xf0, 0x3e,
    0x07, 0xc0, 0xf8, 0x1f, 0x03, 0xe0, 0x7c, 0x0f, 0x80, 0xfe, 0x1f, 0xc1, 0xf8, 0xf0, 0xff, 0x87,
    0xfc, 0x3f, 0xe1, 0xff, 0x0f, 0xf8, 0x7f, 0xc3, 0xfe, 0x1f, 0xf0, 0xff, 0x87, 0xfe, 0x7f, 0xff,
    0xf7, 0xff, 0x9f, 0x7c, 0xf0, 0x3f, 0xc1, 0xef, 0x07, 0x9e, 0x1e, 0x78, 0xf1, 0xe3, 0xc3, 0xcf,
    0x0f, 0x78, 0x3d, 0xe0, 0x7f, 0x01, 0xfc, 0x07, 0xf0, 0x0f, 0x80, 0x3e, 0x00, 0xf0, 0xf0, 0xff,
    0x0f, 0x1e, 0xf1, 0xf1, 0xe7, 0x9f, 0x1e, 0x79, 0xf9, 0xe7, 0x9f, 0x9c, 0x79, 0xbb, 0xc3, 0xfb,
    0xbc, 0x3f, 0x9f, 0xc3, 0xf9, 0xfc, 0x3f, 0x1f, 0x81, 0xf1, 0xf8, 0x1f, 0x0f, 0x81, 0xf0, 0xf8,
    0xf0, 0x7b, 0xc7, 0x9f, 0x7c, 0x7b, 0xc1, 0xfc, 0x0f, 0xe0, 0x3e, 0x01, 0xf0, 0x1f, 0xc1, 0xff,
    0x0f, 0x78, 0xf1, 0xef, 0x8f, 0xf8, 0x3c, 0xf0, 0x3f, 0xc1, 0xef, 0x07, 0x9e, 0x1e, 0x78, 0xf1,
    0xe3, 0xc3, 0xcf, 0x0f, 0x78, 0x1d, 0xe0, 0x7f, 0x01, 0xfc, 0x03, 0xf0, 0x0f, 0x80, 0x1e, 0x00,
    0x78, 0x01, 0xc0, 0x1f, 0x01, 0xfc, 0x07, 0xe0, 0x0e, 0x00, 0xff, 0xff, 0xff, 0xff, 0xf0, 0x3e,
    0x03, 0xc0, 0x78, 0x0f, 0x01, 0xf0, 0x3e, 0x07, 0xc0, 0xf8, 0x0f, 0xff, 0xff, 0xff, 0xff, 0x03,
    0xe0, 0xfc, 0x3f, 0x87, 0x81, 0xf0, 0x3c, 0x07, 0x80, 0xf0, 0x1e, 0x03, 0xc0, 0xf8, 0x7e, 0x0f,
    0xc1, 0xfc, 0x07, 0x80, 0xf0, 0x1e, 0x03, 0xc0, 0x78, 0x0f, 0x81, 0xf0, 0x1f, 0x83, 0xf8, 0x3f,
    0xdf, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfc, 0xf0, 0x1f, 0x83, 0xf8, 0x0f, 0x01,
    0xe0, 0x3c, 0x07, 0x80, 0xf0, 0x1e, 0x03, 0xc0, 0x3c, 0x07, 0xf0, 0x7e, 0x1f, 0xc7, 0xc0, 0xf0,
    0x1e, 0x03, 0xc0, 0x78, 0x0f, 0x01, 0xe1, 0xfc, 0x3f, 0x87, 0xe0, 0x0c, 0x00, 0x7e, 0x0d, 0xff,
    0xff, 0xff, 0xfc, 0x0f, 0xc0,
];

#[rustfmt::skip]
static GLYPHS: [Glyph; 95] = [
    Glyph::new(0, 0, 0, 8, 0, 0), // 0x20 ' '
    Glyph::new(0, 5, 19, 11, 3, -19), // 0x21 '!'
    Glyph::new(12, 8, 7, 12, 2, -19), // 0x22 '"'
    Glyph::new(19, 17, 19, 20, 1, -19), // 0x23 '#'
    Glyph::new(60, 13, 24, 16, 2, -20), // 0x24 '$'
    Glyph::new(99, 22, 19, 23, 1, -19), // 0x25 '%'
    Glyph::new(152, 18, 19, 20, 1, -19), // 0x26 '&'
    Glyph::new(195, 3, 7, 7, 2, -19), // 0x27 '''
    Glyph::new(198, 7, 24, 11, 2, -20), // 0x28 '('
    Glyph::new(219, 7, 24, 11, 2, -20), // 0x29 ')'
    Glyph::new(240, 11, 12, 12, 1, -19), // 0x2a '*'
    Glyph::new(257, 15, 16, 20, 2, -16), // 0x2b '+'
    Glyph::new(287, 6, 9, 9, 1, -5), // 0x2c ','
    Glyph::new(294, 8, 3, 10, 1, -9), // 0x2d '-'
    Glyph::new(297, 5, 5, 9, 2, -5), // 0x2e '.'
    Glyph::new(301, 8, 22, 9, 0, -19), // 0x2f '/'
    Glyph::new(323, 14, 19, 16, 1, -19), // 0x30 '0'
    Glyph::new(357, 12, 19, 16, 3, -19), // 0x31 '1'
    Glyph::new(386, 12, 19, 16, 2, -19), // 0x32 '2'
    Glyph::new(415, 14, 19, 16, 1, -19), // 0x33 '3'
    Glyph::new(449, 14, 19, 16, 1, -19), // 0x34 '4'
    Glyph::new(483, 13, 19, 16, 2, -19), // 0x35 '5'
    Glyph::new(514, 14, 19, 16, 1, -19), // 0x36 '6'
    Glyph::new(548, 14, 19, 16, 1, -19), // 0x37 '7'
    Glyph::new(582, 14, 19, 16, 1, -19), // 0x38 '8'
    Glyph::new(616, 14, 19, 16, 1, -19), // 0x39 '9'
    Glyph::new(650, 5, 14, 9, 2, -14), // 0x3a ':'
    Glyph::new(659, 5, 18, 9, 2, -14), // 0x3b ';'
    Glyph::new(671, 15, 14, 20, 2, -15), // 0x3c '<'
    Glyph::new(698, 15, 9, 20, 2, -13), // 0x3d '='
    Glyph::new(715, 15, 14, 20, 2, -15), // 0x3e '>'
    Glyph::new(742, 11, 19, 14, 1, -19), // 0x3f '?'
    Glyph::new(769, 21, 23, 23, 1, -18), // 0x40 '@'
    Glyph::new(830, 18, 19, 18, 0, -19), // 0x41 'A'
    Glyph::new(873, 14, 19, 18, 2, -19), // 0x42 'B'
    Glyph::new(907, 15, 19, 17, 1, -19), // 0x43 'C'
    Glyph::new(943, 16, 19, 19, 2, -19), // 0x44 'D'
    Glyph::new(981, 12, 19, 16, 2, -19), // 0x45 'E'
    Glyph::new(1010, 12, 19, 16, 2, -19), // 0x46 'F'
    Glyph::new(1039, 17, 19, 19, 1, -19), // 0x47 'G'
    Glyph::new(1080, 16, 19, 20, 2, -19), // 0x48 'H'
    Glyph::new(1118, 5, 19, 9, 2, -19), // 0x49 'I'
    Glyph::new(1130, 8, 24, 9, -1, -19), // 0x4a 'J'
    Glyph::new(1154, 16, 19, 18, 2, -19), // 0x4b 'K'
    Glyph::new(1192, 12, 19, 15, 2, -19), // 0x4c 'L'
    Glyph::new(1221, 19, 19, 23, 2, -19), // 0x4d 'M'
    Glyph::new(1267, 16, 19, 20, 2, -19), // 0x4e 'N'
    Glyph::new(1305, 18, 19, 20, 1, -19), // 0x4f 'O'
    Glyph::new(1348, 14, 19, 17, 2, -19), // 0x50 'P'
    Glyph::new(1382, 18, 23, 20, 1, -19), // 0x51 'Q'
    Glyph::new(1434, 15, 19, 18, 2, -19), // 0x52 'R'
    Glyph::new(1470, 13, 19, 17, 2, -19), // 0x53 'S'
    Glyph::new(1501, 16, 19, 16, 0, -19), // 0x54 'T'
    Glyph::new(1539, 15, 19, 19, 2, -19), // 0x55 'U'
    Glyph::new(1575, 18, 19, 18, 0, -19), // 0x56 'V'
    Glyph::new(1618, 24, 19, 26, 1, -19), // 0x57 'W'
    Glyph::new(1675, 16, 19, 18, 1, -19), // 0x58 'X'
    Glyph::new(1713, 17, 19, 17, 0, -19), // 0x59 'Y'
    Glyph::new(1754, 15, 19, 17, 1, -19), // 0x5a 'Z'
    Glyph::new(1790, 7, 24, 11, 2, -20), // 0x5b '['
    Glyph::new(1811, 8, 22, 9, 0, -19), // 0x5c '\\'
    Glyph::new(1833, 8, 24, 11, 1, -20), // 0x5d ']'
    Glyph::new(1857, 14, 7, 20, 3, -19), // 0x5e '^'
    Glyph::new(1870, 12, 2, 12, 0, 4), // 0x5f '_'
    Glyph::new(1873, 5, 5, 12, 2, -21), // 0x60 '`'
    Glyph::new(1877, 13, 15, 16, 1, -15), // 0x61 'a'
    Glyph::new(1902, 14, 20, 17, 2, -20), // 0x62 'b'
    Glyph::new(1937, 11, 15, 14, 1, -15), // 0x63 'c'
    Glyph::new(1958, 14, 20, 17, 1, -20), // 0x64 'd'
    Glyph::new(1993, 14, 15, 16, 1, -15), // 0x65 'e'
    Glyph::new(2020, 11, 20, 10, 0, -20), // 0x66 'f'
    Glyph::new(2048, 14, 21, 17, 1, -15), // 0x67 'g'
    Glyph::new(2085, 13, 20, 17, 2, -20), // 0x68 'h'
    Glyph::new(2118, 4, 20, 8, 2, -20), // 0x69 'i'
    Glyph::new(2128, 7, 26, 8, -1, -20), // 0x6a 'j'
    Glyph::new(2151, 14, 20, 16, 2, -20), // 0x6b 'k'
    Glyph::new(2186, 4, 20, 8, 2, -20), // 0x6c 'l'
    Glyph::new(2196, 21, 15, 24, 2, -15), // 0x6d 'm'
    Glyph::new(2236, 13, 15, 17, 2, -15), // 0x6e 'n'
    Glyph::new(2261, 14, 15, 16, 1, -15), // 0x6f 'o'
    Glyph::new(2288, 14, 21, 17, 2, -15), // 0x70 'p'
    Glyph::new(2325, 14, 21, 17, 1, -15), // 0x71 'q'
    Glyph::new(2362, 10, 15, 12, 2, -15), // 0x72 'r'
    Glyph::new(2381, 12, 15, 14, 1, -15), // 0x73 's'
    Glyph::new(2404, 11, 18, 11, 0, -18), // 0x74 't'
    Glyph::new(2429, 13, 14, 17, 2, -14), // 0x75 'u'
    Glyph::new(2452, 14, 14, 15, 1, -14), // 0x76 'v'
    Glyph::new(2477, 20, 14, 22, 1, -14), // 0x77 'w'
    Glyph::new(2512, 13, 14, 15, 1, -14), // 0x78 'x'
    Glyph::new(2535, 14, 20, 15, 1, -14), // 0x79 'y'
    Glyph::new(2570, 12, 14, 14, 1, -14), // 0x7a 'z'
    Glyph::new(2591, 11, 24, 17, 3, -20), // 0x7b '{'
    Glyph::new(2624, 3, 26, 9, 3, -20), // 0x7c '|'
    Glyph::new(2634, 11, 24, 17, 3, -20), // 0x7d '}'
    Glyph::new(2667, 15, 5, 20, 2, -11), // 0x7e '~'
];
