//! Bitmap fonts
//!
//! Glyphs are packed 1 bit per pixel, most significant bit first, rows
//! continuing without padding. Each glyph starts on a byte boundary at its
//! `offset`. Only the printable ASCII range has glyphs; everything else is
//! drawn as `#`.

mod condensed;
mod condensed_small;
mod default;

pub use condensed::CONDENSED;
pub use condensed_small::CONDENSED_SMALL;
pub use default::DEFAULT;

/// First code point with a glyph
pub const FIRST_CHAR: u8 = 0x20;
/// Last code point with a glyph
pub const LAST_CHAR: u8 = 0x7e;
/// Substitute for characters without a glyph
pub const REPLACEMENT: u8 = b'#';

/// Metrics of one character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph {
    /// Byte index of the bitmap in the font's bitmap table
    pub offset: u16,
    /// Bitmap width in pixels
    pub width: u8,
    /// Bitmap height in pixels
    pub height: u8,
    /// Horizontal pen advance
    pub advance: u8,
    /// Bitmap left edge relative to the pen
    pub x_start: i8,
    /// Bitmap top edge relative to the baseline
    pub y_start: i8,
}

impl Glyph {
    const EMPTY: Glyph = Glyph::new(0, 0, 0, 0, 0, 0);

    pub const fn new(
        offset: u16,
        width: u8,
        height: u8,
        advance: u8,
        x_start: i8,
        y_start: i8,
    ) -> Self {
        Self {
            offset,
            width,
            height,
            advance,
            x_start,
            y_start,
        }
    }

    /// Bytes occupied by the packed bitmap
    pub const fn bitmap_len(&self) -> usize {
        (self.width as usize * self.height as usize).div_ceil(8)
    }
}

/// A proportional bitmap font covering [`FIRST_CHAR`]..=[`LAST_CHAR`]
#[derive(Debug, Clone, Copy)]
pub struct Font {
    bitmaps: &'static [u8],
    glyphs: &'static [Glyph],
}

impl Font {
    /// Create a font from its packed bitmap and its glyph table
    ///
    /// `glyphs[i]` describes code point `FIRST_CHAR + i`.
    pub const fn new(bitmaps: &'static [u8], glyphs: &'static [Glyph]) -> Self {
        Self { bitmaps, glyphs }
    }

    /// Glyph for a byte, `#` for bytes outside the table
    pub fn glyph(&self, c: u8) -> &Glyph {
        let lookup = |c: u8| {
            c.checked_sub(FIRST_CHAR)
                .and_then(|index| self.glyphs.get(usize::from(index)))
        };

        let found = if (FIRST_CHAR..=LAST_CHAR).contains(&c) {
            lookup(c)
        } else {
            None
        };

        found.or_else(|| lookup(REPLACEMENT)).unwrap_or(&Glyph::EMPTY)
    }

    /// Set pixels of `glyph`, relative to its bitmap origin
    pub fn pixels(&self, glyph: &Glyph) -> GlyphPixels<'static> {
        let start = usize::from(glyph.offset);
        let bits = self
            .bitmaps
            .get(start..start + glyph.bitmap_len())
            .unwrap_or(&[]);

        GlyphPixels {
            bits,
            width: u16::from(glyph.width),
            total: if bits.is_empty() {
                0
            } else {
                u16::from(glyph.width) * u16::from(glyph.height)
            },
            index: 0,
        }
    }

    /// Sum of advances, the pen travel for `text`
    pub fn measure(&self, text: &[u8]) -> u32 {
        text.iter()
            .map(|&c| u32::from(self.glyph(c).advance))
            .sum()
    }
}

/// Iterator over the set pixels of one glyph bitmap
pub struct GlyphPixels<'a> {
    bits: &'a [u8],
    width: u16,
    total: u16,
    index: u16,
}

impl Iterator for GlyphPixels<'_> {
    type Item = (u8, u8);

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.total {
            let index = self.index;
            self.index += 1;

            let byte = self.bits.get(usize::from(index / 8)).copied().unwrap_or(0);
            if byte & (0x80 >> (index % 8)) != 0 {
                return Some(((index % self.width) as u8, (index / self.width) as u8));
            }
        }
        None
    }
}

/// Font size tiers, largest first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tier {
    Default,
    Condensed,
    CondensedSmall,
}

impl Tier {
    /// Tiers in fallback order
    pub const ALL: [Tier; 3] = [Tier::Default, Tier::Condensed, Tier::CondensedSmall];
}

/// The three fonts used for text fitting
#[derive(Debug, Clone, Copy)]
pub struct FontSet {
    pub default: &'static Font,
    pub condensed: &'static Font,
    pub condensed_small: &'static Font,
}

impl FontSet {
    /// Font for a tier
    pub const fn get(&self, tier: Tier) -> &'static Font {
        match tier {
            Tier::Default => self.default,
            Tier::Condensed => self.condensed,
            Tier::CondensedSmall => self.condensed_small,
        }
    }
}

impl Default for FontSet {
    fn default() -> Self {
        Self {
            default: &DEFAULT,
            condensed: &CONDENSED,
            condensed_small: &CONDENSED_SMALL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BASELINE, ROW_HEIGHT};

    // '!' is a 3x2 box outline, '#' a single pixel
    static BITS: [u8; 2] = [0b1111_0100, 0b1000_0000];
    static GLYPHS: [Glyph; 4] = [
        Glyph::new(0, 0, 0, 2, 0, 0),
        Glyph::new(0, 3, 2, 4, 0, -2),
        Glyph::new(0, 0, 0, 3, 0, 0),
        Glyph::new(1, 1, 1, 2, 0, -1),
    ];
    static TINY: Font = Font::new(&BITS, &GLYPHS);

    #[test]
    fn test_glyph_lookup() {
        assert_eq!(TINY.glyph(b'!').advance, 4);
        assert_eq!(TINY.glyph(b' ').advance, 2);
    }

    #[test]
    fn test_missing_glyph_uses_replacement() {
        // Outside the printable range
        assert_eq!(TINY.glyph(0x7f), &GLYPHS[3]);
        assert_eq!(TINY.glyph(0xc3), &GLYPHS[3]);
        // Inside the range but beyond a short table
        assert_eq!(TINY.glyph(b'A'), &GLYPHS[3]);
    }

    #[test]
    fn test_pixels_msb_first() {
        let set: Vec<_> = TINY.pixels(TINY.glyph(b'!')).collect();
        assert_eq!(set, [(0, 0), (1, 0), (2, 0), (0, 1), (2, 1)]);

        let set: Vec<_> = TINY.pixels(TINY.glyph(b'#')).collect();
        assert_eq!(set, [(0, 0)]);

        assert_eq!(TINY.pixels(TINY.glyph(b' ')).count(), 0);
    }

    #[test]
    fn test_truncated_bitmap_draws_nothing() {
        static SHORT: [Glyph; 2] = [Glyph::new(0, 0, 0, 1, 0, 0), Glyph::new(1, 8, 8, 9, 0, -8)];
        let font = Font::new(&BITS, &SHORT);
        assert_eq!(font.pixels(font.glyph(b'!')).count(), 0);
    }

    #[test]
    fn test_measure() {
        assert_eq!(TINY.measure(b"! !"), 10);
        assert_eq!(DEFAULT.measure(b"AAAA"), 112);
        assert_eq!(CONDENSED.measure(b"AAAA"), 100);
        assert_eq!(CONDENSED_SMALL.measure(b"AAAA"), 72);
    }

    #[test]
    fn test_builtin_tables_complete() {
        let count = usize::from(LAST_CHAR - FIRST_CHAR) + 1;
        for tier in Tier::ALL {
            let font = FontSet::default().get(tier);
            assert_eq!(font.glyphs.len(), count);
            for glyph in font.glyphs {
                assert!(usize::from(glyph.offset) + glyph.bitmap_len() <= font.bitmaps.len());
            }
        }
    }

    #[test]
    fn test_builtin_glyphs_fit_row_band() {
        for tier in Tier::ALL {
            let font = FontSet::default().get(tier);
            for glyph in font.glyphs {
                let top = i32::from(BASELINE) + i32::from(glyph.y_start);
                let bottom = top + i32::from(glyph.height);
                assert!(top >= 0);
                assert!(bottom <= i32::from(ROW_HEIGHT));
            }
        }
    }

    #[test]
    fn test_tiers_shrink() {
        let set = FontSet::default();
        let text = b"Hello World";
        assert!(set.get(Tier::Default).measure(text) > set.get(Tier::Condensed).measure(text));
        assert!(
            set.get(Tier::Condensed).measure(text) > set.get(Tier::CondensedSmall).measure(text)
        );
    }
}
