//! Single-line text layout
//!
//! Text is fitted into a fixed-width area: the largest font tier whose
//! rendering fits wins, and if none fits the smallest one is used and the
//! line is cut at the last glyph that still fits.

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::Rgb565;
use crate::font::{FontSet, Tier, REPLACEMENT};
use crate::MAX_TEXT_LEN;

/// Horizontal placement of a line inside its area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Justify {
    #[default]
    Left,
    Center,
    Right,
}

impl Justify {
    /// Pen start for a line of `text_width` in an area of `area_width`
    pub const fn offset(self, area_width: u16, text_width: u16) -> u16 {
        let spare = area_width.saturating_sub(text_width);
        match self {
            Justify::Left => 0,
            Justify::Center => spare / 2,
            Justify::Right => spare,
        }
    }
}

/// The band of the screen text is drawn into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TextArea {
    /// Left edge in logical pixels
    pub x: u16,
    /// Band index, in units of [`ROW_HEIGHT`](crate::ROW_HEIGHT)
    pub row: u8,
    /// Width in pixels
    pub width: u16,
    pub justify: Justify,
    pub foreground: Rgb565,
    pub background: Rgb565,
    /// Pen position for the next glyph
    #[cfg_attr(feature = "serde", serde(skip))]
    pub cursor: u16,
}

/// Sanitized text, one byte per glyph
pub type Line = Vec<u8, MAX_TEXT_LEN>;

/// Reduce raw bytes to something the fonts can draw
///
/// The input is cut to [`MAX_TEXT_LEN`] bytes and trailing spaces are
/// dropped. Control bytes disappear, and every run of bytes outside the
/// printable ASCII range turns into a single `#`. A control byte inside
/// such a run does not end it.
pub fn sanitize(raw: &[u8]) -> Line {
    let mut text = &raw[..raw.len().min(MAX_TEXT_LEN)];
    while let [rest @ .., b' '] = text {
        text = rest;
    }

    let mut line = Line::new();
    let mut replaced = false;
    for &c in text {
        match c {
            0x00..=0x1f => continue,
            0x20..=0x7e => {
                replaced = false;
                // Never exceeds the capacity, the input is already truncated
                let _ = line.push(c);
            }
            _ => {
                if !replaced {
                    let _ = line.push(REPLACEMENT);
                }
                replaced = true;
            }
        }
    }
    line
}

/// Choose the largest tier that fits `width`
///
/// Returns the tier and the width used for justification, which is clamped
/// to the area when even the smallest tier overflows.
pub fn fit(fonts: &FontSet, text: &[u8], width: u16) -> (Tier, u16) {
    let mut choice = (Tier::CondensedSmall, 0);
    for tier in Tier::ALL {
        let measured = fonts.get(tier).measure(text);
        choice = (tier, measured);
        if measured <= u32::from(width) {
            break;
        }
    }

    let (tier, measured) = choice;
    (tier, measured.min(u32::from(width)) as u16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_justify_offsets() {
        assert_eq!(Justify::Left.offset(100, 40), 0);
        assert_eq!(Justify::Center.offset(100, 40), 30);
        assert_eq!(Justify::Right.offset(100, 40), 60);
        // Overflowing text is never placed left of the area
        assert_eq!(Justify::Right.offset(100, 140), 0);
        assert_eq!(Justify::Center.offset(100, 101), 0);
    }

    #[test]
    fn test_sanitize_collapses_non_ascii_runs() {
        let line = sanitize(&[0x41, 0xc3, 0xa9, 0xc3, 0xa9, 0x42]);
        assert_eq!(line.as_slice(), b"A#B");

        let line = sanitize("é ü".as_bytes());
        assert_eq!(line.as_slice(), b"# #");
    }

    #[test]
    fn test_sanitize_control_bytes() {
        assert_eq!(sanitize(b"a\tb\r\n").as_slice(), b"ab");
        // A control byte does not split a replacement run
        assert_eq!(sanitize(&[0xc3, 0x07, 0xa9]).as_slice(), b"#");
        assert_eq!(sanitize(&[0x7f, b'x']).as_slice(), b"#x");
    }

    #[test]
    fn test_sanitize_trailing_spaces() {
        assert_eq!(sanitize(b"ab   ").as_slice(), b"ab");
        assert_eq!(sanitize(b"  ab").as_slice(), b"  ab");
        assert_eq!(sanitize(b"    ").as_slice(), b"");
        assert_eq!(sanitize(b"").as_slice(), b"");
    }

    #[test]
    fn test_sanitize_truncates_before_stripping() {
        let mut raw = [b'x'; 40];
        raw[30] = b' ';
        raw[31] = b' ';
        assert_eq!(sanitize(&raw).as_slice(), &[b'x'; 30]);
    }

    #[test]
    fn test_sanitize_space_before_control() {
        // Spaces are stripped before control bytes are dropped
        assert_eq!(sanitize(b"a \x01").as_slice(), b"a ");
        assert_eq!(sanitize(b"a \x01 ").as_slice(), b"a ");
    }

    #[test]
    fn test_fit_tiers() {
        let fonts = FontSet::default();
        // "AAAA" measures 112, 100 and 72 in the three tiers
        assert_eq!(fit(&fonts, b"AAAA", 240), (Tier::Default, 112));
        assert_eq!(fit(&fonts, b"AAAA", 112), (Tier::Default, 112));
        assert_eq!(fit(&fonts, b"AAAA", 110), (Tier::Condensed, 100));
        assert_eq!(fit(&fonts, b"AAAA", 80), (Tier::CondensedSmall, 72));
        assert_eq!(fit(&fonts, b"AAAA", 70), (Tier::CondensedSmall, 70));
    }

    #[test]
    fn test_fit_empty() {
        assert_eq!(fit(&FontSet::default(), b"", 0), (Tier::Default, 0));
    }

    proptest! {
        #[test]
        fn prop_sanitized_is_printable(raw in proptest::collection::vec(any::<u8>(), 0..64)) {
            let line = sanitize(&raw);
            prop_assert!(line.len() <= MAX_TEXT_LEN);
            prop_assert!(line.iter().all(|c| (0x20..=0x7e).contains(c)));
            // Only a dropped control byte can leave a space at the end
            if !raw.iter().any(|c| *c < 0x20) {
                prop_assert!(line.last() != Some(&b' '));
            }
            prop_assert!(!line.windows(2).any(|w| w == b"##" && !raw.contains(&b'#')));
        }

        #[test]
        fn prop_fit_never_skips_a_fitting_tier(
            raw in proptest::collection::vec(0x20u8..=0x7e, 0..32),
            width in 0u16..400,
        ) {
            let fonts = FontSet::default();
            let (tier, measured) = fit(&fonts, &raw, width);
            prop_assert!(measured <= width);
            for earlier in Tier::ALL.iter().take_while(|t| **t != tier) {
                prop_assert!(fonts.get(*earlier).measure(&raw) > u32::from(width));
            }
        }
    }
}
