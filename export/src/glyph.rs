use font8x8::BASIC_FONTS;
use font8x8::BLOCK_FONTS;
use font8x8::BOX_FONTS;
use font8x8::GREEK_FONTS;
use font8x8::LATIN_FONTS;
use font8x8::UnicodeFonts;

/// Width and height of a bitmap glyph in font pixels.
pub(crate) const GLYPH_SIZE: u32 = 8;

/// Look up the 8×8 bitmap for `ch`. Row bytes are top to bottom, bit 0 is the
/// leftmost pixel.
///
/// Characters outside the bundled fonts return `None`; the caller draws the
/// cell background only.
pub(crate) fn lookup(ch: char) -> Option<[u8; 8]> {
    BASIC_FONTS
        .get(ch)
        .or_else(|| LATIN_FONTS.get(ch))
        .or_else(|| BOX_FONTS.get(ch))
        .or_else(|| BLOCK_FONTS.get(ch))
        .or_else(|| GREEK_FONTS.get(ch))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swedish_letters_have_glyphs() {
        for ch in ['å', 'ä', 'ö', 'Å', 'Ä', 'Ö', 'é'] {
            assert!(lookup(ch).is_some(), "missing glyph for {ch}");
        }
    }

    #[test]
    fn bar_characters_have_glyphs() {
        for ch in ['█', '░', '─', '│'] {
            assert!(lookup(ch).is_some(), "missing glyph for {ch}");
        }
    }

    #[test]
    fn unsupported_characters_are_none() {
        assert_eq!(lookup('漢'), None);
        assert_eq!(lookup('🎉'), None);
    }

    #[test]
    fn space_is_blank() {
        assert_eq!(lookup(' '), Some([0; 8]));
    }
}
