use super::*;
use crate::{EncodedImage, Image};

#[test]
fn packed_fallback_splits_into_fields() {
    let font = SystemFont::from_packed(64 | 1 | 2 | 16);
    assert_eq!(font.face, FontFace::Proportional);
    assert!(font.style.contains(FontStyle::BOLD));
    assert!(font.style.contains(FontStyle::ITALIC));
    assert!(!font.style.contains(FontStyle::UNDERLINED));
    assert_eq!(font.size, FontSize::Large);
    assert_eq!(font.to_packed(), 64 | 1 | 2 | 16);
}

#[test]
fn theme_parts_roundtrip() {
    let font = SystemFont::new(
        FontFace::Monospace,
        FontStyle::UNDERLINED.with(FontStyle::BOLD),
        FontSize::Small,
    );
    let [face, style, size] = font.to_parts();
    assert_eq!(SystemFont::from_parts(face, style, size), font);
}

#[test]
fn bitmap_glyphs_follow_charset() {
    let font = BitmapFont {
        image: Image::Encoded(EncodedImage::sniffed(Vec::new())),
        cut_offsets: vec![0, 5, 9],
        widths: vec![5, 4, 6],
        charset: "abc".into(),
        rendering_hint: None,
    };
    assert_eq!(font.glyph('b'), Some(Glyph { offset: 5, width: 4 }));
    assert_eq!(font.glyph('z'), None);
    assert_eq!(font.string_width("cab?"), 15);
}
