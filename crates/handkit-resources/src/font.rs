use crate::Image;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontFace {
    #[default]
    System,
    Monospace,
    Proportional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontSize {
    #[default]
    Medium,
    Small,
    Large,
}

/// Bold, italic and underline bits; plain is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FontStyle(u8);

impl FontStyle {
    pub const PLAIN: FontStyle = FontStyle(0);
    pub const BOLD: FontStyle = FontStyle(1);
    pub const ITALIC: FontStyle = FontStyle(2);
    pub const UNDERLINED: FontStyle = FontStyle(4);

    const MASK: u8 = 0x07;

    pub fn from_bits(bits: u8) -> Self {
        FontStyle(bits & Self::MASK)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn contains(self, other: FontStyle) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn with(self, other: FontStyle) -> Self {
        FontStyle(self.0 | other.0)
    }
}

/// A platform font picked by face, style and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SystemFont {
    pub face: FontFace,
    pub style: FontStyle,
    pub size: FontSize,
}

impl SystemFont {
    const FACE_MONOSPACE: u8 = 32;
    const FACE_PROPORTIONAL: u8 = 64;
    const SIZE_SMALL: u8 = 8;
    const SIZE_LARGE: u8 = 16;

    pub fn new(face: FontFace, style: FontStyle, size: FontSize) -> Self {
        Self { face, style, size }
    }

    fn face_from_bits(bits: u8) -> FontFace {
        match bits & (Self::FACE_MONOSPACE | Self::FACE_PROPORTIONAL) {
            Self::FACE_MONOSPACE => FontFace::Monospace,
            Self::FACE_PROPORTIONAL => FontFace::Proportional,
            _ => FontFace::System,
        }
    }

    fn size_from_bits(bits: u8) -> FontSize {
        match bits & (Self::SIZE_SMALL | Self::SIZE_LARGE) {
            Self::SIZE_SMALL => FontSize::Small,
            Self::SIZE_LARGE => FontSize::Large,
            _ => FontSize::Medium,
        }
    }

    fn face_bits(self) -> u8 {
        match self.face {
            FontFace::System => 0,
            FontFace::Monospace => Self::FACE_MONOSPACE,
            FontFace::Proportional => Self::FACE_PROPORTIONAL,
        }
    }

    fn size_bits(self) -> u8 {
        match self.size {
            FontSize::Medium => 0,
            FontSize::Small => Self::SIZE_SMALL,
            FontSize::Large => Self::SIZE_LARGE,
        }
    }

    /// Decodes a font packed into one byte, as font records store their
    /// fallback.
    pub fn from_packed(bits: u8) -> Self {
        Self {
            face: Self::face_from_bits(bits),
            style: FontStyle::from_bits(bits),
            size: Self::size_from_bits(bits),
        }
    }

    pub fn to_packed(self) -> u8 {
        self.face_bits() | self.style.bits() | self.size_bits()
    }

    /// Decodes the separate face, style and size bytes used by themes.
    pub fn from_parts(face: u8, style: u8, size: u8) -> Self {
        Self {
            face: Self::face_from_bits(face),
            style: FontStyle::from_bits(style),
            size: Self::size_from_bits(size),
        }
    }

    pub fn to_parts(self) -> [u8; 3] {
        [self.face_bits(), self.style.bits(), self.size_bits()]
    }
}

/// Where one character sits in a bitmap font strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub offset: i16,
    pub width: i8,
}

/// Glyphs cut out of a single horizontal image strip.
#[derive(Debug, Clone, PartialEq)]
pub struct BitmapFont {
    pub image: Image,
    pub cut_offsets: Vec<i16>,
    pub widths: Vec<i8>,
    /// Characters in strip order; the n-th char uses the n-th offset.
    pub charset: String,
    pub rendering_hint: Option<i8>,
}

impl BitmapFont {
    pub fn glyph(&self, ch: char) -> Option<Glyph> {
        let index = self.charset.chars().position(|c| c == ch)?;
        Some(Glyph {
            offset: *self.cut_offsets.get(index)?,
            width: *self.widths.get(index)?,
        })
    }

    /// Sum of glyph widths; characters missing from the charset count as
    /// zero.
    pub fn string_width(&self, text: &str) -> i32 {
        text.chars()
            .filter_map(|ch| self.glyph(ch))
            .map(|glyph| i32::from(glyph.width))
            .sum()
    }
}

/// A font record. Any of the embedded forms may be missing, in which case
/// the fallback system font applies.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub fallback: SystemFont,
    pub truetype: Option<Vec<u8>>,
    /// Platform font name to look up before falling back.
    pub lookup: Option<String>,
    pub bitmap: Option<BitmapFont>,
}

impl Font {
    pub fn system(fallback: SystemFont) -> Self {
        Self {
            fallback,
            truetype: None,
            lookup: None,
            bitmap: None,
        }
    }

    pub fn bitmap(bitmap: BitmapFont) -> Self {
        Self {
            bitmap: Some(bitmap),
            ..Self::system(SystemFont::default())
        }
    }
}

#[cfg(test)]
#[path = "tests/font_tests.rs"]
mod tests;
