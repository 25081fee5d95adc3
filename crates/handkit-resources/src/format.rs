//! Record tags and version of the bundle format

pub(crate) const TAG_HEADER: u8 = 0xFF;
pub(crate) const TAG_THEME: u8 = 0xF2;
pub(crate) const TAG_IMAGE: u8 = 0xFD;
pub(crate) const TAG_FONT: u8 = 0xFC;
pub(crate) const TAG_DATA: u8 = 0xFA;
pub(crate) const TAG_L10N: u8 = 0xF9;

pub(crate) const TAG_THEME_LEGACY: u8 = 0xF7;
pub(crate) const TAG_ANIMATION_LEGACY: u8 = 0xF8;
pub(crate) const TAG_INDEXED_IMAGE_LEGACY: u8 = 0xF4;
pub(crate) const TAG_FONT_LEGACY: u8 = 0xF6;
pub(crate) const TAG_INDEXED_FONT_LEGACY: u8 = 0xFB;
pub(crate) const TAG_IMAGE_LEGACY: u8 = 0xF3;

pub(crate) const IMAGE_PNG: u8 = 0xF1;
pub(crate) const IMAGE_JPEG: u8 = 0xF2;
pub(crate) const IMAGE_INDEXED: u8 = 0xF3;
pub(crate) const IMAGE_ANIMATION: u8 = 0xF4;
pub(crate) const IMAGE_VECTOR: u8 = 0xF5;

pub(crate) const BORDER_EMPTY: u16 = 0xFF01;
pub(crate) const BORDER_LINE: u16 = 0xFF02;
pub(crate) const BORDER_ROUNDED: u16 = 0xFF03;
pub(crate) const BORDER_ETCHED_LOWERED: u16 = 0xFF04;
pub(crate) const BORDER_ETCHED_RAISED: u16 = 0xFF05;
pub(crate) const BORDER_BEVEL_LOWERED: u16 = 0xFF06;
pub(crate) const BORDER_BEVEL_RAISED: u16 = 0xFF07;
pub(crate) const BORDER_IMAGE: u16 = 0xFF08;

// Version 0.0 border codes. Bevel raised and lowered are swapped relative to
// the current codes.
pub(crate) const LEGACY_BORDER_EMPTY: i8 = 0;
pub(crate) const LEGACY_BORDER_LINE: i8 = 1;
pub(crate) const LEGACY_BORDER_ROUNDED: i8 = 2;
pub(crate) const LEGACY_BORDER_ETCHED_LOWERED: i8 = 4;
pub(crate) const LEGACY_BORDER_ETCHED_RAISED: i8 = 5;
pub(crate) const LEGACY_BORDER_BEVEL_RAISED: i8 = 6;
pub(crate) const LEGACY_BORDER_BEVEL_LOWERED: i8 = 7;
pub(crate) const LEGACY_BORDER_IMAGE: i8 = 8;

pub(crate) const BG_SCALED_IMAGE: u8 = 0xF1;
pub(crate) const BG_TILE_VERTICAL: u8 = 0xF2;
pub(crate) const BG_TILE_HORIZONTAL: u8 = 0xF3;
pub(crate) const BG_TILE_BOTH: u8 = 0xF4;
pub(crate) const BG_ALIGNED_IMAGE: u8 = 0xF5;
pub(crate) const BG_GRADIENT_HORIZONTAL: u8 = 0xF6;
pub(crate) const BG_GRADIENT_VERTICAL: u8 = 0xF7;
pub(crate) const BG_GRADIENT_RADIAL: u8 = 0xF8;

/// Format version from the header record. Streams without a header are
/// version 0.0, the legacy layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct FormatVersion {
    pub major: i16,
    pub minor: i16,
}

impl FormatVersion {
    pub const LEGACY: FormatVersion = FormatVersion { major: 0, minor: 0 };

    /// What [`ResourceWriter`](crate::ResourceWriter) emits.
    pub const CURRENT: FormatVersion = FormatVersion { major: 1, minor: 2 };

    pub const fn new(major: i16, minor: i16) -> Self {
        Self { major, minor }
    }

    pub fn is_legacy(&self) -> bool {
        *self == Self::LEGACY
    }

    /// Radial gradients and explicit gradient entries carry a size field
    /// from minor version 2 on.
    pub(crate) fn has_gradient_size(&self) -> bool {
        self.minor > 1
    }
}
