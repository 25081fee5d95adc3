//! Packed RGB colours as stored in theme records

use std::fmt;

/// A colour packed as `0xAARRGGBB`; themes only carry the RGB part, so the
/// alpha byte is usually zero and transparency travels separately.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u32);

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    pub fn r(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn g(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn b(&self) -> u8 {
        self.0 as u8
    }

    pub fn a(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub fn argb(&self) -> u32 {
        self.0
    }

    /// Reinterprets the bits as the signed value used on the wire.
    pub fn to_bits(&self) -> i32 {
        self.0 as i32
    }

    pub fn from_bits(bits: i32) -> Self {
        Self(bits as u32)
    }

    pub const BLACK: Color = Color(0x000000);
    pub const WHITE: Color = Color(0xFFFFFF);
    pub const RED: Color = Color(0xFF0000);
    pub const GREEN: Color = Color(0x00FF00);
    pub const BLUE: Color = Color(0x0000FF);
}

/// Lowercase hex without leading zeros, the textual form theme tables use.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Color(value)
    }
}
