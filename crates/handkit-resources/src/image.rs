use handkit_ui_graphics::Color;

/// Container format of an encoded image blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodedFormat {
    Png,
    Jpeg,
    /// Legacy streams do not record the format; see [`EncodedFormat::sniff`].
    Unknown,
}

impl EncodedFormat {
    /// Guesses the format from the leading signature bytes.
    pub fn sniff(data: &[u8]) -> Self {
        match data {
            [0x89, b'P', b'N', b'G', ..] => EncodedFormat::Png,
            [0xFF, 0xD8, ..] => EncodedFormat::Jpeg,
            _ => EncodedFormat::Unknown,
        }
    }
}

/// A PNG or JPEG blob passed through undecoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub format: EncodedFormat,
    pub data: Vec<u8>,
}

impl EncodedImage {
    pub fn new(format: EncodedFormat, data: Vec<u8>) -> Self {
        Self { format, data }
    }

    pub fn sniffed(data: Vec<u8>) -> Self {
        Self {
            format: EncodedFormat::sniff(&data),
            data,
        }
    }
}

/// An 8-bit palette image: one palette index per pixel, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedImage {
    pub width: u16,
    pub height: u16,
    pub palette: Vec<Color>,
    pub pixels: Vec<u8>,
}

impl IndexedImage {
    /// Colour of the pixel at (`x`, `y`). `None` outside the image or when
    /// the pixel indexes past the palette.
    pub fn pixel(&self, x: u16, y: u16) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = usize::from(y) * usize::from(self.width) + usize::from(x);
        let index = *self.pixels.get(offset)?;
        self.palette.get(usize::from(index)).copied()
    }

    /// Expands every pixel through the palette. Out-of-range indices become
    /// transparent black.
    pub fn to_argb(&self) -> Vec<u32> {
        self.pixels
            .iter()
            .map(|&index| {
                self.palette
                    .get(usize::from(index))
                    .map_or(0, Color::argb)
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationFrame {
    pub delay_ms: u32,
    pub image: IndexedImage,
}

/// A sequence of indexed frames shown one after another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animation {
    pub width: u16,
    pub height: u16,
    pub looping: bool,
    pub frames: Vec<AnimationFrame>,
}

impl Animation {
    /// Time to play every frame once.
    pub fn duration_ms(&self) -> u64 {
        self.frames.iter().map(|frame| u64::from(frame.delay_ms)).sum()
    }

    /// Index of the frame showing `elapsed_ms` after the start. Non-looping
    /// animations stay on their last frame.
    pub fn frame_index_at(&self, elapsed_ms: u64) -> Option<usize> {
        let last = self.frames.len().checked_sub(1)?;
        let duration = self.duration_ms();
        if duration == 0 {
            return Some(0);
        }
        let mut time = if self.looping {
            elapsed_ms % duration
        } else if elapsed_ms >= duration {
            return Some(last);
        } else {
            elapsed_ms
        };
        for (index, frame) in self.frames.iter().enumerate() {
            let delay = u64::from(frame.delay_ms);
            if time < delay {
                return Some(index);
            }
            time -= delay;
        }
        Some(last)
    }
}

/// An SVG document with an optional raster to use where vector graphics are
/// unsupported.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorImage {
    pub data: Vec<u8>,
    pub base_url: String,
    pub animated: bool,
    pub ratio_width: f32,
    pub ratio_height: f32,
    pub fallback: Option<EncodedImage>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Image {
    Encoded(EncodedImage),
    Indexed(IndexedImage),
    Animation(Animation),
    Vector(VectorImage),
}

impl Image {
    /// Pixel size where the format records it without decoding.
    pub fn dimensions(&self) -> Option<(u16, u16)> {
        match self {
            Image::Indexed(image) => Some((image.width, image.height)),
            Image::Animation(animation) => Some((animation.width, animation.height)),
            Image::Encoded(_) | Image::Vector(_) => None,
        }
    }

    pub fn is_animated(&self) -> bool {
        match self {
            Image::Animation(_) => true,
            Image::Vector(vector) => vector.animated,
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "tests/image_tests.rs"]
mod tests;
