//! [`ResourceTable`] → stream, in the current format

use std::io::Write;

use handkit_ui_graphics::Color;

use crate::format::*;
use crate::table::merge_border_states;
use crate::theme::KeyShape;
use crate::{
    Animation, BitmapFont, Border, EncodedFormat, EncodedImage, Font, FormatVersion, Image,
    IndexedImage, L10n, Resource, ResourceError, ResourceTable, Result, Theme, ThemeFont,
    ThemeValue, VectorImage,
};

/// Encodes tables back into bundles that [`decode`](crate::decode) reads.
///
/// Output always uses [`FormatVersion::CURRENT`] with a header record,
/// whatever version the table was decoded from. Pressed and focused border
/// variants only exist in version 0.0 and are dropped.
#[derive(Debug, Default)]
pub struct ResourceWriter {
    out: Vec<u8>,
}

impl ResourceWriter {
    pub fn encode(table: &ResourceTable) -> Result<Vec<u8>> {
        let mut writer = ResourceWriter::default();
        writer.write_table(table)?;
        Ok(writer.out)
    }

    pub fn write(table: &ResourceTable, mut out: impl Write) -> Result<()> {
        out.write_all(&Self::encode(table)?)?;
        Ok(())
    }

    fn write_table(&mut self, table: &ResourceTable) -> Result<()> {
        self.write_count("record count", table.len() + 1)?;
        self.write_header(table.metadata())?;
        for (name, resource) in table.iter() {
            log::trace!("encoding {} {name:?}", resource.kind());
            match resource {
                Resource::Image(image) => {
                    self.write_record_start(TAG_IMAGE, name)?;
                    self.write_image(image)?;
                }
                Resource::Font(font) => {
                    self.write_record_start(TAG_FONT, name)?;
                    self.write_font(font)?;
                }
                Resource::Theme(theme) => {
                    self.write_record_start(TAG_THEME, name)?;
                    let mut theme = theme.clone();
                    merge_border_states(&mut theme);
                    self.write_theme(&theme)?;
                }
                Resource::Data(data) => {
                    self.write_record_start(TAG_DATA, name)?;
                    self.write_blob("data", data)?;
                }
                Resource::L10n(l10n) => {
                    self.write_record_start(TAG_L10N, name)?;
                    self.write_l10n(l10n)?;
                }
            }
        }
        Ok(())
    }

    fn write_record_start(&mut self, tag: u8, name: &str) -> Result<()> {
        self.write_u8(tag);
        self.write_utf(name)
    }

    fn write_header(&mut self, metadata: &[String]) -> Result<()> {
        self.write_record_start(TAG_HEADER, "")?;
        let size: usize = 6 + metadata.iter().map(|entry| 2 + entry.len()).sum::<usize>();
        self.write_i16(i16::try_from(size).unwrap_or(i16::MAX));
        let version = FormatVersion::CURRENT;
        self.write_i16(version.major);
        self.write_i16(version.minor);
        self.write_count("metadata", metadata.len())?;
        for entry in metadata {
            self.write_utf(entry)?;
        }
        Ok(())
    }

    fn write_u8(&mut self, value: u8) {
        self.out.push(value);
    }

    fn write_i8(&mut self, value: i8) {
        self.out.push(value as u8);
    }

    fn write_bool(&mut self, value: bool) {
        self.out.push(u8::from(value));
    }

    fn write_i16(&mut self, value: i16) {
        self.out.extend_from_slice(&value.to_be_bytes());
    }

    fn write_u16(&mut self, value: u16) {
        self.out.extend_from_slice(&value.to_be_bytes());
    }

    fn write_i32(&mut self, value: i32) {
        self.out.extend_from_slice(&value.to_be_bytes());
    }

    fn write_f32(&mut self, value: f32) {
        self.out.extend_from_slice(&value.to_bits().to_be_bytes());
    }

    fn write_color(&mut self, color: Color) {
        self.write_i32(color.to_bits());
    }

    fn write_count(&mut self, what: &'static str, len: usize) -> Result<()> {
        let count = i16::try_from(len).map_err(|_| ResourceError::Unencodable { what, len })?;
        self.write_i16(count);
        Ok(())
    }

    fn write_small_count(&mut self, what: &'static str, len: usize) -> Result<()> {
        let count = i8::try_from(len).map_err(|_| ResourceError::Unencodable { what, len })?;
        self.write_i8(count);
        Ok(())
    }

    fn write_utf(&mut self, value: &str) -> Result<()> {
        let encoded = cesu8::to_java_cesu8(value);
        let len = u16::try_from(encoded.len()).map_err(|_| ResourceError::Unencodable {
            what: "string",
            len: encoded.len(),
        })?;
        self.write_u16(len);
        self.out.extend_from_slice(&encoded);
        Ok(())
    }

    fn write_blob(&mut self, what: &'static str, data: &[u8]) -> Result<()> {
        let len = i32::try_from(data.len()).map_err(|_| ResourceError::Unencodable {
            what,
            len: data.len(),
        })?;
        self.write_i32(len);
        self.out.extend_from_slice(data);
        Ok(())
    }

    fn write_image(&mut self, image: &Image) -> Result<()> {
        match image {
            Image::Encoded(encoded) => self.write_encoded(encoded),
            Image::Indexed(indexed) => {
                self.write_u8(IMAGE_INDEXED);
                self.write_indexed(indexed)
            }
            Image::Animation(animation) => {
                self.write_u8(IMAGE_ANIMATION);
                self.write_animation(animation)
            }
            Image::Vector(vector) => {
                self.write_u8(IMAGE_VECTOR);
                self.write_vector(vector)
            }
        }
    }

    fn write_encoded(&mut self, image: &EncodedImage) -> Result<()> {
        let tag = match image.format {
            EncodedFormat::Jpeg => IMAGE_JPEG,
            EncodedFormat::Png | EncodedFormat::Unknown => IMAGE_PNG,
        };
        self.write_u8(tag);
        self.write_blob("image data", &image.data)
    }

    fn write_indexed(&mut self, image: &IndexedImage) -> Result<()> {
        let palette_len = image.palette.len();
        if !(1..=256).contains(&palette_len) {
            return Err(ResourceError::Unencodable {
                what: "palette",
                len: palette_len,
            });
        }
        let expected = usize::from(image.width) * usize::from(image.height);
        if image.pixels.len() != expected {
            return Err(ResourceError::Unencodable {
                what: "pixel data",
                len: image.pixels.len(),
            });
        }
        // 256 wraps to 0, which decodes back as a full palette.
        self.write_u8(palette_len as u8);
        for &color in &image.palette {
            self.write_color(color);
        }
        self.write_count("image width", usize::from(image.width))?;
        self.write_count("image height", usize::from(image.height))?;
        self.out.extend_from_slice(&image.pixels);
        Ok(())
    }

    fn write_animation(&mut self, animation: &Animation) -> Result<()> {
        self.write_count("animation width", usize::from(animation.width))?;
        self.write_count("animation height", usize::from(animation.height))?;
        self.write_bool(animation.looping);
        self.write_small_count("animation frames", animation.frames.len())?;
        for frame in &animation.frames {
            let delay = i32::try_from(frame.delay_ms).map_err(|_| ResourceError::Unencodable {
                what: "frame delay",
                len: frame.delay_ms as usize,
            })?;
            self.write_i32(delay);
            self.write_indexed(&frame.image)?;
        }
        Ok(())
    }

    fn write_vector(&mut self, vector: &VectorImage) -> Result<()> {
        self.write_blob("vector data", &vector.data)?;
        self.write_utf(&vector.base_url)?;
        self.write_bool(vector.animated);
        self.write_f32(vector.ratio_width);
        self.write_f32(vector.ratio_height);
        let fallback = vector
            .fallback
            .as_ref()
            .map_or(&[][..], |image| image.data.as_slice());
        self.write_blob("fallback image", fallback)
    }

    fn write_font(&mut self, font: &Font) -> Result<()> {
        self.write_u8(font.fallback.to_packed());
        self.write_bool(font.truetype.is_some());
        if let Some(data) = &font.truetype {
            self.write_blob("truetype data", data)?;
        }
        self.write_bool(font.lookup.is_some());
        if let Some(lookup) = &font.lookup {
            self.write_utf(lookup)?;
        }
        self.write_bool(font.bitmap.is_some());
        if let Some(bitmap) = &font.bitmap {
            self.write_bitmap_font(bitmap)?;
        }
        Ok(())
    }

    fn write_bitmap_font(&mut self, font: &BitmapFont) -> Result<()> {
        if font.cut_offsets.len() != font.widths.len() {
            return Err(ResourceError::Unencodable {
                what: "glyph widths",
                len: font.widths.len(),
            });
        }
        self.write_image(&font.image)?;
        self.write_count("glyph count", font.cut_offsets.len())?;
        for &offset in &font.cut_offsets {
            self.write_i16(offset);
        }
        for &width in &font.widths {
            self.write_i8(width);
        }
        self.write_utf(&font.charset)?;
        self.write_i8(font.rendering_hint.unwrap_or(0));
        Ok(())
    }

    fn write_theme(&mut self, theme: &Theme) -> Result<()> {
        self.write_count("theme entries", theme.len())?;
        for (key, value) in theme.entries() {
            if KeyShape::of(key) != Some(value.shape()) {
                return Err(ResourceError::MismatchedThemeEntry {
                    key: key.to_owned(),
                });
            }
            self.write_utf(key)?;
            self.write_theme_value(key, value)?;
        }
        Ok(())
    }

    fn write_theme_value(&mut self, key: &str, value: &ThemeValue) -> Result<()> {
        match value {
            ThemeValue::Color(color) => self.write_color(*color),
            ThemeValue::Transparency(value)
            | ThemeValue::BackgroundType(value)
            | ThemeValue::BackgroundAlignment(value) => self.write_u8(*value),
            ThemeValue::Insets(insets) => self.out.extend_from_slice(insets),
            ThemeValue::Border(border) => {
                if border.pressed.is_some() || border.focused.is_some() {
                    log::warn!("theme entry {key:?}: pressed and focused borders are not written");
                }
                self.write_border(&border.border)?;
            }
            ThemeValue::Font(ThemeFont::Named(font)) => {
                self.write_bool(true);
                self.write_utf(font.name())?;
            }
            ThemeValue::Font(ThemeFont::System(font)) => {
                self.write_bool(false);
                self.out.extend_from_slice(&font.to_parts());
            }
            ThemeValue::BackgroundGradient(gradient) => {
                self.write_color(gradient.start);
                self.write_color(gradient.end);
                self.write_f32(gradient.x);
                self.write_f32(gradient.y);
                self.write_f32(gradient.size);
            }
            ThemeValue::Image(image) => self.write_utf(image.name())?,
            ThemeValue::ScaledImage(scaled) => self.write_bool(*scaled),
        }
        Ok(())
    }

    fn write_theme_colors<const N: usize>(&mut self, colors: Option<[Color; N]>) {
        self.write_bool(colors.is_none());
        for color in colors.into_iter().flatten() {
            self.write_color(color);
        }
    }

    fn write_border(&mut self, border: &Border) -> Result<()> {
        match border {
            Border::Empty => self.write_u16(BORDER_EMPTY),
            Border::Line { thickness, color } => {
                self.write_u16(BORDER_LINE);
                self.write_bool(color.is_none());
                self.write_i8(*thickness);
                if let Some(color) = color {
                    self.write_color(*color);
                }
            }
            Border::Rounded {
                arc_width,
                arc_height,
                color,
            } => {
                self.write_u16(BORDER_ROUNDED);
                self.write_bool(color.is_none());
                self.write_i8(*arc_width);
                self.write_i8(*arc_height);
                if let Some(color) = color {
                    self.write_color(*color);
                }
            }
            Border::Etched { raised, colors } => {
                self.write_u16(if *raised {
                    BORDER_ETCHED_RAISED
                } else {
                    BORDER_ETCHED_LOWERED
                });
                self.write_theme_colors(*colors);
            }
            Border::Bevel { raised, colors } => {
                self.write_u16(if *raised {
                    BORDER_BEVEL_RAISED
                } else {
                    BORDER_BEVEL_LOWERED
                });
                self.write_theme_colors(*colors);
            }
            Border::Image(border) => {
                self.write_u16(BORDER_IMAGE);
                self.write_small_count("border images", border.images.len())?;
                for image in &border.images {
                    self.write_utf(image.name())?;
                }
            }
        }
        Ok(())
    }

    fn write_l10n(&mut self, l10n: &L10n) -> Result<()> {
        let keys = l10n.keys();
        let languages: Vec<&str> = l10n.languages().collect();
        self.write_count("l10n keys", keys.len())?;
        self.write_count("l10n languages", languages.len())?;
        for key in keys {
            self.write_utf(key)?;
        }
        for language in languages {
            self.write_utf(language)?;
            for key in keys {
                self.write_utf(l10n.get(language, key).unwrap_or_default())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/writer_tests.rs"]
mod tests;
