//! Stream → [`ResourceTable`]

use std::io::Read;
use std::rc::Rc;

use handkit_ui_graphics::Color;

use crate::format::*;
use crate::theme::KeyShape;
use crate::{
    Animation, AnimationFrame, BitmapFont, Border, ByteReader, CorruptKind, EncodedFormat,
    EncodedImage, Font, FormatVersion, Gradient, Image, ImageBorder, IndexedImage, L10n, Ref,
    Resource, ResourceError, ResourceTable, Result, SystemFont, Theme, ThemeBorder, ThemeFont,
    ThemeValue, VectorImage,
};

/// What to keep from payloads the host may not be able to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Keep embedded TrueType data in font records. When false the bytes
    /// are skipped and the font falls back to its lookup name, bitmap or
    /// system font.
    pub keep_truetype: bool,
    /// Keep SVG documents. When false an SVG with a fallback raster decodes
    /// as that raster.
    pub keep_vector_graphics: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            keep_truetype: true,
            keep_vector_graphics: true,
        }
    }
}

/// Reads a whole bundle from `reader`.
pub fn decode(reader: impl Read) -> Result<ResourceTable> {
    decode_with(reader, DecodeOptions::default())
}

pub fn decode_with(mut reader: impl Read, options: DecodeOptions) -> Result<ResourceTable> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    decode_bytes_with(&bytes, options)
}

pub fn decode_bytes(bytes: &[u8]) -> Result<ResourceTable> {
    decode_bytes_with(bytes, DecodeOptions::default())
}

/// Decodes an in-memory bundle. The first malformed record aborts the whole
/// decode; no partially filled table is returned.
pub fn decode_bytes_with(bytes: &[u8], options: DecodeOptions) -> Result<ResourceTable> {
    Decoder {
        input: ByteReader::new(bytes),
        options,
        table: ResourceTable::new(FormatVersion::LEGACY),
    }
    .run()
}

struct Decoder<'a> {
    input: ByteReader<'a>,
    options: DecodeOptions,
    table: ResourceTable,
}

impl Decoder<'_> {
    fn version(&self) -> FormatVersion {
        self.table.version()
    }

    fn run(mut self) -> Result<ResourceTable> {
        let count = self.input.read_count()?;
        for _ in 0..count {
            let record_start = self.input.position();
            let tag = self.input.read_u8()?;
            let name = self.input.read_utf()?;
            let resource = match tag {
                TAG_HEADER => {
                    self.read_header()?;
                    continue;
                }
                TAG_THEME => Resource::Theme(self.read_theme(&name, true)?),
                TAG_THEME_LEGACY => Resource::Theme(self.read_theme(&name, false)?),
                TAG_IMAGE | TAG_IMAGE_LEGACY => Resource::Image(Rc::new(self.read_image()?)),
                TAG_INDEXED_IMAGE_LEGACY => {
                    Resource::Image(Rc::new(Image::Indexed(self.read_indexed()?)))
                }
                TAG_ANIMATION_LEGACY => {
                    Resource::Image(Rc::new(Image::Animation(self.read_animation()?)))
                }
                TAG_FONT | TAG_FONT_LEGACY => Resource::Font(Rc::new(self.read_font(false)?)),
                TAG_INDEXED_FONT_LEGACY => Resource::Font(Rc::new(self.read_font(true)?)),
                TAG_DATA => Resource::Data(self.input.read_blob()?),
                TAG_L10N => Resource::L10n(self.read_l10n()?),
                other => {
                    return Err(ResourceError::corrupt(
                        record_start,
                        CorruptKind::UnknownTag(other),
                    ))
                }
            };
            log::debug!("decoded {} {name:?}", resource.kind());
            if self.table.insert(name.clone(), resource).is_some() {
                log::warn!("duplicate resource {name:?}, keeping the later record");
            }
        }
        if !self.input.is_at_end() {
            log::warn!(
                "{} trailing bytes after the last resource record",
                self.input.remaining()
            );
        }
        Ok(self.table)
    }

    fn read_header(&mut self) -> Result<()> {
        let _size = self.input.read_i16()?;
        let major = self.input.read_i16()?;
        let minor = self.input.read_i16()?;
        let count = self.input.read_count()?;
        let metadata = (0..count)
            .map(|_| self.input.read_utf())
            .collect::<Result<Vec<_>>>()?;
        log::debug!("resource format {major}.{minor}");
        self.table.set_version(FormatVersion::new(major, minor));
        self.table.set_metadata(metadata);
        Ok(())
    }

    fn read_color(&mut self) -> Result<Color> {
        Ok(Color::from_bits(self.input.read_i32()?))
    }

    fn read_image(&mut self) -> Result<Image> {
        if self.version().is_legacy() {
            return Ok(Image::Encoded(EncodedImage::sniffed(self.input.read_blob()?)));
        }
        let start = self.input.position();
        match self.input.read_u8()? {
            IMAGE_PNG => Ok(Image::Encoded(EncodedImage::new(
                EncodedFormat::Png,
                self.input.read_blob()?,
            ))),
            IMAGE_JPEG => Ok(Image::Encoded(EncodedImage::new(
                EncodedFormat::Jpeg,
                self.input.read_blob()?,
            ))),
            IMAGE_INDEXED => Ok(Image::Indexed(self.read_indexed()?)),
            IMAGE_ANIMATION => Ok(Image::Animation(self.read_animation()?)),
            IMAGE_VECTOR => self.read_vector(),
            other => Err(ResourceError::corrupt(
                start,
                CorruptKind::UnknownImageType(other),
            )),
        }
    }

    fn read_indexed(&mut self) -> Result<IndexedImage> {
        let palette_size = match self.input.read_u8()? {
            // A full 256 entry palette overflows the byte.
            0 => 256,
            size => usize::from(size),
        };
        let palette = (0..palette_size)
            .map(|_| self.read_color())
            .collect::<Result<Vec<_>>>()?;
        let width = self.input.read_count()?;
        let height = self.input.read_count()?;
        let pixels = self.input.read_bytes(width * height)?.to_vec();
        Ok(IndexedImage {
            width: width as u16,
            height: height as u16,
            palette,
            pixels,
        })
    }

    fn read_animation(&mut self) -> Result<Animation> {
        let width = self.input.read_count()? as u16;
        let height = self.input.read_count()? as u16;
        let looping = self.input.read_bool()?;
        let frame_count = self.input.read_small_count()?;
        let mut frames = Vec::with_capacity(frame_count);
        for _ in 0..frame_count {
            let delay_ms = self.input.read_len()? as u32;
            let image = self.read_indexed()?;
            frames.push(AnimationFrame { delay_ms, image });
        }
        Ok(Animation {
            width,
            height,
            looping,
            frames,
        })
    }

    fn read_vector(&mut self) -> Result<Image> {
        let data = self.input.read_blob()?;
        let base_url = self.input.read_utf()?;
        let animated = self.input.read_bool()?;
        let ratio_width = self.input.read_f32()?;
        let ratio_height = self.input.read_f32()?;
        let fallback = self.input.read_blob()?;
        let fallback = (!fallback.is_empty()).then(|| EncodedImage::sniffed(fallback));

        if !self.options.keep_vector_graphics {
            if let Some(raster) = fallback {
                return Ok(Image::Encoded(raster));
            }
            log::warn!("vector image without a fallback raster kept as vector");
        }
        Ok(Image::Vector(VectorImage {
            data,
            base_url,
            animated,
            ratio_width,
            ratio_height,
            fallback,
        }))
    }

    fn read_font(&mut self, packed_bitmap: bool) -> Result<Font> {
        if self.version().is_legacy() {
            let image = if packed_bitmap {
                Image::Indexed(self.read_indexed()?)
            } else {
                self.read_image()?
            };
            let count = self.input.read_count()?;
            let mut cut_offsets = Vec::with_capacity(count);
            let mut widths = Vec::with_capacity(count);
            for _ in 0..count {
                cut_offsets.push(self.input.read_i16()?);
                widths.push(self.input.read_i8()?);
            }
            let charset = self.input.read_utf()?;
            return Ok(Font::bitmap(BitmapFont {
                image,
                cut_offsets,
                widths,
                charset,
                rendering_hint: None,
            }));
        }

        let fallback = SystemFont::from_packed(self.input.read_u8()?);
        let truetype = if self.input.read_bool()? {
            let data = self.input.read_blob()?;
            self.options.keep_truetype.then_some(data)
        } else {
            None
        };
        let lookup = if self.input.read_bool()? {
            Some(self.input.read_utf()?)
        } else {
            None
        };
        let bitmap = if self.input.read_bool()? {
            Some(self.read_bitmap_font()?)
        } else {
            None
        };
        Ok(Font {
            fallback,
            truetype,
            lookup,
            bitmap,
        })
    }

    fn read_bitmap_font(&mut self) -> Result<BitmapFont> {
        let image = self.read_image()?;
        let count = self.input.read_count()?;
        let cut_offsets = (0..count)
            .map(|_| self.input.read_i16())
            .collect::<Result<Vec<_>>>()?;
        let widths = (0..count)
            .map(|_| self.input.read_i8())
            .collect::<Result<Vec<_>>>()?;
        let charset = self.input.read_utf()?;
        let rendering_hint = Some(self.input.read_i8()?);
        Ok(BitmapFont {
            image,
            cut_offsets,
            widths,
            charset,
            rendering_hint,
        })
    }

    fn read_l10n(&mut self) -> Result<L10n> {
        let key_count = self.input.read_count()?;
        let language_count = self.input.read_count()?;
        let keys = (0..key_count)
            .map(|_| self.input.read_utf())
            .collect::<Result<Vec<_>>>()?;
        let mut l10n = L10n::new(keys);
        for _ in 0..language_count {
            let language = self.input.read_utf()?;
            let values = (0..key_count)
                .map(|_| self.input.read_utf())
                .collect::<Result<Vec<_>>>()?;
            l10n.insert_language(language, values);
        }
        Ok(l10n)
    }

    fn image_ref(&self, name: String) -> Ref<Image> {
        match self.table.image(&name) {
            Some(image) => Ref::Resolved {
                value: Rc::clone(image),
                name,
            },
            None => Ref::Pending(name),
        }
    }

    fn font_ref(&self, name: String) -> Ref<Font> {
        match self.table.font(&name) {
            Some(font) => Ref::Resolved {
                value: Rc::clone(font),
                name,
            },
            None => Ref::Pending(name),
        }
    }

    /// `newer` is set for the current theme tag, which in version 0.0
    /// streams also carries pressed and focused borders.
    fn read_theme(&mut self, name: &str, newer: bool) -> Result<Theme> {
        let mut theme = Theme::new(name);
        let count = self.input.read_count()?;
        for _ in 0..count {
            let key_start = self.input.position();
            let key = self.input.read_utf()?;
            log::trace!("theme {name:?} entry {key:?}");
            self.read_theme_entry(&mut theme, key, key_start, newer)?;
        }
        Ok(theme)
    }

    fn read_theme_entry(
        &mut self,
        theme: &mut Theme,
        key: String,
        key_start: usize,
        newer: bool,
    ) -> Result<()> {
        let Some(shape) = KeyShape::of(&key) else {
            return Err(ResourceError::corrupt(
                key_start,
                CorruptKind::UnknownThemeKey(key),
            ));
        };
        let value = match shape {
            KeyShape::Color => ThemeValue::Color(self.read_color()?),
            KeyShape::Transparency => ThemeValue::Transparency(self.input.read_u8()?),
            KeyShape::Insets => {
                let bytes = self.input.read_bytes(4)?;
                ThemeValue::Insets([bytes[0], bytes[1], bytes[2], bytes[3]])
            }
            KeyShape::Border => return self.read_theme_border(theme, key, newer),
            KeyShape::Font => {
                if self.input.read_bool()? {
                    let name = self.input.read_utf()?;
                    ThemeValue::Font(ThemeFont::Named(self.font_ref(name)))
                } else {
                    let face = self.input.read_u8()?;
                    let style = self.input.read_u8()?;
                    let size = self.input.read_u8()?;
                    ThemeValue::Font(ThemeFont::System(SystemFont::from_parts(face, style, size)))
                }
            }
            KeyShape::Background => return self.read_background(theme, &key),
            KeyShape::Image => {
                let name = self.input.read_utf()?;
                ThemeValue::Image(self.image_ref(name))
            }
            KeyShape::ScaledImage => ThemeValue::ScaledImage(self.input.read_bool()?),
            KeyShape::BackgroundType => ThemeValue::BackgroundType(self.input.read_u8()?),
            KeyShape::BackgroundAlignment => {
                ThemeValue::BackgroundAlignment(self.input.read_u8()?)
            }
            KeyShape::BackgroundGradient => {
                let start = self.read_color()?;
                let end = self.read_color()?;
                let x = self.input.read_f32()?;
                let y = self.input.read_f32()?;
                let size = self.read_gradient_size()?;
                ThemeValue::BackgroundGradient(Gradient {
                    start,
                    end,
                    x,
                    y,
                    size,
                })
            }
        };
        theme.insert(key, value);
        Ok(())
    }

    fn read_gradient_size(&mut self) -> Result<f32> {
        if self.version().has_gradient_size() {
            self.input.read_f32()
        } else {
            Ok(1.0)
        }
    }

    /// Expands a packed background entry into separate `bgType`, `bgImage`,
    /// `bgAlign` and `bgGradient` entries under the key's selector.
    fn read_background(&mut self, theme: &mut Theme, key: &str) -> Result<()> {
        let kind = self.input.read_u8()?;
        let prefix = key.find('.').map_or("", |dot| &key[..=dot]);
        theme.insert(format!("{prefix}bgType"), ThemeValue::BackgroundType(kind));
        match kind {
            BG_SCALED_IMAGE | BG_TILE_BOTH => {
                let name = self.input.read_utf()?;
                theme.insert(format!("{prefix}bgImage"), ThemeValue::Image(self.image_ref(name)));
            }
            BG_ALIGNED_IMAGE | BG_TILE_VERTICAL | BG_TILE_HORIZONTAL => {
                let name = self.input.read_utf()?;
                theme.insert(format!("{prefix}bgImage"), ThemeValue::Image(self.image_ref(name)));
                let align = self.input.read_u8()?;
                theme.insert(
                    format!("{prefix}bgAlign"),
                    ThemeValue::BackgroundAlignment(align),
                );
            }
            BG_GRADIENT_HORIZONTAL | BG_GRADIENT_VERTICAL => {
                let start = self.read_color()?;
                let end = self.read_color()?;
                theme.insert(
                    format!("{prefix}bgGradient"),
                    ThemeValue::BackgroundGradient(Gradient::linear(start, end)),
                );
            }
            BG_GRADIENT_RADIAL => {
                let start = self.read_color()?;
                let end = self.read_color()?;
                let x = self.input.read_f32()?;
                let y = self.input.read_f32()?;
                let size = self.read_gradient_size()?;
                theme.insert(
                    format!("{prefix}bgGradient"),
                    ThemeValue::BackgroundGradient(Gradient {
                        start,
                        end,
                        x,
                        y,
                        size,
                    }),
                );
            }
            // Plain colour backgrounds carry nothing beyond the type.
            _ => {}
        }
        Ok(())
    }

    fn read_theme_border(&mut self, theme: &mut Theme, key: String, newer: bool) -> Result<()> {
        if !self.version().is_legacy() {
            let code = self.input.read_u16()?;
            let border = self.read_border(code)?;
            theme.insert(key, ThemeValue::Border(border.into()));
            return Ok(());
        }

        let border = self.read_legacy_border(newer)?;
        let mut states = [None, None];
        if newer {
            for state in &mut states {
                if self.input.read_bool()? {
                    *state = Some(self.read_legacy_border(true)?);
                }
            }
        }
        let [pressed, focused] = states;
        if let Some(pressed) = pressed {
            theme.insert(format!("{key}Pressed"), ThemeValue::Border(pressed.into()));
        }
        if let Some(focused) = focused {
            theme.insert(format!("{key}Focused"), ThemeValue::Border(focused.into()));
        }
        theme.insert(key, ThemeValue::Border(ThemeBorder::from(border)));
        Ok(())
    }

    fn read_legacy_border(&mut self, newer: bool) -> Result<Border> {
        let start = self.input.position();
        let code = match self.input.read_i8()? {
            LEGACY_BORDER_EMPTY => BORDER_EMPTY,
            LEGACY_BORDER_LINE => BORDER_LINE,
            LEGACY_BORDER_ROUNDED => BORDER_ROUNDED,
            LEGACY_BORDER_ETCHED_LOWERED => BORDER_ETCHED_LOWERED,
            LEGACY_BORDER_ETCHED_RAISED => BORDER_ETCHED_RAISED,
            LEGACY_BORDER_BEVEL_RAISED => BORDER_BEVEL_RAISED,
            LEGACY_BORDER_BEVEL_LOWERED => BORDER_BEVEL_LOWERED,
            LEGACY_BORDER_IMAGE => BORDER_IMAGE,
            other => {
                return Err(ResourceError::corrupt(
                    start,
                    CorruptKind::UnknownBorderType(u16::from(other as u8)),
                ))
            }
        };
        let border = self.read_border_payload(code, start)?;
        if code == BORDER_IMAGE && !newer {
            // Old image borders end with a flag that is no longer used.
            self.input.read_bool()?;
        }
        Ok(border)
    }

    fn read_border(&mut self, code: u16) -> Result<Border> {
        let start = self.input.position().saturating_sub(2);
        self.read_border_payload(code, start)
    }

    fn read_border_payload(&mut self, code: u16, start: usize) -> Result<Border> {
        let border = match code {
            BORDER_EMPTY => Border::Empty,
            BORDER_LINE => {
                let theme_colors = self.input.read_bool()?;
                let thickness = self.input.read_i8()?;
                let color = self.read_optional_color(theme_colors)?;
                Border::Line { thickness, color }
            }
            BORDER_ROUNDED => {
                let theme_colors = self.input.read_bool()?;
                let arc_width = self.input.read_i8()?;
                let arc_height = self.input.read_i8()?;
                let color = self.read_optional_color(theme_colors)?;
                Border::Rounded {
                    arc_width,
                    arc_height,
                    color,
                }
            }
            BORDER_ETCHED_LOWERED | BORDER_ETCHED_RAISED => {
                let colors = if self.input.read_bool()? {
                    None
                } else {
                    Some([self.read_color()?, self.read_color()?])
                };
                Border::Etched {
                    raised: code == BORDER_ETCHED_RAISED,
                    colors,
                }
            }
            BORDER_BEVEL_LOWERED | BORDER_BEVEL_RAISED => {
                let colors = if self.input.read_bool()? {
                    None
                } else {
                    Some([
                        self.read_color()?,
                        self.read_color()?,
                        self.read_color()?,
                        self.read_color()?,
                    ])
                };
                Border::Bevel {
                    raised: code == BORDER_BEVEL_RAISED,
                    colors,
                }
            }
            BORDER_IMAGE => Border::Image(self.read_image_border()?),
            other => {
                return Err(ResourceError::corrupt(
                    start,
                    CorruptKind::UnknownBorderType(other),
                ))
            }
        };
        Ok(border)
    }

    fn read_optional_color(&mut self, theme_colors: bool) -> Result<Option<Color>> {
        if theme_colors {
            Ok(None)
        } else {
            self.read_color().map(Some)
        }
    }

    fn read_image_border(&mut self) -> Result<ImageBorder> {
        let start = self.input.position();
        let count = self.input.read_i8()?;
        let valid = usize::try_from(count)
            .ok()
            .filter(|count| ImageBorder::VALID_COUNTS.contains(count));
        let Some(count) = valid else {
            return Err(ResourceError::corrupt(
                start,
                CorruptKind::ImageBorderCount(count),
            ));
        };
        let images = (0..count)
            .map(|_| {
                let name = self.input.read_utf()?;
                Ok(self.image_ref(name))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(ImageBorder { images })
    }
}

#[cfg(test)]
#[path = "tests/decoder_tests.rs"]
mod tests;
