use std::fmt;
use std::rc::Rc;

use handkit_ui_graphics::Color;
use indexmap::IndexMap;

use crate::{Font, Image, SystemFont, ThemeBorder};

/// A named reference from a theme to another resource in the bundle.
#[derive(Debug, Clone)]
pub enum Ref<T> {
    Resolved { name: String, value: Rc<T> },
    /// The resource had not been read yet when the theme was decoded.
    Pending(String),
}

impl<T> Ref<T> {
    pub fn name(&self) -> &str {
        match self {
            Ref::Resolved { name, .. } | Ref::Pending(name) => name,
        }
    }

    pub fn get(&self) -> Option<&Rc<T>> {
        match self {
            Ref::Resolved { value, .. } => Some(value),
            Ref::Pending(_) => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Ref::Resolved { .. })
    }
}

impl<T: PartialEq> PartialEq for Ref<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Ref::Resolved { name, value },
                Ref::Resolved {
                    name: other_name,
                    value: other_value,
                },
            ) => name == other_name && (Rc::ptr_eq(value, other_value) || value == other_value),
            (Ref::Pending(name), Ref::Pending(other)) => name == other,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ThemeFont {
    System(SystemFont),
    Named(Ref<Font>),
}

/// Two-colour gradient. `x`/`y` locate the centre of radial gradients as a
/// fraction of the component; `size` scales the radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    pub start: Color,
    pub end: Color,
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

impl Gradient {
    pub fn linear(start: Color, end: Color) -> Self {
        Self {
            start,
            end,
            x: 0.5,
            y: 0.5,
            size: 1.0,
        }
    }
}

/// Payload shape implied by a theme key's suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyShape {
    Color,
    Transparency,
    Insets,
    Border,
    Font,
    /// Packed background; expands into several entries on decode.
    Background,
    Image,
    ScaledImage,
    BackgroundType,
    BackgroundAlignment,
    BackgroundGradient,
}

impl KeyShape {
    /// Suffixes are tested in this order, so `"bgColor"` is a colour even
    /// though the key also names a background.
    pub(crate) fn of(key: &str) -> Option<KeyShape> {
        const SUFFIXES: [(&str, KeyShape); 12] = [
            ("Color", KeyShape::Color),
            ("ransparency", KeyShape::Transparency),
            ("adding", KeyShape::Insets),
            ("argin", KeyShape::Insets),
            ("order", KeyShape::Border),
            ("ont", KeyShape::Font),
            ("ackground", KeyShape::Background),
            ("bgImage", KeyShape::Image),
            ("scaledImage", KeyShape::ScaledImage),
            ("bgType", KeyShape::BackgroundType),
            ("bgAlign", KeyShape::BackgroundAlignment),
            ("bgGradient", KeyShape::BackgroundGradient),
        ];
        SUFFIXES
            .iter()
            .find(|(suffix, _)| key.ends_with(suffix))
            .map(|&(_, shape)| shape)
    }
}

/// One theme property. The payload shape is chosen by the key's suffix.
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeValue {
    Color(Color),
    Transparency(u8),
    /// Padding or margin: four byte values in stream order.
    Insets([u8; 4]),
    Border(ThemeBorder),
    Font(ThemeFont),
    BackgroundType(u8),
    BackgroundAlignment(u8),
    BackgroundGradient(Gradient),
    Image(Ref<Image>),
    ScaledImage(bool),
}

impl ThemeValue {
    pub(crate) fn shape(&self) -> KeyShape {
        match self {
            ThemeValue::Color(_) => KeyShape::Color,
            ThemeValue::Transparency(_) => KeyShape::Transparency,
            ThemeValue::Insets(_) => KeyShape::Insets,
            ThemeValue::Border(_) => KeyShape::Border,
            ThemeValue::Font(_) => KeyShape::Font,
            ThemeValue::BackgroundType(_) => KeyShape::BackgroundType,
            ThemeValue::BackgroundAlignment(_) => KeyShape::BackgroundAlignment,
            ThemeValue::BackgroundGradient(_) => KeyShape::BackgroundGradient,
            ThemeValue::Image(_) => KeyShape::Image,
            ThemeValue::ScaledImage(_) => KeyShape::ScaledImage,
        }
    }
}

impl fmt::Display for ThemeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeValue::Color(color) => write!(f, "{color}"),
            ThemeValue::Transparency(value)
            | ThemeValue::BackgroundType(value)
            | ThemeValue::BackgroundAlignment(value) => write!(f, "{value}"),
            ThemeValue::Insets([a, b, c, d]) => write!(f, "{a},{b},{c},{d}"),
            ThemeValue::Border(border) => f.write_str(border.border.kind_name()),
            ThemeValue::Font(ThemeFont::Named(font)) => f.write_str(font.name()),
            ThemeValue::Font(ThemeFont::System(font)) => write!(
                f,
                "system({:?},{},{:?})",
                font.face,
                font.style.bits(),
                font.size
            ),
            ThemeValue::BackgroundGradient(gradient) => write!(
                f,
                "{},{},{},{},{}",
                gradient.start, gradient.end, gradient.x, gradient.y, gradient.size
            ),
            ThemeValue::Image(image) => f.write_str(image.name()),
            ThemeValue::ScaledImage(scaled) => write!(f, "{scaled}"),
        }
    }
}

/// A named set of style properties, keyed like `"Button.sel#fgColor"`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Theme {
    name: String,
    entries: IndexMap<String, ThemeValue>,
}

impl Theme {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn insert(&mut self, key: impl Into<String>, value: ThemeValue) -> Option<ThemeValue> {
        self.entries.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&ThemeValue> {
        self.entries.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<ThemeValue> {
        self.entries.shift_remove(key)
    }

    pub fn color(&self, key: &str) -> Option<Color> {
        match self.entries.get(key)? {
            ThemeValue::Color(color) => Some(*color),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &ThemeValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub(crate) fn entries_mut(&mut self) -> impl Iterator<Item = (&str, &mut ThemeValue)> {
        self.entries
            .iter_mut()
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Properties of one component selector with the selector stripped:
    /// `attributes_of("bg")` yields `"bg.fgColor"` as `"fgColor"`.
    pub fn attributes_of<'a>(
        &'a self,
        selector: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a ThemeValue)> + 'a {
        self.entries.iter().filter_map(move |(key, value)| {
            let attribute = key.strip_prefix(selector)?.strip_prefix('.')?;
            Some((attribute, value))
        })
    }

    /// Names of images and fonts not yet resolved, with the key naming them.
    pub fn pending_references(&self) -> Vec<(&str, &str)> {
        let mut pending = Vec::new();
        for (key, value) in &self.entries {
            match value {
                ThemeValue::Image(Ref::Pending(name))
                | ThemeValue::Font(ThemeFont::Named(Ref::Pending(name))) => {
                    pending.push((key.as_str(), name.as_str()));
                }
                ThemeValue::Border(border) => {
                    let borders = [
                        Some(&border.border),
                        border.pressed.as_ref(),
                        border.focused.as_ref(),
                    ];
                    for border in borders.into_iter().flatten() {
                        if let crate::Border::Image(images) = border {
                            pending.extend(
                                images
                                    .images
                                    .iter()
                                    .filter(|image| !image.is_resolved())
                                    .map(|image| (key.as_str(), image.name())),
                            );
                        }
                    }
                }
                _ => {}
            }
        }
        pending
    }

    pub fn is_wired(&self) -> bool {
        self.pending_references().is_empty()
    }
}

#[cfg(test)]
#[path = "tests/theme_tests.rs"]
mod tests;
