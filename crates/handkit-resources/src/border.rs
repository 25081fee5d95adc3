use handkit_ui_graphics::Color;

use crate::{Image, Ref};

/// A component border as stored in a theme. `None` colours mean "use the
/// theme's colours".
#[derive(Debug, Clone, PartialEq)]
pub enum Border {
    Empty,
    Line {
        thickness: i8,
        color: Option<Color>,
    },
    Rounded {
        arc_width: i8,
        arc_height: i8,
        color: Option<Color>,
    },
    Etched {
        raised: bool,
        colors: Option<[Color; 2]>,
    },
    Bevel {
        raised: bool,
        colors: Option<[Color; 4]>,
    },
    Image(ImageBorder),
}

/// Border painted from 2, 3, 8 or 9 images.
///
/// With 2 or 3 images the first is the top edge, the second a corner and
/// the optional third the fill; 8 or 9 list every edge and corner clockwise
/// from the top, plus the optional fill.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBorder {
    pub images: Vec<Ref<Image>>,
}

impl ImageBorder {
    pub const VALID_COUNTS: [usize; 4] = [2, 3, 8, 9];

    pub fn has_center(&self) -> bool {
        matches!(self.images.len(), 3 | 9)
    }
}

impl Border {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Border::Empty => "empty",
            Border::Line { .. } => "line",
            Border::Rounded { .. } => "rounded",
            Border::Etched { raised: false, .. } => "etchedLowered",
            Border::Etched { raised: true, .. } => "etchedRaised",
            Border::Bevel { raised: false, .. } => "bevelLowered",
            Border::Bevel { raised: true, .. } => "bevelRaised",
            Border::Image(_) => "image",
        }
    }

    pub(crate) fn image_refs_mut(&mut self) -> impl Iterator<Item = &mut Ref<Image>> {
        let images = match self {
            Border::Image(border) => border.images.as_mut_slice(),
            _ => &mut [],
        };
        images.iter_mut()
    }
}

/// A theme border with the pressed and focused variants that version 0.0
/// streams store next to it.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeBorder {
    pub border: Border,
    pub pressed: Option<Border>,
    pub focused: Option<Border>,
}

impl From<Border> for ThemeBorder {
    fn from(border: Border) -> Self {
        Self {
            border,
            pressed: None,
            focused: None,
        }
    }
}

impl ThemeBorder {
    pub(crate) fn image_refs_mut(&mut self) -> impl Iterator<Item = &mut Ref<Image>> {
        let pressed = self.pressed.as_mut().into_iter();
        let focused = self.focused.as_mut().into_iter();
        std::iter::once(&mut self.border)
            .chain(pressed)
            .chain(focused)
            .flat_map(Border::image_refs_mut)
    }
}
