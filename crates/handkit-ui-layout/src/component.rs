//! Layout participants: leaves with a fixed preferred size, or nested containers

use std::fmt;

use handkit_ui_graphics::{EdgeInsets, Rect, Size};

use crate::Container;

/// Stable identity of a component within its parent container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(pub u32);

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub enum ComponentContent {
    /// A widget measured elsewhere; only its preferred size matters here.
    Leaf { preferred: Size },
    /// A child container whose preferred size comes from its own layout.
    Container(Box<Container>),
}

/// A child box inside a [`Container`].
///
/// Bounds are relative to the parent's origin and are written only by the
/// parent's layout pass.
#[derive(Debug, Clone)]
pub struct Component {
    id: ComponentId,
    margin: EdgeInsets,
    bounds: Rect,
    content: ComponentContent,
}

impl Component {
    pub fn leaf(id: ComponentId, preferred: Size) -> Self {
        Self {
            id,
            margin: EdgeInsets::ZERO,
            bounds: Rect::default(),
            content: ComponentContent::Leaf { preferred },
        }
    }

    pub fn container(id: ComponentId, container: Container) -> Self {
        Self {
            id,
            margin: EdgeInsets::ZERO,
            bounds: Rect::default(),
            content: ComponentContent::Container(Box::new(container)),
        }
    }

    pub fn with_margin(mut self, margin: EdgeInsets) -> Self {
        self.margin = margin;
        self
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn margin(&self) -> EdgeInsets {
        self.margin
    }

    /// Margins in reading order: left and right swap in right-to-left parents.
    pub fn directional_margin(&self, rtl: bool) -> EdgeInsets {
        if rtl {
            self.margin.mirrored()
        } else {
            self.margin
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn content(&self) -> &ComponentContent {
        &self.content
    }

    pub fn preferred_size(&self) -> Size {
        match &self.content {
            ComponentContent::Leaf { preferred } => *preferred,
            ComponentContent::Container(container) => container.preferred_size(),
        }
    }

    /// Preferred size including margins.
    pub fn outer_preferred_size(&self) -> Size {
        self.preferred_size().inflate(self.margin)
    }

    /// Replaces the preferred size of a leaf. Nested containers ignore this;
    /// their size follows their children.
    pub fn set_preferred_size(&mut self, size: Size) {
        if let ComponentContent::Leaf { preferred } = &mut self.content {
            *preferred = size;
        }
    }

    pub fn as_container(&self) -> Option<&Container> {
        match &self.content {
            ComponentContent::Container(container) => Some(container),
            ComponentContent::Leaf { .. } => None,
        }
    }

    pub fn as_container_mut(&mut self) -> Option<&mut Container> {
        match &mut self.content {
            ComponentContent::Container(container) => Some(container),
            ComponentContent::Leaf { .. } => None,
        }
    }
}
