//! The layout capability set and the closed set of layout managers

use handkit_ui_graphics::{EdgeInsets, Size};

use crate::{
    BorderLayout, BorderPosition, Component, ComponentId, FlowLayout, GridLayout, LayoutError,
    TableConstraint, TableLayout,
};

/// Per-child placement metadata. Which variants a layout accepts depends on
/// the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutConstraint {
    #[default]
    None,
    Border(BorderPosition),
    Table(TableConstraint),
}

impl From<BorderPosition> for LayoutConstraint {
    fn from(position: BorderPosition) -> Self {
        LayoutConstraint::Border(position)
    }
}

impl From<TableConstraint> for LayoutConstraint {
    fn from(constraint: TableConstraint) -> Self {
        LayoutConstraint::Table(constraint)
    }
}

/// What a layout may know about the container it arranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutParent {
    /// Width to lay out into; grows to the preferred width on scrollable axes.
    pub width: i32,
    pub height: i32,
    pub padding: EdgeInsets,
    pub rtl: bool,
    pub scrollable_x: bool,
    pub scrollable_y: bool,
}

impl LayoutParent {
    /// Padding in reading order: leading first.
    pub fn directional_padding(&self) -> EdgeInsets {
        if self.rtl {
            self.padding.mirrored()
        } else {
            self.padding
        }
    }

    pub fn content_width(&self) -> i32 {
        self.width - self.padding.horizontal_sum()
    }

    pub fn content_height(&self) -> i32 {
        self.height - self.padding.vertical_sum()
    }

    /// Maps a box computed in reading order onto physical coordinates.
    pub fn mirror_x(&self, x: i32, width: i32) -> i32 {
        if self.rtl {
            self.width - x - width
        } else {
            x
        }
    }
}

/// Capability set shared by every layout manager.
pub trait Layout {
    /// Writes the bounds of every child. Pure with respect to the parent.
    fn layout_container(&self, parent: &LayoutParent, children: &mut [Component]);

    /// Size the parent would like to have, padding included.
    fn preferred_size(&self, parent: &LayoutParent, children: &[Component]) -> Size;

    /// Records the constraint for a newly added child.
    fn add_constraint(
        &mut self,
        _child: ComponentId,
        constraint: LayoutConstraint,
    ) -> Result<(), LayoutError> {
        match constraint {
            LayoutConstraint::None => Ok(()),
            other => Err(LayoutError::ConstraintMismatch {
                layout: self.name(),
                constraint: other,
            }),
        }
    }

    /// Forgets a removed child. Unknown children are ignored.
    fn remove_constraint(&mut self, _child: ComponentId) {}

    fn constraint_of(&self, _child: ComponentId) -> Option<LayoutConstraint> {
        None
    }

    fn name(&self) -> &'static str;
}

/// The layout chosen when a container is built. A container never changes
/// its layout behind the caller's back.
#[derive(Debug, Clone)]
pub enum LayoutKind {
    Flow(FlowLayout),
    Border(BorderLayout),
    Grid(GridLayout),
    Table(TableLayout),
}

impl LayoutKind {
    pub fn as_layout(&self) -> &dyn Layout {
        match self {
            LayoutKind::Flow(layout) => layout,
            LayoutKind::Border(layout) => layout,
            LayoutKind::Grid(layout) => layout,
            LayoutKind::Table(layout) => layout,
        }
    }

    pub fn as_layout_mut(&mut self) -> &mut dyn Layout {
        match self {
            LayoutKind::Flow(layout) => layout,
            LayoutKind::Border(layout) => layout,
            LayoutKind::Grid(layout) => layout,
            LayoutKind::Table(layout) => layout,
        }
    }

    pub fn as_table(&self) -> Option<&TableLayout> {
        match self {
            LayoutKind::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn as_table_mut(&mut self) -> Option<&mut TableLayout> {
        match self {
            LayoutKind::Table(table) => Some(table),
            _ => None,
        }
    }
}

impl From<FlowLayout> for LayoutKind {
    fn from(layout: FlowLayout) -> Self {
        LayoutKind::Flow(layout)
    }
}

impl From<BorderLayout> for LayoutKind {
    fn from(layout: BorderLayout) -> Self {
        LayoutKind::Border(layout)
    }
}

impl From<GridLayout> for LayoutKind {
    fn from(layout: GridLayout) -> Self {
        LayoutKind::Grid(layout)
    }
}

impl From<TableLayout> for LayoutKind {
    fn from(layout: TableLayout) -> Self {
        LayoutKind::Table(layout)
    }
}
