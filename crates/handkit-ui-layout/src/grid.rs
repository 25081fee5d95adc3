//! Grid layout: equal cells filled in reading order

use handkit_ui_graphics::{Rect, Size};

use crate::{Component, Layout, LayoutParent};

/// Splits the content box into `rows x columns` equal cells and fills them
/// row by row. Extra children add rows; the column count never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    rows: usize,
    columns: usize,
}

impl GridLayout {
    /// A grid with at least one row and one column.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows: rows.max(1),
            columns: columns.max(1),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Rows actually used for `count` children.
    pub fn effective_rows(&self, count: usize) -> usize {
        self.rows.max(count.div_ceil(self.columns))
    }
}

impl Layout for GridLayout {
    fn layout_container(&self, parent: &LayoutParent, children: &mut [Component]) {
        let padding = parent.directional_padding();
        let rows = self.effective_rows(children.len());
        let cell_width = parent.content_width() / self.columns as i32;
        let cell_height = parent.content_height() / rows as i32;

        for (index, child) in children.iter_mut().enumerate() {
            let row = (index / self.columns) as i32;
            let column = (index % self.columns) as i32;
            let margin = child.directional_margin(parent.rtl);
            let width = cell_width - margin.horizontal_sum();
            let x = padding.left + column * cell_width + margin.left;
            child.set_bounds(Rect::new(
                parent.mirror_x(x, width),
                padding.top + row * cell_height + margin.top,
                width,
                cell_height - margin.vertical_sum(),
            ));
        }
    }

    fn preferred_size(&self, parent: &LayoutParent, children: &[Component]) -> Size {
        let cell = children
            .iter()
            .map(Component::outer_preferred_size)
            .fold(Size::ZERO, Size::max);
        let rows = self.effective_rows(children.len()) as i32;
        Size::new(cell.width * self.columns as i32, cell.height * rows).inflate(parent.padding)
    }

    fn name(&self) -> &'static str {
        "grid"
    }
}

#[cfg(test)]
#[path = "tests/grid_tests.rs"]
mod tests;
