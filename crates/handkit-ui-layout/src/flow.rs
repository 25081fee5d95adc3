//! Flow layout: children in reading order, wrapping onto new rows

use handkit_ui_graphics::{Rect, Size};

use crate::{Component, HorizontalAlignment, Layout, LayoutParent, VerticalAlignment};

/// Places children left to right (right to left when mirrored) and starts a
/// new row when the next child would overflow the content width.
///
/// Each finished row is shifted by `alignment` and every child is aligned
/// within the row height by `row_alignment`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlowLayout {
    pub alignment: HorizontalAlignment,
    pub row_alignment: VerticalAlignment,
}

impl FlowLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alignment(alignment: HorizontalAlignment) -> Self {
        Self {
            alignment,
            ..Self::default()
        }
    }

    fn finish_row(
        &self,
        parent: &LayoutParent,
        row: &mut [Component],
        used: i32,
        y: i32,
        row_height: i32,
    ) {
        let shift = self.alignment.align(parent.content_width(), used);
        for child in row.iter_mut() {
            let margin = child.directional_margin(parent.rtl);
            let mut bounds = child.bounds();
            let outer_height = bounds.height + margin.vertical_sum();
            bounds.x += shift;
            bounds.y = y + margin.top + self.row_alignment.align(row_height, outer_height);
            bounds.x = parent.mirror_x(bounds.x, bounds.width);
            child.set_bounds(bounds);
        }
    }
}

impl Layout for FlowLayout {
    fn layout_container(&self, parent: &LayoutParent, children: &mut [Component]) {
        let padding = parent.directional_padding();
        let content_width = parent.content_width();
        let max_height = parent.content_height();

        let mut cursor = 0;
        let mut y = padding.top;
        let mut row_height = 0;
        let mut row_start = 0;

        for index in 0..children.len() {
            let child = &children[index];
            let margin = child.directional_margin(parent.rtl);
            let preferred = child.preferred_size();
            let width = preferred
                .width
                .min(content_width - margin.horizontal_sum())
                .max(0);
            let height = preferred
                .height
                .min(max_height - margin.vertical_sum())
                .max(0);
            let outer_width = width + margin.horizontal_sum();

            if cursor > 0 && cursor + outer_width > content_width {
                self.finish_row(parent, &mut children[row_start..index], cursor, y, row_height);
                y += row_height;
                cursor = 0;
                row_height = 0;
                row_start = index;
            }

            children[index].set_bounds(Rect::new(
                padding.left + cursor + margin.left,
                y,
                width,
                height,
            ));
            cursor += outer_width;
            row_height = row_height.max(height + margin.vertical_sum());
        }

        let end = children.len();
        self.finish_row(parent, &mut children[row_start..end], cursor, y, row_height);
    }

    fn preferred_size(&self, parent: &LayoutParent, children: &[Component]) -> Size {
        let (width, height) = children.iter().fold((0, 0), |(width, height), child| {
            let outer = child.outer_preferred_size();
            (width + outer.width, height.max(outer.height))
        });
        Size::new(width, height).inflate(parent.padding)
    }

    fn name(&self) -> &'static str {
        "flow"
    }
}

#[cfg(test)]
#[path = "tests/flow_tests.rs"]
mod tests;
