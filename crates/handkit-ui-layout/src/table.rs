//! Table layout: a fixed grid of cells with row/column spans and
//! percentage sizing

use handkit_ui_graphics::{Rect, Size};
use rustc_hash::FxHashMap;

use crate::{
    Axis, Component, ComponentId, Layout, LayoutConfig, LayoutConstraint, LayoutError,
    LayoutParent,
};

/// Placement of one child in a [`TableLayout`].
///
/// Unset `row`/`column` take the next free cell in reading order. Percentages
/// are of the parent's content width/height; unset means "natural size".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConstraint {
    pub row: Option<usize>,
    pub column: Option<usize>,
    pub width_percent: Option<u32>,
    pub height_percent: Option<u32>,
    pub span_rows: usize,
    pub span_columns: usize,
}

impl Default for TableConstraint {
    fn default() -> Self {
        Self {
            row: None,
            column: None,
            width_percent: None,
            height_percent: None,
            span_rows: 1,
            span_columns: 1,
        }
    }
}

impl TableConstraint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(row: usize, column: usize) -> Self {
        Self {
            row: Some(row),
            column: Some(column),
            ..Self::default()
        }
    }

    pub fn with_span(mut self, span_rows: usize, span_columns: usize) -> Self {
        self.span_rows = span_rows;
        self.span_columns = span_columns;
        self
    }

    pub fn with_width_percent(mut self, percent: u32) -> Self {
        self.width_percent = Some(percent);
        self
    }

    pub fn with_height_percent(mut self, percent: u32) -> Self {
        self.height_percent = Some(percent);
        self
    }

    fn span(&self, axis: Axis) -> usize {
        match axis {
            Axis::Horizontal => self.span_columns,
            Axis::Vertical => self.span_rows,
        }
    }

    fn percent(&self, axis: Axis) -> Option<u32> {
        match axis {
            Axis::Horizontal => self.width_percent,
            Axis::Vertical => self.height_percent,
        }
        .filter(|percent| *percent > 0)
    }
}

/// Content of one table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableCell {
    Empty,
    /// The top-left cell of a component.
    Primary(ComponentId),
    /// A cell covered by the span of `owner`.
    Span { owner: ComponentId },
}

impl TableCell {
    pub fn owner(&self) -> Option<ComponentId> {
        match self {
            TableCell::Empty => None,
            TableCell::Primary(id) | TableCell::Span { owner: id } => Some(*id),
        }
    }
}

/// Grid of `rows x columns` cells whose sizes follow their contents.
///
/// Column widths are the widest natural (or percentage) width of any
/// single-column cell in that column; spanning cells take the sum of the
/// columns they cover and never widen them. When the parent does not scroll
/// horizontally each column is capped so that every later column can still
/// receive [`LayoutConfig::min_column_width`]. Rows work the same way
/// vertically, without the reservation.
#[derive(Debug, Clone)]
pub struct TableLayout {
    rows: usize,
    columns: usize,
    cells: Vec<TableCell>,
    placements: FxHashMap<ComponentId, TableConstraint>,
    rigid_columns: Vec<bool>,
    cursor: Option<(usize, usize)>,
    config: LayoutConfig,
}

impl TableLayout {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self::with_config(rows, columns, LayoutConfig::default())
    }

    pub fn with_config(rows: usize, columns: usize, config: LayoutConfig) -> Self {
        let cells = vec![TableCell::Empty; rows * columns];
        let cursor = (rows > 0 && columns > 0).then_some((0, 0));
        Self {
            rows,
            columns,
            cells,
            placements: FxHashMap::default(),
            rigid_columns: vec![false; columns],
            cursor,
            config,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// A constraint pre-filled with the configured default percentages.
    pub fn create_constraint(&self) -> TableConstraint {
        TableConstraint {
            width_percent: self.config.default_column_width_percent,
            height_percent: self.config.default_row_height_percent,
            ..TableConstraint::default()
        }
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<TableCell> {
        if row < self.rows && column < self.columns {
            Some(self.cells[row * self.columns + column])
        } else {
            None
        }
    }

    /// The component whose primary cell is `(row, column)`.
    pub fn component_at(&self, row: usize, column: usize) -> Option<ComponentId> {
        match self.cell(row, column)? {
            TableCell::Primary(id) => Some(id),
            _ => None,
        }
    }

    /// The next cell automatic placement would use, if any is left.
    pub fn next_free_cell(&self) -> Option<(usize, usize)> {
        self.cursor
    }

    /// Rigid columns keep their natural width even when the parent cannot
    /// scroll horizontally.
    pub fn set_rigid_column(&mut self, column: usize, rigid: bool) {
        if let Some(slot) = self.rigid_columns.get_mut(column) {
            *slot = rigid;
        }
    }

    pub fn is_rigid_column(&self, column: usize) -> bool {
        self.rigid_columns.get(column).copied().unwrap_or(false)
    }

    fn index(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }

    fn advance_cursor(&mut self) {
        self.cursor = (0..self.cells.len())
            .find(|&index| self.cells[index] == TableCell::Empty)
            .map(|index| (index / self.columns, index % self.columns));
    }

    fn place(
        &mut self,
        child: ComponentId,
        mut constraint: TableConstraint,
    ) -> Result<(), LayoutError> {
        if self.placements.contains_key(&child) {
            return Err(LayoutError::DuplicateComponent(child));
        }
        if constraint.span_rows == 0 || constraint.span_columns == 0 {
            return Err(LayoutError::InvalidSpan {
                span_rows: constraint.span_rows,
                span_columns: constraint.span_columns,
            });
        }

        let (row, column) = match (constraint.row, constraint.column) {
            (Some(row), Some(column)) => (row, column),
            (row, column) => {
                let (cursor_row, cursor_column) = self.cursor.ok_or(LayoutError::TableFull)?;
                (row.unwrap_or(cursor_row), column.unwrap_or(cursor_column))
            }
        };
        if row >= self.rows || column >= self.columns {
            return Err(LayoutError::CellOutOfBounds {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            });
        }
        if row + constraint.span_rows > self.rows || column + constraint.span_columns > self.columns
        {
            return Err(LayoutError::SpanOutOfBounds {
                row,
                column,
                span_rows: constraint.span_rows,
                span_columns: constraint.span_columns,
                rows: self.rows,
                columns: self.columns,
            });
        }

        // Validate the whole region before touching the grid so a failed add
        // leaves no stray span markers behind.
        for r in row..row + constraint.span_rows {
            for c in column..column + constraint.span_columns {
                if self.cells[self.index(r, c)] != TableCell::Empty {
                    return Err(LayoutError::CellOccupied { row: r, column: c });
                }
            }
        }
        for r in row..row + constraint.span_rows {
            for c in column..column + constraint.span_columns {
                let index = self.index(r, c);
                self.cells[index] = if r == row && c == column {
                    TableCell::Primary(child)
                } else {
                    TableCell::Span { owner: child }
                };
            }
        }

        constraint.row = Some(row);
        constraint.column = Some(column);
        self.placements.insert(child, constraint);
        self.advance_cursor();
        log::trace!("table: {child} placed at ({row}, {column})");
        Ok(())
    }

    fn track_count(&self, axis: Axis) -> usize {
        match axis {
            Axis::Horizontal => self.columns,
            Axis::Vertical => self.rows,
        }
    }

    fn cell_on_track(&self, axis: Axis, track: usize, position: usize) -> TableCell {
        match axis {
            Axis::Horizontal => self.cells[self.index(position, track)],
            Axis::Vertical => self.cells[self.index(track, position)],
        }
    }

    /// Size of one column or row: the largest single-track cell, optionally
    /// capped by `ceiling`. `percent_base` of `None` ignores percentages.
    fn track_size(
        &self,
        axis: Axis,
        track: usize,
        percent_base: Option<i32>,
        ceiling: Option<i32>,
        children: &[Component],
        lookup: &FxHashMap<ComponentId, usize>,
    ) -> i32 {
        let mut current = 0;
        for position in 0..self.track_count(axis.cross_axis()) {
            let TableCell::Primary(id) = self.cell_on_track(axis, track, position) else {
                continue;
            };
            let Some(constraint) = self.placements.get(&id) else {
                continue;
            };
            if constraint.span(axis) > 1 {
                continue;
            }
            let wanted = match (constraint.percent(axis), percent_base) {
                (Some(percent), Some(base)) => percent_of(percent, base),
                _ => lookup
                    .get(&id)
                    .map(|&index| {
                        let outer = children[index].outer_preferred_size();
                        match axis {
                            Axis::Horizontal => outer.width,
                            Axis::Vertical => outer.height,
                        }
                    })
                    .unwrap_or(0),
            };
            current = current.max(wanted);
        }
        match ceiling {
            Some(ceiling) => current.min(ceiling),
            None => current,
        }
    }

    fn track_sizes(
        &self,
        axis: Axis,
        extent: i32,
        scrollable: bool,
        children: &[Component],
        lookup: &FxHashMap<ComponentId, usize>,
    ) -> Vec<i32> {
        let count = self.track_count(axis);
        let mut sizes = Vec::with_capacity(count);
        let mut used = 0;
        for track in 0..count {
            let rigid = axis.is_horizontal() && self.is_rigid_column(track);
            let ceiling = if scrollable || rigid {
                None
            } else {
                let reserve = if axis.is_horizontal() {
                    self.config.min_column_width * (count - track - 1) as i32
                } else {
                    0
                };
                Some((extent - used - reserve).max(0))
            };
            let size = self.track_size(axis, track, Some(extent), ceiling, children, lookup);
            used += size;
            sizes.push(size);
        }
        sizes
    }
}

fn index_children(children: &[Component]) -> FxHashMap<ComponentId, usize> {
    children
        .iter()
        .enumerate()
        .map(|(index, child)| (child.id(), index))
        .collect()
}

fn offsets(start: i32, sizes: &[i32]) -> Vec<i32> {
    let mut position = start;
    sizes
        .iter()
        .map(|size| {
            let offset = position;
            position += size;
            offset
        })
        .collect()
}

impl Layout for TableLayout {
    fn layout_container(&self, parent: &LayoutParent, children: &mut [Component]) {
        let lookup = index_children(children);
        let padding = parent.directional_padding();
        let column_sizes = self.track_sizes(
            Axis::Horizontal,
            parent.content_width(),
            parent.scrollable_x,
            children,
            &lookup,
        );
        let row_sizes = self.track_sizes(
            Axis::Vertical,
            parent.content_height(),
            parent.scrollable_y,
            children,
            &lookup,
        );
        let column_positions = offsets(padding.left, &column_sizes);
        let row_positions = offsets(padding.top, &row_sizes);
        log::debug!(
            "table layout: columns {:?} rows {:?} in {}x{}",
            column_sizes,
            row_sizes,
            parent.width,
            parent.height
        );

        for (&id, constraint) in &self.placements {
            let (Some(row), Some(column)) = (constraint.row, constraint.column) else {
                continue;
            };
            let Some(&index) = lookup.get(&id) else {
                continue;
            };
            let child = &mut children[index];
            let margin = child.directional_margin(parent.rtl);
            let width: i32 = column_sizes[column..column + constraint.span_columns]
                .iter()
                .sum::<i32>()
                - margin.horizontal_sum();
            let height: i32 = row_sizes[row..row + constraint.span_rows]
                .iter()
                .sum::<i32>()
                - margin.vertical_sum();
            let x = column_positions[column] + margin.left;
            child.set_bounds(Rect::new(
                parent.mirror_x(x, width),
                row_positions[row] + margin.top,
                width,
                height,
            ));
        }
    }

    fn preferred_size(&self, parent: &LayoutParent, children: &[Component]) -> Size {
        let lookup = index_children(children);
        let width: i32 = (0..self.columns)
            .map(|column| self.track_size(Axis::Horizontal, column, None, None, children, &lookup))
            .sum();
        let height: i32 = (0..self.rows)
            .map(|row| self.track_size(Axis::Vertical, row, None, None, children, &lookup))
            .sum();
        Size::new(width, height).inflate(parent.padding)
    }

    fn add_constraint(
        &mut self,
        child: ComponentId,
        constraint: LayoutConstraint,
    ) -> Result<(), LayoutError> {
        match constraint {
            LayoutConstraint::None => {
                let constraint = self.create_constraint();
                self.place(child, constraint)
            }
            LayoutConstraint::Table(mut constraint) => {
                if constraint.width_percent.is_none() {
                    constraint.width_percent = self.config.default_column_width_percent;
                }
                if constraint.height_percent.is_none() {
                    constraint.height_percent = self.config.default_row_height_percent;
                }
                self.place(child, constraint)
            }
            other => Err(LayoutError::ConstraintMismatch {
                layout: self.name(),
                constraint: other,
            }),
        }
    }

    fn remove_constraint(&mut self, child: ComponentId) {
        if self.placements.remove(&child).is_none() {
            return;
        }
        for cell in self.cells.iter_mut() {
            if cell.owner() == Some(child) {
                *cell = TableCell::Empty;
            }
        }
        self.advance_cursor();
    }

    fn constraint_of(&self, child: ComponentId) -> Option<LayoutConstraint> {
        self.placements
            .get(&child)
            .copied()
            .map(LayoutConstraint::Table)
    }

    fn name(&self) -> &'static str {
        "table"
    }
}

/// `percent` of `base`, saturating instead of wrapping for huge percentages.
fn percent_of(percent: u32, base: i32) -> i32 {
    (i64::from(percent) * i64::from(base) / 100).clamp(i64::from(i32::MIN), i64::from(i32::MAX))
        as i32
}

#[cfg(test)]
#[path = "tests/table_tests.rs"]
mod tests;
