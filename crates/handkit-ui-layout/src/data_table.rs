//! Tables of cells generated from a [`TableModel`]
//!
//! A [`DataTable`] owns a [`Container`] with a [`TableLayout`] of
//! `row_count + 1` rows: row zero holds one header per column and model row
//! `r` lands on layout row `r + 1`. Cells are leaves sized by a caller
//! supplied measure function, since text measurement lives outside layout.

use std::fmt;

use handkit_ui_graphics::Size;
use rustc_hash::FxHashMap;

use crate::{Component, ComponentId, Container, LayoutError, TableConstraint, TableLayout};

/// Tabular data shown by a [`DataTable`].
pub trait TableModel {
    fn row_count(&self) -> usize;

    fn column_count(&self) -> usize;

    fn column_name(&self, column: usize) -> String;

    /// Display text of one data cell. Out of range cells read as empty.
    fn value_at(&self, row: usize, column: usize) -> String;

    fn is_cell_editable(&self, _row: usize, _column: usize) -> bool {
        false
    }

    /// Stores an edited value. Read-only models ignore it.
    fn set_value_at(&mut self, _row: usize, _column: usize, _value: String) {}
}

/// A [`TableModel`] backed by a vector of rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultTableModel {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    editable: bool,
}

impl DefaultTableModel {
    /// Rows shorter than the header read as empty in their missing cells.
    pub fn new(
        columns: impl IntoIterator<Item = impl Into<String>>,
        rows: impl IntoIterator<Item = Vec<String>>,
    ) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: rows.into_iter().collect(),
            editable: false,
        }
    }

    pub fn with_editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn remove_row(&mut self, row: usize) -> Option<Vec<String>> {
        (row < self.rows.len()).then(|| self.rows.remove(row))
    }
}

impl TableModel for DefaultTableModel {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_count(&self) -> usize {
        self.columns.len()
    }

    fn column_name(&self, column: usize) -> String {
        self.columns.get(column).cloned().unwrap_or_default()
    }

    fn value_at(&self, row: usize, column: usize) -> String {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .cloned()
            .unwrap_or_default()
    }

    fn is_cell_editable(&self, _row: usize, _column: usize) -> bool {
        self.editable
    }

    fn set_value_at(&mut self, row: usize, column: usize, value: String) {
        let Some(cells) = self.rows.get_mut(row) else {
            return;
        };
        if cells.len() <= column {
            cells.resize(column + 1, String::new());
        }
        cells[column] = value;
    }
}

/// What a cell shows, handed to the measure function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Header,
    Label,
    Editable,
}

/// Where a component sits in the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellAddress {
    Header { column: usize },
    Data { row: usize, column: usize },
}

impl CellAddress {
    /// The model row, `None` for header cells.
    pub fn row(self) -> Option<usize> {
        match self {
            CellAddress::Header { .. } => None,
            CellAddress::Data { row, .. } => Some(row),
        }
    }

    pub fn column(self) -> usize {
        match self {
            CellAddress::Header { column } | CellAddress::Data { column, .. } => column,
        }
    }
}

pub type CellMeasure = Box<dyn Fn(&str, CellKind) -> Size>;

/// A container whose cells mirror a [`TableModel`].
///
/// The focused cell survives a full [`refresh`](Self::refresh) while it is
/// still inside the model.
pub struct DataTable<M: TableModel> {
    model: M,
    measure: CellMeasure,
    container: Container,
    cells: FxHashMap<ComponentId, CellAddress>,
    focus: Option<(usize, usize)>,
}

impl<M: TableModel> fmt::Debug for DataTable<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTable")
            .field("rows", &self.model.row_count())
            .field("columns", &self.model.column_count())
            .field("focus", &self.focus)
            .field("container", &self.container)
            .finish()
    }
}

impl<M: TableModel> DataTable<M> {
    pub fn new(
        model: M,
        measure: impl Fn(&str, CellKind) -> Size + 'static,
    ) -> Result<Self, LayoutError> {
        let mut table = Self {
            model,
            measure: Box::new(measure),
            container: Container::new(TableLayout::new(1, 0)),
            cells: FxHashMap::default(),
            focus: None,
        };
        table.refresh()?;
        Ok(table)
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Direct access to the model. Call [`refresh`](Self::refresh) after a
    /// change in shape or [`data_changed`](Self::data_changed) after a single
    /// cell edit.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Swaps the model and rebuilds every cell.
    pub fn set_model(&mut self, model: M) -> Result<M, LayoutError> {
        let old = std::mem::replace(&mut self.model, model);
        self.refresh()?;
        Ok(old)
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    /// Bounds, padding and rigid columns live on the container and survive
    /// rebuilds.
    pub fn container_mut(&mut self) -> &mut Container {
        &mut self.container
    }

    pub fn layout(&mut self) {
        self.container.layout();
    }

    pub fn cell_address(&self, id: ComponentId) -> Option<CellAddress> {
        self.cells.get(&id).copied()
    }

    /// Model row of a cell; `None` for headers and foreign components.
    pub fn cell_row(&self, id: ComponentId) -> Option<usize> {
        self.cell_address(id).and_then(CellAddress::row)
    }

    pub fn cell_column(&self, id: ComponentId) -> Option<usize> {
        self.cell_address(id).map(CellAddress::column)
    }

    /// The component showing model cell `(row, column)`.
    pub fn cell_component(&self, row: usize, column: usize) -> Option<ComponentId> {
        self.container
            .layout_kind()
            .as_table()?
            .component_at(row + 1, column)
    }

    pub fn header_component(&self, column: usize) -> Option<ComponentId> {
        self.container.layout_kind().as_table()?.component_at(0, column)
    }

    pub fn focused_cell(&self) -> Option<(usize, usize)> {
        self.focus
    }

    /// Focuses a data cell. Headers and cells outside the model cannot take
    /// focus.
    pub fn set_focused_cell(&mut self, cell: Option<(usize, usize)>) -> bool {
        match cell {
            Some((row, column)) if !self.in_model(row, column) => false,
            _ => {
                self.focus = cell;
                true
            }
        }
    }

    /// Rebuilds every cell from the model, keeping the layout configuration
    /// and rigid columns that still exist.
    pub fn refresh(&mut self) -> Result<(), LayoutError> {
        let rows = self.model.row_count();
        let columns = self.model.column_count();
        log::debug!("table rebuild: {rows} rows x {columns} columns");

        let previous = self.container.layout_kind().as_table();
        let config = previous.map(|table| *table.config()).unwrap_or_default();
        let rigid: Vec<usize> = previous
            .map(|table| {
                (0..table.columns().min(columns))
                    .filter(|&column| table.is_rigid_column(column))
                    .collect()
            })
            .unwrap_or_default();

        self.container.remove_all();
        self.cells.clear();
        let mut layout = TableLayout::with_config(rows + 1, columns, config);
        for column in rigid {
            layout.set_rigid_column(column, true);
        }
        *self.container.layout_kind_mut() = layout.into();

        for column in 0..columns {
            let name = self.model.column_name(column);
            self.place(CellAddress::Header { column }, &name, CellKind::Header)?;
        }
        for row in 0..rows {
            for column in 0..columns {
                self.place_data_cell(row, column)?;
            }
        }

        if let Some((row, column)) = self.focus {
            if !self.in_model(row, column) {
                self.focus = None;
            }
        }
        Ok(())
    }

    /// Rebuilds the one cell whose value changed, focuses it and lays the
    /// table out again.
    pub fn data_changed(&mut self, row: usize, column: usize) -> Result<(), LayoutError> {
        if !self.in_model(row, column) {
            return Err(LayoutError::CellOutOfBounds {
                row: row + 1,
                column,
                rows: self.model.row_count() + 1,
                columns: self.model.column_count(),
            });
        }
        if let Some(id) = self.cell_component(row, column) {
            self.container.remove(id)?;
            self.cells.remove(&id);
        }
        self.place_data_cell(row, column)?;
        self.focus = Some((row, column));
        self.container.layout();
        Ok(())
    }

    /// Writes an edited value through to the model and refreshes its cell.
    pub fn set_value_at(
        &mut self,
        row: usize,
        column: usize,
        value: String,
    ) -> Result<(), LayoutError> {
        self.model.set_value_at(row, column, value);
        self.data_changed(row, column)
    }

    fn in_model(&self, row: usize, column: usize) -> bool {
        row < self.model.row_count() && column < self.model.column_count()
    }

    fn place_data_cell(&mut self, row: usize, column: usize) -> Result<(), LayoutError> {
        let kind = if self.model.is_cell_editable(row, column) {
            CellKind::Editable
        } else {
            CellKind::Label
        };
        let value = self.model.value_at(row, column);
        self.place(CellAddress::Data { row, column }, &value, kind)
    }

    fn place(
        &mut self,
        address: CellAddress,
        text: &str,
        kind: CellKind,
    ) -> Result<(), LayoutError> {
        let columns = self.model.column_count();
        let layout_row = address.row().map_or(0, |row| row + 1);
        let column = address.column();
        let id = u32::try_from(layout_row * columns + column)
            .map(ComponentId)
            .map_err(|_| LayoutError::TableFull)?;
        let component = Component::leaf(id, (self.measure)(text, kind));
        self.container.add_with(component, TableConstraint::at(layout_row, column))?;
        self.cells.insert(id, address);
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/data_table_tests.rs"]
mod tests;
