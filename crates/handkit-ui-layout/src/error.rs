use thiserror::Error;

use crate::{BorderPosition, ComponentId, LayoutConstraint};

/// Errors raised while attaching components to a layout.
///
/// Everything except [`LayoutError::UnknownComponent`] is a placement
/// conflict: the constraint can never succeed against the current layout
/// state and must not be retried unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("row {row} and column {column} already occupied")]
    CellOccupied { row: usize, column: usize },

    #[error("cell ({row}, {column}) lies outside a {rows}x{columns} table")]
    CellOutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    #[error("a {span_rows}x{span_columns} span at ({row}, {column}) exceeds a {rows}x{columns} table")]
    SpanOutOfBounds {
        row: usize,
        column: usize,
        span_rows: usize,
        span_columns: usize,
        rows: usize,
        columns: usize,
    },

    #[error("a span must cover at least one row and one column, got {span_rows}x{span_columns}")]
    InvalidSpan { span_rows: usize, span_columns: usize },

    #[error("no free cell left for automatic placement")]
    TableFull,

    #[error("border region {0:?} already holds a component")]
    RegionOccupied(BorderPosition),

    #[error("{layout} layout requires a placement constraint")]
    MissingConstraint { layout: &'static str },

    #[error("{layout} layout cannot accept constraint {constraint:?}")]
    ConstraintMismatch {
        layout: &'static str,
        constraint: LayoutConstraint,
    },

    #[error("component {0} was already added")]
    DuplicateComponent(ComponentId),

    #[error("component {0} is not part of this container")]
    UnknownComponent(ComponentId),
}

impl LayoutError {
    /// Whether this error is a placement conflict rather than a lookup miss.
    pub fn is_conflict(&self) -> bool {
        !matches!(self, LayoutError::UnknownComponent(_))
    }
}
