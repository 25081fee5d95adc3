//! Construction-time configuration for layout managers

/// Sizing defaults handed to a layout when it is created.
///
/// Every table owns its own copy, so two tables in one process may use
/// different minimums.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Width reserved for every column after the one being sized when the
    /// container does not scroll horizontally.
    pub min_column_width: i32,
    /// Percentage of the container width given to constraints that do not
    /// set their own width.
    pub default_column_width_percent: Option<u32>,
    /// Percentage of the container height given to constraints that do not
    /// set their own height.
    pub default_row_height_percent: Option<u32>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_column_width: 10,
            default_column_width_percent: None,
            default_row_height_percent: None,
        }
    }
}
