//! Layout contracts & layout managers for handkit
//!
//! A [`Container`] owns its [`Component`]s and exactly one [`LayoutKind`].
//! Layout passes are pure: they read preferred sizes and margins and write
//! every child's bounds, never the container's own.

mod alignment;
mod axis;
mod border;
mod component;
mod config;
mod container;
mod data_table;
mod error;
mod flow;
mod grid;
mod layout;
mod table;

pub use alignment::*;
pub use axis::*;
pub use border::*;
pub use component::*;
pub use config::*;
pub use container::*;
pub use data_table::*;
pub use error::*;
pub use flow::*;
pub use grid::*;
pub use layout::*;
pub use table::*;

pub mod prelude {
    pub use crate::alignment::{HorizontalAlignment, VerticalAlignment};
    pub use crate::border::{BorderLayout, BorderPosition};
    pub use crate::component::{Component, ComponentId};
    pub use crate::container::Container;
    pub use crate::data_table::{DataTable, DefaultTableModel, TableModel};
    pub use crate::error::LayoutError;
    pub use crate::flow::FlowLayout;
    pub use crate::grid::GridLayout;
    pub use crate::layout::{Layout, LayoutConstraint, LayoutKind};
    pub use crate::table::{TableConstraint, TableLayout};
}
