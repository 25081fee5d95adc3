//! Pure math/data for handkit layout and painting
//!
//! Geometry works in whole device pixels: every box, inset and offset is an
//! `i32`, matching the coordinate space of the handset displays the toolkit
//! targets.

mod color;
mod geometry;

pub use color::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
}
