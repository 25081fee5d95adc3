//! Virtualized lists.
//!
//! [`ViewportState`] holds everything needed to turn an item index into a
//! rectangle and back; it never touches item data, so painting and
//! hit-testing stay cheap enough to run several times per frame.
//! [`ListView`] wraps it with the selection animation and keeps its cached
//! model size and selection current through a [`ListModel`] subscription.

mod config;
mod mode;
mod model;
mod number_range;
mod view;
mod viewport;

pub use config::*;
pub use mode::*;
pub use model::*;
pub use number_range::*;
pub use view::*;
pub use viewport::*;
