//! Foundation widgets logic for handkit: list models (including the number
//! ranges behind spinners) and the virtualized list position, hit-test and
//! paint engine.

pub mod list;

pub use list::*;

pub mod prelude {
    pub use crate::list::{
        DefaultListModel, FixedSelection, ListConfig, ListEvent, ListModel, ListView,
        Navigation, NavigationOutcome, NumberRangeModel, ViewportState,
    };
}
