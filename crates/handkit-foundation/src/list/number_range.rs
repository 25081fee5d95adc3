//! A list of evenly spaced numbers, as used by spinners

use std::fmt;

use super::model::Listeners;
use crate::list::{ListEvent, ListListener, ListModel, ListenerId};

/// Numbers a [`NumberRangeModel`] can hold.
///
/// Steps are computed in `f64`; integer types truncate toward zero the same
/// way an `as` cast does.
pub trait RangeNumber: Copy + PartialOrd + fmt::Debug {
    fn to_f64(self) -> f64;

    fn from_f64(value: f64) -> Self;
}

macro_rules! range_number {
    ($($ty:ty),*) => {
        $(
            impl RangeNumber for $ty {
                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn from_f64(value: f64) -> Self {
                    value as $ty
                }
            }
        )*
    };
}

range_number!(i32, i64, f32);

impl RangeNumber for f64 {
    fn to_f64(self) -> f64 {
        self
    }

    fn from_f64(value: f64) -> Self {
        value
    }
}

/// The values `min, min + step, ..` up to and including `max`, with the
/// selection standing for the current value.
///
/// The range always holds at least `min`, so the selection is never `None`.
/// A step that is not a positive finite number, or a `max` below `min`,
/// leaves `min` as the only value. The range cannot be edited through
/// item insertion or removal.
pub struct NumberRangeModel<T: RangeNumber> {
    min: f64,
    step: f64,
    values: Vec<T>,
    selection: usize,
    listeners: Listeners,
}

impl<T: RangeNumber> fmt::Debug for NumberRangeModel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumberRangeModel")
            .field("min", &self.min)
            .field("step", &self.step)
            .field("size", &self.values.len())
            .field("value", &self.value())
            .finish()
    }
}

impl<T: RangeNumber> NumberRangeModel<T> {
    /// `value` snaps to the nearest step inside the range.
    pub fn new(min: T, max: T, value: T, step: T) -> Self {
        let (min, max, step) = (min.to_f64(), max.to_f64(), step.to_f64());
        let count = if step.is_finite() && step > 0.0 && max >= min {
            ((max - min) / step + 1e-9).floor() as usize + 1
        } else {
            1
        };
        let values = (0..count)
            .map(|index| T::from_f64(min + step * index as f64))
            .collect();
        let mut model = Self {
            min,
            step,
            values,
            selection: 0,
            listeners: Listeners::default(),
        };
        model.selection = model.index_of(value);
        model
    }

    pub fn min(&self) -> T {
        self.values[0]
    }

    /// The largest value actually reachable by stepping from `min`.
    pub fn max(&self) -> T {
        self.values[self.values.len() - 1]
    }

    pub fn value(&self) -> T {
        self.values[self.selection]
    }

    /// Moves to the step nearest `value`, clamped into the range.
    pub fn set_value(&mut self, value: T) {
        let index = self.index_of(value);
        self.change_selection(index);
    }

    /// Steps `by` entries up or down, stopping at either end.
    pub fn step_by(&mut self, by: isize) {
        let last = self.values.len() - 1;
        let index = self.selection.saturating_add_signed(by).min(last);
        self.change_selection(index);
    }

    fn index_of(&self, value: T) -> usize {
        let value = value.to_f64();
        if !(self.step.is_finite() && self.step > 0.0) || value.is_nan() || value <= self.min {
            return 0;
        }
        let index = ((value - self.min) / self.step).round();
        (index as usize).min(self.values.len() - 1)
    }

    fn change_selection(&mut self, index: usize) {
        let old = self.selection;
        if old == index {
            return;
        }
        self.selection = index;
        self.listeners.emit(ListEvent::SelectionChanged {
            old: Some(old),
            new: Some(index),
        });
    }
}

impl<T: RangeNumber> ListModel for NumberRangeModel<T> {
    type Item = T;

    fn size(&self) -> usize {
        self.values.len()
    }

    fn item_at(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }

    fn selected_index(&self) -> Option<usize> {
        Some(self.selection)
    }

    /// Clamps into range. `None` is ignored because a range always has a
    /// current value.
    fn set_selected_index(&mut self, index: Option<usize>) {
        if let Some(index) = index {
            let last = self.values.len() - 1;
            self.change_selection(index.min(last));
        }
    }

    fn subscribe(&mut self, listener: ListListener) -> ListenerId {
        self.listeners.add(listener)
    }

    fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }
}

#[cfg(test)]
#[path = "tests/number_range_tests.rs"]
mod tests;
