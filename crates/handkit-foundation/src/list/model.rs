//! List data and change notification

use std::fmt;

use smallvec::SmallVec;

/// Change reported by a [`ListModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
    ItemAdded(usize),
    ItemRemoved(usize),
    ItemChanged(usize),
    SelectionChanged {
        old: Option<usize>,
        new: Option<usize>,
    },
}

/// Handle returned by [`ListModel::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u32);

pub type ListListener = Box<dyn FnMut(&ListEvent)>;

/// Indexed data behind a list plus the current selection.
///
/// The selection is always `None` for an empty model and otherwise within
/// `0..size()`.
pub trait ListModel {
    type Item;

    fn size(&self) -> usize;

    fn item_at(&self, index: usize) -> Option<&Self::Item>;

    fn selected_index(&self) -> Option<usize>;

    /// Moves the selection, clamping it into range. Emits
    /// [`ListEvent::SelectionChanged`] when the value actually changes.
    fn set_selected_index(&mut self, index: Option<usize>);

    fn subscribe(&mut self, listener: ListListener) -> ListenerId;

    /// Returns false when `id` was not subscribed.
    fn unsubscribe(&mut self, id: ListenerId) -> bool;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u32,
    entries: SmallVec<[(ListenerId, ListListener); 2]>,
}

impl Listeners {
    pub(crate) fn add(&mut self, listener: ListListener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(crate) fn emit(&mut self, event: ListEvent) {
        log::trace!("list model: {event:?}");
        for (_, listener) in self.entries.iter_mut() {
            listener(&event);
        }
    }
}

/// A [`ListModel`] backed by a `Vec`.
pub struct DefaultListModel<T> {
    items: Vec<T>,
    selection: Option<usize>,
    listeners: Listeners,
}

impl<T> Default for DefaultListModel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DefaultListModel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultListModel")
            .field("items", &self.items)
            .field("selection", &self.selection)
            .field("listeners", &self.listeners.entries.len())
            .finish()
    }
}

impl<T> DefaultListModel<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selection: None,
            listeners: Listeners::default(),
        }
    }

    /// A model holding `items` with the first one selected.
    pub fn from_items(items: impl IntoIterator<Item = T>) -> Self {
        let items: Vec<T> = items.into_iter().collect();
        let selection = (!items.is_empty()).then_some(0);
        Self {
            items,
            selection,
            listeners: Listeners::default(),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Appends an item. The first item added to an empty model becomes the
    /// selection.
    pub fn add_item(&mut self, item: T) {
        let index = self.items.len();
        self.items.push(item);
        self.listeners.emit(ListEvent::ItemAdded(index));
        if index == 0 {
            self.change_selection(Some(0));
        }
    }

    /// Inserts an item at `index`, clamped to the end. Keeps the same item
    /// selected.
    pub fn insert_item(&mut self, index: usize, item: T) {
        let index = index.min(self.items.len());
        self.items.insert(index, item);
        self.listeners.emit(ListEvent::ItemAdded(index));
        match self.selection {
            Some(selected) if selected >= index => self.change_selection(Some(selected + 1)),
            None if self.items.len() == 1 => self.change_selection(Some(0)),
            _ => {}
        }
    }

    /// Removes the item at `index`. A selection past the new end is clamped
    /// back onto the last item.
    pub fn remove_item(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            return None;
        }
        let item = self.items.remove(index);
        self.listeners.emit(ListEvent::ItemRemoved(index));
        let selection = match self.selection {
            _ if self.items.is_empty() => None,
            Some(selected) if selected > index => Some(selected - 1),
            Some(selected) => Some(selected.min(self.items.len() - 1)),
            None => None,
        };
        self.change_selection(selection);
        Some(item)
    }

    /// Replaces the item at `index`, returning the previous one.
    pub fn replace_item(&mut self, index: usize, item: T) -> Option<T> {
        let slot = self.items.get_mut(index)?;
        let old = std::mem::replace(slot, item);
        self.listeners.emit(ListEvent::ItemChanged(index));
        Some(old)
    }

    pub fn clear(&mut self) {
        for index in (0..self.items.len()).rev() {
            self.items.pop();
            self.listeners.emit(ListEvent::ItemRemoved(index));
        }
        self.change_selection(None);
    }

    fn change_selection(&mut self, new: Option<usize>) {
        let old = self.selection;
        if old == new {
            return;
        }
        self.selection = new;
        self.listeners.emit(ListEvent::SelectionChanged { old, new });
    }
}

impl<T> ListModel for DefaultListModel<T> {
    type Item = T;

    fn size(&self) -> usize {
        self.items.len()
    }

    fn item_at(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    fn selected_index(&self) -> Option<usize> {
        self.selection
    }

    fn set_selected_index(&mut self, index: Option<usize>) {
        let clamped = match index {
            _ if self.items.is_empty() => None,
            Some(index) => Some(index.min(self.items.len() - 1)),
            None => None,
        };
        self.change_selection(clamped);
    }

    fn subscribe(&mut self, listener: ListListener) -> ListenerId {
        self.listeners.add(listener)
    }

    fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }
}

#[cfg(test)]
#[path = "tests/model_tests.rs"]
mod tests;
