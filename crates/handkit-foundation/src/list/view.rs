use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use handkit_animation::Motion;
use handkit_ui_graphics::{Rect, Size};
use handkit_ui_layout::Axis;

use crate::{
    FixedSelection, ListConfig, ListEvent, ListModel, ListenerId, PaintList, ViewportState,
};

/// Direction of a keyboard step through the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Next,
    Previous,
}

/// Result of [`ListView::navigate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The selection moved. Free lists also report the rectangle a scrolling
    /// parent should reveal.
    Moved {
        selection: usize,
        scroll_to: Option<Rect>,
    },
    /// The list is at its edge and does not wrap; focus may move on.
    FocusReleased,
    /// Nothing to navigate.
    Empty,
}

#[derive(Debug, Clone, Copy)]
struct DragState {
    start: i32,
    initial: Option<usize>,
    active: bool,
}

/// A list's view state: geometry, selection animation and drag tracking.
///
/// The view never owns items. It caches the model size and selection and
/// keeps them current through the events it receives after
/// [`attach`](Self::attach); call [`sync`](Self::sync) (or
/// [`tick`](Self::tick), which syncs first) before reading positions.
pub struct ListView {
    state: ViewportState,
    config: ListConfig,
    motion: Option<Motion>,
    events: Rc<RefCell<VecDeque<ListEvent>>>,
    subscription: Option<ListenerId>,
    model_size: usize,
    selection: Option<usize>,
    pending_direction: Option<Navigation>,
    /// Set while the view itself changes the selection; only those changes
    /// slide the list.
    user_selection: bool,
    drag: Option<DragState>,
}

impl ListView {
    pub fn new(orientation: Axis, mode: FixedSelection, config: ListConfig) -> Self {
        Self {
            state: ViewportState {
                orientation,
                mode,
                item_gap: config.item_gap,
                ..ViewportState::default()
            },
            config,
            motion: None,
            events: Rc::new(RefCell::new(VecDeque::new())),
            subscription: None,
            model_size: 0,
            selection: None,
            pending_direction: None,
            user_selection: false,
            drag: None,
        }
    }

    pub fn vertical(mode: FixedSelection) -> Self {
        Self::new(Axis::Vertical, mode, ListConfig::default())
    }

    pub fn horizontal(mode: FixedSelection) -> Self {
        Self::new(Axis::Horizontal, mode, ListConfig::default())
    }

    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.state.bounds = bounds;
    }

    /// Sets both the regular and the selected item size.
    pub fn set_element_size(&mut self, size: Size) {
        self.state.element_size = size;
        self.state.selected_element_size = size;
    }

    pub fn set_selected_element_size(&mut self, size: Size) {
        self.state.selected_element_size = size;
    }

    pub fn set_rtl(&mut self, rtl: bool) {
        self.state.rtl = rtl;
    }

    pub fn model_size(&self) -> usize {
        self.model_size
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn animation_offset(&self) -> i32 {
        self.state.animation_offset
    }

    pub fn is_animating(&self) -> bool {
        self.motion.is_some()
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    /// Starts following `model`. Any previous animation is dropped.
    pub fn attach<M: ListModel>(&mut self, model: &mut M) {
        if self.subscription.is_some() {
            log::warn!("list view attached twice; events from the first model keep arriving");
        }
        self.events.borrow_mut().clear();
        let queue = Rc::clone(&self.events);
        let id = model.subscribe(Box::new(move |event| {
            queue.borrow_mut().push_back(*event);
        }));
        self.subscription = Some(id);
        self.refresh(model);
        self.settle();
    }

    /// Stops following `model`. Returns false when the view was not attached
    /// to it.
    pub fn detach<M: ListModel>(&mut self, model: &mut M) -> bool {
        let Some(id) = self.subscription.take() else {
            return false;
        };
        self.events.borrow_mut().clear();
        model.unsubscribe(id)
    }

    fn refresh<M: ListModel>(&mut self, model: &M) {
        self.model_size = model.size();
        self.selection = model.selected_index();
    }

    fn settle(&mut self) {
        self.motion = None;
        self.state.animation_offset = 0;
    }

    /// Applies queued model events to the cached size and selection and
    /// starts the selection slide when one is due. Selection changes made
    /// directly on the model (including index shifts from inserts and
    /// removals) only update the cache.
    pub fn sync(&mut self) {
        loop {
            let event = self.events.borrow_mut().pop_front();
            let Some(event) = event else {
                break;
            };
            match event {
                ListEvent::ItemAdded(_) => self.model_size += 1,
                ListEvent::ItemRemoved(_) => {
                    self.model_size = self.model_size.saturating_sub(1);
                    if self.model_size == 0 {
                        self.settle();
                    }
                }
                ListEvent::ItemChanged(_) => {}
                ListEvent::SelectionChanged { old, new } => {
                    self.selection = new;
                    if self.user_selection {
                        self.animate_selection(old, new);
                    }
                }
            }
        }
    }

    fn animate_selection(&mut self, old: Option<usize>, new: Option<usize>) {
        let direction = self.pending_direction.take();
        let dragging = self.drag.is_some_and(|drag| drag.active);
        if !self.state.mode.is_fixed() || !self.config.smooth_scrolling || dragging {
            return;
        }
        let (Some(old), Some(new)) = (old, new) else {
            return;
        };
        let size = self.model_size as i64;
        if old == new || size == 0 {
            return;
        }

        let forward = (new as i64 - old as i64).rem_euclid(size);
        let backward = size - forward;
        let steps = match direction {
            Some(Navigation::Next) => forward,
            Some(Navigation::Previous) => -backward,
            None if forward <= backward => forward,
            None => -backward,
        };

        let shift = steps * i64::from(self.state.item_extent());
        let offset = (i64::from(self.state.animation_offset) + shift)
            .clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        log::debug!("list: selection {old} -> {new}, sliding from offset {offset}");
        self.state.animation_offset = offset;
        self.motion = Some(Motion::tween(
            0,
            offset.abs(),
            self.config.animation_duration_ms,
            self.config.motion,
        ));
    }

    /// Advances the selection slide by `elapsed_ms`. Returns true while the
    /// list needs repainting.
    ///
    /// The offset shrinks toward zero and never changes sign; once the
    /// motion finishes it is exactly zero.
    pub fn tick(&mut self, elapsed_ms: u64) -> bool {
        self.sync();
        let Some(motion) = self.motion.as_mut() else {
            return false;
        };
        motion.advance(elapsed_ms);
        let remaining = motion.destination() - motion.value();
        let finished = motion.is_finished();

        let offset = self.state.animation_offset;
        self.state.animation_offset = if offset < 0 {
            (-remaining).min(0).max(offset)
        } else {
            remaining.max(0).min(offset)
        };
        if finished {
            self.settle();
        }
        true
    }

    pub fn position_of(&self, index: usize) -> Option<Rect> {
        self.state
            .position_of(index, self.selection, self.model_size)
    }

    pub fn logical_offset(&self, index: usize) -> Option<i64> {
        self.state
            .logical_offset(index, self.selection, self.model_size)
    }

    pub fn hit_test(&self, x: i32, y: i32) -> Option<usize> {
        self.state.hit_test(x, y, self.selection, self.model_size)
    }

    pub fn paint(&self, clip: Rect) -> PaintList {
        self.state.paint(clip, self.selection, self.model_size)
    }

    pub fn preferred_size(&self) -> Size {
        self.state.preferred_size(self.model_size)
    }

    /// Moves the selection one step.
    ///
    /// Fixed and cyclic lists wrap past either end. Other lists stop at the
    /// edge and report [`NavigationOutcome::FocusReleased`].
    pub fn navigate<M: ListModel>(
        &mut self,
        model: &mut M,
        navigation: Navigation,
    ) -> NavigationOutcome {
        self.sync();
        let size = model.size();
        if size == 0 {
            return NavigationOutcome::Empty;
        }
        let wraps = self.state.mode.wraps_navigation();
        let target = match (navigation, model.selected_index()) {
            (Navigation::Next, None) => Some(0),
            (Navigation::Previous, None) => Some(size - 1),
            (Navigation::Next, Some(current)) if current + 1 < size => Some(current + 1),
            (Navigation::Next, Some(_)) => wraps.then_some(0),
            (Navigation::Previous, Some(current)) if current > 0 => Some(current - 1),
            (Navigation::Previous, Some(_)) => wraps.then_some(size - 1),
        };
        let Some(target) = target else {
            return NavigationOutcome::FocusReleased;
        };

        self.pending_direction = Some(navigation);
        self.select(model, target);
        self.pending_direction = None;

        let scroll_to = if self.state.mode.is_fixed() {
            None
        } else {
            self.state.scroll_target(target, size)
        };
        NavigationOutcome::Moved {
            selection: target,
            scroll_to,
        }
    }

    /// Selects the item under the point, if any.
    pub fn select_at<M: ListModel>(&mut self, model: &mut M, x: i32, y: i32) -> Option<usize> {
        self.sync();
        let index = self.hit_test(x, y)?;
        self.select(model, index);
        Some(index)
    }

    fn select<M: ListModel>(&mut self, model: &mut M, index: usize) {
        self.user_selection = true;
        model.set_selected_index(Some(index));
        self.sync();
        self.user_selection = false;
        self.refresh(model);
    }

    fn main_coordinate(&self, x: i32, y: i32) -> i32 {
        match self.state.orientation {
            Axis::Horizontal => x,
            Axis::Vertical => y,
        }
    }

    pub fn begin_drag(&mut self, x: i32, y: i32) {
        self.drag = Some(DragState {
            start: self.main_coordinate(x, y),
            initial: self.selection,
            active: false,
        });
    }

    /// Follows a pointer drag in fixed modes: every item extent of travel
    /// past the threshold moves the selection by one, wrapping around.
    /// Returns the selection once the drag is active.
    pub fn drag_to<M: ListModel>(&mut self, model: &mut M, x: i32, y: i32) -> Option<usize> {
        self.sync();
        if !self.state.mode.is_fixed() {
            return None;
        }
        let along = self.main_coordinate(x, y);
        let drag = self.drag.as_mut()?;
        let offset = along - drag.start;
        if !drag.active && offset.abs() <= self.config.drag_threshold {
            return None;
        }
        drag.active = true;
        let initial = drag.initial.unwrap_or(0);

        let size = model.size();
        let extent = self.state.item_extent();
        if size == 0 || extent <= 0 {
            return None;
        }
        let steps = i64::from(offset / extent);
        let target = (initial as i64 + steps).rem_euclid(size as i64) as usize;
        if model.selected_index() != Some(target) {
            self.select(model, target);
        } else {
            self.refresh(model);
        }
        Some(target)
    }

    /// Ends the drag. Returns true when the pointer moved far enough to
    /// count as a drag rather than a tap.
    pub fn end_drag(&mut self) -> bool {
        self.drag.take().is_some_and(|drag| drag.active)
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
