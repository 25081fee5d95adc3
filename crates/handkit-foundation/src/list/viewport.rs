//! Index ↔ rectangle math for virtualized lists

use handkit_ui_graphics::{Rect, Size};
use handkit_ui_layout::Axis;
use smallvec::SmallVec;

use crate::FixedSelection;

/// One item to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListPaintItem {
    pub index: usize,
    pub rect: Rect,
    pub selected: bool,
}

/// Items to draw for one clip rectangle, selected item last.
pub type PaintList = SmallVec<[ListPaintItem; 16]>;

/// Everything a list needs to place its items.
///
/// Positions are computed from scratch on every call; nothing here
/// accumulates between frames. `animation_offset` is only meaningful in
/// fixed modes and is owned by [`ListView::tick`](crate::ListView::tick).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportState {
    pub orientation: Axis,
    pub mode: FixedSelection,
    pub rtl: bool,
    /// Area the items are laid into.
    pub bounds: Rect,
    pub item_gap: i32,
    /// Size of an unselected item.
    pub element_size: Size,
    /// Size of the selected item; usually the same as `element_size`.
    pub selected_element_size: Size,
    pub animation_offset: i32,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            orientation: Axis::Vertical,
            mode: FixedSelection::None,
            rtl: false,
            bounds: Rect::default(),
            item_gap: 2,
            element_size: Size::ZERO,
            selected_element_size: Size::ZERO,
            animation_offset: 0,
        }
    }
}

/// Selection after clamping against the model size.
#[derive(Debug, Clone, Copy)]
struct Resolved {
    size: i64,
    selection: Option<i64>,
}

impl ViewportState {
    fn main(&self, size: Size) -> i64 {
        i64::from(match self.orientation {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        })
    }

    fn cross(&self, size: Size) -> i32 {
        match self.orientation {
            Axis::Horizontal => size.height,
            Axis::Vertical => size.width,
        }
    }

    fn axis_size(&self) -> i64 {
        self.main(self.bounds.size())
    }

    /// Distance from the start of one item to the start of the next.
    pub fn item_extent(&self) -> i32 {
        self.main(self.element_size) as i32 + self.item_gap
    }

    fn extent(&self) -> i64 {
        i64::from(self.item_extent())
    }

    /// How much larger the selected item is along the scroll axis.
    pub fn selection_delta(&self) -> i32 {
        (self.main(self.selected_element_size) - self.main(self.element_size)) as i32
    }

    /// Length of one full cycle of the strip: every item plus its gap, with
    /// the selected item counted at its enlarged size.
    pub fn total_extent(&self, model_size: usize) -> i64 {
        self.extent() * model_size as i64 + i64::from(self.selection_delta())
    }

    /// Strip length for a resolved model; without a selection nothing is
    /// enlarged.
    fn strip_length(&self, resolved: Resolved) -> i64 {
        match resolved.selection {
            Some(_) => self.total_extent(resolved.size as usize),
            None => self.extent() * resolved.size,
        }
    }

    fn resolve(&self, selection: Option<usize>, model_size: usize) -> Option<Resolved> {
        if model_size == 0 {
            return None;
        }
        let selection = match selection {
            Some(index) if index >= model_size => {
                log::warn!("list: selection {index} clamped to {}", model_size - 1);
                Some(model_size - 1)
            }
            Some(index) => Some(index),
            None if self.mode.is_fixed() => Some(0),
            None => None,
        };
        Some(Resolved {
            size: model_size as i64,
            selection: selection.map(|index| index as i64),
        })
    }

    fn pinned_offset(&self) -> i64 {
        let selected = self.main(self.selected_element_size);
        match self.mode {
            FixedSelection::Trail => self.axis_size() - selected,
            FixedSelection::Center => self.axis_size() / 2 - selected / 2,
            _ => 0,
        }
    }

    /// Offset of item `index` within the first cycle, before wrapping.
    fn cycle_offset(&self, index: i64, resolved: Resolved) -> i64 {
        let extent = self.extent();
        let delta = i64::from(self.selection_delta());
        let after_selection = resolved.selection.is_some_and(|selected| index > selected);
        let shift = if after_selection { delta } else { 0 };
        match resolved.selection {
            Some(selected) if self.mode.is_fixed() => {
                self.pinned_offset()
                    + (index - selected) * extent
                    + shift
                    + i64::from(self.animation_offset)
            }
            _ => index * extent + shift,
        }
    }

    fn logical(&self, index: usize, resolved: Resolved) -> i64 {
        let cycle = index as i64 / resolved.size;
        let residue = index as i64 % resolved.size;
        self.cycle_offset(residue, resolved) + cycle * self.strip_length(resolved)
    }

    /// Start of the window that every wrapped offset is folded into.
    ///
    /// When the strip is longer than the viewport plus one item the window
    /// starts just above the near edge, so nothing visible is moved. Shorter
    /// strips keep their natural position, nudged inside the viewport.
    fn wrap_origin(&self, resolved: Resolved) -> i64 {
        let total = self.strip_length(resolved);
        let near = 1 - self.extent();
        let far = self.axis_size();
        if total >= far - near {
            near
        } else {
            self.cycle_offset(0, resolved).clamp(near, far - total)
        }
    }

    fn wrapped(&self, logical: i64, resolved: Resolved) -> i64 {
        let total = self.strip_length(resolved);
        if total <= 0 {
            return logical;
        }
        let origin = self.wrap_origin(resolved);
        origin + (logical - origin).rem_euclid(total)
    }

    /// Unwrapped offset of `index` along the scroll axis, relative to the
    /// start of the bounds. Index `i + N` lies exactly one total extent after
    /// index `i`.
    pub fn logical_offset(
        &self,
        index: usize,
        selection: Option<usize>,
        model_size: usize,
    ) -> Option<i64> {
        let resolved = self.resolve(selection, model_size)?;
        Some(self.logical(index, resolved))
    }

    /// Width that right-to-left mirroring reflects across.
    fn mirror_width(&self, resolved: Resolved) -> i64 {
        let width = i64::from(self.bounds.width);
        if self.orientation.is_horizontal() && !self.mode.is_fixed() {
            width.max(self.strip_length(resolved))
        } else {
            width
        }
    }

    fn mirror(&self, rect: Rect, resolved: Resolved) -> Rect {
        if !self.rtl {
            return rect;
        }
        let origin = i64::from(self.bounds.x);
        let x = origin + self.mirror_width(resolved)
            - (i64::from(rect.x) - origin)
            - i64::from(rect.width);
        Rect { x: x as i32, ..rect }
    }

    fn rect_at(&self, index: usize, offset: i64, resolved: Resolved) -> Rect {
        let selected = resolved.selection == Some(index as i64 % resolved.size);
        let size = if selected {
            self.selected_element_size
        } else {
            self.element_size
        };
        let main_size = self.main(size) as i32;
        let rect = match self.orientation {
            Axis::Vertical => Rect::new(
                self.bounds.x,
                self.bounds.y + offset as i32,
                self.cross(self.bounds.size()),
                main_size,
            ),
            Axis::Horizontal => Rect::new(
                self.bounds.x + offset as i32,
                self.bounds.y,
                main_size,
                self.cross(self.bounds.size()),
            ),
        };
        self.mirror(rect, resolved)
    }

    fn position(&self, index: usize, resolved: Resolved) -> Option<Rect> {
        let logical = self.logical(index, resolved);
        let offset = if self.mode.is_fixed() {
            self.wrapped(logical, resolved)
        } else if index as i64 >= resolved.size {
            return None;
        } else {
            logical
        };
        Some(self.rect_at(index, offset, resolved))
    }

    /// On-screen rectangle of item `index`.
    ///
    /// Free modes place items one after another from the start of the
    /// bounds; fixed modes pin the selection and cycle the rest around it,
    /// so any index (even past the model size) maps onto the strip. Returns
    /// `None` for an empty model and, in free modes, for indices past the
    /// end.
    pub fn position_of(
        &self,
        index: usize,
        selection: Option<usize>,
        model_size: usize,
    ) -> Option<Rect> {
        let resolved = self.resolve(selection, model_size)?;
        self.position(index, resolved)
    }

    /// Point along the scroll axis in unmirrored coordinates, relative to
    /// the start of the bounds.
    fn main_coordinate(&self, x: i32, y: i32, resolved: Resolved) -> i64 {
        match self.orientation {
            Axis::Vertical => i64::from(y) - i64::from(self.bounds.y),
            Axis::Horizontal => {
                let x = i64::from(x);
                let origin = i64::from(self.bounds.x);
                let x = if self.rtl {
                    2 * origin + self.mirror_width(resolved) - x
                } else {
                    x
                };
                x - origin
            }
        }
    }

    /// Index of the item containing the point, if any.
    pub fn hit_test(
        &self,
        x: i32,
        y: i32,
        selection: Option<usize>,
        model_size: usize,
    ) -> Option<usize> {
        let resolved = self.resolve(selection, model_size)?;
        if self.mode.is_fixed() {
            self.hit_test_fixed(x, y, resolved)
        } else {
            self.hit_test_free(x, y, resolved)
        }
    }

    fn hit_test_free(&self, x: i32, y: i32, resolved: Resolved) -> Option<usize> {
        let along = self.main_coordinate(x, y, resolved);
        for index in 0..resolved.size as usize {
            if self.cycle_offset(index as i64, resolved) > along {
                break;
            }
            let rect = self.position(index, resolved)?;
            if rect.contains(x, y) {
                return Some(index);
            }
        }
        None
    }

    /// Inverts the pinned layout: folds the point back onto one cycle of the
    /// strip, reads the index off it and confirms against `position_of`.
    fn hit_test_fixed(&self, x: i32, y: i32, resolved: Resolved) -> Option<usize> {
        let total = self.strip_length(resolved);
        let extent = self.extent();
        if total <= 0 || extent <= 0 {
            return None;
        }
        let selected = resolved.selection.unwrap_or(0);
        let along = self.main_coordinate(x, y, resolved);
        let strip = (along - self.cycle_offset(0, resolved)).rem_euclid(total);

        let selected_start = selected * extent;
        let after_selected = selected_start + self.main(self.selected_element_size);
        let candidate = if strip < selected_start {
            strip / extent
        } else if strip <= after_selected {
            selected
        } else {
            (strip - i64::from(self.selection_delta())) / extent
        };
        let candidate = candidate.clamp(0, resolved.size - 1) as usize;

        self.position(candidate, resolved)
            .filter(|rect| rect.contains(x, y))
            .map(|_| candidate)
    }

    /// Items whose rectangles intersect `clip`.
    ///
    /// Free modes start near the first visible index and stop at the first
    /// miss after a hit. Wrapping breaks that ordering in fixed modes, so
    /// they check every item.
    pub fn paint(&self, clip: Rect, selection: Option<usize>, model_size: usize) -> PaintList {
        let mut items = PaintList::new();
        let Some(resolved) = self.resolve(selection, model_size) else {
            return items;
        };
        let fixed = self.mode.is_fixed();
        let start = if fixed || (self.rtl && self.orientation.is_horizontal()) {
            0
        } else {
            self.first_candidate(clip)
        };

        let mut selected_item = None;
        let mut found = false;
        for index in start..model_size {
            let Some(rect) = self.position(index, resolved) else {
                continue;
            };
            if !rect.intersects(&clip) {
                if found && !fixed {
                    break;
                }
                continue;
            }
            found = true;
            let selected = resolved.selection == Some(index as i64);
            let item = ListPaintItem {
                index,
                rect,
                selected,
            };
            if selected {
                selected_item = Some(item);
            } else {
                items.push(item);
            }
        }
        items.extend(selected_item);
        items
    }

    /// A safe lower bound for the first index a free list can show in `clip`.
    fn first_candidate(&self, clip: Rect) -> usize {
        let extent = self.extent();
        if extent <= 0 {
            return 0;
        }
        let clip_start = match self.orientation {
            Axis::Vertical => i64::from(clip.y) - i64::from(self.bounds.y),
            Axis::Horizontal => i64::from(clip.x) - i64::from(self.bounds.x),
        };
        let grown = i64::from(self.selection_delta().max(0));
        ((clip_start - grown) / extent - 1).max(0) as usize
    }

    /// Rectangle a scrolling parent should bring into view after the
    /// selection moved. Edge-margin lists include both neighbours.
    pub fn scroll_target(&self, selection: usize, model_size: usize) -> Option<Rect> {
        let rect = self.position_of(selection, Some(selection), model_size)?;
        if self.mode != FixedSelection::NoneEdgeMargin {
            return Some(rect);
        }
        let neighbours = [selection.checked_sub(1), Some(selection + 1)];
        Some(
            neighbours
                .into_iter()
                .flatten()
                .filter_map(|index| self.position_of(index, Some(selection), model_size))
                .fold(rect, |acc, neighbour| acc.union(&neighbour)),
        )
    }

    /// Size needed to show every item without scrolling.
    pub fn preferred_size(&self, model_size: usize) -> Size {
        let main = if model_size == 0 {
            0
        } else {
            self.total_extent(model_size) as i32
        };
        let cross = self
            .cross(self.element_size)
            .max(self.cross(self.selected_element_size));
        match self.orientation {
            Axis::Vertical => Size::new(cross, main),
            Axis::Horizontal => Size::new(main, cross),
        }
    }
}

#[cfg(test)]
#[path = "tests/viewport_tests.rs"]
mod tests;
