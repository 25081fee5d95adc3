//! Border layout: four edge regions around a center

use handkit_ui_graphics::{Rect, Size};

use crate::{Component, ComponentId, Layout, LayoutConstraint, LayoutError, LayoutParent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderPosition {
    North,
    South,
    /// Trailing edge; the right side unless the parent is right-to-left.
    East,
    /// Leading edge; the left side unless the parent is right-to-left.
    West,
    Center,
}

impl BorderPosition {
    const ALL: [BorderPosition; 5] = [
        BorderPosition::North,
        BorderPosition::South,
        BorderPosition::East,
        BorderPosition::West,
        BorderPosition::Center,
    ];

    fn slot(self) -> usize {
        match self {
            BorderPosition::North => 0,
            BorderPosition::South => 1,
            BorderPosition::East => 2,
            BorderPosition::West => 3,
            BorderPosition::Center => 4,
        }
    }
}

/// North and south span the full width at their preferred height, east and
/// west take their preferred width between them, and the center receives
/// whatever remains. Mirrored parents swap east and west.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BorderLayout {
    regions: [Option<ComponentId>; 5],
}

impl BorderLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn component_in(&self, position: BorderPosition) -> Option<ComponentId> {
        self.regions[position.slot()]
    }

    fn position_of(&self, child: ComponentId) -> Option<BorderPosition> {
        BorderPosition::ALL
            .into_iter()
            .find(|position| self.regions[position.slot()] == Some(child))
    }

    fn region<'a>(
        &self,
        position: BorderPosition,
        children: &'a [Component],
    ) -> Option<&'a Component> {
        let id = self.component_in(position)?;
        children.iter().find(|child| child.id() == id)
    }

    fn region_size(&self, position: BorderPosition, children: &[Component]) -> Size {
        self.region(position, children)
            .map(Component::outer_preferred_size)
            .unwrap_or(Size::ZERO)
    }
}

impl Layout for BorderLayout {
    fn layout_container(&self, parent: &LayoutParent, children: &mut [Component]) {
        let padding = parent.directional_padding();
        let mut top = padding.top;
        let mut bottom = parent.height - padding.bottom;
        let mut left = padding.left;
        let mut right = parent.width - padding.right;

        let mut placed = Vec::with_capacity(5);

        // Edges first: each one shrinks the box left for the next.
        for position in BorderPosition::ALL {
            let Some(child) = self.region(position, children) else {
                continue;
            };
            let margin = child.directional_margin(parent.rtl);
            let preferred = child.preferred_size();
            let bounds = match position {
                BorderPosition::North => {
                    let bounds = Rect::new(
                        left + margin.left,
                        top + margin.top,
                        right - left - margin.horizontal_sum(),
                        preferred.height,
                    );
                    top += preferred.height + margin.vertical_sum();
                    bounds
                }
                BorderPosition::South => {
                    let bounds = Rect::new(
                        left + margin.left,
                        bottom - margin.bottom - preferred.height,
                        right - left - margin.horizontal_sum(),
                        preferred.height,
                    );
                    bottom -= preferred.height + margin.vertical_sum();
                    bounds
                }
                BorderPosition::East => {
                    let bounds = Rect::new(
                        right - margin.right - preferred.width,
                        top + margin.top,
                        preferred.width,
                        bottom - top - margin.vertical_sum(),
                    );
                    right -= preferred.width + margin.horizontal_sum();
                    bounds
                }
                BorderPosition::West => {
                    let bounds = Rect::new(
                        left + margin.left,
                        top + margin.top,
                        preferred.width,
                        bottom - top - margin.vertical_sum(),
                    );
                    left += preferred.width + margin.horizontal_sum();
                    bounds
                }
                BorderPosition::Center => Rect::new(
                    left + margin.left,
                    top + margin.top,
                    right - left - margin.horizontal_sum(),
                    bottom - top - margin.vertical_sum(),
                ),
            };
            placed.push((child.id(), bounds));
        }

        for (id, mut bounds) in placed {
            bounds.x = parent.mirror_x(bounds.x, bounds.width);
            if let Some(child) = children.iter_mut().find(|child| child.id() == id) {
                child.set_bounds(bounds);
            }
        }
    }

    fn preferred_size(&self, parent: &LayoutParent, children: &[Component]) -> Size {
        let north = self.region_size(BorderPosition::North, children);
        let south = self.region_size(BorderPosition::South, children);
        let east = self.region_size(BorderPosition::East, children);
        let west = self.region_size(BorderPosition::West, children);
        let center = self.region_size(BorderPosition::Center, children);

        let middle_width = west.width + center.width + east.width;
        let middle_height = west.height.max(center.height).max(east.height);
        Size::new(
            north.width.max(south.width).max(middle_width),
            north.height + south.height + middle_height,
        )
        .inflate(parent.padding)
    }

    fn add_constraint(
        &mut self,
        child: ComponentId,
        constraint: LayoutConstraint,
    ) -> Result<(), LayoutError> {
        let position = match constraint {
            LayoutConstraint::Border(position) => position,
            LayoutConstraint::None => {
                return Err(LayoutError::MissingConstraint {
                    layout: self.name(),
                })
            }
            other => {
                return Err(LayoutError::ConstraintMismatch {
                    layout: self.name(),
                    constraint: other,
                })
            }
        };
        let slot = &mut self.regions[position.slot()];
        if slot.is_some() {
            return Err(LayoutError::RegionOccupied(position));
        }
        *slot = Some(child);
        Ok(())
    }

    fn remove_constraint(&mut self, child: ComponentId) {
        for slot in self.regions.iter_mut() {
            if *slot == Some(child) {
                *slot = None;
            }
        }
    }

    fn constraint_of(&self, child: ComponentId) -> Option<LayoutConstraint> {
        self.position_of(child).map(LayoutConstraint::Border)
    }

    fn name(&self) -> &'static str {
        "border"
    }
}

#[cfg(test)]
#[path = "tests/border_tests.rs"]
mod tests;
