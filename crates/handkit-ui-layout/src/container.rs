//! Containers own their children and drive layout passes

use handkit_ui_graphics::{EdgeInsets, Rect, Size};

use crate::{
    Component, ComponentContent, ComponentId, LayoutConstraint, LayoutError, LayoutKind,
    LayoutParent,
};

/// A box that arranges child [`Component`]s with one [`LayoutKind`].
#[derive(Debug, Clone)]
pub struct Container {
    bounds: Rect,
    padding: EdgeInsets,
    rtl: bool,
    scrollable_x: bool,
    scrollable_y: bool,
    layout: LayoutKind,
    components: Vec<Component>,
}

impl Container {
    pub fn new(layout: impl Into<LayoutKind>) -> Self {
        Self {
            bounds: Rect::default(),
            padding: EdgeInsets::ZERO,
            rtl: false,
            scrollable_x: false,
            scrollable_y: false,
            layout: layout.into(),
            components: Vec::new(),
        }
    }

    pub fn with_padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_rtl(mut self, rtl: bool) -> Self {
        self.rtl = rtl;
        self
    }

    pub fn with_scrollable(mut self, scrollable_x: bool, scrollable_y: bool) -> Self {
        self.scrollable_x = scrollable_x;
        self.scrollable_y = scrollable_y;
        self
    }

    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn padding(&self) -> EdgeInsets {
        self.padding
    }

    pub fn is_rtl(&self) -> bool {
        self.rtl
    }

    pub fn set_rtl(&mut self, rtl: bool) {
        self.rtl = rtl;
    }

    pub fn layout_kind(&self) -> &LayoutKind {
        &self.layout
    }

    /// Layout-specific settings such as rigid table columns.
    pub fn layout_kind_mut(&mut self) -> &mut LayoutKind {
        &mut self.layout
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn component(&self, id: ComponentId) -> Option<&Component> {
        self.components.iter().find(|component| component.id() == id)
    }

    pub fn component_mut(&mut self, id: ComponentId) -> Option<&mut Component> {
        self.components
            .iter_mut()
            .find(|component| component.id() == id)
    }

    /// Adds a component with no explicit constraint. Table layouts place it in
    /// the next free cell; border layouts reject it.
    pub fn add(&mut self, component: Component) -> Result<(), LayoutError> {
        self.add_with(component, LayoutConstraint::None)
    }

    pub fn add_with(
        &mut self,
        component: Component,
        constraint: impl Into<LayoutConstraint>,
    ) -> Result<(), LayoutError> {
        let id = component.id();
        if self.component(id).is_some() {
            return Err(LayoutError::DuplicateComponent(id));
        }
        self.layout
            .as_layout_mut()
            .add_constraint(id, constraint.into())?;
        self.components.push(component);
        Ok(())
    }

    pub fn remove(&mut self, id: ComponentId) -> Result<Component, LayoutError> {
        let index = self
            .components
            .iter()
            .position(|component| component.id() == id)
            .ok_or(LayoutError::UnknownComponent(id))?;
        self.layout.as_layout_mut().remove_constraint(id);
        Ok(self.components.remove(index))
    }

    /// Detaches every child, releasing their constraints in the layout.
    pub fn remove_all(&mut self) -> Vec<Component> {
        let layout = self.layout.as_layout_mut();
        for component in &self.components {
            layout.remove_constraint(component.id());
        }
        std::mem::take(&mut self.components)
    }

    pub fn constraint_of(&self, id: ComponentId) -> Option<LayoutConstraint> {
        self.layout.as_layout().constraint_of(id)
    }

    fn measure_parent(&self) -> LayoutParent {
        LayoutParent {
            width: self.bounds.width,
            height: self.bounds.height,
            padding: self.padding,
            rtl: self.rtl,
            scrollable_x: self.scrollable_x,
            scrollable_y: self.scrollable_y,
        }
    }

    pub fn preferred_size(&self) -> Size {
        self.layout
            .as_layout()
            .preferred_size(&self.measure_parent(), &self.components)
    }

    /// Width handed to the layout: the preferred width when scrolling
    /// horizontally or when no width has been assigned yet.
    pub fn layout_width(&self) -> i32 {
        if self.scrollable_x {
            self.bounds.width.max(self.preferred_size().width)
        } else if self.bounds.width <= 0 {
            self.preferred_size().width
        } else {
            self.bounds.width
        }
    }

    pub fn layout_height(&self) -> i32 {
        if self.scrollable_y {
            self.bounds.height.max(self.preferred_size().height)
        } else if self.bounds.height <= 0 {
            self.preferred_size().height
        } else {
            self.bounds.height
        }
    }

    /// Lays out the direct children, then every nested container inside the
    /// bounds it was just given. Nested containers inherit the direction.
    pub fn layout(&mut self) {
        let parent = LayoutParent {
            width: self.layout_width(),
            height: self.layout_height(),
            ..self.measure_parent()
        };
        log::debug!(
            "{} layout of {} components in {}x{}",
            self.layout.as_layout().name(),
            self.components.len(),
            parent.width,
            parent.height
        );
        self.layout
            .as_layout()
            .layout_container(&parent, &mut self.components);

        let rtl = self.rtl;
        for component in self.components.iter_mut() {
            let bounds = component.bounds();
            if let Some(nested) = component.as_container_mut() {
                nested.set_rtl(rtl);
                nested.set_bounds(bounds);
                nested.layout();
            }
        }
    }

    /// The innermost component whose bounds contain the point, given in this
    /// container's coordinates. Later children win over earlier ones.
    pub fn component_at(&self, x: i32, y: i32) -> Option<ComponentId> {
        self.components
            .iter()
            .rev()
            .find(|component| component.bounds().contains(x, y))
            .map(|component| {
                let bounds = component.bounds();
                match component.content() {
                    ComponentContent::Container(nested) => nested
                        .component_at(x - bounds.x, y - bounds.y)
                        .unwrap_or(component.id()),
                    ComponentContent::Leaf { .. } => component.id(),
                }
            })
    }
}

#[cfg(test)]
#[path = "tests/container_tests.rs"]
mod tests;
