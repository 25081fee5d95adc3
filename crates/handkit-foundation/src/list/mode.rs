/// How the selection moves relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FixedSelection {
    /// The list scrolls freely; the selection is only a highlight.
    #[default]
    None,
    /// Free scrolling, but navigating past either end wraps around.
    NoneCyclic,
    /// Free scrolling that keeps one neighbour of the selection visible.
    NoneEdgeMargin,
    /// The selected item is pinned to the leading edge.
    Lead,
    /// The selected item is pinned to the trailing edge.
    Trail,
    /// The selected item is pinned to the middle of the viewport.
    Center,
}

impl FixedSelection {
    /// Whether the selection is pinned and the items cycle around it.
    pub fn is_fixed(self) -> bool {
        matches!(
            self,
            FixedSelection::Lead | FixedSelection::Trail | FixedSelection::Center
        )
    }

    /// Whether keyboard navigation wraps past the ends of the list.
    pub fn wraps_navigation(self) -> bool {
        self.is_fixed() || self == FixedSelection::NoneCyclic
    }
}
