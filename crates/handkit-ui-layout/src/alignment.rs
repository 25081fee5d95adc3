//! Alignment of a run of children inside the space left over on a line

/// Alignment along the horizontal axis, expressed in reading order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HorizontalAlignment {
    /// Align children to the leading edge.
    #[default]
    Start,
    /// Align children to the horizontal center.
    CenterHorizontally,
    /// Align children to the trailing edge.
    End,
}

impl HorizontalAlignment {
    /// Computes the horizontal offset for a run of width `child`.
    pub fn align(&self, available: i32, child: i32) -> i32 {
        match self {
            HorizontalAlignment::Start => 0,
            HorizontalAlignment::CenterHorizontally => ((available - child) / 2).max(0),
            HorizontalAlignment::End => (available - child).max(0),
        }
    }
}

/// Alignment along the vertical axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VerticalAlignment {
    Top,
    #[default]
    CenterVertically,
    Bottom,
}

impl VerticalAlignment {
    /// Computes the vertical offset for a child of height `child`.
    pub fn align(&self, available: i32, child: i32) -> i32 {
        match self {
            VerticalAlignment::Top => 0,
            VerticalAlignment::CenterVertically => ((available - child) / 2).max(0),
            VerticalAlignment::Bottom => (available - child).max(0),
        }
    }
}
