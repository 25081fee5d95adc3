use handkit_animation::MotionCurve;

/// Construction-time settings for a [`ListView`](crate::ListView).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ListConfig {
    /// Pixels between consecutive items along the scroll axis.
    pub item_gap: i32,
    /// Duration of the slide after a selection change in fixed modes.
    pub animation_duration_ms: u64,
    pub motion: MotionCurve,
    /// When false, fixed-mode selection changes jump without sliding.
    pub smooth_scrolling: bool,
    /// Pointer travel, in pixels, before a press becomes a drag.
    pub drag_threshold: i32,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            item_gap: 2,
            animation_duration_ms: 250,
            motion: MotionCurve::Spline,
            smooth_scrolling: true,
            drag_threshold: 4,
        }
    }
}
