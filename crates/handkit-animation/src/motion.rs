//! Integer-valued motions driven by elapsed time

use crate::Easing;

/// Shape of a tween between two values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MotionCurve {
    Linear,
    /// Constant acceleration for the first half, constant deceleration for
    /// the second.
    #[default]
    Spline,
    Eased(Easing),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum MotionKind {
    Tween {
        curve: MotionCurve,
        destination: i32,
    },
    /// Decelerating from `velocity` (pixels per ms) by `friction` (pixels
    /// per ms squared) until it stops.
    Friction { velocity: f32, friction: f32 },
}

/// A value moving from a source over time.
///
/// The motion does not own a timer: callers feed it elapsed milliseconds
/// with [`Motion::advance`]. Once [`Motion::is_finished`] reports true the
/// value stays at the destination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    kind: MotionKind,
    source: i32,
    duration_ms: u64,
    elapsed_ms: u64,
}

impl Motion {
    pub fn tween(source: i32, destination: i32, duration_ms: u64, curve: MotionCurve) -> Self {
        Self {
            kind: MotionKind::Tween { curve, destination },
            source,
            duration_ms,
            elapsed_ms: 0,
        }
    }

    pub fn linear(source: i32, destination: i32, duration_ms: u64) -> Self {
        Self::tween(source, destination, duration_ms, MotionCurve::Linear)
    }

    pub fn spline(source: i32, destination: i32, duration_ms: u64) -> Self {
        Self::tween(source, destination, duration_ms, MotionCurve::Spline)
    }

    pub fn eased(source: i32, destination: i32, duration_ms: u64, easing: Easing) -> Self {
        Self::tween(source, destination, duration_ms, MotionCurve::Eased(easing))
    }

    /// A fling that starts at `velocity` and slows down by `friction` until
    /// it stops. A zero friction never stops.
    pub fn friction(source: i32, velocity: f32, friction: f32) -> Self {
        let duration_ms = if friction > 0.0 {
            (velocity.abs() / friction) as u64
        } else {
            u64::MAX
        };
        Self {
            kind: MotionKind::Friction { velocity, friction },
            source,
            duration_ms,
            elapsed_ms: 0,
        }
    }

    pub fn source(&self) -> i32 {
        self.source
    }

    /// Where the motion ends. Friction motions report where they will stop.
    pub fn destination(&self) -> i32 {
        match self.kind {
            MotionKind::Tween { destination, .. } => destination,
            MotionKind::Friction { .. } => self.friction_value(self.duration_ms),
        }
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn advance(&mut self, delta_ms: u64) {
        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms);
    }

    /// Restarts the motion from its source.
    pub fn restart(&mut self) {
        self.elapsed_ms = 0;
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }

    pub fn value(&self) -> i32 {
        match self.kind {
            MotionKind::Tween { curve, destination } => {
                if self.is_finished() {
                    return destination;
                }
                match curve {
                    MotionCurve::Linear => self.linear_value(destination),
                    MotionCurve::Spline => self.spline_value(destination),
                    MotionCurve::Eased(easing) => {
                        let fraction = self.elapsed_ms as f32 / self.duration_ms as f32;
                        let distance = (destination - self.source) as f32;
                        self.source + (easing.transform(fraction) * distance) as i32
                    }
                }
            }
            MotionKind::Friction { .. } => {
                self.friction_value(self.elapsed_ms.min(self.duration_ms))
            }
        }
    }

    fn linear_value(&self, destination: i32) -> i32 {
        let fraction = self.elapsed_ms as f32 / self.duration_ms as f32;
        let value = self.source + (fraction * (destination - self.source) as f32) as i32;
        if destination < self.source {
            value.max(destination)
        } else {
            value.min(destination)
        }
    }

    fn spline_value(&self, destination: i32) -> i32 {
        let total = self.duration_ms as f32;
        let center = total / 2.0;
        let distance = (destination - self.source).abs() as f32;
        let acceleration = distance / (center * center);
        let travelled = |time: f32| {
            if time > center {
                acceleration * (-center * center + 2.0 * center * time - time * time / 2.0)
            } else {
                acceleration * time * time / 2.0
            }
        };

        let now = (self.elapsed_ms as f32).min(total);
        if self.source < destination {
            self.source + travelled(now) as i32
        } else {
            // Run the curve backwards from the destination so a decreasing
            // motion decelerates into its end value as well.
            destination + travelled(total - now) as i32
        }
    }

    fn friction_value(&self, elapsed_ms: u64) -> i32 {
        let MotionKind::Friction { velocity, friction } = self.kind else {
            return self.source;
        };
        let time = elapsed_ms as f32;
        let distance = (velocity.abs() * time - friction * time * time / 2.0) as i32;
        if velocity < 0.0 {
            self.source - distance
        } else {
            self.source + distance
        }
    }
}

#[cfg(test)]
#[path = "tests/motion_tests.rs"]
mod tests;
