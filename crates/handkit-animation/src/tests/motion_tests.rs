use super::*;
use crate::{Clock, FrameClock, ManualClock};

#[test]
fn linear_motion_moves_proportionally() {
    let mut motion = Motion::linear(0, 100, 200);
    assert_eq!(motion.value(), 0);
    motion.advance(50);
    assert_eq!(motion.value(), 25);
    motion.advance(100);
    assert_eq!(motion.value(), 75);
    motion.advance(50);
    assert!(motion.is_finished());
    assert_eq!(motion.value(), 100);
}

#[test]
fn linear_motion_never_overshoots_downwards() {
    let mut motion = Motion::linear(100, 0, 100);
    motion.advance(99);
    assert!(motion.value() >= 0);
    motion.advance(1000);
    assert_eq!(motion.value(), 0);
}

#[test]
fn spline_is_slow_at_both_ends() {
    let at = |elapsed| {
        let mut motion = Motion::spline(0, 128, 128);
        motion.advance(elapsed);
        motion.value()
    };

    assert_eq!(at(16), 4);
    assert_eq!(at(64), 64);
    assert_eq!(at(112), 124);
    assert_eq!(at(128), 128);
}

#[test]
fn spline_values_are_monotonic_in_both_directions() {
    for (source, destination) in [(0, 240), (240, 0)] {
        let mut motion = Motion::spline(source, destination, 250);
        let mut previous = motion.value();
        while !motion.is_finished() {
            motion.advance(16);
            let value = motion.value();
            if destination > source {
                assert!(value >= previous);
            } else {
                assert!(value <= previous);
            }
            previous = value;
        }
        assert_eq!(motion.value(), destination);
    }
}

#[test]
fn friction_motion_stops_where_velocity_runs_out() {
    let mut motion = Motion::friction(10, -2.0, 0.01);
    assert_eq!(motion.duration_ms(), 200);
    motion.advance(100);
    assert_eq!(motion.value(), 10 - 150);
    motion.advance(500);
    assert!(motion.is_finished());
    assert_eq!(motion.value(), 10 - 200);
    assert_eq!(motion.destination(), 10 - 200);
}

#[test]
fn eased_motion_hits_both_ends() {
    let mut motion = Motion::eased(0, 50, 100, Easing::EaseInOut);
    assert_eq!(motion.value(), 0);
    motion.advance(50);
    assert!((24..=26).contains(&motion.value()));
    motion.advance(50);
    assert_eq!(motion.value(), 50);
}

#[test]
fn frame_clock_reports_deltas() {
    let mut frames = FrameClock::new(ManualClock::new());
    assert_eq!(frames.next_frame(), 0);
    frames.clock().advance(16);
    assert_eq!(frames.next_frame(), 16);
    frames.clock().advance(40);
    frames.reset();
    assert_eq!(frames.next_frame(), 0);
    assert_eq!(frames.clock().now_millis(), 56);
}
