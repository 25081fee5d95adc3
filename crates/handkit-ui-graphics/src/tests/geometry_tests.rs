use super::*;
use crate::Color;

#[test]
fn contains_includes_right_and_bottom_edges() {
    let rect = Rect::new(10, 10, 20, 5);
    assert!(rect.contains(10, 10));
    assert!(rect.contains(30, 15));
    assert!(!rect.contains(31, 15));
    assert!(!rect.contains(9, 12));
}

#[test]
fn touching_rectangles_do_not_intersect() {
    let a = Rect::new(0, 0, 10, 10);
    let b = Rect::new(10, 0, 10, 10);
    assert!(!a.intersects(&b));
    assert!(a.intersects(&Rect::new(9, 9, 5, 5)));
}

#[test]
fn empty_rectangles_never_intersect() {
    let a = Rect::new(0, 0, 10, 10);
    assert!(!a.intersects(&Rect::new(2, 2, 0, 4)));
    assert!(!a.intersects(&Rect::new(2, 2, 4, -1)));
}

#[test]
fn intersects_survives_coordinates_near_the_limit() {
    let far = Rect::new(i32::MAX - 5, 0, 10, 10);
    let near = Rect::new(0, 0, 10, 10);
    assert!(!far.intersects(&near));
    assert!(far.intersects(&Rect::new(i32::MAX - 2, 5, 1, 1)));
}

#[test]
fn intersection_is_clamped_for_disjoint_boxes() {
    let a = Rect::new(0, 0, 10, 10);
    assert_eq!(a.intersection(&Rect::new(5, 5, 10, 10)), Rect::new(5, 5, 5, 5));
    let disjoint = a.intersection(&Rect::new(50, 50, 5, 5));
    assert_eq!(disjoint.width, 0);
    assert_eq!(disjoint.height, 0);
}

#[test]
fn deflate_and_inflate_are_symmetric() {
    let insets = EdgeInsets::from_components(1, 2, 3, 4);
    let rect = Rect::new(0, 0, 100, 50).deflate(insets);
    assert_eq!(rect, Rect::new(1, 2, 96, 44));
    assert_eq!(rect.size().inflate(insets), Size::new(100, 50));
    assert_eq!(insets.mirrored().left, 3);
}

#[test]
fn color_displays_as_unpadded_hex() {
    assert_eq!(Color(0x112233).to_string(), "112233");
    assert_eq!(Color::GREEN.to_string(), "ff00");
    assert_eq!(Color::from_bits(-1).argb(), 0xFFFF_FFFF);
}
