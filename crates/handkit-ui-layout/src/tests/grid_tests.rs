use super::*;
use crate::{ComponentId, Container};

fn filled(rtl: bool, count: u32) -> Container {
    let mut container = Container::new(GridLayout::new(2, 2))
        .with_bounds(Rect::new(0, 0, 100, 60))
        .with_rtl(rtl);
    for id in 0..count {
        container
            .add(Component::leaf(ComponentId(id), Size::new(10, 10)))
            .unwrap();
    }
    container
}

#[test]
fn cells_fill_row_by_row() {
    let mut container = filled(false, 4);
    container.layout();
    let bounds: Vec<Rect> = container.components().iter().map(Component::bounds).collect();
    assert_eq!(
        bounds,
        vec![
            Rect::new(0, 0, 50, 30),
            Rect::new(50, 0, 50, 30),
            Rect::new(0, 30, 50, 30),
            Rect::new(50, 30, 50, 30),
        ]
    );
}

#[test]
fn extra_children_add_rows() {
    let mut container = filled(false, 5);
    container.layout();
    assert_eq!(
        container.components()[4].bounds(),
        Rect::new(0, 40, 50, 20)
    );
    assert_eq!(container.preferred_size(), Size::new(20, 30));
}

#[test]
fn right_to_left_mirrors_columns() {
    let mut container = filled(true, 2);
    container.layout();
    assert_eq!(container.components()[0].bounds().x, 50);
    assert_eq!(container.components()[1].bounds().x, 0);
}

#[test]
fn grid_takes_no_constraints() {
    let mut container = filled(false, 0);
    let err = container
        .add_with(
            Component::leaf(ComponentId(1), Size::new(1, 1)),
            crate::TableConstraint::at(0, 0),
        )
        .unwrap_err();
    assert!(matches!(err, crate::LayoutError::ConstraintMismatch { layout: "grid", .. }));
}
