use super::*;
use crate::{BorderLayout, BorderPosition, FlowLayout};

fn leaf(id: u32, width: i32, height: i32) -> Component {
    Component::leaf(ComponentId(id), Size::new(width, height))
}

fn nested_tree() -> Container {
    let mut toolbar = Container::new(FlowLayout::new());
    toolbar.add(leaf(10, 30, 10)).unwrap();
    toolbar.add(leaf(11, 30, 10)).unwrap();

    let mut root = Container::new(BorderLayout::new()).with_bounds(Rect::new(0, 0, 200, 100));
    root.add_with(leaf(1, 10, 20), BorderPosition::North)
        .unwrap();
    root.add_with(Component::container(ComponentId(2), toolbar), BorderPosition::Center)
        .unwrap();
    root
}

#[test]
fn layout_recurses_into_nested_containers() {
    let mut root = nested_tree();
    root.layout();

    let center = root.component(ComponentId(2)).unwrap();
    assert_eq!(center.bounds(), Rect::new(0, 20, 200, 80));
    let toolbar = center.as_container().unwrap();
    assert_eq!(toolbar.bounds(), center.bounds());
    assert_eq!(
        toolbar.component(ComponentId(11)).unwrap().bounds(),
        Rect::new(30, 0, 30, 10)
    );
}

#[test]
fn component_at_finds_the_deepest_hit() {
    let mut root = nested_tree();
    root.layout();

    assert_eq!(root.component_at(35, 25), Some(ComponentId(11)));
    assert_eq!(root.component_at(100, 50), Some(ComponentId(2)));
    assert_eq!(root.component_at(5, 5), Some(ComponentId(1)));
    assert_eq!(root.component_at(300, 5), None);
}

#[test]
fn preferred_size_includes_nested_preferences() {
    let root = nested_tree();
    assert_eq!(root.preferred_size(), Size::new(60, 30));
}

#[test]
fn unsized_container_lays_out_at_preferred_size() {
    let mut row = Container::new(FlowLayout::new());
    row.add(leaf(0, 25, 5)).unwrap();
    row.add(leaf(1, 25, 5)).unwrap();
    assert_eq!(row.layout_width(), 50);
    assert_eq!(row.layout_height(), 5);

    row.layout();
    assert_eq!(row.components()[1].bounds(), Rect::new(25, 0, 25, 5));
}

#[test]
fn duplicate_and_unknown_children() {
    let mut root = nested_tree();
    let err = root
        .add_with(leaf(1, 1, 1), BorderPosition::South)
        .unwrap_err();
    assert_eq!(err, LayoutError::DuplicateComponent(ComponentId(1)));

    let err = root.remove(ComponentId(42)).unwrap_err();
    assert_eq!(err, LayoutError::UnknownComponent(ComponentId(42)));
    assert!(!err.is_conflict());

    let removed = root.remove(ComponentId(1)).unwrap();
    assert_eq!(removed.id(), ComponentId(1));
    assert_eq!(root.constraint_of(ComponentId(1)), None);
    assert_eq!(root.component_count(), 1);
}
