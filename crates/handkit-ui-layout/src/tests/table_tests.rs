use super::*;
use crate::{BorderPosition, Container};
use handkit_ui_graphics::EdgeInsets;

fn leaf(id: u32, width: i32, height: i32) -> Component {
    Component::leaf(ComponentId(id), Size::new(width, height))
}

fn bounds_of(container: &Container, id: u32) -> Rect {
    container
        .component(ComponentId(id))
        .expect("component present")
        .bounds()
}

#[test]
fn spanning_header_above_two_columns() {
    let mut container =
        Container::new(TableLayout::new(2, 2)).with_bounds(Rect::new(0, 0, 100, 40));
    container
        .add_with(leaf(1, 100, 20), TableConstraint::at(0, 0).with_span(1, 2))
        .unwrap();
    container
        .add_with(leaf(2, 40, 20), TableConstraint::at(1, 0))
        .unwrap();
    container
        .add_with(leaf(3, 60, 20), TableConstraint::at(1, 1))
        .unwrap();

    container.layout();

    assert_eq!(bounds_of(&container, 1), Rect::new(0, 0, 100, 20));
    assert_eq!(bounds_of(&container, 2), Rect::new(0, 20, 40, 20));
    assert_eq!(bounds_of(&container, 3), Rect::new(40, 20, 60, 20));
}

#[test]
fn span_covers_every_cell_with_one_primary() {
    let mut table = TableLayout::new(3, 3);
    table
        .add_constraint(
            ComponentId(7),
            TableConstraint::at(1, 0).with_span(2, 3).into(),
        )
        .unwrap();

    let mut primaries = 0;
    for row in 1..3 {
        for column in 0..3 {
            let cell = table.cell(row, column).unwrap();
            assert_ne!(cell, TableCell::Empty);
            assert_eq!(cell.owner(), Some(ComponentId(7)));
            if cell == TableCell::Primary(ComponentId(7)) {
                primaries += 1;
            }
        }
    }
    assert_eq!(primaries, 1);
    assert_eq!(table.cell(0, 0), Some(TableCell::Empty));
}

#[test]
fn occupied_cell_is_a_conflict() {
    let mut table = TableLayout::new(2, 2);
    table
        .add_constraint(ComponentId(1), TableConstraint::at(0, 1).into())
        .unwrap();
    let err = table
        .add_constraint(ComponentId(2), TableConstraint::at(0, 1).into())
        .unwrap_err();
    assert_eq!(err, LayoutError::CellOccupied { row: 0, column: 1 });
    assert!(err.is_conflict());
}

#[test]
fn span_into_occupied_cell_leaves_grid_untouched() {
    let mut table = TableLayout::new(2, 2);
    table
        .add_constraint(ComponentId(1), TableConstraint::at(1, 1).into())
        .unwrap();
    let err = table
        .add_constraint(
            ComponentId(2),
            TableConstraint::at(0, 0).with_span(2, 2).into(),
        )
        .unwrap_err();
    assert_eq!(err, LayoutError::CellOccupied { row: 1, column: 1 });
    assert_eq!(table.cell(0, 0), Some(TableCell::Empty));
    assert_eq!(table.cell(0, 1), Some(TableCell::Empty));
    assert!(table.constraint_of(ComponentId(2)).is_none());
}

#[test]
fn oversized_span_is_rejected() {
    let mut table = TableLayout::new(2, 2);
    let err = table
        .add_constraint(
            ComponentId(1),
            TableConstraint::at(1, 1).with_span(1, 2).into(),
        )
        .unwrap_err();
    assert!(matches!(err, LayoutError::SpanOutOfBounds { .. }));
    assert!((0..2).all(|r| (0..2).all(|c| table.cell(r, c) == Some(TableCell::Empty))));

    let err = table
        .add_constraint(
            ComponentId(1),
            TableConstraint::at(0, 0).with_span(0, 1).into(),
        )
        .unwrap_err();
    assert!(matches!(err, LayoutError::InvalidSpan { .. }));

    let err = table
        .add_constraint(ComponentId(1), TableConstraint::at(5, 0).into())
        .unwrap_err();
    assert!(matches!(err, LayoutError::CellOutOfBounds { .. }));
}

#[test]
fn column_widths_leave_room_for_trailing_columns() {
    let mut container =
        Container::new(TableLayout::new(1, 3)).with_bounds(Rect::new(0, 0, 100, 20));
    for id in 0..3 {
        container.add(leaf(id, 80, 20)).unwrap();
    }
    container.layout();

    let widths: Vec<i32> = (0..3).map(|id| bounds_of(&container, id).width).collect();
    assert_eq!(widths, vec![80, 10, 10]);

    // Every prefix leaves the minimum for each column after it.
    let mut sum = 0;
    for (index, width) in widths.iter().enumerate() {
        sum += width;
        assert!(sum <= 100 - 10 * (widths.len() - index - 1) as i32);
    }
}

#[test]
fn minimum_column_width_comes_from_config() {
    let config = LayoutConfig {
        min_column_width: 30,
        ..LayoutConfig::default()
    };
    let mut container = Container::new(TableLayout::with_config(1, 2, config))
        .with_bounds(Rect::new(0, 0, 100, 20));
    container.add(leaf(0, 90, 20)).unwrap();
    container.add(leaf(1, 90, 20)).unwrap();
    container.layout();

    assert_eq!(bounds_of(&container, 0).width, 70);
    assert_eq!(bounds_of(&container, 1).width, 30);
}

#[test]
fn scrollable_and_rigid_columns_keep_natural_width() {
    let mut scrolling = Container::new(TableLayout::new(1, 2))
        .with_bounds(Rect::new(0, 0, 100, 20))
        .with_scrollable(true, false);
    scrolling.add(leaf(0, 90, 20)).unwrap();
    scrolling.add(leaf(1, 90, 20)).unwrap();
    scrolling.layout();
    assert_eq!(bounds_of(&scrolling, 1), Rect::new(90, 0, 90, 20));

    let mut rigid = Container::new(TableLayout::new(1, 2)).with_bounds(Rect::new(0, 0, 100, 20));
    rigid
        .layout_kind_mut()
        .as_table_mut()
        .unwrap()
        .set_rigid_column(0, true);
    rigid.add(leaf(0, 150, 20)).unwrap();
    rigid.add(leaf(1, 20, 20)).unwrap();
    rigid.layout();
    assert_eq!(bounds_of(&rigid, 0).width, 150);
    assert_eq!(bounds_of(&rigid, 1).width, 0);
}

#[test]
fn percentage_width_uses_content_width() {
    let mut container = Container::new(TableLayout::new(1, 2))
        .with_bounds(Rect::new(0, 0, 210, 20))
        .with_padding(EdgeInsets::symmetric(5, 0));
    container
        .add_with(leaf(0, 10, 20), TableConstraint::new().with_width_percent(50))
        .unwrap();
    container.add(leaf(1, 30, 20)).unwrap();
    container.layout();

    assert_eq!(bounds_of(&container, 0), Rect::new(5, 0, 100, 20));
    assert_eq!(bounds_of(&container, 1), Rect::new(105, 0, 30, 20));
}

#[test]
fn huge_percentage_saturates_instead_of_wrapping() {
    assert_eq!(percent_of(u32::MAX, 1_000), i32::MAX);
    assert_eq!(percent_of(150, 200), 300);

    let mut container =
        Container::new(TableLayout::new(1, 2)).with_bounds(Rect::new(0, 0, 200, 20));
    container
        .add_with(
            leaf(0, 10, 20),
            TableConstraint::new().with_width_percent(u32::MAX),
        )
        .unwrap();
    container.add(leaf(1, 30, 20)).unwrap();
    container.layout();

    assert_eq!(bounds_of(&container, 0), Rect::new(0, 0, 190, 20));
    assert_eq!(bounds_of(&container, 1), Rect::new(190, 0, 10, 20));
}

#[test]
fn right_to_left_mirrors_columns_only() {
    let mut container = Container::new(TableLayout::new(2, 2))
        .with_bounds(Rect::new(0, 0, 100, 40))
        .with_rtl(true);
    container.add(leaf(0, 40, 20)).unwrap();
    container.add(leaf(1, 60, 20)).unwrap();
    container
        .add_with(leaf(2, 100, 20), TableConstraint::new().with_span(1, 2))
        .unwrap();
    container.layout();

    assert_eq!(bounds_of(&container, 0), Rect::new(60, 0, 40, 20));
    assert_eq!(bounds_of(&container, 1), Rect::new(0, 0, 60, 20));
    assert_eq!(bounds_of(&container, 2), Rect::new(0, 20, 100, 20));
}

#[test]
fn margins_shrink_the_cell_box() {
    let mut container =
        Container::new(TableLayout::new(1, 1)).with_bounds(Rect::new(0, 0, 100, 40));
    container
        .add(leaf(0, 50, 20).with_margin(EdgeInsets::from_components(2, 3, 4, 5)))
        .unwrap();
    container.layout();

    // Column is 56 wide (50 + margins), row 28 high (20 + margins).
    assert_eq!(bounds_of(&container, 0), Rect::new(2, 3, 50, 20));
}

#[test]
fn automatic_placement_follows_reading_order() {
    let mut table = TableLayout::new(2, 2);
    for id in 0..3 {
        table
            .add_constraint(ComponentId(id), LayoutConstraint::None)
            .unwrap();
    }
    assert_eq!(table.component_at(0, 0), Some(ComponentId(0)));
    assert_eq!(table.component_at(0, 1), Some(ComponentId(1)));
    assert_eq!(table.component_at(1, 0), Some(ComponentId(2)));
    assert_eq!(table.next_free_cell(), Some((1, 1)));

    table
        .add_constraint(ComponentId(3), LayoutConstraint::None)
        .unwrap();
    assert_eq!(table.next_free_cell(), None);
    assert_eq!(
        table.add_constraint(ComponentId(4), LayoutConstraint::None),
        Err(LayoutError::TableFull)
    );

    table.remove_constraint(ComponentId(1));
    assert_eq!(table.next_free_cell(), Some((0, 1)));
}

#[test]
fn removing_a_spanning_child_clears_its_markers() {
    let mut table = TableLayout::new(2, 2);
    table
        .add_constraint(
            ComponentId(1),
            TableConstraint::at(0, 0).with_span(2, 2).into(),
        )
        .unwrap();
    table.remove_constraint(ComponentId(1));
    assert!((0..2).all(|r| (0..2).all(|c| table.cell(r, c) == Some(TableCell::Empty))));
}

#[test]
fn preferred_size_sums_natural_tracks() {
    let mut container =
        Container::new(TableLayout::new(2, 2)).with_padding(EdgeInsets::uniform(5));
    container
        .add_with(leaf(0, 10, 20), TableConstraint::at(0, 0).with_width_percent(90))
        .unwrap();
    container.add_with(leaf(1, 60, 25), TableConstraint::at(0, 1)).unwrap();
    container.add_with(leaf(2, 40, 20), TableConstraint::at(1, 0)).unwrap();

    assert_eq!(container.preferred_size(), Size::new(40 + 60 + 10, 25 + 20 + 10));
}

#[test]
fn default_percentages_apply_to_unset_constraints() {
    let config = LayoutConfig {
        default_column_width_percent: Some(25),
        ..LayoutConfig::default()
    };
    let mut table = TableLayout::with_config(1, 2, config);
    table
        .add_constraint(ComponentId(0), LayoutConstraint::None)
        .unwrap();
    let Some(LayoutConstraint::Table(constraint)) = table.constraint_of(ComponentId(0)) else {
        panic!("table constraint expected");
    };
    assert_eq!(constraint.width_percent, Some(25));
    assert_eq!((constraint.row, constraint.column), (Some(0), Some(0)));
}

#[test]
fn border_constraints_are_refused() {
    let mut table = TableLayout::new(1, 1);
    let err = table
        .add_constraint(ComponentId(0), BorderPosition::North.into())
        .unwrap_err();
    assert!(matches!(
        err,
        LayoutError::ConstraintMismatch { layout: "table", .. }
    ));
}
