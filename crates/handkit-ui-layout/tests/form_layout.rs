use handkit_ui_graphics::{EdgeInsets, Rect, Size};
use handkit_ui_layout::prelude::*;

fn leaf(id: u32, width: i32, height: i32) -> Component {
    Component::leaf(ComponentId(id), Size::new(width, height))
}

/// Title bar on top, a two-column label/field table in the middle and a
/// button row at the bottom.
fn login_form(rtl: bool) -> Container {
    let mut fields = Container::new(TableLayout::new(3, 2)).with_padding(EdgeInsets::uniform(2));
    fields.add(leaf(10, 60, 16)).unwrap();
    fields.add(leaf(11, 150, 16)).unwrap();
    fields.add(leaf(12, 70, 16)).unwrap();
    fields.add(leaf(13, 150, 16)).unwrap();
    fields
        .add_with(leaf(14, 120, 12), TableConstraint::new().with_span(1, 2))
        .unwrap();

    let mut buttons =
        Container::new(FlowLayout::with_alignment(HorizontalAlignment::End));
    buttons.add(leaf(20, 50, 20)).unwrap();
    buttons.add(leaf(21, 50, 20)).unwrap();

    let mut form = Container::new(BorderLayout::new())
        .with_bounds(Rect::new(0, 0, 240, 120))
        .with_rtl(rtl);
    form.add_with(leaf(1, 240, 18), BorderPosition::North)
        .unwrap();
    form.add_with(Component::container(ComponentId(2), fields), BorderPosition::Center)
        .unwrap();
    form.add_with(Component::container(ComponentId(3), buttons), BorderPosition::South)
        .unwrap();
    form
}

fn nested_bounds(form: &Container, container: u32, child: u32) -> Rect {
    form.component(ComponentId(container))
        .and_then(Component::as_container)
        .and_then(|nested| nested.component(ComponentId(child)))
        .map(Component::bounds)
        .expect("nested child")
}

#[test]
fn form_lays_out_every_level() {
    let mut form = login_form(false);
    form.layout();

    assert_eq!(
        form.component(ComponentId(2)).unwrap().bounds(),
        Rect::new(0, 18, 240, 82)
    );
    // Label column takes the widest label, the field column gets the rest.
    assert_eq!(nested_bounds(&form, 2, 12), Rect::new(2, 18, 70, 16));
    assert_eq!(nested_bounds(&form, 2, 13), Rect::new(72, 18, 150, 16));
    // The hint spans both columns.
    assert_eq!(nested_bounds(&form, 2, 14), Rect::new(2, 34, 220, 12));
    // Buttons hug the trailing edge.
    assert_eq!(nested_bounds(&form, 3, 21), Rect::new(190, 0, 50, 20));
}

#[test]
fn mirrored_form_flips_columns_and_buttons() {
    let mut form = login_form(true);
    form.layout();

    let fields = form.component(ComponentId(2)).unwrap().bounds();
    assert_eq!(fields, Rect::new(0, 18, 240, 82));
    assert_eq!(nested_bounds(&form, 2, 12), Rect::new(168, 18, 70, 16));
    assert_eq!(nested_bounds(&form, 2, 13), Rect::new(18, 18, 150, 16));
    assert_eq!(nested_bounds(&form, 3, 20), Rect::new(50, 0, 50, 20));
    assert_eq!(nested_bounds(&form, 3, 21), Rect::new(0, 0, 50, 20));
    assert_eq!(form.component_at(200, 10), Some(ComponentId(1)));
    assert_eq!(form.component_at(100, 38), Some(ComponentId(13)));
}
