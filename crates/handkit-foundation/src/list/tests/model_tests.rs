use super::*;
use std::cell::RefCell;
use std::rc::Rc;

fn recorded(model: &mut DefaultListModel<&'static str>) -> Rc<RefCell<Vec<ListEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    model.subscribe(Box::new(move |event| sink.borrow_mut().push(*event)));
    events
}

#[test]
fn from_items_selects_first() {
    let model = DefaultListModel::from_items(["a", "b"]);
    assert_eq!(model.selected_index(), Some(0));
    assert_eq!(model.size(), 2);
    assert_eq!(model.item_at(1), Some(&"b"));
    assert_eq!(model.item_at(2), None);

    let empty: DefaultListModel<u8> = DefaultListModel::from_items([]);
    assert_eq!(empty.selected_index(), None);
    assert!(empty.is_empty());
}

#[test]
fn first_added_item_becomes_selection() {
    let mut model = DefaultListModel::new();
    let events = recorded(&mut model);
    model.add_item("a");
    model.add_item("b");
    assert_eq!(model.selected_index(), Some(0));
    assert_eq!(
        *events.borrow(),
        vec![
            ListEvent::ItemAdded(0),
            ListEvent::SelectionChanged {
                old: None,
                new: Some(0)
            },
            ListEvent::ItemAdded(1),
        ]
    );
}

#[test]
fn selection_is_clamped() {
    let mut model = DefaultListModel::from_items(["a", "b", "c"]);
    model.set_selected_index(Some(10));
    assert_eq!(model.selected_index(), Some(2));

    let mut empty: DefaultListModel<&str> = DefaultListModel::new();
    empty.set_selected_index(Some(3));
    assert_eq!(empty.selected_index(), None);
}

#[test]
fn removing_last_item_clamps_selection() {
    let mut model = DefaultListModel::from_items(["a", "b", "c"]);
    model.set_selected_index(Some(2));
    let events = recorded(&mut model);

    assert_eq!(model.remove_item(2), Some("c"));
    assert_eq!(model.selected_index(), Some(1));
    assert_eq!(
        *events.borrow(),
        vec![
            ListEvent::ItemRemoved(2),
            ListEvent::SelectionChanged {
                old: Some(2),
                new: Some(1)
            },
        ]
    );
    assert_eq!(model.remove_item(7), None);
}

#[test]
fn removing_before_selection_keeps_selected_item() {
    let mut model = DefaultListModel::from_items(["a", "b", "c"]);
    model.set_selected_index(Some(2));
    model.remove_item(0);
    assert_eq!(model.selected_index(), Some(1));
    assert_eq!(model.item_at(1), Some(&"c"));
}

#[test]
fn emptying_the_model_clears_selection() {
    let mut model = DefaultListModel::from_items(["a"]);
    model.remove_item(0);
    assert_eq!(model.selected_index(), None);

    let mut model = DefaultListModel::from_items(["a", "b"]);
    let events = recorded(&mut model);
    model.clear();
    assert_eq!(model.selected_index(), None);
    assert_eq!(events.borrow().len(), 3);
}

#[test]
fn insert_keeps_selected_item() {
    let mut model = DefaultListModel::from_items(["a", "b"]);
    model.set_selected_index(Some(1));
    model.insert_item(0, "z");
    assert_eq!(model.selected_index(), Some(2));
    assert_eq!(model.items(), &["z", "a", "b"]);

    model.insert_item(99, "end");
    assert_eq!(model.item_at(3), Some(&"end"));
    assert_eq!(model.selected_index(), Some(2));
}

#[test]
fn replace_reports_change() {
    let mut model = DefaultListModel::from_items(["a", "b"]);
    let events = recorded(&mut model);
    assert_eq!(model.replace_item(1, "B"), Some("b"));
    assert_eq!(model.replace_item(5, "x"), None);
    assert_eq!(*events.borrow(), vec![ListEvent::ItemChanged(1)]);
}

#[test]
fn unchanged_selection_is_silent() {
    let mut model = DefaultListModel::from_items(["a", "b"]);
    let events = recorded(&mut model);
    model.set_selected_index(Some(0));
    assert!(events.borrow().is_empty());
}

#[test]
fn unsubscribe_stops_delivery() {
    let mut model = DefaultListModel::from_items(["a", "b"]);
    let count = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&count);
    let id = model.subscribe(Box::new(move |_| *sink.borrow_mut() += 1));

    model.set_selected_index(Some(1));
    assert!(model.unsubscribe(id));
    assert!(!model.unsubscribe(id));
    model.set_selected_index(Some(0));
    assert_eq!(*count.borrow(), 1);
}
