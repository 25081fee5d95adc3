use super::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::list::{FixedSelection, ListView, Navigation, NavigationOutcome};

fn recorded<T: RangeNumber>(model: &mut NumberRangeModel<T>) -> Rc<RefCell<Vec<ListEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    model.subscribe(Box::new(move |event| sink.borrow_mut().push(*event)));
    events
}

#[test]
fn integer_range_includes_both_ends() {
    let model = NumberRangeModel::new(0, 10, 4, 2);
    assert_eq!(model.size(), 6);
    assert_eq!(model.item_at(0), Some(&0));
    assert_eq!(model.item_at(5), Some(&10));
    assert_eq!(model.item_at(6), None);
    assert_eq!(model.selected_index(), Some(2));
    assert_eq!(model.value(), 4);
}

#[test]
fn max_off_the_step_grid_is_not_reachable() {
    let model = NumberRangeModel::new(1, 10, 10, 4);
    assert_eq!(model.size(), 3);
    assert_eq!(model.max(), 9);
    assert_eq!(model.value(), 9);
}

#[test]
fn fractional_steps_survive_rounding() {
    let model = NumberRangeModel::new(0.0, 0.3, 0.3, 0.1);
    assert_eq!(model.size(), 4);
    assert_eq!(model.selected_index(), Some(3));

    let quarters = NumberRangeModel::new(0.0f32, 1.0, 0.3, 0.25);
    assert_eq!(quarters.size(), 5);
    assert_eq!(quarters.value(), 0.25);
}

#[test]
fn degenerate_ranges_hold_only_min() {
    let zero_step = NumberRangeModel::new(5, 10, 7, 0);
    assert_eq!(zero_step.size(), 1);
    assert_eq!(zero_step.value(), 5);

    let inverted = NumberRangeModel::new(10, 5, 7, 1);
    assert_eq!(inverted.size(), 1);
    assert_eq!(inverted.value(), 10);

    let nan_step = NumberRangeModel::new(0.0, 1.0, 0.5, f64::NAN);
    assert_eq!(nan_step.size(), 1);
}

#[test]
fn selection_changes_are_reported_and_clamped() {
    let mut model = NumberRangeModel::new(0i64, 4, 0, 1);
    let events = recorded(&mut model);

    model.set_selected_index(Some(9));
    model.set_selected_index(None);
    model.set_selected_index(Some(4));
    model.set_value(-3);

    assert_eq!(model.value(), 0);
    assert_eq!(
        *events.borrow(),
        vec![
            ListEvent::SelectionChanged {
                old: Some(0),
                new: Some(4)
            },
            ListEvent::SelectionChanged {
                old: Some(4),
                new: Some(0)
            },
        ]
    );
}

#[test]
fn stepping_stops_at_either_end() {
    let mut model = NumberRangeModel::new(-2, 2, 0, 1);
    model.step_by(1);
    assert_eq!(model.value(), 1);
    model.step_by(10);
    assert_eq!(model.value(), 2);
    model.step_by(-10);
    assert_eq!(model.value(), -2);
}

#[test]
fn unsubscribed_listener_stays_quiet() {
    let mut model = NumberRangeModel::new(0, 3, 0, 1);
    let events = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&events);
    let id = model.subscribe(Box::new(move |_| *sink.borrow_mut() += 1));
    assert!(model.unsubscribe(id));
    assert!(!model.unsubscribe(id));
    model.set_value(2);
    assert_eq!(*events.borrow(), 0);
}

#[test]
fn spinner_list_wraps_past_the_last_value() {
    let mut model = NumberRangeModel::new(0, 10, 8, 2);
    let mut view = ListView::vertical(FixedSelection::Center);
    view.attach(&mut model);
    assert_eq!(view.model_size(), 6);

    let outcome = view.navigate(&mut model, Navigation::Next);
    assert_eq!(
        outcome,
        NavigationOutcome::Moved {
            selection: 5,
            scroll_to: None
        }
    );
    assert_eq!(model.value(), 10);

    view.navigate(&mut model, Navigation::Next);
    assert_eq!(model.value(), 0);
    assert_eq!(view.selection(), Some(0));
}
