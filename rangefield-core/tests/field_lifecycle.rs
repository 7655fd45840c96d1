//! End-to-end lifecycle of a range field against the in-memory host.

use std::cell::RefCell;
use std::rc::Rc;

use rangefield_core::{
    AutovalidateMode, DisplayPolicy, DisplaySlot, FieldHost, FixedFormat, Form, FormFieldState,
    RangeField, RangeValue, SliderConfig, Thumb,
};

#[test]
fn unit_range_renders_min_current_max() {
    let mut field = RangeField::new("r", SliderConfig::new(0.0, 1.0));
    let mut state = field.create_state();
    field.initialize(&mut state);

    let value = field.value(&state);
    assert_eq!(value, RangeValue::new(0.0, 0.0));

    let slots = field.label_slots(value);
    let rendered: Vec<(DisplaySlot, &str)> = slots.iter().map(|s| (s.slot, s.text.as_str())).collect();
    assert_eq!(
        rendered,
        vec![
            (DisplaySlot::Min, "0"),
            (DisplaySlot::Current, "0 - 0"),
            (DisplaySlot::Max, "1"),
        ]
    );
}

#[test]
fn drag_updates_value_and_current_label() {
    let mut field = RangeField::new("r", SliderConfig::new(0.0, 1.0));
    let mut state = field.create_state();
    field.initialize(&mut state);

    field.begin_interaction(&mut state, Thumb::End);
    field.update_interaction(&mut state, 0.8);
    field.end_interaction(&mut state);
    field.begin_interaction(&mut state, Thumb::Start);
    field.update_interaction(&mut state, 0.2);
    field.end_interaction(&mut state);

    assert_eq!(state.value(), Some(RangeValue::new(0.2, 0.8)));
    assert!(state.is_dirty());
    let current = field
        .label_slots(field.value(&state))
        .into_iter()
        .find(|s| s.slot == DisplaySlot::Current)
        .unwrap();
    assert_eq!(current.text, "0.2 - 0.8");
}

#[test]
fn min_max_slots_use_the_formatter() {
    let format = FixedFormat::new(2);
    let field = RangeField::new("r", SliderConfig::new(10.0, 100.0))
        .with_number_format(format)
        .with_display_values(DisplayPolicy::MinMax);

    let slots = field.label_slots(RangeValue::new(20.0, 30.0));
    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0].slot, DisplaySlot::Min);
    assert_eq!(slots[0].text, "10.00");
    assert_eq!(slots[1].slot, DisplaySlot::Max);
    assert_eq!(slots[1].text, "100.00");
}

#[test]
fn none_policy_renders_nothing() {
    let field = RangeField::new("r", SliderConfig::new(0.0, 1.0)).with_display_values(DisplayPolicy::None);
    assert!(field.label_slots(RangeValue::new(0.1, 0.2)).is_empty());
}

#[test]
fn disabled_field_never_notifies() {
    let changes = Rc::new(RefCell::new(0));
    let counter = changes.clone();
    let mut field = RangeField::new("r", SliderConfig::new(0.0, 1.0)).with_enabled(false);
    let mut state = field
        .create_state()
        .on_changed(Box::new(move |_| *counter.borrow_mut() += 1));
    field.initialize(&mut state);

    field.press(&mut state, 0.9);
    field.update_interaction(&mut state, 0.5);
    field.end_interaction(&mut state);
    field.step(&mut state, 5);
    field.handle_change(&mut state, RangeValue::new(0.2, 0.4));

    assert_eq!(*changes.borrow(), 0);
    assert_eq!(state.value(), Some(RangeValue::collapsed(0.0)));
}

#[test]
fn focus_request_only_when_configured() {
    let mut form = Form::new();
    form.register(RangeField::new("quiet", SliderConfig::new(0.0, 1.0)))
        .unwrap();
    form.register(RangeField::new("loud", SliderConfig::new(0.0, 1.0)).with_should_request_focus(true))
        .unwrap();
    form.initialize();

    form.with_entry(0, |field, state| field.handle_change(state, RangeValue::new(0.1, 0.2)));
    assert_eq!(form.focused(), None);

    form.with_entry(1, |field, state| field.handle_change(state, RangeValue::new(0.1, 0.2)));
    assert_eq!(form.focused(), Some(1));
}

#[test]
fn reset_after_edit_returns_to_defaults() {
    let saved = Rc::new(RefCell::new(Vec::new()));
    let sink = saved.clone();
    let mut field = RangeField::new("r", SliderConfig::new(0.0, 100.0).with_divisions(10))
        .with_autovalidate_mode(AutovalidateMode::OnUserInteraction)
        .with_validator(Box::new(|v| match v {
            Some(v) if v.end > 0.0 => None,
            _ => Some("pick a range".into()),
        }));
    let mut state: FormFieldState = field
        .create_state()
        .on_saved(Box::new(move |v| sink.borrow_mut().push(v.clone())));
    field.initialize(&mut state);

    field.toggle_thumb();
    field.step(&mut state, 3);
    assert_eq!(state.value(), Some(RangeValue::new(0.0, 30.0)));
    assert!(!state.has_error());

    state.save();
    assert_eq!(saved.borrow().len(), 1);

    state.reset();
    assert_eq!(state.value(), None);
    field.initialize(&mut state);
    assert_eq!(state.value(), Some(RangeValue::collapsed(0.0)));
    assert!(!state.is_dirty());
}

#[test]
fn inert_slider_holds_both_thumbs_on_min() {
    let mut field = RangeField::new("r", SliderConfig::new(5.0, 5.0));
    let mut state = field.create_state();
    field.initialize(&mut state);
    assert!(!field.step(&mut state, 10));
    field.press(&mut state, 42.0);
    field.end_interaction(&mut state);
    assert_eq!(state.value(), Some(RangeValue::collapsed(5.0)));
}
