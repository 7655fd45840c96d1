//! Input dispatch: keyboard drives the focused field, the mouse drives
//! whichever track it lands on.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::app::{ActiveDrag, AppState};
use crate::ui::form_layout;
use crate::ui::widgets::{field_areas, value_at_column};

/// Steps taken by the shifted movement keys.
const COARSE_STEPS: i32 = 10;

pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    let coarse = key.modifiers.contains(KeyModifiers::SHIFT);
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.running = false,
        KeyCode::Tab if coarse => app.form.focus_prev(),
        KeyCode::Tab | KeyCode::Char('j') | KeyCode::Down => app.form.focus_next(),
        KeyCode::BackTab | KeyCode::Char('k') | KeyCode::Up => app.form.focus_prev(),
        KeyCode::Char('h') => app.step_focused(-1),
        KeyCode::Char('l') => app.step_focused(1),
        KeyCode::Char('H') => app.step_focused(-COARSE_STEPS),
        KeyCode::Char('L') => app.step_focused(COARSE_STEPS),
        KeyCode::Left => app.step_focused(if coarse { -COARSE_STEPS } else { -1 }),
        KeyCode::Right => app.step_focused(if coarse { COARSE_STEPS } else { 1 }),
        KeyCode::Char(' ') => app.toggle_thumb(),
        KeyCode::Char('v') => app.cycle_display(),
        KeyCode::Char('s') => app.save(),
        KeyCode::Char('r') => app.reset(),
        KeyCode::Char('e') => app.toggle_form_enabled(),
        KeyCode::Char('d') => app.toggle_field_enabled(),
        _ => {}
    }
}

pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => press(app, mouse.column, mouse.row),
        MouseEventKind::Drag(MouseButton::Left) => drag(app, mouse.column),
        MouseEventKind::Up(MouseButton::Left) => release(app),
        _ => {}
    }
}

/// Field index and track under a terminal cell, if any.
fn hit_track(app: &AppState, column: u16, row: u16) -> Option<ActiveDrag> {
    let layout = form_layout(app.viewport, &app.form);
    app.form
        .entries()
        .iter()
        .zip(&layout.fields)
        .enumerate()
        .filter(|(_, (_, rect))| !rect.is_empty())
        .find_map(|(index, (entry, rect))| {
            let areas = field_areas(&entry.field, &entry.state, *rect);
            // The indicator row above the track counts as part of it.
            let hit = row >= areas.slider.y
                && row < areas.slider.bottom()
                && column >= areas.track.x
                && column < areas.track.right();
            hit.then_some(ActiveDrag {
                index,
                track: areas.track,
            })
        })
}

fn press(app: &mut AppState, column: u16, row: u16) {
    let Some(hit) = hit_track(app, column, row) else {
        return;
    };
    // A gesture left open on another field ends before this one starts.
    if app.drag.is_some_and(|active| active.index != hit.index) {
        release(app);
    }
    let grabbed = app
        .form
        .with_entry(hit.index, |field, state| {
            let target = value_at_column(field.slider(), hit.track, column);
            field.press(state, target)
        })
        .unwrap_or(false);
    // Focus moves only when the field asks for it; `with_entry` settles that.
    if grabbed {
        app.drag = Some(hit);
    }
}

fn drag(app: &mut AppState, column: u16) {
    let Some(active) = app.drag else {
        return;
    };
    app.form.with_entry(active.index, |field, state| {
        let target = value_at_column(field.slider(), active.track, column);
        field.update_interaction(state, target)
    });
}

fn release(app: &mut AppState) {
    if let Some(active) = app.drag.take() {
        app.form
            .with_entry(active.index, |field, state| field.end_interaction(state));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_app;
    use std::cell::RefCell;
    use std::rc::Rc;

    use crossterm::event::KeyEventState;
    use ratatui::layout::Rect;
    use rangefield_core::{Form, RangeField, RangeValue, SliderConfig};

    fn press_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_quit_keys() {
        let mut app = sample_app();
        handle_key(&mut app, press_key(KeyCode::Char('q')));
        assert!(!app.running);

        let mut app = sample_app();
        handle_key(&mut app, press_key(KeyCode::Esc));
        assert!(!app.running);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut app = sample_app();
        let key = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        handle_key(&mut app, key);
        assert!(app.running);
    }

    #[test]
    fn test_focus_navigation_wraps() {
        let mut app = sample_app();
        handle_key(&mut app, press_key(KeyCode::Tab));
        assert_eq!(app.form.focused(), Some(1));
        handle_key(&mut app, press_key(KeyCode::Char('j')));
        handle_key(&mut app, press_key(KeyCode::Char('j')));
        assert_eq!(app.form.focused(), Some(0));
        handle_key(&mut app, press_key(KeyCode::BackTab));
        assert_eq!(app.form.focused(), Some(2));
        assert!(!app.form.entries()[0].state.has_focus());
    }

    #[test]
    fn test_coarse_step() {
        let mut app = sample_app();
        handle_key(&mut app, press_key(KeyCode::Char('L')));
        assert_eq!(
            app.form.value("price").unwrap(),
            Some(RangeValue::new(1500.0, 2500.0))
        );
        handle_key(&mut app, press_key(KeyCode::Char('h')));
        assert_eq!(
            app.form.value("price").unwrap(),
            Some(RangeValue::new(1400.0, 2500.0))
        );
    }

    #[test]
    fn test_start_thumb_cannot_pass_end() {
        let mut app = sample_app();
        for _ in 0..5 {
            handle_key(&mut app, press_key(KeyCode::Char('L')));
        }
        assert_eq!(
            app.form.value("price").unwrap(),
            Some(RangeValue::new(2500.0, 2500.0))
        );
    }

    #[test]
    fn test_mouse_drag_on_ratio_track() {
        let mut app = sample_app();
        app.viewport = Rect::new(0, 0, 42, 30);
        let layout = form_layout(app.viewport, &app.form);
        let ratio = &app.form.entries()[1];
        let track = field_areas(&ratio.field, &ratio.state, layout.fields[1]).track;
        assert_eq!(track.width, 40);

        // Ratio starts at (0, 0); the press lands to the right so the end
        // thumb takes it.
        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), track.x + 32, track.y));
        assert_eq!(app.form.focused(), Some(1));
        assert_eq!(app.form.entries()[1].field.dragging(), Some(rangefield_core::Thumb::End));

        handle_mouse(&mut app, mouse(MouseEventKind::Drag(MouseButton::Left), track.right() + 5, track.y));
        handle_mouse(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), track.right() + 5, track.y));

        assert_eq!(app.drag, None);
        assert_eq!(app.form.entries()[1].field.dragging(), None);
        assert_eq!(app.form.value("ratio").unwrap(), Some(RangeValue::new(0.0, 1.0)));
    }

    #[test]
    fn test_press_leaves_focus_alone_without_request() {
        let mut app = sample_app();
        app.viewport = Rect::new(0, 0, 42, 30);
        let layout = form_layout(app.viewport, &app.form);
        let rating = &app.form.entries()[2];
        assert!(!rating.field.should_request_focus());
        let track = field_areas(&rating.field, &rating.state, layout.fields[2]).track;

        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), track.right() - 1, track.y));

        assert_eq!(app.form.entries()[2].field.dragging(), Some(rangefield_core::Thumb::End));
        assert!(!app.form.entries()[2].state.has_focus());
        assert_eq!(app.form.focused(), Some(0));
        assert!(app.form.entries()[0].state.has_focus());
    }

    #[test]
    fn test_press_on_other_field_ends_open_gesture() {
        let ends = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&ends);
        let mut form = Form::new();
        form.register(
            RangeField::new("ratio", SliderConfig::new(0.0, 1.0))
                .on_change_end(Box::new(move |v| sink.borrow_mut().push(v))),
        )
        .unwrap();
        form.register(RangeField::new("rating", SliderConfig::new(0.0, 1.0)))
            .unwrap();
        form.initialize();
        let mut app = AppState::new(form, "two");
        app.viewport = Rect::new(0, 0, 42, 20);
        let layout = form_layout(app.viewport, &app.form);
        let ratio = &app.form.entries()[0];
        let ratio_track = field_areas(&ratio.field, &ratio.state, layout.fields[0]).track;
        let rating = &app.form.entries()[1];
        let rating_track = field_areas(&rating.field, &rating.state, layout.fields[1]).track;

        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), ratio_track.right() - 1, ratio_track.y));
        assert_eq!(app.drag.map(|d| d.index), Some(0));

        // No Up in between: the ratio gesture must still close.
        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), rating_track.x, rating_track.y));

        assert_eq!(app.drag.map(|d| d.index), Some(1));
        assert_eq!(app.form.entries()[0].field.dragging(), None);
        assert_eq!(*ends.borrow(), vec![RangeValue::new(0.0, 1.0)]);
    }

    #[test]
    fn test_click_outside_tracks_does_nothing() {
        let mut app = sample_app();
        app.viewport = Rect::new(0, 0, 42, 30);
        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 5, 0));
        assert_eq!(app.drag, None);
        assert!(!app.form.is_dirty());
    }
}
