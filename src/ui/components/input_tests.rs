use ratatui::style::Modifier;

use crate::{
    store::state::State,
    ui::test_utils::{buffer_lines, render_with},
};

use super::*;

#[test]
fn renders_input_component_unfocused() {
    let state = State::default();
    let mut input_state = InputState {
        focused: false,
        value: "2024-05-01".to_string(),
    };

    let buf = render_with(40, 1, &state, |frame, ctx| {
        Input::labeled("Purchase Date").render(
            frame.area(),
            frame.buffer_mut(),
            &mut input_state,
            ctx,
        );
    });

    assert_eq!(buffer_lines(&buf)[0].trim_end(), "Purchase Date: 2024-05-01");
    assert_eq!(buf[(15, 0)].fg, state.colors.text);
}

#[test]
fn renders_input_component_focused() {
    let state = State::default();
    let mut input_state = InputState {
        focused: true,
        value: "15.000".to_string(),
    };

    let buf = render_with(20, 1, &state, |frame, ctx| {
        Input::new().prefix("Rp").render(
            frame.area(),
            frame.buffer_mut(),
            &mut input_state,
            ctx,
        );
    });

    assert_eq!(buffer_lines(&buf)[0].trim_end(), "Rp 15.000");
    assert_eq!(buf[(3, 0)].fg, state.colors.input_editing);
    assert!(buf[(3, 0)].modifier.contains(Modifier::BOLD));
}

#[test]
fn renders_placeholder_when_empty() {
    let state = State::default();
    let mut input_state = InputState::default();

    let buf = render_with(20, 1, &state, |frame, ctx| {
        Input::new().placeholder("0").render(
            frame.area(),
            frame.buffer_mut(),
            &mut input_state,
            ctx,
        );
    });

    assert_eq!(buffer_lines(&buf)[0].trim_end(), "0");
    assert_eq!(buf[(0, 0)].fg, state.colors.placeholder);
}

#[test]
fn renders_right_aligned() {
    let state = State::default();
    let mut input_state = InputState {
        focused: false,
        value: "2".to_string(),
    };

    let buf = render_with(5, 1, &state, |frame, ctx| {
        Input::new().alignment(Alignment::Right).render(
            frame.area(),
            frame.buffer_mut(),
            &mut input_state,
            ctx,
        );
    });

    assert_eq!(buffer_lines(&buf)[0], "    2");
}
