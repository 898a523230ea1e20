use crate::{
    store::state::State,
    ui::{
        test_utils::{buffer_lines, render_with},
        views::traits::CustomWidgetRef,
    },
};

use super::*;

#[test]
fn renders_message_with_hint() {
    let state = State::default();
    let popover = MessagePopover::new("purchase data is incomplete")
        .hint("Press enter to dismiss");

    let buf = render_with(40, 4, &state, |frame, ctx| {
        popover
            .render_ref(frame.area(), frame.buffer_mut(), ctx)
            .unwrap();
    });

    let lines = buffer_lines(&buf);
    assert_eq!(lines[0].trim(), "purchase data is incomplete");
    assert_eq!(lines[3].trim(), "Press enter to dismiss");
    assert_eq!(buf[(9, 3)].fg, state.colors.placeholder);
}

#[test]
fn wraps_long_messages() {
    let state = State::default();
    let popover = MessagePopover::new("make sure brand, spec, color and price are filled in");

    let buf = render_with(30, 3, &state, |frame, ctx| {
        popover
            .render_ref(frame.area(), frame.buffer_mut(), ctx)
            .unwrap();
    });

    let lines = buffer_lines(&buf);
    assert!(!lines[1].trim().is_empty());
}
