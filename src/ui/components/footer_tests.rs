use crate::{
    store::state::State,
    ui::test_utils::{buffer_lines, render_with},
};

use super::*;

#[test]
fn renders_footer_component() {
    let state = State::default();

    let buf = render_with(40, 3, &state, |frame, ctx| {
        InfoFooter::new("(ctrl+s) save").render(
            frame.area(),
            frame.buffer_mut(),
            ctx,
        );
    });

    let lines = buffer_lines(&buf);
    assert!(lines[0].starts_with('╔'));
    assert!(lines[1].contains("(ctrl+s) save"));
    assert!(lines[2].starts_with('╚'));
}
