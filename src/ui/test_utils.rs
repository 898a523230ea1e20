//! Helpers for inspecting rendered test buffers.

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

use crate::{store::state::State, ui::views::traits::CustomWidgetContext};

/// Returns each row of the buffer as a string.
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Whether any row of the buffer contains the given text.
pub fn buffer_contains(buf: &Buffer, text: &str) -> bool {
    buffer_lines(buf).iter().any(|line| line.contains(text))
}

/// Renders with a fresh context into a test terminal of the given size and
/// returns the resulting buffer.
pub fn render_with<F>(width: u16, height: u16, state: &State, f: F) -> Buffer
where
    F: FnOnce(&mut ratatui::Frame, &CustomWidgetContext),
{
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();

    terminal
        .draw(|frame| {
            let ctx = CustomWidgetContext {
                state,
                app_area: frame.area(),
            };
            f(frame, &ctx);
        })
        .unwrap();

    terminal.backend().buffer().clone()
}
