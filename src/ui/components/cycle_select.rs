//! Compact select that steps through a fixed option list with the arrow keys.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::ui::views::traits::{CustomWidget, CustomWidgetContext};

/// Returns the option next to `current`, wrapping around at either end.
///
/// An unselected (empty or unknown) value steps onto the first option going
/// forward and onto the last option going backward. Returns None when there
/// are no options.
pub fn cycle<'o>(options: &[&'o str], current: &str, forward: bool) -> Option<&'o str> {
    if options.is_empty() {
        return None;
    }

    let count = options.len();
    let next = match options.iter().position(|o| *o == current) {
        Some(idx) if forward => (idx + 1) % count,
        Some(idx) => (idx + count - 1) % count,
        None if forward => 0,
        None => count - 1,
    };

    Some(options[next])
}

/// Renders the current value between arrow markers. Controlled: the value is
/// always supplied by the caller.
pub struct CycleSelect<'a> {
    value: &'a str,
    placeholder: &'a str,
    focused: bool,
}

impl<'a> CycleSelect<'a> {
    pub fn new(value: &'a str, placeholder: &'a str) -> Self {
        Self {
            value,
            placeholder,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl CustomWidget for CycleSelect<'_> {
    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) where
        Self: Sized,
    {
        let colors = &ctx.state.colors;

        let (text, mut style) = if self.value.is_empty() {
            (self.placeholder, Style::default().fg(colors.placeholder))
        } else {
            (self.value, Style::default().fg(colors.text))
        };

        let arrow_style = if self.focused {
            style = style.add_modifier(Modifier::BOLD);
            if !self.value.is_empty() {
                style = style.fg(colors.input_editing);
            }
            Style::default().fg(colors.input_editing)
        } else {
            Style::default().fg(colors.gray)
        };

        let line = Line::from(vec![
            Span::from("◂ ").style(arrow_style),
            Span::from(text).style(style),
            Span::from(" ▸").style(arrow_style),
        ]);

        Paragraph::new(line).render(area, buf)
    }
}

#[cfg(test)]
#[path = "./cycle_select_tests.rs"]
mod tests;
