//! Editable text input component.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::ui::views::traits::{CustomStatefulWidget, CustomWidgetContext};

/// State for an input field (focus and current display value).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    pub focused: bool,
    pub value: String,
}

/// Text input that highlights while focused and shows a dimmed placeholder
/// while empty.
#[derive(Default)]
pub struct Input {
    label: Option<String>,
    prefix: Option<String>,
    placeholder: Option<String>,
    alignment: Alignment,
}

impl Input {
    /// Creates an input without a label.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new input with the given label.
    pub fn labeled(label: &str) -> Self {
        Self {
            label: Some(String::from(label)),
            ..Self::default()
        }
    }

    /// Text shown before the value, e.g. a currency symbol.
    pub fn prefix(mut self, prefix: &str) -> Self {
        self.prefix = Some(String::from(prefix));
        self
    }

    pub fn placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(String::from(placeholder));
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

impl CustomStatefulWidget for Input {
    type State = InputState;

    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
        ctx: &CustomWidgetContext,
    ) where
        Self: Sized,
    {
        let colors = &ctx.state.colors;
        let mut spans = Vec::new();

        if let Some(label) = self.label {
            spans.push(
                Span::from(format!("{label}: "))
                    .style(Style::default().fg(colors.text)),
            );
        }

        if let Some(prefix) = self.prefix {
            spans.push(
                Span::from(format!("{prefix} "))
                    .style(Style::default().fg(colors.placeholder)),
            );
        }

        let mut style = Style::default().fg(colors.text);
        if state.focused {
            style = style.fg(colors.input_editing).add_modifier(Modifier::BOLD);
        }

        if state.value.is_empty() {
            let placeholder = self.placeholder.unwrap_or_default();
            let mut placeholder_style = Style::default().fg(colors.placeholder);
            if state.focused {
                placeholder_style =
                    placeholder_style.add_modifier(Modifier::UNDERLINED);
            }
            spans.push(Span::from(placeholder).style(placeholder_style));
        } else {
            spans.push(Span::from(state.value.as_str()).style(style));
        }

        Paragraph::new(Line::from(spans))
            .alignment(self.alignment)
            .render(area, buf);
    }
}

#[cfg(test)]
#[path = "./input_tests.rs"]
mod tests;
