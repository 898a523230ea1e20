//! Title banner with an optional right-aligned summary.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::ui::views::traits::{CustomWidget, CustomWidgetContext};

/// Bold title on the left, and an emphasized summary (such as a running
/// total) pinned to the right of the same line.
pub struct Header {
    title: String,
    aside: Option<String>,
}

impl Header {
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self {
            title: title.into(),
            aside: None,
        }
    }

    pub fn aside<S: Into<String>>(mut self, aside: S) -> Self {
        self.aside = Some(aside.into());
        self
    }
}

impl CustomWidget for Header {
    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) where
        Self: Sized,
    {
        let colors = &ctx.state.colors;
        let aside_width = self.aside.as_deref().map_or(0, |a| a.width()) as u16;

        let [title_area, aside_area] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(aside_width),
        ])
        .areas(area);

        Paragraph::new(self.title)
            .style(
                Style::default()
                    .fg(colors.header_text)
                    .add_modifier(Modifier::BOLD),
            )
            .render(title_area, buf);

        if let Some(aside) = self.aside {
            Paragraph::new(aside)
                .style(
                    Style::default()
                        .fg(colors.success)
                        .add_modifier(Modifier::BOLD),
                )
                .alignment(Alignment::Right)
                .render(aside_area, buf);
        }
    }
}

#[cfg(test)]
#[path = "./header_tests.rs"]
mod tests;
