//! Transient acknowledgment pinned to the bottom-right corner.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::ui::views::traits::{CustomWidget, CustomWidgetContext};

pub struct Toast {
    title: String,
    message: String,
}

impl Toast {
    pub fn new<T: Into<String>, M: Into<String>>(title: T, message: M) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Bottom-right area sized to the message, inset one cell from the edges
    /// of `area`.
    pub fn area(&self, area: Rect) -> Rect {
        let content = self.message.width().max(self.title.width() + 2) as u16;
        let width = (content + 4).min(area.width);
        let height = 3.min(area.height);
        let x = area.right().saturating_sub(width + 1).max(area.x);
        let y = area.bottom().saturating_sub(height + 1).max(area.y);
        Rect::new(x, y, width, height)
    }
}

impl CustomWidget for Toast {
    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) where
        Self: Sized,
    {
        let colors = &ctx.state.colors;
        let toast_area = self.area(area);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(colors.success))
            .title(
                Line::from(format!(" {} ", self.title))
                    .style(Style::default().add_modifier(Modifier::BOLD)),
            )
            .style(Style::default().bg(colors.buffer_bg).fg(colors.success));

        Clear.render(toast_area, buf);
        Paragraph::new(self.message.as_str())
            .centered()
            .block(block)
            .render(toast_area, buf);
    }
}

#[cfg(test)]
#[path = "./toast_tests.rs"]
mod tests;
