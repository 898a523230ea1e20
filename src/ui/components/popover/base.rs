//! Centered overlay frame for blocking messages.

use color_eyre::eyre::Result;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Clear, Padding, Widget},
};

use crate::ui::views::traits::{CustomWidgetContext, CustomWidgetRef};

const DEFAULT_WIDTH: u16 = 60;
const DEFAULT_HEIGHT: u16 = 9;

/// Draws `content` inside a bordered box centered over the given area,
/// clearing whatever was rendered underneath.
pub struct Popover<'a> {
    content: &'a dyn CustomWidgetRef,
    title: Option<String>,
    border_color: Option<Color>,
    width: u16,
    height: u16,
}

impl<'a> Popover<'a> {
    pub fn new(content: &'a dyn CustomWidgetRef) -> Self {
        Self {
            content,
            title: None,
            border_color: None,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }

    /// Returns a `width` x `height` area centered in `area`, shrunk to fit
    /// when the parent is smaller.
    pub fn get_popover_area(area: Rect, width: u16, height: u16) -> Rect {
        let vertical =
            Layout::vertical([Constraint::Length(height.min(area.height))])
                .flex(Flex::Center);
        let horizontal =
            Layout::horizontal([Constraint::Length(width.min(area.width))])
                .flex(Flex::Center);
        let [area] = vertical.areas(area);
        let [area] = horizontal.areas(area);
        area
    }

    pub fn title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }
}

impl CustomWidgetRef for Popover<'_> {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()> {
        let pop_area = Self::get_popover_area(area, self.width, self.height);

        let colors = &ctx.state.colors;
        let border_color = self.border_color.unwrap_or(colors.border_color);

        let mut block = Block::bordered()
            .border_type(BorderType::Double)
            .border_style(Style::new().fg(border_color).bg(colors.buffer_bg))
            .padding(Padding::horizontal(2))
            .style(Style::default().bg(colors.buffer_bg).fg(colors.text));

        if let Some(title) = self.title.as_ref() {
            block = block.title(
                Line::from(format!(" {title} "))
                    .style(
                        Style::default()
                            .fg(border_color)
                            .add_modifier(Modifier::BOLD),
                    )
                    .centered(),
            );
        }

        let inner_area = block.inner(pop_area);

        Clear.render(pop_area, buf);
        block.render(pop_area, buf);
        self.content.render_ref(inner_area, buf, ctx)
    }
}

#[cfg(test)]
#[path = "./base_tests.rs"]
mod tests;
