//! Top level application frame.

use color_eyre::eyre::Result;
use ratatui::{
    crossterm::event::Event,
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, BorderType, Padding, Widget},
};

use crate::ui::{
    components::footer::InfoFooter,
    views::{
        purchase::PurchaseView,
        traits::{
            CustomEventContext, CustomWidget, CustomWidgetContext, CustomWidgetRef,
            EventHandler, View,
        },
    },
};

/// Root widget driven by the renderer.
pub trait Application: EventHandler + CustomWidgetRef {}

/// Frames the purchase form with a border and a key legend footer.
pub struct App {
    view: Box<dyn View>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            view: Box::new(PurchaseView::new()),
        }
    }
}

impl Application for App {}

impl CustomWidgetRef for App {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()> {
        let colors = &ctx.state.colors;

        let [view_area, footer_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(3)])
                .areas(area);

        // render background for entire display
        Block::new()
            .style(Style::default().bg(colors.buffer_bg))
            .render(area, buf);

        InfoFooter::new(self.view.legend(ctx.state)).render(footer_area, buf, ctx);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(colors.border_color))
            .padding(Padding::horizontal(1));
        let inner = block.inner(view_area);
        block.render(view_area, buf);

        // the view goes last so its overlays layer on top of the footer
        self.view.render_ref(inner, buf, ctx)
    }
}

impl EventHandler for App {
    fn process_event(&self, evt: &Event, ctx: &CustomEventContext) -> Result<bool> {
        self.view.process_event(evt, ctx)
    }
}

#[cfg(test)]
#[path = "./app_tests.rs"]
mod tests;
