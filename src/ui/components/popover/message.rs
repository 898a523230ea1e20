use color_eyre::eyre::Result;
use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::{Paragraph, Widget, Wrap},
};

use crate::ui::views::traits::{CustomWidgetContext, CustomWidgetRef};

/// Wrapped message with an optional hint line pinned to the bottom.
pub struct MessagePopover {
    message: String,
    hint: Option<String>,
}

impl MessagePopover {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            hint: None,
        }
    }

    pub fn hint<H: Into<String>>(mut self, hint: H) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl CustomWidgetRef for MessagePopover {
    fn render_ref(
        &self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()> {
        let msg = Paragraph::new(self.message.as_str())
            .wrap(Wrap { trim: true })
            .centered();

        let Some(hint) = self.hint.as_ref() else {
            msg.render(area, buf);
            return Ok(());
        };

        let [msg_area, hint_area] = Layout::vertical([
            Constraint::Fill(1),   // message
            Constraint::Length(1), // hint
        ])
        .areas(area);

        msg.render(msg_area, buf);
        Paragraph::new(hint.as_str())
            .style(Style::default().fg(ctx.state.colors.placeholder))
            .centered()
            .render(hint_area, buf);

        Ok(())
    }
}

#[cfg(test)]
#[path = "./message_tests.rs"]
mod tests;
