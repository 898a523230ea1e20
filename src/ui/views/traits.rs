//! Traits shared by views and components.

use std::rc::Rc;

use color_eyre::eyre::Result;
use ratatui::{crossterm::event::Event, layout::Rect};

use crate::store::{Dispatcher, state::State};

/// Context handed to widgets while rendering.
pub struct CustomWidgetContext<'a> {
    // app state
    pub state: &'a State,
    // total area for the entire application - useful for calculating
    // popover and dropdown areas
    pub app_area: Rect,
}

/// Context handed to views while processing input events.
pub struct CustomEventContext<'a> {
    pub state: &'a State,
    pub dispatcher: Rc<dyn Dispatcher>,
}

pub trait EventHandler {
    /// Returns true if the event was consumed.
    fn process_event(&self, evt: &Event, ctx: &CustomEventContext) -> Result<bool>;
}

pub trait CustomWidget {
    fn render(self, area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext);
}

pub trait CustomWidgetRef {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()>;
}

pub trait CustomStatefulWidget {
    type State;

    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
        ctx: &CustomWidgetContext,
    );
}

pub trait View: EventHandler + CustomWidgetRef {
    /// Key bindings shown in the footer.
    fn legend(&self, _state: &State) -> &str {
        ""
    }
}
