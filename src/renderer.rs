//! Main application loop and terminal management.

#[cfg(test)]
use mockall::automock;

use color_eyre::eyre::{Context, Result, eyre};
use ratatui::{
    Terminal,
    crossterm::{
        event::{
            self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode,
            KeyEventKind, KeyModifiers,
        },
        execute,
        terminal::{
            EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
            enable_raw_mode,
        },
    },
    prelude::Backend,
};
use std::{
    cell::RefCell,
    io,
    rc::Rc,
    time::{Duration, Instant},
};

use crate::{
    store::{Dispatcher, StateGetter, Store, action::Action, state::State},
    ui::{
        app::{App, Application},
        views::traits::{CustomEventContext, CustomWidgetContext},
    },
};

const POLL_INTERVAL: Duration = Duration::from_millis(60);

/// Source of terminal input events.
#[cfg_attr(test, automock)]
pub trait EventSource {
    /// Waits up to `timeout` for the next event. Returns None on timeout.
    fn next_event(&self, timeout: Duration) -> Result<Option<Event>>;
}

/// Reads events from the real terminal.
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn next_event(&self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).wrap_err("failed to poll terminal events")? {
            let evt = event::read().wrap_err("failed to read terminal event")?;
            return Ok(Some(evt));
        }
        Ok(None)
    }
}

/// Coordinates rendering and event handling.
///
/// Manages the terminal lifecycle (raw mode, alternate screen, mouse
/// capture) and runs the loop that advances the clock, draws the UI and
/// processes input events.
pub struct Renderer<B: Backend + io::Write> {
    terminal: RefCell<Terminal<B>>,
    store: Rc<Store>,
    app: Box<dyn Application>,
    events: Box<dyn EventSource>,
}

impl<B: Backend + io::Write> Renderer<B> {
    pub fn new(
        terminal: Terminal<B>,
        store: Rc<Store>,
        events: Box<dyn EventSource>,
    ) -> Self {
        Self {
            terminal: RefCell::new(terminal),
            store,
            app: Box::new(App::new()),
            events,
        }
    }

    /// Initializes the terminal and starts the render loop. Returns when the
    /// user quits.
    pub fn start_render_loop(&self) -> Result<()> {
        self.enable_terminal_raw_mode()?;
        let res = self.start_loop();
        self.exit()?;
        res
    }

    fn start_loop(&self) -> Result<()> {
        loop {
            self.store.dispatch(Action::Tick(Instant::now()));

            let state = self.store.get_state();
            self.render_frame(&state)?;

            let Some(evt) = self.events.next_event(POLL_INTERVAL)? else {
                continue;
            };

            let ctx = CustomEventContext {
                state: &state,
                dispatcher: self.store.clone(),
            };

            self.app.process_event(&evt, &ctx)?;

            // do not allow overriding ctrl-c
            if let Event::Key(key) = evt
                && key.kind == KeyEventKind::Press
                && key.code == KeyCode::Char('c')
                && key.modifiers == KeyModifiers::CONTROL
            {
                log::info!("received ctrl-c, exiting");
                return Ok(());
            }
        }
    }

    fn render_frame(&self, state: &State) -> Result<()> {
        let mut res = Ok(());

        self.terminal
            .borrow_mut()
            .draw(|f| {
                let ctx = CustomWidgetContext {
                    state,
                    app_area: f.area(),
                };

                if let Err(err) =
                    self.app.render_ref(f.area(), f.buffer_mut(), &ctx)
                {
                    res = Err(err);
                }
            })
            .map_err(|e| eyre!("failed to render: {}", e))?;

        res
    }

    fn enable_terminal_raw_mode(&self) -> Result<()> {
        enable_raw_mode().wrap_err("failed to enter raw mode")?;
        // io::stdout() directly; a borrowed backend is dropped before the
        // escape sequences flush
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
            .wrap_err("failed to enter alternate screen")?;
        Ok(())
    }

    fn exit(&self) -> Result<()> {
        // a pending acknowledgment dies with the form
        self.store.dispatch(Action::DismissAck);

        let mut terminal = self.terminal.borrow_mut();
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal
            .show_cursor()
            .map_err(|e| eyre!("failed to show terminal cursor: {}", e))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "./renderer_tests.rs"]
mod tests;
