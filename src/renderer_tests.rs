use std::{convert::Infallible, io, rc::Rc, time::Duration};

use color_eyre::eyre::eyre;
use mockall::Sequence;
use ratatui::{
    Terminal,
    backend::{ClearType, TestBackend, WindowSize},
    crossterm::event::KeyEvent,
    prelude::{Backend, Position, Size},
};

use crate::{
    purchase::form::PurchaseForm,
    sink::LogSink,
    store::{StateGetter, Store, reducer::StoreReducer, state::State},
};

use super::*;

/// TestBackend with a no-op Write impl so it satisfies the `Backend + Write`
/// bound on Renderer.
struct WritableTestBackend(TestBackend);

impl io::Write for WritableTestBackend {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Backend for WritableTestBackend {
    type Error = Infallible;

    fn draw<'a, I>(&mut self, content: I) -> Result<(), Self::Error>
    where
        I: Iterator<Item = (u16, u16, &'a ratatui::buffer::Cell)>,
    {
        self.0.draw(content)
    }

    fn hide_cursor(&mut self) -> Result<(), Self::Error> {
        self.0.hide_cursor()
    }

    fn show_cursor(&mut self) -> Result<(), Self::Error> {
        self.0.show_cursor()
    }

    fn get_cursor_position(&mut self) -> Result<Position, Self::Error> {
        self.0.get_cursor_position()
    }

    fn set_cursor_position<P: Into<Position>>(
        &mut self,
        position: P,
    ) -> Result<(), Self::Error> {
        self.0.set_cursor_position(position)
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.0.clear()
    }

    fn clear_region(
        &mut self,
        clear_type: ClearType,
    ) -> Result<(), Self::Error> {
        self.0.clear_region(clear_type)
    }

    fn size(&self) -> Result<Size, Self::Error> {
        self.0.size()
    }

    fn window_size(&mut self) -> Result<WindowSize, Self::Error> {
        self.0.window_size()
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Backend::flush(&mut self.0)
    }
}

struct Setup {
    renderer: Renderer<WritableTestBackend>,
    store: Rc<Store>,
}

fn setup(events: MockEventSource) -> Setup {
    let state = State {
        form: PurchaseForm::new("2024-05-01"),
        ..State::default()
    };
    let store = Rc::new(Store::new(
        state,
        StoreReducer::boxed(),
        Box::new(LogSink),
    ));
    let terminal =
        Terminal::new(WritableTestBackend(TestBackend::new(140, 24))).unwrap();
    let renderer = Renderer::new(terminal, store.clone(), Box::new(events));
    Setup { renderer, store }
}

fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn screen(renderer: &Renderer<WritableTestBackend>) -> String {
    let terminal = renderer.terminal.borrow();
    terminal
        .backend()
        .0
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn render_frame_draws_form() {
    let test = setup(MockEventSource::new());
    let state = test.store.get_state();

    test.renderer.render_frame(&state).unwrap();

    let content = screen(&test.renderer);
    assert!(content.contains("Phone Purchase"));
    assert!(content.contains("Purchase Date: 2024-05-01"));
}

#[test]
fn loop_exits_on_ctrl_c() {
    let mut events = MockEventSource::new();
    events
        .expect_next_event()
        .with(mockall::predicate::eq(POLL_INTERVAL))
        .times(1)
        .returning(|_| Ok(Some(ctrl('c'))));

    let test = setup(events);

    assert!(test.renderer.start_loop().is_ok());
}

#[test]
fn loop_processes_events_until_quit() {
    let mut seq = Sequence::new();
    let mut events = MockEventSource::new();
    events
        .expect_next_event()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(Some(ctrl('a'))));
    events
        .expect_next_event()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(None));
    events
        .expect_next_event()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(Some(ctrl('c'))));

    let test = setup(events);
    test.renderer.start_loop().unwrap();

    assert_eq!(test.store.get_state().form.rows().len(), 2);
}

#[test]
fn loop_ticks_dismiss_expired_acknowledgment() {
    let mut events = MockEventSource::new();
    events
        .expect_next_event()
        .times(1)
        .returning(|_| Ok(Some(ctrl('c'))));

    let test = setup(events);
    let long_ago = Instant::now()
        .checked_sub(Duration::from_secs(10))
        .unwrap();
    test.store.dispatch(Action::ShowAck { at: long_ago });
    assert!(test.store.get_state().ack_visible());

    test.renderer.start_loop().unwrap();

    assert!(!test.store.get_state().ack_visible());
}

#[test]
fn loop_propagates_event_source_errors() {
    let mut events = MockEventSource::new();
    events
        .expect_next_event()
        .times(1)
        .returning(|_| Err(eyre!("terminal went away")));

    let test = setup(events);

    let err = test.renderer.start_loop().unwrap_err();
    assert_eq!(err.to_string(), "terminal went away");
}

#[test]
fn exit_cancels_pending_acknowledgment() {
    let test = setup(MockEventSource::new());
    test.store.dispatch(Action::ShowAck { at: Instant::now() });

    test.renderer.exit().unwrap();

    assert!(!test.store.get_state().ack_visible());
}
