//! Redux-like state container for the terminal UI.

#[cfg(test)]
use mockall::automock;

use std::{cell::RefCell, rc::Rc};

use crate::{
    sink::SaveSink,
    store::{action::Action, effect::Effect, state::State},
};

pub mod action;
pub mod effect;
pub mod reducer;
pub mod state;
pub mod timer;

/// Gets application state
#[cfg_attr(test, automock)]
pub trait StateGetter {
    fn get_state(&self) -> Rc<State>;
}

/// Dispatches actions to update application state
#[cfg_attr(test, automock)]
pub trait Dispatcher {
    fn dispatch(&self, action: Action);
}

/// Handles mutating store state based on provided action
#[cfg_attr(test, automock)]
pub trait Reducer {
    fn reduce(&self, state: &mut State, action: Action) -> Effect;
}

/// Centralized state container
pub struct Store {
    state: RefCell<Rc<State>>,
    reducer: Box<dyn Reducer>,
    sink: Box<dyn SaveSink>,
}

impl Store {
    /// Creates a new store from the initial state, the reducer applied on
    /// dispatch, and the sink receiving saved snapshots.
    pub fn new(
        initial_state: State,
        reducer: Box<dyn Reducer>,
        sink: Box<dyn SaveSink>,
    ) -> Self {
        Self {
            state: RefCell::new(Rc::new(initial_state)),
            reducer,
            sink,
        }
    }

    fn run_effect(&self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::EmitSnapshot { snapshot, at } => {
                match self.sink.emit(&snapshot) {
                    Ok(()) => self.dispatch(Action::ShowAck { at }),
                    Err(err) => {
                        log::error!("failed to save purchase: {err:#}");
                        self.dispatch(Action::SetError(Some(format!(
                            "failed to save purchase: {err}"
                        ))));
                    }
                }
            }
        }
    }
}

impl StateGetter for Store {
    fn get_state(&self) -> Rc<State> {
        self.state.borrow().clone()
    }
}

impl Dispatcher for Store {
    fn dispatch(&self, action: Action) {
        let effect = {
            let mut rc = self.state.borrow_mut();
            let state = Rc::make_mut(&mut rc);
            self.reducer.reduce(state, action)
        };

        self.run_effect(effect);
    }
}

#[cfg(test)]
#[path = "./store_tests.rs"]
mod tests;
