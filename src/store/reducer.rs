//! Pure reducer functions that compute new state from actions.

use crate::store::Reducer;

use super::{action::Action, effect::Effect, state::State};

mod reducers;

/// Applies actions to state, producing new state and optional side effects.
#[derive(Default)]
pub struct StoreReducer;

impl StoreReducer {
    pub fn boxed() -> Box<Self> {
        Box::default()
    }
}

impl Reducer for StoreReducer {
    /// Applies an action to the state, mutating it in place and returning any
    /// side effects to be executed.
    fn reduce(&self, state: &mut State, action: Action) -> Effect {
        // ticks arrive on every frame
        if !matches!(action, Action::Tick(_)) {
            log::debug!("processing action: {:?}", action);
        }

        match action {
            // UI actions
            Action::SetError(err) => {
                reducers::ui::set_error(state, err);
                Effect::None
            }
            Action::ShowAck { at } => {
                reducers::ui::show_ack(state, at);
                Effect::None
            }
            Action::DismissAck => {
                reducers::ui::dismiss_ack(state);
                Effect::None
            }
            Action::Tick(now) => {
                reducers::ui::tick(state, now);
                Effect::None
            }

            // Form actions
            Action::SetDate(date) => {
                reducers::form::set_date(state, date);
                Effect::None
            }
            Action::AddRow => {
                reducers::form::add_row(state);
                Effect::None
            }
            Action::RemoveRow(id) => {
                reducers::form::remove_row(state, id);
                Effect::None
            }
            Action::UpdateRow(id, update) => {
                reducers::form::update_row(state, id, update);
                Effect::None
            }
            Action::Save { at } => reducers::form::save(state, at),
        }
    }
}

#[cfg(test)]
#[path = "./reducer_tests.rs"]
mod tests;
