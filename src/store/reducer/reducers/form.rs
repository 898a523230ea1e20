//! Purchase form reducers.

use std::time::Instant;

use crate::{
    purchase::row::{RowId, RowUpdate},
    store::{effect::Effect, reducer::reducers::ui::set_error, state::State},
};

pub fn set_date(state: &mut State, date: String) {
    state.form.set_date(date);
}

pub fn add_row(state: &mut State) {
    let id = state.form.add_row();
    log::debug!("added row {id}");
}

pub fn remove_row(state: &mut State, id: RowId) {
    state.form.remove_row(id);
}

pub fn update_row(state: &mut State, id: RowId, update: RowUpdate) {
    state.form.update_row(id, update);
}

/// Validates the form. An incomplete form sets the blocking error and
/// produces no effect; a complete one asks for its snapshot to be emitted.
pub fn save(state: &mut State, at: Instant) -> Effect {
    match state.form.validate() {
        Ok(()) => Effect::EmitSnapshot {
            snapshot: state.form.snapshot(),
            at,
        },
        Err(err) => {
            log::warn!("save rejected: {err}");
            set_error(state, Some(err.to_string()));
            Effect::None
        }
    }
}
