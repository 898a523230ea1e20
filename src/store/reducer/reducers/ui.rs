//! UI state reducers for errors and the save acknowledgment.

use std::time::Instant;

use crate::store::state::State;

/// Sets or clears the blocking error message.
pub fn set_error(state: &mut State, err: Option<String>) {
    state.error = err;
}

/// Shows the acknowledgment, replacing any pending dismissal.
pub fn show_ack(state: &mut State, at: Instant) {
    let duration = state.ack_duration;
    state.ack.schedule(at, duration);
}

/// Hides the acknowledgment and cancels its pending dismissal.
pub fn dismiss_ack(state: &mut State) {
    state.ack.cancel();
}

/// Advances time-based UI state.
pub fn tick(state: &mut State, now: Instant) {
    if state.ack.fire_if_due(now) {
        log::debug!("acknowledgment dismissed");
    }
}
