//! Action types for state transitions.

use std::time::Instant;

use crate::purchase::row::{RowId, RowUpdate};

/// Commands that trigger state changes via the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetError(Option<String>),
    SetDate(String),
    AddRow,
    RemoveRow(RowId),
    UpdateRow(RowId, RowUpdate),
    /// Validate and, when complete, hand a snapshot to the save sink.
    Save { at: Instant },
    /// Show the "saved" acknowledgment starting at the given instant.
    ShowAck { at: Instant },
    DismissAck,
    /// Periodic clock update from the render loop.
    Tick(Instant),
}
