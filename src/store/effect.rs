//! Side effects returned by the reducer for execution by the store.

use std::time::Instant;

use crate::purchase::form::PurchaseSnapshot;

/// Side effects that the reducer requests to be performed after state updates.
///
/// This keeps the reducer pure by separating state computation from I/O
/// like handing a snapshot to the save sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// No side effect needed.
    None,
    /// Hand the snapshot to the save sink, then acknowledge from `at`.
    EmitSnapshot {
        snapshot: PurchaseSnapshot,
        at: Instant,
    },
}
