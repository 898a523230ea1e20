//! Domain errors surfaced to the user.

use itertools::Itertools;
use thiserror::Error;

/// Errors produced while validating a purchase form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    /// One or more rows are missing a brand, spec, color, or price. Holds the
    /// 1-based display positions of the offending rows.
    #[error(
        "purchase data is incomplete (item {}): make sure brand, spec, color and price are filled in",
        join_positions(.positions)
    )]
    IncompleteRows { positions: Vec<usize> },
}

fn join_positions(positions: &[usize]) -> String {
    positions.iter().map(|p| format!("#{p}")).join(", ")
}
