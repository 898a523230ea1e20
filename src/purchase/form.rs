//! The purchase form: an ordered, never-empty collection of rows plus the
//! purchase date.

use serde::Serialize;

use crate::{
    error::FormError,
    purchase::{
        date,
        row::{PurchaseRow, RowId, RowUpdate},
    },
};

/// Id given to the first row and to the row left behind by a reset.
pub const FIRST_ROW_ID: RowId = 1;

/// Everything a save hands over to the sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseSnapshot {
    pub date: String,
    pub rows: Vec<PurchaseRow>,
    pub grand_total: u64,
}

/// Owns the purchase rows and date.
///
/// Invariants:
/// - `rows` always holds at least one row
/// - row ids are unique; a new row gets `max(ids) + 1`
/// - rows keep insertion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseForm {
    date: String,
    rows: Vec<PurchaseRow>,
}

impl Default for PurchaseForm {
    fn default() -> Self {
        Self::new(date::today())
    }
}

impl PurchaseForm {
    /// Creates a form with a single empty row for the given date.
    pub fn new<S: Into<String>>(date: S) -> Self {
        Self {
            date: date.into(),
            rows: vec![PurchaseRow::empty(FIRST_ROW_ID)],
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn set_date<S: Into<String>>(&mut self, date: S) {
        self.date = date.into();
    }

    pub fn rows(&self) -> &[PurchaseRow] {
        &self.rows
    }

    pub fn row(&self, id: RowId) -> Option<&PurchaseRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Appends an empty row and returns its id.
    pub fn add_row(&mut self) -> RowId {
        let id = self
            .rows
            .iter()
            .map(|r| r.id)
            .max()
            .map_or(FIRST_ROW_ID, |max| max + 1);
        self.rows.push(PurchaseRow::empty(id));
        id
    }

    /// Removes the row with the given id.
    ///
    /// When only one row is left the id is ignored and the form resets to a
    /// single fresh row with id 1. Unknown ids are otherwise ignored.
    pub fn remove_row(&mut self, id: RowId) {
        if self.rows.len() == 1 {
            self.rows = vec![PurchaseRow::empty(FIRST_ROW_ID)];
            return;
        }

        self.rows.retain(|r| r.id != id);
    }

    /// Replaces one field of the row with the given id. Unknown ids are
    /// ignored.
    pub fn update_row(&mut self, id: RowId, update: RowUpdate) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.id == id) {
            row.apply(update);
        }
    }

    /// Sum of every row's subtotal. Saturates instead of overflowing.
    pub fn grand_total(&self) -> u64 {
        self.rows
            .iter()
            .fold(0u64, |acc, row| acc.saturating_add(row.subtotal()))
    }

    /// Checks that every row has brand, spec, color and a price. Quantity is
    /// not checked.
    pub fn validate(&self) -> Result<(), FormError> {
        let positions: Vec<usize> = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| !row.is_complete())
            .map(|(i, _)| i + 1)
            .collect();

        if positions.is_empty() {
            Ok(())
        } else {
            Err(FormError::IncompleteRows { positions })
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Captures the current date, rows and grand total.
    pub fn snapshot(&self) -> PurchaseSnapshot {
        PurchaseSnapshot {
            date: self.date.clone(),
            rows: self.rows.clone(),
            grand_total: self.grand_total(),
        }
    }
}

#[cfg(test)]
impl PurchaseForm {
    /// Builds a form from explicit rows. Rows must be non-empty with unique
    /// ids.
    pub fn with_rows<S: Into<String>>(date: S, rows: Vec<PurchaseRow>) -> Self {
        assert!(!rows.is_empty(), "a purchase form needs at least one row");
        Self {
            date: date.into(),
            rows,
        }
    }
}

#[cfg(test)]
#[path = "./form_tests.rs"]
mod tests;
