//! A single purchase line item.

use serde::{Deserialize, Serialize};

/// Sequence number identifying a row within its form.
pub type RowId = u32;

/// Quantity given to freshly created rows.
pub const DEFAULT_QTY: u64 = 1;

/// One purchase line: what was bought, at what unit price, and how many.
///
/// Empty strings mean "unselected" and a zero price means "unset".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRow {
    pub id: RowId,
    pub brand: String,
    pub spec: String,
    pub color: String,
    pub price: u64,
    pub qty: u64,
}

/// Field-level replacement applied to a single row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowUpdate {
    Brand(String),
    Spec(String),
    Color(String),
    Price(u64),
    Qty(u64),
}

impl PurchaseRow {
    /// Creates a blank row with the given id.
    pub fn empty(id: RowId) -> Self {
        Self {
            id,
            brand: String::new(),
            spec: String::new(),
            color: String::new(),
            price: 0,
            qty: DEFAULT_QTY,
        }
    }

    /// Unit price times quantity. Saturates instead of overflowing.
    pub fn subtotal(&self) -> u64 {
        self.price.saturating_mul(self.qty)
    }

    /// A row is complete once brand, spec and color are selected and a price
    /// is set. Quantity is deliberately not part of this check.
    pub fn is_complete(&self) -> bool {
        !self.brand.is_empty()
            && !self.spec.is_empty()
            && !self.color.is_empty()
            && self.price > 0
    }

    /// Replaces the single field named by `update`.
    pub fn apply(&mut self, update: RowUpdate) {
        match update {
            RowUpdate::Brand(brand) => self.brand = brand,
            RowUpdate::Spec(spec) => self.spec = spec,
            RowUpdate::Color(color) => self.color = color,
            RowUpdate::Price(price) => self.price = price,
            RowUpdate::Qty(qty) => self.qty = qty,
        }
    }
}

/// Parses quantity input. Anything that is not a plain non-negative integer
/// collapses to 0.
pub fn parse_quantity(input: &str) -> u64 {
    input.trim().parse::<u64>().unwrap_or(0)
}

#[cfg(test)]
#[path = "./row_tests.rs"]
mod tests;
