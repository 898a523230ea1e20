//! Purchase line items and the form that owns them.

pub mod catalog;
pub mod date;
pub mod form;
pub mod row;
