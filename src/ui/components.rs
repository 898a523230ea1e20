pub mod cycle_select;
pub mod footer;
pub mod header;
pub mod input;
pub mod popover;
pub mod searchable_select;
pub mod toast;
