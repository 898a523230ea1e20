pub mod base;
pub mod message;
