pub mod purchase;
pub mod traits;
