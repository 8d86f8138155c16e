pub mod analyze;
pub mod caption;
pub mod provision;
pub mod search;
