pub mod category;
pub mod entry;
pub mod filter;
pub mod hours;
