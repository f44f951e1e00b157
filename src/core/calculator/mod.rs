pub mod balance;
pub mod duration;
