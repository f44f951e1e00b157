pub mod add;
pub mod backup;
pub mod calculator;
pub mod config;
pub mod del;
pub mod edit;
pub mod list;
pub mod log;
