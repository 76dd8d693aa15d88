pub mod charts;
pub mod map;
pub mod reports;
