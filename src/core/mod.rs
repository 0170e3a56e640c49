pub mod calculator;
pub mod entry;
pub mod logic;
pub mod rounding;
