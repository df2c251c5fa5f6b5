pub mod coerce;
pub mod collector;
pub mod error;
pub mod name;
