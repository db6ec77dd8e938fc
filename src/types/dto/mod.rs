// API data transfer objects
pub mod common;
pub mod polygon;
