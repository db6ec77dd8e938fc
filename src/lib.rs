// Library exports for the binary, integration tests and external use

pub mod api;
pub mod app_data;
pub mod canvas;
pub mod cli;
pub mod config;
pub mod coordinators;
pub mod errors;
pub mod stores;
pub mod types;

#[cfg(test)]
mod test;

pub use app_data::AppData;
