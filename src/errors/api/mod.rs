// API-facing error types
pub mod polygon;

pub use polygon::{PolygonApiError, PolygonErrorResponse};

#[cfg(test)]
mod polygon_test;
