// Stores layer - Data access and repository pattern
pub mod polygon_store;

pub use polygon_store::PolygonStore;
