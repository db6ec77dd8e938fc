// Database entities - SeaORM models
pub mod polygon;
