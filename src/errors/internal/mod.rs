use thiserror::Error;

pub mod database;
pub mod polygon;

pub use database::DatabaseError;
pub use polygon::PolygonError;

/// Internal error type for store and coordinator operations
///
/// Infrastructure errors (Database, Parse) are shared by every store; domain
/// errors live in their own enum. Not exposed via API - endpoints convert to
/// PolygonApiError.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("Parse error: failed to parse {value_type}: {message}")]
    Parse {
        value_type: String,
        message: String,
    },

    #[error(transparent)]
    Polygon(#[from] PolygonError),
}

impl InternalError {
    pub fn database(operation: &str, source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::Operation { operation: operation.to_string(), source })
    }

    pub fn parse(value_type: impl Into<String>, message: impl Into<String>) -> InternalError {
        InternalError::Parse {
            value_type: value_type.into(),
            message: message.into(),
        }
    }
}
