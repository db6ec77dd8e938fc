use crate::errors::internal::{InternalError, PolygonError};
use poem_openapi::{ApiResponse, Object, payload::Json};
use std::fmt;

/// Standardized error response for polygon endpoints
#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct PolygonErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Polygon operation error types
#[derive(ApiResponse, Debug)]
pub enum PolygonApiError {
    /// Request body failed validation
    #[oai(status = 400)]
    BadRequest(Json<PolygonErrorResponse>),

    /// No polygon with the requested id
    #[oai(status = 404)]
    NotFound(Json<PolygonErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<PolygonErrorResponse>),
}

impl PolygonApiError {
    /// Create a BadRequest error
    pub fn validation_failed(reason: impl fmt::Display) -> Self {
        PolygonApiError::BadRequest(Json(PolygonErrorResponse {
            error: "validation_failed".to_string(),
            message: format!("Validation failed: {}", reason),
            status_code: 400,
        }))
    }

    /// Create a NotFound error
    pub fn polygon_not_found(id: &str) -> Self {
        PolygonApiError::NotFound(Json(PolygonErrorResponse {
            error: "polygon_not_found".to_string(),
            message: format!("Polygon {} not found", id),
            status_code: 404,
        }))
    }

    /// Convert InternalError to PolygonApiError
    ///
    /// This is the only conversion point from internal errors to API errors.
    /// Infrastructure details are logged but never sent to clients.
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::Polygon(PolygonError::NotFound(id)) => Self::polygon_not_found(id),
            InternalError::Polygon(domain) => Self::validation_failed(domain),
            InternalError::Database(_) => {
                tracing::error!("Database error in polygon operation: {}", err);
                Self::internal_server_error()
            }
            InternalError::Parse { value_type, .. } => {
                tracing::error!("Stored {} could not be decoded: {}", value_type, err);
                Self::internal_server_error()
            }
        }
    }

    /// Generic internal error; never carries internal details
    fn internal_server_error() -> Self {
        PolygonApiError::InternalError(Json(PolygonErrorResponse {
            error: "internal_error".to_string(),
            message: "An internal error occurred".to_string(),
            status_code: 500,
        }))
    }

    fn body(&self) -> &PolygonErrorResponse {
        match self {
            PolygonApiError::BadRequest(json) => &json.0,
            PolygonApiError::NotFound(json) => &json.0,
            PolygonApiError::InternalError(json) => &json.0,
        }
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        self.body().message.clone()
    }

    /// Get the HTTP status code from the error variant
    pub fn status_code(&self) -> u16 {
        self.body().status_code
    }
}

impl From<InternalError> for PolygonApiError {
    fn from(err: InternalError) -> Self {
        Self::from_internal_error(err)
    }
}

impl fmt::Display for PolygonApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
