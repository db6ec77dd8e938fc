use thiserror::Error;

/// Polygon domain errors
#[derive(Error, Debug)]
pub enum PolygonError {
    /// No polygon with the given id
    #[error("Polygon {0} not found")]
    NotFound(String),

    /// Name is empty or whitespace only
    #[error("Polygon name must not be blank")]
    BlankName,

    #[error("A polygon needs at least 3 points, got {count}")]
    TooFewPoints { count: usize },

    #[error("Invalid point at index {index}: {reason}")]
    InvalidPoint { index: usize, reason: String },
}

impl PolygonError {
    pub fn invalid_point(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidPoint {
            index,
            reason: reason.into(),
        }
    }

    /// Whether the error was caused by malformed client input
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::NotFound(_))
    }
}
