use chrono::{DateTime, Utc};

use crate::errors::internal::PolygonError;
use crate::types::internal::point::Point;

/// Minimum number of points for a closed shape
pub const MIN_POLYGON_POINTS: usize = 3;

/// A stored polygon record
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub id: String,
    pub name: String,
    pub points: Vec<Point>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for creating a polygon
///
/// Construction goes through [`NewPolygon::new`], so a value of this type
/// always has a non-blank name and at least three finite points.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPolygon {
    name: String,
    points: Vec<Point>,
}

impl NewPolygon {
    pub fn new(name: impl Into<String>, points: Vec<Point>) -> Result<Self, PolygonError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PolygonError::BlankName);
        }

        if points.len() < MIN_POLYGON_POINTS {
            return Err(PolygonError::TooFewPoints { count: points.len() });
        }

        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(PolygonError::invalid_point(index, "coordinates must be finite numbers"));
        }

        Ok(Self { name, points })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_parts(self) -> (String, Vec<Point>) {
        (self.name, self.points)
    }
}
