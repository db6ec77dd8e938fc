use chrono::{DateTime, SecondsFormat, Utc};
use poem_openapi::payload::Json;
use poem_openapi::{ApiResponse, Object};

use crate::errors::internal::PolygonError;
use crate::types::internal::{NewPolygon, Point, Polygon};

/// Request model for creating a polygon
#[derive(Object, Debug, Clone)]
pub struct CreatePolygonRequest {
    /// Display name of the polygon; must not be blank
    pub name: String,

    /// Ordered vertices as [x, y] pairs in virtual canvas coordinates; at least 3
    pub points: Vec<Vec<f64>>,
}

impl CreatePolygonRequest {
    /// Validate the request body and turn it into a domain value
    ///
    /// Every content rule lives here (blank name, point count, pair arity,
    /// finite coordinates) so each failure maps to the same error body.
    pub fn into_new_polygon(self) -> Result<NewPolygon, PolygonError> {
        let points = self
            .points
            .iter()
            .enumerate()
            .map(|(index, pair)| match pair.as_slice() {
                [x, y] => Ok(Point::new(*x, *y)),
                _ => Err(PolygonError::invalid_point(
                    index,
                    format!("expected [x, y], got {} values", pair.len()),
                )),
            })
            .collect::<Result<Vec<_>, _>>()?;

        NewPolygon::new(self.name, points)
    }
}

/// Response model representing a stored polygon
#[derive(Object, Debug, Clone, PartialEq)]
#[oai(rename_all = "camelCase")]
pub struct PolygonResponse {
    /// Unique identifier (UUID v4)
    pub id: String,

    /// Display name of the polygon
    pub name: String,

    /// Ordered vertices as [x, y] pairs
    pub points: Vec<Vec<f64>>,

    /// Creation time (ISO 8601, UTC)
    pub created_at: String,

    /// Last modification time (ISO 8601, UTC); equal to created_at
    pub updated_at: String,
}

fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

impl From<Polygon> for PolygonResponse {
    fn from(polygon: Polygon) -> Self {
        Self {
            created_at: format_timestamp(&polygon.created_at),
            updated_at: format_timestamp(&polygon.updated_at),
            points: polygon.points.iter().map(|p| vec![p.x(), p.y()]).collect(),
            id: polygon.id,
            name: polygon.name,
        }
    }
}

/// API response for polygon creation
#[derive(ApiResponse)]
pub enum CreatePolygonApiResponse {
    /// Polygon stored; body holds the full record
    #[oai(status = 201)]
    Created(Json<PolygonResponse>),
}

/// API response for polygon deletion
#[derive(ApiResponse)]
pub enum DeletePolygonApiResponse {
    /// Polygon removed
    #[oai(status = 204)]
    Deleted,
}
