use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};
use crate::app_data::AppData;
use crate::coordinators::PolygonCoordinator;
use crate::errors::PolygonApiError;
use crate::types::dto::polygon::{
    CreatePolygonApiResponse, CreatePolygonRequest, DeletePolygonApiResponse, PolygonResponse,
};
use std::sync::Arc;

/// Polygon CRUD endpoints
pub struct PolygonApi {
    polygon_coordinator: Arc<PolygonCoordinator>,
}

impl PolygonApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            polygon_coordinator: Arc::new(PolygonCoordinator::new(app_data)),
        }
    }
}

/// API tags for polygon endpoints
#[derive(Tags)]
enum PolygonTags {
    /// Polygon management endpoints
    Polygons,
}

#[OpenApi]
impl PolygonApi {
    /// Create a polygon
    ///
    /// Stores a named polygon of at least three points and returns the record
    /// with its generated id and timestamps
    #[oai(path = "/polygons", method = "post", tag = "PolygonTags::Polygons")]
    async fn create_polygon(
        &self,
        body: Json<CreatePolygonRequest>,
    ) -> Result<CreatePolygonApiResponse, PolygonApiError> {
        let polygon = self
            .polygon_coordinator
            .create_checked(body.0.into_new_polygon())
            .await?;

        Ok(CreatePolygonApiResponse::Created(Json(polygon.into())))
    }

    /// List all polygons, newest first
    #[oai(path = "/polygons", method = "get", tag = "PolygonTags::Polygons")]
    async fn list_polygons(&self) -> Result<Json<Vec<PolygonResponse>>, PolygonApiError> {
        let polygons = self.polygon_coordinator.list().await?;

        Ok(Json(polygons.into_iter().map(PolygonResponse::from).collect()))
    }

    /// Get a polygon by id
    #[oai(path = "/polygons/:id", method = "get", tag = "PolygonTags::Polygons")]
    async fn get_polygon(&self, id: Path<String>) -> Result<Json<PolygonResponse>, PolygonApiError> {
        let polygon = self.polygon_coordinator.get(&id.0).await?;

        Ok(Json(polygon.into()))
    }

    /// Delete a polygon by id
    #[oai(path = "/polygons/:id", method = "delete", tag = "PolygonTags::Polygons")]
    async fn delete_polygon(&self, id: Path<String>) -> Result<DeletePolygonApiResponse, PolygonApiError> {
        self.polygon_coordinator.delete(&id.0).await?;

        Ok(DeletePolygonApiResponse::Deleted)
    }
}
