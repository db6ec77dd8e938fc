use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::app_data::AppData;
use crate::errors::InternalError;
use crate::errors::internal::PolygonError;
use crate::stores::PolygonStore;
use crate::types::internal::{NewPolygon, Polygon};

/// Orchestrates polygon workflows for the API and CLI
///
/// Turns "nothing there" results from the store into
/// `PolygonError::NotFound`, and logs each completed change.
pub struct PolygonCoordinator {
    db: DatabaseConnection,
    polygon_store: Arc<PolygonStore>,
}

impl PolygonCoordinator {
    /// Create PolygonCoordinator from AppData
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            db: app_data.db.clone(),
            polygon_store: Arc::clone(&app_data.polygon_store),
        }
    }

    /// Store a validated polygon
    pub async fn create(&self, new_polygon: NewPolygon) -> Result<Polygon, InternalError> {
        let polygon = self.polygon_store.create(&self.db, new_polygon).await?;

        tracing::info!("Created polygon: {}", polygon.id);

        Ok(polygon)
    }

    /// Validate raw input first, then store it
    ///
    /// Validation failures are reported before anything touches the database.
    pub async fn create_checked(
        &self,
        new_polygon: Result<NewPolygon, PolygonError>,
    ) -> Result<Polygon, InternalError> {
        let new_polygon = new_polygon.inspect_err(|e| {
            if e.is_validation() {
                tracing::warn!("Rejected polygon input: {}", e);
            }
        })?;

        self.create(new_polygon).await
    }

    /// All polygons, newest first
    pub async fn list(&self) -> Result<Vec<Polygon>, InternalError> {
        self.polygon_store.list(&self.db).await
    }

    /// Fetch a polygon or fail with NotFound
    pub async fn get(&self, id: &str) -> Result<Polygon, InternalError> {
        self.polygon_store
            .get(&self.db, id)
            .await?
            .ok_or_else(|| PolygonError::NotFound(id.to_string()).into())
    }

    /// Delete a polygon or fail with NotFound
    pub async fn delete(&self, id: &str) -> Result<(), InternalError> {
        if !self.polygon_store.delete(&self.db, id).await? {
            return Err(PolygonError::NotFound(id.to_string()).into());
        }

        tracing::info!("Deleted polygon: {}", id);

        Ok(())
    }

    /// Number of stored polygons
    pub async fn count(&self) -> Result<u64, InternalError> {
        self.polygon_store.count(&self.db).await
    }
}
