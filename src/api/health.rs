use poem_openapi::{payload::Json, OpenApi, Tags};
use crate::app_data::AppData;
use crate::coordinators::PolygonCoordinator;
use crate::types::dto::common::HealthResponse;
use chrono::Utc;
use std::sync::Arc;

/// Health check API
pub struct HealthApi {
    polygon_coordinator: Arc<PolygonCoordinator>,
}

impl HealthApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            polygon_coordinator: Arc::new(PolygonCoordinator::new(app_data)),
        }
    }
}

/// API tags for health endpoints
#[derive(Tags)]
enum ApiTags {
    /// Health check endpoints
    Health,
}

#[OpenApi]
impl HealthApi {
    /// Health check endpoint
    ///
    /// Reports service status and whether the polygon database answers
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health(&self) -> Json<HealthResponse> {
        let (status, database, polygon_count) = match self.polygon_coordinator.count().await {
            Ok(count) => ("healthy", "up", Some(count)),
            Err(e) => {
                tracing::warn!("Health check could not reach the database: {}", e);
                ("degraded", "down", None)
            }
        };

        Json(HealthResponse {
            status: status.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            database: database.to_string(),
            polygon_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::utils::setup_test_app_data;

    #[tokio::test]
    async fn test_health_reports_polygon_count() {
        let (_db, app_data) = setup_test_app_data().await;
        let api = HealthApi::new(app_data);

        let Json(response) = api.health().await;
        assert_eq!(response.status, "healthy");
        assert_eq!(response.database, "up");
        assert_eq!(response.polygon_count, Some(0));
    }

    #[tokio::test]
    async fn test_health_degraded_when_database_closed() {
        let (db, app_data) = setup_test_app_data().await;
        let api = HealthApi::new(app_data);

        db.close().await.unwrap();

        let Json(response) = api.health().await;
        assert_eq!(response.status, "degraded");
        assert_eq!(response.database, "down");
        assert_eq!(response.polygon_count, None);
    }
}
