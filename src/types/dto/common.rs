use poem_openapi::Object;

/// Response model for health check endpoint
#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct HealthResponse {
    /// "healthy" when the database answers, "degraded" otherwise
    pub status: String,

    /// Timestamp of the health check (ISO 8601 format)
    pub timestamp: String,

    /// Database reachability ("up" or "down")
    pub database: String,

    /// Number of stored polygons, absent when the database is down
    pub polygon_count: Option<u64>,
}
