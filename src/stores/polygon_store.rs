use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Order, PaginatorTrait, QueryOrder, Set};
use uuid::Uuid;

use crate::errors::InternalError;
use crate::types::db::polygon::{self, ActiveModel, Entity as PolygonEntity};
use crate::types::internal::{NewPolygon, Point, Polygon};

/// Repository for polygon records
///
/// Holds no connection of its own; every operation runs on the connection
/// (or transaction) handed in by the caller.
#[derive(Debug, Default)]
pub struct PolygonStore {}

impl PolygonStore {
    pub fn new() -> Self {
        Self {}
    }

    /// Create and persist a polygon
    ///
    /// Assigns a fresh UUID v4 and a single timestamp for both created_at and
    /// updated_at. The timestamp is truncated to microseconds, the precision
    /// of the stored column, so the returned record equals what `get` reads.
    ///
    /// # Errors
    /// Returns `InternalError::Database` if the insert fails
    pub async fn create(
        &self,
        conn: &impl ConnectionTrait,
        new_polygon: NewPolygon,
    ) -> Result<Polygon, InternalError> {
        let now = Utc::now().trunc_subsecs(6);
        let (name, points) = new_polygon.into_parts();

        let polygon = Polygon {
            id: Uuid::new_v4().to_string(),
            name,
            points,
            created_at: now,
            updated_at: now,
        };

        self.insert(conn, &polygon).await?;

        tracing::debug!("Stored polygon {} with {} points", polygon.id, polygon.points.len());

        Ok(polygon)
    }

    /// Persist a fully formed record
    ///
    /// A duplicate id is rejected by the primary key and surfaces as a
    /// database error.
    pub async fn insert(&self, conn: &impl ConnectionTrait, polygon: &Polygon) -> Result<(), InternalError> {
        let points_json = serde_json::to_string(&polygon.points)
            .map_err(|e| InternalError::parse("points", e.to_string()))?;

        let model = ActiveModel {
            id: Set(polygon.id.clone()),
            name: Set(polygon.name.clone()),
            points: Set(points_json),
            created_at: Set(format_timestamp(&polygon.created_at)),
            updated_at: Set(format_timestamp(&polygon.updated_at)),
        };

        model
            .insert(conn)
            .await
            .map_err(|e| InternalError::database("insert_polygon", e))?;

        Ok(())
    }

    /// All polygons, newest first
    ///
    /// Records sharing a created_at come back in reverse insertion order
    /// (SQLite rowid), so the latest insert is always first.
    pub async fn list(&self, conn: &impl ConnectionTrait) -> Result<Vec<Polygon>, InternalError> {
        let models = PolygonEntity::find()
            .order_by_desc(polygon::Column::CreatedAt)
            .order_by(Expr::cust("rowid"), Order::Desc)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("list_polygons", e))?;

        models.into_iter().map(to_domain).collect()
    }

    /// Look up a polygon by exact id
    pub async fn get(&self, conn: &impl ConnectionTrait, id: &str) -> Result<Option<Polygon>, InternalError> {
        let model = PolygonEntity::find_by_id(id)
            .one(conn)
            .await
            .map_err(|e| InternalError::database("get_polygon", e))?;

        model.map(to_domain).transpose()
    }

    /// Delete a polygon by id
    ///
    /// # Returns
    /// * `Ok(true)` - A record was removed
    /// * `Ok(false)` - Nothing matched the id
    /// * `Err(InternalError)` - Database error
    pub async fn delete(&self, conn: &impl ConnectionTrait, id: &str) -> Result<bool, InternalError> {
        let result = PolygonEntity::delete_by_id(id)
            .exec(conn)
            .await
            .map_err(|e| InternalError::database("delete_polygon", e))?;

        Ok(result.rows_affected > 0)
    }

    /// Number of stored polygons
    pub async fn count(&self, conn: &impl ConnectionTrait) -> Result<u64, InternalError> {
        PolygonEntity::find()
            .count(conn)
            .await
            .map_err(|e| InternalError::database("count_polygons", e))
    }
}

fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(column: &str, value: &str) -> Result<DateTime<Utc>, InternalError> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| InternalError::parse(column, format!("{}: {}", value, e)))
}

fn to_domain(model: polygon::Model) -> Result<Polygon, InternalError> {
    let points: Vec<Point> = serde_json::from_str(&model.points)
        .map_err(|e| InternalError::parse("points", format!("polygon {}: {}", model.id, e)))?;

    Ok(Polygon {
        created_at: parse_timestamp("created_at", &model.created_at)?,
        updated_at: parse_timestamp("updated_at", &model.updated_at)?,
        id: model.id,
        name: model.name,
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::utils::setup_test_db;
    use chrono::TimeZone;
    use sea_orm::{ConnectionTrait, Statement};

    fn new_polygon(name: &str, points: &[(f64, f64)]) -> NewPolygon {
        NewPolygon::new(name, points.iter().copied().map(Point::from).collect()).unwrap()
    }

    fn triangle(name: &str) -> NewPolygon {
        new_polygon(name, &[(0.0, 0.0), (10.0, 0.0), (5.0, 10.0)])
    }

    fn seeded(id: &str, name: &str, day: u32) -> Polygon {
        let ts = Utc.with_ymd_and_hms(2023, 1, day, 0, 0, 0).unwrap();
        Polygon {
            id: id.to_string(),
            name: name.to_string(),
            points: vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0), Point::new(3.0, 3.0)],
            created_at: ts,
            updated_at: ts,
        }
    }

    #[tokio::test]
    async fn test_create_triangle_scenario() {
        let db = setup_test_db().await;
        let store = PolygonStore::new();

        let created = store.create(&db, triangle("Tri")).await.unwrap();

        assert!(Uuid::parse_str(&created.id).is_ok());
        assert_eq!(created.name, "Tri");
        assert_eq!(
            created.points,
            vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(5.0, 10.0)]
        );
        assert_eq!(created.created_at, created.updated_at);
    }

    #[tokio::test]
    async fn test_list_empty_store() {
        let db = setup_test_db().await;
        let store = PolygonStore::new();

        let all = store.list(&db).await.unwrap();
        assert!(all.is_empty());
        assert_eq!(store.count(&db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let db = setup_test_db().await;
        let store = PolygonStore::new();

        let a = store.create(&db, triangle("A")).await.unwrap();
        let b = store.create(&db, triangle("B")).await.unwrap();

        let ids: Vec<String> = store.list(&db).await.unwrap().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![b.id, a.id]);
    }

    #[tokio::test]
    async fn test_list_orders_by_created_at_not_insertion() {
        let db = setup_test_db().await;
        let store = PolygonStore::new();

        // Inserted newest first; list must still sort by timestamp
        store.insert(&db, &seeded("second", "Second", 2)).await.unwrap();
        store.insert(&db, &seeded("first", "First", 1)).await.unwrap();

        let names: Vec<String> = store.list(&db).await.unwrap().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Second", "First"]);
    }

    #[tokio::test]
    async fn test_list_breaks_timestamp_ties_by_insertion_order() {
        let db = setup_test_db().await;
        let store = PolygonStore::new();

        store.insert(&db, &seeded("p-1", "One", 5)).await.unwrap();
        store.insert(&db, &seeded("p-2", "Two", 5)).await.unwrap();
        store.insert(&db, &seeded("p-3", "Three", 5)).await.unwrap();

        let ids: Vec<String> = store.list(&db).await.unwrap().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["p-3", "p-2", "p-1"]);
    }

    #[tokio::test]
    async fn test_round_trip_preserves_points_exactly() {
        let db = setup_test_db().await;
        let store = PolygonStore::new();

        let input = new_polygon(
            "Data Integrity Test with éñü 中文 🔥",
            &[(0.123456789, -9.987654321), (1000.5, 2000.75), (-500.25, -1000.33), (0.1 + 0.2, 1e-300)],
        );
        let created = store.create(&db, input.clone()).await.unwrap();
        let found = store.get(&db, &created.id).await.unwrap().unwrap();

        assert_eq!(found.name, input.name());
        assert_eq!(found.points, input.points());
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_get_unknown_id_returns_none() {
        let db = setup_test_db().await;
        let store = PolygonStore::new();

        assert!(store.get(&db, "non-existent-id").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_after_delete_returns_none() {
        let db = setup_test_db().await;
        let store = PolygonStore::new();

        let created = store.create(&db, triangle("To Delete")).await.unwrap();
        assert!(store.delete(&db, &created.id).await.unwrap());
        assert!(store.get(&db, &created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_never_created_returns_false() {
        let db = setup_test_db().await;
        let store = PolygonStore::new();

        assert!(!store.delete(&db, "never-created").await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_twice_reports_nothing_removed() {
        let db = setup_test_db().await;
        let store = PolygonStore::new();

        let created = store.create(&db, triangle("Once")).await.unwrap();
        assert!(store.delete(&db, &created.id).await.unwrap());
        assert!(!store.delete(&db, &created.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_first_leaves_second() {
        let db = setup_test_db().await;
        let store = PolygonStore::new();

        let first = store.create(&db, triangle("Keep Me Not")).await.unwrap();
        let second = store.create(&db, triangle("Keep Me")).await.unwrap();

        store.delete(&db, &first.id).await.unwrap();

        let all = store.list(&db).await.unwrap();
        assert_eq!(all, vec![second]);
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let db = setup_test_db().await;
        let store = PolygonStore::new();

        let mut ids = std::collections::HashSet::new();
        for i in 0..20 {
            let created = store.create(&db, triangle(&format!("Polygon {}", i))).await.unwrap();
            assert!(ids.insert(created.id));
        }
        assert_eq!(store.count(&db).await.unwrap(), 20);
    }

    #[tokio::test]
    async fn test_insert_duplicate_id_is_database_error() {
        let db = setup_test_db().await;
        let store = PolygonStore::new();

        store.insert(&db, &seeded("dup", "First", 1)).await.unwrap();
        let result = store.insert(&db, &seeded("dup", "Second", 2)).await;

        assert!(matches!(result, Err(InternalError::Database(_))));
    }

    #[tokio::test]
    async fn test_corrupt_points_column_is_parse_error() {
        let db = setup_test_db().await;
        let store = PolygonStore::new();

        db.execute(Statement::from_string(
            db.get_database_backend(),
            "INSERT INTO polygons (id, name, points, created_at, updated_at) \
             VALUES ('bad', 'Bad', 'not json', '2024-01-01T00:00:00.000000Z', '2024-01-01T00:00:00.000000Z')",
        ))
        .await
        .unwrap();

        match store.get(&db, "bad").await {
            Err(InternalError::Parse { value_type, .. }) => assert_eq!(value_type, "points"),
            other => panic!("Expected Parse error, got: {:?}", other),
        }
    }
}
