pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_polygons_table;

pub struct PolygonMigrator;

#[async_trait::async_trait]
impl MigratorTrait for PolygonMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_polygons_table::Migration),
        ]
    }
}
