use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Points are stored as a JSON array of [x, y] pairs
        manager
            .create_table(
                Table::create()
                    .table(Polygons::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Polygons::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Polygons::Name)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Polygons::Points)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Polygons::CreatedAt)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Polygons::UpdatedAt)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing is always newest-first
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_polygons_created_at")
                    .table(Polygons::Table)
                    .col(Polygons::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite drops the created_at index along with the table
        manager
            .drop_table(Table::drop().table(Polygons::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Polygons {
    Table,
    Id,
    Name,
    Points,
    CreatedAt,
    UpdatedAt,
}
