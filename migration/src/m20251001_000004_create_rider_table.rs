use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rider::Table)
                    .if_not_exists()
                    .col(pk_uuid(Rider::Id))
                    .col(string(Rider::Email))
                    .col(string(Rider::Name))
                    .col(string(Rider::District))
                    .col(string(Rider::Status).default("pending"))
                    .col(string_null(Rider::WorkStatus))
                    .col(json(Rider::Details))
                    .col(timestamp_with_time_zone(Rider::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rider_district")
                    .table(Rider::Table)
                    .col(Rider::District)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rider::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Rider {
    Table,
    Id,
    Email,
    Name,
    District,
    Status,
    WorkStatus,
    Details,
    CreatedAt,
}
