use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TrackingLog::Table)
                    .if_not_exists()
                    .col(pk_uuid(TrackingLog::Id))
                    .col(string(TrackingLog::TrackingId))
                    .col(uuid_null(TrackingLog::ParcelId))
                    .col(string(TrackingLog::Status))
                    .col(text_null(TrackingLog::Message))
                    .col(string_null(TrackingLog::UpdatedBy))
                    .col(timestamp_with_time_zone(TrackingLog::Time))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tracking_log_tracking_id")
                    .table(TrackingLog::Table)
                    .col(TrackingLog::TrackingId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TrackingLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TrackingLog {
    Table,
    Id,
    TrackingId,
    ParcelId,
    Status,
    Message,
    UpdatedBy,
    Time,
}
