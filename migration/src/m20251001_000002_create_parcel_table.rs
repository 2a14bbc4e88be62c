use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Parcel::Table)
                    .if_not_exists()
                    .col(pk_uuid(Parcel::Id))
                    .col(string_null(Parcel::CreatedBy))
                    .col(string(Parcel::PaymentStatus).default("unpaid"))
                    .col(string(Parcel::DeliveryStatus).default("pending"))
                    .col(uuid_null(Parcel::AssignedRiderId))
                    .col(string_null(Parcel::AssignedRiderName))
                    .col(string_null(Parcel::CashoutStatus))
                    .col(json(Parcel::Details))
                    .col(timestamp_with_time_zone(Parcel::CreatedAt))
                    .col(timestamp_with_time_zone_null(Parcel::PickedAt))
                    .col(timestamp_with_time_zone_null(Parcel::DeliveredAt))
                    .col(timestamp_with_time_zone_null(Parcel::CashedOutAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_parcel_created_by")
                    .table(Parcel::Table)
                    .col(Parcel::CreatedBy)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_parcel_assigned_rider_id")
                    .table(Parcel::Table)
                    .col(Parcel::AssignedRiderId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Parcel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Parcel {
    Table,
    Id,
    CreatedBy,
    PaymentStatus,
    DeliveryStatus,
    AssignedRiderId,
    AssignedRiderName,
    CashoutStatus,
    Details,
    CreatedAt,
    PickedAt,
    DeliveredAt,
    CashedOutAt,
}
