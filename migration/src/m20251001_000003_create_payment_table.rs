use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // parcel_id is a weak reference: payments outlive deleted parcels.
        manager
            .create_table(
                Table::create()
                    .table(Payment::Table)
                    .if_not_exists()
                    .col(pk_uuid(Payment::Id))
                    .col(uuid(Payment::ParcelId))
                    .col(string(Payment::Email))
                    .col(double(Payment::Amount))
                    .col(string_null(Payment::PaymentMethod))
                    .col(string_null(Payment::TransactionId))
                    .col(timestamp_with_time_zone(Payment::PaidAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_payment_email")
                    .table(Payment::Table)
                    .col(Payment::Email)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Payment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Payment {
    Table,
    Id,
    ParcelId,
    Email,
    Amount,
    PaymentMethod,
    TransactionId,
    PaidAt,
}
