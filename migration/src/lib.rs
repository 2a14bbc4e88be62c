pub use sea_orm_migration::prelude::*;

mod m20251001_000001_create_user_table;
mod m20251001_000002_create_parcel_table;
mod m20251001_000003_create_payment_table;
mod m20251001_000004_create_rider_table;
mod m20251001_000005_create_tracking_log_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251001_000001_create_user_table::Migration),
            Box::new(m20251001_000002_create_parcel_table::Migration),
            Box::new(m20251001_000003_create_payment_table::Migration),
            Box::new(m20251001_000004_create_rider_table::Migration),
            Box::new(m20251001_000005_create_tracking_log_table::Migration),
        ]
    }
}
