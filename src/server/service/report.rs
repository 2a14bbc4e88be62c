use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        parcel::ParcelRepository, payment::PaymentRepository, rider::RiderRepository,
        user::UserRepository,
    },
    error::AppError,
    model::report::DashboardStats,
};

/// Read-only aggregations for the admin dashboard.
pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Collects platform-wide totals. Every call re-aggregates from the live tables.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, AppError> {
        let parcels = ParcelRepository::new(self.db);
        let payments = PaymentRepository::new(self.db);

        Ok(DashboardStats {
            total_parcels: parcels.count().await?,
            total_users: UserRepository::new(self.db).count().await?,
            total_riders: RiderRepository::new(self.db).count().await?,
            total_payments: payments.count().await?,
            total_revenue: payments.total_amount().await?,
            delivery_status_counts: parcels.count_by_status().await?,
        })
    }
}
