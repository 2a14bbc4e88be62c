//! Payment recording service.

use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    config::WriteConsistency,
    data::{parcel::ParcelRepository, payment::PaymentRepository},
    error::AppError,
    model::payment::{CreatePaymentParams, Payment, PaymentSummary},
};

/// Number of payments returned by the recent-payments query.
const RECENT_PAYMENTS_LIMIT: u64 = 5;

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
    consistency: WriteConsistency,
}

impl<'a> PaymentService<'a> {
    pub fn new(db: &'a DatabaseConnection, consistency: WriteConsistency) -> Self {
        Self { db, consistency }
    }

    /// Marks the parcel paid, then records the payment.
    ///
    /// The parcel is updated first so that no payment is ever recorded for a parcel
    /// that could not be marked paid.
    ///
    /// # Returns
    /// - `Ok(Payment)` - Parcel flipped to paid and payment inserted
    /// - `Err(AppError::NotFound)` - Parcel missing or already paid; nothing inserted
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn record(&self, params: CreatePaymentParams) -> Result<Payment, AppError> {
        match self.consistency {
            WriteConsistency::BestEffort => record_on(self.db, params).await,
            WriteConsistency::Transactional => {
                let txn = self.db.begin().await?;
                let payment = record_on(&txn, params).await?;
                txn.commit().await?;
                Ok(payment)
            }
        }
    }

    /// Lists payments newest first, optionally only those of one payer.
    pub async fn get_all(&self, email: Option<&str>) -> Result<Vec<Payment>, AppError> {
        Ok(PaymentRepository::new(self.db).get_all(email).await?)
    }

    pub async fn summary_for_user(&self, email: &str) -> Result<PaymentSummary, AppError> {
        Ok(PaymentRepository::new(self.db).summary_by_email(email).await?)
    }

    /// The five most recent payments of a payer.
    pub async fn get_recent_for_user(&self, email: &str) -> Result<Vec<Payment>, AppError> {
        Ok(PaymentRepository::new(self.db)
            .get_recent_by_email(email, RECENT_PAYMENTS_LIMIT)
            .await?)
    }
}

async fn record_on<C: ConnectionTrait>(
    conn: &C,
    params: CreatePaymentParams,
) -> Result<Payment, AppError> {
    let marked = ParcelRepository::new(conn).mark_paid(params.parcel_id).await?;

    if marked == 0 {
        return Err(AppError::NotFound(
            "Parcel not found or already paid".to_string(),
        ));
    }

    let payment = PaymentRepository::new(conn).create(params, Utc::now()).await?;

    tracing::info!(
        "Recorded payment {} for parcel {}",
        payment.id,
        payment.parcel_id
    );

    Ok(payment)
}
