//! Payment data repository for database operations.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::server::model::payment::{CreatePaymentParams, Payment, PaymentSummary};

use entity::payment::Column;

/// Repository providing database operations for payment records.
pub struct PaymentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PaymentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a payment record.
    ///
    /// # Arguments
    /// - `params` - Parcel reference, payer email, amount and processor details
    /// - `paid_at` - Time the payment is recorded
    ///
    /// # Returns
    /// - `Ok(Payment)` - The inserted payment with its generated id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        params: CreatePaymentParams,
        paid_at: DateTime<Utc>,
    ) -> Result<Payment, DbErr> {
        let entity = entity::payment::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            parcel_id: ActiveValue::Set(params.parcel_id),
            email: ActiveValue::Set(params.email),
            amount: ActiveValue::Set(params.amount),
            payment_method: ActiveValue::Set(params.payment_method),
            transaction_id: ActiveValue::Set(params.transaction_id),
            paid_at: ActiveValue::Set(paid_at),
        }
        .insert(self.db)
        .await?;

        Ok(Payment::from_entity(entity))
    }

    /// Gets payments newest first, optionally restricted to one payer.
    pub async fn get_all(&self, email: Option<&str>) -> Result<Vec<Payment>, DbErr> {
        let mut query = entity::prelude::Payment::find();

        if let Some(email) = email {
            query = query.filter(Column::Email.eq(email));
        }

        let entities = query.order_by_desc(Column::PaidAt).all(self.db).await?;

        Ok(entities.into_iter().map(Payment::from_entity).collect())
    }

    /// Gets every payment recorded against one parcel.
    #[cfg(test)]
    pub async fn get_by_parcel_id(&self, parcel_id: Uuid) -> Result<Vec<Payment>, DbErr> {
        let entities = entity::prelude::Payment::find()
            .filter(Column::ParcelId.eq(parcel_id))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Payment::from_entity).collect())
    }

    /// Gets the most recent payments of one payer.
    pub async fn get_recent_by_email(&self, email: &str, limit: u64) -> Result<Vec<Payment>, DbErr> {
        let entities = entity::prelude::Payment::find()
            .filter(Column::Email.eq(email))
            .order_by_desc(Column::PaidAt)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Payment::from_entity).collect())
    }

    /// Counts and sums one payer's payments.
    ///
    /// # Returns
    /// - `Ok(PaymentSummary)` - Zero count and amount when the payer has no payments
    /// - `Err(DbErr)` - Database error during query
    pub async fn summary_by_email(&self, email: &str) -> Result<PaymentSummary, DbErr> {
        let total_payments = entity::prelude::Payment::find()
            .filter(Column::Email.eq(email))
            .count(self.db)
            .await?;

        let total_amount = entity::prelude::Payment::find()
            .select_only()
            .column_as(Column::Amount.sum(), "total")
            .filter(Column::Email.eq(email))
            .into_tuple::<Option<f64>>()
            .one(self.db)
            .await?
            .flatten()
            .unwrap_or(0.0);

        Ok(PaymentSummary {
            total_payments,
            total_amount,
        })
    }

    /// Counts all payments.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Payment::find().count(self.db).await
    }

    /// Sums the amount of every payment.
    pub async fn total_amount(&self) -> Result<f64, DbErr> {
        let total = entity::prelude::Payment::find()
            .select_only()
            .column_as(Column::Amount.sum(), "total")
            .into_tuple::<Option<f64>>()
            .one(self.db)
            .await?
            .flatten()
            .unwrap_or(0.0);

        Ok(total)
    }
}
