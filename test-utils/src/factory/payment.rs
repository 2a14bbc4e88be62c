//! Payment factory for creating test payment records.

use chrono::{DateTime, Utc};
use sea_orm::{prelude::Uuid, ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::{next_id, unique_email};

/// Factory for creating test payments with customizable fields.
pub struct PaymentFactory<'a> {
    db: &'a DatabaseConnection,
    parcel_id: Uuid,
    email: String,
    amount: f64,
    paid_at: DateTime<Utc>,
}

impl<'a> PaymentFactory<'a> {
    /// Creates a new PaymentFactory with default values.
    ///
    /// Defaults:
    /// - parcel_id: random, not backed by a parcel row
    /// - email: `"payer{n}@example.com"`
    /// - amount: `100.0`
    /// - paid_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            parcel_id: Uuid::new_v4(),
            email: unique_email("payer"),
            amount: 100.0,
            paid_at: Utc::now(),
        }
    }

    pub fn parcel_id(mut self, parcel_id: Uuid) -> Self {
        self.parcel_id = parcel_id;
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = amount;
        self
    }

    pub fn paid_at(mut self, paid_at: DateTime<Utc>) -> Self {
        self.paid_at = paid_at;
        self
    }

    /// Builds and inserts the payment entity into the database.
    pub async fn build(self) -> Result<entity::payment::Model, DbErr> {
        entity::payment::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            parcel_id: ActiveValue::Set(self.parcel_id),
            email: ActiveValue::Set(self.email),
            amount: ActiveValue::Set(self.amount),
            payment_method: ActiveValue::Set(Some("card".to_string())),
            transaction_id: ActiveValue::Set(Some(format!("txn_{}", next_id()))),
            paid_at: ActiveValue::Set(self.paid_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a payment with default values.
pub async fn create_payment(db: &DatabaseConnection) -> Result<entity::payment::Model, DbErr> {
    PaymentFactory::new(db).build().await
}
