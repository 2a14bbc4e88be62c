//! Parcel factory for creating test parcel records.

use chrono::{DateTime, Utc};
use sea_orm::{prelude::Uuid, ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test parcels with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let parcel = ParcelFactory::new(&db)
///     .created_by("sender@example.com")
///     .payment_status("paid")
///     .build()
///     .await?;
/// ```
pub struct ParcelFactory<'a> {
    db: &'a DatabaseConnection,
    created_by: Option<String>,
    payment_status: String,
    delivery_status: String,
    assigned_rider_id: Option<Uuid>,
    assigned_rider_name: Option<String>,
    details: serde_json::Value,
    created_at: DateTime<Utc>,
    picked_at: Option<DateTime<Utc>>,
    delivered_at: Option<DateTime<Utc>>,
}

impl<'a> ParcelFactory<'a> {
    /// Creates a new ParcelFactory with default values.
    ///
    /// Defaults:
    /// - created_by: `None`
    /// - payment_status: `"unpaid"`
    /// - delivery_status: `"pending"`
    /// - details: `{ "title": "Parcel {n}" }`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            created_by: None,
            payment_status: "unpaid".to_string(),
            delivery_status: "pending".to_string(),
            assigned_rider_id: None,
            assigned_rider_name: None,
            details: serde_json::json!({ "title": format!("Parcel {}", next_id()) }),
            created_at: Utc::now(),
            picked_at: None,
            delivered_at: None,
        }
    }

    pub fn created_by(mut self, email: impl Into<String>) -> Self {
        self.created_by = Some(email.into());
        self
    }

    pub fn payment_status(mut self, status: impl Into<String>) -> Self {
        self.payment_status = status.into();
        self
    }

    pub fn delivery_status(mut self, status: impl Into<String>) -> Self {
        self.delivery_status = status.into();
        self
    }

    /// Records the parcel as assigned to the given rider.
    pub fn assigned_rider(mut self, rider_id: Uuid, rider_name: impl Into<String>) -> Self {
        self.assigned_rider_id = Some(rider_id);
        self.assigned_rider_name = Some(rider_name.into());
        self
    }

    pub fn details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn picked_at(mut self, picked_at: DateTime<Utc>) -> Self {
        self.picked_at = Some(picked_at);
        self
    }

    pub fn delivered_at(mut self, delivered_at: DateTime<Utc>) -> Self {
        self.delivered_at = Some(delivered_at);
        self
    }

    /// Builds and inserts the parcel entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::parcel::Model)` - Created parcel entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::parcel::Model, DbErr> {
        entity::parcel::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            created_by: ActiveValue::Set(self.created_by),
            payment_status: ActiveValue::Set(self.payment_status),
            delivery_status: ActiveValue::Set(self.delivery_status),
            assigned_rider_id: ActiveValue::Set(self.assigned_rider_id),
            assigned_rider_name: ActiveValue::Set(self.assigned_rider_name),
            cashout_status: ActiveValue::Set(None),
            details: ActiveValue::Set(self.details),
            created_at: ActiveValue::Set(self.created_at),
            picked_at: ActiveValue::Set(self.picked_at),
            delivered_at: ActiveValue::Set(self.delivered_at),
            cashed_out_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unpaid, pending parcel with default values.
pub async fn create_parcel(db: &DatabaseConnection) -> Result<entity::parcel::Model, DbErr> {
    ParcelFactory::new(db).build().await
}
