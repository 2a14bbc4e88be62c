//! Rider factory for creating test rider applications.

use chrono::Utc;
use sea_orm::{prelude::Uuid, ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::{next_id, unique_email};

/// Factory for creating test riders with customizable fields.
pub struct RiderFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    name: String,
    district: String,
    status: String,
    work_status: Option<String>,
}

impl<'a> RiderFactory<'a> {
    /// Creates a new RiderFactory with default values.
    ///
    /// Defaults:
    /// - email: `"rider{n}@example.com"`
    /// - name: `"Rider {n}"`
    /// - district: `"Dhaka"`
    /// - status: `"pending"`
    /// - work_status: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            email: unique_email("rider"),
            name: format!("Rider {}", next_id()),
            district: "Dhaka".to_string(),
            status: "pending".to_string(),
            work_status: None,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn district(mut self, district: impl Into<String>) -> Self {
        self.district = district.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn work_status(mut self, work_status: impl Into<String>) -> Self {
        self.work_status = Some(work_status.into());
        self
    }

    /// Builds and inserts the rider entity into the database.
    pub async fn build(self) -> Result<entity::rider::Model, DbErr> {
        entity::rider::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            email: ActiveValue::Set(self.email),
            name: ActiveValue::Set(self.name),
            district: ActiveValue::Set(self.district),
            status: ActiveValue::Set(self.status),
            work_status: ActiveValue::Set(self.work_status),
            details: ActiveValue::Set(serde_json::json!({})),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending rider with default values.
pub async fn create_rider(db: &DatabaseConnection) -> Result<entity::rider::Model, DbErr> {
    RiderFactory::new(db).build().await
}
