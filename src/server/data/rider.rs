//! Rider data repository for database operations.
//!
//! Provides the `RiderRepository` for rider applications, approval status changes and
//! the work-status flag written when a parcel is assigned.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use serde_json::Value;
use uuid::Uuid;

use crate::server::model::rider::{
    CreateRiderParams, Rider, RIDER_STATUS_ACTIVE, WORK_STATUS_IDLE,
};

use entity::rider::Column;

pub struct RiderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RiderRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores a rider application with an idle work status.
    ///
    /// # Returns
    /// - `Ok(Rider)` - The inserted rider with its generated id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateRiderParams) -> Result<Rider, DbErr> {
        let entity = entity::rider::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            email: ActiveValue::Set(params.email),
            name: ActiveValue::Set(params.name),
            district: ActiveValue::Set(params.district),
            status: ActiveValue::Set(params.status),
            work_status: ActiveValue::Set(Some(WORK_STATUS_IDLE.to_string())),
            details: ActiveValue::Set(Value::Object(params.details)),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Rider::from_entity(entity))
    }

    #[cfg(test)]
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Rider>, DbErr> {
        let entity = entity::prelude::Rider::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Rider::from_entity))
    }

    /// Finds the rider record belonging to an email address.
    ///
    /// Email is not unique for riders; when an applicant applied more than once the most
    /// recent application wins.
    ///
    /// # Returns
    /// - `Ok(Some(Rider))` - Rider found
    /// - `Ok(None)` - No rider with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Rider>, DbErr> {
        let entity = entity::prelude::Rider::find()
            .filter(Column::Email.eq(email))
            .order_by_desc(Column::CreatedAt)
            .one(self.db)
            .await?;

        Ok(entity.map(Rider::from_entity))
    }

    /// Gets riders with the given approval status, newest applications first.
    pub async fn get_by_status(&self, status: &str) -> Result<Vec<Rider>, DbErr> {
        let entities = entity::prelude::Rider::find()
            .filter(Column::Status.eq(status))
            .order_by_desc(Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Rider::from_entity).collect())
    }

    /// Gets active riders serving a district, ordered by name.
    pub async fn get_active_in_district(&self, district: &str) -> Result<Vec<Rider>, DbErr> {
        let entities = entity::prelude::Rider::find()
            .filter(Column::District.eq(district))
            .filter(Column::Status.eq(RIDER_STATUS_ACTIVE))
            .order_by_asc(Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Rider::from_entity).collect())
    }

    /// Sets a rider's approval status.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of riders updated (0 or 1)
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_status(&self, id: Uuid, status: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Rider::update_many()
            .col_expr(Column::Status, Expr::value(status))
            .filter(Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Sets a rider's work status.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of riders updated (0 or 1)
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_work_status(&self, id: Uuid, work_status: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Rider::update_many()
            .col_expr(Column::WorkStatus, Expr::value(Some(work_status.to_string())))
            .filter(Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Rider::find().count(self.db).await
    }
}
