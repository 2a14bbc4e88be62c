//! Parcel data repository for database operations.
//!
//! This module provides the `ParcelRepository` for managing parcel records. Besides plain
//! CRUD it implements the single-statement lifecycle writes (rider assignment, status
//! transitions, cash-out and the conditional payment flag) and the per-status
//! aggregations used by the reporting endpoints.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::server::model::{
    parcel::{
        CreateParcelParams, DeliveryStatus, Parcel, UpdateParcelParams, CASHOUT_STATUS_CASHED_OUT,
        PAYMENT_STATUS_PAID, PAYMENT_STATUS_UNPAID,
    },
    report::StatusCount,
};

use entity::parcel::Column;

/// Repository providing database operations for parcels.
///
/// Generic over the connection so the same queries run on the pooled connection or
/// inside a transaction.
pub struct ParcelRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ParcelRepository<'a, C> {
    /// Creates a new ParcelRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    ///
    /// # Returns
    /// - `ParcelRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new unpaid parcel stamped with the current time.
    ///
    /// # Arguments
    /// - `params` - Submitted lifecycle columns and shipment fields
    ///
    /// # Returns
    /// - `Ok(Parcel)` - The inserted parcel with its generated id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateParcelParams) -> Result<Parcel, DbErr> {
        let entity = entity::parcel::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            created_by: ActiveValue::Set(params.created_by),
            payment_status: ActiveValue::Set(PAYMENT_STATUS_UNPAID.to_string()),
            delivery_status: ActiveValue::Set(params.delivery_status.as_str().to_string()),
            assigned_rider_id: ActiveValue::Set(params.assigned_rider_id),
            assigned_rider_name: ActiveValue::Set(params.assigned_rider_name),
            cashout_status: ActiveValue::Set(params.cashout_status),
            details: ActiveValue::Set(Value::Object(params.details)),
            created_at: ActiveValue::Set(Utc::now()),
            picked_at: ActiveValue::Set(params.picked_at),
            delivered_at: ActiveValue::Set(params.delivered_at),
            cashed_out_at: ActiveValue::Set(params.cashed_out_at),
        }
        .insert(self.db)
        .await?;

        Ok(Parcel::from_entity(entity))
    }

    /// Finds a parcel by id.
    ///
    /// # Returns
    /// - `Ok(Some(Parcel))` - Parcel found
    /// - `Ok(None)` - No parcel with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Parcel>, DbErr> {
        let entity = entity::prelude::Parcel::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Parcel::from_entity))
    }

    /// Gets all parcels, newest first, optionally restricted to one creator.
    ///
    /// # Arguments
    /// - `created_by` - Creator email to filter by, or `None` for every parcel
    ///
    /// # Returns
    /// - `Ok(Vec<Parcel>)` - Matching parcels ordered by creation time descending
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self, created_by: Option<&str>) -> Result<Vec<Parcel>, DbErr> {
        let mut query = entity::prelude::Parcel::find();

        if let Some(email) = created_by {
            query = query.filter(Column::CreatedBy.eq(email));
        }

        let entities = query.order_by_desc(Column::CreatedAt).all(self.db).await?;

        Ok(entities.into_iter().map(Parcel::from_entity).collect())
    }

    /// Applies a partial update to one parcel in a single statement.
    ///
    /// Only the `Some` fields of `params` are written. Each key of `params.details`
    /// replaces the stored key of the same name; stored keys not named are kept. The
    /// merge runs inside the database, so concurrent updates of different keys never
    /// overwrite each other. A `null` value removes the key.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of parcels updated (0 or 1)
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: Uuid, params: UpdateParcelParams) -> Result<u64, DbErr> {
        fn set_if<T: Into<sea_orm::Value>>(value: Option<T>) -> ActiveValue<T> {
            match value {
                Some(v) => ActiveValue::Set(v),
                None => ActiveValue::NotSet,
            }
        }

        let active = entity::parcel::ActiveModel {
            created_by: set_if(params.created_by.map(Some)),
            delivery_status: set_if(params.delivery_status.map(|s| s.as_str().to_string())),
            assigned_rider_id: set_if(params.assigned_rider_id.map(Some)),
            assigned_rider_name: set_if(params.assigned_rider_name.map(Some)),
            cashout_status: set_if(params.cashout_status.map(Some)),
            picked_at: set_if(params.picked_at.map(Some)),
            delivered_at: set_if(params.delivered_at.map(Some)),
            cashed_out_at: set_if(params.cashed_out_at.map(Some)),
            ..Default::default()
        };

        let mut update = entity::prelude::Parcel::update_many().set(active);

        if !params.details.is_empty() {
            // Clearing the submitted keys first keeps nested objects from being deep-merged.
            let cleared: Map<String, Value> = params
                .details
                .keys()
                .map(|key| (key.clone(), Value::Null))
                .collect();

            update = update.col_expr(
                Column::Details,
                Expr::cust_with_values(
                    "json_patch(json_patch(details, ?), ?)",
                    [
                        Value::Object(cleared).to_string(),
                        Value::Object(params.details).to_string(),
                    ],
                ),
            );
        }

        let result = update.filter(Column::Id.eq(id)).exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Deletes a parcel by id.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of parcels deleted; 0 when the id matched nothing
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Parcel::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Marks a parcel as assigned to a rider.
    ///
    /// Sets the delivery status to `rider_assigned` and records the rider reference.
    /// The rider's own work status is a separate write owned by the rider repository.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of parcels updated (0 or 1)
    /// - `Err(DbErr)` - Database error during update
    pub async fn assign_rider(
        &self,
        id: Uuid,
        rider_id: Uuid,
        rider_name: &str,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Parcel::update_many()
            .col_expr(
                Column::DeliveryStatus,
                Expr::value(DeliveryStatus::RiderAssigned.as_str()),
            )
            .col_expr(Column::AssignedRiderId, Expr::value(Some(rider_id)))
            .col_expr(Column::AssignedRiderName, Expr::value(rider_name))
            .filter(Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Sets a parcel's delivery status.
    ///
    /// Stamps `picked_at` on a transition to `in_transit` and `delivered_at` on a
    /// transition to `delivered`; other timestamps are left untouched. The transition is
    /// not checked against the current status.
    ///
    /// # Arguments
    /// - `id` - Parcel id
    /// - `status` - New delivery status
    /// - `now` - Timestamp recorded for the transition
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of parcels updated (0 or 1)
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_delivery_status(
        &self,
        id: Uuid,
        status: &DeliveryStatus,
        now: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        let mut update = entity::prelude::Parcel::update_many()
            .col_expr(Column::DeliveryStatus, Expr::value(status.as_str()));

        match status {
            DeliveryStatus::InTransit => {
                update = update.col_expr(Column::PickedAt, Expr::value(Some(now)));
            }
            DeliveryStatus::Delivered => {
                update = update.col_expr(Column::DeliveredAt, Expr::value(Some(now)));
            }
            _ => {}
        }

        let result = update.filter(Column::Id.eq(id)).exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Marks a parcel as cashed out at the given time.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of parcels updated (0 or 1)
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_cashed_out(&self, id: Uuid, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::Parcel::update_many()
            .col_expr(Column::CashoutStatus, Expr::value(CASHOUT_STATUS_CASHED_OUT))
            .col_expr(Column::CashedOutAt, Expr::value(Some(now)))
            .filter(Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Flips a parcel's payment status to paid unless it already is.
    ///
    /// The status check and the write are one statement, so two concurrent payments for
    /// the same parcel cannot both succeed.
    ///
    /// # Returns
    /// - `Ok(1)` - Parcel was unpaid and is now paid
    /// - `Ok(0)` - Parcel does not exist or was already paid
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_paid(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Parcel::update_many()
            .col_expr(Column::PaymentStatus, Expr::value(PAYMENT_STATUS_PAID))
            .filter(Column::Id.eq(id))
            .filter(Column::PaymentStatus.ne(PAYMENT_STATUS_PAID))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets a rider's parcels that are still being worked on, newest first.
    pub async fn get_active_for_rider(&self, rider_id: Uuid) -> Result<Vec<Parcel>, DbErr> {
        let entities = entity::prelude::Parcel::find()
            .filter(Column::AssignedRiderId.eq(rider_id))
            .filter(Column::DeliveryStatus.is_in(status_strings(&DeliveryStatus::ACTIVE)))
            .order_by_desc(Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Parcel::from_entity).collect())
    }

    /// Gets a rider's finished parcels, most recently delivered first.
    pub async fn get_completed_for_rider(&self, rider_id: Uuid) -> Result<Vec<Parcel>, DbErr> {
        let entities = entity::prelude::Parcel::find()
            .filter(Column::AssignedRiderId.eq(rider_id))
            .filter(Column::DeliveryStatus.is_in(status_strings(&DeliveryStatus::COMPLETED)))
            .order_by_desc(Column::DeliveredAt)
            .order_by_desc(Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Parcel::from_entity).collect())
    }

    /// Gets the most recent parcels submitted by one creator.
    ///
    /// # Arguments
    /// - `created_by` - Creator email
    /// - `limit` - Maximum number of parcels returned
    pub async fn get_recent_by_creator(
        &self,
        created_by: &str,
        limit: u64,
    ) -> Result<Vec<Parcel>, DbErr> {
        let entities = entity::prelude::Parcel::find()
            .filter(Column::CreatedBy.eq(created_by))
            .order_by_desc(Column::CreatedAt)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Parcel::from_entity).collect())
    }

    /// Counts every parcel grouped by delivery status.
    ///
    /// # Returns
    /// - `Ok(Vec<StatusCount>)` - One entry per distinct status, ordered by status
    /// - `Err(DbErr)` - Database error during query
    pub async fn count_by_status(&self) -> Result<Vec<StatusCount>, DbErr> {
        self.count_by_status_where(Condition::all()).await
    }

    /// Counts the parcels carrying a rider name, grouped by delivery status.
    pub async fn count_by_status_for_rider_name(
        &self,
        rider_name: &str,
    ) -> Result<Vec<StatusCount>, DbErr> {
        self.count_by_status_where(
            Condition::all().add(Column::AssignedRiderName.eq(rider_name)),
        )
        .await
    }

    /// Counts one creator's paid parcels grouped by delivery status.
    pub async fn count_paid_by_status_for_creator(
        &self,
        created_by: &str,
    ) -> Result<Vec<StatusCount>, DbErr> {
        self.count_by_status_where(
            Condition::all()
                .add(Column::CreatedBy.eq(created_by))
                .add(Column::PaymentStatus.eq(PAYMENT_STATUS_PAID)),
        )
        .await
    }

    /// Counts all parcels.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Parcel::find().count(self.db).await
    }

    async fn count_by_status_where(&self, condition: Condition) -> Result<Vec<StatusCount>, DbErr> {
        let rows = entity::prelude::Parcel::find()
            .select_only()
            .column(Column::DeliveryStatus)
            .column_as(Column::Id.count(), "count")
            .filter(condition)
            .group_by(Column::DeliveryStatus)
            .order_by_asc(Column::DeliveryStatus)
            .into_tuple::<(String, i64)>()
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(StatusCount::from_row).collect())
    }
}

fn status_strings(statuses: &[DeliveryStatus]) -> Vec<String> {
    statuses.iter().map(|s| s.as_str().to_string()).collect()
}
