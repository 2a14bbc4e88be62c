use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use crate::server::model::tracking::{CreateTrackingLogParams, TrackingLog};

use entity::tracking_log::Column;

/// Repository for the append-only tracking log.
pub struct TrackingLogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TrackingLogRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends a tracking entry stamped with the current time.
    pub async fn create(&self, params: CreateTrackingLogParams) -> Result<TrackingLog, DbErr> {
        let entity = entity::tracking_log::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            tracking_id: ActiveValue::Set(params.tracking_id),
            parcel_id: ActiveValue::Set(params.parcel_id),
            status: ActiveValue::Set(params.status),
            message: ActiveValue::Set(params.message),
            updated_by: ActiveValue::Set(params.updated_by),
            time: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(TrackingLog::from_entity(entity))
    }

    /// Gets the history of one tracking id, oldest entry first.
    pub async fn get_by_tracking_id(&self, tracking_id: &str) -> Result<Vec<TrackingLog>, DbErr> {
        let entities = entity::prelude::TrackingLog::find()
            .filter(Column::TrackingId.eq(tracking_id))
            .order_by_asc(Column::Time)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(TrackingLog::from_entity).collect())
    }
}
