use sea_orm::DatabaseConnection;

use crate::server::{
    data::tracking::TrackingLogRepository,
    error::AppError,
    model::tracking::{CreateTrackingLogParams, TrackingLog},
};

pub struct TrackingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrackingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn append(&self, params: CreateTrackingLogParams) -> Result<TrackingLog, AppError> {
        Ok(TrackingLogRepository::new(self.db).create(params).await?)
    }

    /// History of a tracking id, oldest entry first. Empty when the id is unknown.
    pub async fn get_history(&self, tracking_id: &str) -> Result<Vec<TrackingLog>, AppError> {
        Ok(TrackingLogRepository::new(self.db)
            .get_by_tracking_id(tracking_id)
            .await?)
    }
}
