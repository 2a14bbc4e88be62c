use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::tracking::{CreateTrackingLogDto, TrackingLogDto},
    server::{error::AppError, util::parse::parse_id},
};

/// One append-only entry in a parcel's tracking history.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackingLog {
    pub id: Uuid,
    pub tracking_id: String,
    pub parcel_id: Option<Uuid>,
    pub status: String,
    pub message: Option<String>,
    pub updated_by: Option<String>,
    pub time: DateTime<Utc>,
}

impl TrackingLog {
    pub fn from_entity(entity: entity::tracking_log::Model) -> Self {
        Self {
            id: entity.id,
            tracking_id: entity.tracking_id,
            parcel_id: entity.parcel_id,
            status: entity.status,
            message: entity.message,
            updated_by: entity.updated_by,
            time: entity.time,
        }
    }

    pub fn into_dto(self) -> TrackingLogDto {
        TrackingLogDto {
            id: self.id,
            tracking_id: self.tracking_id,
            parcel_id: self.parcel_id,
            status: self.status,
            message: self.message,
            updated_by: self.updated_by,
            time: self.time,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTrackingLogParams {
    pub tracking_id: String,
    pub parcel_id: Option<Uuid>,
    pub status: String,
    pub message: Option<String>,
    pub updated_by: Option<String>,
}

impl CreateTrackingLogParams {
    pub fn from_dto(dto: CreateTrackingLogDto) -> Result<Self, AppError> {
        if dto.tracking_id.trim().is_empty() || dto.status.trim().is_empty() {
            return Err(AppError::BadRequest(
                "tracking_id and status are required".to_string(),
            ));
        }

        let parcel_id = dto.parcel_id.as_deref().map(parse_id).transpose()?;

        Ok(Self {
            tracking_id: dto.tracking_id,
            parcel_id,
            status: dto.status,
            message: dto.message,
            updated_by: dto.updated_by,
        })
    }
}
