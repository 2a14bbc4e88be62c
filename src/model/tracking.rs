use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CreateTrackingLogDto {
    pub tracking_id: String,
    pub parcel_id: Option<String>,
    pub status: String,
    pub message: Option<String>,
    pub updated_by: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct TrackingLogDto {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub tracking_id: String,
    pub parcel_id: Option<Uuid>,
    pub status: String,
    pub message: Option<String>,
    pub updated_by: Option<String>,
    pub time: DateTime<Utc>,
}
