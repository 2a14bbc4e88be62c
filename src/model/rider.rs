use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use uuid::Uuid;

/// A rider application. Any additional fields are stored and echoed back verbatim.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CreateRiderDto {
    pub email: String,
    pub name: String,
    pub district: String,
    pub status: Option<String>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RiderDto {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub district: String,
    pub status: String,
    pub work_status: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct UpdateRiderStatusDto {
    pub status: String,
    /// Email of the user account promoted when the rider becomes active.
    pub email: Option<String>,
}

/// Outcome of the rider status write and the optional user-role cascade.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RiderStatusResultDto {
    pub rider_modified_count: u64,
    pub user_modified_count: u64,
}
