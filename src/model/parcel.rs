use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use uuid::Uuid;

/// A parcel document as returned to clients.
///
/// Shipment fields submitted by the client that have no dedicated column are flattened
/// back into the top level of the document. Empty lifecycle fields are omitted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ParcelDto {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(rename = "createdBy", skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    pub payment_status: String,
    #[serde(rename = "deliveryStatus")]
    pub delivery_status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_rider_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_rider_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cashout_status: Option<String>,
    pub creation_time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picked_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivered_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cashed_out_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignRiderDto {
    pub rider_id: String,
    pub rider_name: String,
}

/// Outcome of the two independent writes performed by a rider assignment.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignRiderResultDto {
    pub parcel_modified_count: u64,
    pub rider_modified_count: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct UpdateParcelStatusDto {
    pub status: String,
}
