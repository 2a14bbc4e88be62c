use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Number of parcels sharing one delivery status.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct StatusCountDto {
    pub status: String,
    pub count: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsDto {
    pub total_parcels: u64,
    pub total_users: u64,
    pub total_riders: u64,
    pub total_payments: u64,
    pub total_revenue: f64,
    pub delivery_status_counts: Vec<StatusCountDto>,
}
