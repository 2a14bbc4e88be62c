//! Aggregated reporting models.

use crate::model::report::{DashboardStatsDto, StatusCountDto};

/// Number of parcels with one delivery status.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusCount {
    pub status: String,
    pub count: u64,
}

impl StatusCount {
    pub fn from_row((status, count): (String, i64)) -> Self {
        Self {
            status,
            count: count.max(0) as u64,
        }
    }

    pub fn into_dto(self) -> StatusCountDto {
        StatusCountDto {
            status: self.status,
            count: self.count,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub total_parcels: u64,
    pub total_users: u64,
    pub total_riders: u64,
    pub total_payments: u64,
    pub total_revenue: f64,
    pub delivery_status_counts: Vec<StatusCount>,
}

impl DashboardStats {
    pub fn into_dto(self) -> DashboardStatsDto {
        DashboardStatsDto {
            total_parcels: self.total_parcels,
            total_users: self.total_users,
            total_riders: self.total_riders,
            total_payments: self.total_payments,
            total_revenue: self.total_revenue,
            delivery_status_counts: self
                .delivery_status_counts
                .into_iter()
                .map(StatusCount::into_dto)
                .collect(),
        }
    }
}
