//! Rider domain models and parameters.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::{
    model::rider::{CreateRiderDto, RiderDto, RiderStatusResultDto},
    server::{error::AppError, model::parcel::into_object},
};

pub const RIDER_STATUS_PENDING: &str = "pending";
pub const RIDER_STATUS_ACTIVE: &str = "active";

pub const WORK_STATUS_IDLE: &str = "idle";
pub const WORK_STATUS_IN_DELIVERY: &str = "in_delivery";

/// Keys of a rider application backed by dedicated columns.
const MANAGED_KEYS: &[&str] = &["_id", "work_status", "created_at"];

#[derive(Debug, Clone, PartialEq)]
pub struct Rider {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub district: String,
    /// Approval state, `pending` until an admin activates the rider.
    pub status: String,
    /// `idle` or `in_delivery`; unset until the rider is first assigned.
    pub work_status: Option<String>,
    pub details: Map<String, Value>,
    pub created_at: DateTime<Utc>,
}

impl Rider {
    pub fn from_entity(entity: entity::rider::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            district: entity.district,
            status: entity.status,
            work_status: entity.work_status,
            details: into_object(entity.details),
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> RiderDto {
        RiderDto {
            id: self.id,
            email: self.email,
            name: self.name,
            district: self.district,
            status: self.status,
            work_status: self.work_status,
            created_at: self.created_at,
            details: self.details,
        }
    }
}

/// Parameters for storing a rider application.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateRiderParams {
    pub email: String,
    pub name: String,
    pub district: String,
    pub status: String,
    pub details: Map<String, Value>,
}

impl CreateRiderParams {
    /// Converts a rider application into parameters.
    ///
    /// The status defaults to `pending` when the applicant does not send one.
    ///
    /// # Returns
    /// - `Ok(CreateRiderParams)` - Application accepted
    /// - `Err(AppError::BadRequest)` - Email, name or district is blank
    pub fn from_dto(dto: CreateRiderDto) -> Result<Self, AppError> {
        for (field, value) in [
            ("email", &dto.email),
            ("name", &dto.name),
            ("district", &dto.district),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::BadRequest(format!("{} is required", field)));
            }
        }

        let mut details = dto.details;
        for key in MANAGED_KEYS {
            details.remove(*key);
        }

        Ok(Self {
            email: dto.email,
            name: dto.name,
            district: dto.district,
            status: dto
                .status
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| RIDER_STATUS_PENDING.to_string()),
            details,
        })
    }
}

/// Parameters for changing a rider's approval status.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateRiderStatusParams {
    pub rider_id: Uuid,
    pub status: String,
    /// Account promoted to the rider role when the new status is `active`.
    pub email: Option<String>,
}

impl UpdateRiderStatusParams {
    pub fn promotes_user(&self) -> Option<&str> {
        if self.status == RIDER_STATUS_ACTIVE {
            self.email.as_deref().filter(|e| !e.is_empty())
        } else {
            None
        }
    }
}

/// Result of the rider status write and the optional user-role write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiderStatusChange {
    pub rider_modified: u64,
    pub user_modified: u64,
}

impl RiderStatusChange {
    pub fn into_dto(self) -> RiderStatusResultDto {
        RiderStatusResultDto {
            rider_modified_count: self.rider_modified,
            user_modified_count: self.user_modified,
        }
    }
}
