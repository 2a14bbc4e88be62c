//! Parcel domain models and parameters.
//!
//! A parcel document combines a fixed set of lifecycle fields, which the service manages
//! as typed columns, with arbitrary shipment fields submitted by the client. The
//! parameter types here split an incoming JSON object into those two parts.

use std::fmt;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::{
    model::parcel::{AssignRiderResultDto, ParcelDto},
    server::error::AppError,
};

pub const PAYMENT_STATUS_UNPAID: &str = "unpaid";
pub const PAYMENT_STATUS_PAID: &str = "paid";
pub const CASHOUT_STATUS_CASHED_OUT: &str = "cashed_out";

/// Document keys backed by dedicated columns rather than the free-form `details` map.
const MANAGED_KEYS: &[&str] = &[
    "_id",
    "createdBy",
    "payment_status",
    "deliveryStatus",
    "assigned_rider_id",
    "assigned_rider_name",
    "cashout_status",
    "creation_time",
    "picked_at",
    "delivered_at",
    "cashed_out_at",
];

/// Stage of a parcel in the delivery workflow.
///
/// The intended order is pending → rider_assigned → in_transit → delivered, but any
/// value is accepted; unrecognised values are kept verbatim in `Other`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DeliveryStatus {
    #[default]
    Pending,
    RiderAssigned,
    InTransit,
    Delivered,
    ServiceCenterDelivered,
    Other(String),
}

impl DeliveryStatus {
    /// Statuses of parcels a rider is currently working on.
    pub const ACTIVE: [DeliveryStatus; 2] = [DeliveryStatus::RiderAssigned, DeliveryStatus::InTransit];

    /// Statuses of parcels a rider has finished.
    pub const COMPLETED: [DeliveryStatus; 2] =
        [DeliveryStatus::Delivered, DeliveryStatus::ServiceCenterDelivered];

    pub fn parse(value: &str) -> Self {
        match value {
            "pending" => Self::Pending,
            "rider_assigned" => Self::RiderAssigned,
            "in_transit" => Self::InTransit,
            "delivered" => Self::Delivered,
            "service_center_delivered" => Self::ServiceCenterDelivered,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::RiderAssigned => "rider_assigned",
            Self::InTransit => "in_transit",
            Self::Delivered => "delivered",
            Self::ServiceCenterDelivered => "service_center_delivered",
            Self::Other(value) => value,
        }
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parcel with lifecycle state and free-form shipment fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Parcel {
    pub id: Uuid,
    /// Email of the sender who submitted the parcel.
    pub created_by: Option<String>,
    pub payment_status: String,
    pub delivery_status: DeliveryStatus,
    pub assigned_rider_id: Option<Uuid>,
    pub assigned_rider_name: Option<String>,
    pub cashout_status: Option<String>,
    /// Shipment fields without a dedicated column.
    pub details: Map<String, Value>,
    pub created_at: DateTime<Utc>,
    pub picked_at: Option<DateTime<Utc>>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub cashed_out_at: Option<DateTime<Utc>>,
}

impl Parcel {
    /// Converts an entity model to a parcel domain model at the repository boundary.
    ///
    /// A `details` column that does not hold a JSON object is read as empty.
    pub fn from_entity(entity: entity::parcel::Model) -> Self {
        Self {
            id: entity.id,
            created_by: entity.created_by,
            payment_status: entity.payment_status,
            delivery_status: DeliveryStatus::parse(&entity.delivery_status),
            assigned_rider_id: entity.assigned_rider_id,
            assigned_rider_name: entity.assigned_rider_name,
            cashout_status: entity.cashout_status,
            details: into_object(entity.details),
            created_at: entity.created_at,
            picked_at: entity.picked_at,
            delivered_at: entity.delivered_at,
            cashed_out_at: entity.cashed_out_at,
        }
    }

    /// Converts to the client document.
    ///
    /// A details key shadowed by a populated column is left out so the flattened
    /// document never carries the same key twice.
    pub fn into_dto(self) -> ParcelDto {
        let mut details = self.details;
        for (key, populated) in [
            ("createdBy", self.created_by.is_some()),
            ("assigned_rider_id", self.assigned_rider_id.is_some()),
            ("assigned_rider_name", self.assigned_rider_name.is_some()),
            ("cashout_status", self.cashout_status.is_some()),
            ("picked_at", self.picked_at.is_some()),
            ("delivered_at", self.delivered_at.is_some()),
            ("cashed_out_at", self.cashed_out_at.is_some()),
        ] {
            if populated {
                details.remove(key);
            }
        }

        ParcelDto {
            id: self.id,
            created_by: self.created_by,
            payment_status: self.payment_status,
            delivery_status: self.delivery_status.as_str().to_string(),
            assigned_rider_id: self.assigned_rider_id,
            assigned_rider_name: self.assigned_rider_name,
            cashout_status: self.cashout_status,
            creation_time: self.created_at,
            picked_at: self.picked_at,
            delivered_at: self.delivered_at,
            cashed_out_at: self.cashed_out_at,
            details,
        }
    }
}

/// Parameters for inserting a parcel from a client submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateParcelParams {
    pub created_by: Option<String>,
    pub delivery_status: DeliveryStatus,
    pub assigned_rider_id: Option<Uuid>,
    pub assigned_rider_name: Option<String>,
    pub cashout_status: Option<String>,
    pub picked_at: Option<DateTime<Utc>>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub cashed_out_at: Option<DateTime<Utc>>,
    pub details: Map<String, Value>,
}

impl CreateParcelParams {
    /// Splits a submitted parcel document into lifecycle fields and shipment fields.
    ///
    /// A lifecycle value that fits its column is moved there; one that does not, such as
    /// a numeric `createdBy` or an unparseable timestamp, stays in the details verbatim.
    /// The delivery status defaults to pending. `payment_status` may only be `"unpaid"`,
    /// since a parcel becomes paid exclusively by recording a payment. `_id` and
    /// `creation_time` are assigned by the server and dropped.
    ///
    /// # Returns
    /// - `Ok(CreateParcelParams)` - Payload accepted
    /// - `Err(AppError::BadRequest)` - `deliveryStatus` is not a string, or the payload
    ///   claims the parcel is already paid
    pub fn from_payload(mut payload: Map<String, Value>) -> Result<Self, AppError> {
        let delivery_status = optional_string(&payload, "deliveryStatus")?
            .map(|s| DeliveryStatus::parse(&s))
            .unwrap_or(DeliveryStatus::Pending);

        if let Some(status) = optional_string(&payload, "payment_status")? {
            if status != PAYMENT_STATUS_UNPAID {
                return Err(AppError::BadRequest(
                    "payment_status can only be changed by recording a payment".to_string(),
                ));
            }
        }

        let created_by = take_if(&mut payload, "createdBy", |v| v.as_str().map(str::to_string));
        let assigned_rider_id = take_if(&mut payload, "assigned_rider_id", |v| {
            v.as_str().and_then(|s| Uuid::parse_str(s).ok())
        });
        let assigned_rider_name = take_if(&mut payload, "assigned_rider_name", |v| {
            v.as_str().map(str::to_string)
        });
        let cashout_status =
            take_if(&mut payload, "cashout_status", |v| v.as_str().map(str::to_string));
        let picked_at = take_if(&mut payload, "picked_at", parse_timestamp);
        let delivered_at = take_if(&mut payload, "delivered_at", parse_timestamp);
        let cashed_out_at = take_if(&mut payload, "cashed_out_at", parse_timestamp);

        for key in ["_id", "payment_status", "deliveryStatus", "creation_time"] {
            payload.remove(key);
        }

        Ok(Self {
            created_by,
            delivery_status,
            assigned_rider_id,
            assigned_rider_name,
            cashout_status,
            picked_at,
            delivered_at,
            cashed_out_at,
            details: payload,
        })
    }
}

/// Parameters for a partial parcel update.
///
/// `None` leaves the column unchanged. `details` holds only the submitted shipment
/// fields; they are merged over the stored ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateParcelParams {
    pub created_by: Option<String>,
    pub delivery_status: Option<DeliveryStatus>,
    pub assigned_rider_id: Option<Uuid>,
    pub assigned_rider_name: Option<String>,
    pub cashout_status: Option<String>,
    pub picked_at: Option<DateTime<Utc>>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub cashed_out_at: Option<DateTime<Utc>>,
    pub details: Map<String, Value>,
}

impl UpdateParcelParams {
    /// Builds update parameters from a partial parcel document.
    ///
    /// `_id` and `creation_time` are immutable and ignored. `payment_status` is rejected.
    ///
    /// # Returns
    /// - `Ok(UpdateParcelParams)` - Payload accepted
    /// - `Err(AppError::BadRequest)` - A lifecycle field has the wrong type or format,
    ///   or the payload tries to change the payment status
    pub fn from_payload(mut payload: Map<String, Value>) -> Result<Self, AppError> {
        if payload.contains_key("payment_status") {
            return Err(AppError::BadRequest(
                "payment_status can only be changed by recording a payment".to_string(),
            ));
        }

        let assigned_rider_id = match optional_string(&payload, "assigned_rider_id")? {
            Some(id) => Some(
                Uuid::parse_str(&id)
                    .map_err(|_| AppError::BadRequest(format!("Invalid id: {}", id)))?,
            ),
            None => None,
        };

        let params = Self {
            created_by: optional_string(&payload, "createdBy")?,
            delivery_status: optional_string(&payload, "deliveryStatus")?
                .map(|s| DeliveryStatus::parse(&s)),
            assigned_rider_id,
            assigned_rider_name: optional_string(&payload, "assigned_rider_name")?,
            cashout_status: optional_string(&payload, "cashout_status")?,
            picked_at: optional_timestamp(&payload, "picked_at")?,
            delivered_at: optional_timestamp(&payload, "delivered_at")?,
            cashed_out_at: optional_timestamp(&payload, "cashed_out_at")?,
            details: Map::new(),
        };

        strip_managed_keys(&mut payload);

        Ok(Self {
            details: payload,
            ..params
        })
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Result of the parcel write and the rider work-status write of an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiderAssignment {
    pub parcel_modified: u64,
    pub rider_modified: u64,
}

impl RiderAssignment {
    pub fn into_dto(self) -> AssignRiderResultDto {
        AssignRiderResultDto {
            parcel_modified_count: self.parcel_modified,
            rider_modified_count: self.rider_modified,
        }
    }
}

/// Reads a JSON column as an object, treating anything else as empty.
pub fn into_object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn strip_managed_keys(payload: &mut Map<String, Value>) {
    for key in MANAGED_KEYS {
        payload.remove(*key);
    }
}

/// Reads an optional string field; `null` counts as absent.
fn optional_string(payload: &Map<String, Value>, key: &str) -> Result<Option<String>, AppError> {
    match payload.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(AppError::BadRequest(format!("{} must be a string", key))),
    }
}

fn optional_timestamp(
    payload: &Map<String, Value>,
    key: &str,
) -> Result<Option<DateTime<Utc>>, AppError> {
    optional_string(payload, key)?
        .map(|s| {
            DateTime::parse_from_rfc3339(&s)
                .map(|t| t.with_timezone(&Utc))
                .map_err(|_| AppError::BadRequest(format!("{} must be an RFC 3339 timestamp", key)))
        })
        .transpose()
}

fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(value.as_str()?).ok()?;

    Some(parsed.with_timezone(&Utc))
}

/// Removes `key` from the payload when `parse` accepts its value; otherwise leaves it.
fn take_if<T>(
    payload: &mut Map<String, Value>,
    key: &str,
    parse: impl Fn(&Value) -> Option<T>,
) -> Option<T> {
    let parsed = payload.get(key).and_then(parse)?;
    payload.remove(key);

    Some(parsed)
}
