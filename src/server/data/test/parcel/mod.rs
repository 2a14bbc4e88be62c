use chrono::{Duration, Utc};
use sea_orm::DbErr;
use serde_json::{json, Map, Value};
use test_utils::{builder::TestBuilder, factory::parcel::ParcelFactory};
use uuid::Uuid;

use crate::server::{
    data::parcel::ParcelRepository,
    model::parcel::{CreateParcelParams, DeliveryStatus, UpdateParcelParams},
};

mod assign_rider;
mod count_by_status;
mod create;
mod get_all;
mod get_for_rider;
mod mark_paid;
mod update;
mod update_delivery_status;

fn details(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
