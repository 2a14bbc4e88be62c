//! HTTP request handlers.
//!
//! Each handler checks access with `AuthGuard` where the route requires it, converts the
//! request DTO into domain parameters, calls one service and converts the result back
//! into a response DTO.

pub mod health;
pub mod parcel;
pub mod payment;
pub mod report;
pub mod rider;
pub mod tracking;
pub mod user;

use serde::Deserialize;

/// `?email=` query used by the per-user and per-rider endpoints.
#[derive(Deserialize, Debug, Default)]
pub struct EmailQuery {
    pub email: Option<String>,
}

#[cfg(test)]
mod test;
