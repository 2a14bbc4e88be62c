//! Domain models and operation parameter types.
//!
//! Repositories convert SeaORM entity models into these types at the data boundary and
//! controllers convert them into wire DTOs. Parameter types (`*Params`) carry validated
//! input from a controller down to the service and data layers.

pub mod parcel;
pub mod payment;
pub mod report;
pub mod rider;
pub mod tracking;
pub mod user;
