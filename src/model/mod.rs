//! Wire-level DTOs shared by every HTTP endpoint.
//!
//! These types define the JSON documents exchanged with the client application. Server
//! domain models convert into them at the controller boundary.

pub mod api;
pub mod parcel;
pub mod payment;
pub mod report;
pub mod rider;
pub mod tracking;
pub mod user;
