//! SeaORM entity definitions for the parcel delivery store.
//!
//! Each module maps one collection of the delivery platform onto a table. Free-form
//! document fields that have no dedicated column are kept in a JSON `details` column.

pub mod prelude;

pub mod parcel;
pub mod payment;
pub mod rider;
pub mod tracking_log;
pub mod user;
