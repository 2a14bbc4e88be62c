//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! collection of the delivery platform. Repositories use SeaORM entity models internally
//! and return domain models to keep the data layer separate from business logic.
//! Every repository is generic over `ConnectionTrait`, so services can run the same
//! queries on the pooled connection or inside a transaction.

pub mod parcel;
pub mod payment;
pub mod rider;
pub mod tracking;
pub mod user;

#[cfg(test)]
mod test;
