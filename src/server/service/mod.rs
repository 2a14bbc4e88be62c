//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Lifecycle rules such as update-then-insert payment recording
//! - **Orchestration**: Coordinating writes that span two tables
//! - **Consistency**: Running those writes independently or in one transaction
//! - **External Collaborators**: Identity verification and payment intent creation

pub mod identity;
pub mod parcel;
pub mod payment;
pub mod payment_gateway;
pub mod report;
pub mod rider;
pub mod tracking;
pub mod user;
